use super::form::FormHandle;
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DialogId(pub String);

impl DialogId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }
}

impl fmt::Display for DialogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Modal surface of a create dialog.
pub trait DialogWidget: Send + Sync {
    fn show(&self);
    fn hide(&self);
    fn is_visible(&self) -> bool;
}

/// A modal hosting the form that creates a related record.
#[derive(Clone)]
pub struct CreateDialog {
    pub id: DialogId,
    pub title: String,
    /// Endpoint the form is posted to
    pub target_url: String,
    pub widget: Arc<dyn DialogWidget>,
    pub form: Arc<dyn FormHandle>,
}

impl CreateDialog {
    pub fn new(
        id: DialogId,
        title: impl Into<String>,
        target_url: impl Into<String>,
        widget: Arc<dyn DialogWidget>,
        form: Arc<dyn FormHandle>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            target_url: target_url.into(),
            widget,
            form,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.widget.is_visible()
    }
}

impl fmt::Debug for CreateDialog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateDialog")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("target_url", &self.target_url)
            .field("visible", &self.widget.is_visible())
            .finish()
    }
}
