use contracts::shared::inline_create::SelectOption;
use std::fmt;

/// Identity of a select field on the page (its DOM id).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldId(pub String);

impl FieldId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// State of a single- or multi-value select.
///
/// Option values are unique and every selected value is one of the options.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectField {
    id: FieldId,
    options: Vec<SelectOption>,
    selected: Vec<String>,
    is_multiple: bool,
}

impl SelectField {
    pub fn single(id: impl Into<String>) -> Self {
        Self::new(FieldId::new(id), false)
    }

    pub fn multiple(id: impl Into<String>) -> Self {
        Self::new(FieldId::new(id), true)
    }

    pub fn new(id: FieldId, is_multiple: bool) -> Self {
        Self {
            id,
            options: Vec::new(),
            selected: Vec::new(),
            is_multiple,
        }
    }

    /// Builder: initial options; duplicate values keep the first occurrence.
    pub fn with_options(mut self, options: impl IntoIterator<Item = SelectOption>) -> Self {
        self.replace_options(options);
        self
    }

    pub fn id(&self) -> &FieldId {
        &self.id
    }

    pub fn is_multiple(&self) -> bool {
        self.is_multiple
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn selected_values(&self) -> &[String] {
        &self.selected
    }

    /// First selected value; the value of a single-value field.
    pub fn value(&self) -> Option<&str> {
        self.selected.first().map(String::as_str)
    }

    pub fn is_selected(&self, value: &str) -> bool {
        self.selected.iter().any(|v| v == value)
    }

    pub fn has_option(&self, value: &str) -> bool {
        self.options.iter().any(|o| o.value == value)
    }

    /// Replaces the option list (e.g. after loading from the API) and drops
    /// selections that no longer exist.
    pub fn replace_options(&mut self, options: impl IntoIterator<Item = SelectOption>) {
        self.options.clear();
        for option in options {
            if !self.has_option(&option.value) {
                self.options.push(option);
            }
        }
        let options = &self.options;
        self.selected
            .retain(|v| options.iter().any(|o| &o.value == v));
    }

    /// Selects an existing option. Single-value fields replace their
    /// selection, multi-value fields add to it. Unknown values are ignored.
    pub fn select(&mut self, value: &str) -> bool {
        if !self.has_option(value) {
            return false;
        }
        if self.is_multiple {
            if !self.is_selected(value) {
                self.selected.push(value.to_string());
            }
        } else {
            self.selected = vec![value.to_string()];
        }
        true
    }

    pub fn deselect(&mut self, value: &str) {
        self.selected.retain(|v| v != value);
    }

    /// Takes the selection reported by the `<select>` element.
    pub fn set_selection<I, S>(&mut self, values: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.selected.clear();
        for value in values {
            let value = value.as_ref();
            if value.is_empty() {
                continue;
            }
            self.select(value);
        }
    }

    /// Appends `option` and marks it selected.
    ///
    /// If the value already exists its label is refreshed instead of adding a
    /// duplicate.
    pub fn append_selected(&mut self, option: SelectOption) {
        let value = option.value.clone();
        match self.options.iter_mut().find(|o| o.value == option.value) {
            Some(existing) => existing.label = option.label,
            None => self.options.push(option),
        }
        self.select(&value);
    }
}

/// Select widget the workflow writes the created record into.
///
/// Implementations must notify observers when the selection changes.
pub trait SelectWidget: Send + Sync {
    fn field_id(&self) -> FieldId;
    fn options(&self) -> Vec<SelectOption>;
    fn is_multiple(&self) -> bool;
    /// Append a new option marked selected (see [`SelectField::append_selected`]).
    fn append_selected(&self, option: SelectOption);
}
