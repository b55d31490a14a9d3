/// Input kind of a create-form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Color,
    Textarea,
    /// `<input type="file">`; `accept` is passed through to the element
    File { accept: &'static str },
}

impl FieldKind {
    pub fn is_file(&self) -> bool {
        matches!(self, Self::File { .. })
    }

    /// `type` attribute of the `<input>`
    pub fn input_type(&self) -> &'static str {
        match self {
            Self::Text | Self::Textarea => "text",
            Self::Email => "email",
            Self::Tel => "tel",
            Self::Color => "color",
            Self::File { .. } => "file",
        }
    }
}

/// Declares one input of a create dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormFieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FormFieldSpec {
    pub const fn text(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Text,
            required: false,
        }
    }

    pub const fn with_kind(mut self, kind: FieldKind) -> Self {
        self.kind = kind;
        self
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// File picked in a file input, already read into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormValue {
    Text(String),
    File(Option<FileUpload>),
}

impl FormValue {
    fn empty_for(kind: FieldKind) -> Self {
        if kind.is_file() {
            Self::File(None)
        } else {
            Self::Text(String::new())
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(s) => s.is_empty(),
            Self::File(f) => f.is_none(),
        }
    }
}

/// Snapshot of the form values, in declaration order, ready to be posted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormPayload {
    pub parts: Vec<(String, FormValue)>,
}

impl FormPayload {
    pub fn text(&self, name: &str) -> Option<&str> {
        self.parts.iter().find_map(|(n, v)| match v {
            FormValue::Text(s) if n == name => Some(s.as_str()),
            _ => None,
        })
    }

    pub fn file(&self, name: &str) -> Option<&FileUpload> {
        self.parts.iter().find_map(|(n, v)| match v {
            FormValue::File(Some(f)) if n == name => Some(f),
            _ => None,
        })
    }
}

/// Values of the form inside a create dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateForm {
    specs: Vec<FormFieldSpec>,
    values: Vec<FormValue>,
}

impl CreateForm {
    pub fn new(specs: &[FormFieldSpec]) -> Self {
        Self {
            specs: specs.to_vec(),
            values: specs.iter().map(|s| FormValue::empty_for(s.kind)).collect(),
        }
    }

    pub fn specs(&self) -> &[FormFieldSpec] {
        &self.specs
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.specs.iter().position(|s| s.name == name)
    }

    pub fn value(&self, name: &str) -> Option<&FormValue> {
        self.index_of(name).map(|i| &self.values[i])
    }

    /// Text of a text-like field; empty for unknown names and file fields.
    pub fn text(&self, name: &str) -> &str {
        match self.value(name) {
            Some(FormValue::Text(s)) => s.as_str(),
            _ => "",
        }
    }

    pub fn file(&self, name: &str) -> Option<&FileUpload> {
        match self.value(name) {
            Some(FormValue::File(f)) => f.as_ref(),
            _ => None,
        }
    }

    /// Returns `false` when `name` is not a text field of this form.
    pub fn set_text(&mut self, name: &str, value: impl Into<String>) -> bool {
        match self.index_of(name) {
            Some(i) if !self.specs[i].kind.is_file() => {
                self.values[i] = FormValue::Text(value.into());
                true
            }
            _ => false,
        }
    }

    /// Returns `false` when `name` is not a file field of this form.
    pub fn set_file(&mut self, name: &str, file: Option<FileUpload>) -> bool {
        match self.index_of(name) {
            Some(i) if self.specs[i].kind.is_file() => {
                self.values[i] = FormValue::File(file);
                true
            }
            _ => false,
        }
    }

    /// Every field back to its empty default.
    pub fn reset(&mut self) {
        for (spec, value) in self.specs.iter().zip(self.values.iter_mut()) {
            *value = FormValue::empty_for(spec.kind);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.iter().all(FormValue::is_empty)
    }

    /// Names of required fields that are still blank.
    pub fn missing_required(&self) -> Vec<&'static str> {
        self.specs
            .iter()
            .zip(&self.values)
            .filter(|(spec, value)| {
                spec.required
                    && match value {
                        FormValue::Text(s) => s.trim().is_empty(),
                        FormValue::File(f) => f.is_none(),
                    }
            })
            .map(|(spec, _)| spec.name)
            .collect()
    }

    pub fn payload(&self) -> FormPayload {
        FormPayload {
            parts: self
                .specs
                .iter()
                .zip(&self.values)
                .map(|(spec, value)| (spec.name.to_string(), value.clone()))
                .collect(),
        }
    }
}

/// The form of a create dialog as seen by the workflow.
pub trait FormHandle: Send + Sync {
    fn payload(&self) -> FormPayload;
    fn reset(&self);
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPECS: &[FormFieldSpec] = &[
        FormFieldSpec::text("name", "Name").required(),
        FormFieldSpec::text("email", "Email").with_kind(FieldKind::Email),
        FormFieldSpec::text("logo", "Logo").with_kind(FieldKind::File { accept: "image/*" }),
    ];

    fn logo() -> FileUpload {
        FileUpload {
            name: "logo.png".into(),
            content_type: "image/png".into(),
            bytes: vec![1, 2, 3],
        }
    }

    #[test]
    fn test_new_form_is_empty() {
        let form = CreateForm::new(SPECS);
        assert!(form.is_empty());
        assert_eq!(form.text("name"), "");
        assert_eq!(form.missing_required(), vec!["name"]);
    }

    #[test]
    fn test_setters_respect_field_kind() {
        let mut form = CreateForm::new(SPECS);
        assert!(form.set_text("name", "Acme"));
        assert!(!form.set_text("logo", "oops"));
        assert!(!form.set_text("unknown", "x"));
        assert!(form.set_file("logo", Some(logo())));
        assert!(!form.set_file("name", Some(logo())));

        assert_eq!(form.text("name"), "Acme");
        assert_eq!(form.file("logo"), Some(&logo()));
        assert!(form.missing_required().is_empty());
    }

    #[test]
    fn test_payload_keeps_declaration_order_and_files() {
        let mut form = CreateForm::new(SPECS);
        form.set_text("email", "info@acme.test");
        form.set_text("name", "Acme");
        form.set_file("logo", Some(logo()));

        let payload = form.payload();
        let names: Vec<&str> = payload.parts.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["name", "email", "logo"]);
        assert_eq!(payload.text("email"), Some("info@acme.test"));
        assert_eq!(payload.file("logo").map(|f| f.bytes.len()), Some(3));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut form = CreateForm::new(SPECS);
        form.set_text("name", "Acme");
        form.set_file("logo", Some(logo()));
        form.reset();
        assert!(form.is_empty());
        assert_eq!(form, CreateForm::new(SPECS));
    }
}
