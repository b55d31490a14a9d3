//! Wire contract of the "Add New" dialogs attached to select fields.
//!
//! The frontend posts the dialog form as multipart/form-data and gets a
//! [`CreateResponse`] envelope back; [`interpret_response`] decides whether the
//! answer may be injected into the select field.

mod envelope;
mod error;
mod record;
mod result;

pub use envelope::{push_field_error, CreateResponse, FieldErrors};
pub use error::InlineCreateError;
pub use record::{CreatedRecord, RecordId, SelectOption};
pub use result::{interpret_response, SubmissionResult};
