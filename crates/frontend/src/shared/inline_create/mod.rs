//! "Add New" dialogs bound to select fields.
//!
//! A dialog creates the related record through its own endpoint and the new
//! record is appended to the select as a selected option, without reloading
//! the page. [`InlineCreateSession`] keeps the bindings; [`InlineCreateSelect`]
//! is the ready-made component.

pub mod component;
pub mod dialog;
pub mod field;
pub mod form;
pub mod notifier;
pub mod session;
pub mod transport;
pub mod widgets;

pub use component::{CreateDialogView, InlineCreateSelect};
pub use dialog::{CreateDialog, DialogId, DialogWidget};
pub use field::{FieldId, SelectField, SelectWidget};
pub use form::{CreateForm, FieldKind, FileUpload, FormFieldSpec, FormHandle, FormPayload, FormValue};
pub use notifier::{AlertNotifier, Notifier};
pub use session::{BindOutcome, InlineCreateSession};
pub use transport::{FetchTransport, SubmitTransport, TransportResponse};
pub use widgets::{SignalDialog, SignalForm, SignalSelect};
