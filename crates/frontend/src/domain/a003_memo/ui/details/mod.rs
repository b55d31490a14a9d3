//! Memo details form
//!
//! Same MVVM split as the other details screens:
//! - model.rs: API functions (list, save)
//! - view_model.rs: state and commands
//! - view.rs: Leptos component
//!
//! Customer and tags are picked with inline-create selects, so a missing
//! customer or tag can be added without leaving the memo.

mod model;
mod view;
mod view_model;

pub use view::MemoDetails;
pub use view_model::MemoDetailsViewModel;
