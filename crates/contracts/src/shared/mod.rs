pub mod inline_create;
pub mod validation;
