pub mod api_utils;
pub mod components;
pub mod inline_create;
pub mod modal_frame;
