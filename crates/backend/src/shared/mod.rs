pub mod config;
pub mod data;
pub mod errors;
pub mod multipart_form;
pub mod state;
pub mod uploads;
