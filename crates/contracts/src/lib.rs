//! Types shared between the backend and the WASM frontend.

pub mod domain;
pub mod shared;
