//! vidup-axum: HTTP surface for vidup.
//!
//! | method | path               | operation                   |
//! |--------|--------------------|-----------------------------|
//! | GET    | `/video`           | list registered videos      |
//! | POST   | `/video`           | register metadata           |
//! | POST   | `/video/{id}/data` | multipart upload (`data`)   |
//! | GET    | `/video/{id}/data` | stream the payload back     |
//!
//! Errors are JSON `{name, message, code, className}` with the status of
//! the underlying [`vidup_core::VideoError`].

pub mod app;
mod error;
pub mod origin;
pub mod rest;
pub mod state;

pub use app::VideoApp;
pub use error::VidAxumError;
pub use origin::request_origin;
pub use state::VidAxumState;
