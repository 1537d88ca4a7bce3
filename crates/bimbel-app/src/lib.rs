//! HTTP surface of the Bimbel tutoring backend.

pub mod app;
pub mod error;
pub mod repository_handler;
