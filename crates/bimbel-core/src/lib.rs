//! Shared building blocks for the Bimbel tutoring backend: configuration,
//! core errors, route constants and the weekday vocabulary.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
