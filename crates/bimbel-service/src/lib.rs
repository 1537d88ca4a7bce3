//! Business operations of the tutoring backend.

pub mod error;
pub mod schedule;
