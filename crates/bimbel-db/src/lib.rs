//! Postgres persistence for packages, classes and generated schedules.

pub mod db;
pub mod error;
pub mod model;
