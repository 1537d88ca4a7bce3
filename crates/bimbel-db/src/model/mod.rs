pub mod class;
pub mod package;
pub mod schedule;
