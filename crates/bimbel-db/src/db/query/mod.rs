pub mod class;
pub mod schedule;
