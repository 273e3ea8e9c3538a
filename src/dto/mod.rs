//! View models handed to templates.

pub mod categories;
