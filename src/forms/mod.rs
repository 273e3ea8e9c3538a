//! HTML form bodies and their validated payloads.

pub mod categories;
pub mod products;
