//! Command implementations.

pub mod identify;
pub mod scan;
pub mod season;
