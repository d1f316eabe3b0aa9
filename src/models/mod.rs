//! Data models.

pub mod config;
pub mod context;
pub mod media;
pub mod result;
