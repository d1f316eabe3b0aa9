//! Core classification logic.

pub mod engine;
pub mod scanner;
pub mod season;
pub mod strategies;
pub mod title;
