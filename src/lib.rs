//! Media Renamer Library
//!
//! Infers structured metadata (title, year, season, episode, media kind)
//! from inconsistently formatted media filenames and directory names, using
//! a priority-ordered chain of pattern strategies with confidence-based
//! arbitration.

pub mod cli;
pub mod core;
pub mod error;
pub mod models;

pub use error::{Error, Result};
