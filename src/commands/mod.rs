//! Command implementations for the elementary_extension CLI

pub mod completions;
pub mod describe;
pub mod helpers;
pub mod initialize;
pub mod invoke;
pub mod monitor;
pub mod version;
