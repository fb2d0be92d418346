//! Step definitions for dispatch pipeline scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
