//! Core library components.
//!
//! This module contains the reusable bootstrap logic: configuration, the
//! environment buffer, and the version-control and hosting adapters the
//! wizard drives.

pub mod config;
pub mod constants;
pub mod env;
pub mod git;
pub mod hosting;
pub mod prompt;
pub mod repository;
pub mod validation;
pub mod wizard;
