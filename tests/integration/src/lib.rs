//! Integration test utilities for the realtime core
//!
//! This crate provides helpers for wiring the services to an in-process
//! store and fixtures for generating test data.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
