//! Common Test Utilities
//!
//! Shared fixtures and assertion helpers used by the unit and integration
//! suites.

#![allow(dead_code)]

pub mod fixture_registry;
