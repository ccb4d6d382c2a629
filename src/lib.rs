//! Cluster Agent Configuration Library
//!
//! This module exports the core components for testing and integration.

pub mod agent;
pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod members;
