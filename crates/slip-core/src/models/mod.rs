//! Data models for slip records and configuration.

pub mod config;
pub mod slip;
