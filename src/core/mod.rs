//! Configuration shared by every invocation

pub mod config;
