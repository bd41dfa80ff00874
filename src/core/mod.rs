//! Core application: configuration, command line and the top level runner.
pub mod app;
pub mod cli;
pub mod config;
pub mod station;
