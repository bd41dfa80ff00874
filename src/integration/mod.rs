//! Integrations with external systems.
pub mod goodwe;
