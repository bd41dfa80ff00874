//! goodwe-export - Export history reports and realtime data from the GoodWe portal
pub mod core;
pub mod integration;
pub mod services;

pub use crate::core::app::app;
