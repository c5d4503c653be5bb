//! Application layer for Foodboard.
//!
//! This crate coordinates the domain model with a food gateway to keep the
//! dashboard's list consistent with the remote collection.

pub mod dashboard;

pub use dashboard::{CreationFlow, DashboardController, EditFlow};
