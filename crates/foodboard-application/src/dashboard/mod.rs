//! Dashboard application services.
//!
//! This module contains the dashboard controller that owns the food list and
//! the creation/edit flows that feed it.

mod controller;
mod flows;


pub use controller::DashboardController;
pub use flows::{CreationFlow, EditFlow};
