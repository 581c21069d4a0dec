//! REST API controllers.

pub mod health_controller;
pub mod insurance_controller;
pub mod user_controller;

pub use health_controller::*;
