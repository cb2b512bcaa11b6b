//! Page components mapped to routes.

pub mod dashboard;
pub mod signin;
