//! Platform-agnostic building blocks behind the translator widget.

pub mod backend;
pub mod capabilities;
pub mod controller;
pub mod format;
pub mod platform;
pub mod settings;
pub mod timing;
