pub mod api;
pub mod core;
pub mod gui;
pub mod persistence;
pub mod session;
pub mod settings;
