pub mod config;
pub mod interfaces;
pub mod services;
pub mod utils;
