// Module exports for models

pub mod booking;
pub mod catalog;
pub mod service;
pub mod settings;
pub mod shop;
