// Service module exports

pub mod booking;
pub mod confirmation;
pub mod contact;
pub mod faq;
pub mod settings;
