//! Deep links for the contact page.
//!
//! Only the URIs are built here; opening them is left to the platform.

use crate::models::shop::ContactDetails;

/// Target platform for map links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Ios,
    Android,
}

pub fn email_link(contact: &ContactDetails) -> String {
    format!("mailto:{}", contact.email)
}

pub fn phone_link(contact: &ContactDetails) -> String {
    format!("tel:{}", contact.phone_dial)
}

/// Map search link for the shop address.
pub fn maps_link(contact: &ContactDetails, platform: Platform) -> String {
    let query = urlencoding::encode(contact.address);
    match platform {
        Platform::Ios => format!("maps://?q={}", query),
        Platform::Android => format!("geo:0,0?q={}", query),
    }
}
