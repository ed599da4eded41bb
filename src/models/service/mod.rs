//! Service model.
//!
//! The shop offers a fixed set of services. Modelling them as a closed enum
//! means an out-of-catalog choice cannot reach the booking draft; untyped
//! input is parsed once at the boundary via [`std::str::FromStr`].

use std::fmt;
use std::str::FromStr;

use crate::error::BookingError;

/// A bookable service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Service {
    Haircut,
    BeardTrim,
    Shave,
    HairColor,
    Facial,
}

impl Service {
    /// All services in the order they are offered on the booking form.
    pub const ALL: [Service; 5] = [
        Service::Haircut,
        Service::BeardTrim,
        Service::Shave,
        Service::HairColor,
        Service::Facial,
    ];

    /// Name shown to customers (e.g. "Beard Trim").
    pub fn display_name(&self) -> &'static str {
        match self {
            Service::Haircut => "Haircut",
            Service::BeardTrim => "Beard Trim",
            Service::Shave => "Shave",
            Service::HairColor => "Hair Color",
            Service::Facial => "Facial",
        }
    }

    /// Stable identifier used in configuration and logs.
    pub fn id(&self) -> &'static str {
        match self {
            Service::Haircut => "haircut",
            Service::BeardTrim => "beard_trim",
            Service::Shave => "shave",
            Service::HairColor => "hair_color",
            Service::Facial => "facial",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Service {
    type Err = BookingError;

    /// Accepts either the display name or the identifier, ignoring case and
    /// surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Service::ALL
            .iter()
            .copied()
            .find(|service| {
                service.display_name().eq_ignore_ascii_case(wanted)
                    || service.id().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| BookingError::InvalidServiceSelection(s.to_string()))
    }
}
