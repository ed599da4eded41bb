//! Static shop content.
//!
//! Home card, contact details, opening hours, the about page and the FAQ
//! list. All of
//! it ships with the application and never changes at runtime.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use serde::Serialize;

pub const SHOP_NAME: &str = "Salloni Titi";
pub const TAGLINE: &str = "Premium Barber Experience";

/// Card on the home screen advertising the next free slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextAvailable {
    pub label: &'static str,
    pub slot: &'static str,
}

impl Default for NextAvailable {
    fn default() -> Self {
        Self {
            label: "Next Available:",
            slot: "Today at 3:30 PM",
        }
    }
}

/// Label of the home screen button that opens the booking form.
pub const BOOK_NOW: &str = "Book Now";

/// How to reach the shop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactDetails {
    pub email: &'static str,
    /// Phone number as displayed
    pub phone_display: &'static str,
    /// Phone number as dialled
    pub phone_dial: &'static str,
    pub address: &'static str,
}

impl Default for ContactDetails {
    fn default() -> Self {
        Self {
            email: "info@gentlemanscut.com",
            phone_display: "+1 234 567 8900",
            phone_dial: "+12345678900",
            address: "H2XC+F4C, E851, Sllatinë e Madhe 12050",
        }
    }
}

/// Weekly opening hours. The shop keeps the same hours every open day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpeningHours {
    pub opens: NaiveTime,
    pub closes: NaiveTime,
    pub closed_on: Vec<Weekday>,
}

impl Default for OpeningHours {
    fn default() -> Self {
        Self {
            opens: NaiveTime::from_hms_opt(9, 0, 0).expect("valid opening time"),
            closes: NaiveTime::from_hms_opt(19, 0, 0).expect("valid closing time"),
            closed_on: vec![Weekday::Sun],
        }
    }
}

impl OpeningHours {
    pub fn is_open_on(&self, date: NaiveDate) -> bool {
        !self.closed_on.contains(&date.weekday())
    }

    /// Open at the given moment (closing time itself counts as closed).
    pub fn is_open_at(&self, at: NaiveDateTime) -> bool {
        self.is_open_on(at.date()) && at.time() >= self.opens && at.time() < self.closes
    }

    /// First open day on or after `from`.
    pub fn next_open_day(&self, from: NaiveDate) -> Option<NaiveDate> {
        from.iter_days().take(7).find(|day| self.is_open_on(*day))
    }
}

/// Text shown at the bottom of the about page; tapping it swaps the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AboutFooter {
    #[default]
    Established,
    Thanks,
}

impl AboutFooter {
    pub fn text(&self) -> &'static str {
        match self {
            AboutFooter::Established => "Est. 2002 • Crafted with pride 💈",
            AboutFooter::Thanks => "Thanks for visiting! ✂️🔥",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            AboutFooter::Established => AboutFooter::Thanks,
            AboutFooter::Thanks => AboutFooter::Established,
        }
    }
}

/// Paragraphs of the about page.
pub fn about_paragraphs() -> [&'static str; 3] {
    [
        "Welcome to Salloni Titi salon — where tradition meets modern style. \
         Our barbers are craftsmen dedicated to delivering precision cuts, \
         clean shaves, and an experience that’s second to none.",
        "Nestled in the heart of the city, our shop offers a relaxing and classy environment, \
         perfect for gentlemen who value detail, style, and great conversation.",
        "Whether you're after a sharp fade, classic beard trim, or a straight razor shave — \
         you're in good hands.",
    ]
}

/// A question and its answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

/// Line under the FAQ list.
pub const FAQ_FOOTER: &str = "Still have questions? Contact us anytime!";

/// Questions listed on the FAQ page.
pub fn default_faqs() -> Vec<FaqEntry> {
    vec![
        FaqEntry {
            question: "What services do you offer?",
            answer: "We offer haircuts, beard trims, straight razor shaves, and styling tailored to your preferences.",
        },
        FaqEntry {
            question: "Do I need to book an appointment?",
            answer: "While walk-ins are welcome, we recommend booking in advance to ensure you get the perfect time slot.",
        },
        FaqEntry {
            question: "What safety measures are in place?",
            answer: "We follow strict hygiene protocols including sterilizing tools, wearing masks, and sanitizing the shop regularly.",
        },
        FaqEntry {
            question: "What are your opening hours?",
            answer: "We are open Monday to Saturday from 9:00 AM to 7:00 PM, closed on Sundays.",
        },
    ]
}
