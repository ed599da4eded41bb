// Barber Booking
// Terminal front-end for the booking form and shop pages

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use chrono::NaiveDate;

use barber_booking::models::settings::Settings;
use barber_booking::models::shop::{
    about_paragraphs, default_faqs, AboutFooter, ContactDetails, NextAvailable, OpeningHours,
    BOOK_NOW, FAQ_FOOTER, TAGLINE,
};
use barber_booking::services::confirmation::alert_for;
use barber_booking::services::contact::{email_link, maps_link, phone_link, Platform};
use barber_booking::services::faq::FaqAccordion;
use barber_booking::services::settings::SettingsService;
use barber_booking::utils::date::{earliest_bookable_date, format_date, parse_iso_date, today};
use barber_booking::{BookingFormController, ServiceCatalog};

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let settings = load_settings();
    log::info!("Starting {} booking front-end", settings.shop_name);

    let command = std::env::args().nth(1).unwrap_or_else(|| "home".to_string());
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command.as_str() {
        "home" => run_home(&settings, today(), &mut input, &mut out),
        "book" => run_booking(&settings, today(), &mut input, &mut out),
        "services" => print_services(&mut out),
        "contact" => print_contact(&mut out),
        "faq" => run_faq(&mut input, &mut out),
        "about" => print_about(&settings, &mut out),
        other => {
            eprintln!(
                "Unknown command '{}'. Use home, book, services, contact, faq or about.",
                other
            );
            std::process::exit(2);
        }
    }
}

fn load_settings() -> Settings {
    match SettingsService::with_default_path().and_then(|service| service.load()) {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("Failed to load settings, using defaults: {:#}", e);
            Settings::default()
        }
    }
}

/// Print `label`, then read one line. `None` on end of input.
fn prompt(input: &mut impl BufRead, out: &mut impl Write, label: &str) -> Result<Option<String>> {
    write!(out, "{}: ", label)?;
    out.flush().context("Failed to flush output")?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("Failed to read input")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn run_home(
    settings: &Settings,
    today: NaiveDate,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    let card = NextAvailable::default();
    writeln!(out, "{}\n{}\n", settings.shop_name, TAGLINE)?;
    writeln!(out, "{} {}\n", card.label, card.slot)?;

    let label = format!("[{}] Enter to book, q to quit", BOOK_NOW);
    match prompt(input, out, &label)? {
        Some(answer) if !answer.trim().eq_ignore_ascii_case("q") => {
            run_booking(settings, today, input, out)
        }
        _ => Ok(()),
    }
}

fn run_booking(
    settings: &Settings,
    today: NaiveDate,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    let catalog = ServiceCatalog::global();
    let mut controller = BookingFormController::new();

    writeln!(out, "{}\nBook an Appointment\n", settings.shop_name)?;

    loop {
        let Some(name) = prompt(input, out, "Your Name")? else { return Ok(()) };
        controller.set_name(name);

        for (index, entry) in catalog.enumerate().iter().enumerate() {
            writeln!(out, "  {}. {}", index + 1, entry.display_name)?;
        }
        let Some(choice) = prompt(input, out, "Select Service (number or name)")? else { return Ok(()) };
        let choice = choice.trim();
        if !choice.is_empty() {
            let by_number = choice
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| catalog.enumerate().get(i));
            match by_number {
                Some(entry) => controller.set_service(entry.service),
                None => {
                    if let Err(e) = controller.select_service(choice) {
                        writeln!(out, "{}", e)?;
                    }
                }
            }
        }

        let label = format!(
            "Select Date (YYYY-MM-DD, earliest {})",
            earliest_bookable_date(today, &OpeningHours::default())
        );
        let Some(date_input) = prompt(input, out, &label)? else { return Ok(()) };
        if !date_input.trim().is_empty() {
            match parse_iso_date(&date_input) {
                Some(date) if settings.reject_past_dates => {
                    if let Err(e) = controller.set_date_checked(date, today) {
                        writeln!(out, "{}", e)?;
                    }
                }
                Some(date) => controller.set_date(date),
                None => writeln!(out, "Could not read date '{}'", date_input.trim())?,
            }
        }

        let result = controller.submit();
        let alert = alert_for(&result, &settings.date_format);
        writeln!(out, "\n{}: {}\n", alert.title, alert.message)?;

        if result.is_accepted() {
            return Ok(());
        }
        if let Some(date) = controller.draft().date {
            writeln!(out, "(keeping {})", format_date(date, &settings.date_format))?;
        }
    }
}

fn print_services(out: &mut impl Write) -> Result<()> {
    let catalog = ServiceCatalog::global();
    let featured = catalog.featured();

    writeln!(out, "Our Services\n")?;
    writeln!(out, "{}\n{}\n{}\n", featured.title, featured.description, featured.price)?;
    for entry in catalog.priced() {
        writeln!(
            out,
            "{:<12} {:>5}  {}",
            entry.display_name,
            entry.price.unwrap_or("-"),
            entry.stars().unwrap_or_default()
        )?;
    }
    Ok(())
}

fn print_contact(out: &mut impl Write) -> Result<()> {
    let contact = ContactDetails::default();
    let hours = OpeningHours::default();

    writeln!(out, "Get in Touch\n")?;
    writeln!(out, "Email:   {}  ({})", contact.email, email_link(&contact))?;
    writeln!(out, "Phone:   {}  ({})", contact.phone_display, phone_link(&contact))?;
    writeln!(out, "Address: {}", contact.address)?;
    writeln!(out, "         {}", maps_link(&contact, Platform::Ios))?;
    writeln!(out, "         {}", maps_link(&contact, Platform::Android))?;
    writeln!(
        out,
        "Hours:   {}-{}, closed {:?}",
        hours.opens.format("%H:%M"),
        hours.closes.format("%H:%M"),
        hours.closed_on
    )?;
    Ok(())
}

fn run_faq(input: &mut impl BufRead, out: &mut impl Write) -> Result<()> {
    let mut faq = FaqAccordion::new(default_faqs());

    loop {
        for (index, entry) in faq.entries().iter().enumerate() {
            let expanded = faq.expanded() == Some(index);
            writeln!(out, "{} {}. {}", if expanded { "-" } else { "+" }, index + 1, entry.question)?;
            if expanded {
                writeln!(out, "     {}", entry.answer)?;
            }
        }
        writeln!(out, "\n{}", FAQ_FOOTER)?;

        let Some(choice) = prompt(input, out, "Question number (empty to quit)")? else { return Ok(()) };
        match choice.trim().parse::<usize>() {
            Ok(n) if n > 0 => faq.toggle(n - 1),
            _ => return Ok(()),
        }
    }
}

fn print_about(settings: &Settings, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}\n{}\n", settings.shop_name, TAGLINE)?;
    for paragraph in about_paragraphs() {
        writeln!(out, "{}\n", paragraph)?;
    }
    writeln!(out, "{}", AboutFooter::default().text())?;
    Ok(())
}
