//! Date helper functions
//!
//! Human-readable date formatting per site language. chrono carries no
//! locale data in our configuration, so month names are spelled out here.

use chrono::{DateTime, Datelike, TimeZone};

use crate::content::Language;

/// Format a date in ISO 8601 / RFC 3339 form
pub fn to_iso_string<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.format("%Y-%m-%dT%H:%M:%S%:z").to_string()
}

/// Format a date for display in the given language
///
/// # Examples
/// ```ignore
/// format_date(&date, Language::En) // -> "January 15, 2024"
/// format_date(&date, Language::Es) // -> "15 de enero de 2024"
/// format_date(&date, Language::De) // -> "15. Januar 2024"
/// ```
pub fn format_date<Tz: TimeZone>(date: &DateTime<Tz>, language: Language) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let day = date.day();
    let month = date.month();
    let year = date.year();

    match language {
        Language::En => format!("{} {}, {}", month_name_en(month), day, year),
        Language::Es => format!("{} de {} de {}", day, month_name_es(month), year),
        Language::De => format!("{}. {} {}", day, month_name_de(month), year),
    }
}

fn month_name_en(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Unknown",
    }
}

fn month_name_es(month: u32) -> &'static str {
    match month {
        1 => "enero",
        2 => "febrero",
        3 => "marzo",
        4 => "abril",
        5 => "mayo",
        6 => "junio",
        7 => "julio",
        8 => "agosto",
        9 => "septiembre",
        10 => "octubre",
        11 => "noviembre",
        12 => "diciembre",
        _ => "desconocido",
    }
}

fn month_name_de(month: u32) -> &'static str {
    match month {
        1 => "Januar",
        2 => "Februar",
        3 => "März",
        4 => "April",
        5 => "Mai",
        6 => "Juni",
        7 => "Juli",
        8 => "August",
        9 => "September",
        10 => "Oktober",
        11 => "November",
        12 => "Dezember",
        _ => "unbekannt",
    }
}
