//! iCalendar export of the deadline set.

use std::fs;
use std::path::Path;

use ical::generator::{Emitter, IcalCalendar, IcalCalendarBuilder, IcalEventBuilder, Property};
use ical::{ical_param, ical_property};
use thiserror::Error;

use crate::fristen::{
    generate_all_fristen, generate_fristen_for_type, Frist, FristenError, FristenType,
};

static PROD_ID: &str = "-//Fristenkalender//hochfrequenz.de";
static TIMEZONE: &str = "Europe/Berlin";
static DATE_FORMAT: &str = "%Y%m%d";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Fristen(#[from] FristenError),
    #[error("Could not write the calendar file: {0}")]
    Io(#[from] std::io::Error),
}

/// Write the deadlines of `year` as an iCalendar file to `path`.
///
/// With a `fristen_type` only that market process is exported, otherwise the
/// whole year. The `attendee` ends up on every event.
pub fn write_calendar_file(
    path: &Path,
    attendee: &str,
    year: i32,
    fristen_type: Option<FristenType>,
) -> Result<(), ExportError> {
    let fristen = match fristen_type {
        Some(fristen_type) => generate_fristen_for_type(year, fristen_type)?,
        None => generate_all_fristen(year)?,
    };
    let calendar = build_calendar(&fristen, attendee);
    fs::write(path, calendar.generate())?;
    Ok(())
}

/// Build the calendar with one all-day event per deadline.
fn build_calendar(fristen: &[Frist], attendee: &str) -> IcalCalendar {
    let changed = chrono::Local::now().format("%Y%m%dT%H%M%S").to_string();
    let mut calendar = IcalCalendarBuilder::version("2.0")
        .gregorian()
        .prodid(PROD_ID)
        .build();
    for frist in fristen {
        let event = IcalEventBuilder::tzid(TIMEZONE)
            .uid(uid(frist))
            .changed(changed.clone())
            .one_day(frist.date.format(DATE_FORMAT).to_string())
            .set(ical_property!(
                "SUMMARY",
                format!("{} {}", frist.label, frist.fristen_type)
            ))
            .set(ical_property!("DESCRIPTION", frist.description.clone()))
            .set(ical_property!(
                "ATTENDEE",
                format!("mailto:{attendee}"),
                ical_param!("CN", attendee)
            ))
            .set(ical_property!("TRANSP", "TRANSPARENT"))
            .build();
        calendar.events.push(event);
    }
    calendar
}

/// Get a unique id for one deadline event.
///
/// Changing this function is a breaking change!
fn uid(frist: &Frist) -> String {
    format!(
        "fristenkalender_{}_{}_{}@hochfrequenz.de",
        frist.fristen_type, frist.label, frist.date
    )
}
