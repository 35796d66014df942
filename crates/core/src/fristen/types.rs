use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

/// The market processes the deadline rules are defined for.
///
/// This is a closed set: anything that does not match one of the variants
/// after upper-casing is rejected at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FristenType {
    /// Geschäftsprozesse zur Kundenbelieferung mit Elektrizität.
    Gpke,
    /// Geschäftsprozesse Lieferantenwechsel Gas.
    Geli,
    /// Marktregeln für die Durchführung der Bilanzkreisabrechnung Strom.
    Mabis,
    /// Kooperationsvereinbarung Gas.
    Kov,
}

impl FristenType {
    pub const ALL: [FristenType; 4] = [
        FristenType::Gpke,
        FristenType::Geli,
        FristenType::Mabis,
        FristenType::Kov,
    ];
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{0:?} is not a valid fristen type")]
pub struct UnknownFristenType(pub String);

impl FromStr for FristenType {
    type Err = UnknownFristenType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GPKE" => Ok(Self::Gpke),
            "GELI" => Ok(Self::Geli),
            "MABIS" => Ok(Self::Mabis),
            "KOV" => Ok(Self::Kov),
            _ => Err(UnknownFristenType(s.to_owned())),
        }
    }
}

impl fmt::Display for FristenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Gpke => "GPKE",
            Self::Geli => "GELI",
            Self::Mabis => "MABIS",
            Self::Kov => "KOV",
        })
    }
}

/// One computed deadline.
///
/// `ref_not_in_the_same_month` carries the business-day count for deadlines
/// counted into the month after their delivery month; it stays unset for
/// deadlines anchored before the month start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frist {
    pub date: NaiveDate,
    pub label: String,
    pub ref_not_in_the_same_month: Option<u32>,
    pub description: String,
    pub fristen_type: FristenType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("gpke".parse(), Ok(FristenType::Gpke));
        assert_eq!("GPKE".parse(), Ok(FristenType::Gpke));
        assert_eq!("MaBiS".parse(), Ok(FristenType::Mabis));
    }

    #[test]
    fn parse_rejects_unknown_tokens() {
        let err = "hhhhhh".parse::<FristenType>().unwrap_err();
        assert_eq!(err, UnknownFristenType("hhhhhh".to_owned()));
        assert!("".parse::<FristenType>().is_err());
    }

    #[test]
    fn display_round_trips_through_parse() {
        for fristen_type in FristenType::ALL {
            assert_eq!(fristen_type.to_string().parse(), Ok(fristen_type));
        }
    }

    #[test]
    fn serializes_as_the_upper_case_token() {
        assert_eq!(serde_json::to_value(FristenType::Gpke).unwrap(), "GPKE");
        assert_eq!(serde_json::to_value(FristenType::Kov).unwrap(), "KOV");
    }
}
