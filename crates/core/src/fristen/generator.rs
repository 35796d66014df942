//! Deadline generation.
//!
//! For every delivery month of the requested year, each applicable rule is
//! resolved against the BDEW business-day calendar. The output is sorted by
//! date with a stable sort, so the list for a single type is exactly the
//! matching subsequence of the full-year list.

use chrono::NaiveDate;

use crate::calendar::{is_business_day, next_business_day, previous_business_day, CalendarError};

use super::error::FristenError;
use super::rules::{rule_set, Anchor};
use super::types::{Frist, FristenType};

/// First delivery year the rule tables cover.
pub const MIN_YEAR: i32 = 2000;
/// Last delivery year the rule tables cover.
pub const MAX_YEAR: i32 = 2100;

/// All deadlines of all market processes for the given year, sorted by date.
pub fn generate_all_fristen(year: i32) -> Result<Vec<Frist>, FristenError> {
    check_year(year)?;
    let mut fristen = Vec::new();
    for fristen_type in FristenType::ALL {
        fristen.extend(fristen_for_type_unchecked(year, fristen_type)?);
    }
    fristen.sort_by_key(|frist| frist.date);
    Ok(fristen)
}

/// The deadlines of one market process for the given year, sorted by date.
pub fn generate_fristen_for_type(
    year: i32,
    fristen_type: FristenType,
) -> Result<Vec<Frist>, FristenError> {
    check_year(year)?;
    let mut fristen = fristen_for_type_unchecked(year, fristen_type)?;
    fristen.sort_by_key(|frist| frist.date);
    Ok(fristen)
}

fn check_year(year: i32) -> Result<(), FristenError> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(FristenError::UnsupportedYear { year });
    }
    Ok(())
}

fn fristen_for_type_unchecked(
    year: i32,
    fristen_type: FristenType,
) -> Result<Vec<Frist>, FristenError> {
    let rule_set = rule_set(fristen_type);
    let mut fristen = Vec::new();
    for month in 1..=12 {
        if let Some(cutoff) = rule_set.discontinued_from {
            if (year, month) >= cutoff {
                continue;
            }
        }
        for rule in rule_set.rules {
            let (date, reference_days) = resolve_anchor(year, month, rule.anchor)?;
            fristen.push(Frist {
                date,
                label: rule.label.to_owned(),
                ref_not_in_the_same_month: reference_days,
                description: rule.description.to_owned(),
                fristen_type,
            });
        }
    }
    Ok(fristen)
}

fn resolve_anchor(
    year: i32,
    month: u32,
    anchor: Anchor,
) -> Result<(NaiveDate, Option<u32>), FristenError> {
    match anchor {
        Anchor::BusinessDaysBeforeMonthStart(count) => {
            let mut date = first_of_month(year, month)?;
            for _ in 0..count {
                date = previous_business_day(date)?;
            }
            Ok((date, None))
        }
        Anchor::BusinessDayOfFollowingMonth(count) => {
            let first = match month {
                12 => first_of_month(year + 1, 1)?,
                _ => first_of_month(year, month + 1)?,
            };
            let mut date = if is_business_day(first) {
                first
            } else {
                next_business_day(first)?
            };
            for _ in 1..count {
                date = next_business_day(date)?;
            }
            Ok((date, Some(count)))
        }
    }
}

fn first_of_month(year: i32, month: u32) -> Result<NaiveDate, CalendarError> {
    NaiveDate::from_ymd_opt(year, month, 1).ok_or(CalendarError::DateOutOfRange)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn first_gpke_frist_2023() {
        let fristen = generate_fristen_for_type(2023, FristenType::Gpke).unwrap();
        let first = &fristen[0];
        assert_eq!(first.date, date(2022, 12, 28));
        assert_eq!(first.label, "3LWT");
        assert_eq!(
            first.description,
            "Letzter Termin Anmeldung asynchrone Bilanzierung (Strom)"
        );
        assert_eq!(first.ref_not_in_the_same_month, None);
        assert_eq!(first.fristen_type, FristenType::Gpke);
    }

    #[test]
    fn gpke_has_one_frist_per_delivery_month() {
        let fristen = generate_fristen_for_type(2023, FristenType::Gpke).unwrap();
        assert_eq!(fristen.len(), 12);
    }

    #[test]
    fn no_gpke_fristen_after_the_24h_supplier_switch() {
        // June 2025 is the last delivery month with a 3LWT deadline
        let fristen = generate_fristen_for_type(2025, FristenType::Gpke).unwrap();
        assert_eq!(fristen.len(), 6);
        let fristen = generate_fristen_for_type(2026, FristenType::Gpke).unwrap();
        assert_eq!(fristen.len(), 0);
    }

    #[test]
    fn following_month_rules_carry_the_reference_count() {
        let fristen = generate_fristen_for_type(2023, FristenType::Mabis).unwrap();
        assert_eq!(fristen.len(), 24);
        let first = &fristen[0];
        // 10th business day of February 2023
        assert_eq!(first.date, date(2023, 2, 14));
        assert_eq!(first.label, "10WT");
        assert_eq!(first.ref_not_in_the_same_month, Some(10));
    }

    #[test]
    fn generation_is_deterministic() {
        let first = generate_all_fristen(2023).unwrap();
        let second = generate_all_fristen(2023).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn all_fristen_are_sorted_by_date() {
        let fristen = generate_all_fristen(2023).unwrap();
        assert!(fristen.windows(2).all(|pair| pair[0].date <= pair[1].date));
    }

    #[test]
    fn type_list_is_a_subsequence_of_the_full_list() {
        let all = generate_all_fristen(2023).unwrap();
        for fristen_type in FristenType::ALL {
            let filtered: Vec<_> = all
                .iter()
                .filter(|frist| frist.fristen_type == fristen_type)
                .cloned()
                .collect();
            let direct = generate_fristen_for_type(2023, fristen_type).unwrap();
            assert_eq!(filtered, direct);
        }
    }

    #[test]
    fn unsupported_years_are_rejected() {
        assert_eq!(
            generate_all_fristen(1999),
            Err(FristenError::UnsupportedYear { year: 1999 })
        );
        assert_eq!(
            generate_fristen_for_type(2101, FristenType::Kov),
            Err(FristenError::UnsupportedYear { year: 2101 })
        );
    }
}
