//! The deadline rule tables, one per market process.
//!
//! The tables are fixed data; all date work happens in the generator.

use super::types::FristenType;

/// Where a deadline sits relative to its delivery month.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Anchor {
    /// n-th business day before the first day of the delivery month.
    BusinessDaysBeforeMonthStart(u32),
    /// n-th business day of the month following the delivery month.
    BusinessDayOfFollowingMonth(u32),
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct FristRule {
    pub label: &'static str,
    pub description: &'static str,
    pub anchor: Anchor,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct RuleSet {
    pub rules: &'static [FristRule],
    /// First delivery month `(year, month)` the rules no longer apply to.
    pub discontinued_from: Option<(i32, u32)>,
}

// The 24h supplier switch went live in June 2025; there are no asynchronous
// balancing registration deadlines for delivery months from July 2025 on.
const SWITCH_24H: Option<(i32, u32)> = Some((2025, 7));

pub(crate) fn rule_set(fristen_type: FristenType) -> RuleSet {
    match fristen_type {
        FristenType::Gpke => RuleSet {
            rules: &[FristRule {
                label: "3LWT",
                description: "Letzter Termin Anmeldung asynchrone Bilanzierung (Strom)",
                anchor: Anchor::BusinessDaysBeforeMonthStart(3),
            }],
            discontinued_from: SWITCH_24H,
        },
        FristenType::Geli => RuleSet {
            rules: &[FristRule {
                label: "3LWT",
                description: "Letzter Termin Anmeldung asynchrone Bilanzierung (Gas)",
                anchor: Anchor::BusinessDaysBeforeMonthStart(3),
            }],
            discontinued_from: SWITCH_24H,
        },
        FristenType::Mabis => RuleSet {
            rules: &[
                FristRule {
                    label: "10WT",
                    description: "Übermittlung der Bilanzkreissummenzeitreihen an den BIKO (Strom)",
                    anchor: Anchor::BusinessDayOfFollowingMonth(10),
                },
                FristRule {
                    label: "16WT",
                    description: "Abschluss der monatlichen Bilanzkreisabrechnung (Strom)",
                    anchor: Anchor::BusinessDayOfFollowingMonth(16),
                },
            ],
            discontinued_from: None,
        },
        FristenType::Kov => RuleSet {
            rules: &[FristRule {
                label: "12WT",
                description: "Übermittlung der endgültigen Allokationsdaten an den MGV (Gas)",
                anchor: Anchor::BusinessDayOfFollowingMonth(12),
            }],
            discontinued_from: None,
        },
    }
}
