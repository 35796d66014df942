//! Core library for the fristenkalender project.
//!
//! Implements the BDEW business-day calendar, the deadline ("Fristen")
//! generation rules and the iCalendar export consumed by the HTTP façade.
//! Everything in here is pure and deterministic: repeated calls with the
//! same inputs return the same results, so the functions are safe to call
//! from any number of concurrent requests.

pub mod calendar;
pub mod export;
pub mod fristen;
