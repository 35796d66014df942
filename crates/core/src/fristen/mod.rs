mod error;
mod generator;
mod rules;
mod types;

pub use error::FristenError;
pub use generator::{generate_all_fristen, generate_fristen_for_type, MAX_YEAR, MIN_YEAR};
pub use types::{Frist, FristenType, UnknownFristenType};
