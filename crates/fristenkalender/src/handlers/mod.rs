pub mod business_day;
pub mod error;
pub mod export;
pub mod fristen;
pub mod health;

pub use error::ApiError;
