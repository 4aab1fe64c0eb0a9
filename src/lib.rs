//! Cashflow forecast & working capital engine: 12-month scenario
//! projections and liquidity metrics over static published trust
//! financials. The dashboard frontend consumes the serialized models;
//! nothing here performs I/O.

pub mod analysis;
pub mod dataset;
pub mod error;
pub mod forecast;
pub mod models;

pub use error::{ForecastError, Result};
