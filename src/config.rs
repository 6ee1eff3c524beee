//! Runtime settings and their command-line overrides.

use std::time::Duration;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::debounce::DEFAULT_WINDOW;
use crate::models::{parse_amount, parse_date, Budget};
use crate::report::BREAKDOWN_LIMIT;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing value for {0}")]
    MissingValue(&'static str),

    #[error("Invalid value for {flag}: {reason}")]
    InvalidValue { flag: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub monthly_budget: Budget,
    pub search_debounce: Duration,
    pub breakdown_limit: usize,
    /// Load the sample transactions at startup.
    pub load_sample_data: bool,
    /// Pin the reference date for monthly figures instead of reading the clock.
    pub as_of: Option<NaiveDate>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            monthly_budget: Budget::default(),
            search_debounce: DEFAULT_WINDOW,
            breakdown_limit: BREAKDOWN_LIMIT,
            load_sample_data: true,
            as_of: None,
        }
    }
}

impl Settings {
    /// Pull the global flags out of `args`, returning the settings and the
    /// remaining arguments in order.
    pub fn from_args(args: &[String]) -> Result<(Self, Vec<String>), ConfigError> {
        let mut settings = Self::default();
        let mut rest = Vec::new();
        let mut iter = args.iter();

        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--budget" => {
                    let value = next_value(&mut iter, "--budget")?;
                    settings.monthly_budget = parse_budget(value)?;
                }
                "--debounce-ms" => {
                    let value = next_value(&mut iter, "--debounce-ms")?;
                    let ms: u64 = value.parse().map_err(|_| ConfigError::InvalidValue {
                        flag: "--debounce-ms",
                        reason: format!("'{value}' is not a whole number of milliseconds"),
                    })?;
                    settings.search_debounce = Duration::from_millis(ms);
                }
                "--top" => {
                    let value = next_value(&mut iter, "--top")?;
                    settings.breakdown_limit =
                        value.parse().map_err(|_| ConfigError::InvalidValue {
                            flag: "--top",
                            reason: format!("'{value}' is not a count"),
                        })?;
                }
                "--as-of" => {
                    let value = next_value(&mut iter, "--as-of")?;
                    let date = parse_date(value).map_err(|e| ConfigError::InvalidValue {
                        flag: "--as-of",
                        reason: e.to_string(),
                    })?;
                    settings.as_of = Some(date);
                }
                "--empty" => settings.load_sample_data = false,
                _ => rest.push(arg.clone()),
            }
        }

        Ok((settings, rest))
    }
}

fn next_value<'a>(
    iter: &mut impl Iterator<Item = &'a String>,
    flag: &'static str,
) -> Result<&'a str, ConfigError> {
    iter.next()
        .map(String::as_str)
        .ok_or(ConfigError::MissingValue(flag))
}

fn parse_budget(value: &str) -> Result<Budget, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidValue {
        flag: "--budget",
        reason,
    };
    let amount: Decimal = parse_amount(value).map_err(|e| invalid(e.to_string()))?;
    Budget::new(amount).map_err(|e| invalid(e.to_string()))
}
