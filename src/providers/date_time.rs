//! Date and time providers, formatted locally with chrono strftime syntax.

use std::fmt::Write as _;

use chrono::{DateTime, Local, TimeZone};
use serde::Deserialize;

use crate::error::ProviderError;
use crate::provider::{decode_args, ProviderArgs, ProviderOutput};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FormatArgs {
    format: Option<String>,
}

/// Weekday name, e.g. `Thursday`.
pub fn date_day(_args: &ProviderArgs) -> Result<ProviderOutput, ProviderError> {
    format_timestamp(&Local::now(), "%A").map(ProviderOutput::from)
}

pub fn date(args: &ProviderArgs) -> Result<ProviderOutput, ProviderError> {
    let args: FormatArgs = decode_args("date", args)?;
    let fmt = args.format.as_deref().unwrap_or("%Y-%m-%d");
    format_timestamp(&Local::now(), fmt).map(ProviderOutput::from)
}

pub fn time(args: &ProviderArgs) -> Result<ProviderOutput, ProviderError> {
    let args: FormatArgs = decode_args("time", args)?;
    let fmt = args.format.as_deref().unwrap_or("%H:%M");
    format_timestamp(&Local::now(), fmt).map(ProviderOutput::from)
}

/// Format with a user-supplied strftime string. A bad specifier is an error
/// rather than a panic.
fn format_timestamp<Tz>(at: &DateTime<Tz>, fmt: &str) -> Result<String, ProviderError>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let mut out = String::new();
    write!(out, "{}", at.format(fmt))
        .map_err(|_| ProviderError::Failed(format!("invalid time format `{fmt}`")))?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::Value;

    fn fixed() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 7, 9, 5, 0).unwrap()
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(&fixed(), "%A").unwrap(), "Thursday");
        assert_eq!(format_timestamp(&fixed(), "%Y-%m-%d").unwrap(), "2024-03-07");
        assert_eq!(format_timestamp(&fixed(), "%H:%M").unwrap(), "09:05");
    }

    #[test]
    fn test_invalid_format_is_an_error() {
        assert!(matches!(format_timestamp(&fixed(), "%Q"), Err(ProviderError::Failed(_))));
    }

    #[test]
    fn test_date_uses_custom_format() {
        let mut args = ProviderArgs::new();
        args.insert("format".into(), Value::from("literal"));
        assert_eq!(date(&args).unwrap(), ProviderOutput::from("literal"));
    }

    #[test]
    fn test_time_rejects_non_string_format() {
        let mut args = ProviderArgs::new();
        args.insert("format".into(), Value::from(12));
        assert!(matches!(time(&args), Err(ProviderError::Arguments { .. })));
    }
}
