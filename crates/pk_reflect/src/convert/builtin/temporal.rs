use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::convert::builtin::impl_default_policy;
use crate::convert::{ConversionError, Converter, DefaultPolicy, is_absent};
use crate::info::TypeInfo;
use crate::value::Value;

/// Patterns tried, in order, after RFC 3339.
pub const DEFAULT_DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y",
];

pub const DEFAULT_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y", "%Y%m%d"];

fn owned(formats: &[&str]) -> Vec<String> {
    formats.iter().map(|f| (*f).to_owned()).collect()
}

// -----------------------------------------------------------------------------
// DateTimeConverter

/// Converts to a UTC timestamp.
///
/// Text is tried as RFC 3339 first, then against each configured
/// pattern (date-only patterns yield midnight). Integers are read as
/// milliseconds since the Unix epoch. The computed default is the
/// current time.
#[derive(Debug, Clone)]
pub struct DateTimeConverter {
    formats: Vec<String>,
    policy: DefaultPolicy,
}

impl DateTimeConverter {
    pub fn new() -> Self {
        Self {
            formats: owned(DEFAULT_DATE_TIME_FORMATS),
            policy: DefaultPolicy::Null,
        }
    }

    /// Replaces the patterns tried after RFC 3339.
    pub fn with_formats<I, S>(formats: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            formats: formats.into_iter().map(Into::into).collect(),
            policy: DefaultPolicy::Null,
        }
    }

    pub fn formats(&self) -> &[String] {
        &self.formats
    }

    pub fn parse(&self, text: &str) -> Option<DateTime<Utc>> {
        if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
            return Some(parsed.with_timezone(&Utc));
        }
        self.formats.iter().find_map(|format| {
            NaiveDateTime::parse_from_str(text, format)
                .map(|naive| naive.and_utc())
                .ok()
                .or_else(|| {
                    NaiveDate::parse_from_str(text, format)
                        .ok()
                        .and_then(|date| date.and_hms_opt(0, 0, 0))
                        .map(|naive| naive.and_utc())
                })
        })
    }
}

impl Default for DateTimeConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl_default_policy!(DateTimeConverter);

impl Converter for DateTimeConverter {
    fn convert(&self, target: &'static TypeInfo, raw: Value) -> Result<Value, ConversionError> {
        if is_absent(&raw) {
            return Ok(self.policy.resolve(|| Value::DateTime(Utc::now())));
        }
        let out_of_range = |raw: &Value| ConversionError::OutOfRange {
            value: raw.to_string(),
            target: target.name(),
        };
        match raw {
            Value::DateTime(instant) => Ok(Value::DateTime(instant)),
            Value::Date(date) => date
                .and_hms_opt(0, 0, 0)
                .map(|naive| Value::DateTime(naive.and_utc()))
                .ok_or_else(|| out_of_range(&Value::Date(date))),
            Value::String(text) => self
                .parse(text.trim())
                .map(Value::DateTime)
                .ok_or_else(|| ConversionError::InvalidLiteral {
                    value: text,
                    target: target.name(),
                }),
            other => match other.as_i64() {
                Some(millis) => DateTime::from_timestamp_millis(millis)
                    .map(Value::DateTime)
                    .ok_or_else(|| out_of_range(&other)),
                None => Err(ConversionError::Incompatible {
                    found: other.type_name(),
                    target: target.name(),
                }),
            },
        }
    }
}

// -----------------------------------------------------------------------------
// DateConverter

/// Converts to a calendar date. The computed default is today (UTC).
#[derive(Debug, Clone)]
pub struct DateConverter {
    formats: Vec<String>,
    policy: DefaultPolicy,
}

impl DateConverter {
    pub fn new() -> Self {
        Self {
            formats: owned(DEFAULT_DATE_FORMATS),
            policy: DefaultPolicy::Null,
        }
    }

    pub fn with_formats<I, S>(formats: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            formats: formats.into_iter().map(Into::into).collect(),
            policy: DefaultPolicy::Null,
        }
    }

    pub fn parse(&self, text: &str) -> Option<NaiveDate> {
        if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
            return Some(parsed.with_timezone(&Utc).date_naive());
        }
        self.formats
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
    }
}

impl Default for DateConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl_default_policy!(DateConverter);

impl Converter for DateConverter {
    fn convert(&self, target: &'static TypeInfo, raw: Value) -> Result<Value, ConversionError> {
        if is_absent(&raw) {
            return Ok(self.policy.resolve(|| Value::Date(Utc::now().date_naive())));
        }
        match raw {
            Value::Date(date) => Ok(Value::Date(date)),
            Value::DateTime(instant) => Ok(Value::Date(instant.date_naive())),
            Value::String(text) => self
                .parse(text.trim())
                .map(Value::Date)
                .ok_or_else(|| ConversionError::InvalidLiteral {
                    value: text,
                    target: target.name(),
                }),
            other => match other.as_i64() {
                Some(millis) => DateTime::from_timestamp_millis(millis)
                    .map(|instant| Value::Date(instant.date_naive()))
                    .ok_or_else(|| ConversionError::OutOfRange {
                        value: other.to_string(),
                        target: target.name(),
                    }),
                None => Err(ConversionError::Incompatible {
                    found: other.type_name(),
                    target: target.name(),
                }),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, NaiveDate, TimeZone, Utc};

    use super::{DateConverter, DateTimeConverter};
    use crate::convert::{ConversionError, Converter};
    use crate::info::Typed;
    use crate::value::Value;

    #[test]
    fn date_times_parse_rfc3339_and_patterns() {
        let converter = DateTimeConverter::new();
        let target = <DateTime<Utc>>::type_info();
        let expected = Value::DateTime(Utc.with_ymd_and_hms(2023, 5, 1, 8, 30, 0).unwrap());

        assert_eq!(converter.convert(target, "2023-05-01T10:30:00+02:00".into()), Ok(expected.clone()));
        assert_eq!(converter.convert(target, "2023-05-01 08:30:00".into()), Ok(expected.clone()));
        assert_eq!(converter.convert(target, Value::I64(1_682_929_800_000)), Ok(expected));
        assert_eq!(
            converter.convert(target, "01/05/2023".into()),
            Ok(Value::DateTime(Utc.with_ymd_and_hms(2023, 5, 1, 0, 0, 0).unwrap()))
        );
        assert!(matches!(
            converter.convert(target, "yesterday".into()),
            Err(ConversionError::InvalidLiteral { .. })
        ));
    }

    #[test]
    fn custom_patterns_replace_defaults() {
        let converter = DateTimeConverter::with_formats(["%H:%M %d.%m.%Y"]);
        let target = <DateTime<Utc>>::type_info();

        assert!(converter.convert(target, "09:15 24.12.2022".into()).is_ok());
        assert!(converter.convert(target, "2022-12-24".into()).is_err());
    }

    #[test]
    fn computed_date_time_is_now() {
        let before = Utc::now();
        let value = DateTimeConverter::new()
            .with_computed_default()
            .convert(<DateTime<Utc>>::type_info(), Value::Null)
            .unwrap();
        let Value::DateTime(now) = value else {
            panic!("expected a timestamp");
        };
        assert!(now >= before);
    }

    #[test]
    fn dates_parse() {
        let converter = DateConverter::new();
        let target = NaiveDate::type_info();
        let expected = Value::Date(NaiveDate::from_ymd_opt(2020, 2, 29).unwrap());

        assert_eq!(converter.convert(target, "2020-02-29".into()), Ok(expected.clone()));
        assert_eq!(converter.convert(target, "20200229".into()), Ok(expected));
        assert!(converter.convert(target, "2020-02-30".into()).is_err());
    }
}
