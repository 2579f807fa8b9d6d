use core::fmt::Write;

use chrono::SecondsFormat;

use crate::render::Renderer;
use crate::type_traits::{TypeTraitEnumerated, TypeTraitFromId};
use crate::value::Value;

/// Renders enumerated constants by their label.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnumeratedRenderer;

impl Renderer for EnumeratedRenderer {
    fn render(&self, value: &Value) -> Value {
        value
            .as_object()
            .and_then(|object| {
                let data = object.type_info().get_trait::<TypeTraitEnumerated>()?;
                data.label_of(object.as_reflect())
            })
            .map_or_else(|| value.clone(), Value::String)
    }
}

/// Renders entities as `TypeName#id`, or `TypeName#new` when unsaved.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityRenderer;

impl Renderer for IdentityRenderer {
    fn render(&self, value: &Value) -> Value {
        let Some(object) = value.as_object() else {
            return value.clone();
        };
        let info = object.type_info();
        match info.get_trait::<TypeTraitFromId>() {
            Some(data) => match data.id_of(object.as_reflect()) {
                Some(id) => Value::String(format!("{}#{id}", info.name())),
                None => Value::String(format!("{}#new", info.name())),
            },
            None => value.clone(),
        }
    }
}

/// Formats timestamps and dates with `chrono` patterns.
///
/// A pattern `chrono` cannot format falls back to RFC 3339.
#[derive(Debug, Clone)]
pub struct DateTimeRenderer {
    date_time_format: String,
    date_format: String,
}

impl DateTimeRenderer {
    pub const DEFAULT_DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
    pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

    pub fn new() -> Self {
        Self::with_formats(Self::DEFAULT_DATE_TIME_FORMAT, Self::DEFAULT_DATE_FORMAT)
    }

    pub fn with_formats(date_time_format: impl Into<String>, date_format: impl Into<String>) -> Self {
        Self {
            date_time_format: date_time_format.into(),
            date_format: date_format.into(),
        }
    }
}

impl Default for DateTimeRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for DateTimeRenderer {
    fn render(&self, value: &Value) -> Value {
        let mut out = String::new();
        let formatted = match value {
            Value::DateTime(instant) => write!(out, "{}", instant.format(&self.date_time_format))
                .map_err(|_| instant.to_rfc3339_opts(SecondsFormat::Secs, true)),
            Value::Date(date) => {
                write!(out, "{}", date.format(&self.date_format)).map_err(|_| date.to_string())
            }
            other => return other.clone(),
        };
        match formatted {
            Ok(()) => Value::String(out),
            Err(fallback) => {
                log::warn!("invalid display pattern, falling back to `{fallback}`");
                Value::String(fallback)
            }
        }
    }
}

/// Renders booleans with custom labels. Not registered by default.
#[derive(Debug, Clone)]
pub struct BooleanRenderer {
    yes: String,
    no: String,
}

impl BooleanRenderer {
    pub fn new(yes: impl Into<String>, no: impl Into<String>) -> Self {
        Self {
            yes: yes.into(),
            no: no.into(),
        }
    }
}

impl Renderer for BooleanRenderer {
    fn render(&self, value: &Value) -> Value {
        match value {
            Value::Bool(true) => Value::String(self.yes.clone()),
            Value::Bool(false) => Value::String(self.no.clone()),
            other => other.clone(),
        }
    }
}
