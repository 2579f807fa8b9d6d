use serde::{Deserialize, Serialize};

use crate::convert::builtin::DEFAULT_DATE_TIME_FORMATS;
use crate::render::DateTimeRenderer;

/// Settings for [`PropertyPathEngine::from_config`].
///
/// Every field has a default, so partial documents deserialize:
///
/// ```
/// use pk_reflect::engine::EngineConfig;
///
/// let config: EngineConfig = serde_json::from_str(r#"{ "computed_defaults": true }"#).unwrap();
/// assert!(config.computed_defaults);
/// assert!(config.class_property);
/// ```
///
/// [`PropertyPathEngine::from_config`]: crate::engine::PropertyPathEngine::from_config
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Expose the read-only `class` pseudo-property.
    pub class_property: bool,
    /// Built-in converters yield computed defaults for absent input.
    pub computed_defaults: bool,
    pub date_time: DateTimeConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            class_property: true,
            computed_defaults: false,
            date_time: DateTimeConfig::default(),
        }
    }
}

/// Date-time parsing and display patterns, in `chrono` strftime syntax.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateTimeConfig {
    /// Patterns tried in order after RFC 3339.
    pub input_formats: Vec<String>,
    pub display_format: String,
}

impl Default for DateTimeConfig {
    fn default() -> Self {
        Self {
            input_formats: DEFAULT_DATE_TIME_FORMATS.iter().map(|&format| format.to_owned()).collect(),
            display_format: DateTimeRenderer::DEFAULT_DATE_TIME_FORMAT.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DateTimeConfig, EngineConfig};

    #[test]
    fn empty_documents_use_defaults() {
        let config: EngineConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, EngineConfig::default());

        let config: EngineConfig = ron::from_str("()").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn ron_document() {
        let config: EngineConfig = ron::from_str(
            r#"(
                class_property: false,
                date_time: (
                    input_formats: ["%d.%m.%Y %H:%M"],
                    display_format: "%d.%m.%Y",
                ),
            )"#,
        )
        .unwrap();

        assert!(!config.class_property);
        assert!(!config.computed_defaults);
        assert_eq!(config.date_time.input_formats, ["%d.%m.%Y %H:%M"]);
        assert_eq!(config.date_time.display_format, "%d.%m.%Y");
    }

    #[test]
    fn json_round_trip() {
        let config = EngineConfig {
            computed_defaults: true,
            date_time: DateTimeConfig {
                display_format: "%H:%M".to_owned(),
                ..DateTimeConfig::default()
            },
            ..EngineConfig::default()
        };
        let text = serde_json::to_string(&config).unwrap();
        assert_eq!(serde_json::from_str::<EngineConfig>(&text).unwrap(), config);
    }
}
