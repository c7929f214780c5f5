use crate::error::SettingsError;
use dioxus::logger::tracing;
use serde::{Deserialize, Serialize};

const EMBEDDED_SETTINGS: &str = include_str!("../assets/soundboard.json");

const DEFAULT_VOLUME: f64 = 1.0;

/// One clip as declared in the settings file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClipEntry {
    pub name: String,
    pub src: String,
    #[serde(default)]
    pub label: Option<String>,
}

impl ClipEntry {
    fn new(name: &str, src: &str) -> Self {
        Self {
            name: name.to_string(),
            src: src.to_string(),
            label: None,
        }
    }
}

/// Startup configuration. Nothing here is written back; volume and mute
/// always start from these values on page load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoundboardSettings {
    #[serde(default = "default_initial_volume")]
    pub initial_volume: f64,
    #[serde(default = "default_clips")]
    pub clips: Vec<ClipEntry>,
}

fn default_initial_volume() -> f64 {
    DEFAULT_VOLUME
}

fn default_clips() -> Vec<ClipEntry> {
    vec![
        ClipEntry::new("laugh", "/sounds/laugh.mp3"),
        ClipEntry::new("car", "/sounds/V12.mp3"),
        ClipEntry::new("bike", "/sounds/bike.mp3"),
        ClipEntry::new("weight", "/sounds/weight.mp3"),
    ]
}

impl Default for SoundboardSettings {
    fn default() -> Self {
        Self {
            initial_volume: default_initial_volume(),
            clips: default_clips(),
        }
    }
}

impl SoundboardSettings {
    pub fn from_json(raw: &str) -> Result<Self, SettingsError> {
        let mut settings: Self = serde_json::from_str(raw)?;
        settings.initial_volume = normalize_volume(settings.initial_volume);
        Ok(settings)
    }

    /// Settings bundled into the binary, falling back to the built-in defaults.
    pub fn load() -> Self {
        match Self::from_json(EMBEDDED_SETTINGS) {
            Ok(settings) => settings,
            Err(err) => {
                tracing::warn!("[settings] {err}; using built-in clip list");
                Self::default()
            }
        }
    }
}

/// Bring a volume into [0, 1]. Whole numbers in 2..=100 are read as percents
/// (`80` -> `0.8`); anything else is clamped, so `1.5` becomes `1.0`.
pub fn normalize_volume(value: f64) -> f64 {
    if !value.is_finite() {
        return DEFAULT_VOLUME;
    }
    if value > 1.0 && value <= 100.0 && value.fract() == 0.0 {
        return value / 100.0;
    }
    value.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn embedded_settings_parse() {
        let settings = SoundboardSettings::from_json(EMBEDDED_SETTINGS).unwrap();
        let names: Vec<&str> = settings.clips.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["laugh", "car", "bike", "weight"]);
        assert_relative_eq!(settings.initial_volume, 1.0);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let settings = SoundboardSettings::from_json("{}").unwrap();
        assert_eq!(settings, SoundboardSettings::default());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(
            SoundboardSettings::from_json("{ \"clips\": 3 }"),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn slightly_loud_initial_volume_is_clamped() {
        let settings = SoundboardSettings::from_json(r#"{ "initial_volume": 1.5 }"#).unwrap();
        assert_relative_eq!(settings.initial_volume, 1.0);
    }

    #[test]
    fn initial_volume_is_normalized() {
        let settings = SoundboardSettings::from_json(r#"{ "initial_volume": 80 }"#).unwrap();
        assert_relative_eq!(settings.initial_volume, 0.8);
        assert_relative_eq!(normalize_volume(-0.5), 0.0);
        assert_relative_eq!(normalize_volume(f64::NAN), DEFAULT_VOLUME);
    }

    #[test]
    fn percent_scaling_only_applies_to_percent_range() {
        assert_relative_eq!(normalize_volume(1.0), 1.0);
        assert_relative_eq!(normalize_volume(1.5), 1.0);
        assert_relative_eq!(normalize_volume(99.5), 1.0);
        assert_relative_eq!(normalize_volume(100.0), 1.0);
        assert_relative_eq!(normalize_volume(80.0), 0.8);
        assert_relative_eq!(normalize_volume(250.0), 1.0);
        assert_relative_eq!(normalize_volume(0.35), 0.35);
    }
}
