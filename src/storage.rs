use crate::physics::{
    AxialTilt, CyclePosition, Eccentricity, DEFAULT_ECCENTRICITY, DEFAULT_LATITUDE_DEG,
    DEFAULT_TILT_DEG,
};
use leptos::*;
use serde::{Deserialize, Serialize};

const STORAGE_KEY: &str = "milankovitch_settings";

/// Slider positions remembered between visits. Uploaded data is never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredSettings {
    #[serde(default = "default_tilt")]
    pub tilt_deg: f64,
    #[serde(default = "default_eccentricity")]
    pub eccentricity: f64,
    #[serde(default)]
    pub precession_years: u32,
    #[serde(default = "default_latitude")]
    pub latitude_deg: f64,
}

fn default_tilt() -> f64 {
    DEFAULT_TILT_DEG
}

fn default_eccentricity() -> f64 {
    DEFAULT_ECCENTRICITY
}

fn default_latitude() -> f64 {
    DEFAULT_LATITUDE_DEG
}

impl Default for StoredSettings {
    fn default() -> Self {
        Self {
            tilt_deg: DEFAULT_TILT_DEG,
            eccentricity: DEFAULT_ECCENTRICITY,
            precession_years: 0,
            latitude_deg: DEFAULT_LATITUDE_DEG,
        }
    }
}

impl StoredSettings {
    /// Pull every field back into the range the sliders allow.
    ///
    /// Stored JSON may come from an older build or be edited by hand.
    pub fn sanitized(self) -> Self {
        let latitude_deg = if self.latitude_deg.is_finite() {
            self.latitude_deg.clamp(-90.0, 90.0)
        } else {
            DEFAULT_LATITUDE_DEG
        };
        Self {
            tilt_deg: self.tilt().degrees(),
            eccentricity: self.eccentricity().value(),
            precession_years: self.cycle_position().years(),
            latitude_deg,
        }
    }

    pub fn tilt(&self) -> AxialTilt {
        AxialTilt::clamped(self.tilt_deg)
    }

    pub fn eccentricity(&self) -> Eccentricity {
        Eccentricity::clamped(self.eccentricity)
    }

    pub fn cycle_position(&self) -> CyclePosition {
        CyclePosition::from_years(self.precession_years).unwrap_or_default()
    }
}

/// Decode stored JSON, falling back to defaults when it is unreadable.
pub fn parse_settings(json: &str) -> StoredSettings {
    match serde_json::from_str::<StoredSettings>(json) {
        Ok(settings) => settings.sanitized(),
        Err(e) => {
            log::warn!("failed to parse stored settings, using defaults: {}", e);
            StoredSettings::default()
        }
    }
}

/// Returns `None` outside a browser or when storage is disabled
/// (private browsing, blocked third-party frames).
fn get_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Load settings from localStorage, or defaults if there are none.
pub fn load_settings() -> StoredSettings {
    let Some(storage) = get_storage() else {
        return StoredSettings::default();
    };
    match storage.get_item(STORAGE_KEY) {
        Ok(Some(json)) => parse_settings(&json),
        Ok(None) => StoredSettings::default(),
        Err(_) => {
            log::warn!("could not read from localStorage, using defaults");
            StoredSettings::default()
        }
    }
}

/// Save settings to localStorage. Failures are logged and otherwise ignored.
pub fn save_settings(settings: &StoredSettings) {
    let Some(storage) = get_storage() else {
        return;
    };
    let json = match serde_json::to_string(settings) {
        Ok(json) => json,
        Err(e) => {
            log::warn!("failed to serialize settings: {}", e);
            return;
        }
    };
    if storage.set_item(STORAGE_KEY, &json).is_err() {
        log::warn!("could not save settings; storage may be full or disabled");
    }
}

pub fn clear_settings() {
    if let Some(storage) = get_storage() {
        let _ = storage.remove_item(STORAGE_KEY);
    }
}

/// One reactive signal per setting, shared by every page through context.
#[derive(Clone, Copy)]
pub struct SharedSettings {
    pub tilt_deg: RwSignal<f64>,
    pub eccentricity: RwSignal<f64>,
    pub precession: RwSignal<CyclePosition>,
    pub latitude_deg: RwSignal<f64>,
}

impl SharedSettings {
    pub fn new(stored: StoredSettings) -> Self {
        let stored = stored.sanitized();
        Self {
            tilt_deg: create_rw_signal(stored.tilt_deg),
            eccentricity: create_rw_signal(stored.eccentricity),
            precession: create_rw_signal(stored.cycle_position()),
            latitude_deg: create_rw_signal(stored.latitude_deg),
        }
    }

    /// Settings provided by the root component, or a fresh set loaded from
    /// storage when rendered outside it.
    pub fn instance() -> Self {
        use_context::<SharedSettings>().unwrap_or_else(|| SharedSettings::new(load_settings()))
    }

    pub fn to_stored(&self) -> StoredSettings {
        StoredSettings {
            tilt_deg: self.tilt_deg.get(),
            eccentricity: self.eccentricity.get(),
            precession_years: self.precession.get().years(),
            latitude_deg: self.latitude_deg.get(),
        }
    }
}

pub fn format_degrees(deg: f64) -> String {
    format!("{:.1}°", deg)
}

pub fn format_percent(pct: f64) -> String {
    format!("{:.1}%", pct)
}

/// Whole years with thousands separators, e.g. `13,000 years`.
pub fn format_years(years: u32) -> String {
    let digits = years.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{} years", grouped)
}

/// Signed rate of change per decade, e.g. `+0.183 per decade`.
pub fn format_rate(per_decade: f64) -> String {
    format!("{:+.3} per decade", per_decade)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = StoredSettings::default();
        assert_eq!(settings.tilt_deg, 23.5);
        assert_eq!(settings.eccentricity, 0.0167);
        assert_eq!(settings.precession_years, 0);
        assert_eq!(settings.latitude_deg, 37.0);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let settings = parse_settings(r#"{"tilt_deg": 22.0}"#);
        assert_eq!(settings.tilt_deg, 22.0);
        assert_eq!(settings.eccentricity, DEFAULT_ECCENTRICITY);
        assert_eq!(settings.latitude_deg, DEFAULT_LATITUDE_DEG);
        assert_eq!(settings.cycle_position(), CyclePosition::Start);
    }

    #[test]
    fn test_corrupted_json_falls_back_to_defaults() {
        assert_eq!(parse_settings("{not json"), StoredSettings::default());
        assert_eq!(parse_settings(r#"{"tilt_deg": "steep"}"#), StoredSettings::default());
    }

    #[test]
    fn test_out_of_range_values_are_clamped() {
        let settings = parse_settings(
            r#"{"tilt_deg": 40.0, "eccentricity": -0.3, "precession_years": 23000, "latitude_deg": 120.0}"#,
        );
        assert_eq!(settings.tilt_deg, 24.5);
        assert_eq!(settings.eccentricity, 0.0);
        assert_eq!(settings.precession_years, 0);
        assert_eq!(settings.latitude_deg, 90.0);
    }

    #[test]
    fn test_half_cycle_survives_roundtrip() {
        let settings = StoredSettings {
            precession_years: 13_000,
            ..Default::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        let restored = parse_settings(&json);
        assert_eq!(restored, settings);
        assert_eq!(restored.cycle_position(), CyclePosition::HalfCycle);
    }

    #[test]
    fn test_format_years() {
        assert_eq!(format_years(0), "0 years");
        assert_eq!(format_years(950), "950 years");
        assert_eq!(format_years(13_000), "13,000 years");
        assert_eq!(format_years(26_000), "26,000 years");
        assert_eq!(format_years(1_234_567), "1,234,567 years");
    }

    #[test]
    fn test_format_helpers() {
        assert_eq!(format_degrees(23.5), "23.5°");
        assert_eq!(format_percent(97.24), "97.2%");
        assert_eq!(format_rate(0.1832), "+0.183 per decade");
        assert_eq!(format_rate(-0.05), "-0.050 per decade");
    }
}
