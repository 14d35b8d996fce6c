//! Picker configuration: orbit geometry, theme, and drag strategy.
//!
//! One parameterized picker covers every size/look variant. Configs can be
//! built in code from the presets or loaded from TOML:
//!
//! ```toml
//! orbit_rx = 140.0
//! orbit_ry = 84.0
//! strategy = "incremental"
//!
//! [theme]
//! sun = "#F5A524"
//! glow = false
//! ```

use floem::peniko::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::drag::AccumulationStrategy;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse picker config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid color: {0:?}")]
    InvalidColor(String),
    #[error("Invalid geometry: {field} = {value}")]
    InvalidGeometry { field: &'static str, value: f64 },
}

/// An sRGB color written as hex (`RGB`, `RRGGBB` or `RRGGBBAA`, `#` optional).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ThemeColor {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

impl ThemeColor {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    pub fn from_hex(hex: &str) -> Result<Self, ConfigError> {
        let stripped = hex.trim_start_matches('#');
        let invalid = || ConfigError::InvalidColor(hex.to_string());
        if !stripped.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
        match stripped.len() {
            3 => Ok(Self::rgb(
                channel(&stripped[0..1])? * 17,
                channel(&stripped[1..2])? * 17,
                channel(&stripped[2..3])? * 17,
            )),
            6 => Ok(Self::rgb(
                channel(&stripped[0..2])?,
                channel(&stripped[2..4])?,
                channel(&stripped[4..6])?,
            )),
            8 => Ok(Self::rgba(
                channel(&stripped[0..2])?,
                channel(&stripped[2..4])?,
                channel(&stripped[4..6])?,
                channel(&stripped[6..8])?,
            )),
            _ => Err(invalid()),
        }
    }

    /// Uppercase hex without `#`; the alpha pair is omitted when opaque.
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }

    /// Same color with alpha scaled by `factor` (0.0–1.0).
    pub fn faded(&self, factor: f64) -> Self {
        let a = (self.a as f64 * factor.clamp(0.0, 1.0)).round() as u8;
        Self { a, ..*self }
    }

    pub fn to_color(&self) -> Color {
        Color::rgba8(self.r, self.g, self.b, self.a)
    }
}

impl TryFrom<String> for ThemeColor {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<ThemeColor> for String {
    fn from(color: ThemeColor) -> Self {
        format!("#{}", color.to_hex())
    }
}

/// Colors for the orbit, sun, and orbiting body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub background: ThemeColor,
    pub orbit: ThemeColor,
    pub sun: ThemeColor,
    pub body: ThemeColor,
    pub body_outline: ThemeColor,
    pub text: ThemeColor,
    pub muted_text: ThemeColor,
    /// Layered halo around the sun.
    pub glow: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self::solar()
    }
}

impl Theme {
    pub fn solar() -> Self {
        Self {
            background: ThemeColor::rgb(250, 248, 244),
            orbit: ThemeColor::rgb(140, 140, 150),
            sun: ThemeColor::rgb(245, 165, 36),
            body: ThemeColor::rgb(59, 130, 246),
            body_outline: ThemeColor::rgb(30, 64, 175),
            text: ThemeColor::rgb(24, 24, 27),
            muted_text: ThemeColor::rgb(113, 113, 122),
            glow: true,
        }
    }

    pub fn night() -> Self {
        Self {
            background: ThemeColor::rgb(15, 17, 26),
            orbit: ThemeColor::rgb(90, 96, 120),
            sun: ThemeColor::rgb(253, 224, 71),
            body: ThemeColor::rgb(56, 189, 248),
            body_outline: ThemeColor::rgb(224, 242, 254),
            text: ThemeColor::rgb(244, 244, 245),
            muted_text: ThemeColor::rgb(161, 161, 170),
            glow: true,
        }
    }
}

/// Everything that varies between picker variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Horizontal semi-axis of the orbit ellipse, in view-box units.
    pub orbit_rx: f64,
    /// Vertical semi-axis of the orbit ellipse, in view-box units.
    pub orbit_ry: f64,
    pub sun_radius: f64,
    pub body_radius: f64,
    pub strategy: AccumulationStrategy,
    pub theme: Theme,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            orbit_rx: 200.0,
            orbit_ry: 120.0,
            sun_radius: 30.0,
            body_radius: 15.0,
            strategy: AccumulationStrategy::RunningTotal,
            theme: Theme::solar(),
        }
    }
}

impl PickerConfig {
    /// Smaller variant for tight layouts.
    pub fn compact() -> Self {
        Self {
            orbit_rx: 140.0,
            orbit_ry: 84.0,
            sun_radius: 22.0,
            body_radius: 11.0,
            strategy: AccumulationStrategy::Incremental,
            theme: Theme::solar(),
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_strategy(mut self, strategy: AccumulationStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Parse and validate a TOML document. Missing keys take default values.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("orbit_rx", self.orbit_rx),
            ("orbit_ry", self.orbit_ry),
            ("sun_radius", self.sun_radius),
            ("body_radius", self.body_radius),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidGeometry { field, value });
            }
        }
        if self.body_radius >= self.orbit_rx.min(self.orbit_ry) {
            return Err(ConfigError::InvalidGeometry {
                field: "body_radius",
                value: self.body_radius,
            });
        }
        Ok(())
    }
}
