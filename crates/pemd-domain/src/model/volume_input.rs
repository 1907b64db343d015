//! Volume input modes
//!
//! Each mode carries only the fields its formula needs. The shell collects
//! loose form values into [`RawFields`] and converts them once the mode is known.

use std::str::FromStr;

use pemd_types::EstimateError;
use serde::{Deserialize, Serialize};

/// Which formula derives the volume
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputMode {
    DirectVolume,
    Dimensions,
    Surface,
    Unit,
}

impl InputMode {
    pub const ALL: [InputMode; 4] = [
        InputMode::DirectVolume,
        InputMode::Dimensions,
        InputMode::Surface,
        InputMode::Unit,
    ];

    /// Label shown on screen
    pub fn label(&self) -> &'static str {
        match self {
            InputMode::DirectVolume => "Volume direct",
            InputMode::Dimensions => "Dimensions",
            InputMode::Surface => "Surface",
            InputMode::Unit => "Unitaire",
        }
    }

    /// Label written in the "Mode de saisie" column of the CSV report.
    /// The file format only knows two values.
    pub fn report_label(&self) -> &'static str {
        match self {
            InputMode::DirectVolume => "Volume direct",
            InputMode::Dimensions | InputMode::Surface | InputMode::Unit => "Dimensions",
        }
    }
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for InputMode {
    type Err = EstimateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "direct" | "direct_volume" | "volume" | "volume direct" => Ok(InputMode::DirectVolume),
            "dimensions" | "dims" | "dim" => Ok(InputMode::Dimensions),
            "surface" | "surf" => Ok(InputMode::Surface),
            "unit" | "unitaire" | "unite" | "unité" => Ok(InputMode::Unit),
            other => Err(EstimateError::invalid(
                "mode",
                format!("unknown input mode '{}'", other),
            )),
        }
    }
}

fn default_multiplier() -> f64 {
    1.0
}

/// Raw volume inputs, one variant per input mode
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum VolumeInput {
    DirectVolume {
        volume: f64,
        #[serde(default = "default_multiplier")]
        multiplier: f64,
    },
    Dimensions {
        length: f64,
        width: f64,
        height: f64,
        #[serde(default = "default_multiplier")]
        multiplier: f64,
    },
    Surface {
        surface: f64,
        thickness: f64,
        #[serde(default = "default_multiplier")]
        multiplier: f64,
    },
    Unit {
        unit_volume: f64,
        #[serde(default = "default_multiplier")]
        multiplier: f64,
    },
}

impl VolumeInput {
    pub fn mode(&self) -> InputMode {
        match self {
            VolumeInput::DirectVolume { .. } => InputMode::DirectVolume,
            VolumeInput::Dimensions { .. } => InputMode::Dimensions,
            VolumeInput::Surface { .. } => InputMode::Surface,
            VolumeInput::Unit { .. } => InputMode::Unit,
        }
    }

    /// Repeat-count factor
    pub fn multiplier(&self) -> f64 {
        match *self {
            VolumeInput::DirectVolume { multiplier, .. }
            | VolumeInput::Dimensions { multiplier, .. }
            | VolumeInput::Surface { multiplier, .. }
            | VolumeInput::Unit { multiplier, .. } => multiplier,
        }
    }

    /// (length, width, height), only for the dimensions mode
    pub fn dimensions(&self) -> Option<(f64, f64, f64)> {
        match *self {
            VolumeInput::Dimensions {
                length,
                width,
                height,
                ..
            } => Some((length, width, height)),
            _ => None,
        }
    }
}

/// Loose form values as typed by the user, any of which may be absent
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RawFields {
    pub volume: Option<f64>,
    pub length: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub surface: Option<f64>,
    pub thickness: Option<f64>,
    pub unit_volume: Option<f64>,
    /// Missing means 1
    pub multiplier: Option<f64>,
}

fn required(value: Option<f64>, field: &'static str) -> Result<f64, EstimateError> {
    value.ok_or_else(|| EstimateError::invalid(field, "required field is missing"))
}

impl RawFields {
    /// Pick the fields the mode needs; fields of other modes are ignored
    pub fn into_input(self, mode: InputMode) -> Result<VolumeInput, EstimateError> {
        let multiplier = self.multiplier.unwrap_or_else(default_multiplier);
        let input = match mode {
            InputMode::DirectVolume => VolumeInput::DirectVolume {
                volume: required(self.volume, "volume")?,
                multiplier,
            },
            InputMode::Dimensions => VolumeInput::Dimensions {
                length: required(self.length, "length")?,
                width: required(self.width, "width")?,
                height: required(self.height, "height")?,
                multiplier,
            },
            InputMode::Surface => VolumeInput::Surface {
                surface: required(self.surface, "surface")?,
                thickness: required(self.thickness, "thickness")?,
                multiplier,
            },
            InputMode::Unit => VolumeInput::Unit {
                unit_volume: required(self.unit_volume, "unit_volume")?,
                multiplier,
            },
        };
        Ok(input)
    }
}
