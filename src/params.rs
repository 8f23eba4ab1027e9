//! Slider values → key-file keys.
//!
//! The key file writes every value with one decimal place (`R0=1.0`,
//! `R0=2.4-Immunization=0.3`). Values are snapped to their slider step in
//! whole tenths and rendered from the integer, so `1.0`, `9.9` and the step
//! boundaries never depend on how a float happens to print.

use crate::error::{NavResult, NavigatorError};
use crate::index::ParameterKey;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

const R0_MIN_TENTHS: u32 = 1;
const R0_MAX_TENTHS: u32 = 99;
const IMMUNIZATION_MAX_TENTHS: u32 = 9;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, ValueEnum, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Topic {
    /// R0 sweep in steps of 0.1
    Transmission,
    /// R0 sweep in steps of 0.2 crossed with immunization rate in steps of 0.1
    Immunization,
}

impl Topic {
    fn r0_step_tenths(self) -> u32 {
        match self {
            Topic::Transmission => 1,
            Topic::Immunization => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "topic", rename_all = "kebab-case")]
pub enum Selection {
    Transmission { r0_tenths: u32 },
    Immunization { r0_tenths: u32, immunization_tenths: u32 },
}

impl Selection {
    pub fn default_for(topic: Topic) -> Self {
        match topic {
            Topic::Transmission => Selection::Transmission { r0_tenths: 15 },
            Topic::Immunization => Selection::Immunization {
                r0_tenths: 16,
                immunization_tenths: 0,
            },
        }
    }

    pub fn transmission(r0: f64) -> NavResult<Self> {
        Ok(Selection::Transmission {
            r0_tenths: snap_r0(r0, Topic::Transmission)?,
        })
    }

    pub fn immunization(r0: f64, immunization: f64) -> NavResult<Self> {
        Ok(Selection::Immunization {
            r0_tenths: snap_r0(r0, Topic::Immunization)?,
            immunization_tenths: snap_immunization(immunization)?,
        })
    }

    pub fn topic(&self) -> Topic {
        match self {
            Selection::Transmission { .. } => Topic::Transmission,
            Selection::Immunization { .. } => Topic::Immunization,
        }
    }

    pub fn with_r0(self, r0: f64) -> NavResult<Self> {
        let r0_tenths = snap_r0(r0, self.topic())?;
        Ok(match self {
            Selection::Transmission { .. } => Selection::Transmission { r0_tenths },
            Selection::Immunization {
                immunization_tenths,
                ..
            } => Selection::Immunization {
                r0_tenths,
                immunization_tenths,
            },
        })
    }

    pub fn with_immunization(self, immunization: f64) -> NavResult<Self> {
        match self {
            Selection::Immunization { r0_tenths, .. } => Ok(Selection::Immunization {
                r0_tenths,
                immunization_tenths: snap_immunization(immunization)?,
            }),
            Selection::Transmission { .. } => Err(NavigatorError::InvalidParameter(
                "the transmission topic has no immunization rate".to_string(),
            )),
        }
    }

    pub fn r0(&self) -> String {
        match self {
            Selection::Transmission { r0_tenths } | Selection::Immunization { r0_tenths, .. } => {
                format_tenths(*r0_tenths)
            }
        }
    }

    pub fn key(&self) -> ParameterKey {
        match self {
            Selection::Transmission { r0_tenths } => {
                ParameterKey::new(format!("R0={}", format_tenths(*r0_tenths)))
            }
            Selection::Immunization {
                r0_tenths,
                immunization_tenths,
            } => ParameterKey::new(format!(
                "R0={}-Immunization={}",
                format_tenths(*r0_tenths),
                format_tenths(*immunization_tenths)
            )),
        }
    }

    /// Chart title suffix, e.g. `R0=1.6 / Immunization Rate 30%`.
    pub fn caption(&self) -> String {
        match self {
            Selection::Transmission { r0_tenths } => format!("R0={}", format_tenths(*r0_tenths)),
            Selection::Immunization {
                r0_tenths,
                immunization_tenths,
            } => format!(
                "R0={} / Immunization Rate {}%",
                format_tenths(*r0_tenths),
                immunization_tenths * 10
            ),
        }
    }
}

pub fn format_tenths(tenths: u32) -> String {
    format!("{}.{}", tenths / 10, tenths % 10)
}

fn snap_r0(r0: f64, topic: Topic) -> NavResult<u32> {
    let tenths = snap_to_step(r0, topic.r0_step_tenths(), "R0")?;
    if !(R0_MIN_TENTHS..=R0_MAX_TENTHS).contains(&tenths) {
        return Err(NavigatorError::InvalidParameter(format!(
            "R0 {} is outside {}..={}",
            r0,
            format_tenths(R0_MIN_TENTHS),
            format_tenths(R0_MAX_TENTHS)
        )));
    }
    Ok(tenths)
}

fn snap_immunization(rate: f64) -> NavResult<u32> {
    let tenths = snap_to_step(rate, 1, "immunization rate")?;
    if tenths > IMMUNIZATION_MAX_TENTHS {
        return Err(NavigatorError::InvalidParameter(format!(
            "immunization rate {} is outside 0.0..={}",
            rate,
            format_tenths(IMMUNIZATION_MAX_TENTHS)
        )));
    }
    Ok(tenths)
}

const SNAP_EPSILON: f64 = 1e-9;

/// Nearest multiple of `step` tenths; halves round away from zero.
fn snap_to_step(value: f64, step: u32, name: &str) -> NavResult<u32> {
    if !value.is_finite() || value < 0.0 {
        return Err(NavigatorError::InvalidParameter(format!(
            "{} must be a finite non-negative number, got {}",
            name, value
        )));
    }
    // 1.15 * 10.0 is 11.499999999999998; nudge so decimal halves stay halves.
    let steps = (value * 10.0 / step as f64 + SNAP_EPSILON).round();
    if steps > (u32::MAX / step) as f64 {
        return Err(NavigatorError::InvalidParameter(format!(
            "{} {} is too large",
            name, value
        )));
    }
    Ok(steps as u32 * step)
}
