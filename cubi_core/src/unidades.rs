//! # Unit Types
//!
//! Type-safe wrappers for the metric units used in quantity takeoff,
//! plus the conversion helpers that turn continuous quantities into
//! purchasable whole units.
//!
//! ## Design Philosophy
//!
//! Simple newtype wrappers rather than a full units library:
//! - Chilean takeoff work uses a small, fixed set of SI units
//! - JSON serialization stays clean (just numbers)
//! - Minimal runtime overhead
//!
//! ## Rounding policy
//!
//! Anything bought as a whole unit (cement sacks, mesh sheets, bricks) is
//! rounded **up**: a partial sack must still be purchased whole. Continuous
//! quantities (m³, m², kg, L) are never rounded by the engine; display
//! precision is the job of [`crate::formato`].
//!
//! ## Example
//!
//! ```rust
//! use cubi_core::unidades::{Centimetros, Metros, sacos_de_cemento};
//!
//! let espesor = Centimetros(10.0);
//! let en_metros: Metros = espesor.into();
//! assert_eq!(en_metros.0, 0.10);
//!
//! // 714 kg of cement in 25 kg sacks -> 29 sacks, never 28.56
//! assert_eq!(sacos_de_cemento(714.0), 29);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Weight of a standard Chilean cement sack (kg)
pub const PESO_SACO_CEMENTO_KG: f64 = 25.0;

// ============================================================================
// Length Units
// ============================================================================

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metros(pub f64);

/// Length in centimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Centimetros(pub f64);

impl From<Centimetros> for Metros {
    fn from(cm: Centimetros) -> Self {
        Metros(cm.0 / 100.0)
    }
}

impl From<Metros> for Centimetros {
    fn from(m: Metros) -> Self {
        Centimetros(m.0 * 100.0)
    }
}

// ============================================================================
// Area and Volume Units
// ============================================================================

/// Area in square meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetrosCuadrados(pub f64);

/// Volume in cubic meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetrosCubicos(pub f64);

// ============================================================================
// Mass and Liquid Units
// ============================================================================

/// Mass in kilograms
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilogramos(pub f64);

/// Liquid volume in liters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Litros(pub f64);

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Metros);
impl_arithmetic!(Centimetros);
impl_arithmetic!(MetrosCuadrados);
impl_arithmetic!(MetrosCubicos);
impl_arithmetic!(Kilogramos);
impl_arithmetic!(Litros);

// ============================================================================
// Purchase-Unit Conversions
// ============================================================================

/// Round a continuous requirement up to whole purchasable units.
///
/// Negative inputs clamp to zero; a takeoff can never require a negative
/// number of bricks or sheets.
pub fn unidades_enteras(cantidad: f64) -> u32 {
    if cantidad <= 0.0 {
        return 0;
    }
    cantidad.ceil() as u32
}

/// Convert kilograms of cement into whole 25 kg sacks (rounded up).
pub fn sacos_de_cemento(cemento_kg: f64) -> u32 {
    unidades_enteras(cemento_kg / PESO_SACO_CEMENTO_KG)
}

// ============================================================================
// Output Unit Symbols
// ============================================================================

/// Unit attached to each material line of a takeoff result.
///
/// The distinction between discrete and continuous units drives both the
/// ceiling-rounding policy (discrete quantities are always whole) and the
/// display precision in [`crate::formato`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unidad {
    /// Cubic meters (m³)
    #[serde(rename = "m3")]
    MetrosCubicos,
    /// Square meters (m²)
    #[serde(rename = "m2")]
    MetrosCuadrados,
    /// Linear meters (m)
    #[serde(rename = "m")]
    Metros,
    /// Kilograms (kg)
    #[serde(rename = "kg")]
    Kilogramos,
    /// Liters (L)
    #[serde(rename = "L")]
    Litros,
    /// Cement sacks (25 kg each)
    #[serde(rename = "sacos")]
    Sacos,
    /// Individual units (bricks)
    #[serde(rename = "unidades")]
    Unidades,
    /// Welded mesh sheets
    #[serde(rename = "planchas")]
    Planchas,
}

impl Unidad {
    /// All unit variants
    pub const ALL: [Unidad; 8] = [
        Unidad::MetrosCubicos,
        Unidad::MetrosCuadrados,
        Unidad::Metros,
        Unidad::Kilogramos,
        Unidad::Litros,
        Unidad::Sacos,
        Unidad::Unidades,
        Unidad::Planchas,
    ];

    /// Unit symbol for display
    pub fn simbolo(&self) -> &'static str {
        match self {
            Unidad::MetrosCubicos => "m³",
            Unidad::MetrosCuadrados => "m²",
            Unidad::Metros => "m",
            Unidad::Kilogramos => "kg",
            Unidad::Litros => "L",
            Unidad::Sacos => "sacos",
            Unidad::Unidades => "unidades",
            Unidad::Planchas => "planchas",
        }
    }

    /// Whether quantities in this unit are bought whole.
    ///
    /// Discrete quantities are always integers and always rounded up from
    /// the exact requirement.
    pub fn es_discreta(&self) -> bool {
        matches!(self, Unidad::Sacos | Unidad::Unidades | Unidad::Planchas)
    }
}

impl std::fmt::Display for Unidad {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.simbolo())
    }
}
