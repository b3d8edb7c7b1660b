//! Concrete Grades and Dosifications
//!
//! Mix recipes per cubic meter of poured concrete for the NCh 170 strength
//! grades used in Chilean residential work. All quantities are normalized
//! "per m³": cement in kg, sand and gravel in m³, water in liters.
//!
//! Grades form a closed enum, so a grade with no recipe is unrepresentable;
//! adding a grade forces every `match` in the crate to handle it.

use serde::{Deserialize, Serialize};

use crate::errors::{CubiError, CubiResult};

/// Concrete strength grade per NCh 170
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum GradoHormigon {
    /// H20 (20 MPa) - foundations, footings
    H20,
    /// H25 (25 MPa) - general structural use
    #[default]
    H25,
    /// H30 (30 MPa) - slabs, columns
    H30,
    /// H35 (35 MPa) - heavily loaded elements
    H35,
    /// H40 (40 MPa) - special structural elements
    H40,
}

impl GradoHormigon {
    /// All grade variants for UI selection
    pub const ALL: [GradoHormigon; 5] = [
        GradoHormigon::H20,
        GradoHormigon::H25,
        GradoHormigon::H30,
        GradoHormigon::H35,
        GradoHormigon::H40,
    ];

    /// Catalog code (e.g., "H25")
    pub fn codigo(&self) -> &'static str {
        match self {
            GradoHormigon::H20 => "H20",
            GradoHormigon::H25 => "H25",
            GradoHormigon::H30 => "H30",
            GradoHormigon::H35 => "H35",
            GradoHormigon::H40 => "H40",
        }
    }

    /// Characteristic compressive strength (MPa)
    pub fn resistencia_mpa(&self) -> f64 {
        match self {
            GradoHormigon::H20 => 20.0,
            GradoHormigon::H25 => 25.0,
            GradoHormigon::H30 => 30.0,
            GradoHormigon::H35 => 35.0,
            GradoHormigon::H40 => 40.0,
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CubiResult<Self> {
        match s.to_uppercase().replace([' ', '-'], "").as_str() {
            "H20" | "20" => Ok(GradoHormigon::H20),
            "H25" | "25" => Ok(GradoHormigon::H25),
            "H30" | "30" => Ok(GradoHormigon::H30),
            "H35" | "35" => Ok(GradoHormigon::H35),
            "H40" | "40" => Ok(GradoHormigon::H40),
            _ => Err(CubiError::material_not_found(s)),
        }
    }

    /// Mix recipe for one cubic meter of this grade.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cubi_core::materiales::GradoHormigon;
    ///
    /// let dosif = GradoHormigon::H25.dosificacion();
    /// assert_eq!(dosif.cemento_kg, 340.0);
    /// ```
    pub fn dosificacion(&self) -> DosificacionHormigon {
        match self {
            GradoHormigon::H20 => DosificacionHormigon {
                grado: *self,
                cemento_kg: 300.0,
                arena_m3: 0.56,
                gravilla_m3: 0.72,
                agua_l: 180.0,
            },
            GradoHormigon::H25 => DosificacionHormigon {
                grado: *self,
                cemento_kg: 340.0,
                arena_m3: 0.54,
                gravilla_m3: 0.70,
                agua_l: 185.0,
            },
            GradoHormigon::H30 => DosificacionHormigon {
                grado: *self,
                cemento_kg: 380.0,
                arena_m3: 0.52,
                gravilla_m3: 0.68,
                agua_l: 190.0,
            },
            GradoHormigon::H35 => DosificacionHormigon {
                grado: *self,
                cemento_kg: 420.0,
                arena_m3: 0.51,
                gravilla_m3: 0.66,
                agua_l: 195.0,
            },
            GradoHormigon::H40 => DosificacionHormigon {
                grado: *self,
                cemento_kg: 460.0,
                arena_m3: 0.50,
                gravilla_m3: 0.64,
                agua_l: 200.0,
            },
        }
    }
}

impl std::fmt::Display for GradoHormigon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.codigo())
    }
}

/// Mix recipe for one cubic meter of poured concrete.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DosificacionHormigon {
    /// Grade this recipe belongs to
    pub grado: GradoHormigon,
    /// Cement (kg per m³)
    pub cemento_kg: f64,
    /// Sand (m³ per m³)
    pub arena_m3: f64,
    /// Gravel (m³ per m³)
    pub gravilla_m3: f64,
    /// Water (liters per m³)
    pub agua_l: f64,
}
