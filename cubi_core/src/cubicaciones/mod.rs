//! # Cubicaciones (Quantity Takeoffs)
//!
//! One calculator per construction element. Each calculator follows the
//! pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `Input::validate()` - positive/finite dimension guard
//! - `calcular(input) -> CubiResult<ResultadoCubicacion>` - pure function
//!
//! Calculators are stateless and total over valid input: no I/O, no
//! shared state, bit-identical output for identical input. They fail only
//! for structurally invalid input (non-finite or non-positive dimensions,
//! zero counts), never for any valid geometry.
//!
//! ## Available Calculators
//!
//! - [`zapata`] - isolated footing
//! - [`radier`] - slab on grade with welded mesh
//! - [`muro`] - masonry wall, optionally rendered
//! - [`losa`] - elevated reinforced slab
//! - [`pilar`] - column
//! - [`viga`] - beam

pub mod losa;
pub mod muro;
pub mod pilar;
pub mod radier;
pub mod viga;
pub mod zapata;

use serde::{Deserialize, Serialize};

use crate::errors::{CubiError, CubiResult};
use crate::materiales::{GradoHormigon, FACTOR_PERDIDA};
use crate::unidades::{sacos_de_cemento, Unidad};

// Re-export commonly used types
pub use losa::LosaInput;
pub use muro::MuroInput;
pub use pilar::PilarInput;
pub use radier::RadierInput;
pub use viga::VigaInput;
pub use zapata::ZapataInput;

/// One material line of a takeoff result.
///
/// Produced only by calculators, never mutated afterwards. Quantities in
/// discrete units ([`Unidad::es_discreta`]) are always whole numbers,
/// rounded up from the exact requirement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialCubicacion {
    /// Material name (e.g., "Cemento", "Ladrillo fiscal")
    pub nombre: String,
    /// Required quantity, always >= 0
    pub cantidad: f64,
    /// Purchase/measure unit
    pub unidad: Unidad,
}

impl MaterialCubicacion {
    pub fn new(nombre: impl Into<String>, cantidad: f64, unidad: Unidad) -> Self {
        MaterialCubicacion {
            nombre: nombre.into(),
            cantidad,
            unidad,
        }
    }
}

/// Result of a takeoff calculation.
///
/// The primary measure depends on the element: wall takeoffs report
/// `superficie`, poured-concrete takeoffs report `volumen`, slab takeoffs
/// report both. `materiales` is never empty on success.
///
/// ## JSON Example
///
/// ```json
/// {
///   "superficie": null,
///   "volumen": 2.0,
///   "materiales": [
///     { "nombre": "Cemento", "cantidad": 29.0, "unidad": "sacos" },
///     { "nombre": "Arena", "cantidad": 1.134, "unidad": "m3" }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultadoCubicacion {
    /// Computed wall/plan surface (m²), when meaningful for the element
    pub superficie: Option<f64>,
    /// Computed concrete volume (m³), when meaningful for the element
    pub volumen: Option<f64>,
    /// Required materials, in catalog order
    pub materiales: Vec<MaterialCubicacion>,
}

impl ResultadoCubicacion {
    /// Find a material line by name
    pub fn material(&self, nombre: &str) -> Option<&MaterialCubicacion> {
        self.materiales.iter().find(|m| m.nombre == nombre)
    }
}

/// Guard a required dimension: must be finite and strictly positive.
pub(crate) fn validar_dimension(field: &str, value: f64) -> CubiResult<()> {
    if !value.is_finite() {
        return Err(CubiError::invalid_input(
            field,
            value.to_string(),
            "La dimensión debe ser un número finito",
        ));
    }
    if value <= 0.0 {
        return Err(CubiError::invalid_input(
            field,
            value.to_string(),
            "La dimensión debe ser positiva",
        ));
    }
    Ok(())
}

/// Guard an element count: at least one
pub(crate) fn validar_cantidad(field: &str, value: u32) -> CubiResult<()> {
    if value < 1 {
        return Err(CubiError::invalid_input(
            field,
            value.to_string(),
            "La cantidad debe ser al menos 1",
        ));
    }
    Ok(())
}

/// Materials for a poured-concrete volume.
///
/// Shared by every calculator that pours concrete (zapata, radier, losa,
/// pilar, viga): dosification scaled by volume and waste factor, with the
/// cement line converted to whole sacks.
pub(crate) fn materiales_de_hormigon(
    volumen_m3: f64,
    grado: GradoHormigon,
) -> Vec<MaterialCubicacion> {
    let dosif = grado.dosificacion();
    let cemento_kg = dosif.cemento_kg * volumen_m3 * FACTOR_PERDIDA;
    vec![
        MaterialCubicacion::new(
            format!("Cemento ({})", grado.codigo()),
            f64::from(sacos_de_cemento(cemento_kg)),
            Unidad::Sacos,
        ),
        MaterialCubicacion::new(
            "Arena",
            dosif.arena_m3 * volumen_m3 * FACTOR_PERDIDA,
            Unidad::MetrosCubicos,
        ),
        MaterialCubicacion::new(
            "Gravilla",
            dosif.gravilla_m3 * volumen_m3 * FACTOR_PERDIDA,
            Unidad::MetrosCubicos,
        ),
        MaterialCubicacion::new(
            "Agua",
            dosif.agua_l * volumen_m3 * FACTOR_PERDIDA,
            Unidad::Litros,
        ),
    ]
}

/// Element type selector, for front ends that take free-text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TipoElemento {
    Zapata,
    Radier,
    Muro,
    Losa,
    Pilar,
    Viga,
}

impl TipoElemento {
    /// All element types
    pub const ALL: [TipoElemento; 6] = [
        TipoElemento::Zapata,
        TipoElemento::Radier,
        TipoElemento::Muro,
        TipoElemento::Losa,
        TipoElemento::Pilar,
        TipoElemento::Viga,
    ];

    /// Display name
    pub fn display_name(&self) -> &'static str {
        match self {
            TipoElemento::Zapata => "Zapata",
            TipoElemento::Radier => "Radier",
            TipoElemento::Muro => "Muro",
            TipoElemento::Losa => "Losa",
            TipoElemento::Pilar => "Pilar",
            TipoElemento::Viga => "Viga",
        }
    }

    /// Parse from free text. Unknown element names surface as
    /// [`CubiError::UnsupportedCalculation`].
    pub fn from_str_flexible(s: &str) -> CubiResult<Self> {
        match s.to_lowercase().trim() {
            "zapata" => Ok(TipoElemento::Zapata),
            "radier" => Ok(TipoElemento::Radier),
            "muro" => Ok(TipoElemento::Muro),
            "losa" => Ok(TipoElemento::Losa),
            "pilar" => Ok(TipoElemento::Pilar),
            "viga" => Ok(TipoElemento::Viga),
            _ => Err(CubiError::unsupported_calculation(s)),
        }
    }
}

impl std::fmt::Display for TipoElemento {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Enum wrapper for all takeoff inputs.
///
/// Allows storing heterogeneous elements in a single collection (see
/// [`crate::proyecto::Proyecto`]) while keeping type safety and clean
/// serialization. Being a closed enum, an element without a calculator
/// cannot be represented.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ElementoCubicacion {
    /// Isolated footing
    Zapata(ZapataInput),
    /// Slab on grade
    Radier(RadierInput),
    /// Masonry wall
    Muro(MuroInput),
    /// Elevated reinforced slab
    Losa(LosaInput),
    /// Column
    Pilar(PilarInput),
    /// Beam
    Viga(VigaInput),
}

impl ElementoCubicacion {
    /// Get the user-provided label for this element
    pub fn label(&self) -> &str {
        match self {
            ElementoCubicacion::Zapata(e) => &e.label,
            ElementoCubicacion::Radier(e) => &e.label,
            ElementoCubicacion::Muro(e) => &e.label,
            ElementoCubicacion::Losa(e) => &e.label,
            ElementoCubicacion::Pilar(e) => &e.label,
            ElementoCubicacion::Viga(e) => &e.label,
        }
    }

    /// Get the element type
    pub fn tipo(&self) -> TipoElemento {
        match self {
            ElementoCubicacion::Zapata(_) => TipoElemento::Zapata,
            ElementoCubicacion::Radier(_) => TipoElemento::Radier,
            ElementoCubicacion::Muro(_) => TipoElemento::Muro,
            ElementoCubicacion::Losa(_) => TipoElemento::Losa,
            ElementoCubicacion::Pilar(_) => TipoElemento::Pilar,
            ElementoCubicacion::Viga(_) => TipoElemento::Viga,
        }
    }

    /// Run the calculator for this element
    pub fn calcular(&self) -> CubiResult<ResultadoCubicacion> {
        match self {
            ElementoCubicacion::Zapata(e) => zapata::calcular(e),
            ElementoCubicacion::Radier(e) => radier::calcular(e),
            ElementoCubicacion::Muro(e) => muro::calcular(e),
            ElementoCubicacion::Losa(e) => losa::calcular(e),
            ElementoCubicacion::Pilar(e) => pilar::calcular(e),
            ElementoCubicacion::Viga(e) => viga::calcular(e),
        }
    }
}
