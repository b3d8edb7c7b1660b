//! # Muro (Masonry Wall) Takeoff
//!
//! Computes bricks, laying mortar and optional render (estuco) for a
//! masonry wall.
//!
//! ## Formulas
//!
//! ```text
//! superficie = largo x alto
//! ladrillos  = ceil(superficie x rendimiento x factor de pérdida)
//! mortero    = superficie x consumo por m² x factor de pérdida
//! estuco     = superficie x 0.02 m³/m² x factor de pérdida   (si aplica)
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::CubiResult;
use crate::materiales::{TipoLadrillo, FACTOR_PERDIDA};
use crate::unidades::{unidades_enteras, Unidad};

use super::{validar_dimension, MaterialCubicacion, ResultadoCubicacion};

/// Render mortar consumption per m² of wall face (m³), for a 2 cm coat
const ESTUCO_M3_POR_M2: f64 = 0.02;

/// Input parameters for a masonry wall takeoff.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "M-1",
///   "largo_m": 5.0,
///   "alto_m": 2.5,
///   "ladrillo": "Fiscal",
///   "con_estuco": true
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MuroInput {
    /// User label for this element (e.g., "M-1", "Muro medianero")
    pub label: String,

    /// Wall length (m)
    pub largo_m: f64,

    /// Wall height (m)
    pub alto_m: f64,

    /// Brick format
    pub ladrillo: TipoLadrillo,

    /// Apply a render coat (estuco) over the finished wall
    #[serde(default)]
    pub con_estuco: bool,
}

impl MuroInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CubiResult<()> {
        validar_dimension("largo_m", self.largo_m)?;
        validar_dimension("alto_m", self.alto_m)?;
        Ok(())
    }

    /// Wall surface (m²)
    pub fn superficie_m2(&self) -> f64 {
        self.largo_m * self.alto_m
    }
}

/// Compute the masonry wall takeoff.
pub fn calcular(input: &MuroInput) -> CubiResult<ResultadoCubicacion> {
    input.validate()?;

    let superficie = input.superficie_m2();
    let ladrillo = input.ladrillo.propiedades();

    let unidades = unidades_enteras(superficie * ladrillo.rendimiento_por_m2 * FACTOR_PERDIDA);
    let mortero_m3 = superficie * ladrillo.mortero_m3_por_m2 * FACTOR_PERDIDA;

    let mut materiales = vec![
        MaterialCubicacion::new(ladrillo.nombre, f64::from(unidades), Unidad::Unidades),
        MaterialCubicacion::new("Mortero de pega", mortero_m3, Unidad::MetrosCubicos),
    ];

    if input.con_estuco {
        materiales.push(MaterialCubicacion::new(
            "Mortero de estuco",
            superficie * ESTUCO_M3_POR_M2 * FACTOR_PERDIDA,
            Unidad::MetrosCubicos,
        ));
    }

    Ok(ResultadoCubicacion {
        superficie: Some(superficie),
        volumen: None,
        materiales,
    })
}
