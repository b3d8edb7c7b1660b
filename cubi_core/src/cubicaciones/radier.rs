//! # Radier (Slab on Grade) Takeoff
//!
//! Computes concrete and welded-mesh requirements for a ground-bearing
//! slab. Thickness comes in centimeters as specified on drawings.
//!
//! ## Formulas
//!
//! ```text
//! volumen  = largo x ancho x (espesor/100)
//! planchas = ceil((largo x ancho) / area de plancha)
//! ```
//!
//! Mesh sheets are cut to fit on site, so the sheet count covers the plan
//! area without an additional waste multiplier.

use serde::{Deserialize, Serialize};

use crate::errors::CubiResult;
use crate::materiales::{GradoHormigon, MallaAcma};
use crate::unidades::{unidades_enteras, Centimetros, Metros, Unidad};

use super::{
    materiales_de_hormigon, validar_dimension, MaterialCubicacion, ResultadoCubicacion,
};

/// Input parameters for a slab-on-grade takeoff.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "R-1",
///   "largo_m": 10.0,
///   "ancho_m": 8.0,
///   "espesor_cm": 10.0,
///   "grado": "H25",
///   "malla": "C-92"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadierInput {
    /// User label for this element (e.g., "R-1", "Radier bodega")
    pub label: String,

    /// Slab length (m)
    pub largo_m: f64,

    /// Slab width (m)
    pub ancho_m: f64,

    /// Slab thickness (cm)
    pub espesor_cm: f64,

    /// Concrete grade
    pub grado: GradoHormigon,

    /// Welded mesh reinforcement
    pub malla: MallaAcma,
}

impl RadierInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CubiResult<()> {
        validar_dimension("largo_m", self.largo_m)?;
        validar_dimension("ancho_m", self.ancho_m)?;
        validar_dimension("espesor_cm", self.espesor_cm)?;
        Ok(())
    }

    /// Plan surface (m²)
    pub fn superficie_m2(&self) -> f64 {
        self.largo_m * self.ancho_m
    }

    /// Concrete volume (m³)
    pub fn volumen_m3(&self) -> f64 {
        let espesor: Metros = Centimetros(self.espesor_cm).into();
        self.superficie_m2() * espesor.0
    }
}

/// Compute the slab-on-grade takeoff.
pub fn calcular(input: &RadierInput) -> CubiResult<ResultadoCubicacion> {
    input.validate()?;

    let superficie = input.superficie_m2();
    let volumen = input.volumen_m3();

    let malla = input.malla.propiedades();
    let planchas = unidades_enteras(superficie / malla.area_plancha_m2());

    let mut materiales = materiales_de_hormigon(volumen, input.grado);
    materiales.push(MaterialCubicacion::new(
        malla.nombre,
        f64::from(planchas),
        Unidad::Planchas,
    ));

    Ok(ResultadoCubicacion {
        superficie: Some(superficie),
        volumen: Some(volumen),
        materiales,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn radier_tipo() -> RadierInput {
        RadierInput {
            label: "R-1".to_string(),
            largo_m: 10.0,
            ancho_m: 8.0,
            espesor_cm: 10.0,
            grado: GradoHormigon::H25,
            malla: MallaAcma::C92,
        }
    }

    #[test]
    fn test_escenario_de_referencia() {
        // 10 x 8 x 0.10 = 8.0 m³; 80 m² / 13 m² -> 7 planchas
        let resultado = calcular(&radier_tipo()).unwrap();
        assert_eq!(resultado.volumen, Some(8.0));
        assert_eq!(resultado.superficie, Some(80.0));

        let planchas = resultado.material("Malla ACMA C-92").unwrap();
        assert_eq!(planchas.cantidad, 7.0);
        assert_eq!(planchas.unidad, Unidad::Planchas);
    }

    #[test]
    fn test_planchas_cubren_la_superficie() {
        let resultado = calcular(&radier_tipo()).unwrap();
        let planchas = resultado.material("Malla ACMA C-92").unwrap();
        let area_plancha = MallaAcma::C92.propiedades().area_plancha_m2();
        assert!(planchas.cantidad * area_plancha >= resultado.superficie.unwrap());
    }

    #[test]
    fn test_superficie_escala_cuadrado() {
        let base = calcular(&radier_tipo()).unwrap().superficie.unwrap();
        let mut escalado = radier_tipo();
        escalado.largo_m *= 2.0;
        escalado.ancho_m *= 2.0;
        let resultado = calcular(&escalado).unwrap().superficie.unwrap();
        assert!((resultado - 4.0 * base).abs() < 1e-9);
    }

    #[test]
    fn test_espesor_en_centimetros() {
        let mut input = radier_tipo();
        input.espesor_cm = 15.0;
        let resultado = calcular(&input).unwrap();
        assert!((resultado.volumen.unwrap() - 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_malla_mas_pesada_no_cambia_planchas() {
        // all designations ship in the same sheet size
        let mut input = radier_tipo();
        input.malla = MallaAcma::C257;
        let resultado = calcular(&input).unwrap();
        let planchas = resultado.material("Malla ACMA C-257").unwrap();
        assert_eq!(planchas.cantidad, 7.0);
    }

    #[test]
    fn test_dimensiones_invalidas() {
        let mut input = radier_tipo();
        input.espesor_cm = -10.0;
        assert!(calcular(&input).is_err());
    }
}
