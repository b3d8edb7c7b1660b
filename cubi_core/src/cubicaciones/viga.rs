//! # Viga (Beam) Takeoff
//!
//! Computes the concrete volume and materials for one or many identical
//! rectangular beams. The span comes in meters; the cross-section in
//! centimeters, as read off structural drawings.
//!
//! ## Formula
//!
//! ```text
//! volumen = largo x (base/100) x (altura/100) x cantidad
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::CubiResult;
use crate::materiales::GradoHormigon;
use crate::unidades::{Centimetros, Metros};

use super::zapata::cantidad_default;
use super::{
    materiales_de_hormigon, validar_cantidad, validar_dimension, ResultadoCubicacion,
};

/// Input parameters for a beam takeoff.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "V-1",
///   "largo_m": 4.5,
///   "base_cm": 20.0,
///   "altura_cm": 40.0,
///   "grado": "H25",
///   "cantidad": 3
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VigaInput {
    /// User label for this element (e.g., "V-1", "Viga cadena")
    pub label: String,

    /// Beam span (m)
    pub largo_m: f64,

    /// Cross-section base (cm)
    pub base_cm: f64,

    /// Cross-section height (cm)
    pub altura_cm: f64,

    /// Concrete grade
    pub grado: GradoHormigon,

    /// Number of identical beams (omitting it means 1)
    #[serde(default = "cantidad_default")]
    pub cantidad: u32,
}

impl VigaInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CubiResult<()> {
        validar_dimension("largo_m", self.largo_m)?;
        validar_dimension("base_cm", self.base_cm)?;
        validar_dimension("altura_cm", self.altura_cm)?;
        validar_cantidad("cantidad", self.cantidad)?;
        Ok(())
    }

    /// Total concrete volume for all beams (m³)
    pub fn volumen_m3(&self) -> f64 {
        let base: Metros = Centimetros(self.base_cm).into();
        let altura: Metros = Centimetros(self.altura_cm).into();
        self.largo_m * base.0 * altura.0 * f64::from(self.cantidad)
    }
}

/// Compute the beam takeoff.
pub fn calcular(input: &VigaInput) -> CubiResult<ResultadoCubicacion> {
    input.validate()?;

    let volumen = input.volumen_m3();
    Ok(ResultadoCubicacion {
        superficie: None,
        volumen: Some(volumen),
        materiales: materiales_de_hormigon(volumen, input.grado),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viga_tipo() -> VigaInput {
        VigaInput {
            label: "V-1".to_string(),
            largo_m: 5.0,
            base_cm: 20.0,
            altura_cm: 40.0,
            grado: GradoHormigon::H25,
            cantidad: 1,
        }
    }

    #[test]
    fn test_volumen() {
        // 5.0 x 0.20 x 0.40 = 0.4 m³
        let resultado = calcular(&viga_tipo()).unwrap();
        assert!((resultado.volumen.unwrap() - 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_volumen_escala_con_largo() {
        let base = calcular(&viga_tipo()).unwrap().volumen.unwrap();
        let mut doble = viga_tipo();
        doble.largo_m *= 2.0;
        let resultado = calcular(&doble).unwrap().volumen.unwrap();
        assert!((resultado - 2.0 * base).abs() < 1e-9);
    }

    #[test]
    fn test_mismo_volumen_que_pilar_equivalente() {
        // a beam standing on end is a column: same volume, same materials
        use crate::cubicaciones::pilar::{self, PilarInput};
        let viga = calcular(&viga_tipo()).unwrap();
        let pilar = pilar::calcular(&PilarInput {
            label: "P-eq".to_string(),
            base_cm: 20.0,
            profundidad_cm: 40.0,
            altura_m: 5.0,
            grado: GradoHormigon::H25,
            cantidad: 1,
        })
        .unwrap();
        assert_eq!(viga.volumen, pilar.volumen);
        assert_eq!(viga.materiales, pilar.materiales);
    }

    #[test]
    fn test_cantidad_omitida_equivale_a_uno() {
        let json = r#"{
            "label": "V-2",
            "largo_m": 4.0,
            "base_cm": 15.0,
            "altura_cm": 30.0,
            "grado": "H25"
        }"#;
        let input: VigaInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.cantidad, 1);
    }

    #[test]
    fn test_dimensiones_invalidas() {
        let mut input = viga_tipo();
        input.altura_cm = 0.0;
        assert!(calcular(&input).is_err());
    }
}
