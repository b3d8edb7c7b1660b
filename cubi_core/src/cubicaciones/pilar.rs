//! # Pilar (Column) Takeoff
//!
//! Computes the concrete volume and materials for one or many identical
//! rectangular columns. Cross-section dimensions come from site drawings
//! in centimeters; the height in meters.
//!
//! ## Formula
//!
//! ```text
//! volumen = (base/100) x (profundidad/100) x altura x cantidad
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::CubiResult;
use crate::materiales::GradoHormigon;
use crate::unidades::{Centimetros, Metros};

use super::zapata::cantidad_default;
use super::{
    materiales_de_hormigon, validar_cantidad, validar_dimension, ResultadoCubicacion,
};

/// Input parameters for a column takeoff.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "P-1",
///   "base_cm": 20.0,
///   "profundidad_cm": 20.0,
///   "altura_m": 2.4,
///   "grado": "H30",
///   "cantidad": 6
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PilarInput {
    /// User label for this element (e.g., "P-1")
    pub label: String,

    /// Cross-section base (cm)
    pub base_cm: f64,

    /// Cross-section depth (cm)
    pub profundidad_cm: f64,

    /// Column height (m)
    pub altura_m: f64,

    /// Concrete grade
    pub grado: GradoHormigon,

    /// Number of identical columns (omitting it means 1)
    #[serde(default = "cantidad_default")]
    pub cantidad: u32,
}

impl PilarInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CubiResult<()> {
        validar_dimension("base_cm", self.base_cm)?;
        validar_dimension("profundidad_cm", self.profundidad_cm)?;
        validar_dimension("altura_m", self.altura_m)?;
        validar_cantidad("cantidad", self.cantidad)?;
        Ok(())
    }

    /// Total concrete volume for all columns (m³)
    pub fn volumen_m3(&self) -> f64 {
        let base: Metros = Centimetros(self.base_cm).into();
        let profundidad: Metros = Centimetros(self.profundidad_cm).into();
        base.0 * profundidad.0 * self.altura_m * f64::from(self.cantidad)
    }
}

/// Compute the column takeoff.
pub fn calcular(input: &PilarInput) -> CubiResult<ResultadoCubicacion> {
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

    fn pilar_tipo() -> PilarInput {
        PilarInput {
            label: "P-1".to_string(),
            base_cm: 20.0,
            profundidad_cm: 20.0,
            altura_m: 2.5,
            grado: GradoHormigon::H30,
            cantidad: 4,
        }
    }

    #[test]
    fn test_volumen_convierte_centimetros() {
        // 0.20 x 0.20 x 2.5 x 4 = 0.4 m³
        let resultado = calcular(&pilar_tipo()).unwrap();
        assert!((resultado.volumen.unwrap() - 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_materiales_no_vacios() {
        let resultado = calcular(&pilar_tipo()).unwrap();
        assert!(!resultado.materiales.is_empty());
        assert!(resultado.material("Cemento (H30)").is_some());
    }

    #[test]
    fn test_volumen_escala_con_cantidad() {
        let mut input = pilar_tipo();
        input.cantidad = 1;
        let uno = calcular(&input).unwrap().volumen.unwrap();
        input.cantidad = 10;
        let diez = calcular(&input).unwrap().volumen.unwrap();
        assert!((diez - 10.0 * uno).abs() < 1e-9);
    }

    #[test]
    fn test_cantidad_omitida_equivale_a_uno() {
        let json = r#"{
            "label": "P-2",
            "base_cm": 25.0,
            "profundidad_cm": 25.0,
            "altura_m": 2.4,
            "grado": "H25"
        }"#;
        let input: PilarInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.cantidad, 1);
    }

    #[test]
    fn test_dimensiones_invalidas() {
        let mut input = pilar_tipo();
        input.base_cm = -20.0;
        assert!(calcular(&input).is_err());

        let mut input = pilar_tipo();
        input.altura_m = f64::INFINITY;
        assert!(calcular(&input).is_err());
    }
}
