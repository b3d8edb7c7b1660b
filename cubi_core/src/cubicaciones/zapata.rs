//! # Zapata (Isolated Footing) Takeoff
//!
//! Computes the concrete volume and materials for one or many identical
//! rectangular footings.
//!
//! ## Formula
//!
//! ```text
//! volumen = largo x ancho x alto x cantidad   (all meters)
//! ```
//!
//! Materials follow the grade dosification scaled by volume and waste
//! factor; cement is reported in whole 25 kg sacks.
//!
//! ## Example
//!
//! ```rust
//! use cubi_core::cubicaciones::zapata::{calcular, ZapataInput};
//! use cubi_core::materiales::GradoHormigon;
//!
//! let input = ZapataInput {
//!     label: "Z-1".to_string(),
//!     largo_m: 1.0,
//!     ancho_m: 1.0,
//!     alto_m: 0.5,
//!     grado: GradoHormigon::H25,
//!     cantidad: 4,
//! };
//!
//! let resultado = calcular(&input).unwrap();
//! assert_eq!(resultado.volumen, Some(2.0));
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::CubiResult;
use crate::materiales::GradoHormigon;

use super::{
    materiales_de_hormigon, validar_cantidad, validar_dimension, ResultadoCubicacion,
};

pub(crate) fn cantidad_default() -> u32 {
    1
}

/// Input parameters for an isolated footing takeoff.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Z-1",
///   "largo_m": 1.2,
///   "ancho_m": 1.2,
///   "alto_m": 0.6,
///   "grado": "H25",
///   "cantidad": 8
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZapataInput {
    /// User label for this element (e.g., "Z-1", "Zapata eje A")
    pub label: String,

    /// Footing length (m)
    pub largo_m: f64,

    /// Footing width (m)
    pub ancho_m: f64,

    /// Footing height (m)
    pub alto_m: f64,

    /// Concrete grade
    pub grado: GradoHormigon,

    /// Number of identical footings (omitting it means 1)
    #[serde(default = "cantidad_default")]
    pub cantidad: u32,
}

impl ZapataInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CubiResult<()> {
        validar_dimension("largo_m", self.largo_m)?;
        validar_dimension("ancho_m", self.ancho_m)?;
        validar_dimension("alto_m", self.alto_m)?;
        validar_cantidad("cantidad", self.cantidad)?;
        Ok(())
    }

    /// Total concrete volume for all footings (m³)
    pub fn volumen_m3(&self) -> f64 {
        self.largo_m * self.ancho_m * self.alto_m * f64::from(self.cantidad)
    }
}

/// Compute the footing takeoff.
pub fn calcular(input: &ZapataInput) -> CubiResult<ResultadoCubicacion> {
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
    use crate::materiales::FACTOR_PERDIDA;
    use crate::unidades::{Unidad, PESO_SACO_CEMENTO_KG};

    fn zapata_tipo() -> ZapataInput {
        ZapataInput {
            label: "Z-1".to_string(),
            largo_m: 1.0,
            ancho_m: 1.0,
            alto_m: 0.5,
            grado: GradoHormigon::H25,
            cantidad: 4,
        }
    }

    #[test]
    fn test_volumen_escenario_de_referencia() {
        // 1.0 x 1.0 x 0.5 x 4 = 2.0 m³
        let resultado = calcular(&zapata_tipo()).unwrap();
        assert_eq!(resultado.volumen, Some(2.0));
        assert_eq!(resultado.superficie, None);
    }

    #[test]
    fn test_cemento_en_sacos_enteros() {
        let resultado = calcular(&zapata_tipo()).unwrap();
        let cemento = resultado.material("Cemento (H25)").unwrap();
        // 340 kg/m³ x 2.0 m³ x 1.05 = 714 kg -> ceil(714/25) = 29 sacos
        let exacto = 340.0 * 2.0 * FACTOR_PERDIDA / PESO_SACO_CEMENTO_KG;
        assert_eq!(cemento.unidad, Unidad::Sacos);
        assert_eq!(cemento.cantidad, 29.0);
        assert!(cemento.cantidad >= exacto);
    }

    #[test]
    fn test_volumen_escala_con_cantidad() {
        let mut input = zapata_tipo();
        input.cantidad = 1;
        let uno = calcular(&input).unwrap().volumen.unwrap();
        input.cantidad = 4;
        let cuatro = calcular(&input).unwrap().volumen.unwrap();
        assert!((cuatro - 4.0 * uno).abs() < 1e-9);
    }

    #[test]
    fn test_volumen_escala_con_cada_dimension() {
        let base = calcular(&zapata_tipo()).unwrap().volumen.unwrap();
        let mut escalada = zapata_tipo();
        escalada.largo_m *= 3.0;
        let resultado = calcular(&escalada).unwrap().volumen.unwrap();
        assert!((resultado - 3.0 * base).abs() < 1e-9);
    }

    #[test]
    fn test_cantidad_omitida_equivale_a_uno() {
        let json = r#"{
            "label": "Z-2",
            "largo_m": 1.0,
            "ancho_m": 1.0,
            "alto_m": 0.5,
            "grado": "H25"
        }"#;
        let sin_cantidad: ZapataInput = serde_json::from_str(json).unwrap();
        assert_eq!(sin_cantidad.cantidad, 1);

        let mut explicita = zapata_tipo();
        explicita.cantidad = 1;
        assert_eq!(
            calcular(&sin_cantidad).unwrap(),
            calcular(&explicita).unwrap()
        );
    }

    #[test]
    fn test_idempotencia() {
        let input = zapata_tipo();
        assert_eq!(calcular(&input).unwrap(), calcular(&input).unwrap());
    }

    #[test]
    fn test_dimensiones_invalidas() {
        let mut input = zapata_tipo();
        input.alto_m = 0.0;
        assert!(calcular(&input).is_err());

        let mut input = zapata_tipo();
        input.largo_m = f64::NAN;
        assert!(calcular(&input).is_err());

        let mut input = zapata_tipo();
        input.cantidad = 0;
        assert!(calcular(&input).is_err());
    }

    #[test]
    fn test_serialization() {
        let input = zapata_tipo();
        let json = serde_json::to_string_pretty(&input).unwrap();
        let roundtrip: ZapataInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input.largo_m, roundtrip.largo_m);
        assert_eq!(input.cantidad, roundtrip.cantidad);
    }
}
