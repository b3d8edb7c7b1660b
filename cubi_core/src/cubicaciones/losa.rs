//! # Losa (Elevated Slab) Takeoff
//!
//! Computes concrete and rebar requirements for an elevated reinforced
//! slab with a two-way orthogonal bar grid.
//!
//! ## Formulas
//!
//! ```text
//! volumen = largo x ancho x (espesor/100)
//! barras por dirección = ceil(luz / (espaciamiento/100)) + 1
//! metros lineales = barras_x x ancho + barras_y x largo
//! acero kg = metros lineales x peso lineal x factor de pérdida
//! ```
//!
//! The grid approximation places one bar every `espaciamiento` plus the
//! closing bar at the far edge, in each direction.

use serde::{Deserialize, Serialize};

use crate::errors::CubiResult;
use crate::materiales::{DiametroAcero, GradoHormigon, FACTOR_PERDIDA};
use crate::unidades::{Centimetros, Metros, Unidad};

use super::{
    materiales_de_hormigon, validar_dimension, MaterialCubicacion, ResultadoCubicacion,
};

fn espaciamiento_default() -> f64 {
    15.0
}

/// Input parameters for an elevated slab takeoff.
///
/// `diametro` defaults to Ø10 mm and `espaciamiento_cm` to 15 cm, the
/// usual residential slab grid.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "L-1",
///   "largo_m": 5.0,
///   "ancho_m": 4.0,
///   "espesor_cm": 12.0,
///   "grado": "H30",
///   "diametro": "10",
///   "espaciamiento_cm": 15.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LosaInput {
    /// User label for this element (e.g., "L-1", "Losa segundo piso")
    pub label: String,

    /// Slab length (m)
    pub largo_m: f64,

    /// Slab width (m)
    pub ancho_m: f64,

    /// Slab thickness (cm)
    pub espesor_cm: f64,

    /// Concrete grade
    pub grado: GradoHormigon,

    /// Rebar diameter (omitting it means Ø10 mm)
    #[serde(default)]
    pub diametro: DiametroAcero,

    /// Bar spacing in both directions (cm, omitting it means 15)
    #[serde(default = "espaciamiento_default")]
    pub espaciamiento_cm: f64,
}

impl LosaInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CubiResult<()> {
        validar_dimension("largo_m", self.largo_m)?;
        validar_dimension("ancho_m", self.ancho_m)?;
        validar_dimension("espesor_cm", self.espesor_cm)?;
        validar_dimension("espaciamiento_cm", self.espaciamiento_cm)?;
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

    /// Bars laid across a span at the configured spacing, closing bar
    /// included
    fn barras_en(&self, luz_m: f64) -> f64 {
        let espaciamiento: Metros = Centimetros(self.espaciamiento_cm).into();
        (luz_m / espaciamiento.0).ceil() + 1.0
    }

    /// Total linear meters of rebar in the two-way grid
    pub fn metros_lineales_acero(&self) -> f64 {
        let barras_x = self.barras_en(self.largo_m);
        let barras_y = self.barras_en(self.ancho_m);
        barras_x * self.ancho_m + barras_y * self.largo_m
    }
}

/// Compute the elevated slab takeoff.
pub fn calcular(input: &LosaInput) -> CubiResult<ResultadoCubicacion> {
    input.validate()?;

    let superficie = input.superficie_m2();
    let volumen = input.volumen_m3();

    let acero_kg =
        input.metros_lineales_acero() * input.diametro.peso_kg_por_m() * FACTOR_PERDIDA;

    let mut materiales = materiales_de_hormigon(volumen, input.grado);
    materiales.push(MaterialCubicacion::new(
        format!("Acero {}", input.diametro),
        acero_kg,
        Unidad::Kilogramos,
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

    fn losa_tipo() -> LosaInput {
        LosaInput {
            label: "L-1".to_string(),
            largo_m: 5.0,
            ancho_m: 4.0,
            espesor_cm: 12.0,
            grado: GradoHormigon::H30,
            diametro: DiametroAcero::D10,
            espaciamiento_cm: 15.0,
        }
    }

    #[test]
    fn test_volumen() {
        // 5 x 4 x 0.12 = 2.4 m³
        let resultado = calcular(&losa_tipo()).unwrap();
        assert!((resultado.volumen.unwrap() - 2.4).abs() < 1e-9);
        assert_eq!(resultado.superficie, Some(20.0));
    }

    #[test]
    fn test_grilla_de_acero() {
        let input = losa_tipo();
        // ceil(5/0.15)+1 = 35 barras x 4 m; ceil(4/0.15)+1 = 28 barras x 5 m
        assert!((input.metros_lineales_acero() - (35.0 * 4.0 + 28.0 * 5.0)).abs() < 1e-9);

        let resultado = calcular(&input).unwrap();
        let acero = resultado.material("Acero Ø10 mm").unwrap();
        let esperado = 280.0 * 0.617 * FACTOR_PERDIDA;
        assert!((acero.cantidad - esperado).abs() < 1e-9);
        assert_eq!(acero.unidad, Unidad::Kilogramos);
    }

    #[test]
    fn test_diametro_mayor_pesa_mas() {
        let base = calcular(&losa_tipo()).unwrap();
        let mut gruesa = losa_tipo();
        gruesa.diametro = DiametroAcero::D16;
        let resultado = calcular(&gruesa).unwrap();
        let kg_base = base.material("Acero Ø10 mm").unwrap().cantidad;
        let kg_gruesa = resultado.material("Acero Ø16 mm").unwrap().cantidad;
        assert!(kg_gruesa > kg_base);
    }

    #[test]
    fn test_espaciamiento_menor_agrega_barras() {
        let base = losa_tipo().metros_lineales_acero();
        let mut densa = losa_tipo();
        densa.espaciamiento_cm = 10.0;
        assert!(densa.metros_lineales_acero() > base);
    }

    #[test]
    fn test_defaults_por_serde() {
        let json = r#"{
            "label": "L-2",
            "largo_m": 5.0,
            "ancho_m": 4.0,
            "espesor_cm": 12.0,
            "grado": "H30"
        }"#;
        let input: LosaInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.diametro, DiametroAcero::D10);
        assert_eq!(input.espaciamiento_cm, 15.0);
        // same result as spelling the defaults out
        assert_eq!(
            calcular(&input).unwrap(),
            calcular(&losa_tipo()).unwrap()
        );
    }

    #[test]
    fn test_dimensiones_invalidas() {
        let mut input = losa_tipo();
        input.espaciamiento_cm = 0.0;
        assert!(calcular(&input).is_err());

        let mut input = losa_tipo();
        input.ancho_m = f64::NAN;
        assert!(calcular(&input).is_err());
    }
}
