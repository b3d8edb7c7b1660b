//! # Display Formatting
//!
//! Renders takeoff quantities for humans. The precision contract is part
//! of the engine's output semantics: continuous quantities show two
//! decimals, discrete (whole-unit) quantities show none, and the unit
//! symbol is always present.

use crate::cubicaciones::MaterialCubicacion;
use crate::unidades::Unidad;

/// Format a quantity with its unit symbol.
///
/// # Example
///
/// ```rust
/// use cubi_core::formato::formatear;
/// use cubi_core::unidades::Unidad;
///
/// assert_eq!(formatear(12.5, Unidad::MetrosCubicos), "12.50 m³");
/// assert_eq!(formatear(29.0, Unidad::Sacos), "29 sacos");
/// ```
pub fn formatear(cantidad: f64, unidad: Unidad) -> String {
    if unidad.es_discreta() {
        format!("{:.0} {}", cantidad, unidad.simbolo())
    } else {
        format!("{:.2} {}", cantidad, unidad.simbolo())
    }
}

impl std::fmt::Display for MaterialCubicacion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.nombre, formatear(self.cantidad, self.unidad))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_continuas_con_dos_decimales() {
        assert_eq!(formatear(8.0, Unidad::MetrosCubicos), "8.00 m³");
        assert_eq!(formatear(1.134, Unidad::MetrosCubicos), "1.13 m³");
        assert_eq!(formatear(181.44, Unidad::Kilogramos), "181.44 kg");
        assert_eq!(formatear(388.5, Unidad::Litros), "388.50 L");
    }

    #[test]
    fn test_discretas_sin_decimales() {
        assert_eq!(formatear(29.0, Unidad::Sacos), "29 sacos");
        assert_eq!(formatear(539.0, Unidad::Unidades), "539 unidades");
        assert_eq!(formatear(7.0, Unidad::Planchas), "7 planchas");
    }

    #[test]
    fn test_display_de_material() {
        let material = MaterialCubicacion::new("Cemento (H25)", 29.0, Unidad::Sacos);
        assert_eq!(material.to_string(), "Cemento (H25): 29 sacos");

        let material = MaterialCubicacion::new("Arena", 1.134, Unidad::MetrosCubicos);
        assert_eq!(material.to_string(), "Arena: 1.13 m³");
    }
}
