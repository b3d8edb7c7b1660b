//! Brick Catalog
//!
//! The machine-made brick formats common in Chilean masonry, with the
//! per-m² yields used for wall takeoff. Yields count bricks per m² of
//! finished wall laid "a soga" (stretcher bond), mortar joints included;
//! mortar consumption is per m² of wall face.

use serde::{Deserialize, Serialize};

use crate::errors::{CubiError, CubiResult};

/// Brick format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TipoLadrillo {
    /// Fiscal (29 x 14 x 7.1 cm) - the traditional low wall format
    #[default]
    Fiscal,
    /// Princesa (29 x 14 x 9.4 cm)
    Princesa,
    /// Titán (29 x 14 x 11.2 cm) - structural perforated brick
    Titan,
}

impl TipoLadrillo {
    /// All brick variants for UI selection
    pub const ALL: [TipoLadrillo; 3] = [
        TipoLadrillo::Fiscal,
        TipoLadrillo::Princesa,
        TipoLadrillo::Titan,
    ];

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CubiResult<Self> {
        match s
            .to_lowercase()
            .replace(['á', 'à'], "a")
            .replace([' ', '-', '_'], "")
            .as_str()
        {
            "fiscal" => Ok(TipoLadrillo::Fiscal),
            "princesa" => Ok(TipoLadrillo::Princesa),
            "titan" => Ok(TipoLadrillo::Titan),
            _ => Err(CubiError::material_not_found(s)),
        }
    }

    /// Catalog properties for this format
    pub fn propiedades(&self) -> PropiedadesLadrillo {
        match self {
            TipoLadrillo::Fiscal => PropiedadesLadrillo {
                nombre: "Ladrillo fiscal",
                largo_cm: 29.0,
                ancho_cm: 14.0,
                alto_cm: 7.1,
                rendimiento_por_m2: 41.0,
                mortero_m3_por_m2: 0.025,
            },
            TipoLadrillo::Princesa => PropiedadesLadrillo {
                nombre: "Ladrillo princesa",
                largo_cm: 29.0,
                ancho_cm: 14.0,
                alto_cm: 9.4,
                rendimiento_por_m2: 32.0,
                mortero_m3_por_m2: 0.021,
            },
            TipoLadrillo::Titan => PropiedadesLadrillo {
                nombre: "Ladrillo titán",
                largo_cm: 29.0,
                ancho_cm: 14.0,
                alto_cm: 11.2,
                rendimiento_por_m2: 27.0,
                mortero_m3_por_m2: 0.018,
            },
        }
    }

    /// Display name
    pub fn display_name(&self) -> &'static str {
        self.propiedades().nombre
    }
}

impl std::fmt::Display for TipoLadrillo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Catalog entry for a brick format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PropiedadesLadrillo {
    /// Display name
    pub nombre: &'static str,
    /// Unit length (cm)
    pub largo_cm: f64,
    /// Unit width (cm)
    pub ancho_cm: f64,
    /// Unit height (cm)
    pub alto_cm: f64,
    /// Bricks per m² of finished wall, mortar joints included
    pub rendimiento_por_m2: f64,
    /// Laying mortar per m² of wall (m³)
    pub mortero_m3_por_m2: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rendimientos_positivos() {
        for tipo in TipoLadrillo::ALL {
            let p = tipo.propiedades();
            assert!(p.rendimiento_por_m2 > 0.0, "{tipo}: rendimiento");
            assert!(p.mortero_m3_por_m2 > 0.0, "{tipo}: mortero");
            assert!(p.largo_cm > 0.0 && p.ancho_cm > 0.0 && p.alto_cm > 0.0);
        }
    }

    #[test]
    fn test_ladrillo_mas_alto_rinde_menos() {
        // taller formats cover more wall per unit
        let fiscal = TipoLadrillo::Fiscal.propiedades();
        let princesa = TipoLadrillo::Princesa.propiedades();
        let titan = TipoLadrillo::Titan.propiedades();
        assert!(fiscal.rendimiento_por_m2 > princesa.rendimiento_por_m2);
        assert!(princesa.rendimiento_por_m2 > titan.rendimiento_por_m2);
    }

    #[test]
    fn test_parse_flexible() {
        assert_eq!(
            TipoLadrillo::from_str_flexible("Fiscal").unwrap(),
            TipoLadrillo::Fiscal
        );
        assert_eq!(
            TipoLadrillo::from_str_flexible("titán").unwrap(),
            TipoLadrillo::Titan
        );
        assert!(TipoLadrillo::from_str_flexible("adobe").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(TipoLadrillo::Princesa.to_string(), "Ladrillo princesa");
    }
}
