//! Welded Mesh Catalog (ACMA line)
//!
//! Standard welded wire mesh used for slab-on-grade reinforcement. Weight
//! per m² follows from the steel cross-section of each designation; all
//! designations ship as 2.60 m x 5.00 m sheets.

use serde::{Deserialize, Serialize};

use crate::errors::{CubiError, CubiResult};

/// Welded mesh designation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum MallaAcma {
    /// C92 - light slabs on grade
    #[serde(rename = "C-92")]
    #[default]
    C92,
    /// C139
    #[serde(rename = "C-139")]
    C139,
    /// C188
    #[serde(rename = "C-188")]
    C188,
    /// C257 - heavy duty floors
    #[serde(rename = "C-257")]
    C257,
}

impl MallaAcma {
    /// All mesh variants for UI selection
    pub const ALL: [MallaAcma; 4] = [
        MallaAcma::C92,
        MallaAcma::C139,
        MallaAcma::C188,
        MallaAcma::C257,
    ];

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CubiResult<Self> {
        match s.to_uppercase().replace([' ', '-'], "").as_str() {
            "C92" | "92" => Ok(MallaAcma::C92),
            "C139" | "139" => Ok(MallaAcma::C139),
            "C188" | "188" => Ok(MallaAcma::C188),
            "C257" | "257" => Ok(MallaAcma::C257),
            _ => Err(CubiError::material_not_found(s)),
        }
    }

    /// Catalog properties for this designation
    pub fn propiedades(&self) -> PropiedadesMalla {
        match self {
            MallaAcma::C92 => PropiedadesMalla {
                nombre: "Malla ACMA C-92",
                peso_kg_por_m2: 1.44,
                largo_plancha_m: 5.0,
                ancho_plancha_m: 2.6,
            },
            MallaAcma::C139 => PropiedadesMalla {
                nombre: "Malla ACMA C-139",
                peso_kg_por_m2: 2.18,
                largo_plancha_m: 5.0,
                ancho_plancha_m: 2.6,
            },
            MallaAcma::C188 => PropiedadesMalla {
                nombre: "Malla ACMA C-188",
                peso_kg_por_m2: 2.95,
                largo_plancha_m: 5.0,
                ancho_plancha_m: 2.6,
            },
            MallaAcma::C257 => PropiedadesMalla {
                nombre: "Malla ACMA C-257",
                peso_kg_por_m2: 4.03,
                largo_plancha_m: 5.0,
                ancho_plancha_m: 2.6,
            },
        }
    }

    /// Display name
    pub fn display_name(&self) -> &'static str {
        self.propiedades().nombre
    }
}

impl std::fmt::Display for MallaAcma {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Catalog entry for a mesh designation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PropiedadesMalla {
    /// Display name
    pub nombre: &'static str,
    /// Weight per m² of mesh (kg)
    pub peso_kg_por_m2: f64,
    /// Sheet length (m)
    pub largo_plancha_m: f64,
    /// Sheet width (m)
    pub ancho_plancha_m: f64,
}

impl PropiedadesMalla {
    /// Area covered by one sheet (m²)
    pub fn area_plancha_m2(&self) -> f64 {
        self.largo_plancha_m * self.ancho_plancha_m
    }

    /// Weight of one sheet (kg)
    pub fn peso_plancha_kg(&self) -> f64 {
        self.peso_kg_por_m2 * self.area_plancha_m2()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pesos_positivos_y_crecientes() {
        let mut anterior = 0.0;
        for malla in MallaAcma::ALL {
            let p = malla.propiedades();
            assert!(p.peso_kg_por_m2 > anterior, "{malla}");
            anterior = p.peso_kg_por_m2;
        }
    }

    #[test]
    fn test_area_plancha() {
        let p = MallaAcma::C92.propiedades();
        assert!((p.area_plancha_m2() - 13.0).abs() < 1e-9);
    }

    #[test]
    fn test_peso_plancha() {
        // C-92: 1.44 kg/m² x 13 m² = 18.72 kg per sheet
        let p = MallaAcma::C92.propiedades();
        assert!((p.peso_plancha_kg() - 18.72).abs() < 1e-9);
    }

    #[test]
    fn test_parse_flexible() {
        assert_eq!(MallaAcma::from_str_flexible("c-92").unwrap(), MallaAcma::C92);
        assert_eq!(MallaAcma::from_str_flexible("C 139").unwrap(), MallaAcma::C139);
        assert!(MallaAcma::from_str_flexible("C500").is_err());
    }

    #[test]
    fn test_serialization() {
        let malla = MallaAcma::C188;
        let json = serde_json::to_string(&malla).unwrap();
        assert_eq!(json, "\"C-188\"");
        let roundtrip: MallaAcma = serde_json::from_str(&json).unwrap();
        assert_eq!(malla, roundtrip);
    }
}
