//! Rebar Table
//!
//! Commercial A630-420H rebar diameters with their linear mass, used to
//! convert "bar count x length" into kilograms of steel. Linear mass grows
//! strictly with diameter.

use serde::{Deserialize, Serialize};

use crate::errors::{CubiError, CubiResult};

/// Commercial rebar diameter (mm)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum DiametroAcero {
    /// Ø6 mm
    #[serde(rename = "6")]
    D6,
    /// Ø8 mm
    #[serde(rename = "8")]
    D8,
    /// Ø10 mm
    #[serde(rename = "10")]
    #[default]
    D10,
    /// Ø12 mm
    #[serde(rename = "12")]
    D12,
    /// Ø16 mm
    #[serde(rename = "16")]
    D16,
    /// Ø18 mm
    #[serde(rename = "18")]
    D18,
    /// Ø22 mm
    #[serde(rename = "22")]
    D22,
    /// Ø25 mm
    #[serde(rename = "25")]
    D25,
}

impl DiametroAcero {
    /// All diameter variants, ascending
    pub const ALL: [DiametroAcero; 8] = [
        DiametroAcero::D6,
        DiametroAcero::D8,
        DiametroAcero::D10,
        DiametroAcero::D12,
        DiametroAcero::D16,
        DiametroAcero::D18,
        DiametroAcero::D22,
        DiametroAcero::D25,
    ];

    /// Nominal diameter in millimeters
    pub fn milimetros(&self) -> u32 {
        match self {
            DiametroAcero::D6 => 6,
            DiametroAcero::D8 => 8,
            DiametroAcero::D10 => 10,
            DiametroAcero::D12 => 12,
            DiametroAcero::D16 => 16,
            DiametroAcero::D18 => 18,
            DiametroAcero::D22 => 22,
            DiametroAcero::D25 => 25,
        }
    }

    /// Linear mass (kg per meter of bar)
    pub fn peso_kg_por_m(&self) -> f64 {
        match self {
            DiametroAcero::D6 => 0.222,
            DiametroAcero::D8 => 0.395,
            DiametroAcero::D10 => 0.617,
            DiametroAcero::D12 => 0.888,
            DiametroAcero::D16 => 1.578,
            DiametroAcero::D18 => 1.998,
            DiametroAcero::D22 => 2.984,
            DiametroAcero::D25 => 3.853,
        }
    }

    /// Look up a diameter by its nominal millimeters
    pub fn from_milimetros(mm: u32) -> CubiResult<Self> {
        DiametroAcero::ALL
            .into_iter()
            .find(|d| d.milimetros() == mm)
            .ok_or_else(|| CubiError::material_not_found(format!("Ø{mm}")))
    }
}

impl std::fmt::Display for DiametroAcero {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Ø{} mm", self.milimetros())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peso_crece_con_diametro() {
        let mut anterior = 0.0;
        for d in DiametroAcero::ALL {
            let peso = d.peso_kg_por_m();
            assert!(peso > anterior, "{d} no supera al diámetro anterior");
            anterior = peso;
        }
    }

    #[test]
    fn test_from_milimetros() {
        assert_eq!(DiametroAcero::from_milimetros(10).unwrap(), DiametroAcero::D10);
        assert_eq!(DiametroAcero::from_milimetros(25).unwrap(), DiametroAcero::D25);
        assert!(DiametroAcero::from_milimetros(14).is_err());
    }

    #[test]
    fn test_default_es_d10() {
        assert_eq!(DiametroAcero::default(), DiametroAcero::D10);
    }

    #[test]
    fn test_display() {
        assert_eq!(DiametroAcero::D12.to_string(), "Ø12 mm");
    }

    #[test]
    fn test_serialization() {
        let d = DiametroAcero::D16;
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, "\"16\"");
        let roundtrip: DiametroAcero = serde_json::from_str(&json).unwrap();
        assert_eq!(d, roundtrip);
    }
}
