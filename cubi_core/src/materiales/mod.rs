//! # Materials Catalog
//!
//! Reference data for every material the takeoff engine can emit:
//! concrete dosifications, brick formats, welded mesh and rebar tables.
//! All catalogs are closed enums with exhaustive `match` lookup: an
//! unknown key is unrepresentable once parsed, and adding an entry forces
//! every consumer to handle it.
//!
//! ## Example
//!
//! ```rust
//! use cubi_core::materiales::{GradoHormigon, TipoLadrillo};
//!
//! let dosif = GradoHormigon::H25.dosificacion();
//! println!("{} kg of cement per m³", dosif.cemento_kg);
//!
//! let ladrillo = TipoLadrillo::Fiscal.propiedades();
//! println!("{} bricks per m² of wall", ladrillo.rendimiento_por_m2);
//! ```

pub mod acero;
pub mod hormigon;
pub mod ladrillos;
pub mod mallas;

pub use acero::DiametroAcero;
pub use hormigon::{DosificacionHormigon, GradoHormigon};
pub use ladrillos::{PropiedadesLadrillo, TipoLadrillo};
pub use mallas::{MallaAcma, PropiedadesMalla};

/// Waste factor applied to every material quantity a takeoff emits.
///
/// Accounts for on-site loss: spillage, breakage, cut-offs. Applied
/// uniformly before discrete quantities are rounded up.
pub const FACTOR_PERDIDA: f64 = 1.05;
