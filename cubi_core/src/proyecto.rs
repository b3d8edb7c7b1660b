//! # Proyecto Data Structures
//!
//! The `Proyecto` struct is the root container for the takeoffs of one
//! construction job. Projects serialize to `.cubi` files as
//! human-readable JSON.
//!
//! A project stores element *inputs*, not results: takeoff results are
//! ephemeral values, cheap to recompute and guaranteed consistent with
//! whatever the current catalogs say. See [`Proyecto::recalcular`].
//!
//! ## Structure
//!
//! ```text
//! Proyecto
//! ├── meta: ProyectoMetadata (version, obra, responsable, timestamps)
//! └── items: HashMap<Uuid, ElementoCubicacion> (all stored elements)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use cubi_core::proyecto::Proyecto;
//!
//! let proyecto = Proyecto::new("Casa Lampa", "Juana Pérez", "Constructora Sur");
//!
//! // Serialize to JSON
//! let json = serde_json::to_string_pretty(&proyecto).unwrap();
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::cubicaciones::{ElementoCubicacion, ResultadoCubicacion};
use crate::errors::CubiResult;

/// Current schema version for .cubi files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Root project container.
///
/// Items are stored in a flat UUID-keyed map: O(1) lookup, no duplicate
/// IDs, stable references when the UI reorders its listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Proyecto {
    /// Project metadata (version, job info, timestamps)
    pub meta: ProyectoMetadata,

    /// All stored elements, keyed by UUID
    pub items: HashMap<Uuid, ElementoCubicacion>,
}

impl Proyecto {
    /// Create a new empty project.
    ///
    /// # Arguments
    ///
    /// * `obra` - Job/site name (e.g., "Casa Lampa")
    /// * `responsable` - Person in charge of the takeoff
    /// * `cliente` - Client name
    pub fn new(
        obra: impl Into<String>,
        responsable: impl Into<String>,
        cliente: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Proyecto {
            meta: ProyectoMetadata {
                version: SCHEMA_VERSION.to_string(),
                obra: obra.into(),
                responsable: responsable.into(),
                cliente: cliente.into(),
                created: now,
                modified: now,
            },
            items: HashMap::new(),
        }
    }

    /// Add an element to the project. Returns the UUID assigned to it.
    pub fn add_item(&mut self, item: ElementoCubicacion) -> Uuid {
        let id = Uuid::new_v4();
        self.items.insert(id, item);
        self.touch();
        id
    }

    /// Remove an element by ID. Returns the removed element, if present.
    pub fn remove_item(&mut self, id: &Uuid) -> Option<ElementoCubicacion> {
        let removed = self.items.remove(id);
        if removed.is_some() {
            self.touch();
        }
        removed
    }

    /// Labels of all stored elements, for listings
    pub fn item_labels(&self) -> Vec<(Uuid, String)> {
        self.items
            .iter()
            .map(|(id, item)| (*id, item.label().to_string()))
            .collect()
    }

    /// Re-run every stored takeoff.
    ///
    /// Each element is computed independently; one invalid element does
    /// not prevent the rest from producing results.
    pub fn recalcular(&self) -> Vec<(Uuid, CubiResult<ResultadoCubicacion>)> {
        self.items
            .iter()
            .map(|(id, item)| (*id, item.calcular()))
            .collect()
    }

    /// Update the modified timestamp
    fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }
}

/// Project metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProyectoMetadata {
    /// Schema version of the file format
    pub version: String,

    /// Job/site name
    pub obra: String,

    /// Person in charge of the takeoff
    pub responsable: String,

    /// Client name
    pub cliente: String,

    /// When the project was created
    pub created: DateTime<Utc>,

    /// When the project was last modified
    pub modified: DateTime<Utc>,
}
