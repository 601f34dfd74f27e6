// src/materials/materials.rs

use std::sync::{OnceLock, RwLock, RwLockReadGuard, RwLockWriteGuard};
use log::debug;
use crate::utils::CapacitanceError;

/// Elastic and dielectric properties of an electrode material.
///
/// # Properties
/// * `name` - Catalog key
/// * `youngs_modulus` - Measure of material stiffness in Pascals (Pa)
/// * `poisson_ratio` - Ratio of transverse strain to axial strain (dimensionless)
/// * `dielectric_constant` - Relative permittivity K of the gap (dimensionless)
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialRecord {
    /// Catalog key of the material
    pub name: String,
    /// Young's modulus in Pascals (Pa)
    pub youngs_modulus: f64,
    /// Poisson's ratio (dimensionless)
    pub poisson_ratio: f64,
    /// Dielectric constant K (dimensionless)
    pub dielectric_constant: f64,
}

impl MaterialRecord {
    /// Creates a new material record.
    ///
    /// Values are stored as given; the physical ranges (E > 0, -1 < ν < 0.5, K ≥ 1) are
    /// the caller's responsibility.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_plate_capacitance::materials::MaterialRecord;
    ///
    /// let silicon = MaterialRecord::new("Silicon", 169.8e9, 0.066, 11.7);
    /// assert_eq!(silicon.name, "Silicon");
    /// ```
    pub fn new(name: &str, youngs_modulus: f64, poisson_ratio: f64, dielectric_constant: f64) -> Self {
        Self {
            name: name.to_string(),
            youngs_modulus,
            poisson_ratio,
            dielectric_constant,
        }
    }
}

/// Built-in materials, in the order they are listed: (name, E, ν, K).
const SEED_MATERIALS: [(&str, f64, f64, f64); 4] = [
    ("Aluminum", 70e9, 0.33, 1.0),
    ("Steel", 200e9, 0.30, 1.0),
    ("Glass", 70e9, 0.20, 4.5),
    ("Test", 169.8e9, 0.066, 1.1),
];

/// Named material records, keyed by name.
///
/// The catalog is read-mostly and can be shared between threads; `add` takes the write
/// lock, lookups take the read lock. Names keep the order in which they were first added,
/// so the built-in materials come first.
#[derive(Debug)]
pub struct MaterialCatalog {
    entries: RwLock<Vec<MaterialRecord>>,
}

impl Default for MaterialCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl MaterialCatalog {
    /// Creates a catalog holding the built-in materials (Aluminum, Steel, Glass, Test).
    pub fn new() -> Self {
        let entries = SEED_MATERIALS
            .iter()
            .map(|&(name, e, nu, k)| MaterialRecord::new(name, e, nu, k))
            .collect();
        Self { entries: RwLock::new(entries) }
    }

    /// Creates a catalog with no materials.
    pub fn empty() -> Self {
        Self { entries: RwLock::new(Vec::new()) }
    }

    /// Process-wide catalog, seeded on first use.
    pub fn global() -> &'static MaterialCatalog {
        static GLOBAL: OnceLock<MaterialCatalog> = OnceLock::new();
        GLOBAL.get_or_init(MaterialCatalog::new)
    }

    /// Resolves `name` to its record.
    ///
    /// # Errors
    ///
    /// Returns `CapacitanceError::MaterialNotFound` if no material has that name.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_plate_capacitance::materials::MaterialCatalog;
    ///
    /// let catalog = MaterialCatalog::new();
    /// let glass = catalog.lookup("Glass").unwrap();
    /// assert_eq!(glass.dielectric_constant, 4.5);
    /// assert!(catalog.lookup("Unobtainium").is_err());
    /// ```
    pub fn lookup(&self, name: &str) -> Result<MaterialRecord, CapacitanceError> {
        self.read()
            .iter()
            .find(|record| record.name == name)
            .cloned()
            .ok_or_else(|| CapacitanceError::MaterialNotFound(name.to_string()))
    }

    /// Adds a material, replacing any existing entry with the same name.
    ///
    /// A replaced entry keeps its position in [`MaterialCatalog::list_names`].
    pub fn add(&self, name: &str, youngs_modulus: f64, poisson_ratio: f64, dielectric_constant: f64) -> MaterialRecord {
        let record = MaterialRecord::new(name, youngs_modulus, poisson_ratio, dielectric_constant);
        let mut entries = self.write();
        match entries.iter_mut().find(|existing| existing.name == name) {
            Some(existing) => {
                debug!("Replacing material {}", name);
                *existing = record.clone();
            }
            None => {
                debug!("Adding material {}", name);
                entries.push(record.clone());
            }
        }
        record
    }

    /// Names of all materials, built-in ones first.
    pub fn list_names(&self) -> Vec<String> {
        self.read().iter().map(|record| record.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // The entries are plain values, so a panic in another holder cannot leave them torn.
    fn read(&self) -> RwLockReadGuard<'_, Vec<MaterialRecord>> {
        self.entries.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<MaterialRecord>> {
        self.entries.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
