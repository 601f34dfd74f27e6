use std::sync::Arc;
use std::thread;
use crate::materials::{MaterialCatalog, MaterialRecord};
use crate::utils::CapacitanceError;

#[test]
fn test_seed_materials() {
    let catalog = MaterialCatalog::new();
    assert_eq!(catalog.list_names(), vec!["Aluminum", "Steel", "Glass", "Test"]);

    let aluminum = catalog.lookup("Aluminum").unwrap();
    assert_eq!(aluminum, MaterialRecord::new("Aluminum", 70e9, 0.33, 1.0));

    let steel = catalog.lookup("Steel").unwrap();
    assert_eq!(steel.youngs_modulus, 200e9);
    assert_eq!(steel.poisson_ratio, 0.30);

    let glass = catalog.lookup("Glass").unwrap();
    assert_eq!(glass.dielectric_constant, 4.5);

    let test = catalog.lookup("Test").unwrap();
    assert_eq!(test.youngs_modulus, 169.8e9);
    assert_eq!(test.poisson_ratio, 0.066);
    assert_eq!(test.dielectric_constant, 1.1);
}

#[test]
fn test_lookup_unknown_material() {
    let catalog = MaterialCatalog::new();
    assert_eq!(
        catalog.lookup("Nonexistent"),
        Err(CapacitanceError::MaterialNotFound("Nonexistent".to_string()))
    );
    assert!(catalog.lookup("aluminum").is_err(), "Lookup should be case-sensitive");
}

#[test]
fn test_add_then_lookup() {
    let catalog = MaterialCatalog::new();
    let added = catalog.add("Custom", 1e11, 0.25, 2.0);
    let found = catalog.lookup("Custom").unwrap();
    assert_eq!(added, found);
    assert_eq!(found.youngs_modulus, 1e11);
    assert_eq!(found.poisson_ratio, 0.25);
    assert_eq!(found.dielectric_constant, 2.0);
    assert_eq!(catalog.list_names().last().map(String::as_str), Some("Custom"));
}

#[test]
fn test_add_overwrites_in_place() {
    let catalog = MaterialCatalog::new();
    catalog.add("Steel", 190e9, 0.29, 1.0);
    assert_eq!(catalog.len(), 4);
    assert_eq!(catalog.lookup("Steel").unwrap().youngs_modulus, 190e9);
    assert_eq!(catalog.list_names(), vec!["Aluminum", "Steel", "Glass", "Test"]);
}

#[test]
fn test_empty_catalog() {
    let catalog = MaterialCatalog::empty();
    assert!(catalog.is_empty());
    assert!(catalog.list_names().is_empty());
    assert!(catalog.lookup("Aluminum").is_err());
}

#[test]
fn test_concurrent_add_and_lookup() {
    let catalog = Arc::new(MaterialCatalog::new());
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let catalog = Arc::clone(&catalog);
            thread::spawn(move || {
                let name = format!("Alloy{}", i);
                catalog.add(&name, 1e9 * (i + 1) as f64, 0.3, 1.0);
                catalog.lookup(&name).unwrap();
                catalog.lookup("Glass").unwrap();
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(catalog.len(), 12);
    assert_eq!(catalog.lookup("Alloy3").unwrap().youngs_modulus, 4e9);
}

#[test]
fn test_global_catalog_is_seeded() {
    let catalog = MaterialCatalog::global();
    assert!(catalog.lookup("Aluminum").is_ok());
    assert!(std::ptr::eq(catalog, MaterialCatalog::global()));
}
