//! Static catalog of celestial bodies.
//!
//! Names and radii never change at runtime; positions do, and arrive every
//! frame through a [`PositionMap`](crate::scene::PositionMap). Radii are in
//! Earth radii and are multiplied by the catalog's size scale factor to get
//! scene units.

use std::path::Path;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::OrreryError;

/// Name of the central star. Selecting it uses fixed framing instead of
/// the radius heuristic.
pub const SUN: &str = "Sun";

/// A body that can be selected and focused by the camera.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CelestialBody {
    /// Unique display name, also the key into the position map.
    pub name: String,
    /// Radius in Earth radii, before scaling.
    pub radius: f32,
}

impl CelestialBody {
    /// Create a body from a name and unscaled radius.
    #[must_use]
    pub fn new(name: impl Into<String>, radius: f32) -> Self {
        Self {
            name: name.into(),
            radius,
        }
    }

    /// Whether this body is the central star.
    #[must_use]
    pub fn is_sun(&self) -> bool {
        self.name == SUN
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CatalogFile {
    size_scale_factor: f32,
    #[serde(rename = "body")]
    bodies: Vec<CelestialBody>,
}

/// Name-indexed collection of bodies plus the scene's size scale factor.
#[derive(Debug, Clone)]
pub struct BodyCatalog {
    size_scale_factor: f32,
    bodies: Vec<CelestialBody>,
    index: FxHashMap<String, usize>,
}

impl Default for BodyCatalog {
    fn default() -> Self {
        let bodies = [
            (SUN, 5.0),
            ("Mercury", 0.38),
            ("Venus", 0.95),
            ("Earth", 1.0),
            ("Moon", 0.27),
            ("Mars", 0.53),
            ("Jupiter", 11.21),
            ("Saturn", 9.45),
            ("Uranus", 4.01),
            ("Neptune", 3.88),
            ("Pluto", 0.19),
        ]
        .into_iter()
        .map(|(name, radius)| CelestialBody::new(name, radius))
        .collect::<Vec<_>>();
        let index = bodies
            .iter()
            .enumerate()
            .map(|(i, b)| (b.name.clone(), i))
            .collect();
        Self {
            size_scale_factor: 10.0,
            bodies,
            index,
        }
    }
}

impl BodyCatalog {
    /// Build a catalog, rejecting duplicate or empty names, non-positive
    /// radii and a non-positive scale factor.
    ///
    /// # Errors
    ///
    /// Returns [`OrreryError::Catalog`] naming the first offending body or
    /// the bad scale factor.
    pub fn new(
        size_scale_factor: f32,
        bodies: Vec<CelestialBody>,
    ) -> Result<Self, OrreryError> {
        if !(size_scale_factor.is_finite() && size_scale_factor > 0.0) {
            return Err(OrreryError::Catalog(format!(
                "size scale factor must be positive, got {size_scale_factor}"
            )));
        }

        let mut index = FxHashMap::default();
        for (i, body) in bodies.iter().enumerate() {
            if body.name.is_empty() {
                return Err(OrreryError::Catalog(format!(
                    "body #{i} has an empty name"
                )));
            }
            if !(body.radius.is_finite() && body.radius > 0.0) {
                return Err(OrreryError::Catalog(format!(
                    "body \"{}\" has invalid radius {}",
                    body.name, body.radius
                )));
            }
            if index.insert(body.name.clone(), i).is_some() {
                return Err(OrreryError::Catalog(format!(
                    "duplicate body \"{}\"",
                    body.name
                )));
            }
        }

        Ok(Self {
            size_scale_factor,
            bodies,
            index,
        })
    }

    /// Parse a catalog from TOML:
    ///
    /// ```toml
    /// size_scale_factor = 10.0
    ///
    /// [[body]]
    /// name = "Mars"
    /// radius = 0.53
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`OrreryError::Catalog`] on malformed TOML or when the
    /// parsed bodies fail validation.
    pub fn from_toml_str(content: &str) -> Result<Self, OrreryError> {
        let file: CatalogFile = toml::from_str(content)
            .map_err(|e| OrreryError::Catalog(e.to_string()))?;
        Self::new(file.size_scale_factor, file.bodies)
    }

    /// Load a catalog from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`OrreryError::Io`] if the file cannot be read, otherwise
    /// the same errors as [`from_toml_str`](Self::from_toml_str).
    pub fn load(path: &Path) -> Result<Self, OrreryError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Multiplier from catalog radii to scene units.
    #[must_use]
    pub const fn size_scale_factor(&self) -> f32 {
        self.size_scale_factor
    }

    /// Look up a body by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CelestialBody> {
        self.index.get(name).and_then(|&i| self.bodies.get(i))
    }

    /// The central star, if the catalog has one.
    #[must_use]
    pub fn sun(&self) -> Option<&CelestialBody> {
        self.get(SUN)
    }

    /// Radius of the named body in scene units.
    #[must_use]
    pub fn scaled_radius(&self, name: &str) -> Option<f32> {
        self.get(name).map(|b| b.radius * self.size_scale_factor)
    }

    /// All bodies in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &CelestialBody> {
        self.bodies.iter()
    }

    /// Number of bodies.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Whether the catalog has no bodies.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_has_sun_and_planets() {
        let catalog = BodyCatalog::default();
        assert_eq!(catalog.len(), 11);
        assert!(catalog.sun().is_some_and(CelestialBody::is_sun));
        assert_eq!(catalog.get("Mars").map(|b| b.radius), Some(0.53));
        assert!(catalog.get("Vulcan").is_none());
    }

    #[test]
    fn scaled_radius_uses_scale_factor() {
        let catalog = BodyCatalog::default();
        let mars = catalog.scaled_radius("Mars").unwrap();
        assert!((mars - 5.3).abs() < 1e-5);
    }

    #[test]
    fn parses_toml_catalog() {
        let toml_str = r#"
size_scale_factor = 2.0

[[body]]
name = "Sun"
radius = 10.0

[[body]]
name = "Earth"
radius = 1.0
"#;
        let catalog = BodyCatalog::from_toml_str(toml_str).unwrap();
        assert_eq!(catalog.size_scale_factor(), 2.0);
        assert_eq!(catalog.scaled_radius("Earth"), Some(2.0));
        let names: Vec<_> = catalog.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, ["Sun", "Earth"]);
    }

    #[test]
    fn rejects_duplicate_names() {
        let err = BodyCatalog::new(
            1.0,
            vec![CelestialBody::new("Mars", 0.5), CelestialBody::new("Mars", 0.6)],
        )
        .unwrap_err();
        assert!(err.to_string().contains("duplicate body \"Mars\""));
    }

    #[test]
    fn rejects_bad_radius_and_scale() {
        assert!(
            BodyCatalog::new(1.0, vec![CelestialBody::new("Ceres", 0.0)])
                .is_err()
        );
        assert!(BodyCatalog::new(
            1.0,
            vec![CelestialBody::new("Ceres", f32::NAN)]
        )
        .is_err());
        assert!(BodyCatalog::new(0.0, Vec::new()).is_err());
        assert!(BodyCatalog::new(1.0, vec![CelestialBody::new("", 1.0)])
            .is_err());
    }

    #[test]
    fn missing_scale_factor_is_a_catalog_error() {
        let toml_str = "[[body]]\nname = \"Earth\"\nradius = 1.0";
        let err = BodyCatalog::from_toml_str(toml_str).unwrap_err();
        assert!(matches!(err, OrreryError::Catalog(_)));
    }
}
