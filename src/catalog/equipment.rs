//! Equipment catalog - what the hangar shop sells

use serde::Deserialize;

use crate::catalog::CatalogLoadError;
use crate::core::types::EquipmentId;
use crate::model::equipment::{Equipment, EquipmentKind, EquipmentStats};

fn template(
    name: &str,
    kind: EquipmentKind,
    stats: EquipmentStats,
    cost: i64,
    description: &str,
) -> Equipment {
    Equipment {
        id: EquipmentId::new(),
        name: name.into(),
        kind,
        stats,
        cost,
        description: description.into(),
    }
}

/// Catalog of purchasable equipment templates
///
/// Templates are looked up by name; purchasing clones a template into a
/// fresh inventory item through the ledger.
#[derive(Debug, Clone, Default)]
pub struct EquipmentCatalog {
    templates: Vec<Equipment>,
}

impl EquipmentCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stock shop and armory inventory
    pub fn with_defaults() -> Self {
        let mut catalog = Self::new();

        // Permanent systems
        catalog.add(template(
            "Basic Laser Cannon",
            EquipmentKind::Weapon,
            EquipmentStats {
                damage: Some(50),
                ..Default::default()
            },
            2000,
            "Standard-issue laser cannon with decent damage output",
        ));
        catalog.add(template(
            "Standard Shield Generator",
            EquipmentKind::Shield,
            EquipmentStats {
                defense: Some(40),
                ..Default::default()
            },
            1500,
            "Basic energy shield providing moderate protection",
        ));
        catalog.add(template(
            "Ion Engine",
            EquipmentKind::Engine,
            EquipmentStats {
                speed: Some(60),
                ..Default::default()
            },
            1800,
            "Reliable ion engine with good thrust-to-weight ratio",
        ));

        // Expendable stores
        catalog.add(template(
            "AIM-120 AMRAAM",
            EquipmentKind::Missile,
            EquipmentStats {
                damage: Some(80),
                range: Some(100),
                ..Default::default()
            },
            3000,
            "Advanced Medium-Range Air-to-Air Missile with active radar homing",
        ));
        catalog.add(template(
            "AIM-9 Sidewinder",
            EquipmentKind::Missile,
            EquipmentStats {
                damage: Some(70),
                range: Some(40),
                ..Default::default()
            },
            2000,
            "Short-range air-to-air missile with infrared tracking",
        ));
        catalog.add(template(
            "GBU-12 Paveway II",
            EquipmentKind::Bomb,
            EquipmentStats {
                damage: Some(120),
                blast_radius: Some(50),
                ..Default::default()
            },
            4000,
            "Laser-guided bomb for precision ground strikes",
        ));
        catalog.add(template(
            "Mk-82 JDAM",
            EquipmentKind::Bomb,
            EquipmentStats {
                damage: Some(100),
                blast_radius: Some(40),
                ..Default::default()
            },
            3500,
            "GPS/INS guided bomb with all-weather capability",
        ));
        catalog.add(template(
            "MJU-7/B Flares",
            EquipmentKind::Flare,
            EquipmentStats {
                countermeasure_rating: Some(60),
                ..Default::default()
            },
            1000,
            "Standard countermeasure flares for missile defense",
        ));
        catalog.add(template(
            "Advanced IR Decoys",
            EquipmentKind::Flare,
            EquipmentStats {
                countermeasure_rating: Some(80),
                ..Default::default()
            },
            2000,
            "Advanced infrared decoys with improved effectiveness",
        ));

        catalog
    }

    /// Add a template to the catalog
    pub fn add(&mut self, item: Equipment) {
        self.templates.push(item);
    }

    /// Get a template by name
    pub fn get(&self, name: &str) -> Option<&Equipment> {
        self.templates.iter().find(|e| e.name == name)
    }

    /// All templates of a given kind
    pub fn of_kind(&self, kind: EquipmentKind) -> impl Iterator<Item = &Equipment> {
        self.templates.iter().filter(move |e| e.kind == kind)
    }

    /// All templates
    pub fn all(&self) -> &[Equipment] {
        &self.templates
    }

    /// Load a catalog from a TOML file
    pub fn load_from_toml(path: &std::path::Path) -> Result<Self, CatalogLoadError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| CatalogLoadError::IoError(e.to_string()))?;
        Self::parse_toml(&content)
    }

    /// Parse a catalog from a TOML string
    pub fn parse_toml(content: &str) -> Result<Self, CatalogLoadError> {
        let toml_data: TomlEquipmentFile = toml::from_str(content)
            .map_err(|e| CatalogLoadError::ParseError(e.to_string()))?;

        let mut catalog = Self::new();
        for item in toml_data.equipment {
            catalog.add(item.into_equipment()?);
        }
        Ok(catalog)
    }
}

/// TOML representation of the equipment file
#[derive(Debug, Deserialize)]
struct TomlEquipmentFile {
    equipment: Vec<TomlEquipment>,
}

/// TOML representation of a single template
#[derive(Debug, Deserialize)]
struct TomlEquipment {
    name: String,
    kind: String,
    cost: i64,
    #[serde(default)]
    description: String,
    #[serde(default)]
    stats: EquipmentStats,
}

impl TomlEquipment {
    fn into_equipment(self) -> Result<Equipment, CatalogLoadError> {
        let kind = match self.kind.to_lowercase().as_str() {
            "weapon" => EquipmentKind::Weapon,
            "shield" => EquipmentKind::Shield,
            "engine" => EquipmentKind::Engine,
            "special" => EquipmentKind::Special,
            "missile" => EquipmentKind::Missile,
            "bomb" => EquipmentKind::Bomb,
            "flare" => EquipmentKind::Flare,
            _ => return Err(CatalogLoadError::InvalidKind(self.kind)),
        };

        Ok(Equipment {
            id: EquipmentId::new(),
            name: self.name,
            kind,
            stats: self.stats,
            cost: self.cost,
            description: self.description,
        })
    }
}
