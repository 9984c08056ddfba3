//! External trait and part catalogs.
//!
//! The two catalogs are read-only collaborators: JSON documents loaded once
//! at startup and passed by shared reference into every decode. The core
//! fixes only the keys it queries and the shape it expects back; the data
//! itself is opaque and versioned outside this crate.

use std::fs;
use std::io::Read;
use std::path::Path;

use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::error::{CatalogError, DecodeError};
use crate::model::{Class, PartSkin, PartType};

/// Skin-keyed display-name variants of one trait entry.
type SkinVariants = FxHashMap<String, String>;

/// The trait-name catalog: (class, part type, value bits) → skin → name.
///
/// JSON shape: `{"beast": {"eyes": {"001010": {"global": "Chubby"}}}}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct TraitCatalog {
    entries: FxHashMap<Class, FxHashMap<PartType, FxHashMap<String, SkinVariants>>>,
}

impl TraitCatalog {
    /// Parses a catalog from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses a catalog from a reader.
    pub fn from_reader(reader: impl Read) -> Result<Self, CatalogError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Loads a catalog from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        Self::from_json_str(&fs::read_to_string(path)?)
    }

    /// Resolves the display name of one slot: the skin-specific variant if
    /// the entry carries one, otherwise the entry's global fallback.
    pub fn trait_name(
        &self,
        class: Class,
        part_type: PartType,
        bits: &str,
        skin: PartSkin,
    ) -> Result<&str, DecodeError> {
        let variants = self
            .entries
            .get(&class)
            .and_then(|parts| parts.get(&part_type))
            .and_then(|bins| bins.get(bits))
            .ok_or_else(|| DecodeError::UnrecognizedPartBin {
                class,
                part_type,
                bits: bits.to_string(),
            })?;
        variants
            .get(skin.as_str())
            .or_else(|| variants.get(PartSkin::Global.as_str()))
            .map(String::as_str)
            .ok_or_else(|| DecodeError::UnrecognizedPartSkinVariant {
                class,
                part_type,
                bits: bits.to_string(),
                skin,
            })
    }
}

/// One entry in the part catalog.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PartDefinition {
    pub class: Class,
    pub name: String,
    #[serde(rename = "specialGenes", default)]
    pub special_genes: Vec<String>,
    #[serde(rename = "type")]
    pub part_type: PartType,
}

/// The part catalog: canonical part id → part definition.
///
/// JSON shape: `{"eyes-chubby": {"class": "beast", "name": "Chubby",
/// "specialGenes": [], "type": "eyes"}}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct PartCatalog {
    entries: FxHashMap<String, PartDefinition>,
}

impl PartCatalog {
    /// Parses a catalog from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses a catalog from a reader.
    pub fn from_reader(reader: impl Read) -> Result<Self, CatalogError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Loads a catalog from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        Self::from_json_str(&fs::read_to_string(path)?)
    }

    /// Looks up a part definition by its canonical id.
    pub fn get(&self, part_id: &str) -> Option<&PartDefinition> {
        self.entries.get(part_id)
    }

    /// Number of catalog entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the catalog holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Derives the canonical part id for a (part type, trait name) pair.
///
/// The name is lowercased and joined to the part type with dashes; spaces
/// become dashes, apostrophes and periods are dropped.
pub fn part_id(part_type: PartType, name: &str) -> String {
    let mut id = format!("{}-{}", part_type.as_str(), name.to_lowercase());
    id = id.replace(' ', "-");
    id.retain(|c| c != '\'' && c != '.');
    id
}
