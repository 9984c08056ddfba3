//! Body parts and their inherited trait slots.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::Class;

/// The six body parts carried by every genome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartType {
    Eyes,
    Ears,
    Mouth,
    Horn,
    Back,
    Tail,
}

impl PartType {
    /// All parts in canonical order.
    pub const ALL: [PartType; 6] = [
        PartType::Eyes,
        PartType::Ears,
        PartType::Mouth,
        PartType::Horn,
        PartType::Back,
        PartType::Tail,
    ];

    /// Returns the string backing value.
    pub fn as_str(self) -> &'static str {
        match self {
            PartType::Eyes => "eyes",
            PartType::Ears => "ears",
            PartType::Mouth => "mouth",
            PartType::Horn => "horn",
            PartType::Back => "back",
            PartType::Tail => "tail",
        }
    }
}

impl fmt::Display for PartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The resolved identity of one inherited slot of a body part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartTrait {
    /// The class the trait belongs to (from the part catalog, not the
    /// slot's raw class bits).
    pub class: Class,
    /// Display name, e.g. `"Tiny Turtle"`.
    pub name: String,
    /// Canonical catalog id, e.g. `"mouth-tiny-turtle"`.
    pub part_id: String,
    #[serde(rename = "type")]
    pub part_type: PartType,
    /// Special-gene markers carried by the catalog entry, if any.
    pub special_genes: Vec<String>,
}

/// The three inherited slots of one body part, in descending expression
/// priority, plus the mystic flag derived from the dominant skin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartRecord {
    pub dominant: PartTrait,
    pub recessive1: PartTrait,
    pub recessive2: PartTrait,
    pub mystic: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_type_canonical_order() {
        let names: Vec<&str> = PartType::ALL.iter().map(|p| p.as_str()).collect();
        assert_eq!(names, ["eyes", "ears", "mouth", "horn", "back", "tail"]);
    }
}
