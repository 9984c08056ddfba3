//! Body and part skins.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The skin of a genome's whole body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodySkin {
    /// The plain body; its backing string is empty.
    #[serde(rename = "")]
    Normal,
    #[serde(rename = "frosty")]
    Frosty,
    #[serde(rename = "wavy")]
    Wavy,
}

impl BodySkin {
    /// Returns the string backing value. `Normal` is the empty string.
    pub fn as_str(self) -> &'static str {
        match self {
            BodySkin::Normal => "",
            BodySkin::Frosty => "frosty",
            BodySkin::Wavy => "wavy",
        }
    }
}

/// The skin variant of one body part.
///
/// The camelCase name is the skin key used inside the trait catalog;
/// `Global` doubles as the catalog's fallback key when a part has no entry
/// for its specific skin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PartSkin {
    Global,
    Mystic,
    Japan,
    Xmas1,
    Xmas2,
    Bionic,
    Summer,
    StrawberrySummer,
    VanillaSummer,
    Shiny,
    StrawberryShiny,
    VanillaShiny,
}

impl PartSkin {
    /// Returns the string backing value (the trait-catalog skin key).
    pub fn as_str(self) -> &'static str {
        match self {
            PartSkin::Global => "global",
            PartSkin::Mystic => "mystic",
            PartSkin::Japan => "japan",
            PartSkin::Xmas1 => "xmas1",
            PartSkin::Xmas2 => "xmas2",
            PartSkin::Bionic => "bionic",
            PartSkin::Summer => "summer",
            PartSkin::StrawberrySummer => "strawberrySummer",
            PartSkin::VanillaSummer => "vanillaSummer",
            PartSkin::Shiny => "shiny",
            PartSkin::StrawberryShiny => "strawberryShiny",
            PartSkin::VanillaShiny => "vanillaShiny",
        }
    }
}

impl fmt::Display for PartSkin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
