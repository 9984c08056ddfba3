//! Creature classes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The nine creature classes.
///
/// The lowercase name is the string backing value used by the external
/// catalogs and by serialized genomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Class {
    Beast,
    Bug,
    Bird,
    Plant,
    Aquatic,
    Reptile,
    Mech,
    Dusk,
    Dawn,
}

impl Class {
    /// Returns the string backing value.
    pub fn as_str(self) -> &'static str {
        match self {
            Class::Beast => "beast",
            Class::Bug => "bug",
            Class::Bird => "bird",
            Class::Plant => "plant",
            Class::Aquatic => "aquatic",
            Class::Reptile => "reptile",
            Class::Mech => "mech",
            Class::Dusk => "dusk",
            Class::Dawn => "dawn",
        }
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_serde_backing_values() {
        let class: Class = serde_json::from_str("\"aquatic\"").unwrap();
        assert_eq!(class, Class::Aquatic);
        assert_eq!(serde_json::to_string(&Class::Beast).unwrap(), "\"beast\"");
    }

    #[test]
    fn test_class_display_matches_backing_value() {
        assert_eq!(Class::Reptile.to_string(), "reptile");
        assert_eq!(Class::Dawn.to_string(), Class::Dawn.as_str());
    }
}
