//! Genome tags.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A special marker attached to a whole genome.
///
/// `Default` is the no-tag value; its backing string is empty.
/// `Agamogenesis` is never stored in the extended tag code table; it is
/// only ever produced by the Bionic-part inference rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tag {
    #[serde(rename = "")]
    Default,
    #[serde(rename = "origin")]
    Origin,
    #[serde(rename = "agamogenesis")]
    Agamogenesis,
    #[serde(rename = "meo1")]
    Meo1,
    #[serde(rename = "meo2")]
    Meo2,
}

impl Tag {
    /// Returns the string backing value. `Default` is the empty string.
    pub fn as_str(self) -> &'static str {
        match self {
            Tag::Default => "",
            Tag::Origin => "origin",
            Tag::Agamogenesis => "agamogenesis",
            Tag::Meo1 => "meo1",
            Tag::Meo2 => "meo2",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
