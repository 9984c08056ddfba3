//! The decoded genome aggregate.

use serde::Serialize;

use crate::model::{BodySkin, Class, PartRecord, PartType, Region, Tag};

/// The three inherited pattern slots, as raw bit-strings.
///
/// Pattern bits have no table behind them; they are passed through as
/// sliced from the pattern group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternGene {
    pub d: String,
    pub r1: String,
    pub r2: String,
}

/// The three inherited color slots, resolved to palette tokens of the
/// genome's class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorGene {
    pub d: String,
    pub r1: String,
    pub r2: String,
}

/// A fully decoded genome.
///
/// Produced once per decode and never mutated afterwards. Every field holds
/// a resolved value; a genome with an unresolvable field is never
/// constructed (the decode fails instead).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Genome {
    pub class: Class,
    pub region: Region,
    pub tag: Tag,
    pub body_skin: BodySkin,
    pub pattern: PatternGene,
    pub color: ColorGene,
    pub eyes: PartRecord,
    pub ears: PartRecord,
    pub mouth: PartRecord,
    pub horn: PartRecord,
    pub back: PartRecord,
    pub tail: PartRecord,
}

impl Genome {
    /// Returns the record for one body part.
    pub fn part(&self, part_type: PartType) -> &PartRecord {
        match part_type {
            PartType::Eyes => &self.eyes,
            PartType::Ears => &self.ears,
            PartType::Mouth => &self.mouth,
            PartType::Horn => &self.horn,
            PartType::Back => &self.back,
            PartType::Tail => &self.tail,
        }
    }

    /// Iterates over all six parts in canonical order.
    pub fn parts(&self) -> impl Iterator<Item = (PartType, &PartRecord)> {
        PartType::ALL.into_iter().map(|pt| (pt, self.part(pt)))
    }
}
