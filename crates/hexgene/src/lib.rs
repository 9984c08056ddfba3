//! hexgene: decoder for hex-encoded creature genomes.
//!
//! A genome is a hex string carrying every heritable trait of one
//! creature: its class, region, tag, body skin, color and pattern genes,
//! and the dominant/recessive trait slots of its six body parts. This
//! crate expands the hex into a fixed-width bit string, slices it per one
//! of two fixed layouts, and resolves every field through static code
//! tables and two external catalogs into a strongly-typed [`Genome`].
//!
//! # Layouts
//!
//! Two encodings exist: the legacy 256-bit layout and the extended 512-bit
//! layout. They disagree on every field offset and on several field
//! widths, so the caller must say which one to use — the layout is never
//! inferred from the input's length.
//!
//! # Quick Start
//!
//! ```no_run
//! use hexgene::{decode_genome, quality_score, Layout, PartCatalog, TraitCatalog};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // The catalogs are external data, loaded once and shared by reference.
//! let traits = TraitCatalog::from_path("catalogs/traits.json")?;
//! let parts = PartCatalog::from_path("catalogs/parts.json")?;
//!
//! let genome = decode_genome(
//!     "0x11c642400a028ca14a428c20cc011080c61180a0820180604233082",
//!     Layout::Legacy,
//!     &traits,
//!     &parts,
//! )?;
//!
//! println!("a {} creature from region {}", genome.class, genome.region);
//! println!("purity: {:.2}", quality_score(&genome));
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`model`]: The decoded data types (enumerations, part records, the
//!   genome aggregate)
//! - [`codec`]: Bit extraction and trait resolution
//! - [`catalog`]: The external trait-name and part catalogs
//! - [`quality`]: The 0–100 purity score
//! - [`layout`]: The two fixed bit layouts
//! - [`error`]: Error types
//!
//! # Errors
//!
//! Decoding is fail-fast: the first group or slot that cannot be resolved
//! against its table or catalog aborts the decode with a [`DecodeError`]
//! naming the offending bits. No field is ever substituted with a default
//! and no partial genome is ever returned.
//!
//! # Concurrency
//!
//! A decode is a pure function of the hex string, the layout and the two
//! catalogs. The catalogs and the internal code tables are immutable after
//! load, so any number of decodes may run in parallel against shared
//! references.

pub mod catalog;
pub mod codec;
pub mod error;
pub mod layout;
pub mod model;
pub mod quality;
mod tables;

// Re-export commonly used types at crate root
pub use catalog::{PartCatalog, PartDefinition, TraitCatalog, part_id};
pub use codec::{BitGroups, decode_genome};
pub use error::{CatalogError, DecodeError};
pub use layout::Layout;
pub use model::{
    BodySkin, Class, ColorGene, Genome, PartRecord, PartSkin, PartTrait, PartType, PatternGene,
    Region, Tag,
};
pub use quality::quality_score;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
