//! Error types for genome decoding and catalog loading.

use thiserror::Error;

use crate::model::{Class, PartSkin, PartType};

/// Error during genome decoding.
///
/// Decoding is pure and deterministic, so every failure is final for its
/// input: there is no partial genome and nothing to retry. Each variant
/// names the group or slot that failed and the raw bits or derived key that
/// missed its table, so a failing genome can be checked against the
/// catalogs directly.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    #[error("invalid hex digit {digit:?} in genome string")]
    InvalidHex { digit: char },

    #[error("unrecognized class bits {bits:?}")]
    UnrecognizedClass { bits: String },

    #[error("unrecognized region bits {bits:?}")]
    UnrecognizedRegion { bits: String },

    #[error("unrecognized tag bits {bits:?}")]
    UnrecognizedTag { bits: String },

    #[error("unrecognized body skin bits {bits:?}")]
    UnrecognizedBodySkin { bits: String },

    #[error("no {class} palette entry for {slot} color key {key:?}")]
    UnrecognizedColor {
        class: Class,
        slot: &'static str,
        key: String,
    },

    #[error("unrecognized part skin bits {bits:?} (region bits {region:?})")]
    UnrecognizedPartSkin { bits: String, region: String },

    #[error("no {class} {part_type} trait for value bits {bits:?}")]
    UnrecognizedPartBin {
        class: Class,
        part_type: PartType,
        bits: String,
    },

    #[error("{class} {part_type} trait {bits:?} has neither a {skin} nor a global variant")]
    UnrecognizedPartSkinVariant {
        class: Class,
        part_type: PartType,
        bits: String,
        skin: PartSkin,
    },

    #[error("unknown part id {part_id:?}")]
    UnrecognizedPartGene { part_id: String },
}

/// Error while loading one of the external catalogs.
///
/// Catalog loading happens once at startup and is wholly separate from
/// decoding; a decode never performs I/O.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}
