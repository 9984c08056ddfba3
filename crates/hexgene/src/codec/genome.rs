//! Genome decoding: the single entry point composing the bit extractor,
//! the global resolvers and the six part decoders.

use log::debug;

use crate::catalog::{PartCatalog, TraitCatalog};
use crate::codec::bits::BitGroups;
use crate::codec::globals;
use crate::codec::part::decode_part;
use crate::error::DecodeError;
use crate::layout::Layout;
use crate::model::{Genome, PartType};

/// Decodes a hex genome string under the given layout.
///
/// The catalogs are read-only collaborators loaded once by the caller; the
/// decode itself is a pure function of its inputs and may run concurrently
/// with other decodes sharing the same catalogs. Any unresolved field
/// fails the whole decode — a partial genome is never returned.
pub fn decode_genome(
    hex: &str,
    layout: Layout,
    traits: &TraitCatalog,
    parts: &PartCatalog,
) -> Result<Genome, DecodeError> {
    debug!("decoding {}-bit genome", layout.total_bits());
    let groups = BitGroups::parse(hex, layout)?;

    let class = globals::resolve_class(groups.class(), layout)?;
    let region = globals::resolve_region(&groups)?;
    let tag = globals::resolve_tag(&groups)?;
    let body_skin = globals::resolve_body_skin(groups.body_skin())?;
    let pattern = globals::split_pattern(groups.pattern());
    let color = globals::resolve_color(groups.color(), class)?;

    Ok(Genome {
        class,
        region,
        tag,
        body_skin,
        pattern,
        color,
        eyes: decode_part(&groups, PartType::Eyes, traits, parts)?,
        ears: decode_part(&groups, PartType::Ears, traits, parts)?,
        mouth: decode_part(&groups, PartType::Mouth, traits, parts)?,
        horn: decode_part(&groups, PartType::Horn, traits, parts)?,
        back: decode_part(&groups, PartType::Back, traits, parts)?,
        tail: decode_part(&groups, PartType::Tail, traits, parts)?,
    })
}
