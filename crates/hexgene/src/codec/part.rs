//! Body-part decoding: skin, class and value sub-fields for the three
//! inherited slots, resolved through the external catalogs.

use log::trace;

use crate::catalog::{PartCatalog, TraitCatalog, part_id};
use crate::codec::bits::BitGroups;
use crate::codec::globals::{resolve_class, resolve_part_skin};
use crate::error::DecodeError;
use crate::layout::{LEGACY_SKIN_ZERO, Layout, MYSTIC_SKIN_BITS, SlotSpans};
use crate::model::{PartRecord, PartSkin, PartTrait, PartType};

/// Decodes one body part into its three-slot record.
pub(crate) fn decode_part(
    groups: &BitGroups,
    part_type: PartType,
    traits: &TraitCatalog,
    parts: &PartCatalog,
) -> Result<PartRecord, DecodeError> {
    let layout = groups.layout();
    let spans = layout.parts();
    let bin = groups.part(part_type);

    let d_skin_bits = spans.skin.slice(bin);
    let d_skin = resolve_part_skin(d_skin_bits, groups.region(), groups.xmas())?;
    // Legacy genomes store no recessive skin: the zeroed field resolves to
    // the region default. Extended genomes share one skin across all
    // three slots.
    let r_skin = match layout {
        Layout::Legacy => resolve_part_skin(LEGACY_SKIN_ZERO, groups.region(), groups.xmas())?,
        Layout::Extended => d_skin,
    };

    let dominant = decode_slot(groups, bin, part_type, &spans.dominant, d_skin, traits, parts)?;
    let recessive1 =
        decode_slot(groups, bin, part_type, &spans.recessive1, r_skin, traits, parts)?;
    let recessive2 =
        decode_slot(groups, bin, part_type, &spans.recessive2, r_skin, traits, parts)?;

    // Both mystic conditions are checked under both layouts; the raw-bits
    // sentinel can only ever match the extended 4-bit skin field.
    let mystic = d_skin == PartSkin::Mystic || d_skin_bits == MYSTIC_SKIN_BITS;
    trace!("{part_type}: dominant {} (mystic: {mystic})", dominant.part_id);

    Ok(PartRecord { dominant, recessive1, recessive2, mystic })
}

/// Decodes one inherited slot of a part into its resolved trait.
fn decode_slot(
    groups: &BitGroups,
    bin: &str,
    part_type: PartType,
    spans: &SlotSpans,
    skin: PartSkin,
    traits: &TraitCatalog,
    parts: &PartCatalog,
) -> Result<PartTrait, DecodeError> {
    let class = resolve_class(spans.class.slice(bin), groups.layout())?;
    let value_bits = spans.value.slice(bin);

    let name = traits.trait_name(class, part_type, value_bits, skin)?;
    let id = part_id(part_type, name);
    let definition = parts
        .get(&id)
        .ok_or_else(|| DecodeError::UnrecognizedPartGene { part_id: id.clone() })?;

    Ok(PartTrait {
        class: definition.class,
        name: definition.name.clone(),
        part_id: id,
        part_type: definition.part_type,
        special_genes: definition.special_genes.clone(),
    })
}
