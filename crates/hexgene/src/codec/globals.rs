//! Global trait resolution: class, region, tag, body skin, pattern, color,
//! and the shared part-skin rule.

use crate::codec::bits::BitGroups;
use crate::error::DecodeError;
use crate::layout::{JAPAN_PART_MARKER, LEGACY_SKIN_ZERO, Layout, XMAS_GROUP_MARKER};
use crate::model::{BodySkin, Class, ColorGene, PartSkin, PartType, PatternGene, Region, Tag};
use crate::tables;

/// Part scan order for the extended-layout region inference.
const REGION_SCAN: [PartType; 6] = [
    PartType::Eyes,
    PartType::Mouth,
    PartType::Ears,
    PartType::Horn,
    PartType::Back,
    PartType::Tail,
];

/// Part scan order for the tag inference. Differs from the region scan.
const TAG_SCAN: [PartType; 6] = [
    PartType::Eyes,
    PartType::Ears,
    PartType::Horn,
    PartType::Mouth,
    PartType::Back,
    PartType::Tail,
];

pub(crate) fn resolve_class(bits: &str, layout: Layout) -> Result<Class, DecodeError> {
    tables::class_codes(layout)
        .get(bits)
        .copied()
        .ok_or_else(|| DecodeError::UnrecognizedClass { bits: bits.to_string() })
}

/// Resolves the region group, falling back to the Japan part-marker scan
/// under the extended layout.
///
/// An extended region group that is all zeros and carries no Japan marker
/// has no defined resolution; it fails like any other miss.
pub(crate) fn resolve_region(groups: &BitGroups) -> Result<Region, DecodeError> {
    let bits = groups.region();
    if let Some(region) = tables::region_codes(groups.layout()).get(bits) {
        return Ok(*region);
    }
    if groups.layout() == Layout::Extended {
        for part_type in REGION_SCAN {
            if &groups.part(part_type)[..4] == JAPAN_PART_MARKER {
                return Ok(Region::Japan);
            }
        }
    }
    Err(DecodeError::UnrecognizedRegion { bits: bits.to_string() })
}

/// Resolves the tag group.
///
/// An all-zero tag group (at the active layout's width) is not read from
/// the table: the tag is inferred from the six part skins instead. All six
/// skins must resolve before the Bionic check; any failure aborts the
/// decode.
pub(crate) fn resolve_tag(groups: &BitGroups) -> Result<Tag, DecodeError> {
    let bits = groups.tag();
    if bits == groups.layout().tag_zero() {
        let mut skins = [PartSkin::Global; 6];
        for (slot, part_type) in TAG_SCAN.into_iter().enumerate() {
            skins[slot] =
                resolve_part_skin(&groups.part(part_type)[..4], groups.region(), groups.xmas())?;
        }
        return Ok(if skins.contains(&PartSkin::Bionic) {
            Tag::Agamogenesis
        } else {
            Tag::Default
        });
    }
    tables::tag_codes(groups.layout())
        .get(bits)
        .copied()
        .ok_or_else(|| DecodeError::UnrecognizedTag { bits: bits.to_string() })
}

pub(crate) fn resolve_body_skin(bits: &str) -> Result<BodySkin, DecodeError> {
    tables::body_skin_codes()
        .get(bits)
        .copied()
        .ok_or_else(|| DecodeError::UnrecognizedBodySkin { bits: bits.to_string() })
}

/// Splits the pattern group into its three equal slots, raw.
pub(crate) fn split_pattern(bits: &str) -> PatternGene {
    let third = bits.len() / 3;
    PatternGene {
        d: bits[..third].to_string(),
        r1: bits[third..2 * third].to_string(),
        r2: bits[2 * third..3 * third].to_string(),
    }
}

/// Resolves the three color slots against the class palette.
///
/// The third slot reads a double-width slice, an inherited storage quirk;
/// only the trailing four bits of each slice ever key the palette.
pub(crate) fn resolve_color(bits: &str, class: Class) -> Result<ColorGene, DecodeError> {
    let third = bits.len() / 3;
    let d = &bits[..third];
    let r1 = &bits[third..2 * third];
    let r2 = &bits[2 * third..bits.len().min(4 * third)];
    Ok(ColorGene {
        d: palette_entry(class, "d", d)?,
        r1: palette_entry(class, "r1", r1)?,
        r2: palette_entry(class, "r2", r2)?,
    })
}

fn palette_entry(class: Class, slot: &'static str, slice: &str) -> Result<String, DecodeError> {
    let key = &slice[slice.len() - 4..];
    tables::class_palette(class)
        .and_then(|palette| palette.get(key))
        .map(|color| color.to_string())
        .ok_or_else(|| DecodeError::UnrecognizedColor {
            class,
            slot,
            key: key.to_string(),
        })
}

/// The shared part-skin rule, also consulted by the tag inference.
///
/// Skin bits resolve through the mixed-width skin table. The legacy 2-bit
/// zero sentinel overrides the lookup: the Christmas marker wins, then the
/// region bits resolve through the same table.
pub(crate) fn resolve_part_skin(
    skin_bits: &str,
    region_bits: &str,
    xmas_bits: &str,
) -> Result<PartSkin, DecodeError> {
    let mut skin = tables::part_skin_codes().get(skin_bits).copied();
    if skin_bits == LEGACY_SKIN_ZERO {
        skin = if xmas_bits == XMAS_GROUP_MARKER {
            Some(PartSkin::Xmas1)
        } else {
            tables::part_skin_codes().get(region_bits).copied()
        };
    }
    skin.ok_or_else(|| DecodeError::UnrecognizedPartSkin {
        bits: skin_bits.to_string(),
        region: region_bits.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_tables_are_layout_specific() {
        assert_eq!(resolve_class("0100", Layout::Legacy).unwrap(), Class::Aquatic);
        assert_eq!(resolve_class("00100", Layout::Extended).unwrap(), Class::Aquatic);
        assert!(matches!(
            resolve_class("00100", Layout::Legacy),
            Err(DecodeError::UnrecognizedClass { .. })
        ));
    }

    #[test]
    fn test_part_skin_direct_lookup() {
        assert_eq!(resolve_part_skin("11", "00000", "").unwrap(), PartSkin::Mystic);
        assert_eq!(resolve_part_skin("0011", "00000", "").unwrap(), PartSkin::Japan);
        assert_eq!(resolve_part_skin("0000", "00000", "").unwrap(), PartSkin::Global);
    }

    #[test]
    fn test_part_skin_zero_sentinel_falls_back_to_region() {
        assert_eq!(
            resolve_part_skin("00", "00000", "000000000000").unwrap(),
            PartSkin::Global
        );
        assert_eq!(
            resolve_part_skin("00", "00001", "000000000000").unwrap(),
            PartSkin::Japan
        );
    }

    #[test]
    fn test_part_skin_zero_sentinel_christmas_marker_wins() {
        assert_eq!(
            resolve_part_skin("00", "00001", "010101010101").unwrap(),
            PartSkin::Xmas1
        );
    }

    #[test]
    fn test_part_skin_miss_names_both_bit_groups() {
        let err = resolve_part_skin("00", "00010", "000000000000").unwrap_err();
        assert_eq!(
            err,
            DecodeError::UnrecognizedPartSkin {
                bits: "00".to_string(),
                region: "00010".to_string(),
            }
        );
        assert!(matches!(
            resolve_part_skin("1111", "00000", ""),
            Err(DecodeError::UnrecognizedPartSkin { .. })
        ));
    }

    #[test]
    fn test_unassigned_tag_code_fails() {
        // Legacy tag bits 01010: not the zero sentinel, not in the table.
        let hex = format!("00028{}", "0".repeat(59));
        let groups = BitGroups::parse(&hex, Layout::Legacy).unwrap();
        assert_eq!(groups.tag(), "01010");
        let err = resolve_tag(&groups).unwrap_err();
        assert_eq!(err, DecodeError::UnrecognizedTag { bits: "01010".to_string() });
    }

    #[test]
    fn test_zeroed_tag_group_infers_default_without_bionic_parts() {
        let groups = BitGroups::parse("", Layout::Legacy).unwrap();
        assert_eq!(resolve_tag(&groups).unwrap(), Tag::Default);
    }

    #[test]
    fn test_pattern_splits_into_equal_thirds() {
        let pattern = split_pattern("000001000111000110");
        assert_eq!(pattern.d, "000001");
        assert_eq!(pattern.r1, "000111");
        assert_eq!(pattern.r2, "000110");
    }

    #[test]
    fn test_color_keys_are_trailing_bits_of_each_slice() {
        // Legacy width: 12 bits, thirds of 4; the r2 slice is declared
        // double-width but clamps to the group end.
        let color = resolve_color("010000100100", Class::Beast).unwrap();
        assert_eq!(color.d, "f0c66e");
        assert_eq!(color.r1, "ffec51");
        assert_eq!(color.r2, "f0c66e");

        // Extended width: 18 bits, thirds of 6, keys still the last 4.
        let color = resolve_color("000010000011000110", Class::Aquatic).unwrap();
        assert_eq!(color.d, "4cffdf");
        assert_eq!(color.r1, "2de8f2");
        assert_eq!(color.r2, "ff5a71");
    }

    #[test]
    fn test_color_miss_names_class_slot_and_key() {
        let err = resolve_color("011101110111", Class::Bug).unwrap_err();
        assert_eq!(
            err,
            DecodeError::UnrecognizedColor {
                class: Class::Bug,
                slot: "d",
                key: "0111".to_string(),
            }
        );
    }

    #[test]
    fn test_body_skin_lookup() {
        assert_eq!(resolve_body_skin("0001").unwrap(), BodySkin::Frosty);
        assert!(matches!(
            resolve_body_skin("1111"),
            Err(DecodeError::UnrecognizedBodySkin { .. })
        ));
    }
}
