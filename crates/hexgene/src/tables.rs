//! Static bit-code tables and per-class color palettes.
//!
//! These are the closed lookup sets versioned with the layout definitions:
//! bit pattern → enumerated value for classes, regions, tags and skins, and
//! the per-class 4-bit-key color palettes. They are built once on first use
//! and shared read-only by every decode.
//!
//! The class, region and tag tables exist in one instance per layout
//! because the same value is coded at different widths in the two
//! encodings (classes genuinely collide: `0000` and `00000` both mean
//! Beast). The part-skin table is deliberately a single mixed-width map:
//! its 2-, 4-, 5- and 12-bit keys cannot collide as strings, and the
//! zeroed-skin fallback looks *region* bits up through the very same table.

use lazy_static::lazy_static;
use rustc_hash::FxHashMap;

use crate::layout::Layout;
use crate::model::{BodySkin, Class, PartSkin, Region, Tag};

lazy_static! {
    static ref CLASS_CODES_LEGACY: FxHashMap<&'static str, Class> = [
        ("0000", Class::Beast),
        ("0001", Class::Bug),
        ("0010", Class::Bird),
        ("0011", Class::Plant),
        ("0100", Class::Aquatic),
        ("0101", Class::Reptile),
        ("1000", Class::Mech),
        ("1001", Class::Dawn),
        ("1010", Class::Dusk),
    ]
    .into_iter()
    .collect();

    static ref CLASS_CODES_EXTENDED: FxHashMap<&'static str, Class> = [
        ("00000", Class::Beast),
        ("00001", Class::Bug),
        ("00010", Class::Bird),
        ("00011", Class::Plant),
        ("00100", Class::Aquatic),
        ("00101", Class::Reptile),
        ("10000", Class::Mech),
        ("10001", Class::Dawn),
        ("10010", Class::Dusk),
    ]
    .into_iter()
    .collect();

    static ref REGION_CODES_LEGACY: FxHashMap<&'static str, Region> = [
        ("00000", Region::Global),
        ("00001", Region::Japan),
    ]
    .into_iter()
    .collect();

    // The extended region group is 18 bits wide and never matches these
    // 4-bit codes directly; extended regions resolve through the Japan
    // part-marker inference instead. The codes are retained verbatim from
    // the table data shipped with the layout definitions.
    static ref REGION_CODES_EXTENDED: FxHashMap<&'static str, Region> = [
        ("0000", Region::Global),
        ("0001", Region::Mystic),
        ("0011", Region::Japan),
        ("0101", Region::Xmas),
        ("0110", Region::Summer),
        ("0111", Region::StrawberrySummer),
        ("1000", Region::VanillaSummer),
        ("1001", Region::Shiny),
        ("1010", Region::StrawberryShiny),
        ("1011", Region::VanillaShiny),
    ]
    .into_iter()
    .collect();

    static ref TAG_CODES_LEGACY: FxHashMap<&'static str, Tag> = [
        ("00000", Tag::Default),
        ("00001", Tag::Origin),
        ("00010", Tag::Agamogenesis),
        ("00011", Tag::Meo1),
        ("00100", Tag::Meo2),
    ]
    .into_iter()
    .collect();

    static ref TAG_CODES_EXTENDED: FxHashMap<&'static str, Tag> = [
        ("000000000000000", Tag::Default),
        ("000000000000001", Tag::Origin),
        ("000000000000010", Tag::Meo1),
        ("000000000000011", Tag::Meo2),
    ]
    .into_iter()
    .collect();

    static ref BODY_SKIN_CODES: FxHashMap<&'static str, BodySkin> = [
        ("0000", BodySkin::Normal),
        ("0001", BodySkin::Frosty),
        ("0010", BodySkin::Wavy),
    ]
    .into_iter()
    .collect();

    static ref PART_SKIN_CODES: FxHashMap<&'static str, PartSkin> = [
        // Legacy codes, including the 5-bit region codes consulted by the
        // zeroed-skin fallback and the 12-bit Christmas marker.
        ("00000", PartSkin::Global),
        ("00001", PartSkin::Japan),
        ("010101010101", PartSkin::Xmas1),
        ("01", PartSkin::Bionic),
        ("10", PartSkin::Xmas2),
        ("11", PartSkin::Mystic),
        // Extended 4-bit codes.
        ("0000", PartSkin::Global),
        ("0001", PartSkin::Mystic),
        ("0011", PartSkin::Japan),
        ("0100", PartSkin::Xmas1),
        ("0101", PartSkin::Xmas2),
        ("0010", PartSkin::Bionic),
        ("0110", PartSkin::Summer),
        ("0111", PartSkin::StrawberrySummer),
        ("1000", PartSkin::VanillaSummer),
        ("1001", PartSkin::Shiny),
        ("1010", PartSkin::StrawberryShiny),
        ("1011", PartSkin::VanillaShiny),
    ]
    .into_iter()
    .collect();

    static ref CLASS_PALETTES: FxHashMap<Class, FxHashMap<&'static str, &'static str>> = {
        let mut palettes = FxHashMap::default();
        palettes.insert(
            Class::Beast,
            [
                ("0010", "ffec51"),
                ("0011", "ffa12a"),
                ("0100", "f0c66e"),
                ("0110", "60afce"),
                ("0000", "ffffff"),
                ("0001", "7a6767"),
            ]
            .into_iter()
            .collect(),
        );
        palettes.insert(
            Class::Bug,
            [
                ("0010", "ff7183"),
                ("0011", "ff6d61"),
                ("0100", "f74e4e"),
                ("0000", "ffffff"),
                ("0001", "7a6767"),
            ]
            .into_iter()
            .collect(),
        );
        palettes.insert(
            Class::Bird,
            [
                ("0010", "ff9ab8"),
                ("0011", "ffb4bb"),
                ("0100", "ff778e"),
                ("0000", "ffffff"),
                ("0001", "7a6767"),
            ]
            .into_iter()
            .collect(),
        );
        palettes.insert(
            Class::Plant,
            [
                ("0010", "ccef5e"),
                ("0011", "efd636"),
                ("0100", "c5ffd9"),
                ("0000", "ffffff"),
                ("0001", "7a6767"),
            ]
            .into_iter()
            .collect(),
        );
        palettes.insert(
            Class::Aquatic,
            [
                ("0010", "4cffdf"),
                ("0011", "2de8f2"),
                ("0100", "759edb"),
                ("0110", "ff5a71"),
                ("0000", "ffffff"),
                ("0001", "7a6767"),
            ]
            .into_iter()
            .collect(),
        );
        palettes.insert(
            Class::Reptile,
            [
                ("0010", "fdbcff"),
                ("0011", "ef93ff"),
                ("0100", "f5e1ff"),
                ("0110", "43e27d"),
                ("0000", "ffffff"),
                ("0001", "7a6767"),
            ]
            .into_iter()
            .collect(),
        );
        // The three later classes share one neutral palette.
        for class in [Class::Mech, Class::Dusk, Class::Dawn] {
            palettes.insert(
                class,
                [
                    ("0010", "D9D9D9"),
                    ("0011", "D9D9D9"),
                    ("0100", "D9D9D9"),
                    ("0110", "D9D9D9"),
                    ("0000", "ffffff"),
                    ("0001", "7a6767"),
                ]
                .into_iter()
                .collect(),
            );
        }
        palettes
    };
}

pub(crate) fn class_codes(layout: Layout) -> &'static FxHashMap<&'static str, Class> {
    match layout {
        Layout::Legacy => &CLASS_CODES_LEGACY,
        Layout::Extended => &CLASS_CODES_EXTENDED,
    }
}

pub(crate) fn region_codes(layout: Layout) -> &'static FxHashMap<&'static str, Region> {
    match layout {
        Layout::Legacy => &REGION_CODES_LEGACY,
        Layout::Extended => &REGION_CODES_EXTENDED,
    }
}

pub(crate) fn tag_codes(layout: Layout) -> &'static FxHashMap<&'static str, Tag> {
    match layout {
        Layout::Legacy => &TAG_CODES_LEGACY,
        Layout::Extended => &TAG_CODES_EXTENDED,
    }
}

pub(crate) fn body_skin_codes() -> &'static FxHashMap<&'static str, BodySkin> {
    &BODY_SKIN_CODES
}

pub(crate) fn part_skin_codes() -> &'static FxHashMap<&'static str, PartSkin> {
    &PART_SKIN_CODES
}

/// The color palette of one class, keyed by 4-bit color keys.
pub(crate) fn class_palette(class: Class) -> Option<&'static FxHashMap<&'static str, &'static str>> {
    CLASS_PALETTES.get(&class)
}
