//! Bit layouts for the two genome encodings.
//!
//! A layout fixes the total bit width and the (offset, length) of every
//! named group in the padded binary string, plus the sub-field offsets
//! inside each body-part group. The two layouts disagree on every offset
//! and on several field widths, so all slicing goes through these tables.

/// One named bit field: offset and length within a bit string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Span {
    pub offset: usize,
    pub len: usize,
}

impl Span {
    pub(crate) const fn new(offset: usize, len: usize) -> Self {
        Self { offset, len }
    }

    /// Slices this span out of a bit string.
    pub(crate) fn slice<'a>(&self, bits: &'a str) -> &'a str {
        &bits[self.offset..self.offset + self.len]
    }
}

/// Top-level group spans for one layout.
#[derive(Debug)]
pub(crate) struct GroupSpans {
    pub class: Span,
    pub region: Span,
    pub tag: Span,
    pub body_skin: Span,
    /// The Christmas marker group. Only the legacy layout carries one.
    pub xmas: Option<Span>,
    pub pattern: Span,
    pub color: Span,
    pub eyes: Span,
    pub mouth: Span,
    pub ears: Span,
    pub horn: Span,
    pub back: Span,
    pub tail: Span,
}

/// Class and value sub-fields of one inherited slot, relative to the start
/// of the part group.
#[derive(Debug)]
pub(crate) struct SlotSpans {
    pub class: Span,
    pub value: Span,
}

/// Sub-field spans inside a body-part group.
#[derive(Debug)]
pub(crate) struct PartSpans {
    pub skin: Span,
    pub dominant: SlotSpans,
    pub recessive1: SlotSpans,
    pub recessive2: SlotSpans,
}

const LEGACY_GROUPS: GroupSpans = GroupSpans {
    class: Span::new(0, 4),
    region: Span::new(8, 5),
    tag: Span::new(13, 5),
    body_skin: Span::new(18, 4),
    xmas: Some(Span::new(22, 12)),
    pattern: Span::new(34, 18),
    color: Span::new(52, 12),
    eyes: Span::new(64, 32),
    mouth: Span::new(96, 32),
    ears: Span::new(128, 32),
    horn: Span::new(160, 32),
    back: Span::new(192, 32),
    tail: Span::new(224, 32),
};

const EXTENDED_GROUPS: GroupSpans = GroupSpans {
    class: Span::new(0, 5),
    region: Span::new(22, 18),
    tag: Span::new(40, 15),
    body_skin: Span::new(61, 4),
    xmas: None,
    pattern: Span::new(65, 27),
    color: Span::new(92, 18),
    eyes: Span::new(149, 43),
    mouth: Span::new(213, 43),
    ears: Span::new(277, 43),
    horn: Span::new(341, 43),
    back: Span::new(405, 43),
    tail: Span::new(469, 43),
};

const LEGACY_PARTS: PartSpans = PartSpans {
    skin: Span::new(0, 2),
    dominant: SlotSpans { class: Span::new(2, 4), value: Span::new(6, 6) },
    recessive1: SlotSpans { class: Span::new(12, 4), value: Span::new(16, 6) },
    recessive2: SlotSpans { class: Span::new(22, 4), value: Span::new(26, 6) },
};

const EXTENDED_PARTS: PartSpans = PartSpans {
    skin: Span::new(0, 4),
    dominant: SlotSpans { class: Span::new(4, 5), value: Span::new(11, 6) },
    recessive1: SlotSpans { class: Span::new(17, 5), value: Span::new(24, 6) },
    recessive2: SlotSpans { class: Span::new(30, 5), value: Span::new(37, 6) },
};

/// The leading part-group bits that mark a Japanese part.
pub(crate) const JAPAN_PART_MARKER: &str = "0011";

/// The legacy Christmas marker group value that forces the Xmas1 skin.
pub(crate) const XMAS_GROUP_MARKER: &str = "010101010101";

/// The zeroed legacy skin sub-field that triggers the region fallback.
pub(crate) const LEGACY_SKIN_ZERO: &str = "00";

/// Raw dominant-skin bits that flag a mystic part independently of the skin
/// table. Only the extended layout's 4-bit skin field can ever equal it.
pub(crate) const MYSTIC_SKIN_BITS: &str = "0001";

const LEGACY_TAG_ZERO: &str = "00000";
const EXTENDED_TAG_ZERO: &str = "000000000000000";

/// Selects between the two fixed genome encodings.
///
/// The layout is supplied by the caller; it is never inferred from the
/// input string's length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    /// The legacy 256-bit encoding.
    Legacy,
    /// The extended 512-bit encoding.
    Extended,
}

impl Layout {
    /// Total width of the padded binary string.
    pub fn total_bits(self) -> usize {
        match self {
            Layout::Legacy => 256,
            Layout::Extended => 512,
        }
    }

    pub(crate) fn groups(self) -> &'static GroupSpans {
        match self {
            Layout::Legacy => &LEGACY_GROUPS,
            Layout::Extended => &EXTENDED_GROUPS,
        }
    }

    pub(crate) fn parts(self) -> &'static PartSpans {
        match self {
            Layout::Legacy => &LEGACY_PARTS,
            Layout::Extended => &EXTENDED_PARTS,
        }
    }

    /// The all-zero tag sentinel at this layout's tag width.
    pub(crate) fn tag_zero(self) -> &'static str {
        match self {
            Layout::Legacy => LEGACY_TAG_ZERO,
            Layout::Extended => EXTENDED_TAG_ZERO,
        }
    }
}
