//! Hex expansion and bit-group extraction.

use crate::error::DecodeError;
use crate::layout::Layout;
use crate::model::PartType;

/// The padded binary expansion of one genome hex string, sliceable into
/// the active layout's named groups.
#[derive(Debug, Clone)]
pub struct BitGroups {
    bits: String,
    layout: Layout,
}

impl BitGroups {
    /// Expands a hex string into a bit string of exactly the layout's
    /// width and wraps it for group slicing.
    ///
    /// An optional `0x` prefix is stripped. Each hex digit becomes four
    /// zero-padded bits; short input is left-padded with zeros, over-long
    /// input keeps only the trailing `total_bits` bits (excess leading
    /// content is discarded, never an error).
    pub fn parse(hex: &str, layout: Layout) -> Result<Self, DecodeError> {
        let hex = hex.strip_prefix("0x").unwrap_or(hex);
        let total = layout.total_bits();

        let mut bits = String::with_capacity(hex.len() * 4);
        for digit in hex.chars() {
            let value = digit.to_digit(16).ok_or(DecodeError::InvalidHex { digit })?;
            for shift in (0..4).rev() {
                bits.push(if value >> shift & 1 == 1 { '1' } else { '0' });
            }
        }

        let bits = if bits.len() >= total {
            bits[bits.len() - total..].to_string()
        } else {
            let mut padded = String::with_capacity(total);
            padded.extend(std::iter::repeat('0').take(total - bits.len()));
            padded.push_str(&bits);
            padded
        };

        Ok(Self { bits, layout })
    }

    /// The layout this expansion was sliced for.
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// The full padded bit string.
    pub fn bits(&self) -> &str {
        &self.bits
    }

    pub fn class(&self) -> &str {
        self.layout.groups().class.slice(&self.bits)
    }

    pub fn region(&self) -> &str {
        self.layout.groups().region.slice(&self.bits)
    }

    pub fn tag(&self) -> &str {
        self.layout.groups().tag.slice(&self.bits)
    }

    pub fn body_skin(&self) -> &str {
        self.layout.groups().body_skin.slice(&self.bits)
    }

    /// The Christmas marker group. Empty under the extended layout, which
    /// carries none.
    pub fn xmas(&self) -> &str {
        match self.layout.groups().xmas {
            Some(span) => span.slice(&self.bits),
            None => "",
        }
    }

    pub fn pattern(&self) -> &str {
        self.layout.groups().pattern.slice(&self.bits)
    }

    pub fn color(&self) -> &str {
        self.layout.groups().color.slice(&self.bits)
    }

    /// The bit group of one body part.
    pub fn part(&self, part_type: PartType) -> &str {
        let groups = self.layout.groups();
        let span = match part_type {
            PartType::Eyes => groups.eyes,
            PartType::Ears => groups.ears,
            PartType::Mouth => groups.mouth,
            PartType::Horn => groups.horn,
            PartType::Back => groups.back,
            PartType::Tail => groups.tail,
        };
        span.slice(&self.bits)
    }
}
