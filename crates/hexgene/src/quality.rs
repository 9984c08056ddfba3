//! Gene quality (purity) scoring.

use crate::model::Genome;

/// Dominant-slot contribution when its class matches the genome's.
const DOMINANT_SHARE: f64 = 76.0 / 6.0;

/// Computes the 0–100 purity score of a decoded genome.
///
/// Each of the six parts contributes `76/6` for a class-matching dominant
/// slot, `3` for recessive1 and `1` for recessive2. The sum is rounded to
/// two decimal places; a genome whose every slot matches its class scores
/// exactly `100.00`.
pub fn quality_score(genome: &Genome) -> f64 {
    let mut score = 0.0;
    for (_, part) in genome.parts() {
        if part.dominant.class == genome.class {
            score += DOMINANT_SHARE;
        }
        if part.recessive1.class == genome.class {
            score += 3.0;
        }
        if part.recessive2.class == genome.class {
            score += 1.0;
        }
    }
    (score * 100.0).round() / 100.0
}
