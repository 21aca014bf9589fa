//! Mock biomarker synthesis and status aggregation.
//!
//! Every draw comes from a caller-supplied random source, so a seeded
//! generator reproduces a run exactly. The mapping from uniform draws to
//! statuses, colors and confidence scores lives in small pure functions that
//! can be checked without any randomness.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use strip_model::{BiomarkerResult, Status, StripType};

/// Lower bound of the confidence score (inclusive).
pub const CONFIDENCE_MIN: u8 = 75;
/// Upper bound of the confidence score (exclusive).
pub const CONFIDENCE_MAX: u8 = 100;

const CONFIDENCE_SPAN: f64 = (CONFIDENCE_MAX - CONFIDENCE_MIN) as f64;

/// Cumulative thresholds for a weighted normal/attention/critical draw.
///
/// A uniform draw `u` in `[0, 1)` maps to normal when `u < normal`, to
/// attention when `u < attention`, and to critical otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusWeights {
    pub normal: f64,
    pub attention: f64,
}

impl StatusWeights {
    /// 60% normal, 25% attention, 15% critical.
    pub const ANALYSIS: StatusWeights = StatusWeights {
        normal: 0.60,
        attention: 0.85,
    };

    /// 60% normal, 30% attention, 10% critical.
    pub const HISTORY: StatusWeights = StatusWeights {
        normal: 0.60,
        attention: 0.90,
    };

    pub fn status_for(&self, draw: f64) -> Status {
        if draw < self.normal {
            Status::Normal
        } else if draw < self.attention {
            Status::Attention
        } else {
            Status::Critical
        }
    }

    /// Expected share of each status, least severe first.
    pub fn probabilities(&self) -> [f64; 3] {
        [
            self.normal,
            self.attention - self.normal,
            1.0 - self.attention,
        ]
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Status {
        self.status_for(rng.gen_range(0.0..1.0))
    }
}

impl Default for StatusWeights {
    fn default() -> Self {
        Self::ANALYSIS
    }
}

/// Pick a palette entry for `status` from a uniform draw in `[0, 1)`.
pub fn color_for(status: Status, draw: f64) -> &'static str {
    let palette = status.palette();
    let index = ((draw * palette.len() as f64) as usize).min(palette.len() - 1);
    palette[index]
}

/// Map a uniform draw in `[0, 1)` to an integer confidence in `75..100`.
///
/// Rounding can reach 100 for draws close to 1, so the result is capped.
pub fn confidence_for(draw: f64) -> u8 {
    let raw = (f64::from(CONFIDENCE_MIN) + draw * CONFIDENCE_SPAN).round();
    (raw as u8).clamp(CONFIDENCE_MIN, CONFIDENCE_MAX - 1)
}

/// Produce one mock result per biomarker of `strip`, in catalog order.
///
/// Each biomarker draws its status independently, then a swatch color from
/// that status's palette, then a confidence score.
pub fn synthesize<R: Rng + ?Sized>(strip: &StripType, rng: &mut R) -> Vec<BiomarkerResult> {
    let results: Vec<BiomarkerResult> = strip
        .biomarkers
        .iter()
        .map(|name| {
            let status = StatusWeights::ANALYSIS.sample(rng);
            let detected_color = color_for(status, rng.gen_range(0.0..1.0));
            let confidence = confidence_for(rng.gen_range(0.0..1.0));
            trace!(biomarker = %name, %status, detected_color, confidence, "drew result");
            BiomarkerResult::for_status(name.as_str(), status, detected_color, confidence)
        })
        .collect();
    debug!(strip = %strip.id, results = results.len(), "synthesized results");
    results
}

/// [`synthesize`] with a fresh generator seeded from `seed`.
pub fn synthesize_with_seed(strip: &StripType, seed: u64) -> Vec<BiomarkerResult> {
    let mut rng = StdRng::seed_from_u64(seed);
    synthesize(strip, &mut rng)
}

/// Most severe status among `results`; `Normal` for an empty run.
pub fn aggregate_status(results: &[BiomarkerResult]) -> Status {
    if results.iter().any(|r| r.status == Status::Critical) {
        return Status::Critical;
    }
    if results.iter().any(|r| r.status == Status::Attention) {
        return Status::Attention;
    }
    Status::Normal
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_split_unit_interval() {
        let weights = StatusWeights::ANALYSIS;
        assert_eq!(weights.status_for(0.0), Status::Normal);
        assert_eq!(weights.status_for(0.599_999), Status::Normal);
        assert_eq!(weights.status_for(0.60), Status::Attention);
        assert_eq!(weights.status_for(0.849_999), Status::Attention);
        assert_eq!(weights.status_for(0.85), Status::Critical);
        assert_eq!(weights.status_for(0.999_999), Status::Critical);
    }

    #[test]
    fn history_weights_shift_critical_share() {
        assert_eq!(StatusWeights::HISTORY.status_for(0.87), Status::Attention);
        assert_eq!(StatusWeights::HISTORY.status_for(0.90), Status::Critical);
    }

    #[test]
    fn probabilities_match_thresholds() {
        let [n, a, c] = StatusWeights::ANALYSIS.probabilities();
        assert!((n - 0.60).abs() < 1e-9);
        assert!((a - 0.25).abs() < 1e-9);
        assert!((c - 0.15).abs() < 1e-9);
    }

    #[test]
    fn color_draw_covers_each_palette_slot() {
        assert_eq!(color_for(Status::Normal, 0.0), "#22C55E");
        assert_eq!(color_for(Status::Normal, 0.34), "#4ADE80");
        assert_eq!(color_for(Status::Normal, 0.999), "#86EFAC");
        assert_eq!(color_for(Status::Critical, 0.5), "#F87171");
    }

    #[test]
    fn confidence_stays_below_one_hundred() {
        assert_eq!(confidence_for(0.0), 75);
        assert_eq!(confidence_for(0.5), 88);
        assert_eq!(confidence_for(0.979), 99);
        assert_eq!(confidence_for(0.999_999), 99);
    }
}
