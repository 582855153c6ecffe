use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::SpinResult;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum RewardCurrency {
    Pad,
    Bug,
}

impl RewardCurrency {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Pad => "PAD",
            Self::Bug => "BUG",
        }
    }

    pub fn from_symbol(symbol: &str) -> Self {
        if symbol.eq_ignore_ascii_case("bug") {
            Self::Bug
        } else {
            Self::Pad
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelSegment {
    pub reward: f64,
    pub currency: RewardCurrency,
    pub color: &'static str,
}

impl WheelSegment {
    pub fn label(&self) -> String {
        format!("{} {}", crate::format::format_pad(self.reward), self.currency.symbol())
    }
}

/// Clockwise from the pointer at 12 o'clock.
pub const SEGMENTS: [WheelSegment; 8] = [
    WheelSegment { reward: 1.0, currency: RewardCurrency::Pad, color: "#1e3a8a" },
    WheelSegment { reward: 20.0, currency: RewardCurrency::Pad, color: "#7c3aed" },
    WheelSegment { reward: 50.0, currency: RewardCurrency::Pad, color: "#db2777" },
    WheelSegment { reward: 100.0, currency: RewardCurrency::Pad, color: "#ea580c" },
    WheelSegment { reward: 300.0, currency: RewardCurrency::Pad, color: "#16a34a" },
    WheelSegment { reward: 1000.0, currency: RewardCurrency::Pad, color: "#0891b2" },
    WheelSegment { reward: 50.0, currency: RewardCurrency::Bug, color: "#ca8a04" },
    WheelSegment { reward: 10000.0, currency: RewardCurrency::Pad, color: "#dc2626" },
];

pub const SEGMENT_ANGLE: f64 = 360.0 / SEGMENTS.len() as f64;
pub const MIN_SPINS: u32 = 5;
pub const MAX_SPINS: u32 = 8;
/// Keeps the pointer away from segment borders.
const MAX_JITTER: f64 = SEGMENT_ANGLE * 0.35;

/// Maps the server's answer onto a wheel segment. An explicit index wins,
/// then an exact reward match, then the closest reward of the same currency.
pub fn resolve_segment(result: &SpinResult) -> usize {
    if let Some(index) = result.segment.filter(|i| *i < SEGMENTS.len()) {
        return index;
    }
    let currency = RewardCurrency::from_symbol(result.reward_type.as_deref().unwrap_or("PAD"));
    let candidates = SEGMENTS
        .iter()
        .enumerate()
        .filter(|(_, s)| s.currency == currency);

    candidates
        .min_by(|(_, a), (_, b)| {
            let da = (a.reward - result.reward).abs();
            let db = (b.reward - result.reward).abs();
            da.total_cmp(&db)
        })
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Segment under the pointer for a wheel rotated clockwise by `rotation` degrees.
pub fn segment_at(rotation: f64) -> usize {
    let wheel_angle = (360.0 - rotation.rem_euclid(360.0)).rem_euclid(360.0);
    ((wheel_angle / SEGMENT_ANGLE).floor() as usize).min(SEGMENTS.len() - 1)
}

/// Absolute rotation that spins `turns` full circles forward and stops on
/// `segment`, offset by `jitter` degrees from its centre.
pub fn target_rotation(current: f64, segment: usize, turns: u32, jitter: f64) -> f64 {
    let centre = segment as f64 * SEGMENT_ANGLE + SEGMENT_ANGLE / 2.0;
    let wheel_angle = centre + jitter.clamp(-MAX_JITTER, MAX_JITTER);
    let desired = (360.0 - wheel_angle).rem_euclid(360.0);
    let forward = (desired - current.rem_euclid(360.0)).rem_euclid(360.0);
    current + f64::from(turns) * 360.0 + forward
}

pub fn landing_rotation<R: Rng>(current: f64, segment: usize, rng: &mut R) -> f64 {
    let turns = rng.gen_range(MIN_SPINS..=MAX_SPINS);
    let jitter = rng.gen_range(-MAX_JITTER..MAX_JITTER);
    target_rotation(current, segment, turns, jitter)
}

/// Client-side view of one spin cycle.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Wheel {
    pub is_spinning: bool,
    pub rotation: f64,
    pub last_result: Option<SpinResult>,
}

impl Wheel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_spin(&mut self) -> bool {
        if self.is_spinning {
            return false;
        }
        self.is_spinning = true;
        self.last_result = None;
        true
    }

    pub fn land<R: Rng>(&mut self, result: SpinResult, rng: &mut R) -> usize {
        let segment = resolve_segment(&result);
        self.rotation = landing_rotation(self.rotation, segment, rng);
        self.last_result = Some(result);
        segment
    }

    pub fn complete_spin(&mut self) {
        self.is_spinning = false;
    }

    pub fn abort(&mut self) {
        self.is_spinning = false;
        self.last_result = None;
    }
}

pub fn reward_message(result: &SpinResult) -> String {
    let currency = RewardCurrency::from_symbol(result.reward_type.as_deref().unwrap_or("PAD"));
    format!(
        "You won {} {}!",
        crate::format::format_pad(result.reward),
        currency.symbol()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn result(reward: f64, kind: &str, segment: Option<usize>) -> SpinResult {
        SpinResult {
            success: true,
            reward,
            reward_type: Some(kind.to_string()),
            segment,
            ..Default::default()
        }
    }

    #[test]
    fn resolves_by_index_then_reward() {
        assert_eq!(resolve_segment(&result(20.0, "PAD", Some(5))), 5);
        assert_eq!(resolve_segment(&result(300.0, "PAD", Some(99))), 4);
        assert_eq!(resolve_segment(&result(50.0, "BUG", None)), 6);
        assert_eq!(resolve_segment(&result(50.0, "PAD", None)), 2);
        assert_eq!(resolve_segment(&result(7000.0, "PAD", None)), 7);
    }

    #[test]
    fn rotation_lands_on_requested_segment() {
        for segment in 0..SEGMENTS.len() {
            for start in [0.0, 90.0, 1234.5, 7200.0] {
                let r = target_rotation(start, segment, MIN_SPINS, 0.0);
                assert_eq!(segment_at(r), segment, "segment {} from {}", segment, start);
                assert!(r >= start + f64::from(MIN_SPINS) * 360.0);
                assert!(r < start + f64::from(MIN_SPINS + 1) * 360.0);
            }
        }
    }

    #[test]
    fn jitter_stays_inside_segment() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut rotation = 0.0;
        for segment in [0, 3, 7, 1, 6] {
            rotation = landing_rotation(rotation, segment, &mut rng);
            assert_eq!(segment_at(rotation), segment);
        }
        let edge = target_rotation(0.0, 2, MIN_SPINS, 1000.0);
        assert_eq!(segment_at(edge), 2);
    }

    #[test]
    fn wheel_cycle() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut wheel = Wheel::new();
        assert!(wheel.start_spin());
        assert!(!wheel.start_spin());
        let seg = wheel.land(result(1000.0, "PAD", None), &mut rng);
        assert_eq!(seg, 5);
        assert!(wheel.is_spinning);
        wheel.complete_spin();
        assert!(!wheel.is_spinning);
        assert_eq!(reward_message(wheel.last_result.as_ref().unwrap()), "You won 1,000 PAD!");
    }
}
