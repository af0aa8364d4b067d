//! Volume policy.
//!
//! Halves the current volume unless that would land at or below a tenth of
//! the maximum, in which case the volume is reset to half the maximum.

use super::device::VolumeRange;

/// Intermediate values of one policy evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plan {
    /// `current / 2`, truncated toward zero
    pub half: i64,

    /// `max / 10`; a `half` at or below this triggers the fallback
    pub threshold: i64,

    /// `max / 2`
    pub fallback: i64,

    /// The volume to write
    pub target: i64,
}

impl Plan {
    /// True if the fallback replaced the halved volume.
    pub fn used_fallback(&self) -> bool {
        self.half <= self.threshold
    }
}

/// The halving rule. No clamping beyond the rule itself is performed.
#[derive(Debug, Clone, Copy, Default)]
pub struct HalvingPolicy;

impl HalvingPolicy {
    pub fn plan(&self, current: i64, range: VolumeRange) -> Plan {
        let half = current / 2;
        let threshold = range.max / 10;
        let fallback = range.max / 2;
        let target = if half <= threshold { fallback } else { half };

        Plan {
            half,
            threshold,
            fallback,
            target,
        }
    }
}

/// Compute the new volume for `current` within `range`.
pub fn new_volume(current: i64, range: VolumeRange) -> i64 {
    HalvingPolicy.plan(current, range).target
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_halves_loud_volume() {
        assert_eq!(new_volume(100, VolumeRange::new(0, 200)), 50);
    }

    #[test]
    fn test_quiet_volume_resets_to_midpoint() {
        assert_eq!(new_volume(10, VolumeRange::new(0, 200)), 100);
        assert_eq!(new_volume(0, VolumeRange::new(0, 200)), 100);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        // half = 9, threshold = 10
        assert_eq!(new_volume(19, VolumeRange::new(0, 100)), 50);
        // half = 10, threshold = 10
        assert_eq!(new_volume(21, VolumeRange::new(0, 100)), 50);
        // half = 11
        assert_eq!(new_volume(22, VolumeRange::new(0, 100)), 11);
    }

    #[test]
    fn test_truncating_division() {
        let plan = HalvingPolicy.plan(87, VolumeRange::new(0, 87));
        assert_eq!(plan.half, 43);
        assert_eq!(plan.threshold, 8);
        assert_eq!(plan.fallback, 43);
        assert!(!plan.used_fallback());

        // Negative values truncate toward zero.
        let plan = HalvingPolicy.plan(-7, VolumeRange::new(-10, 5));
        assert_eq!(plan.half, -3);
        assert_eq!(plan.threshold, 0);
        assert_eq!(plan.target, 2);
        assert!(plan.used_fallback());
    }

    #[test]
    fn test_small_max() {
        // max / 10 == 0, so a zero volume still routes to max / 2
        assert_eq!(new_volume(0, VolumeRange::new(0, 9)), 4);
        assert_eq!(new_volume(9, VolumeRange::new(0, 9)), 4);
        assert_eq!(new_volume(0, VolumeRange::new(0, 1)), 0);
    }

    #[test]
    fn test_result_stays_in_range() {
        for min in [-64, -10, -1, 0] {
            for max in [0, 1, 9, 10, 31, 87, 100, 65536] {
                let range = VolumeRange::new(min, max);
                for current in min..=max.min(min + 2000) {
                    let target = new_volume(current, range);
                    assert!(
                        range.contains(target),
                        "current={current} range={range} target={target}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_policy_is_repeatable() {
        let range = VolumeRange::new(0, 65536);
        for current in [0, 1, 6553, 6554, 13108, 40000, 65536] {
            assert_eq!(new_volume(current, range), new_volume(current, range));
        }
    }
}
