//! Experience points and level progression

/// Highest attainable character level
pub const MAX_LEVEL: u8 = 20;

/// Minimum XP for each level; index 0 is level 1
pub static XP_THRESHOLDS: [i32; MAX_LEVEL as usize] = [
    0, 300, 900, 2_700, 6_500, // 1-5
    14_000, 23_000, 34_000, 48_000, 64_000, // 6-10
    85_000, 100_000, 120_000, 140_000, 165_000, // 11-15
    195_000, 225_000, 265_000, 305_000, 355_000, // 16-20
];

/// Minimum XP for `level`, or `None` outside 1..=20
pub fn threshold_for_level(level: u8) -> Option<i32> {
    if level == 0 {
        return None;
    }
    XP_THRESHOLDS.get(level as usize - 1).copied()
}

/// Highest level whose threshold is at most `xp`. Always at least 1.
pub fn level_for_xp(xp: i32) -> u8 {
    let mut level = 1;
    for (i, threshold) in XP_THRESHOLDS.iter().enumerate() {
        if xp >= *threshold {
            level = i as u8 + 1;
        } else {
            break;
        }
    }
    level
}

/// Everything the experience section displays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperienceProgress {
    /// XP after clamping to >= 0; written back to the field
    pub xp: i32,
    pub level: u8,
    /// Threshold of the next level, or the level-20 threshold at the cap
    pub bar_maximum: i32,
    /// `xp` limited to `bar_maximum`
    pub bar_value: i32,
}

impl ExperienceProgress {
    /// Filled fraction of the XP bar (0.0 to 1.0)
    pub fn fraction(&self) -> f64 {
        if self.bar_maximum <= 0 {
            return 0.0;
        }
        (self.bar_value as f64 / self.bar_maximum as f64).clamp(0.0, 1.0)
    }

    pub fn is_max_level(&self) -> bool {
        self.level >= MAX_LEVEL
    }
}

/// Level and bar position for `xp`
pub fn compute_experience(xp: i32) -> ExperienceProgress {
    let xp = xp.max(0);
    let level = level_for_xp(xp);

    let bar_maximum = if level < MAX_LEVEL {
        XP_THRESHOLDS[level as usize]
    } else {
        XP_THRESHOLDS[MAX_LEVEL as usize - 1]
    };

    ExperienceProgress {
        xp,
        level,
        bar_maximum,
        bar_value: xp.min(bar_maximum),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn progress(xp: i32, level: u8, bar_maximum: i32, bar_value: i32) -> ExperienceProgress {
        ExperienceProgress { xp, level, bar_maximum, bar_value }
    }

    #[test]
    fn test_table_is_non_decreasing() {
        for pair in XP_THRESHOLDS.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
        assert_eq!(threshold_for_level(1), Some(0));
        assert_eq!(threshold_for_level(20), Some(355_000));
        assert_eq!(threshold_for_level(0), None);
        assert_eq!(threshold_for_level(21), None);
    }

    #[test]
    fn test_start_of_level_one() {
        assert_eq!(compute_experience(0), progress(0, 1, 300, 0));
    }

    #[test]
    fn test_just_below_level_two() {
        assert_eq!(compute_experience(299), progress(299, 1, 300, 299));
    }

    #[test]
    fn test_exactly_level_two() {
        assert_eq!(compute_experience(300), progress(300, 2, 900, 300));
    }

    #[test]
    fn test_max_level() {
        let p = compute_experience(355_000);
        assert_eq!(p, progress(355_000, 20, 355_000, 355_000));
        assert!(p.is_max_level());
    }

    #[test]
    fn test_beyond_max_level_clamps_bar_only() {
        assert_eq!(compute_experience(400_000), progress(400_000, 20, 355_000, 355_000));
    }

    #[test]
    fn test_negative_xp_is_corrected() {
        assert_eq!(compute_experience(-50), progress(0, 1, 300, 0));
    }

    #[test]
    fn test_mid_table() {
        let p = compute_experience(50_000);
        assert_eq!(p.level, 9);
        assert_eq!(p.bar_maximum, 64_000);
        assert!((p.fraction() - 50_000.0 / 64_000.0).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn level_is_monotonic(a in -1000i32..400_000, b in -1000i32..400_000) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(compute_experience(lo).level <= compute_experience(hi).level);
        }

        #[test]
        fn bar_never_overflows(xp in any::<i32>()) {
            let p = compute_experience(xp);
            prop_assert!(p.xp >= 0);
            prop_assert!((1..=MAX_LEVEL).contains(&p.level));
            prop_assert!(p.bar_value <= p.bar_maximum);
            prop_assert!(threshold_for_level(p.level).unwrap() <= p.xp);
        }
    }
}
