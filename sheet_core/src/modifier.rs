//! Ability modifiers

/// Modifier for an ability score: `floor((score - 10) / 2)`.
///
/// Rounds toward negative infinity, so a score of 9 gives -1 rather than 0.
/// Computed in `i64` so the full `i32` range is accepted.
pub fn compute_modifier(score: i32) -> i32 {
    (i64::from(score) - 10).div_euclid(2) as i32
}

/// Display form of a modifier: "+N" for N >= 0, the natural sign otherwise
pub fn format_modifier(modifier: i32) -> String {
    if modifier >= 0 {
        format!("+{}", modifier)
    } else {
        format!("{}", modifier)
    }
}
