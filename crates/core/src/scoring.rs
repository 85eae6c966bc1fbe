//! Scoring module - guideline line-clear points and leveling
//!
//! - 1/2/3/4 lines award 100/300/500/800, times the level before any level-up.
//! - A 4-line clear while back-to-back is already active awards 1200 instead.
//! - Back-to-back turns on after a 4-line clear, off after a 1-3 line clear, and
//!   is left alone when nothing clears.
//! - The level goes up by one when total lines reach `level * 10`, at most once
//!   per lock.

use crate::types::{
    BACK_TO_BACK_TETRIS_SCORE, GRAVITY_BASE_ROWS_PER_SEC, GRAVITY_LOW_STEP,
    GRAVITY_MAX_ROWS_PER_SEC, GRAVITY_MID_BASE, GRAVITY_MID_STEP, HARD_DROP_POINTS,
    LINES_PER_LEVEL, LINE_SCORES, SOFT_DROP_POINTS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreResult {
    /// Points before the level multiplier.
    pub base: u32,
    pub total: u32,
    /// Back-to-back flag to carry into the next lock.
    pub back_to_back: bool,
}

/// Base points for a clear, given the back-to-back flag before this lock.
pub fn line_clear_base(lines: usize, back_to_back: bool) -> u32 {
    match lines {
        4 if back_to_back => BACK_TO_BACK_TETRIS_SCORE,
        1..=4 => LINE_SCORES[lines],
        _ => 0,
    }
}

/// Back-to-back flag after a clear of `lines`.
pub fn next_back_to_back(lines: usize, back_to_back: bool) -> bool {
    match lines {
        0 => back_to_back,
        4 => true,
        _ => false,
    }
}

/// Score one lock event.
pub fn calculate_score(lines: usize, level: u32, back_to_back: bool) -> ScoreResult {
    let base = line_clear_base(lines, back_to_back);
    ScoreResult {
        base,
        total: base.saturating_mul(level),
        back_to_back: next_back_to_back(lines, back_to_back),
    }
}

/// Drop points: 1 per row soft, 2 per row hard.
pub fn calculate_drop_score(rows: u32, is_hard_drop: bool) -> u32 {
    if is_hard_drop {
        rows * HARD_DROP_POINTS
    } else {
        rows * SOFT_DROP_POINTS
    }
}

/// Level after a lock. Only one step is taken even if several thresholds are crossed.
pub fn next_level(total_lines: u32, level: u32) -> u32 {
    if total_lines >= level.saturating_mul(LINES_PER_LEVEL) {
        level + 1
    } else {
        level
    }
}

/// Gravity in rows per second for a level.
pub fn gravity_speed(level: u32) -> f64 {
    match level {
        0..=9 => GRAVITY_BASE_ROWS_PER_SEC + GRAVITY_LOW_STEP * (level.max(1) - 1) as f64,
        10..=19 => GRAVITY_MID_BASE + GRAVITY_MID_STEP * (level - 10) as f64,
        _ => GRAVITY_MAX_ROWS_PER_SEC,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_points_table() {
        assert_eq!(line_clear_base(0, false), 0);
        assert_eq!(line_clear_base(1, false), 100);
        assert_eq!(line_clear_base(2, false), 300);
        assert_eq!(line_clear_base(3, false), 500);
        assert_eq!(line_clear_base(4, false), 800);
        assert_eq!(line_clear_base(4, true), 1200);
        assert_eq!(line_clear_base(1, true), 100);
    }

    #[test]
    fn back_to_back_transitions() {
        assert!(next_back_to_back(4, false));
        assert!(next_back_to_back(4, true));
        assert!(!next_back_to_back(1, true));
        assert!(!next_back_to_back(3, true));
        assert!(next_back_to_back(0, true));
        assert!(!next_back_to_back(0, false));
    }

    #[test]
    fn level_multiplies_score() {
        assert_eq!(calculate_score(1, 1, false).total, 100);
        let r = calculate_score(4, 5, true);
        assert_eq!(r.base, 1200);
        assert_eq!(r.total, 6000);
        assert!(r.back_to_back);
    }

    #[test]
    fn single_after_tetris_clears_flag() {
        let first = calculate_score(4, 1, false);
        assert_eq!(first.total, 800);
        let second = calculate_score(1, 1, first.back_to_back);
        assert_eq!(second.base, 100);
        assert!(!second.back_to_back);
    }

    #[test]
    fn drop_scores() {
        assert_eq!(calculate_drop_score(5, false), 5);
        assert_eq!(calculate_drop_score(17, true), 34);
    }

    #[test]
    fn one_level_per_lock() {
        assert_eq!(next_level(9, 1), 1);
        assert_eq!(next_level(10, 1), 2);
        // Crossing two thresholds still advances once.
        assert_eq!(next_level(30, 1), 2);
    }

    #[test]
    fn gravity_curve() {
        assert_eq!(gravity_speed(1), 1.0);
        assert_eq!(gravity_speed(9), 5.0);
        assert_eq!(gravity_speed(10), 5.0);
        assert_eq!(gravity_speed(19), 23.0);
        assert_eq!(gravity_speed(20), 20.0);
        assert_eq!(gravity_speed(99), 20.0);
    }
}
