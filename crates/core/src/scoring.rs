//! Scoring module - line-clear points, level progression and gravity speed
//!
//! Rules:
//! - clearing `k` rows at level `L` awards `k * 100 * L` points
//! - the level is `lines / 10 + 1`
//! - gravity starts at 1000ms per row and speeds up 100ms per level, never below 100ms

use crate::types::{
    BASE_DROP_MS, DROP_INTERVAL_MIN_MS, DROP_STEP_MS, LINES_PER_LEVEL, POINTS_PER_LINE,
};

/// Points for clearing `lines` rows in one lock at `level`
pub fn line_clear_points(lines: u32, level: u32) -> u32 {
    lines
        .saturating_mul(POINTS_PER_LINE)
        .saturating_mul(level)
}

/// Level reached after `total_lines` cumulative cleared lines
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + 1
}

/// Get drop interval for a level (in milliseconds)
pub fn drop_interval_ms(level: u32) -> u32 {
    let speedup = level.saturating_sub(1).saturating_mul(DROP_STEP_MS);
    BASE_DROP_MS
        .saturating_sub(speedup)
        .max(DROP_INTERVAL_MIN_MS)
}

/// Result of applying one lock's line clears to the running totals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub drop_interval_ms: u32,
    /// Points awarded by this lock
    pub points: u32,
}

impl Progress {
    /// Totals of a fresh game
    pub fn new() -> Self {
        let level = level_for_lines(0);
        Self {
            score: 0,
            lines: 0,
            level,
            drop_interval_ms: drop_interval_ms(level),
            points: 0,
        }
    }

    /// Apply `cleared` rows; points use the level in force before the clear
    pub fn apply(self, cleared: u32) -> Self {
        let points = line_clear_points(cleared, self.level);
        let lines = self.lines.saturating_add(cleared);
        let level = level_for_lines(lines);
        Self {
            score: self.score.saturating_add(points),
            lines,
            level,
            drop_interval_ms: drop_interval_ms(level),
            points,
        }
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_clear_points() {
        assert_eq!(line_clear_points(0, 5), 0);
        assert_eq!(line_clear_points(1, 1), 100);
        assert_eq!(line_clear_points(2, 3), 600);
        assert_eq!(line_clear_points(4, 2), 800);
    }

    #[test]
    fn test_level_calculation() {
        assert_eq!(level_for_lines(0), 1);
        assert_eq!(level_for_lines(9), 1);
        assert_eq!(level_for_lines(10), 2);
        assert_eq!(level_for_lines(29), 3);
        assert_eq!(level_for_lines(100), 11);
    }

    #[test]
    fn test_drop_intervals() {
        assert_eq!(drop_interval_ms(1), 1000);
        assert_eq!(drop_interval_ms(2), 900);
        assert_eq!(drop_interval_ms(9), 200);
        assert_eq!(drop_interval_ms(10), 100);
        assert_eq!(drop_interval_ms(11), 100); // Floor at 100
        assert_eq!(drop_interval_ms(u32::MAX), 100);
    }

    #[test]
    fn test_drop_interval_is_monotonic() {
        for level in 1..50 {
            assert!(drop_interval_ms(level + 1) <= drop_interval_ms(level));
        }
    }

    #[test]
    fn test_progress_uses_level_before_clear() {
        // 9 lines at level 1, then a 4-line clear crosses into level 2.
        let progress = Progress {
            lines: 9,
            ..Progress::new()
        };
        let next = progress.apply(4);
        assert_eq!(next.points, 400);
        assert_eq!(next.score, 400);
        assert_eq!(next.lines, 13);
        assert_eq!(next.level, 2);
        assert_eq!(next.drop_interval_ms, 900);
    }

    #[test]
    fn test_progress_without_clear() {
        let next = Progress::new().apply(0);
        assert_eq!(next, Progress::new());
    }
}
