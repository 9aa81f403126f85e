use crate::consts;
use std::fmt;
use std::time::Duration;

/// The player's current level.  Levels start at 1 and are derived entirely
/// from the score.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub(crate) struct Level(u32);

impl Level {
    pub(crate) const FIRST: Level = Level(1);

    pub(crate) fn for_score(score: u32) -> Level {
        Level(score / consts::POINTS_PER_LEVEL + 1)
    }

    #[cfg(test)]
    pub(crate) fn get(self) -> u32 {
        self.0
    }

    /// Time between ticks at this level.  Each level past the first shaves
    /// [`TICK_PERIOD_STEP`][consts::TICK_PERIOD_STEP] off of
    /// [`BASE_TICK_PERIOD`][consts::BASE_TICK_PERIOD], down to a floor of
    /// [`MIN_TICK_PERIOD`][consts::MIN_TICK_PERIOD].
    pub(crate) fn tick_period(self) -> Duration {
        let speedup = consts::TICK_PERIOD_STEP.saturating_mul(self.0.saturating_sub(1));
        consts::BASE_TICK_PERIOD
            .saturating_sub(speedup)
            .max(consts::MIN_TICK_PERIOD)
    }

    /// Return the number of points earned by eating a food worth `base`
    /// points at this level
    pub(crate) fn points(self, base: u32) -> u32 {
        base.saturating_mul(self.0)
    }
}

impl Default for Level {
    fn default() -> Level {
        Level::FIRST
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 1)]
    #[case(10, 1)]
    #[case(49, 1)]
    #[case(50, 2)]
    #[case(99, 2)]
    #[case(100, 3)]
    #[case(1234, 25)]
    fn test_for_score(#[case] score: u32, #[case] level: u32) {
        assert_eq!(Level::for_score(score).get(), level);
    }

    #[rstest]
    #[case(1, 220)]
    #[case(2, 205)]
    #[case(5, 160)]
    #[case(11, 70)]
    #[case(12, 60)]
    #[case(13, 60)]
    #[case(500, 60)]
    #[case(u32::MAX, 60)]
    fn test_tick_period(#[case] level: u32, #[case] millis: u64) {
        assert_eq!(Level(level).tick_period(), Duration::from_millis(millis));
    }

    #[test]
    fn points_scale_with_level() {
        assert_eq!(Level::FIRST.points(consts::FOOD_POINTS), 10);
        assert_eq!(Level(3).points(consts::FOOD_POINTS), 30);
        assert_eq!(Level(3).points(consts::BONUS_POINTS), 150);
    }
}
