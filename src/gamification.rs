//! Experience, levels, ranks and coins.
//!
//! Level is always recomputed from total experience (`xp / 100 + 1`), so a single large award
//! that crosses several hundred-point boundaries produces exactly one rank-up.

use std::fmt;

use crate::models::GamificationState;

pub const XP_PER_LEVEL: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rank {
    Cadet,
    FirstMate,
    Captain,
    Admiral,
}

impl Rank {
    /// Highest threshold wins.
    pub fn of(level: u32) -> Rank {
        if level >= 20 {
            Rank::Admiral
        } else if level >= 10 {
            Rank::Captain
        } else if level >= 5 {
            Rank::FirstMate
        } else {
            Rank::Cadet
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Rank::Cadet => "Cadet",
            Rank::FirstMate => "First Mate",
            Rank::Captain => "Captain",
            Rank::Admiral => "Admiral",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Rank::Cadet => "🦜",
            Rank::FirstMate => "🗡️",
            Rank::Captain => "⚓",
            Rank::Admiral => "👑",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub fn rank_of(level: u32) -> Rank {
    Rank::of(level)
}

pub fn level_for(experience_points: u32) -> u32 {
    experience_points / XP_PER_LEVEL + 1
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankUp {
    pub level: u32,
    pub rank: Rank,
}

impl fmt::Display for RankUp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "You've reached {} level {}!", self.rank, self.level)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Gamification {
    state: GamificationState,
}

impl Gamification {
    pub fn new(state: GamificationState) -> Self {
        Gamification { state }
    }

    pub fn state(&self) -> GamificationState {
        self.state
    }

    pub fn rank(&self) -> Rank {
        Rank::of(self.state.captain_level)
    }

    /// Awards `points` of experience and the same number of coins.
    ///
    /// Returns the new level and rank when the award raised the level. Zero points is a no-op.
    pub fn add_experience(&mut self, points: u32) -> Option<RankUp> {
        if points == 0 {
            return None;
        }

        let new_xp = self.state.experience_points.saturating_add(points);
        let new_level = level_for(new_xp);

        let rank_up = if new_level > self.state.captain_level {
            self.state.captain_level = new_level;
            Some(RankUp {
                level: new_level,
                rank: Rank::of(new_level),
            })
        } else {
            None
        };

        self.state.experience_points = new_xp;
        self.state.pirate_coins = self.state.pirate_coins.saturating_add(points);
        rank_up
    }

    /// Progress through the current level, 0..100.
    pub fn xp_into_level(&self) -> u32 {
        self.state.experience_points % XP_PER_LEVEL
    }

    pub fn xp_to_next_level(&self) -> u32 {
        XP_PER_LEVEL - self.xp_into_level()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn engine(level: u32, xp: u32, coins: u32) -> Gamification {
        Gamification::new(GamificationState {
            captain_level: level,
            experience_points: xp,
            pirate_coins: coins,
        })
    }

    #[test]
    fn test_rank_thresholds() {
        assert_eq!(rank_of(1).label(), "Cadet");
        assert_eq!(rank_of(4).label(), "Cadet");
        assert_eq!(rank_of(5).label(), "First Mate");
        assert_eq!(rank_of(9).label(), "First Mate");
        assert_eq!(rank_of(10).label(), "Captain");
        assert_eq!(rank_of(19).label(), "Captain");
        assert_eq!(rank_of(20).label(), "Admiral");
        assert_eq!(rank_of(100).label(), "Admiral");
    }

    #[test]
    fn test_rank_zero_is_cadet() {
        assert_eq!(rank_of(0), Rank::Cadet);
    }

    #[test]
    fn test_award_without_level_change() {
        let mut g = Gamification::default();
        assert_eq!(g.add_experience(10), None);
        assert_eq!(
            g.state(),
            GamificationState {
                captain_level: 1,
                experience_points: 85,
                pirate_coins: 260,
            }
        );
    }

    #[test]
    fn test_crossing_boundary_ranks_up() {
        let mut g = engine(1, 85, 260);
        let up = g.add_experience(15).unwrap();
        assert_eq!(up.level, 2);
        assert_eq!(up.rank, Rank::Cadet);
        assert_eq!(g.state().captain_level, 2);
        assert_eq!(g.state().experience_points, 100);
        assert_eq!(g.state().pirate_coins, 275);
    }

    #[test]
    fn test_multiple_boundaries_one_rank_up() {
        let mut g = engine(1, 75, 0);
        let up = g.add_experience(1000).unwrap();
        assert_eq!(up.level, 11);
        assert_eq!(up.rank, Rank::Captain);
        assert_eq!(g.add_experience(1), None);
    }

    #[test]
    fn test_zero_points_is_noop() {
        let mut g = Gamification::default();
        assert_eq!(g.add_experience(0), None);
        assert_eq!(g.state(), GamificationState::default());
    }

    #[test]
    fn test_xp_bar() {
        let g = engine(1, 75, 0);
        assert_eq!(g.xp_into_level(), 75);
        assert_eq!(g.xp_to_next_level(), 25);
        let g = engine(3, 200, 0);
        assert_eq!(g.xp_into_level(), 0);
        assert_eq!(g.xp_to_next_level(), 100);
    }

    #[test]
    fn test_rank_up_message() {
        let up = RankUp {
            level: 5,
            rank: Rank::FirstMate,
        };
        assert_eq!(up.to_string(), "You've reached First Mate level 5!");
    }

    proptest! {
        #[test]
        fn prop_level_tracks_xp(awards in proptest::collection::vec(1u32..500, 1..30)) {
            let mut g = Gamification::default();
            for p in awards {
                let before = g.state();
                let up = g.add_experience(p);
                let after = g.state();
                prop_assert_eq!(after.captain_level, after.experience_points / 100 + 1);
                prop_assert_eq!(after.pirate_coins, before.pirate_coins + p);
                prop_assert_eq!(after.experience_points, before.experience_points + p);
                let crossed = after.experience_points / 100 != before.experience_points / 100;
                prop_assert_eq!(up.is_some(), crossed);
            }
        }

        #[test]
        fn prop_never_decreases(awards in proptest::collection::vec(0u32..1000, 0..20)) {
            let mut g = Gamification::default();
            for p in awards {
                let before = g.state();
                g.add_experience(p);
                let after = g.state();
                prop_assert!(after.captain_level >= before.captain_level);
                prop_assert!(after.experience_points >= before.experience_points);
                prop_assert!(after.pirate_coins >= before.pirate_coins);
            }
        }

        #[test]
        fn prop_rank_is_monotonic(level in 0u32..1000) {
            prop_assert!(Rank::of(level) <= Rank::of(level + 1));
        }
    }
}
