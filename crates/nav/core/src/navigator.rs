//! Unified navigation entry point: exact bounded search when the budget
//! affords it, reactive wall-following as the degradation path.

use crate::bug::WallFollower;
use crate::config::NavConfig;
use crate::env::{Env, Perception, Scheduler};
use crate::grid::{Direction, Position};
use crate::search::LocalSearch;

/// Per-agent navigation state: the search engine's persisted cost field and
/// the wall follower. Construct one per agent; instances never share state.
#[derive(Clone, Debug, Default)]
pub struct Navigator {
    config: NavConfig,
    search: LocalSearch,
    follower: WallFollower,
}

impl Navigator {
    pub fn new() -> Self {
        Self::with_config(NavConfig::default())
    }

    pub fn with_config(config: NavConfig) -> Self {
        Self {
            config,
            search: LocalSearch::new(),
            follower: WallFollower::new(),
        }
    }

    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    /// The wall follower's persistent state, exposed for policy-layer
    /// introspection.
    pub fn follower(&self) -> &WallFollower {
        &self.follower
    }

    /// One movement decision toward `target`.
    ///
    /// Movement off cooldown and a distinct target are preconditions; when
    /// either fails the no-movement sentinel comes back without side
    /// effects. Otherwise the bounded search runs if the step budget clears
    /// the gate, and the wall follower covers every case where it yields
    /// nothing. The worst outcome is `Center`: stand still this step.
    pub fn pathfind<P, S>(
        &mut self,
        env: &Env<'_, P, S>,
        source: Position,
        target: Position,
    ) -> Direction
    where
        P: Perception + ?Sized,
        S: Scheduler + ?Sized,
    {
        if !env.perception().is_movement_ready() || source == target {
            return Direction::Center;
        }

        if env.scheduler().remaining_budget() > self.config.search_budget_gate {
            if let Some(direction) = self.search.best_direction(env, target, &self.config) {
                return direction;
            }
            tracing::debug!("bounded search yielded nothing, using fallback");
        }

        self.follower.step(env, source, target, &self.config)
    }

    /// Whether `target` looked reachable to the most recent bounded search,
    /// adjusted for movement since it ran. Optimistic for anything the
    /// search has not seen. Cheap, read-only, idempotent.
    pub fn is_reachable<P, S>(&self, env: &Env<'_, P, S>, target: Position) -> bool
    where
        P: Perception + ?Sized,
        S: Scheduler + ?Sized,
    {
        self.search.is_reachable(env.perception(), target)
    }

    /// Reinitialize all persistent navigation state (e.g. on respawn).
    pub fn reset(&mut self) {
        self.search.reset();
        self.follower.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::MiniWorld;

    #[test]
    fn pathfind_to_self_is_a_no_op() {
        let world = MiniWorld::open(9, 9, Position::new(4, 4));
        let mut nav = Navigator::new();
        let dir = nav.pathfind(&world.env(), Position::new(4, 4), Position::new(4, 4));
        assert_eq!(dir, Direction::Center);
    }

    #[test]
    fn movement_cooldown_stands_still() {
        let mut world = MiniWorld::open(9, 9, Position::new(4, 4));
        world.ready = false;
        let mut nav = Navigator::new();
        let dir = nav.pathfind(&world.env(), Position::new(4, 4), Position::new(8, 4));
        assert_eq!(dir, Direction::Center);
    }

    #[test]
    fn search_wins_when_the_budget_allows() {
        let world = MiniWorld::open(9, 9, Position::new(4, 4));
        let mut nav = Navigator::new();
        let dir = nav.pathfind(&world.env(), Position::new(4, 4), Position::new(4, 0));
        assert_eq!(dir, Direction::South);
        assert!(!nav.follower().is_wall_following());
    }

    #[test]
    fn exhausted_budget_falls_back_to_the_follower() {
        let mut world = MiniWorld::open(9, 9, Position::new(4, 4));
        world.budget = 100;
        let mut nav = Navigator::new();
        let dir = nav.pathfind(&world.env(), Position::new(4, 4), Position::new(4, 0));
        // Greedy fallback picks the same straight-line step here.
        assert_eq!(dir, Direction::South);
    }

    #[test]
    fn decisions_are_deterministic() {
        let mut world = MiniWorld::open(13, 13, Position::new(6, 6));
        for y in 3..=9 {
            world.walls.push(Position::new(7, y));
        }
        let source = Position::new(6, 6);
        let target = Position::new(10, 6);

        let mut first = Navigator::new();
        let mut second = Navigator::new();
        for _ in 0..5 {
            assert_eq!(
                first.pathfind(&world.env(), source, target),
                second.pathfind(&world.env(), source, target)
            );
        }
    }

    #[test]
    fn reset_clears_persistent_state() {
        let mut world = MiniWorld::open(13, 13, Position::new(6, 6));
        for y in 2..=10 {
            world.walls.push(Position::new(5, y));
        }
        let mut nav = Navigator::new();
        nav.pathfind(&world.env(), Position::new(6, 6), Position::new(3, 6));
        assert!(!nav.is_reachable(&world.env(), Position::new(3, 6)));
        nav.reset();
        assert!(nav.is_reachable(&world.env(), Position::new(3, 6)));
    }
}
