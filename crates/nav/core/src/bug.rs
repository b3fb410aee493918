//! Reactive fallback navigation: greedy stepping with committed
//! wall-following when the direct line is blocked.
//!
//! The follower owns the only cross-step state in the navigation core. It
//! greedily minimizes the travel-distance heuristic while the straight-line
//! neighbor is clear, and otherwise commits to circumnavigating the
//! obstacle in one rotational sense until progress beats the distance
//! recorded when following began, or a step cap forces an exit.

use crate::config::NavConfig;
use crate::env::{Env, Perception, Scheduler};
use crate::grid::{Direction, Position, travel_distance};
use crate::search::footprint::RADIUS;

/// Rotational sense committed to while circumnavigating an obstacle.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Rotation {
    Left,
    Right,
}

impl Rotation {
    pub fn flipped(self) -> Rotation {
        match self {
            Rotation::Left => Rotation::Right,
            Rotation::Right => Rotation::Left,
        }
    }
}

/// What blocked a candidate step during the sweep.
///
/// Agent blocks are transient, so they must not update the committed
/// direction; otherwise the follower circles obstacles that were never
/// there.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Blocker {
    Terrain,
    Agent,
}

/// Distance sentinel while not wall-following.
const UNBLOCKED: u32 = u32::MAX;

/// Stateful wall follower, one per agent.
///
/// State persists across steps and is cleared only by the exit conditions
/// (progress past the recorded distance with a clear line, or the step cap)
/// or an explicit [`reset`](WallFollower::reset).
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WallFollower {
    sense: Option<Rotation>,
    last_step: Direction,
    blocked_at: u32,
    steps: u32,
}

impl WallFollower {
    pub fn new() -> Self {
        Self {
            sense: None,
            last_step: Direction::Center,
            blocked_at: UNBLOCKED,
            steps: 0,
        }
    }

    pub fn is_wall_following(&self) -> bool {
        self.sense.is_some()
    }

    /// Current rotational sense, `None` while not wall-following.
    pub fn sense(&self) -> Option<Rotation> {
        self.sense
    }

    /// Direction committed on the previous wall-following step, `Center`
    /// when uncommitted.
    pub fn last_step(&self) -> Direction {
        self.last_step
    }

    /// Steps taken since wall-following began.
    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Clear all persistent state (respawn support).
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// One fallback navigation decision. Never returns a direction that
    /// leaves the map; `Center` means fully boxed in.
    pub fn step<P, S>(
        &mut self,
        env: &Env<'_, P, S>,
        source: Position,
        target: Position,
        config: &NavConfig,
    ) -> Direction
    where
        P: Perception + ?Sized,
        S: Scheduler + ?Sized,
    {
        if source == target {
            return Direction::Center;
        }

        let perception = env.perception();
        let direct = source.direction_to(target);
        let direct_passable = passable_or_unknown(perception, source.step(direct));

        // Greedy direct regime: step wherever the ranking heuristic says,
        // until the straight line is blocked by terrain.
        if direct_passable && self.sense.is_none() {
            let mut best = Direction::Center;
            let mut best_dist = u32::MAX;
            for dir in Direction::ALL {
                if dir != Direction::Center && !perception.can_step(dir) {
                    continue;
                }
                let dist = travel_distance(source.step(dir), target);
                if dist < best_dist {
                    best_dist = dist;
                    best = dir;
                }
            }
            return best;
        }

        if self.sense.is_none() {
            let sense = choose_sense(env, source, target, config);
            tracing::debug!("wall-following begins, sense {sense}");
            self.sense = Some(sense);
            self.blocked_at = travel_distance(source, target);
        }
        self.steps += 1;

        // Sweep candidates rotating away from the obstacle. A candidate off
        // the map flips the sense and restarts the sweep once; a second
        // boundary hit in the same call means standing still.
        let mut restarted = false;
        'sweep: loop {
            let Some(sense) = self.sense else {
                return Direction::Center;
            };
            let mut candidate = match sense {
                Rotation::Left if self.last_step != Direction::Center => {
                    self.last_step.rotate_right()
                }
                Rotation::Left => direct.rotate_left(),
                Rotation::Right if self.last_step != Direction::Center => {
                    self.last_step.rotate_left()
                }
                Rotation::Right => direct.rotate_right(),
            };
            let mut last_block: Option<Blocker> = None;

            for i in (0..8).rev() {
                let cell = source.step(candidate);
                if !perception.dimensions().contains(cell) {
                    self.blocked_at = travel_distance(source, target);
                    self.sense = Some(sense.flipped());
                    self.last_step = Direction::Center;
                    self.steps = 0;
                    if restarted {
                        return Direction::Center;
                    }
                    restarted = true;
                    tracing::debug!("map edge at {cell}, sense flipped to {}", sense.flipped());
                    continue 'sweep;
                }
                if perception.can_step(candidate) {
                    if last_block != Some(Blocker::Agent) {
                        self.last_step = candidate;
                    }
                    if (travel_distance(source, target) < self.blocked_at && direct_passable)
                        || self.steps > config.wall_turn_cap
                    {
                        tracing::debug!(
                            "wall-following ends after {} steps",
                            self.steps
                        );
                        self.clear();
                    }
                    return candidate;
                }
                last_block = Some(if perception.is_occupied(cell).unwrap_or(false) {
                    Blocker::Agent
                } else {
                    Blocker::Terrain
                });

                // First failure turns once more away from the obstacle,
                // then the sweep proceeds back toward it.
                candidate = match (sense, i == 7) {
                    (Rotation::Left, true) => candidate.rotate_right(),
                    (Rotation::Left, false) => candidate.rotate_left(),
                    (Rotation::Right, true) => candidate.rotate_left(),
                    (Rotation::Right, false) => candidate.rotate_right(),
                };
            }
            return Direction::Center;
        }
    }

    fn clear(&mut self) {
        self.sense = None;
        self.last_step = Direction::Center;
        self.blocked_at = UNBLOCKED;
        self.steps = 0;
    }
}

impl Default for WallFollower {
    fn default() -> Self {
        Self::new()
    }
}

/// Pick the initial rotational sense from nearby blocking cells.
///
/// Known-impassable cells on the outer scan ring are classified left or
/// right of the source-to-target line by the cross product sign; the side
/// whose blocker ranks closer to the target wins. No blockers on either
/// side falls back to step parity, one empty side is followed as the open
/// side.
fn choose_sense<P, S>(
    env: &Env<'_, P, S>,
    source: Position,
    target: Position,
    config: &NavConfig,
) -> Rotation
where
    P: Perception + ?Sized,
    S: Scheduler + ?Sized,
{
    let perception = env.perception();
    let mut left_best: Option<u32> = None;
    let mut right_best: Option<u32> = None;

    for dx in -RADIUS..=RADIUS {
        for dy in -RADIUS..=RADIUS {
            let r_sq = (dx * dx + dy * dy) as u32;
            if r_sq < config.scan_inner_radius_sq || r_sq > NavConfig::FOOTPRINT_RADIUS_SQ {
                continue;
            }
            let cell = Position::new(source.x + dx, source.y + dy);
            if !perception.can_sense(cell) {
                continue;
            }
            let Ok(terrain) = perception.terrain(cell) else {
                continue;
            };
            if terrain.is_passable() {
                continue;
            }

            let dist = travel_distance(cell, target);
            let cross = i64::from(target.x - source.x) * i64::from(cell.y - source.y)
                - i64::from(target.y - source.y) * i64::from(cell.x - source.x);
            if cross > 0 {
                if left_best.is_none_or(|d| dist < d) {
                    left_best = Some(dist);
                }
            } else if cross < 0 && right_best.is_none_or(|d| dist < d) {
                right_best = Some(dist);
            }
        }
    }

    match (left_best, right_best) {
        (Some(left), Some(right)) => {
            if left < right {
                Rotation::Left
            } else {
                Rotation::Right
            }
        }
        (None, None) => {
            if env.scheduler().step_parity() % 2 == 0 {
                Rotation::Left
            } else {
                Rotation::Right
            }
        }
        (None, Some(_)) => Rotation::Left,
        (Some(_), None) => Rotation::Right,
    }
}

fn passable_or_unknown<P>(perception: &P, cell: Position) -> bool
where
    P: Perception + ?Sized,
{
    // Unknown cells count as traversable; the follower only commits to a
    // wall it has actually sensed.
    match perception.terrain(cell) {
        Ok(terrain) => terrain.is_passable(),
        Err(_) => true,
    }
}
