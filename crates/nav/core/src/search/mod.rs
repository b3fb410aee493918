//! Bounded local search: an exact shortest-path pass over the fixed
//! footprint around the agent, rebuilt from scratch every call.
//!
//! The graph is acyclic by construction (see [`footprint`]), so one
//! relaxation sweep in node order yields minimum costs and the first step
//! that achieves them. Targets outside the footprint are approximated by a
//! progress-per-cost heuristic over the perimeter ring.

pub mod footprint;

use crate::config::NavConfig;
use crate::env::{Env, Perception, Scheduler, SenseError};
use crate::grid::{Direction, Position};
use crate::search::footprint::{Footprint, NODE_COUNT};

/// Costs of the most recent relaxation, kept for cheap reachability checks.
///
/// The field is valid for the position it was computed at; queries adjust
/// for agent movement since then and accept one step of staleness.
#[derive(Clone, Debug)]
struct CostField {
    origin: Position,
    cost: [u32; NODE_COUNT],
}

/// Per-agent bounded search engine.
///
/// Stateless per call apart from the persisted [`CostField`]; safe to own
/// one per agent with no cross-talk.
#[derive(Clone, Debug, Default)]
pub struct LocalSearch {
    field: Option<CostField>,
}

impl LocalSearch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the persisted cost field (respawn support).
    pub fn reset(&mut self) {
        self.field = None;
    }

    /// First step of the minimum-cost path to `target` within the
    /// footprint, or the best perimeter step by the progress heuristic when
    /// the target lies outside. `None` when the budget floor is not met,
    /// the target is unreachable per local knowledge, or sensing fails
    /// mid-construction (never propagates an error).
    pub fn best_direction<P, S>(
        &mut self,
        env: &Env<'_, P, S>,
        target: Position,
        config: &NavConfig,
    ) -> Option<Direction>
    where
        P: Perception + ?Sized,
        S: Scheduler + ?Sized,
    {
        if env.scheduler().remaining_budget() < config.min_search_budget {
            return None;
        }
        match self.relax(env.perception(), target, config) {
            Ok(direction) => direction,
            Err(err) => {
                tracing::debug!("bounded search aborted: {err}");
                None
            }
        }
    }

    /// Whether `target` was recorded reachable by the most recent
    /// relaxation. Optimistic: unsensed targets, targets outside the stale
    /// footprint, and the no-prior-search case all report `true`.
    /// Read-only and idempotent.
    pub fn is_reachable<P>(&self, perception: &P, target: Position) -> bool
    where
        P: Perception + ?Sized,
    {
        if !perception.can_sense(target) {
            return true;
        }
        let Some(field) = &self.field else {
            return true;
        };
        let (dx, dy) = field.origin.offset_to(target);
        match Footprint::get().node_at(dx, dy) {
            Some(node) => field.cost[node] < NavConfig::COST_BLOCKED,
            None => true,
        }
    }

    fn relax<P>(
        &mut self,
        perception: &P,
        target: Position,
        config: &NavConfig,
    ) -> Result<Option<Direction>, SenseError>
    where
        P: Perception + ?Sized,
    {
        let fp = Footprint::get();
        let origin = perception.position();

        let mut cost = [NavConfig::COST_BLOCKED; NODE_COUNT];
        let mut first_step: [Option<Direction>; NODE_COUNT] = [None; NODE_COUNT];
        cost[0] = 0;

        for (i, node) in fp.nodes.iter().enumerate().skip(1) {
            let cell = Position::new(origin.x + node.offset.0, origin.y + node.offset.1);
            if node.is_adjacent() {
                // Entry edges also carry occupancy and cooldown rules.
                if !perception.can_step(node.from_center) {
                    continue;
                }
            } else if !perception.can_sense(cell) {
                continue;
            }
            let tile_cost = config.traversal_cost(perception.terrain(cell)?);

            for &pred in &node.preds {
                let p = usize::from(pred);
                let candidate = cost[p].saturating_add(tile_cost);
                // Strict comparison: the first predecessor achieving the
                // minimum wins, which fixes the tie-break.
                if cost[i] > candidate {
                    cost[i] = candidate;
                    first_step[i] = if p == 0 {
                        Some(node.from_center)
                    } else {
                        first_step[p]
                    };
                }
            }
        }

        let (dx, dy) = origin.offset_to(target);
        let direction = match fp.node_at(dx, dy) {
            Some(node) => first_step[node],
            None => {
                // Progress per unit of expected traversal cost, maximized
                // over the perimeter ring. Strictly positive or nothing.
                let initial = f64::from(origin.distance_squared(target)).sqrt();
                let mut best = 0.0;
                let mut answer = None;
                for &b in &fp.boundary {
                    let node = usize::from(b);
                    let (ox, oy) = fp.nodes[node].offset;
                    let cell = Position::new(origin.x + ox, origin.y + oy);
                    let remaining = f64::from(cell.distance_squared(target)).sqrt();
                    let estimate = (initial - remaining) / f64::from(cost[node]);
                    if estimate > best {
                        best = estimate;
                        answer = first_step[node];
                    }
                }
                answer
            }
        };

        self.field = Some(CostField { origin, cost });
        Ok(direction)
    }
}
