//! Short-horizon navigation core for autonomous grid agents.
//!
//! Every discrete step, an agent picks one movement direction toward a
//! target under a per-step compute ceiling and partial map knowledge. Two
//! engines compose in fixed precedence: a bounded local search
//! ([`search::LocalSearch`]) that rebuilds an exact shortest-path field
//! over a fixed footprint around the agent, and a reactive wall follower
//! ([`bug::WallFollower`]) that takes over whenever the search is
//! unaffordable or comes up empty. [`Navigator`] owns both and is the
//! entry point; world access goes through the read-only oracles in
//! [`env`].
pub mod bug;
pub mod config;
pub mod env;
pub mod grid;
pub mod navigator;
pub mod search;

pub use bug::{Rotation, WallFollower};
pub use config::NavConfig;
pub use env::{Env, MapDimensions, NavEnv, Perception, Scheduler, SenseError, TerrainKind};
pub use grid::{Direction, Position, travel_distance};
pub use navigator::Navigator;
pub use search::LocalSearch;

#[cfg(test)]
pub(crate) mod testutil;
