//! Traits describing the agent's read-only view of the world.
//!
//! The navigation core never owns terrain, occupancy, or the step budget; it
//! queries them through these oracles. The [`Env`] aggregate bundles the two
//! collaborators so `pathfind` can be handed a single handle without hard
//! coupling to concrete implementations.
mod error;
mod map;
mod perception;
mod scheduler;

pub use error::SenseError;
pub use map::{MapDimensions, TerrainKind};
pub use perception::Perception;
pub use scheduler::Scheduler;

/// Aggregates the read-only oracles required by the navigation core.
#[derive(Clone, Copy, Debug)]
pub struct Env<'a, P, S>
where
    P: Perception + ?Sized,
    S: Scheduler + ?Sized,
{
    perception: &'a P,
    scheduler: &'a S,
}

/// Trait-object form used at the `pathfind` call boundary.
pub type NavEnv<'a> = Env<'a, dyn Perception + 'a, dyn Scheduler + 'a>;

impl<'a, P, S> Env<'a, P, S>
where
    P: Perception + ?Sized,
    S: Scheduler + ?Sized,
{
    pub fn new(perception: &'a P, scheduler: &'a S) -> Self {
        Self {
            perception,
            scheduler,
        }
    }

    pub fn perception(&self) -> &'a P {
        self.perception
    }

    pub fn scheduler(&self) -> &'a S {
        self.scheduler
    }
}
