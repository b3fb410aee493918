use crate::env::{MapDimensions, SenseError, TerrainKind};
use crate::grid::{Direction, Position};

/// Per-agent sensed view of the world.
///
/// Terrain and occupancy answers are authoritative only where [`can_sense`]
/// holds; queries outside that radius return [`SenseError::OutOfRange`].
/// Callers that need an answer for unsensed cells decide their own default
/// (the navigation core assumes unknown cells are traversable).
///
/// [`can_sense`]: Perception::can_sense
pub trait Perception {
    /// The agent's current cell.
    fn position(&self) -> Position;

    /// World bounds; `dimensions().contains(p)` is the on-map test.
    fn dimensions(&self) -> MapDimensions;

    /// Whether `position` is within the current sensing radius.
    fn can_sense(&self, position: Position) -> bool;

    /// Terrain at a sensed cell.
    fn terrain(&self, position: Position) -> Result<TerrainKind, SenseError>;

    /// Whether another agent occupies a sensed cell.
    fn is_occupied(&self, position: Position) -> Result<bool, SenseError>;

    /// Whether a single step in `direction` is currently legal: adjacent
    /// cell on the map, passable, unoccupied, and movement off cooldown.
    /// Occupancy and cooldown rules are owned by the world, not this core.
    fn can_step(&self, direction: Direction) -> bool;

    /// Whether the agent may move at all this step.
    fn is_movement_ready(&self) -> bool;
}
