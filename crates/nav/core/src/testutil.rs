//! Minimal in-memory world for unit tests.

use crate::env::{Env, MapDimensions, Perception, Scheduler, SenseError, TerrainKind};
use crate::grid::{Direction, Position};

/// Small configurable grid implementing both oracles.
pub(crate) struct MiniWorld {
    pub dims: MapDimensions,
    pub agent: Position,
    pub walls: Vec<Position>,
    pub water: Vec<Position>,
    pub occupied: Vec<Position>,
    pub budget: u32,
    pub parity: u64,
    pub ready: bool,
    pub vision_sq: u32,
    /// Simulate a sensing fault: every terrain query fails.
    pub faulty_sensors: bool,
}

impl MiniWorld {
    pub fn open(width: u32, height: u32, agent: Position) -> Self {
        Self {
            dims: MapDimensions::new(width, height),
            agent,
            walls: Vec::new(),
            water: Vec::new(),
            occupied: Vec::new(),
            budget: 10_000,
            parity: 0,
            ready: true,
            vision_sq: 20,
            faulty_sensors: false,
        }
    }

    pub fn env(&self) -> Env<'_, MiniWorld, MiniWorld> {
        Env::new(self, self)
    }
}

impl Perception for MiniWorld {
    fn position(&self) -> Position {
        self.agent
    }

    fn dimensions(&self) -> MapDimensions {
        self.dims
    }

    fn can_sense(&self, position: Position) -> bool {
        self.dims.contains(position) && self.agent.distance_squared(position) <= self.vision_sq
    }

    fn terrain(&self, position: Position) -> Result<TerrainKind, SenseError> {
        if self.faulty_sensors {
            return Err(SenseError::OutOfRange { position });
        }
        if !self.dims.contains(position) {
            return Err(SenseError::OffMap { position });
        }
        if !self.can_sense(position) {
            return Err(SenseError::OutOfRange { position });
        }
        if self.walls.contains(&position) {
            Ok(TerrainKind::Wall)
        } else if self.water.contains(&position) {
            Ok(TerrainKind::Water)
        } else {
            Ok(TerrainKind::Floor)
        }
    }

    fn is_occupied(&self, position: Position) -> Result<bool, SenseError> {
        if !self.can_sense(position) {
            return Err(SenseError::OutOfRange { position });
        }
        Ok(self.occupied.contains(&position))
    }

    fn can_step(&self, direction: Direction) -> bool {
        if direction == Direction::Center || !self.ready {
            return false;
        }
        let cell = self.agent.step(direction);
        self.dims.contains(cell)
            && !self.walls.contains(&cell)
            && !self.occupied.contains(&cell)
    }

    fn is_movement_ready(&self) -> bool {
        self.ready
    }
}

impl Scheduler for MiniWorld {
    fn remaining_budget(&self) -> u32 {
        self.budget
    }

    fn step_parity(&self) -> u64 {
        self.parity
    }
}
