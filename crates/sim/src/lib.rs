//! Deterministic grid world implementing the navigation oracles.
//!
//! [`GridWorld`] is a tiny simulation backend for integration tests and
//! demos: a rectangular terrain grid, a set of occupied cells, a single
//! tracked agent, and a round counter. Maps load from ASCII art via
//! [`GridWorld::from_ascii`]; [`GridWorld::apply`] advances the agent one
//! step and one round, which is enough to drive multi-step navigation
//! scenarios end to end.

use std::collections::HashSet;

use nav_core::{Direction, Env, MapDimensions, Perception, Position, Scheduler, SenseError, TerrainKind};
use thiserror::Error;

/// Vision radius squared matching the search footprint.
pub const DEFAULT_VISION_SQ: u32 = 20;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MapError {
    #[error("map has no rows or no columns")]
    Empty,
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },
    #[error("unknown map glyph '{glyph}'")]
    UnknownGlyph { glyph: char },
    #[error("map declares no agent cell ('@')")]
    MissingAgent,
    #[error("map declares more than one agent cell ('@')")]
    DuplicateAgent,
}

/// In-memory world with y growing north. Rows in the ASCII source read
/// top-down, so the first line is the northernmost row.
///
/// Glyphs: `.` floor, `#` wall, `~` water, `%` dam, `o` occupied floor,
/// `@` the agent (standing on floor).
#[derive(Clone, Debug)]
pub struct GridWorld {
    dims: MapDimensions,
    terrain: Vec<TerrainKind>,
    occupied: HashSet<Position>,
    agent: Position,
    round: u64,
    budget: u32,
    movement_ready: bool,
    vision_sq: u32,
}

impl GridWorld {
    pub fn from_ascii(art: &str) -> Result<Self, MapError> {
        let rows: Vec<&str> = art.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.chars().count());
        if height == 0 || width == 0 {
            return Err(MapError::Empty);
        }

        let mut terrain = vec![TerrainKind::Floor; width * height];
        let mut occupied = HashSet::new();
        let mut agent = None;
        for (i, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(MapError::RaggedRow {
                    row: i,
                    found,
                    expected: width,
                });
            }
            // First source line is the top of the map.
            let y = (height - 1 - i) as i32;
            for (x, glyph) in row.chars().enumerate() {
                let position = Position::new(x as i32, y);
                let kind = match glyph {
                    '.' => TerrainKind::Floor,
                    '#' => TerrainKind::Wall,
                    '~' => TerrainKind::Water,
                    '%' => TerrainKind::Dam,
                    'o' => {
                        occupied.insert(position);
                        TerrainKind::Floor
                    }
                    '@' => {
                        if agent.replace(position).is_some() {
                            return Err(MapError::DuplicateAgent);
                        }
                        TerrainKind::Floor
                    }
                    _ => return Err(MapError::UnknownGlyph { glyph }),
                };
                terrain[i * width + x] = kind;
            }
        }

        let agent = agent.ok_or(MapError::MissingAgent)?;
        Ok(Self {
            dims: MapDimensions::new(width as u32, height as u32),
            terrain,
            occupied,
            agent,
            round: 0,
            budget: 10_000,
            movement_ready: true,
            vision_sq: DEFAULT_VISION_SQ,
        })
    }

    pub fn agent(&self) -> Position {
        self.agent
    }

    pub fn round(&self) -> u64 {
        self.round
    }

    pub fn set_budget(&mut self, budget: u32) {
        self.budget = budget;
    }

    pub fn set_movement_ready(&mut self, ready: bool) {
        self.movement_ready = ready;
    }

    pub fn env(&self) -> Env<'_, GridWorld, GridWorld> {
        Env::new(self, self)
    }

    /// Advance one round, moving the agent if `direction` is a legal step.
    /// Returns whether the agent actually moved.
    pub fn apply(&mut self, direction: Direction) -> bool {
        self.round += 1;
        let moved = self.can_step(direction);
        if moved {
            self.agent = self.agent.step(direction);
        }
        moved
    }

    fn terrain_at(&self, position: Position) -> Option<TerrainKind> {
        if !self.dims.contains(position) {
            return None;
        }
        let width = self.dims.width as usize;
        let row = (self.dims.height as i32 - 1 - position.y) as usize;
        Some(self.terrain[row * width + position.x as usize])
    }
}

impl Perception for GridWorld {
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
        if !self.dims.contains(position) {
            return Err(SenseError::OffMap { position });
        }
        if !self.can_sense(position) {
            return Err(SenseError::OutOfRange { position });
        }
        match self.terrain_at(position) {
            Some(kind) => Ok(kind),
            None => Err(SenseError::OffMap { position }),
        }
    }

    fn is_occupied(&self, position: Position) -> Result<bool, SenseError> {
        if !self.can_sense(position) {
            return Err(SenseError::OutOfRange { position });
        }
        Ok(self.occupied.contains(&position))
    }

    fn can_step(&self, direction: Direction) -> bool {
        if direction == Direction::Center || !self.movement_ready {
            return false;
        }
        let cell = self.agent.step(direction);
        self.terrain_at(cell).is_some_and(TerrainKind::is_passable)
            && !self.occupied.contains(&cell)
    }

    fn is_movement_ready(&self) -> bool {
        self.movement_ready
    }
}

impl Scheduler for GridWorld {
    fn remaining_budget(&self) -> u32 {
        self.budget
    }

    fn step_parity(&self) -> u64 {
        self.round
    }
}
