use crate::env::TerrainKind;

/// Navigation policy constants and tunable parameters.
///
/// The defaults are empirically tuned; downstream behavior is sensitive to
/// them, so change with care.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavConfig {
    /// Budget above which `pathfind` attempts the bounded local search.
    pub search_budget_gate: u32,
    /// Budget floor below which the search itself refuses to start.
    pub min_search_budget: u32,
    /// Consecutive wall-following steps after which the follower force-exits.
    pub wall_turn_cap: u32,
    /// Inner squared radius of the obstacle scan ring; blockers closer than
    /// this are ignored when picking a wall-following sense.
    pub scan_inner_radius_sq: u32,
    /// Traversal cost of a water cell.
    pub water_cost: u32,
    /// Traversal cost of a plain floor cell.
    pub floor_cost: u32,
}

impl NavConfig {
    // ===== structural constants =====
    /// Squared radius of the search footprint (and of sensing).
    pub const FOOTPRINT_RADIUS_SQ: u32 = 20;
    /// Cost sentinel for impassable or unreached cells.
    pub const COST_BLOCKED: u32 = 1_000_000;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_SEARCH_BUDGET_GATE: u32 = 5_000;
    pub const DEFAULT_MIN_SEARCH_BUDGET: u32 = 4_900;
    pub const DEFAULT_WALL_TURN_CAP: u32 = 20;
    pub const DEFAULT_SCAN_INNER_RADIUS_SQ: u32 = 13;
    pub const DEFAULT_WATER_COST: u32 = 4;
    pub const DEFAULT_FLOOR_COST: u32 = 1;

    pub fn new() -> Self {
        Self {
            search_budget_gate: Self::DEFAULT_SEARCH_BUDGET_GATE,
            min_search_budget: Self::DEFAULT_MIN_SEARCH_BUDGET,
            wall_turn_cap: Self::DEFAULT_WALL_TURN_CAP,
            scan_inner_radius_sq: Self::DEFAULT_SCAN_INNER_RADIUS_SQ,
            water_cost: Self::DEFAULT_WATER_COST,
            floor_cost: Self::DEFAULT_FLOOR_COST,
        }
    }

    pub fn with_wall_turn_cap(mut self, cap: u32) -> Self {
        self.wall_turn_cap = cap;
        self
    }

    pub fn with_search_budget_gate(mut self, gate: u32) -> Self {
        self.search_budget_gate = gate;
        self
    }

    /// Scalar traversal cost of a terrain class.
    pub fn traversal_cost(&self, terrain: TerrainKind) -> u32 {
        match terrain {
            TerrainKind::Floor => self.floor_cost,
            TerrainKind::Water => self.water_cost,
            TerrainKind::Wall | TerrainKind::Dam => Self::COST_BLOCKED,
        }
    }
}

impl Default for NavConfig {
    fn default() -> Self {
        Self::new()
    }
}
