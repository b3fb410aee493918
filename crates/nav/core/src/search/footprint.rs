//! Static topology of the bounded search graph.
//!
//! The footprint is every offset within squared radius 20 of the agent (a
//! radius-4 diamond, 69 cells including the agent's own). Nodes are ordered
//! center-first, then by ascending `(r², packed index)`; a node's
//! predecessors are its 8-neighbors that appear earlier in that order. The
//! result is a DAG relaxed in a single pass, no convergence loop.
//!
//! The table is generated once at startup. The packed index
//! `(dx + 6) * 13 + (dy + 6)` exists only to pin the historical tie-break
//! order; it is not a storage layout.

use std::sync::LazyLock;

use arrayvec::ArrayVec;

use crate::config::NavConfig;
use crate::grid::{Direction, Position};

/// Cells in the footprint, the agent's own included.
pub const NODE_COUNT: usize = 69;

/// Chebyshev extent of the footprint.
pub const RADIUS: i32 = 4;

const SIDE: usize = (2 * RADIUS + 1) as usize;

/// One offset cell of the search graph.
#[derive(Clone, Debug)]
pub struct Node {
    pub offset: (i32, i32),
    /// First step from the agent's cell when this node is entered directly;
    /// exact only for the eight adjacent nodes, where it is the edge used.
    pub from_center: Direction,
    /// Indices of earlier-ordered neighbors, ascending. For adjacent nodes
    /// the center (index 0) comes first.
    pub preds: ArrayVec<u8, 8>,
    /// Whether this node sits on the perimeter ring used by the
    /// out-of-footprint progress heuristic.
    pub is_boundary: bool,
}

impl Node {
    /// Adjacent nodes are entered straight from the agent's cell and are
    /// gated on step legality rather than sensing alone.
    pub fn is_adjacent(&self) -> bool {
        self.offset.0.abs().max(self.offset.1.abs()) == 1
    }
}

/// The generated topology plus lookup structures.
pub struct Footprint {
    pub nodes: Vec<Node>,
    /// Boundary node indices in ascending packed order; the heuristic's
    /// tie-break depends on this sequence.
    pub boundary: Vec<u8>,
    index: [[Option<u8>; SIDE]; SIDE],
}

impl Footprint {
    pub fn get() -> &'static Footprint {
        static TABLE: LazyLock<Footprint> = LazyLock::new(Footprint::generate);
        &TABLE
    }

    /// Node index for an offset from the agent, if inside the footprint.
    pub fn node_at(&self, dx: i32, dy: i32) -> Option<usize> {
        if dx.abs() > RADIUS || dy.abs() > RADIUS {
            return None;
        }
        self.index[(dx + RADIUS) as usize][(dy + RADIUS) as usize].map(usize::from)
    }

    fn generate() -> Footprint {
        let packed = |dx: i32, dy: i32| (dx + 6) * 13 + (dy + 6);
        let radius_sq = |dx: i32, dy: i32| (dx * dx + dy * dy) as u32;

        let mut offsets = Vec::with_capacity(NODE_COUNT);
        for dx in -RADIUS..=RADIUS {
            for dy in -RADIUS..=RADIUS {
                if radius_sq(dx, dy) <= NavConfig::FOOTPRINT_RADIUS_SQ {
                    offsets.push((dx, dy));
                }
            }
        }
        offsets.sort_by_key(|&(dx, dy)| (radius_sq(dx, dy), packed(dx, dy)));
        debug_assert_eq!(offsets.len(), NODE_COUNT);

        let mut index = [[None; SIDE]; SIDE];
        for (i, &(dx, dy)) in offsets.iter().enumerate() {
            index[(dx + RADIUS) as usize][(dy + RADIUS) as usize] = Some(i as u8);
        }

        let is_boundary = |dx: i32, dy: i32| {
            dx.abs().max(dy.abs()) == RADIUS || (dx.abs() == 3 && dy.abs() == 3)
        };

        let mut nodes = Vec::with_capacity(NODE_COUNT);
        for (i, &(dx, dy)) in offsets.iter().enumerate() {
            let mut preds: ArrayVec<u8, 8> = ArrayVec::new();
            for dir in Direction::COMPASS {
                let (sx, sy) = dir.delta();
                let (nx, ny) = (dx + sx, dy + sy);
                if nx.abs() > RADIUS || ny.abs() > RADIUS {
                    continue;
                }
                if let Some(n) = index[(nx + RADIUS) as usize][(ny + RADIUS) as usize]
                    && usize::from(n) < i
                {
                    preds.push(n);
                }
            }
            preds.sort_unstable();
            nodes.push(Node {
                offset: (dx, dy),
                from_center: Position::ORIGIN.direction_to(Position::new(dx, dy)),
                preds,
                is_boundary: is_boundary(dx, dy),
            });
        }

        let mut boundary: Vec<u8> = nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.is_boundary)
            .map(|(i, _)| i as u8)
            .collect();
        boundary.sort_by_key(|&i| {
            let (dx, dy) = nodes[usize::from(i)].offset;
            packed(dx, dy)
        });

        Footprint {
            nodes,
            boundary,
            index,
        }
    }
}
