use serde::{Deserialize, Serialize};

use pcb_seg::geometry::primitives::Point;
use pcb_seg::{Coord, ECoord, WCoord};

use crate::config::ProbeConfig;

/// Results of a probe run
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ProbeReport {
    pub name: String,
    pub config: ProbeConfig,
    pub n_colliding: usize,
    pub results: Vec<QueryResult>,
}

/// Everything the kernel reports about one pair of segments `a` and `b`
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct QueryResult {
    pub id: usize,
    pub intersection: Option<Point>,
    pub line_intersection: Option<Point>,
    pub sq_distance: WCoord,
    pub distance: ECoord,
    pub clearance: Coord,
    pub collide: bool,
    /// Where `a` comes closest to `b`, only set for colliding pairs
    pub violation_at: Option<Point>,
    pub collinear: bool,
    /// Side of `b`'s endpoints relative to `a`: -1 (left), 0 (on the line) or 1 (right)
    pub side_of_b: (i32, i32),
}
