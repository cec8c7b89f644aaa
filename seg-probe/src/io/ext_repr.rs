use serde::{Deserialize, Serialize};

use pcb_seg::Coord;
use pcb_seg::geometry::primitives::{Point, Seg};

/// External representation of a batch of segment queries
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtQueryBatch {
    pub name: String,
    pub queries: Vec<ExtQuery>,
}

/// A pair of segments to evaluate against each other
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtQuery {
    pub id: usize,
    pub a: ExtSeg,
    pub b: ExtSeg,
    /// Overrides the configured default clearance
    #[serde(default)]
    pub clearance: Option<Coord>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtSeg {
    pub start: (Coord, Coord),
    pub end: (Coord, Coord),
}

impl ExtSeg {
    pub fn to_seg(self) -> Seg<'static> {
        Seg::new(Point::from(self.start), Point::from(self.end))
    }
}

impl From<Seg<'_>> for ExtSeg {
    fn from(s: Seg<'_>) -> Self {
        ExtSeg {
            start: s.a().into(),
            end: s.b().into(),
        }
    }
}
