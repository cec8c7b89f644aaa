use anyhow::{Result, ensure};
use itertools::Itertools;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::geometry::geo_traits::{CollidesWith, DistanceTo};
use crate::geometry::primitives::{Point, Seg};
use crate::util::{assertions, isqrt};
use crate::{Coord, ECoord, WCoord};

/// Ordered sequence of points joined by segments, optionally closed (last point joined to the first).
///
/// The chain owns its points and hands out referenced [`Seg`]s which borrow them.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LineChain {
    points: Vec<Point>,
    closed: bool,
}

impl LineChain {
    pub fn new(points: Vec<Point>) -> Self {
        Self {
            points,
            closed: false,
        }
    }

    pub fn new_closed(points: Vec<Point>) -> Self {
        Self {
            points,
            closed: true,
        }
    }

    pub fn push(&mut self, p: Point) {
        self.points.push(p);
    }

    /// Moves point `i`, which is shared by every segment touching it
    pub fn set_point(&mut self, i: usize, p: Point) -> Result<()> {
        ensure!(
            i < self.points.len(),
            "point index {i} out of range for chain of {} points",
            self.points.len()
        );
        self.points[i] = p;
        debug_assert!(assertions::chain_segments_consistent(self));
        Ok(())
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Number of segments, the closing segment included for closed chains of at least 3 points
    pub fn segment_count(&self) -> usize {
        match self.points.len() {
            n if self.closed && n >= 3 => n,
            n => n.saturating_sub(1),
        }
    }

    /// Referenced segment `i`, running from point `i` to its successor
    pub fn segment(&self, i: usize) -> Option<Seg<'_>> {
        if i >= self.segment_count() {
            return None;
        }
        let next = (i + 1) % self.points.len();
        Some(Seg::referenced(&self.points[i], &self.points[next], i))
    }

    pub fn segments(&self) -> impl Iterator<Item = Seg<'_>> + Clone + '_ {
        (0..self.segment_count()).filter_map(move |i| self.segment(i))
    }

    /// Index and squared distance of the segment closest to `p`
    pub fn nearest_segment(&self, p: Point) -> Option<(usize, WCoord)> {
        self.segments()
            .map(|s| s.squared_distance(p))
            .enumerate()
            .min_by_key(|(_, sq_d)| *sq_d)
    }

    /// Index of the first segment of the chain colliding with `seg` within `clearance`
    pub fn collide_seg(&self, seg: &Seg, clearance: Coord) -> Option<usize> {
        let hit = self.segments().position(|s| s.collide(seg, clearance));
        if let Some(i) = hit {
            debug!("{seg} collides with segment {i} of chain (clearance: {clearance})");
        }
        hit
    }

    /// First pair of segments `(i, j)`, `i < j`, that touch anywhere other than at the point they share as neighbours
    pub fn self_intersecting(&self) -> Option<(usize, usize)> {
        let n_segs = self.segment_count();
        self.segments()
            .enumerate()
            .tuple_combinations()
            .find(|((i, s1), (j, s2))| {
                let adjacent = *j == i + 1 || (self.closed && n_segs >= 3 && *i == 0 && *j == n_segs - 1);
                match adjacent {
                    true => adjacent_segments_overlap(s1, s2),
                    false => s1.intersects(s2),
                }
            })
            .map(|((i, _), (j, _))| (i, j))
    }

    /// Sum of the (rounded) segment lengths
    pub fn length(&self) -> ECoord {
        self.segments().map(|s| s.length()).sum()
    }
}

/// Neighbouring segments share one point; they overlap if any other endpoint lies on the opposite segment
fn adjacent_segments_overlap(s1: &Seg, s2: &Seg) -> bool {
    let shared = match s1.b() == s2.a() {
        true => s1.b(),
        false => s1.a(),
    };
    let far_end_on = |s: &Seg, other: &Seg| {
        [s.a(), s.b()]
            .into_iter()
            .any(|p| p != shared && other.contains(p))
    };
    far_end_on(s1, s2) || far_end_on(s2, s1)
}

impl DistanceTo<Point> for LineChain {
    /// Distance to the closest segment. A single-point chain measures to its point, an empty chain is infinitely far.
    fn distance_to(&self, other: &Point) -> ECoord {
        isqrt(self.sq_distance_to(other))
    }

    fn sq_distance_to(&self, other: &Point) -> WCoord {
        match (self.nearest_segment(*other), self.points.first()) {
            (Some((_, sq_d)), _) => sq_d,
            (None, Some(p)) => p.sq_distance(other),
            (None, None) => WCoord::MAX,
        }
    }
}

impl<'b> CollidesWith<Seg<'b>> for LineChain {
    fn collides_with(&self, other: &Seg<'b>) -> bool {
        self.collide_seg(other, 0).is_some()
    }
}
