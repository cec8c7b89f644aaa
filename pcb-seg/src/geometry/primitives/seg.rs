use std::fmt::{Display, Formatter};

use log::trace;

use crate::geometry::geo_enums::Side;
use crate::geometry::geo_traits::{CollidesWith, DistanceTo};
use crate::geometry::primitives::Point;
use crate::util::{assertions, floor_div_sqrt, isqrt, rescale, to_coord, to_coord_saturating};
use crate::{Coord, ECoord, WCoord};

/// Directed line segment from `a` to `b` between two integer [`Point`]s.
///
/// A segment is either *local*, owning copies of its endpoints, or *referenced*, borrowing its
/// endpoints from an ordered point sequence (e.g. a [`LineChain`](super::LineChain)) together with
/// the position of the edge in that sequence. The borrow ties a referenced segment to the lifetime
/// of its sequence. Copying a segment keeps its mode: a copy of a referenced segment still aliases
/// the same points.
///
/// None of the operations fail, and none overflow for endpoints anywhere in the [`Coord`] range:
/// differences are taken in [`ECoord`], their products in [`WCoord`]. Zero-length segments behave
/// as the point they collapse to, parallel lines have no intersection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Seg<'a> {
    ends: Ends<'a>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Ends<'a> {
    Local {
        a: Point,
        b: Point,
    },
    Referenced {
        a: &'a Point,
        b: &'a Point,
        index: usize,
    },
}

/// Cross products of the two direction vectors `e = B - A`, `f = D - C` and the offset `ac = C - A`.
/// The lines meet at `A + e * p / d` = `C + f * q / d`.
struct LineCrossing {
    d: WCoord,
    p: WCoord,
    q: WCoord,
}

impl LineCrossing {
    fn within_both(&self) -> bool {
        within_unit(self.p, self.d) && within_unit(self.q, self.d)
    }

    fn at_shared_endpoint(&self) -> bool {
        (self.p == 0 || self.p == self.d) && (self.q == 0 || self.q == self.d)
    }
}

/// `num / den` ∈ [0, 1], without dividing
fn within_unit(num: WCoord, den: WCoord) -> bool {
    match den > 0 {
        true => (0..=den).contains(&num),
        false => (den..=0).contains(&num),
    }
}

fn between(v: Coord, bound_1: Coord, bound_2: Coord) -> bool {
    bound_1.min(bound_2) <= v && v <= bound_1.max(bound_2)
}

impl<'a> Seg<'a> {
    /// Local segment from `a` to `b`
    pub const fn new(a: Point, b: Point) -> Self {
        Seg {
            ends: Ends::Local { a, b },
        }
    }

    /// Local segment from `(x1, y1)` to `(x2, y2)`
    pub const fn from_coords(x1: Coord, y1: Coord, x2: Coord, y2: Coord) -> Self {
        Seg::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    /// Segment aliasing two points of a point sequence, `index` being its position in that sequence
    pub const fn referenced(a: &'a Point, b: &'a Point, index: usize) -> Self {
        Seg {
            ends: Ends::Referenced { a, b, index },
        }
    }

    pub fn a(&self) -> Point {
        match self.ends {
            Ends::Local { a, .. } => a,
            Ends::Referenced { a, .. } => *a,
        }
    }

    pub fn b(&self) -> Point {
        match self.ends {
            Ends::Local { b, .. } => b,
            Ends::Referenced { b, .. } => *b,
        }
    }

    fn endpoints(&self) -> (Point, Point) {
        (self.a(), self.b())
    }

    /// Position of the segment in its parent sequence, `None` for local segments
    pub fn index(&self) -> Option<usize> {
        match self.ends {
            Ends::Local { .. } => None,
            Ends::Referenced { index, .. } => Some(index),
        }
    }

    pub fn is_local(&self) -> bool {
        matches!(self.ends, Ends::Local { .. })
    }

    /// Local copy of the segment, detached from any point sequence
    pub fn to_local(&self) -> Seg<'static> {
        Seg::new(self.a(), self.b())
    }

    /// Local segment running from `b` to `a`
    pub fn reversed(&self) -> Seg<'static> {
        Seg::new(self.b(), self.a())
    }

    pub fn is_degenerate(&self) -> bool {
        self.a() == self.b()
    }

    /// Length of the segment, rounded to the nearest integer
    pub fn length(&self) -> ECoord {
        (self.b() - self.a()).euclidean_norm()
    }

    /// Side of the directed line A→B on which `p` lies.
    /// Every point is [`Side::OnLine`] of a zero-length segment.
    pub fn side(&self, p: Point) -> Side {
        let (a, b) = self.endpoints();
        Side::from_det((b - a).cross(&(p - a)))
    }

    /// Perpendicular distance from `p` to the infinite line through `a` and `b`, truncated towards zero.
    /// With `signed`, the sign agrees with [`Seg::side`] (negative = left).
    ///
    /// A zero-length segment has no line, the (rounded) distance to `a` is returned instead.
    pub fn line_distance(&self, p: Point, signed: bool) -> ECoord {
        let (a, b) = self.endpoints();
        let d = b - a;
        if a == b {
            return (p - a).euclidean_norm();
        }
        // (B - A) × (P - A) is the line equation p·x + q·y + r evaluated at P, with p = Ay - By, q = Bx - Ax
        let num = d.cross(&(p - a));
        let dist = floor_div_sqrt(num, d.squared_euclidean_norm());

        match signed && num < 0 {
            true => -dist,
            false => dist,
        }
    }

    /// Perpendicular projection of `p` onto the infinite line through `a` and `b`.
    /// Coordinates are rounded to the nearest integer and clamped to the [`Coord`] range.
    pub fn line_project(&self, p: Point) -> Point {
        let (a, b) = self.endpoints();
        let d = b - a;
        let l_squared = d.squared_euclidean_norm();
        if l_squared == 0 {
            return a;
        }
        let t = d.dot(&(p - a));
        let x = a.x as WCoord + rescale(t, d.x as WCoord, l_squared);
        let y = a.y as WCoord + rescale(t, d.y as WCoord, l_squared);

        Point::new(to_coord_saturating(x), to_coord_saturating(y))
    }

    /// Point of the segment closest to `p`
    pub fn nearest_point(&self, p: Point) -> Point {
        let (a, b) = self.endpoints();
        let d = b - a;
        let l_squared = d.squared_euclidean_norm();
        if l_squared == 0 {
            return a;
        }

        let t = d.dot(&(p - a));
        let nearest = if t < 0 {
            a
        } else if t > l_squared {
            b
        } else {
            // t / l² ∈ [0, 1], so the result lies between a and b and narrowing never clamps
            let x = a.x as WCoord + rescale(t, d.x as WCoord, l_squared);
            let y = a.y as WCoord + rescale(t, d.y as WCoord, l_squared);
            Point::new(to_coord_saturating(x), to_coord_saturating(y))
        };

        assertions::kernel_assert!(
            assertions::point_within_seg_bbox(self, nearest),
            "nearest point {nearest} of {p} outside of {self}"
        );
        nearest
    }

    fn line_crossing(&self, other: &Seg) -> LineCrossing {
        let (a, b) = self.endpoints();
        let (c, d) = other.endpoints();
        let (e, f, ac) = (b - a, d - c, c - a);

        LineCrossing {
            d: f.cross(&e),
            p: f.cross(&ac),
            q: e.cross(&ac),
        }
    }

    /// Intersection point of the segment with `other`.
    ///
    /// * `ignore_endpoints`: an intersection lying on an endpoint of both segments (touching, not crossing) is not reported.
    /// * `lines`: both segments are extended to infinite lines.
    ///
    /// Parallel segments never intersect, not even when they overlap. A zero-length segment intersects
    /// `other` only if its point lies on `other`. Line intersections outside the [`Coord`] range are not reported.
    pub fn intersect(&self, other: &Seg, ignore_endpoints: bool, lines: bool) -> Option<Point> {
        if self.is_degenerate() || other.is_degenerate() {
            return self.degenerate_intersection(other, ignore_endpoints, lines);
        }

        let lc = self.line_crossing(other);
        if lc.d == 0 {
            return None;
        }
        if !lines && (!lc.within_both() || (ignore_endpoints && lc.at_shared_endpoint())) {
            return None;
        }

        let (c, d) = other.endpoints();
        let f = d - c;
        let x = c.x as WCoord + rescale(lc.q, f.x as WCoord, lc.d);
        let y = c.y as WCoord + rescale(lc.q, f.y as WCoord, lc.d);

        match (to_coord(x), to_coord(y)) {
            (Some(x), Some(y)) => Some(Point::new(x, y)),
            _ => {
                trace!("line intersection of {self} and {other} at ({x}, {y}) is not representable");
                None
            }
        }
    }

    /// Intersection of the infinite lines through both segments
    pub fn intersect_lines(&self, other: &Seg) -> Option<Point> {
        self.intersect(other, false, true)
    }

    /// Whether the two bounded segments share at least one point, endpoints included.
    /// Unlike [`Seg::intersect`], overlapping collinear segments do intersect.
    pub fn intersects(&self, other: &Seg) -> bool {
        if self.is_degenerate() || other.is_degenerate() {
            return self.degenerate_intersection(other, false, false).is_some();
        }
        let lc = self.line_crossing(other);
        match lc.d {
            0 => {
                self.contains(other.a())
                    || self.contains(other.b())
                    || other.contains(self.a())
                    || other.contains(self.b())
            }
            _ => lc.within_both(),
        }
    }

    fn degenerate_intersection(
        &self,
        other: &Seg,
        ignore_endpoints: bool,
        lines: bool,
    ) -> Option<Point> {
        //the zero-length segment acts as a single point
        let (pt, host) = match self.is_degenerate() {
            true => (self.a(), other),
            false => (other.a(), self),
        };
        let hit = match lines && !host.is_degenerate() {
            true => host.side(pt) == Side::OnLine,
            false => host.contains(pt),
        };
        let on_host_endpoint = pt == host.a() || pt == host.b();

        match hit && !(ignore_endpoints && !lines && on_host_endpoint) {
            true => Some(pt),
            false => None,
        }
    }

    /// Coefficients `(p, q, r)` of the line equation `p·x + q·y + r = 0` through `a` and `b`
    fn line_coefficients(&self) -> (WCoord, WCoord, WCoord) {
        let (a, b) = self.endpoints();
        let p = a.y as WCoord - b.y as WCoord;
        let q = b.x as WCoord - a.x as WCoord;
        let r = -p * a.x as WCoord - q * a.y as WCoord;
        (p, q, r)
    }

    /// Whether `other` lies on exactly the same directed line: equal line coefficients, offset included.
    /// Parallel but shifted segments, or segments of opposite direction, are not collinear.
    pub fn collinear(&self, other: &Seg) -> bool {
        self.line_coefficients() == other.line_coefficients()
    }

    /// Whether `p` lies exactly on the segment, endpoints included
    pub fn contains(&self, p: Point) -> bool {
        let (a, b) = self.endpoints();
        self.side(p) == Side::OnLine && between(p.x, a.x, b.x) && between(p.y, a.y, b.y)
    }

    /// Whether the segment comes strictly closer than `dist` to `p`. Negative thresholds count as 0.
    pub fn point_closer_than(&self, p: Point, dist: Coord) -> bool {
        let dist = dist.max(0) as WCoord;
        self.squared_distance(p) < dist * dist
    }

    /// Squared distance between `p` and [`Seg::nearest_point`]
    pub fn squared_distance(&self, p: Point) -> WCoord {
        (self.nearest_point(p) - p).squared_euclidean_norm()
    }

    /// Distance to `p`, rounded down
    pub fn distance(&self, p: Point) -> ECoord {
        isqrt(self.squared_distance(p))
    }

    /// Minimum squared distance between the two bounded segments, 0 if they intersect
    pub fn seg_squared_distance(&self, other: &Seg) -> WCoord {
        if self.intersects(other) {
            return 0;
        }
        //without intersection, the minimum is attained at one of the four endpoints
        let (a, b) = self.endpoints();
        let (c, d) = other.endpoints();

        other
            .squared_distance(a)
            .min(other.squared_distance(b))
            .min(self.squared_distance(c))
            .min(self.squared_distance(d))
    }

    /// Minimum distance between the two bounded segments, rounded down
    pub fn seg_distance(&self, other: &Seg) -> ECoord {
        isqrt(self.seg_squared_distance(other))
    }

    /// Whether the segments intersect or come within `clearance` of each other.
    /// Negative clearances count as 0, which reduces the test to intersection (touching included).
    pub fn collide(&self, other: &Seg, clearance: Coord) -> bool {
        let clearance = clearance.max(0);
        if self.bbox_gap_exceeds(other, clearance) {
            return false;
        }
        let clearance = clearance as WCoord;
        self.seg_squared_distance(other) <= clearance * clearance
    }

    /// Whether the bounding boxes are more than `clearance` apart along some axis
    fn bbox_gap_exceeds(&self, other: &Seg, clearance: Coord) -> bool {
        let (a, b) = self.endpoints();
        let (c, d) = other.endpoints();
        let gap = |lo_1: Coord, hi_1: Coord, lo_2: Coord, hi_2: Coord| {
            ECoord::max(lo_2 as ECoord - hi_1 as ECoord, lo_1 as ECoord - hi_2 as ECoord)
        };
        let gap_x = gap(a.x.min(b.x), a.x.max(b.x), c.x.min(d.x), c.x.max(d.x));
        let gap_y = gap(a.y.min(b.y), a.y.max(b.y), c.y.min(d.y), c.y.max(d.y));

        ECoord::max(gap_x, gap_y) > clearance as ECoord
    }
}

impl Default for Seg<'_> {
    fn default() -> Self {
        Seg::new(Point::default(), Point::default())
    }
}

impl Display for Seg<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.ends {
            Ends::Local { a, b } => write!(f, "[ local {a} - {b} ]"),
            Ends::Referenced { a, b, index } => write!(f, "[ ref #{index} {a} - {b} ]"),
        }
    }
}

impl DistanceTo<Point> for Seg<'_> {
    fn distance_to(&self, other: &Point) -> ECoord {
        self.distance(*other)
    }

    fn sq_distance_to(&self, other: &Point) -> WCoord {
        self.squared_distance(*other)
    }
}

impl<'b> DistanceTo<Seg<'b>> for Seg<'_> {
    fn distance_to(&self, other: &Seg<'b>) -> ECoord {
        self.seg_distance(other)
    }

    fn sq_distance_to(&self, other: &Seg<'b>) -> WCoord {
        self.seg_squared_distance(other)
    }
}

impl<'b> CollidesWith<Seg<'b>> for Seg<'_> {
    fn collides_with(&self, other: &Seg<'b>) -> bool {
        self.intersects(other)
    }
}

impl CollidesWith<Point> for Seg<'_> {
    fn collides_with(&self, other: &Point) -> bool {
        self.contains(*other)
    }
}
