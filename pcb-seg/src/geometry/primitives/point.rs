use std::fmt::{Display, Formatter};
use std::ops::{Add, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::util::round_sqrt;
use crate::{Coord, ECoord, WCoord};

/// Position with integer coordinates.
///
/// Subtracting two points yields a [`Vector`] in [`ECoord`], so any two points of the full
/// [`Coord`] range can be combined without overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: Coord,
    pub y: Coord,
}

impl Point {
    pub const fn new(x: Coord, y: Coord) -> Self {
        Point { x, y }
    }

    pub fn sq_distance(&self, other: &Point) -> WCoord {
        (*self - *other).squared_euclidean_norm()
    }

    /// Moves the point by `offset`, `None` if the result leaves the [`Coord`] range
    pub fn checked_offset(&self, offset: Vector) -> Option<Point> {
        let x = Coord::try_from((self.x as ECoord).checked_add(offset.x)?).ok()?;
        let y = Coord::try_from((self.y as ECoord).checked_add(offset.y)?).ok()?;
        Some(Point::new(x, y))
    }
}

/// Difference of two [`Point`]s, widened to [`ECoord`].
/// Products of two vectors are formed in [`WCoord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Vector {
    pub x: ECoord,
    pub y: ECoord,
}

impl Vector {
    pub const fn new(x: ECoord, y: ECoord) -> Self {
        Vector { x, y }
    }

    pub fn dot(&self, other: &Vector) -> WCoord {
        self.x as WCoord * other.x as WCoord + self.y as WCoord * other.y as WCoord
    }

    /// z-component of the 3D cross product `self × other`
    pub fn cross(&self, other: &Vector) -> WCoord {
        self.x as WCoord * other.y as WCoord - self.y as WCoord * other.x as WCoord
    }

    pub fn squared_euclidean_norm(&self) -> WCoord {
        self.dot(self)
    }

    /// Euclidean norm, rounded to the nearest integer
    pub fn euclidean_norm(&self) -> ECoord {
        round_sqrt(self.squared_euclidean_norm())
    }
}

impl Sub for Point {
    type Output = Vector;

    fn sub(self, rhs: Point) -> Vector {
        Vector::new(
            self.x as ECoord - rhs.x as ECoord,
            self.y as ECoord - rhs.y as ECoord,
        )
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y)
    }
}

impl From<Point> for Vector {
    fn from(p: Point) -> Self {
        Vector::new(p.x as ECoord, p.y as ECoord)
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[ {} | {} ]", self.x, self.y)
    }
}

impl From<(Coord, Coord)> for Point {
    fn from(p: (Coord, Coord)) -> Self {
        Point::new(p.0, p.1)
    }
}

impl From<Point> for (Coord, Coord) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl From<Point> for (f32, f32) {
    fn from(p: Point) -> Self {
        (p.x as f32, p.y as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn differences_span_the_full_range() {
        let max = Point::new(Coord::MAX, Coord::MAX);
        let min = Point::new(Coord::MIN, Coord::MIN);
        let span = Coord::MAX as ECoord - Coord::MIN as ECoord;
        assert_eq!(max - min, Vector::new(span, span));
        assert_eq!(min - max, Vector::new(-span, -span));
        assert_eq!((max - min).squared_euclidean_norm(), 2 * (span as WCoord).pow(2));
        assert_eq!(max.sq_distance(&min), 2 * (span as WCoord).pow(2));
    }

    #[test]
    fn products_are_widened() {
        let u = Vector::from(Point::new(Coord::MIN, Coord::MIN));
        let v = Vector::from(Point::new(Coord::MIN, Coord::MAX));
        assert_eq!(u.dot(&u), 2 * (Coord::MIN as WCoord).pow(2));
        assert_eq!(
            u.cross(&v),
            Coord::MIN as WCoord * Coord::MAX as WCoord - (Coord::MIN as WCoord).pow(2)
        );
        assert_eq!(u.squared_euclidean_norm(), u.dot(&u));
    }

    #[test]
    fn norm_rounds_to_nearest() {
        assert_eq!(Vector::new(3, 4).euclidean_norm(), 5);
        assert_eq!(Vector::new(1, 1).euclidean_norm(), 1);
        assert_eq!(Vector::new(2, 3).euclidean_norm(), 4); // √13 ≈ 3.61
        assert_eq!(Vector::default().euclidean_norm(), 0);
    }

    #[test]
    fn arithmetic_and_display() {
        let p = Point::new(3, -2);
        let q: Point = (1, 5).into();
        assert_eq!(p - q, Vector::new(2, -7));
        assert_eq!(-(p - q), q - p);
        assert_eq!((p - q) + (q - p), Vector::default());
        assert_eq!(p.sq_distance(&q), 4 + 49);
        assert_eq!(q.checked_offset(p - q), Some(p));
        assert_eq!(Point::new(Coord::MAX, 0).checked_offset(Vector::new(1, 0)), None);
        assert_eq!(p.checked_offset(Vector::new(ECoord::MAX, 0)), None);
        assert_eq!(format!("{p}"), "[ 3 | -2 ]");
    }
}
