use crate::WCoord;

/// Position of a point relative to a directed line A→B.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum Side {
    Left = -1,
    OnLine = 0,
    Right = 1,
}

impl Side {
    /// Classifies the sign of the cross product `(B - A) × (P - A)`
    pub fn from_det(det: WCoord) -> Self {
        match det.signum() {
            -1 => Side::Left,
            1 => Side::Right,
            _ => Side::OnLine,
        }
    }

    /// -1, 0 or +1
    pub fn signum(self) -> i32 {
        self as i32
    }
}
