use crate::geometry::primitives::{LineChain, Point, Seg};

//Various checks to verify correctness of the kernel's results
//Used in kernel_assert!() blocks

/// `assert!()` in debug builds or with the `strict-checks` feature, no-op otherwise
macro_rules! kernel_assert {
    ($($arg:tt)+) => {
        if cfg!(any(debug_assertions, feature = "strict-checks")) {
            assert!($($arg)+);
        }
    };
}

pub(crate) use kernel_assert;

pub fn point_within_seg_bbox(seg: &Seg, p: Point) -> bool {
    let (a, b) = (seg.a(), seg.b());
    a.x.min(b.x) <= p.x && p.x <= a.x.max(b.x) && a.y.min(b.y) <= p.y && p.y <= a.y.max(b.y)
}

/// Every segment handed out by the chain aliases consecutive points and carries its own position
pub fn chain_segments_consistent(chain: &LineChain) -> bool {
    let points = chain.points();
    chain.segments().enumerate().all(|(i, seg)| {
        seg.index() == Some(i)
            && !seg.is_local()
            && seg.a() == points[i]
            && seg.b() == points[(i + 1) % points.len()]
    })
}
