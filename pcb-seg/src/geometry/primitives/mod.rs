mod line_chain;
mod point;
mod seg;

#[doc(inline)]
pub use line_chain::LineChain;
#[doc(inline)]
pub use point::{Point, Vector};
#[doc(inline)]
pub use seg::Seg;
