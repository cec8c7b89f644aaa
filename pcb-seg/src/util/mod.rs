/// Invariant checks used in `debug_assert!()` blocks throughout the kernel.
pub mod assertions;

mod int_math;

#[doc(inline)]
pub use int_math::isqrt;
#[doc(inline)]
pub use int_math::floor_div_sqrt;
#[doc(inline)]
pub use int_math::rescale;
#[doc(inline)]
pub use int_math::round_sqrt;
#[doc(inline)]
pub use int_math::to_coord;
#[doc(inline)]
pub use int_math::to_coord_saturating;
