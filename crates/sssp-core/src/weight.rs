use std::fmt::Debug;
use std::ops::Add;

/// Numeric edge weight and path cost.
///
/// `INFINITY` is the "not reached" sentinel stored in distance arrays. For
/// floating-point types it is the IEEE infinity. For integer types it is
/// `MAX`, so every smaller value is a real cost.
///
/// Path costs are summed with [`Weight::saturating_add`]. A total that does
/// not fit below `INFINITY` saturates to it and is treated as no path, so
/// callers must keep every path cost under `INFINITY` (for integers, a
/// sufficient condition is that the absolute weights of all edges sum to
/// less than `MAX`).
pub trait Weight: Copy + PartialOrd + Add<Output = Self> + Debug {
    /// Additive identity; the distance of the source.
    const ZERO: Self;
    /// Sentinel for "no known path".
    const INFINITY: Self;

    /// `self + rhs`, clamped to the representable range. Integer sums that
    /// would exceed `INFINITY` yield `INFINITY`.
    fn saturating_add(self, rhs: Self) -> Self;

    /// Magnitude of the weight.
    fn magnitude(self) -> Self;

    /// Whether `self` is the unreachable sentinel (or beyond it).
    #[inline]
    fn is_infinite(self) -> bool {
        !(self < Self::INFINITY)
    }
}

macro_rules! impl_signed_weight {
    ($($t:ty),*) => {$(
        impl Weight for $t {
            const ZERO: Self = 0;
            const INFINITY: Self = <$t>::MAX;

            #[inline]
            fn saturating_add(self, rhs: Self) -> Self {
                <$t>::saturating_add(self, rhs)
            }

            #[inline]
            fn magnitude(self) -> Self {
                <$t>::saturating_abs(self)
            }
        }
    )*};
}

macro_rules! impl_unsigned_weight {
    ($($t:ty),*) => {$(
        impl Weight for $t {
            const ZERO: Self = 0;
            const INFINITY: Self = <$t>::MAX;

            #[inline]
            fn saturating_add(self, rhs: Self) -> Self {
                <$t>::saturating_add(self, rhs)
            }

            #[inline]
            fn magnitude(self) -> Self {
                self
            }
        }
    )*};
}

macro_rules! impl_float_weight {
    ($($t:ty),*) => {$(
        impl Weight for $t {
            const ZERO: Self = 0.0;
            const INFINITY: Self = <$t>::INFINITY;

            #[inline]
            fn saturating_add(self, rhs: Self) -> Self {
                self + rhs
            }

            #[inline]
            fn magnitude(self) -> Self {
                self.abs()
            }
        }
    )*};
}

impl_signed_weight!(i32, i64);
impl_unsigned_weight!(u32, u64);
impl_float_weight!(f32, f64);
