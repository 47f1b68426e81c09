use std::ops::Add;

/// Numeric edge weight usable by the weighted algorithms.
///
/// Weights are compared with [`PartialOrd`]. Incomparable values (NaN) are
/// treated as equal by the [priority queue](crate::common::IndexMinPq) and
/// never win a relaxation.
pub trait Weight: PartialOrd + Add<Self, Output = Self> + Copy + Sized {
    /// The additive identity, distance of the source to itself.
    fn zero() -> Self;

    /// Distance of a vertex that has not been reached.
    ///
    /// For integer types this is their maximum value.
    fn inf() -> Self;

    /// Adds two weights. Returns `None` if the sum does not fit the type or
    /// is not less than [`inf`](Weight::inf), so that it cannot be told
    /// apart from an unreached vertex.
    fn checked_add(self, other: Self) -> Option<Self>;
}

macro_rules! impl_int_weight {
    ($ty:ty) => {
        impl Weight for $ty {
            fn zero() -> Self {
                0
            }

            fn inf() -> Self {
                <$ty>::MAX
            }

            fn checked_add(self, other: Self) -> Option<Self> {
                <$ty>::checked_add(self, other).filter(|&sum| sum < <$ty>::MAX)
            }
        }
    };
}

impl_int_weight!(i8);
impl_int_weight!(i16);
impl_int_weight!(i32);
impl_int_weight!(i64);
impl_int_weight!(u8);
impl_int_weight!(u16);
impl_int_weight!(u32);
impl_int_weight!(u64);
impl_int_weight!(isize);
impl_int_weight!(usize);

macro_rules! impl_float_weight {
    ($ty:ty) => {
        impl Weight for $ty {
            fn zero() -> Self {
                0.0
            }

            fn inf() -> Self {
                <$ty>::INFINITY
            }

            fn checked_add(self, other: Self) -> Option<Self> {
                let sum = self + other;
                (sum < <$ty>::INFINITY).then_some(sum)
            }
        }
    };
}

impl_float_weight!(f32);
impl_float_weight!(f64);

/// Sums weights of an iterator, starting from [`Weight::zero`].
pub fn total<W, I>(weights: I) -> W
where
    W: Weight,
    I: IntoIterator<Item = W>,
{
    weights.into_iter().fold(W::zero(), |acc, weight| acc + weight)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_add_integers() {
        assert_eq!(Weight::checked_add(200u8, 54), Some(254));
        assert_eq!(Weight::checked_add(200u8, 55), None);
        assert_eq!(Weight::checked_add(200u8, 100), None);
        assert_eq!(Weight::checked_add(-3i32, 5), Some(2));
    }

    #[test]
    fn checked_add_floats() {
        assert_eq!(Weight::checked_add(0.25f64, 0.5), Some(0.75));
        assert_eq!(Weight::checked_add(f64::MAX, f64::MAX), None);
        assert_eq!(Weight::checked_add(1.0f32, f32::INFINITY), None);
    }

    #[test]
    fn total_sums_from_zero() {
        assert_eq!(total::<u32, _>([]), 0);
        assert_eq!(total([1u32, 2, 3]), 6);
    }
}
