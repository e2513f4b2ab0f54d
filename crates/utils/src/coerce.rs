//! Numeric coercion into `f64`.

use baryfit_primitives::Vector;

/// Conversion of a primitive numeric value into `f64`.
///
/// Integers wider than 53 bits round to the nearest representable value.
pub trait AsF64: Copy {
    /// Convert to `f64`.
    fn as_f64(self) -> f64;
}

macro_rules! impl_as_f64 {
    ($($t:ty),* $(,)?) => {
        $(
            impl AsF64 for $t {
                #[inline]
                fn as_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_as_f64!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl AsF64 for bool {
    #[inline]
    fn as_f64(self) -> f64 {
        if self { 1.0 } else { 0.0 }
    }
}

/// Convert a primitive numeric value into `f64`.
#[inline]
pub fn to_f64<T: AsF64>(value: T) -> f64 {
    value.as_f64()
}

/// Collect primitive numeric values into a [`Vector`].
pub fn to_vector<I>(values: I) -> Vector
where
    I: IntoIterator,
    I::Item: AsF64,
{
    values.into_iter().map(AsF64::as_f64).collect()
}
