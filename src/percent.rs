use crate::value::{parse_float, ConversionResult, Value};

/// Types that can be interpreted as a floating-point number.
pub trait ToFloat {
    fn to_float(&self) -> ConversionResult<f64>;
}

macro_rules! impl_to_float_lossless {
    ($($ty:ty),*) => {
        $(impl ToFloat for $ty {
            fn to_float(&self) -> ConversionResult<f64> {
                Ok(f64::from(*self))
            }
        })*
    };
}

macro_rules! impl_to_float_cast {
    ($($ty:ty),*) => {
        $(impl ToFloat for $ty {
            fn to_float(&self) -> ConversionResult<f64> {
                Ok(*self as f64)
            }
        })*
    };
}

impl_to_float_lossless!(i8, i16, i32, u8, u16, u32, f32, f64);
impl_to_float_cast!(i64, u64, isize, usize);

impl ToFloat for bool {
    fn to_float(&self) -> ConversionResult<f64> {
        Ok(if *self { 1.0 } else { 0.0 })
    }
}

impl ToFloat for str {
    fn to_float(&self) -> ConversionResult<f64> {
        parse_float(self)
    }
}

impl ToFloat for String {
    fn to_float(&self) -> ConversionResult<f64> {
        parse_float(self)
    }
}

impl ToFloat for Value {
    fn to_float(&self) -> ConversionResult<f64> {
        self.to_f64()
    }
}

impl<T: ToFloat + ?Sized> ToFloat for &T {
    fn to_float(&self) -> ConversionResult<f64> {
        (**self).to_float()
    }
}

/// Returns what percentage `part` is of `whole`.
///
/// A zero `whole` is not rejected: the result is infinite, or NaN when `part`
/// is zero as well.
pub fn percentage<P, W>(part: P, whole: W) -> ConversionResult<f64>
where
    P: ToFloat,
    W: ToFloat,
{
    let part = part.to_float()?;
    let whole = whole.to_float()?;
    Ok(100.0 * part / whole)
}
