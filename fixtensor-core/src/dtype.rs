use std::fmt::Debug;

#[cfg(feature = "bfloat")]
use half::bf16;
#[cfg(feature = "half")]
use half::f16;

/// Marker trait for tensor element types.
///
/// Implemented for the primitive numeric types and `bool`, the element type
/// of componentwise comparisons. Custom element types opt in with an empty
/// impl.
pub trait DType: Debug + Clone {}

macro_rules! dtype {
    ($($rt:ty),*) => {
        $(impl DType for $rt {})*
    };
}

dtype!(bool, u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64);

#[cfg(feature = "half")]
impl DType for f16 {}
#[cfg(feature = "bfloat")]
impl DType for bf16 {}

/// Scalar functions used by the componentwise transcendental expressions.
///
/// `log` is the natural logarithm.
pub trait Real: DType {
    fn from_f64(v: f64) -> Self;
    fn exp(self) -> Self;
    fn log(self) -> Self;
    fn log10(self) -> Self;
    fn sqrt(self) -> Self;
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn tan(self) -> Self;
    fn asin(self) -> Self;
    fn acos(self) -> Self;
    fn atan(self) -> Self;
    fn sinh(self) -> Self;
    fn cosh(self) -> Self;
    fn tanh(self) -> Self;
    fn abs(self) -> Self;
}

macro_rules! real {
    ($rt:ident) => {
        impl Real for $rt {
            fn from_f64(v: f64) -> Self {
                v as $rt
            }
            fn exp(self) -> Self {
                $rt::exp(self)
            }
            fn log(self) -> Self {
                $rt::ln(self)
            }
            fn log10(self) -> Self {
                $rt::log10(self)
            }
            fn sqrt(self) -> Self {
                $rt::sqrt(self)
            }
            fn sin(self) -> Self {
                $rt::sin(self)
            }
            fn cos(self) -> Self {
                $rt::cos(self)
            }
            fn tan(self) -> Self {
                $rt::tan(self)
            }
            fn asin(self) -> Self {
                $rt::asin(self)
            }
            fn acos(self) -> Self {
                $rt::acos(self)
            }
            fn atan(self) -> Self {
                $rt::atan(self)
            }
            fn sinh(self) -> Self {
                $rt::sinh(self)
            }
            fn cosh(self) -> Self {
                $rt::cosh(self)
            }
            fn tanh(self) -> Self {
                $rt::tanh(self)
            }
            fn abs(self) -> Self {
                $rt::abs(self)
            }
        }
    };
}

real!(f32);
real!(f64);

// The half types have no libm of their own: round-trip through f32.
#[cfg(any(feature = "half", feature = "bfloat"))]
macro_rules! real_via_f32 {
    ($rt:ident) => {
        impl Real for $rt {
            fn from_f64(v: f64) -> Self {
                $rt::from_f64(v)
            }
            fn exp(self) -> Self {
                $rt::from_f32(self.to_f32().exp())
            }
            fn log(self) -> Self {
                $rt::from_f32(self.to_f32().ln())
            }
            fn log10(self) -> Self {
                $rt::from_f32(self.to_f32().log10())
            }
            fn sqrt(self) -> Self {
                $rt::from_f32(self.to_f32().sqrt())
            }
            fn sin(self) -> Self {
                $rt::from_f32(self.to_f32().sin())
            }
            fn cos(self) -> Self {
                $rt::from_f32(self.to_f32().cos())
            }
            fn tan(self) -> Self {
                $rt::from_f32(self.to_f32().tan())
            }
            fn asin(self) -> Self {
                $rt::from_f32(self.to_f32().asin())
            }
            fn acos(self) -> Self {
                $rt::from_f32(self.to_f32().acos())
            }
            fn atan(self) -> Self {
                $rt::from_f32(self.to_f32().atan())
            }
            fn sinh(self) -> Self {
                $rt::from_f32(self.to_f32().sinh())
            }
            fn cosh(self) -> Self {
                $rt::from_f32(self.to_f32().cosh())
            }
            fn tanh(self) -> Self {
                $rt::from_f32(self.to_f32().tanh())
            }
            fn abs(self) -> Self {
                $rt::from_f32(self.to_f32().abs())
            }
        }
    };
}

#[cfg(feature = "half")]
real_via_f32!(f16);
#[cfg(feature = "bfloat")]
real_via_f32!(bf16);
