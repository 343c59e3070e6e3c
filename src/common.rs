// Copyright 2026 the geomext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Float functions that need either libstd or libm.

/// Defines a trait that chooses between libstd or libm implementations of float methods.
macro_rules! define_float_funcs {
    ($(
        fn $name:ident(self $(,$arg:ident: $arg_ty:ty)*) -> $ret:ty
        => $lname:ident;
    )+) => {
        #[cfg(not(feature = "std"))]
        pub(crate) trait FloatFuncs : Sized {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret;)+
        }

        #[cfg(not(feature = "std"))]
        impl FloatFuncs for f64 {
            $(#[inline]
            fn $name(self $(,$arg: $arg_ty)*) -> $ret {
                #[cfg(feature = "libm")]
                return libm::$lname(self $(,$arg as _)*);

                #[cfg(not(feature = "libm"))]
                compile_error!("geomext requires either the `std` or `libm` feature")
            })+
        }
    }
}

define_float_funcs! {
    fn abs(self) -> Self => fabs;
    fn sqrt(self) -> Self => sqrt;
}

#[cfg(all(test, not(feature = "std")))]
mod tests {
    use super::FloatFuncs;

    #[test]
    fn libm_fallbacks() {
        assert_eq!(FloatFuncs::sqrt(25.0_f64), 5.0);
        assert_eq!(FloatFuncs::abs(-3.5_f64), 3.5);
    }
}
