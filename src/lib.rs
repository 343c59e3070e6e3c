// Copyright 2026 the geomext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Concise arithmetic for 2D points, sizes, vectors and rectangles.
//!
//! The geomext library provides the four small value types that UI and
//! graphics code passes around, [`Point`], [`Size`], [`Vector`] and
//! [`Rect`], together with the operators and convenience constructors that
//! make call sites read like the geometry they describe. Every operation is
//! a pure function of its inputs; values are `Copy` and the in-place
//! operators only touch their left operand.
//!
//! # Examples
//!
//! ```
//! use geomext::{Point, Rect, Size, Vector};
//!
//! let a = Point::new(10.0, 20.0);
//! let b = a + Point::new(5.0, 15.0);
//! assert_eq!(b, Point::new(15.0, 35.0));
//! assert_eq!(a * 2.0, Point::new(20.0, 40.0));
//!
//! let v = Vector::new(3.0, 4.0);
//! assert_eq!(v.dot(Vector::new(1.0, 2.0)), 11.0);
//! assert_eq!(v.normalized(), Vector::new(0.6, 0.8));
//!
//! let frame = Rect::absolute(Point::new(50.0, 100.0), Point::new(200.0, 50.0));
//! assert_eq!(frame, Rect::new(50.0, 50.0, 150.0, 50.0));
//!
//! let mut card = Rect::from_origin_size(Point::ZERO, Size::new(20.0, 10.0));
//! card.set_center(frame.center());
//! assert_eq!(card, Rect::new(115.0, 70.0, 20.0, 10.0));
//! ```
//!
//! # Degenerate input
//!
//! Nothing here returns an error or panics. Division by zero, normalizing a
//! zero vector, averaging an empty collection and fitting against a
//! zero-height size all follow IEEE 754 and yield infinities or `NaN`.
//!
//! # Feature Flags
//!
//! The following crate [feature flags](https://doc.rust-lang.org/cargo/reference/features.html#dependency-features) are available:
//!
//! - `std` (enabled by default): Get floating point functions from the standard library
//!   (likely using your target's libc).
//! - `libm`: Use floating point implementations from [libm][].
//!   This is useful for `no_std` environments.
//!   However, note that the `libm` crate is not as efficient as the standard library.
//! - `mint`: Enable `From`/`Into` conversion of geomext and [mint][] types, enabling interoperability
//!   with other graphics libraries.
//! - `euclid`: Enable `From`/`Into` conversion of geomext and [euclid][] types.
//!   Note that if you're using both geomext and euclid at the same time, you *must*
//!   also enable one of euclid's `std` or `libm` features.
//! - `objc2-core-foundation`: On Apple targets, enable `From`/`Into` conversion with
//!   `CGPoint`, `CGSize`, `CGVector` and `CGRect`.
//! - `serde`: Implement `serde::Deserialize` and `serde::Serialize` on all types.
//! - `schemars`: Add best-effort support for using geomext types in JSON schemas using [schemars][].
//!
//! At least one of `std` and `libm` is required; `std` overrides `libm`.
//!
//! [libm]: https://docs.rs/libm
//! [mint]: https://docs.rs/mint
//! [euclid]: https://docs.rs/euclid
//! [schemars]: https://docs.rs/schemars

// LINEBENDER LINT SET - lib.rs - v1
// See https://linebender.org/wiki/canonical-lints/
// These lints aren't included in Cargo.toml because they
// shouldn't apply to examples and tests
#![warn(unused_crate_dependencies)]
#![warn(clippy::print_stdout, clippy::print_stderr)]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![allow(
    clippy::unreadable_literal,
    clippy::excessive_precision,
    clippy::float_cmp
)]
// The following lints are part of the Linebender standard set,
// but resolving them has been deferred for now.
#![allow(
    clippy::use_self,
    clippy::return_self_not_must_use,
    clippy::missing_assert_message,
    clippy::unseparated_literal_suffix,
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason
)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("geomext requires either the `std` or `libm` feature");

// Suppress the unused_crate_dependencies lint when both std and libm are specified.
#[cfg(all(feature = "std", feature = "libm"))]
use libm as _;

mod common;
mod point;
mod rect;
mod size;
mod vector;

#[cfg(feature = "euclid")]
mod interop_euclid;

#[cfg(all(
    feature = "objc2-core-foundation",
    target_vendor = "apple",
    target_pointer_width = "64"
))]
mod interop_objc2_core_foundation;

pub use crate::point::Point;
pub use crate::rect::Rect;
pub use crate::size::Size;
pub use crate::vector::Vector;
