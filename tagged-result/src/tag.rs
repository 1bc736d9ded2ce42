//
// Copyright (c) 2023 ZettaScale Technology
//
// This program and the accompanying materials are made available under the
// terms of the Eclipse Public License 2.0 which is available at
// http://www.eclipse.org/legal/epl-2.0, or the Apache License, Version 2.0
// which is available at https://www.apache.org/licenses/LICENSE-2.0.
//
// SPDX-License-Identifier: EPL-2.0 OR Apache-2.0
//
// Contributors:
//   Pierre Avital, <pierre.avital@me.com>
//

//! Tags that mark a payload as the success or the error of a [`Result`](crate::Result).
//!
//! Tags may only be obtained through [`value`] and [`error`], and may only be consumed by
//! converting them into a [`Result`](crate::Result):
//! ```compile_fail
//! let tag = tagged_result::tag::Tagged::<u8, tagged_result::tag::IsValue> {
//!     payload: 3,
//!     kind: core::marker::PhantomData,
//! };
//! ```
//! ```compile_fail
//! let tag = tagged_result::value(3u8);
//! let again = tag.clone();
//! ```

use core::marker::PhantomData;

/// Marks a [`Tagged`] payload as the success value.
pub enum IsValue {}
/// Marks a [`Tagged`] payload as the error value.
pub enum IsError {}

/// A payload on its way to becoming one of a [`Result`](crate::Result)'s variants.
///
/// `Kind` is either [`IsValue`] or [`IsError`]: two tags with the same payload type are still
/// distinct types, so the variant a tag builds never depends on the payload's type.
#[must_use = "a tag does nothing until converted into a `Result`"]
pub struct Tagged<P, Kind> {
    payload: P,
    kind: PhantomData<Kind>,
}
/// A payload destined to be a [`Result`](crate::Result)'s success value.
pub type ValueTag<P> = Tagged<P, IsValue>;
/// A payload destined to be a [`Result`](crate::Result)'s error value.
pub type ErrorTag<P> = Tagged<P, IsError>;

impl<P, Kind> Tagged<P, Kind> {
    const fn new(payload: P) -> Self {
        Self {
            payload,
            kind: PhantomData,
        }
    }
    pub(crate) fn into_payload(self) -> P {
        self.payload
    }
}

/// Tags `payload` as a success value.
pub const fn value<P>(payload: P) -> ValueTag<P> {
    Tagged::new(payload)
}
/// Tags `payload` as an error value.
pub const fn error<P>(payload: P) -> ErrorTag<P> {
    Tagged::new(payload)
}

/// Types that may fill a [`Result`](crate::Result) slot of type `Target`.
///
/// Besides `Target` itself, a `*mut X` may fill a `*const X` slot. Constness is never dropped:
/// ```compile_fail
/// let target = 3u8;
/// let p: *const u8 = &target;
/// let result: tagged_result::Result<*mut u8, ()> = tagged_result::value(p).into();
/// ```
///
/// Any other pairing is rejected at compile time:
/// ```compile_fail
/// let result: tagged_result::Result<u32, ()> = tagged_result::value(3u64).into();
/// ```
///
/// This trait is sealed.
pub trait IPayloadOf<Target>: sealed::Sealed<Target> {
    /// Converts `self` into the slot's type.
    fn into_target(self) -> Target;
}
impl<T> IPayloadOf<T> for T {
    fn into_target(self) -> T {
        self
    }
}
impl<X: ?Sized> IPayloadOf<*const X> for *mut X {
    fn into_target(self) -> *const X {
        self.cast_const()
    }
}

mod sealed {
    pub trait Sealed<Target> {}
    impl<T> Sealed<T> for T {}
    impl<X: ?Sized> Sealed<*const X> for *mut X {}
}
