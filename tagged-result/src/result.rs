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

//! Tag-constructed results!

use crate::tag::{ErrorTag, IPayloadOf, ValueTag};

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
enum Slot<T, E> {
    Value(T),
    Error(E),
}

/// Holds either a success value of type `T` or an error of type `E`.
///
/// A `Result` is built from a tag, obtained through [`value`](crate::value) or
/// [`error`](crate::error), and keeps the variant it was built with until it is dropped:
/// no method may turn a value into an error or the other way around.
///
/// Its layout is that of [`core::result::Result<T, E>`], niches included.
///
/// Errors default to plain `i32` codes.
#[repr(transparent)]
#[derive(PartialEq, Eq, Hash)]
pub struct Result<T, E = i32> {
    slot: Slot<T, E>,
}

impl<T: Clone, E: Clone> Clone for Result<T, E> {
    fn clone(&self) -> Self {
        self.match_ref(
            |value| Self::from_slot(Slot::Value(value.clone())),
            |error| Self::from_slot(Slot::Error(error.clone())),
        )
    }
}
impl<T: Copy, E: Copy> Copy for Result<T, E> {}

impl<T, E, U: IPayloadOf<T>> From<ValueTag<U>> for Result<T, E> {
    fn from(tag: ValueTag<U>) -> Self {
        Self::from_slot(Slot::Value(tag.into_payload().into_target()))
    }
}
impl<T, E, U: IPayloadOf<E>> From<ErrorTag<U>> for Result<T, E> {
    fn from(tag: ErrorTag<U>) -> Self {
        Self::from_slot(Slot::Error(tag.into_payload().into_target()))
    }
}
impl<T, E> From<core::result::Result<T, E>> for Result<T, E> {
    fn from(result: core::result::Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::from_slot(Slot::Value(value)),
            Err(error) => Self::from_slot(Slot::Error(error)),
        }
    }
}
impl<T, E> From<Result<T, E>> for core::result::Result<T, E> {
    fn from(result: Result<T, E>) -> Self {
        result.match_owned(Ok, Err)
    }
}

impl<T, E> Result<T, E> {
    const fn from_slot(slot: Slot<T, E>) -> Self {
        Self { slot }
    }

    /// Returns `true` if `self` holds a value.
    pub fn is_value(&self) -> bool {
        matches!(self.slot, Slot::Value(_))
    }
    /// Returns `true` if `self` holds an error.
    pub fn is_error(&self) -> bool {
        !self.is_value()
    }

    /// Returns the value without checking that it exists.
    ///
    /// # Safety
    /// `self.is_value()` must be `true`. Called on an error, this triggers Undefined Behaviour
    /// (or a panic if `debug_assertions` are enabled).
    pub unsafe fn get_value(&self) -> &T {
        match &self.slot {
            Slot::Value(value) => value,
            Slot::Error(_) => unsafe { unreachable_unchecked!("`get_value` called on an error") },
        }
    }
    /// Returns the value by mutable reference without checking that it exists.
    ///
    /// # Safety
    /// See [`Self::get_value`].
    pub unsafe fn get_value_mut(&mut self) -> &mut T {
        match &mut self.slot {
            Slot::Value(value) => value,
            Slot::Error(_) => unsafe {
                unreachable_unchecked!("`get_value_mut` called on an error")
            },
        }
    }
    /// Returns the error without checking that it exists.
    ///
    /// # Safety
    /// `self.is_error()` must be `true`. Called on a value, this triggers Undefined Behaviour
    /// (or a panic if `debug_assertions` are enabled).
    pub unsafe fn get_error(&self) -> &E {
        match &self.slot {
            Slot::Error(error) => error,
            Slot::Value(_) => unsafe { unreachable_unchecked!("`get_error` called on a value") },
        }
    }
    /// Returns the error by mutable reference without checking that it exists.
    ///
    /// # Safety
    /// See [`Self::get_error`].
    pub unsafe fn get_error_mut(&mut self) -> &mut E {
        match &mut self.slot {
            Slot::Error(error) => error,
            Slot::Value(_) => unsafe {
                unreachable_unchecked!("`get_error_mut` called on a value")
            },
        }
    }

    /// Equivalent to `match &self`.
    pub fn match_ref<'a, U, FnValue: FnOnce(&'a T) -> U, FnError: FnOnce(&'a E) -> U>(
        &'a self,
        value: FnValue,
        error: FnError,
    ) -> U {
        match &self.slot {
            Slot::Value(v) => value(v),
            Slot::Error(e) => error(e),
        }
    }
    /// Equivalent to `match &mut self`.
    ///
    /// The closures may mutate the payload, but the variant stays the same.
    pub fn match_mut<'a, U, FnValue: FnOnce(&'a mut T) -> U, FnError: FnOnce(&'a mut E) -> U>(
        &'a mut self,
        value: FnValue,
        error: FnError,
    ) -> U {
        match &mut self.slot {
            Slot::Value(v) => value(v),
            Slot::Error(e) => error(e),
        }
    }
    /// Equivalent to `match self`.
    pub fn match_owned<U, FnValue: FnOnce(T) -> U, FnError: FnOnce(E) -> U>(
        self,
        value: FnValue,
        error: FnError,
    ) -> U {
        match self.slot {
            Slot::Value(v) => value(v),
            Slot::Error(e) => error(e),
        }
    }

    /// Returns the value by reference if it exists, `None` otherwise.
    pub fn value_ref(&self) -> Option<&T> {
        self.match_ref(Some, |_| None)
    }
    /// Returns the value by mutable reference if it exists, `None` otherwise.
    pub fn value_mut(&mut self) -> Option<&mut T> {
        self.match_mut(Some, |_| None)
    }
    /// Returns the error by reference if it exists, `None` otherwise.
    pub fn error_ref(&self) -> Option<&E> {
        self.match_ref(|_| None, Some)
    }
    /// Returns the error by mutable reference if it exists, `None` otherwise.
    pub fn error_mut(&mut self) -> Option<&mut E> {
        self.match_mut(|_| None, Some)
    }
    /// Returns the value if it exists, `None` otherwise.
    pub fn into_value(self) -> Option<T> {
        self.match_owned(Some, |_| None)
    }
    /// Returns the error if it exists, `None` otherwise.
    pub fn into_error(self) -> Option<E> {
        self.match_owned(|_| None, Some)
    }

    /// Converts to a standard [`Result`](core::result::Result) of references to the payloads.
    #[allow(clippy::missing_errors_doc)]
    pub fn as_ref(&self) -> core::result::Result<&T, &E> {
        self.match_ref(Ok, Err)
    }
    /// Converts into a standard [`Result`](core::result::Result), typically to use `?` on it.
    ///
    /// ```
    /// use tagged_result::{error, value, Result};
    ///
    /// fn parse(digit: char) -> Result<u32, char> {
    ///     match digit.to_digit(10) {
    ///         Some(d) => value(d).into(),
    ///         None => error(digit).into(),
    ///     }
    /// }
    /// fn sum(digits: &str) -> core::result::Result<u32, char> {
    ///     let mut total = 0;
    ///     for digit in digits.chars() {
    ///         total += parse(digit).into_result()?;
    ///     }
    ///     Ok(total)
    /// }
    /// assert_eq!(sum("123"), Ok(6));
    /// assert_eq!(sum("1x3"), Err('x'));
    /// ```
    #[allow(clippy::missing_errors_doc)]
    pub fn into_result(self) -> core::result::Result<T, E> {
        self.into()
    }

    /// Moves the active payload out into a new `Result` of the same variant.
    ///
    /// `self` keeps its variant, but its payload is replaced with the payload type's default.
    pub fn take(&mut self) -> Self
    where
        T: Default,
        E: Default,
    {
        self.match_mut(
            |value| Self::from_slot(Slot::Value(core::mem::take(value))),
            |error| Self::from_slot(Slot::Error(core::mem::take(error))),
        )
    }
}
