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

#![cfg_attr(not(feature = "std"), no_std)]

//! A result type whose variant is chosen by _tag_ rather than by payload type.
//!
//! ```
//! use tagged_result::{error, value, Result};
//!
//! fn find(key: &str) -> Result<i32, String> {
//!     match key {
//!         "answer" => value(42).into(),
//!         _ => error(String::from("not found")).into(),
//!     }
//! }
//!
//! let found = find("answer");
//! assert!(found.is_value());
//! assert_eq!(found.value_ref(), Some(&42));
//!
//! let missing = find("question");
//! assert!(missing.is_error());
//! assert_eq!(missing.error_ref().map(String::as_str), Some("not found"));
//! ```
//!
//! Since [`value`] and [`error`] produce distinct tag types, the variant is never ambiguous,
//! even when the success and error types are the same:
//! ```
//! use tagged_result::{error, value, Result};
//!
//! let ok: Result<u8, u8> = value(1).into();
//! let err: Result<u8, u8> = error(1).into();
//! assert!(ok.is_value() && err.is_error());
//! ```

/// Hints to the compiler that a branch may never be taken.
///
/// Panics instead when built with `debug_assertions`.
#[macro_export]
#[doc(hidden)]
macro_rules! unreachable_unchecked {
    () => {
        if cfg!(debug_assertions) {
            unreachable!()
        } else {
            core::hint::unreachable_unchecked()
        }
    };
    ($($msg: tt)+) => {
        if cfg!(debug_assertions) {
            unreachable!($($msg)+)
        } else {
            core::hint::unreachable_unchecked()
        }
    };
}

pub mod result;
pub use result::Result;
pub mod tag;
pub use tag::{error, value, ErrorTag, IPayloadOf, ValueTag};
