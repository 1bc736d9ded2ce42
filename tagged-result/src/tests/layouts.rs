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

use core::num::{NonZeroU16, NonZeroU32, NonZeroU8};

use crate::Result;

#[test]
fn layouts() {
    macro_rules! test {
        () => {};
        (($ok: ty, $err: ty)) => {
            assert_eq!(
                core::mem::size_of::<Result<$ok, $err>>(),
                core::mem::size_of::<core::result::Result<$ok, $err>>(),
                "Size mismatch for Result<{}, {}>",
                core::any::type_name::<$ok>(),
                core::any::type_name::<$err>()
            );
            assert_eq!(
                core::mem::align_of::<Result<$ok, $err>>(),
                core::mem::align_of::<core::result::Result<$ok, $err>>(),
                "Align mismatch for Result<{}, {}>",
                core::any::type_name::<$ok>(),
                core::any::type_name::<$err>()
            );
        };
        ($t: tt, $($tt: tt)*) => {
            test!($t);
            test!($($tt)*);
        };
    }

    test!(
        (u8, u8),
        (u32, ()),
        (NonZeroU32, ()),
        ((), NonZeroU8),
        (NonZeroU16, NonZeroU16),
        (bool, u64),
        (&'static str, String),
        (Box<u8>, ()),
        (Vec<u8>, Box<str>),
        (*const u8, *mut u8),
        (Result<u8, ()>, Result<(), u8>),
    );
}

#[test]
fn niches() {
    assert_eq!(core::mem::size_of::<Result<NonZeroU32, ()>>(), 4);
    assert_eq!(core::mem::size_of::<Result<Box<u8>, ()>>(), core::mem::size_of::<usize>());
    assert_eq!(core::mem::size_of::<Result<u8, u8>>(), 2);
    assert_eq!(
        core::mem::size_of::<Option<Result<NonZeroU32, ()>>>(),
        core::mem::size_of::<Option<core::result::Result<NonZeroU32, ()>>>()
    );
}
