// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! C FFI bindings for **lunaris**: Moon position, phase and rise/transit/set.
//!
//! Every entry point is a flat `extern "C"` function over `#[repr(C)]` data.
//! Fallible calls return a [`LunarisStatus`] and write their result through
//! an out-pointer; panics never cross the boundary.
//!
//! Longitudes passed to [`lunaris_moon_compute`] are **west-positive**, the
//! convention of the historical C interface.  Everything else uses
//! east-positive longitudes.

mod error;
mod format;
mod moon;
mod time;

pub use error::*;
pub use format::*;
pub use moon::*;
pub use time::*;

/// Run `$body`, turning a panic into `$on_panic`.
#[macro_export]
macro_rules! catch_panic {
    ($on_panic:expr, $body:block) => {
        match ::std::panic::catch_unwind(::std::panic::AssertUnwindSafe(|| $body)) {
            Ok(value) => value,
            Err(_) => {
                ::log::debug!("panic caught at the FFI boundary");
                $on_panic
            }
        }
    };
}

/// Returns the lunaris-ffi ABI version (semver-encoded: major*10000 + minor*100 + patch).
#[allow(clippy::erasing_op, clippy::identity_op)]
#[no_mangle]
pub extern "C" fn lunaris_ffi_version() -> u32 {
    0 * 10000 + 1 * 100 + 0 // 0.1.0
}
