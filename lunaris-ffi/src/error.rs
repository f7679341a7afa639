// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

/// Status codes returned by lunaris-ffi functions.
///
/// cbindgen:prefix-with-name
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LunarisStatus {
    /// Success.
    Ok = 0,
    /// The calendar fields or the Julian Day are unusable.
    InvalidDate = 1,
    /// The observer's coordinates or atmosphere are out of range.
    InvalidObserver = 2,
    /// A required pointer was null.
    NullPointer = 3,
    /// The output buffer cannot hold the result and its NUL terminator.
    BufferTooSmall = 4,
    /// A panic was caught inside the library.
    Panic = 5,
}

impl From<lunaris::Error> for LunarisStatus {
    fn from(err: lunaris::Error) -> Self {
        log::debug!("{err}");
        match err {
            lunaris::Error::InvalidDate { .. } => LunarisStatus::InvalidDate,
            lunaris::Error::InvalidObserver(_) => LunarisStatus::InvalidObserver,
        }
    }
}
