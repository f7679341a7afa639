// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Sexagesimal formatting into caller-owned buffers.

use crate::catch_panic;
use crate::error::LunarisStatus;
use qtty::Degrees;
use std::ffi::c_char;

/// Copy `text` plus a NUL terminator into `buf`.
///
/// # Safety
/// `buf` must be valid for `len` writable bytes.
unsafe fn write_c_str(text: &str, buf: *mut c_char, len: usize) -> LunarisStatus {
    let bytes = text.as_bytes();
    if bytes.len() + 1 > len {
        return LunarisStatus::BufferTooSmall;
    }
    let dst = unsafe { std::slice::from_raw_parts_mut(buf.cast::<u8>(), len) };
    dst[..bytes.len()].copy_from_slice(bytes);
    dst[bytes.len()] = 0;
    LunarisStatus::Ok
}

/// Write `D° M' S.s"` for an angle in degrees.
///
/// # Safety
/// `buf` must be valid for `len` writable bytes.
#[no_mangle]
pub unsafe extern "C" fn lunaris_format_dms(
    degrees: f64,
    precision: u32,
    buf: *mut c_char,
    len: usize,
) -> LunarisStatus {
    catch_panic!(LunarisStatus::Panic, {
        if buf.is_null() {
            return LunarisStatus::NullPointer;
        }
        let text = lunaris::to_dms(Degrees::new(degrees), precision as usize);
        unsafe { write_c_str(&text, buf, len) }
    })
}

/// Write `Hh Mm S.ss` for an angle in degrees.
///
/// # Safety
/// `buf` must be valid for `len` writable bytes.
#[no_mangle]
pub unsafe extern "C" fn lunaris_format_hms(
    degrees: f64,
    precision: u32,
    buf: *mut c_char,
    len: usize,
) -> LunarisStatus {
    catch_panic!(LunarisStatus::Panic, {
        if buf.is_null() {
            return LunarisStatus::NullPointer;
        }
        let text = lunaris::to_hms(Degrees::new(degrees), precision as usize);
        unsafe { write_c_str(&text, buf, len) }
    })
}

/// [`lunaris_format_dms`] with minutes and whole seconds zero-padded to
/// `width` digits.
///
/// # Safety
/// `buf` must be valid for `len` writable bytes.
#[no_mangle]
pub unsafe extern "C" fn lunaris_format_dms_padded(
    degrees: f64,
    precision: u32,
    width: u32,
    buf: *mut c_char,
    len: usize,
) -> LunarisStatus {
    catch_panic!(LunarisStatus::Panic, {
        if buf.is_null() {
            return LunarisStatus::NullPointer;
        }
        let text =
            lunaris::to_dms_padded(Degrees::new(degrees), precision as usize, width as usize);
        unsafe { write_c_str(&text, buf, len) }
    })
}

/// [`lunaris_format_hms`] with minutes and whole seconds zero-padded to
/// `width` digits.
///
/// # Safety
/// `buf` must be valid for `len` writable bytes.
#[no_mangle]
pub unsafe extern "C" fn lunaris_format_hms_padded(
    degrees: f64,
    precision: u32,
    width: u32,
    buf: *mut c_char,
    len: usize,
) -> LunarisStatus {
    catch_panic!(LunarisStatus::Panic, {
        if buf.is_null() {
            return LunarisStatus::NullPointer;
        }
        let text =
            lunaris::to_hms_padded(Degrees::new(degrees), precision as usize, width as usize);
        unsafe { write_c_str(&text, buf, len) }
    })
}
