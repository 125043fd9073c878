//! A C API for interacting with `NameContext` objects.
//!
//! Strings returned by these functions are owned by the caller and must be
//! released with `human_namecase_free_string`. Contexts are released with
//! `human_namecase_free_context`.

extern crate libc;

use self::libc::c_char;
use super::{namejoin, Mode, NameContext};
use std::ffi::{CStr, CString};
use std::mem;
use std::ptr;

// Interior NULs can't cross the boundary; they come back as a null pointer
macro_rules! str_to_char_star {
    ($str:expr) => {
        match CString::new($str) {
            Ok(s) => s.into_raw() as *const c_char,
            Err(_) => ptr::null(),
        }
    };
}

unsafe fn optional_str<'a>(input: *const c_char) -> Option<std::borrow::Cow<'a, str>> {
    if input.is_null() {
        None
    } else {
        Some(CStr::from_ptr(input).to_string_lossy())
    }
}

#[no_mangle]
pub extern "C" fn human_namecase_new_context() -> Box<NameContext> {
    Box::new(NameContext::new())
}

#[no_mangle]
pub unsafe extern "C" fn human_namecase_free_context(context_ptr: *mut NameContext) {
    mem::drop(Box::from_raw(context_ptr));
}

#[no_mangle]
pub unsafe extern "C" fn human_namecase_free_string(str_ptr: *mut c_char) {
    mem::drop(CString::from_raw(str_ptr));
}

#[no_mangle]
pub unsafe extern "C" fn human_namecase_reset(context: &mut NameContext) {
    context.reset();
}

#[no_mangle]
pub unsafe extern "C" fn human_namecase_namecase(
    context: &NameContext,
    input: *const c_char,
) -> *const c_char {
    let s = CStr::from_ptr(input).to_string_lossy();
    str_to_char_star!(context.namecase(&s, Mode::Full, None))
}

#[no_mangle]
pub unsafe extern "C" fn human_namecase_gnamecase(
    context: &NameContext,
    input: *const c_char,
) -> *const c_char {
    let s = CStr::from_ptr(input).to_string_lossy();
    str_to_char_star!(context.gnamecase(&s))
}

/// `given_names` may be null
#[no_mangle]
pub unsafe extern "C" fn human_namecase_fnamecase(
    context: &NameContext,
    input: *const c_char,
    given_names: *const c_char,
) -> *const c_char {
    let s = CStr::from_ptr(input).to_string_lossy();
    let given_names = optional_str(given_names);
    str_to_char_star!(context.fnamecase(&s, given_names.as_deref()))
}

#[no_mangle]
pub unsafe extern "C" fn human_namecase_namesplit(
    context: &NameContext,
    input: *const c_char,
) -> *const c_char {
    let s = CStr::from_ptr(input).to_string_lossy();
    str_to_char_star!(context.namesplit(&s))
}

#[no_mangle]
pub unsafe extern "C" fn human_namecase_namecase_exception(
    context: &mut NameContext,
    input: *const c_char,
) -> bool {
    let s = CStr::from_ptr(input).to_string_lossy();
    context.namecase_exception(&s)
}

#[no_mangle]
pub unsafe extern "C" fn human_namecase_namesplit_exception(
    context: &mut NameContext,
    input: *const c_char,
) -> bool {
    let s = CStr::from_ptr(input).to_string_lossy();
    context.namesplit_exception(&s)
}

/// Either argument may be null. Returns null if both are.
#[no_mangle]
pub unsafe extern "C" fn human_namecase_namejoin(
    family: *const c_char,
    given: *const c_char,
) -> *const c_char {
    let family = optional_str(family);
    let given = optional_str(given);
    match namejoin(family.as_deref(), given.as_deref()) {
        Some(joined) => str_to_char_star!(joined),
        None => ptr::null(),
    }
}
