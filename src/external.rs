//! A C API for parsing and formatting names.
//!
//! Every string returned by these functions must be released with
//! `name_formatter_free_string`, and every record with
//! `name_formatter_free_record`. A null input yields a null output.

extern crate libc;

use self::libc::c_char;
use super::{company, gaelic, NameFormatter, NameRecord};
use std::borrow::Cow;
use std::ffi::{CStr, CString};
use std::ptr;

fn to_char_star<S: Into<Vec<u8>>>(s: S) -> *mut c_char {
    CString::new(s).map_or(ptr::null_mut(), CString::into_raw)
}

fn option_to_char_star(s: Option<&str>) -> *mut c_char {
    s.map_or(ptr::null_mut(), to_char_star)
}

unsafe fn from_char_star<'a>(input: *const c_char) -> Option<Cow<'a, str>> {
    if input.is_null() {
        None
    } else {
        Some(CStr::from_ptr(input).to_string_lossy())
    }
}

#[no_mangle]
pub unsafe extern "C" fn name_formatter_parse(
    input: *const c_char,
    last_name_only: bool,
) -> Option<Box<NameRecord>> {
    let s = from_char_star(input)?;
    let formatter = NameFormatter::new().last_name_only(last_name_only);
    Some(Box::new(formatter.parse_formatted(&s)))
}

#[no_mangle]
pub unsafe extern "C" fn name_formatter_parse_raw(
    input: *const c_char,
    last_name_only: bool,
) -> Option<Box<NameRecord>> {
    let s = from_char_star(input)?;
    let formatter = NameFormatter::new().last_name_only(last_name_only);
    Some(Box::new(formatter.parse(&s)))
}

#[no_mangle]
pub unsafe extern "C" fn name_formatter_format(
    input: *const c_char,
    last_name_only: bool,
) -> *mut c_char {
    match from_char_star(input) {
        Some(s) => to_char_star(NameFormatter::new().last_name_only(last_name_only).format(&s)),
        None => ptr::null_mut(),
    }
}

#[no_mangle]
pub unsafe extern "C" fn name_formatter_is_gaelic(input: *const c_char) -> bool {
    from_char_star(input).map_or(false, |s| gaelic::is_gaelic(&s))
}

#[no_mangle]
pub unsafe extern "C" fn name_formatter_format_gaelic(input: *const c_char) -> *mut c_char {
    match from_char_star(input) {
        Some(s) => to_char_star(gaelic::format(&s)),
        None => ptr::null_mut(),
    }
}

#[no_mangle]
pub unsafe extern "C" fn name_formatter_is_company(input: *const c_char) -> bool {
    from_char_star(input).map_or(false, |s| company::is_company(s.trim()))
}

#[no_mangle]
pub unsafe extern "C" fn name_formatter_free_record(record: *mut NameRecord) {
    if !record.is_null() {
        drop(Box::from_raw(record));
    }
}

#[no_mangle]
pub unsafe extern "C" fn name_formatter_free_string(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}

#[no_mangle]
pub unsafe extern "C" fn name_formatter_prefix(record: &NameRecord) -> *mut c_char {
    option_to_char_star(record.prefix.as_deref())
}

#[no_mangle]
pub unsafe extern "C" fn name_formatter_first_name(record: &NameRecord) -> *mut c_char {
    option_to_char_star(record.first_name.as_deref())
}

#[no_mangle]
pub unsafe extern "C" fn name_formatter_last_name(record: &NameRecord) -> *mut c_char {
    option_to_char_star(record.last_name.as_deref())
}

#[no_mangle]
pub unsafe extern "C" fn name_formatter_suffix(record: &NameRecord) -> *mut c_char {
    option_to_char_star(record.suffix.as_deref())
}

#[no_mangle]
pub unsafe extern "C" fn name_formatter_display(record: &NameRecord) -> *mut c_char {
    to_char_star(record.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    unsafe fn take_string(s: *mut c_char) -> Option<String> {
        if s.is_null() {
            return None;
        }
        let owned = CStr::from_ptr(s).to_string_lossy().into_owned();
        name_formatter_free_string(s);
        Some(owned)
    }

    #[test]
    fn round_trip() {
        let input = CString::new("DR. JD WONG").unwrap();
        unsafe {
            let record = name_formatter_parse(input.as_ptr(), false).unwrap();
            assert_eq!(Some("Dr.".to_string()), take_string(name_formatter_prefix(&record)));
            assert_eq!(Some("Jd".to_string()), take_string(name_formatter_first_name(&record)));
            assert_eq!(Some("Wong".to_string()), take_string(name_formatter_last_name(&record)));
            assert_eq!(None, take_string(name_formatter_suffix(&record)));
            assert_eq!(
                Some("Dr. Jd Wong".to_string()),
                take_string(name_formatter_display(&record))
            );
            name_formatter_free_record(Box::into_raw(record));
        }
    }

    #[test]
    fn gaelic() {
        let input = CString::new("MCCLURE").unwrap();
        unsafe {
            assert!(name_formatter_is_gaelic(input.as_ptr()));
            assert_eq!(
                Some("McClure".to_string()),
                take_string(name_formatter_format_gaelic(input.as_ptr()))
            );
        }
    }

    #[test]
    fn null_input() {
        unsafe {
            assert!(name_formatter_parse(ptr::null(), false).is_none());
            assert!(name_formatter_format(ptr::null(), false).is_null());
            assert!(!name_formatter_is_gaelic(ptr::null()));
            assert!(!name_formatter_is_company(ptr::null()));
        }
    }
}
