//! C FFI bindings for compendium-core
//!
//! This crate provides a C-compatible API so a host UI can translate
//! compendium JSON documents without linking against Rust types.

use compendium_core::{LookupTables, Overrides, RecordKind, Translator};
use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::ptr;

/// Opaque handle to a translator
pub struct FfiTranslator {
    inner: Translator,
}

unsafe fn as_str<'a>(s: *const c_char) -> Option<&'a str> {
    if s.is_null() {
        return None;
    }
    CStr::from_ptr(s).to_str().ok()
}

fn into_c_string(s: &str) -> *mut c_char {
    CString::new(s).map(|s| s.into_raw()).unwrap_or(ptr::null_mut())
}

/// Load a translator from a data directory
///
/// # Safety
/// - `data_dir` must be a valid C string
/// - Returns null on error
#[no_mangle]
pub unsafe extern "C" fn cmp_translator_load(data_dir: *const c_char) -> *mut FfiTranslator {
    let Some(dir) = as_str(data_dir) else {
        return ptr::null_mut();
    };

    match LookupTables::load_dir(dir) {
        Ok(tables) => Box::into_raw(Box::new(FfiTranslator {
            inner: Translator::new(tables),
        })),
        Err(_) => ptr::null_mut(),
    }
}

/// Free a translator
///
/// # Safety
/// - `translator` must be a valid pointer returned by `cmp_translator_load` or null
#[no_mangle]
pub unsafe extern "C" fn cmp_translator_free(translator: *mut FfiTranslator) {
    if !translator.is_null() {
        drop(Box::from_raw(translator));
    }
}

/// Replace the translator's overrides with the contents of a JSON file
///
/// # Safety
/// - `translator` must be a valid pointer returned by `cmp_translator_load`
/// - `path` must be a valid C string
/// - Returns false on error, leaving the previous overrides in place
#[no_mangle]
pub unsafe extern "C" fn cmp_load_overrides(
    translator: *mut FfiTranslator,
    path: *const c_char,
) -> bool {
    if translator.is_null() {
        return false;
    }
    let Some(path) = as_str(path) else {
        return false;
    };

    match Overrides::load(path) {
        Ok(overrides) => {
            (*translator).inner.load_overrides(overrides);
            true
        }
        Err(_) => false,
    }
}

/// Get the number of supported languages
///
/// # Safety
/// - `translator` must be a valid pointer returned by `cmp_translator_load`
#[no_mangle]
pub unsafe extern "C" fn cmp_language_count(translator: *const FfiTranslator) -> usize {
    if translator.is_null() {
        return 0;
    }
    (*translator).inner.supported_languages().len()
}

/// Get a supported language by index
///
/// # Safety
/// - `translator` must be a valid pointer returned by `cmp_translator_load`
/// - Returns null if index is out of bounds
/// - Caller must free the returned string with `cmp_free_string`
#[no_mangle]
pub unsafe extern "C" fn cmp_language_name(
    translator: *const FfiTranslator,
    index: usize,
) -> *mut c_char {
    if translator.is_null() {
        return ptr::null_mut();
    }

    (*translator)
        .inner
        .supported_languages()
        .get(index)
        .map(|l| into_c_string(l))
        .unwrap_or(ptr::null_mut())
}

/// Translate a JSON document of the given kind
///
/// # Safety
/// - `translator` must be a valid pointer returned by `cmp_translator_load`
/// - `kind`, `language` and `json` must be valid C strings
/// - Returns null on error
/// - Caller must free the returned string with `cmp_free_string`
#[no_mangle]
pub unsafe extern "C" fn cmp_translate_json(
    translator: *const FfiTranslator,
    kind: *const c_char,
    language: *const c_char,
    json: *const c_char,
) -> *mut c_char {
    if translator.is_null() {
        return ptr::null_mut();
    }
    let (Some(kind), Some(language), Some(json)) =
        (as_str(kind), as_str(language), as_str(json))
    else {
        return ptr::null_mut();
    };
    let Ok(kind) = kind.parse::<RecordKind>() else {
        return ptr::null_mut();
    };

    match (*translator).inner.translate_json(kind, json, language) {
        Ok(out) => into_c_string(&out),
        Err(_) => ptr::null_mut(),
    }
}

/// Free a string returned by other FFI functions
///
/// # Safety
/// - `s` must be a valid pointer returned by a cmp_* function or null
#[no_mangle]
pub unsafe extern "C" fn cmp_free_string(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}
