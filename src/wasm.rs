//! Expose the `inline-diff` crate's functionality to WebAssembly.
use wasm_bindgen::prelude::*;

use crate::{AlignError, AlignmentOptions, LeftRightFormat};

#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc<'_> = wee_alloc::WeeAlloc::INIT;

/// WASM wrapper around `crate::compare_with_options`.
///
/// # Arguments
///
/// - `left`, `right`: The strings to compare.
/// - `matching_pad_len`: Matching characters kept next to the outermost
///   differences, `0` keeps everything.
/// - `min_substr_len`: Shared substrings must be longer than this to be shown
///   as common text.
/// - `left_right_format`: Template with two `%s` holes, defaults to
///   `<(%s/%s)>`.
///
/// # Errors
///
/// If `left_right_format` doesn't have exactly two holes.
#[wasm_bindgen(js_name = compare)]
pub fn compare(
    left: &str,
    right: &str,
    matching_pad_len: usize,
    min_substr_len: usize,
    left_right_format: Option<String>,
) -> Result<String, JsValue> {
    set_panic_hook();

    let options = build_options(matching_pad_len, min_substr_len, left_right_format)?;
    Ok(crate::compare_with_options(left, right, &options))
}

/// WASM wrapper around `crate::compare_bytes`, takes the same options as
/// `compare`.
///
/// # Errors
///
/// If either input isn't valid UTF-8 or `left_right_format` is invalid.
#[wasm_bindgen(js_name = compareBytes)]
pub fn compare_bytes(
    left: &[u8],
    right: &[u8],
    matching_pad_len: usize,
    min_substr_len: usize,
    left_right_format: Option<String>,
) -> Result<String, JsValue> {
    set_panic_hook();

    let options = build_options(matching_pad_len, min_substr_len, left_right_format)?;
    Ok(crate::compare_bytes(left, right, &options)?)
}

fn build_options(
    matching_pad_len: usize,
    min_substr_len: usize,
    left_right_format: Option<String>,
) -> Result<AlignmentOptions, AlignError> {
    let left_right_format = match left_right_format {
        Some(template) => LeftRightFormat::try_from(template)?,
        None => LeftRightFormat::default(),
    };

    Ok(AlignmentOptions::new(
        matching_pad_len,
        min_substr_len,
        left_right_format,
    ))
}

fn set_panic_hook() {
    // https://github.com/rustwasm/console_error_panic_hook#readme
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

impl From<AlignError> for JsValue {
    fn from(error: AlignError) -> Self { JsValue::from_str(&error.to_string()) }
}
