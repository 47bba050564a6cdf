//! Compiled regex patterns.
//!
//! All patterns are compiled once using `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// Thousands separators, decimal marks and whitespace stripped from counts.
pub static COUNT_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.,\s]").expect("COUNT_SEPARATORS regex"));

/// Leading run of decimal digits.
pub static LEADING_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+").expect("LEADING_DIGITS regex"));
