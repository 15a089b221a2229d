// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Origin-point specification parsing.
//!
//! An origin spec is a string of two whitespace-separated tokens such as
//! `"50% 50%"` or `"0 100%"`. Each token is parsed as a float (a trailing
//! `%` is stripped first) and divided by 100, yielding decimal fractions
//! of the reference area: 0 is the left/top edge, 1 the right/bottom edge.
//!
//! Parsing is deliberately permissive: malformed or missing tokens yield
//! NaN fractions that propagate into the normalized result rather than
//! raising an error.

use serde::{Deserialize, Serialize};

/// An origin point as decimal fractions of the reference area.
///
/// Nominally both values lie in [0, 1], but this is not enforced; origins
/// outside the area are meaningful (the normalization denominator still
/// uses the farther edge).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Origin {
    pub x: f64,
    pub y: f64,
}

impl Origin {
    /// The center of the reference area, equivalent to `"50% 50%"`.
    pub const CENTER: Origin = Origin { x: 0.5, y: 0.5 };

    /// Create an origin from decimal fractions.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Parse an origin spec such as `"50% 50%"`, `"0 0"` or `"0 100%"`.
    ///
    /// Never fails: tokens that cannot be parsed (and missing tokens)
    /// come back as NaN on the corresponding axis. Tokens beyond the
    /// first two are ignored.
    pub fn parse(spec: &str) -> Self {
        let mut tokens = spec.split_whitespace();
        let x = parse_fraction(tokens.next());
        let y = parse_fraction(tokens.next());

        if !x.is_finite() || !y.is_finite() {
            log::debug!("origin spec {:?} parsed to non-finite fractions ({}, {})", spec, x, y);
        }

        Self { x, y }
    }
}

impl Default for Origin {
    fn default() -> Self {
        Self::CENTER
    }
}

/// Parse one origin token into a decimal fraction.
///
/// Strips a single trailing `%`, takes the longest numeric prefix of what
/// remains, and divides by 100. Both `"75%"` and the bare `"75"` mean
/// 0.75; a token with no numeric prefix means NaN.
fn parse_fraction(token: Option<&str>) -> f64 {
    let Some(token) = token else {
        return f64::NAN;
    };
    let token = token.strip_suffix('%').unwrap_or(token);
    parse_float_prefix(token) / 100.0
}

/// Parse the longest leading float out of `s`, NaN if there is none.
///
/// Accepts an optional sign, digits with an optional fractional part (or a
/// bare `.5` style fraction), and an optional exponent. Trailing garbage
/// is ignored, so `"12px"` parses as 12.
fn parse_float_prefix(s: &str) -> f64 {
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let int_start = end;
    while bytes.get(end).is_some_and(|b| b.is_ascii_digit()) {
        end += 1;
    }
    let mut has_digits = end > int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(|b| b.is_ascii_digit()) {
            frac_end += 1;
        }
        // A lone dot only counts when digits surround it on some side
        if has_digits || frac_end > frac_start {
            end = frac_end;
            has_digits = true;
        }
    }

    if !has_digits {
        return f64::NAN;
    }

    // Exponent is only consumed when it is complete, so "1e" parses as 1
    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(|b| b.is_ascii_digit()) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse().unwrap_or(f64::NAN)
}
