//! Domain value objects and types.
//!
//! This module contains the value types shared by the formatter and the
//! validator: the digit residue of a raw entry and the dialing code used to
//! pick a validation rule. All of them are constructed fresh per call.

pub mod dialing_code;
pub mod digits;

pub use dialing_code::DialingCode;
pub use digits::{extract_digits, DigitString};
