//! Diagnostics produced while parsing.
//!
//! The parser never aborts on malformed input. Every problem it finds is
//! recorded as an [`errors::Error`] carrying:
//!
//! - the specific failure (`ErrorImpl`) and its message
//! - the source position it was found at
//! - an optional suggestion for the user

pub mod errors;
