// SPDX-FileCopyrightText: 2025 The vita49-rs Authors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
/*!
Types shared by the acknowledgment (ValidationAck/ExecAck/QueryAck) command
payloads (ANSI/VITA-49.2-2017 section 8.3).
*/

use core::fmt;

/// Severity at which a CIF field acknowledgment is reported.
///
/// A controllee packs its response to a given control field into one of two
/// parallel indicator/field structures: the "warning" set (WIFn) or the
/// "error" set (EIFn). A field may be mirrored into both if it produced a
/// warning that later escalated, but in practice only one level is ever set
/// for a given field on a given ack.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum AckLevel {
    /// The field is reported in the warning (WIFn) indicator/field set.
    Warning,
    /// The field is reported in the error (EIFn) indicator/field set.
    Error,
}

impl fmt::Display for AckLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AckLevel::Warning => write!(f, "Warning"),
            AckLevel::Error => write!(f, "Error"),
        }
    }
}
