// SPDX-FileCopyrightText: 2025 The vita49-rs Authors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
/*!
Data structures and methods related to the ASCII GPS format
(ANSI/VITA-49.2-2017 section 9.4.7).
*/

use core::fmt;

use deku::prelude::*;

use crate::VitaError;

/// Base ASCII GPS data structure. Carries a manufacturer OUI/formatter
/// word followed by a sentence packed 4 ASCII characters per 32-bit word,
/// big-endian, NUL-padded to the word boundary.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default, DekuRead, DekuWrite)]
#[deku(endian = "endian", ctx = "endian: deku::ctx::Endian")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GpsAscii {
    w1: u32,
    num_words: u32,
    #[deku(count = "num_words")]
    ascii: Vec<u32>,
}

impl GpsAscii {
    /// Gets the size of the ASCII GPS field in 32-bit words.
    pub fn size_words(&self) -> u16 {
        (((std::mem::size_of_val(&self.w1) + std::mem::size_of_val(&self.num_words))
            / std::mem::size_of::<u32>())
            + self.num_words as usize) as u16
    }

    /// Gets the manufacturer Organizational Unique Identifier (OUI).
    pub fn manufacturer_oui(&self) -> u32 {
        self.w1 & 0xFF_FFFF
    }
    /// Sets the manufacturer Organizational Unique Identifier (OUI).
    ///
    /// Note: while this API takes a 32-bit integer, only the least
    /// significant 24 bits are used.
    pub fn set_manufacturer_oui(&mut self, oui: u32) {
        self.w1 = (self.w1 & !0xFF_FFFF) | (oui & 0xFF_FFFF);
    }

    /// Decodes the packed sentence as a UTF-8 string, trimming the
    /// trailing NUL padding.
    ///
    /// # Errors
    /// Returns [`VitaError::AsciiDecode`] if the packed bytes aren't valid
    /// UTF-8.
    pub fn sentence(&self) -> Result<String, VitaError> {
        let mut bytes = Vec::with_capacity(self.ascii.len() * 4);
        for word in &self.ascii {
            bytes.extend_from_slice(&word.to_be_bytes());
        }
        while bytes.last() == Some(&0) {
            bytes.pop();
        }
        String::from_utf8(bytes).map_err(|_| VitaError::AsciiDecode)
    }

    /// Packs `sentence` 4 ASCII characters per word, big-endian, NUL-padded
    /// to the word boundary, and updates the word count.
    ///
    /// # Errors
    /// Returns [`VitaError::AsciiDecode`] if `sentence` isn't ASCII.
    pub fn set_sentence(&mut self, sentence: &str) -> Result<(), VitaError> {
        if !sentence.is_ascii() {
            return Err(VitaError::AsciiDecode);
        }
        let mut bytes = sentence.as_bytes().to_vec();
        while bytes.len() % 4 != 0 {
            bytes.push(0);
        }
        self.ascii = bytes
            .chunks_exact(4)
            .map(|c| u32::from_be_bytes([c[0], c[1], c[2], c[3]]))
            .collect();
        self.num_words = self.ascii.len() as u32;
        Ok(())
    }
}

impl fmt::Display for GpsAscii {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "GPS ASCII:")?;
        writeln!(f, "  Manufacturer OUI: {:#x}", self.manufacturer_oui())?;
        match self.sentence() {
            Ok(s) => writeln!(f, "  Sentence: {s}")?,
            Err(_) => writeln!(f, "  Sentence: <invalid ASCII>")?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_sentence() {
        let mut gps = GpsAscii::default();
        gps.set_sentence("$GPGGA,hello").unwrap();
        assert_eq!(gps.sentence().unwrap(), "$GPGGA,hello");
        assert_eq!(gps.num_words, 3);
    }

    #[test]
    fn rejects_non_ascii() {
        let mut gps = GpsAscii::default();
        assert!(gps.set_sentence("caf\u{e9}").is_err());
    }
}
