// SPDX-FileCopyrightText: 2025 The vita49-rs Authors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
/*!
Data structures and methods related to the signal data payload format field
(ANSI/VITA-49.2-2017 section 9.13.3).
*/

use deku::prelude::*;
use std::fmt;

/// Base payload format data structure. Describes how samples are packed
/// into a signal data packet's payload.
#[derive(
    Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default, DekuRead, DekuWrite,
)]
#[deku(endian = "endian", ctx = "endian: deku::ctx::Endian")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PayloadFormat {
    word_1: u32,
    word_2: u32,
}

impl PayloadFormat {
    /// Gets the size of the payload format field in 32-bit words.
    pub fn size_words(&self) -> u16 {
        (std::mem::size_of_val(self) / std::mem::size_of::<u32>()) as u16
    }

    /// True if the payload uses a non-complex, real-only sample format.
    pub fn packing_method_processing_efficient(&self) -> bool {
        self.word_1 & (1 << 31) != 0
    }
    /// Sets the packing method bit.
    pub fn set_packing_method_processing_efficient(&mut self, processing_efficient: bool) {
        if processing_efficient {
            self.word_1 |= 1 << 31;
        } else {
            self.word_1 &= !(1 << 31);
        }
    }

    /// Real/complex type (0 = real, 1 = complex-cartesian, 2 = complex-polar).
    pub fn real_complex_type(&self) -> u8 {
        ((self.word_1 >> 29) & 0b11) as u8
    }
    /// Sets the real/complex type.
    pub fn set_real_complex_type(&mut self, real_complex_type: u8) {
        self.word_1 = (self.word_1 & !(0b11 << 29)) | (((real_complex_type & 0b11) as u32) << 29);
    }

    /// Data item format (5-bit VRT data type enumeration).
    pub fn data_item_format(&self) -> u8 {
        ((self.word_1 >> 24) & 0b1_1111) as u8
    }
    /// Sets the data item format.
    pub fn set_data_item_format(&mut self, data_item_format: u8) {
        self.word_1 = (self.word_1 & !(0b1_1111 << 24)) | (((data_item_format & 0b1_1111) as u32) << 24);
    }

    /// True if a vector of samples repeats per the repeat-count field.
    pub fn repeat_indicator(&self) -> bool {
        self.word_1 & (1 << 23) != 0
    }
    /// Sets the repeat indicator bit.
    pub fn set_repeat_indicator(&mut self, repeat: bool) {
        if repeat {
            self.word_1 |= 1 << 23;
        } else {
            self.word_1 &= !(1 << 23);
        }
    }

    /// Event-tag size, in bits.
    pub fn event_tag_size(&self) -> u8 {
        ((self.word_1 >> 20) & 0b111) as u8
    }
    /// Sets the event-tag size.
    pub fn set_event_tag_size(&mut self, size: u8) {
        self.word_1 = (self.word_1 & !(0b111 << 20)) | (((size & 0b111) as u32) << 20);
    }

    /// Channel-tag size, in bits.
    pub fn channel_tag_size(&self) -> u8 {
        ((self.word_1 >> 16) & 0b1111) as u8
    }
    /// Sets the channel-tag size.
    pub fn set_channel_tag_size(&mut self, size: u8) {
        self.word_1 = (self.word_1 & !(0b1111 << 16)) | (((size & 0b1111) as u32) << 16);
    }

    // Bits 8-15 are reserved

    /// Item-packing field size, in bits (wire value is N-1).
    pub fn item_packing_field_size(&self) -> u8 {
        (((self.word_1 >> 6) & 0b11_1111) + 1) as u8
    }
    /// Sets the item-packing field size, in bits.
    pub fn set_item_packing_field_size(&mut self, size: u8) {
        let encoded = (size.saturating_sub(1) & 0b11_1111) as u32;
        self.word_1 = (self.word_1 & !(0b11_1111 << 6)) | (encoded << 6);
    }

    /// Data-item size, in bits (wire value is N-1).
    pub fn data_item_size(&self) -> u8 {
        ((self.word_1 & 0b11_1111) + 1) as u8
    }
    /// Sets the data-item size, in bits.
    pub fn set_data_item_size(&mut self, size: u8) {
        let encoded = (size.saturating_sub(1) & 0b11_1111) as u32;
        self.word_1 = (self.word_1 & !0b11_1111) | encoded;
    }

    /// Repeat count (wire value is N-1; 1 if the repeat indicator is unset).
    pub fn repeat_count(&self) -> u32 {
        ((self.word_2 >> 16) & 0xFFFF) + 1
    }
    /// Sets the repeat count.
    pub fn set_repeat_count(&mut self, count: u16) {
        let encoded = count.saturating_sub(1) as u32;
        self.word_2 = (self.word_2 & 0x0000_FFFF) | (encoded << 16);
    }

    /// Vector size (wire value is N-1; 1 if the payload contains a single
    /// vector per sample frame).
    pub fn vector_size(&self) -> u32 {
        (self.word_2 & 0xFFFF) + 1
    }
    /// Sets the vector size.
    pub fn set_vector_size(&mut self, size: u16) {
        let encoded = size.saturating_sub(1) as u32;
        self.word_2 = (self.word_2 & 0xFFFF_0000) | encoded;
    }
}

impl fmt::Display for PayloadFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "data item format {}, {} bits/item, {} bits/vector-size-1 ({} repeats)",
            self.data_item_format(),
            self.data_item_size(),
            self.vector_size(),
            self.repeat_count()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packed_word_matches_link_efficient_example() {
        let mut fmt = PayloadFormat::default();
        fmt.set_packing_method_processing_efficient(true);
        fmt.set_real_complex_type(0);
        fmt.set_data_item_format(14); // IEEE 754 single precision
        fmt.set_event_tag_size(1);
        fmt.set_channel_tag_size(2);
        fmt.set_item_packing_field_size(4);
        fmt.set_data_item_size(8);
        fmt.set_repeat_count(0x1234);
        fmt.set_vector_size(0x5678);

        assert_eq!(fmt.word_1, 0x8E1200C7);
        assert_eq!(fmt.word_2, 0x1233_5677);

        assert_eq!(fmt.repeat_count(), 0x1234);
        assert_eq!(fmt.vector_size(), 0x5678);
        assert_eq!(fmt.item_packing_field_size(), 4);
        assert_eq!(fmt.data_item_size(), 8);
    }
}
