// SPDX-FileCopyrightText: 2025 The vita49-rs Authors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
/*!
Data structures and methods related to signal data payloads
(ANSI/VITA-49.2-2017 section 5.3).
*/

use deku::prelude::*;

use crate::packet_header::PacketHeader;
use crate::VitaError;

/// Raw signal data payload. Holds whatever the packet header's size field
/// says is left over after the header, stream ID, class ID and timestamp
/// fields, read as a run of big-endian 32-bit words.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default, DekuRead, DekuWrite)]
#[deku(ctx = "packet_header: &PacketHeader", endian = "big")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SignalData {
    #[deku(count = "packet_header.payload_size_words()")]
    data: Vec<u32>,
}

impl SignalData {
    /// Creates a new, empty signal data payload.
    pub fn new() -> SignalData {
        SignalData::default()
    }

    /// Gets the raw payload bytes.
    ///
    /// # Example
    /// ```
    /// use vita49::prelude::*;
    /// let mut packet = Vrt::new_signal_data_packet();
    /// let signal_data = packet.payload().signal_data().unwrap();
    /// assert_eq!(signal_data.payload_size_bytes(), 0);
    /// ```
    pub fn payload(&self) -> Vec<u8> {
        self.data.iter().flat_map(|w| w.to_be_bytes()).collect()
    }

    /// Sets the raw payload bytes.
    ///
    /// # Errors
    /// Returns [`VitaError::PayloadUneven32BitWords`] if `payload`'s length
    /// isn't a multiple of 4 bytes.
    ///
    /// # Example
    /// ```
    /// use vita49::prelude::*;
    /// let mut packet = Vrt::new_signal_data_packet();
    /// let signal_data_mut = packet.payload_mut().signal_data_mut().unwrap();
    /// signal_data_mut.set_payload(&vec![1, 2, 3, 4]).unwrap();
    /// assert_eq!(signal_data_mut.payload_size_bytes(), 4);
    /// ```
    pub fn set_payload(&mut self, payload: &[u8]) -> Result<(), VitaError> {
        if payload.len() % 4 != 0 {
            return Err(VitaError::PayloadUneven32BitWords);
        }
        self.data = payload
            .chunks_exact(4)
            .map(|c| u32::from_be_bytes([c[0], c[1], c[2], c[3]]))
            .collect();
        Ok(())
    }

    /// Gets the size of the payload in bytes.
    pub fn payload_size_bytes(&self) -> usize {
        self.data.len() * 4
    }

    /// Gets the size of the payload in 32-bit words.
    pub fn size_words(&self) -> u16 {
        self.data.len() as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_get_payload() {
        let mut sig_data = SignalData::new();
        assert_eq!(sig_data.payload_size_bytes(), 0);
        sig_data.set_payload(&[1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        assert_eq!(sig_data.payload_size_bytes(), 8);
        assert_eq!(sig_data.size_words(), 2);
        assert_eq!(sig_data.payload(), vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn rejects_uneven_payload() {
        let mut sig_data = SignalData::new();
        let ret = sig_data.set_payload(&[1, 2, 3, 4, 5, 6, 7]);
        assert!(ret.is_err());
    }
}
