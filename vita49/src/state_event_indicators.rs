// SPDX-FileCopyrightText: 2025 The vita49-rs Authors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
/*!
Data structures and methods related to the state/event indicators field
(ANSI/VITA-49.2-2017 section 9.10.3). Shares its enable/indicator catalog
with the signal-data trailer (see [`crate::trailer::Trailer`]), plus a
4-bit user-defined field.
*/

use deku::prelude::*;
use std::fmt;

/// Base state/event indicators data structure.
#[derive(
    Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default, DekuRead, DekuWrite,
)]
#[deku(endian = "endian", ctx = "endian: deku::ctx::Endian")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StateEventIndicators(u32);

impl StateEventIndicators {
    fn bit_is_set(&self, bit: u32) -> bool {
        self.0 & (1 << bit) != 0
    }
    fn set_bit(&mut self, bit: u32) {
        self.0 |= 1 << bit;
    }
    fn unset_bit(&mut self, bit: u32) {
        self.0 &= !(1 << bit);
    }

    fn cal_time_enabled(&self) -> bool {
        self.bit_is_set(31)
    }
    fn valid_data_enabled(&self) -> bool {
        self.bit_is_set(30)
    }
    fn reference_lock_enabled(&self) -> bool {
        self.bit_is_set(29)
    }
    fn agc_enabled(&self) -> bool {
        self.bit_is_set(28)
    }
    fn detected_signal_enabled(&self) -> bool {
        self.bit_is_set(27)
    }
    fn spectral_inversion_enabled(&self) -> bool {
        self.bit_is_set(26)
    }
    fn over_range_enabled(&self) -> bool {
        self.bit_is_set(25)
    }
    fn sample_loss_enabled(&self) -> bool {
        self.bit_is_set(24)
    }
    fn user_defined_enabled(&self) -> bool {
        self.bit_is_set(23)
    }

    /// Gets the calibrated time indicator, if enabled.
    pub fn cal_time_indicator(&self) -> Option<bool> {
        self.cal_time_enabled().then(|| self.bit_is_set(19))
    }
    /// Sets the calibrated time indicator.
    pub fn set_cal_time_indicator(&mut self, value: Option<bool>) {
        match value {
            Some(true) => {
                self.set_bit(31);
                self.set_bit(19);
            }
            Some(false) => {
                self.set_bit(31);
                self.unset_bit(19);
            }
            None => {
                self.unset_bit(31);
                self.unset_bit(19);
            }
        }
    }

    /// Gets the valid data indicator, if enabled.
    pub fn valid_data_indicator(&self) -> Option<bool> {
        self.valid_data_enabled().then(|| self.bit_is_set(18))
    }
    /// Sets the valid data indicator.
    pub fn set_valid_data_indicator(&mut self, value: Option<bool>) {
        match value {
            Some(true) => {
                self.set_bit(30);
                self.set_bit(18);
            }
            Some(false) => {
                self.set_bit(30);
                self.unset_bit(18);
            }
            None => {
                self.unset_bit(30);
                self.unset_bit(18);
            }
        }
    }

    /// Gets the reference lock indicator, if enabled.
    pub fn reference_lock_indicator(&self) -> Option<bool> {
        self.reference_lock_enabled().then(|| self.bit_is_set(17))
    }
    /// Sets the reference lock indicator.
    pub fn set_reference_lock_indicator(&mut self, value: Option<bool>) {
        match value {
            Some(true) => {
                self.set_bit(29);
                self.set_bit(17);
            }
            Some(false) => {
                self.set_bit(29);
                self.unset_bit(17);
            }
            None => {
                self.unset_bit(29);
                self.unset_bit(17);
            }
        }
    }

    /// Gets the AGC/MGC indicator, if enabled. `true` means AGC, `false` means MGC.
    pub fn agc_indicator(&self) -> Option<bool> {
        self.agc_enabled().then(|| self.bit_is_set(16))
    }
    /// Sets the AGC/MGC indicator.
    pub fn set_agc_indicator(&mut self, value: Option<bool>) {
        match value {
            Some(true) => {
                self.set_bit(28);
                self.set_bit(16);
            }
            Some(false) => {
                self.set_bit(28);
                self.unset_bit(16);
            }
            None => {
                self.unset_bit(28);
                self.unset_bit(16);
            }
        }
    }

    /// Gets the detected signal indicator, if enabled.
    pub fn detected_signal_indicator(&self) -> Option<bool> {
        self.detected_signal_enabled().then(|| self.bit_is_set(15))
    }
    /// Sets the detected signal indicator.
    pub fn set_detected_signal_indicator(&mut self, value: Option<bool>) {
        match value {
            Some(true) => {
                self.set_bit(27);
                self.set_bit(15);
            }
            Some(false) => {
                self.set_bit(27);
                self.unset_bit(15);
            }
            None => {
                self.unset_bit(27);
                self.unset_bit(15);
            }
        }
    }

    /// Gets the spectral inversion indicator, if enabled.
    pub fn spectral_inversion_indicator(&self) -> Option<bool> {
        self.spectral_inversion_enabled().then(|| self.bit_is_set(14))
    }
    /// Sets the spectral inversion indicator.
    pub fn set_spectral_inversion_indicator(&mut self, value: Option<bool>) {
        match value {
            Some(true) => {
                self.set_bit(26);
                self.set_bit(14);
            }
            Some(false) => {
                self.set_bit(26);
                self.unset_bit(14);
            }
            None => {
                self.unset_bit(26);
                self.unset_bit(14);
            }
        }
    }

    /// Gets the over-range indicator, if enabled.
    pub fn over_range_indicator(&self) -> Option<bool> {
        self.over_range_enabled().then(|| self.bit_is_set(13))
    }
    /// Sets the over-range indicator.
    pub fn set_over_range_indicator(&mut self, value: Option<bool>) {
        match value {
            Some(true) => {
                self.set_bit(25);
                self.set_bit(13);
            }
            Some(false) => {
                self.set_bit(25);
                self.unset_bit(13);
            }
            None => {
                self.unset_bit(25);
                self.unset_bit(13);
            }
        }
    }

    /// Gets the sample loss indicator, if enabled.
    pub fn sample_loss_indicator(&self) -> Option<bool> {
        self.sample_loss_enabled().then(|| self.bit_is_set(12))
    }
    /// Sets the sample loss indicator.
    pub fn set_sample_loss_indicator(&mut self, value: Option<bool>) {
        match value {
            Some(true) => {
                self.set_bit(24);
                self.set_bit(12);
            }
            Some(false) => {
                self.set_bit(24);
                self.unset_bit(12);
            }
            None => {
                self.unset_bit(24);
                self.unset_bit(12);
            }
        }
    }

    /// Gets the 4-bit user-defined state field, if enabled.
    pub fn user_defined(&self) -> Option<u8> {
        self.user_defined_enabled()
            .then(|| ((self.0 >> 8) & 0b1111) as u8)
    }
    /// Sets the 4-bit user-defined state field.
    pub fn set_user_defined(&mut self, value: Option<u8>) {
        match value {
            Some(v) => {
                self.set_bit(23);
                self.0 = (self.0 & !(0b1111 << 8)) | (((v & 0b1111) as u32) << 8);
            }
            None => {
                self.unset_bit(23);
                self.0 &= !(0b1111 << 8);
            }
        }
    }

    /// Gets the size of the field in 32-bit words.
    pub fn size_words(&self) -> u16 {
        (std::mem::size_of_val(self) / std::mem::size_of::<u32>()) as u16
    }
}

impl fmt::Display for StateEventIndicators {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cal_time={:?} valid_data={:?} ref_lock={:?} agc={:?} detected_signal={:?} \
             spectral_inversion={:?} over_range={:?} sample_loss={:?} user_defined={:?}",
            self.cal_time_indicator(),
            self.valid_data_indicator(),
            self.reference_lock_indicator(),
            self.agc_indicator(),
            self.detected_signal_indicator(),
            self.spectral_inversion_indicator(),
            self.over_range_indicator(),
            self.sample_loss_indicator(),
            self.user_defined(),
        )
    }
}
