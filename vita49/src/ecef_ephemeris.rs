// SPDX-FileCopyrightText: 2025 The vita49-rs Authors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
/*!
Data structures and methods related to the ECEF ephemeris format
(ANSI/VITA-49.2-2017 section 9.4.3).
*/

use core::fmt;

use deku::prelude::*;
use fixed::{types::extra::U22, FixedI32};

use crate::packet_header::{Tsf, Tsi};

/// Sentinel value for an unspecified Q9.22 ephemeris field.
const UNSPECIFIED: i32 = 0x7FFF_FFFF;
/// Sentinel value for an unspecified integer/fractional timestamp word.
const UNSPECIFIED_TS: u32 = 0xFFFF_FFFF;

/// Base ECEF ephemeris data structure.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, DekuRead, DekuWrite)]
#[deku(endian = "endian", ctx = "endian: deku::ctx::Endian")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EcefEphemeris {
    w1: u32,
    ts1: u32,
    ts2: u32,
    ts3: u32,
    position_x: i32,
    position_y: i32,
    position_z: i32,
    attitude_alpha: i32,
    attitude_beta: i32,
    attitude_phi: i32,
    velocity_dx: i32,
    velocity_dy: i32,
    velocity_dz: i32,
}

impl Default for EcefEphemeris {
    fn default() -> Self {
        EcefEphemeris {
            w1: 0,
            ts1: UNSPECIFIED_TS,
            ts2: UNSPECIFIED_TS,
            ts3: UNSPECIFIED_TS,
            position_x: UNSPECIFIED,
            position_y: UNSPECIFIED,
            position_z: UNSPECIFIED,
            attitude_alpha: UNSPECIFIED,
            attitude_beta: UNSPECIFIED,
            attitude_phi: UNSPECIFIED,
            velocity_dx: UNSPECIFIED,
            velocity_dy: UNSPECIFIED,
            velocity_dz: UNSPECIFIED,
        }
    }
}

fn get_q9_22(v: i32) -> Option<f64> {
    if v == UNSPECIFIED {
        None
    } else {
        Some(FixedI32::<U22>::from_bits(v).to_num())
    }
}

fn set_q9_22(v: Option<f64>) -> i32 {
    match v {
        Some(v) => FixedI32::<U22>::from_num(v).to_bits(),
        None => UNSPECIFIED,
    }
}

macro_rules! q9_22_field {
    ($field:ident, $get:ident, $set:ident) => {
        #[doc = concat!("Gets the ", stringify!($field), ". Returns `None` if unspecified.")]
        pub fn $get(&self) -> Option<f64> {
            get_q9_22(self.$field)
        }
        #[doc = concat!("Sets the ", stringify!($field), ". Pass `None` to mark unspecified.")]
        pub fn $set(&mut self, v: Option<f64>) {
            self.$field = set_q9_22(v);
        }
    };
}

impl EcefEphemeris {
    /// Gets the size of the ECEF ephemeris field in 32-bit words.
    pub fn size_words(&self) -> u16 {
        (std::mem::size_of_val(self) / std::mem::size_of::<u32>()) as u16
    }

    /// Gets the TimeStamp-Integer (TSI) indicator.
    pub fn tsi(&self) -> Tsi {
        (((self.w1 >> 26) & 0b11) as u8).try_into().unwrap()
    }
    /// Sets the TimeStamp-Integer (TSI) indicator.
    pub fn set_tsi(&mut self, tsi: Tsi) {
        self.w1 = (self.w1 & !(0b11 << 26)) | ((tsi as u32) << 26);
    }

    /// Gets the TimeStamp-Fractional (TSF) indicator.
    pub fn tsf(&self) -> Tsf {
        (((self.w1 >> 24) & 0b11) as u8).try_into().unwrap()
    }
    /// Sets the TimeStamp-Fractional (TSF) indicator.
    pub fn set_tsf(&mut self, tsf: Tsf) {
        self.w1 = (self.w1 & !(0b11 << 24)) | ((tsf as u32) << 24);
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

    /// Gets the integer timestamp seconds. Returns `None` if unspecified.
    pub fn integer_timestamp(&self) -> Option<u32> {
        (self.ts1 != UNSPECIFIED_TS).then_some(self.ts1)
    }
    /// Sets the integer timestamp seconds. Pass `None` to mark unspecified.
    pub fn set_integer_timestamp(&mut self, ts: Option<u32>) {
        self.ts1 = ts.unwrap_or(UNSPECIFIED_TS);
    }

    /// Gets the fractional timestamp. Returns `None` if unspecified.
    pub fn fractional_timestamp(&self) -> Option<u64> {
        if self.ts2 == UNSPECIFIED_TS && self.ts3 == UNSPECIFIED_TS {
            None
        } else {
            Some(((self.ts2 as u64) << 32) | self.ts3 as u64)
        }
    }
    /// Sets the fractional timestamp. Pass `None` to mark unspecified.
    pub fn set_fractional_timestamp(&mut self, ts: Option<u64>) {
        match ts {
            Some(ts) => {
                self.ts2 = (ts >> 32) as u32;
                self.ts3 = ts as u32;
            }
            None => {
                self.ts2 = UNSPECIFIED_TS;
                self.ts3 = UNSPECIFIED_TS;
            }
        }
    }

    q9_22_field!(position_x, position_x_m, set_position_x_m);
    q9_22_field!(position_y, position_y_m, set_position_y_m);
    q9_22_field!(position_z, position_z_m, set_position_z_m);
    q9_22_field!(attitude_alpha, attitude_alpha_deg, set_attitude_alpha_deg);
    q9_22_field!(attitude_beta, attitude_beta_deg, set_attitude_beta_deg);
    q9_22_field!(attitude_phi, attitude_phi_deg, set_attitude_phi_deg);
    q9_22_field!(velocity_dx, velocity_dx_mps, set_velocity_dx_mps);
    q9_22_field!(velocity_dy, velocity_dy_mps, set_velocity_dy_mps);
    q9_22_field!(velocity_dz, velocity_dz_mps, set_velocity_dz_mps);
}

impl fmt::Display for EcefEphemeris {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ECEF ephemeris:")?;
        writeln!(f, "  Manufacturer OUI: {:#x}", self.manufacturer_oui())?;
        writeln!(
            f,
            "  Position (x, y, z): ({:?}, {:?}, {:?}) m",
            self.position_x_m(),
            self.position_y_m(),
            self.position_z_m()
        )?;
        writeln!(
            f,
            "  Attitude (alpha, beta, phi): ({:?}, {:?}, {:?}) deg",
            self.attitude_alpha_deg(),
            self.attitude_beta_deg(),
            self.attitude_phi_deg()
        )?;
        writeln!(
            f,
            "  Velocity (dx, dy, dz): ({:?}, {:?}, {:?}) m/s",
            self.velocity_dx_mps(),
            self.velocity_dy_mps(),
            self.velocity_dz_mps()
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn defaults_are_unspecified() {
        let eph = EcefEphemeris::default();
        assert_eq!(eph.position_x_m(), None);
        assert_eq!(eph.integer_timestamp(), None);
    }

    #[test]
    fn set_and_get_position() {
        let mut eph = EcefEphemeris::default();
        eph.set_tsi(Tsi::Utc);
        eph.set_position_x_m(Some(100.25));
        eph.set_velocity_dx_mps(Some(-12.5));
        assert_eq!(eph.tsi(), Tsi::Utc);
        assert_relative_eq!(eph.position_x_m().unwrap(), 100.25, max_relative = 1e-4);
        assert_relative_eq!(eph.velocity_dx_mps().unwrap(), -12.5, max_relative = 1e-4);
    }
}
