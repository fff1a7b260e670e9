// SPDX-FileCopyrightText: 2025 The vita49-rs Authors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
/*!
Data structures and methods related to the formatted GPS format
(ANSI/VITA-49.2-2017 section 9.4.5).
*/

use core::fmt;

use deku::prelude::*;
use fixed::{types::extra::U22, FixedI32};

use crate::packet_header::{Tsf, Tsi};

/// Sentinel value for an unspecified Q9.22 geolocation field.
const UNSPECIFIED: i32 = 0x7FFF_FFFF;
/// Sentinel value for an unspecified integer/fractional timestamp word.
const UNSPECIFIED_TS: u32 = 0xFFFF_FFFF;

/// Base formatted GPS data structure.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, DekuRead, DekuWrite)]
#[deku(endian = "endian", ctx = "endian: deku::ctx::Endian")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormattedGps {
    w1: u32,
    ts1: u32,
    ts2: u32,
    ts3: u32,
    latitude: i32,
    longitude: i32,
    altitude: i32,
    speed_over_ground: i32,
    heading_angle: i32,
    track_angle: i32,
    magnetic_variation: i32,
}

impl Default for FormattedGps {
    fn default() -> Self {
        FormattedGps {
            w1: 0,
            ts1: UNSPECIFIED_TS,
            ts2: UNSPECIFIED_TS,
            ts3: UNSPECIFIED_TS,
            latitude: UNSPECIFIED,
            longitude: UNSPECIFIED,
            altitude: UNSPECIFIED,
            speed_over_ground: UNSPECIFIED,
            heading_angle: UNSPECIFIED,
            track_angle: UNSPECIFIED,
            magnetic_variation: UNSPECIFIED,
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

impl FormattedGps {
    /// Gets the size of the formatted GPS structure in 32-bit words.
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

    /// Gets the latitude, in degrees. Returns `None` if unspecified.
    pub fn latitude_deg(&self) -> Option<f64> {
        get_q9_22(self.latitude)
    }
    /// Sets the latitude, in degrees. Pass `None` to mark unspecified.
    pub fn set_latitude_deg(&mut self, v: Option<f64>) {
        self.latitude = set_q9_22(v);
    }

    /// Gets the longitude, in degrees. Returns `None` if unspecified.
    pub fn longitude_deg(&self) -> Option<f64> {
        get_q9_22(self.longitude)
    }
    /// Sets the longitude, in degrees. Pass `None` to mark unspecified.
    pub fn set_longitude_deg(&mut self, v: Option<f64>) {
        self.longitude = set_q9_22(v);
    }

    /// Gets the altitude, in meters. Returns `None` if unspecified.
    pub fn altitude_m(&self) -> Option<f64> {
        get_q9_22(self.altitude)
    }
    /// Sets the altitude, in meters. Pass `None` to mark unspecified.
    pub fn set_altitude_m(&mut self, v: Option<f64>) {
        self.altitude = set_q9_22(v);
    }

    /// Gets the speed over ground, in meters/second. Returns `None` if
    /// unspecified.
    pub fn speed_over_ground_mps(&self) -> Option<f64> {
        get_q9_22(self.speed_over_ground)
    }
    /// Sets the speed over ground, in meters/second. Pass `None` to mark
    /// unspecified.
    pub fn set_speed_over_ground_mps(&mut self, v: Option<f64>) {
        self.speed_over_ground = set_q9_22(v);
    }

    /// Gets the heading angle, in degrees. Returns `None` if unspecified.
    pub fn heading_angle_deg(&self) -> Option<f64> {
        get_q9_22(self.heading_angle)
    }
    /// Sets the heading angle, in degrees. Pass `None` to mark unspecified.
    pub fn set_heading_angle_deg(&mut self, v: Option<f64>) {
        self.heading_angle = set_q9_22(v);
    }

    /// Gets the track angle, in degrees. Returns `None` if unspecified.
    pub fn track_angle_deg(&self) -> Option<f64> {
        get_q9_22(self.track_angle)
    }
    /// Sets the track angle, in degrees. Pass `None` to mark unspecified.
    pub fn set_track_angle_deg(&mut self, v: Option<f64>) {
        self.track_angle = set_q9_22(v);
    }

    /// Gets the magnetic variation, in degrees. Returns `None` if
    /// unspecified.
    pub fn magnetic_variation_deg(&self) -> Option<f64> {
        get_q9_22(self.magnetic_variation)
    }
    /// Sets the magnetic variation, in degrees. Pass `None` to mark
    /// unspecified.
    pub fn set_magnetic_variation_deg(&mut self, v: Option<f64>) {
        self.magnetic_variation = set_q9_22(v);
    }
}

impl fmt::Display for FormattedGps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Formatted GPS:")?;
        writeln!(f, "  Manufacturer OUI: {:#x}", self.manufacturer_oui())?;
        writeln!(f, "  Latitude: {:?} deg", self.latitude_deg())?;
        writeln!(f, "  Longitude: {:?} deg", self.longitude_deg())?;
        writeln!(f, "  Altitude: {:?} m", self.altitude_m())?;
        writeln!(
            f,
            "  Speed over ground: {:?} m/s",
            self.speed_over_ground_mps()
        )?;
        writeln!(f, "  Heading angle: {:?} deg", self.heading_angle_deg())?;
        writeln!(f, "  Track angle: {:?} deg", self.track_angle_deg())?;
        writeln!(
            f,
            "  Magnetic variation: {:?} deg",
            self.magnetic_variation_deg()
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
        let gps = FormattedGps::default();
        assert_eq!(gps.latitude_deg(), None);
        assert_eq!(gps.integer_timestamp(), None);
        assert_eq!(gps.fractional_timestamp(), None);
    }

    #[test]
    fn set_and_get_position() {
        let mut gps = FormattedGps::default();
        gps.set_tsi(Tsi::Utc);
        gps.set_latitude_deg(Some(38.8895));
        gps.set_longitude_deg(Some(-77.0353));
        assert_eq!(gps.tsi(), Tsi::Utc);
        assert_relative_eq!(gps.latitude_deg().unwrap(), 38.8895, max_relative = 1e-4);
        assert_relative_eq!(gps.longitude_deg().unwrap(), -77.0353, max_relative = 1e-4);
    }
}
