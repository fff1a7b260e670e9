// SPDX-FileCopyrightText: 2025 The vita49-rs Authors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::cif7::Cif7Opts;
use crate::command_prelude::*;
use crate::prelude::*;
use crate::{Cif0AckFields, Cif1AckFields, Cif2AckFields, Cif3AckFields};
use deku::prelude::*;
use std::fmt;

/// Execution ACK data structure (ANSI/VITA-49.2-2017 section 8.3.3). Reports
/// whether a prior control packet's fields were actually executed. Shares its
/// wire layout with [`ValidationAck`]: a warning indicator/field chain (WIFn)
/// and an error indicator/field chain (EIFn), present per the command's CAM
/// `warning`/`error` bits.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default, DekuRead, DekuWrite)]
#[deku(endian = "big", ctx = "cam: ControlAckMode")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExecAck {
    #[deku(cond = "cam.warning()")]
    wif0: Option<Cif0>,
    #[deku(cond = "cam.warning() && wif0.is_some_and(|w| w.cif1_enabled())")]
    wif1: Option<Cif1>,
    #[deku(cond = "cam.warning() && wif0.is_some_and(|w| w.cif2_enabled())")]
    wif2: Option<Cif2>,
    #[deku(cond = "cam.warning() && wif0.is_some_and(|w| w.cif3_enabled())")]
    wif3: Option<Cif3>,
    #[deku(cond = "cam.error()")]
    eif0: Option<Cif0>,
    #[deku(cond = "cam.error() && eif0.is_some_and(|w| w.cif1_enabled())")]
    eif1: Option<Cif1>,
    #[deku(cond = "cam.error() && eif0.is_some_and(|w| w.cif2_enabled())")]
    eif2: Option<Cif2>,
    #[deku(cond = "cam.error() && eif0.is_some_and(|w| w.cif3_enabled())")]
    eif3: Option<Cif3>,

    #[deku(
        cond = "cam.warning()",
        ctx = "wif0.as_ref().unwrap(), Cif7Opts::default()"
    )]
    wif0_fields: Option<Cif0AckFields>,
    #[deku(
        cond = "cam.warning() && wif0.is_some_and(|w| w.cif1_enabled())",
        ctx = "wif1.as_ref(), Cif7Opts::default()"
    )]
    wif1_fields: Option<Cif1AckFields>,
    #[deku(
        cond = "cam.warning() && wif0.is_some_and(|w| w.cif2_enabled())",
        ctx = "wif2.as_ref(), Cif7Opts::default()"
    )]
    wif2_fields: Option<Cif2AckFields>,
    #[deku(
        cond = "cam.warning() && wif0.is_some_and(|w| w.cif3_enabled())",
        ctx = "wif3.as_ref(), Cif7Opts::default()"
    )]
    wif3_fields: Option<Cif3AckFields>,

    #[deku(
        cond = "cam.error()",
        ctx = "eif0.as_ref().unwrap(), Cif7Opts::default()"
    )]
    eif0_fields: Option<Cif0AckFields>,
    #[deku(
        cond = "cam.error() && eif0.is_some_and(|w| w.cif1_enabled())",
        ctx = "eif1.as_ref(), Cif7Opts::default()"
    )]
    eif1_fields: Option<Cif1AckFields>,
    #[deku(
        cond = "cam.error() && eif0.is_some_and(|w| w.cif2_enabled())",
        ctx = "eif2.as_ref(), Cif7Opts::default()"
    )]
    eif2_fields: Option<Cif2AckFields>,
    #[deku(
        cond = "cam.error() && eif0.is_some_and(|w| w.cif3_enabled())",
        ctx = "eif3.as_ref(), Cif7Opts::default()"
    )]
    eif3_fields: Option<Cif3AckFields>,
}

impl ExecAck {
    /// Get the size of the execution ACK (in 32-bit words).
    pub fn size_words(&self) -> u16 {
        let mut ret = 0;
        if let Some(f) = &self.wif0_fields {
            ret += 1 + f.size_words();
        }
        if let Some(f) = &self.wif1_fields {
            ret += 1 + f.size_words();
        }
        if let Some(f) = &self.wif2_fields {
            ret += 1 + f.size_words();
        }
        if let Some(f) = &self.wif3_fields {
            ret += 1 + f.size_words();
        }
        if let Some(f) = &self.eif0_fields {
            ret += 1 + f.size_words();
        }
        if let Some(f) = &self.eif1_fields {
            ret += 1 + f.size_words();
        }
        if let Some(f) = &self.eif2_fields {
            ret += 1 + f.size_words();
        }
        if let Some(f) = &self.eif3_fields {
            ret += 1 + f.size_words();
        }
        ret
    }
}

impl Cif0AckManipulators for ExecAck {
    fn wif0(&self) -> Option<&Cif0> {
        self.wif0.as_ref()
    }
    fn wif0_mut(&mut self) -> &mut Option<Cif0> {
        &mut self.wif0
    }
    fn wif0_fields(&self) -> Option<&Cif0AckFields> {
        self.wif0_fields.as_ref()
    }
    fn wif0_fields_mut(&mut self) -> &mut Option<Cif0AckFields> {
        &mut self.wif0_fields
    }
    fn eif0(&self) -> Option<&Cif0> {
        self.eif0.as_ref()
    }
    fn eif0_mut(&mut self) -> &mut Option<Cif0> {
        &mut self.eif0
    }
    fn eif0_fields(&self) -> Option<&Cif0AckFields> {
        self.eif0_fields.as_ref()
    }
    fn eif0_fields_mut(&mut self) -> &mut Option<Cif0AckFields> {
        &mut self.eif0_fields
    }
}

impl Cif1AckManipulators for ExecAck {
    fn wif0(&self) -> Option<&Cif0> {
        self.wif0.as_ref()
    }
    fn wif0_mut(&mut self) -> &mut Option<Cif0> {
        &mut self.wif0
    }
    fn wif0_fields(&self) -> Option<&Cif0AckFields> {
        self.wif0_fields.as_ref()
    }
    fn wif0_fields_mut(&mut self) -> &mut Option<Cif0AckFields> {
        &mut self.wif0_fields
    }
    fn eif0(&self) -> Option<&Cif0> {
        self.eif0.as_ref()
    }
    fn eif0_mut(&mut self) -> &mut Option<Cif0> {
        &mut self.eif0
    }
    fn eif0_fields(&self) -> Option<&Cif0AckFields> {
        self.eif0_fields.as_ref()
    }
    fn eif0_fields_mut(&mut self) -> &mut Option<Cif0AckFields> {
        &mut self.eif0_fields
    }
    fn wif1(&self) -> Option<&Cif1> {
        self.wif1.as_ref()
    }
    fn wif1_mut(&mut self) -> &mut Option<Cif1> {
        &mut self.wif1
    }
    fn wif1_fields(&self) -> Option<&Cif1AckFields> {
        self.wif1_fields.as_ref()
    }
    fn wif1_fields_mut(&mut self) -> &mut Option<Cif1AckFields> {
        &mut self.wif1_fields
    }
    fn eif1(&self) -> Option<&Cif1> {
        self.eif1.as_ref()
    }
    fn eif1_mut(&mut self) -> &mut Option<Cif1> {
        &mut self.eif1
    }
    fn eif1_fields(&self) -> Option<&Cif1AckFields> {
        self.eif1_fields.as_ref()
    }
    fn eif1_fields_mut(&mut self) -> &mut Option<Cif1AckFields> {
        &mut self.eif1_fields
    }
}

impl Cif2AckManipulators for ExecAck {
    fn wif0(&self) -> Option<&Cif0> {
        self.wif0.as_ref()
    }
    fn wif0_mut(&mut self) -> &mut Option<Cif0> {
        &mut self.wif0
    }
    fn wif0_fields(&self) -> Option<&Cif0AckFields> {
        self.wif0_fields.as_ref()
    }
    fn wif0_fields_mut(&mut self) -> &mut Option<Cif0AckFields> {
        &mut self.wif0_fields
    }
    fn eif0(&self) -> Option<&Cif0> {
        self.eif0.as_ref()
    }
    fn eif0_mut(&mut self) -> &mut Option<Cif0> {
        &mut self.eif0
    }
    fn eif0_fields(&self) -> Option<&Cif0AckFields> {
        self.eif0_fields.as_ref()
    }
    fn eif0_fields_mut(&mut self) -> &mut Option<Cif0AckFields> {
        &mut self.eif0_fields
    }
    fn wif2(&self) -> Option<&Cif2> {
        self.wif2.as_ref()
    }
    fn wif2_mut(&mut self) -> &mut Option<Cif2> {
        &mut self.wif2
    }
    fn wif2_fields(&self) -> Option<&Cif2AckFields> {
        self.wif2_fields.as_ref()
    }
    fn wif2_fields_mut(&mut self) -> &mut Option<Cif2AckFields> {
        &mut self.wif2_fields
    }
    fn eif2(&self) -> Option<&Cif2> {
        self.eif2.as_ref()
    }
    fn eif2_mut(&mut self) -> &mut Option<Cif2> {
        &mut self.eif2
    }
    fn eif2_fields(&self) -> Option<&Cif2AckFields> {
        self.eif2_fields.as_ref()
    }
    fn eif2_fields_mut(&mut self) -> &mut Option<Cif2AckFields> {
        &mut self.eif2_fields
    }
}

impl Cif3AckManipulators for ExecAck {
    fn wif0(&self) -> Option<&Cif0> {
        self.wif0.as_ref()
    }
    fn wif0_mut(&mut self) -> &mut Option<Cif0> {
        &mut self.wif0
    }
    fn wif0_fields(&self) -> Option<&Cif0AckFields> {
        self.wif0_fields.as_ref()
    }
    fn wif0_fields_mut(&mut self) -> &mut Option<Cif0AckFields> {
        &mut self.wif0_fields
    }
    fn eif0(&self) -> Option<&Cif0> {
        self.eif0.as_ref()
    }
    fn eif0_mut(&mut self) -> &mut Option<Cif0> {
        &mut self.eif0
    }
    fn eif0_fields(&self) -> Option<&Cif0AckFields> {
        self.eif0_fields.as_ref()
    }
    fn eif0_fields_mut(&mut self) -> &mut Option<Cif0AckFields> {
        &mut self.eif0_fields
    }
    fn wif3(&self) -> Option<&Cif3> {
        self.wif3.as_ref()
    }
    fn wif3_mut(&mut self) -> &mut Option<Cif3> {
        &mut self.wif3
    }
    fn wif3_fields(&self) -> Option<&Cif3AckFields> {
        self.wif3_fields.as_ref()
    }
    fn wif3_fields_mut(&mut self) -> &mut Option<Cif3AckFields> {
        &mut self.wif3_fields
    }
    fn eif3(&self) -> Option<&Cif3> {
        self.eif3.as_ref()
    }
    fn eif3_mut(&mut self) -> &mut Option<Cif3> {
        &mut self.eif3
    }
    fn eif3_fields(&self) -> Option<&Cif3AckFields> {
        self.eif3_fields.as_ref()
    }
    fn eif3_fields_mut(&mut self) -> &mut Option<Cif3AckFields> {
        &mut self.eif3_fields
    }
}

impl fmt::Display for ExecAck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Execution ACK:")?;
        if let Some(w) = &self.wif0 {
            writeln!(f, "  WIF0: {w}")?;
        }
        if let Some(e) = &self.eif0 {
            writeln!(f, "  EIF0: {e}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_get_warning() {
        let mut ack = ExecAck::default();
        ack.set_gain(AckLevel::Warning, Some(AckResponse::default()));
        assert!(ack.wif0().unwrap().gain());
        let (level, _response) = ack.gain().unwrap();
        assert_eq!(level, AckLevel::Warning);
    }

    #[test]
    fn nested_cif_chain_toggles_parent_enable_bit() {
        let mut ack = ExecAck::default();
        ack.set_phase_offset(AckLevel::Warning, Some(AckResponse::default()));
        assert!(ack.wif0().unwrap().cif1_enabled());
        ack.set_phase_offset(AckLevel::Warning, None);
        assert!(ack.wif1().is_none());
    }
}
