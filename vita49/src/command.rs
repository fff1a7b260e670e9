// SPDX-FileCopyrightText: 2025 The vita49-rs Authors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
/*!
Data structures and methods related to command payloads
(ANSI/VITA-49.2-2017 section 8).
*/

use core::fmt;

use deku::prelude::*;

use crate::{
    cancellation::Cancellation,
    control::Control,
    control_ack_mode::{ControlAckMode, IdFormat},
    exec_ack::ExecAck,
    packet_header::PacketHeader,
    payload::Payload,
    query_ack::QueryAck,
    validation_ack::ValidationAck,
    VitaError,
};

/// Formats a 128-bit value as a canonical RFC 4122 UUID string
/// (`8-4-4-4-12` lowercase hex, network byte order).
fn uuid_to_string(uuid: u128) -> String {
    let b = uuid.to_be_bytes();
    format!(
        "{:02x}{:02x}{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}{:02x}{:02x}{:02x}{:02x}",
        b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7], b[8], b[9], b[10], b[11], b[12], b[13],
        b[14], b[15]
    )
}

/// Parses a canonical RFC 4122 UUID string (with or without dashes) into
/// its 128-bit network-order value.
///
/// # Errors
/// Returns [`VitaError::OutOfRange`] if `s` isn't 32 hex digits once
/// dashes are stripped.
fn uuid_from_string(s: &str) -> Result<u128, VitaError> {
    let hex: String = s.chars().filter(|c| *c != '-').collect();
    if hex.len() != 32 {
        return Err(VitaError::OutOfRange);
    }
    u128::from_str_radix(&hex, 16).map_err(|_| VitaError::OutOfRange)
}

/// Determines which [`CommandPayload`] variant follows a command packet's
/// CAM, from the packet header's ack/cancellation indicator bits and (for
/// ack packets) the CAM's validation/execution/state bits.
fn command_payload_kind(header: &PacketHeader, cam: ControlAckMode) -> u8 {
    if header.is_cancellation_packet().unwrap_or(false) {
        1
    } else if header.is_ack_packet().unwrap_or(false) {
        if cam.state() {
            4
        } else if cam.execution() {
            3
        } else {
            2
        }
    } else {
        0
    }
}

/// Command sub-payload. A control packet sets fields on a controllee; a
/// cancellation packet cancels a previously sent control packet; the three
/// ACK variants report back whether a control packet's fields were valid
/// ([`CommandPayload::ValidationAck`]), were executed
/// ([`CommandPayload::ExecAck`]), or simply reflect a controllee's current
/// state ([`CommandPayload::QueryAck`]).
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, DekuRead, DekuWrite)]
#[deku(endian = "big", ctx = "cam: ControlAckMode, kind: u8", id = "kind")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CommandPayload {
    /// Sets fields on a controllee.
    #[deku(id = "0")]
    Control(Control),
    /// Cancels a previously sent control packet.
    #[deku(id = "1")]
    Cancellation(Cancellation),
    /// Reports whether a control packet's fields were valid.
    #[deku(id = "2")]
    ValidationAck(#[deku(ctx = "cam")] ValidationAck),
    /// Reports whether a control packet's fields were executed.
    #[deku(id = "3")]
    ExecAck(#[deku(ctx = "cam")] ExecAck),
    /// Reports a controllee's current field state.
    #[deku(id = "4")]
    QueryAck(QueryAck),
}

impl Default for CommandPayload {
    fn default() -> Self {
        CommandPayload::Control(Control::default())
    }
}

impl CommandPayload {
    /// Get the size of the command sub-payload (in 32-bit words).
    pub fn size_words(&self) -> u16 {
        match self {
            CommandPayload::Control(c) => c.size_words(),
            CommandPayload::Cancellation(c) => c.size_words(),
            CommandPayload::ValidationAck(a) => a.size_words(),
            CommandPayload::ExecAck(a) => a.size_words(),
            CommandPayload::QueryAck(a) => a.size_words(),
        }
    }

    /// Get a reference to the control sub-payload.
    ///
    /// # Errors
    /// Returns [`VitaError::ControlOnly`] if this isn't a control packet.
    pub fn control(&self) -> Result<&Control, VitaError> {
        match self {
            CommandPayload::Control(c) => Ok(c),
            _ => Err(VitaError::ControlOnly),
        }
    }
    /// Get a mutable reference to the control sub-payload.
    ///
    /// # Errors
    /// Returns [`VitaError::ControlOnly`] if this isn't a control packet.
    pub fn control_mut(&mut self) -> Result<&mut Control, VitaError> {
        match self {
            CommandPayload::Control(c) => Ok(c),
            _ => Err(VitaError::ControlOnly),
        }
    }

    /// Get a reference to the cancellation sub-payload.
    ///
    /// # Errors
    /// Returns [`VitaError::CancellationOnly`] if this isn't a cancellation
    /// packet.
    pub fn cancellation(&self) -> Result<&Cancellation, VitaError> {
        match self {
            CommandPayload::Cancellation(c) => Ok(c),
            _ => Err(VitaError::CancellationOnly),
        }
    }
    /// Get a mutable reference to the cancellation sub-payload.
    ///
    /// # Errors
    /// Returns [`VitaError::CancellationOnly`] if this isn't a cancellation
    /// packet.
    pub fn cancellation_mut(&mut self) -> Result<&mut Cancellation, VitaError> {
        match self {
            CommandPayload::Cancellation(c) => Ok(c),
            _ => Err(VitaError::CancellationOnly),
        }
    }

    /// Get a reference to the validation ACK sub-payload.
    ///
    /// # Errors
    /// Returns [`VitaError::ValidationAckOnly`] if this isn't a validation
    /// ACK packet.
    pub fn validation_ack(&self) -> Result<&ValidationAck, VitaError> {
        match self {
            CommandPayload::ValidationAck(a) => Ok(a),
            _ => Err(VitaError::ValidationAckOnly),
        }
    }
    /// Get a mutable reference to the validation ACK sub-payload.
    ///
    /// # Errors
    /// Returns [`VitaError::ValidationAckOnly`] if this isn't a validation
    /// ACK packet.
    pub fn validation_ack_mut(&mut self) -> Result<&mut ValidationAck, VitaError> {
        match self {
            CommandPayload::ValidationAck(a) => Ok(a),
            _ => Err(VitaError::ValidationAckOnly),
        }
    }

    /// Get a reference to the execution ACK sub-payload.
    ///
    /// # Errors
    /// Returns [`VitaError::ExecAckOnly`] if this isn't an execution ACK
    /// packet.
    pub fn exec_ack(&self) -> Result<&ExecAck, VitaError> {
        match self {
            CommandPayload::ExecAck(a) => Ok(a),
            _ => Err(VitaError::ExecAckOnly),
        }
    }
    /// Get a mutable reference to the execution ACK sub-payload.
    ///
    /// # Errors
    /// Returns [`VitaError::ExecAckOnly`] if this isn't an execution ACK
    /// packet.
    pub fn exec_ack_mut(&mut self) -> Result<&mut ExecAck, VitaError> {
        match self {
            CommandPayload::ExecAck(a) => Ok(a),
            _ => Err(VitaError::ExecAckOnly),
        }
    }

    /// Get a reference to the query ACK sub-payload.
    ///
    /// # Errors
    /// Returns [`VitaError::QueryAckOnly`] if this isn't a query ACK packet.
    pub fn query_ack(&self) -> Result<&QueryAck, VitaError> {
        match self {
            CommandPayload::QueryAck(a) => Ok(a),
            _ => Err(VitaError::QueryAckOnly),
        }
    }
    /// Get a mutable reference to the query ACK sub-payload.
    ///
    /// # Errors
    /// Returns [`VitaError::QueryAckOnly`] if this isn't a query ACK packet.
    pub fn query_ack_mut(&mut self) -> Result<&mut QueryAck, VitaError> {
        match self {
            CommandPayload::QueryAck(a) => Ok(a),
            _ => Err(VitaError::QueryAckOnly),
        }
    }
}

/// Main command payload structure.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default, DekuRead, DekuWrite)]
#[deku(endian = "big", ctx = "header: &PacketHeader")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Command {
    /// Control acknowledgement mode.
    cam: ControlAckMode,
    /// Message ID.
    message_id: u32,
    #[deku(cond = "cam.controllee_enabled() && cam.controllee_id_format() == IdFormat::Id32bit")]
    /// Controllee ID.
    controllee_id: Option<u32>,
    #[deku(
        cond = "cam.controllee_enabled() && cam.controllee_id_format() == IdFormat::Uuid128bit"
    )]
    /// Controllee UUID.
    controllee_uuid: Option<u128>,
    #[deku(cond = "cam.controller_enabled() && cam.controller_id_format() == IdFormat::Id32bit")]
    /// Controller ID.
    controller_id: Option<u32>,
    #[deku(
        cond = "cam.controller_enabled() && cam.controller_id_format() == IdFormat::Uuid128bit"
    )]
    /// Controller UUID.
    controller_uuid: Option<u128>,
    /// The command's sub-payload: control, cancellation, or one of the
    /// three ACK variants.
    #[deku(ctx = "cam, command_payload_kind(header, cam)")]
    payload: CommandPayload,
}

impl Command {
    /// Create a new, empty control command.
    pub fn new_control() -> Command {
        Command {
            payload: CommandPayload::Control(Control::default()),
            ..Default::default()
        }
    }

    /// Create a new, empty cancellation command.
    pub fn new_cancellation() -> Command {
        Command {
            payload: CommandPayload::Cancellation(Cancellation::default()),
            ..Default::default()
        }
    }

    /// Create a new, empty validation ACK command.
    pub fn new_validation_ack() -> Command {
        let mut cam = ControlAckMode::default();
        cam.set_validation();
        Command {
            cam,
            payload: CommandPayload::ValidationAck(ValidationAck::default()),
            ..Default::default()
        }
    }

    /// Create a new, empty execution ACK command.
    pub fn new_exec_ack() -> Command {
        let mut cam = ControlAckMode::default();
        cam.set_execution();
        Command {
            cam,
            payload: CommandPayload::ExecAck(ExecAck::default()),
            ..Default::default()
        }
    }

    /// Create a new, empty query ACK command.
    pub fn new_query_ack() -> Command {
        let mut cam = ControlAckMode::default();
        cam.set_state();
        Command {
            cam,
            payload: CommandPayload::QueryAck(QueryAck::default()),
            ..Default::default()
        }
    }

    /// Get the packet message ID.
    pub fn message_id(&self) -> u32 {
        self.message_id
    }

    /// Set the packet message ID.
    pub fn set_message_id(&mut self, message_id: u32) {
        self.message_id = message_id;
    }

    /// Get the packet's Control Ack Mode (CAM)
    pub fn cam(&self) -> ControlAckMode {
        self.cam
    }

    /// Set the packet's Control Ack Mode (CAM)
    /// # Example
    /// ```
    /// use vita49::{prelude::*, ControlAckMode, ActionMode};
    /// let mut packet = Vrt::new_control_packet();
    /// let command_mut = packet.payload_mut().command_mut().unwrap();
    /// let mut cam = ControlAckMode::default();
    /// cam.set_action_mode(ActionMode::Execute);
    /// command_mut.set_cam(cam);
    /// assert_eq!(command_mut.cam().action_mode(), ActionMode::Execute);
    /// ````
    pub fn set_cam(&mut self, mode: ControlAckMode) {
        self.cam = mode;
    }

    /// Get a reference to the command's sub-payload.
    pub fn payload(&self) -> &CommandPayload {
        &self.payload
    }
    /// Get a mutable reference to the command's sub-payload.
    pub fn payload_mut(&mut self) -> &mut CommandPayload {
        &mut self.payload
    }

    /// Get the controllee identifier.
    pub fn controllee_id(&self) -> Option<u32> {
        self.controllee_id
    }
    /// Sets the controllee identifier. If `None` is passed, the field
    /// will be unset.
    ///
    /// # Errors
    /// If this function is called while the `controllee_uuid` field is set,
    /// an error will be returned as these fields are mutually exclusive.
    pub fn set_controllee_id(&mut self, id: Option<u32>) -> Result<(), VitaError> {
        if self.controllee_uuid.is_some() {
            return Err(VitaError::TriedIdWhenUuidSet);
        }
        self.controllee_id = id;
        if id.is_some() {
            self.cam.enable_controllee();
            self.cam.set_controllee_id_format(IdFormat::Id32bit);
        } else {
            self.cam.disable_controllee();
            self.cam.set_controllee_id_format(IdFormat::Uuid128bit);
        }
        Ok(())
    }

    /// Get the controller identifier.
    pub fn controller_id(&self) -> Option<u32> {
        self.controller_id
    }
    /// Sets the controller identifier. If `None` is passed, the field
    /// will be unset.
    ///
    /// # Errors
    /// If this function is called while the `controller_uuid` field is set,
    /// an error will be returned as these fields are mutually exclusive.
    pub fn set_controller_id(&mut self, id: Option<u32>) -> Result<(), VitaError> {
        if self.controller_uuid.is_some() {
            return Err(VitaError::TriedIdWhenUuidSet);
        }
        self.controller_id = id;
        if id.is_some() {
            self.cam.enable_controller();
            self.cam.set_controller_id_format(IdFormat::Id32bit);
        } else {
            self.cam.disable_controller();
            self.cam.set_controller_id_format(IdFormat::Uuid128bit);
        }
        Ok(())
    }

    /// Get the controllee UUID.
    pub fn controllee_uuid(&self) -> Option<u128> {
        self.controllee_uuid
    }
    /// Sets the controllee UUID. If `None` is passed, the field
    /// will be unset.
    ///
    /// # Errors
    /// If this function is called while the `controllee_id` field is set,
    /// an error will be returned as these fields are mutually exclusive.
    pub fn set_controllee_uuid(&mut self, uuid: Option<u128>) -> Result<(), VitaError> {
        if self.controllee_id.is_some() {
            return Err(VitaError::TriedUuidWhenIdSet);
        }
        self.controllee_uuid = uuid;
        if uuid.is_some() {
            self.cam.enable_controllee();
            self.cam.set_controllee_id_format(IdFormat::Uuid128bit);
        } else {
            self.cam.disable_controllee();
            self.cam.set_controllee_id_format(IdFormat::Id32bit);
        }
        Ok(())
    }

    /// Gets the controllee UUID formatted as a canonical RFC 4122 UUID
    /// string (e.g. `"550e8400-e29b-41d4-a716-446655440000"`).
    pub fn controllee_uuid_string(&self) -> Option<String> {
        self.controllee_uuid.map(uuid_to_string)
    }
    /// Sets the controllee UUID from a canonical RFC 4122 UUID string
    /// (with or without dashes). See [`Self::set_controllee_uuid`] for the
    /// mutual-exclusion behavior with the controllee ID field.
    ///
    /// # Errors
    /// Returns [`VitaError::OutOfRange`] if `uuid` isn't a valid UUID
    /// string, or any error from [`Self::set_controllee_uuid`].
    pub fn set_controllee_uuid_string(&mut self, uuid: Option<&str>) -> Result<(), VitaError> {
        match uuid {
            Some(s) => self.set_controllee_uuid(Some(uuid_from_string(s)?)),
            None => self.set_controllee_uuid(None),
        }
    }

    /// Get the controller UUID.
    pub fn controller_uuid(&self) -> Option<u128> {
        self.controller_uuid
    }
    /// Gets the controller UUID formatted as a canonical RFC 4122 UUID
    /// string (e.g. `"550e8400-e29b-41d4-a716-446655440000"`).
    pub fn controller_uuid_string(&self) -> Option<String> {
        self.controller_uuid.map(uuid_to_string)
    }
    /// Sets the controller UUID from a canonical RFC 4122 UUID string
    /// (with or without dashes). See [`Self::set_controller_uuid`] for the
    /// mutual-exclusion behavior with the controller ID field.
    ///
    /// # Errors
    /// Returns [`VitaError::OutOfRange`] if `uuid` isn't a valid UUID
    /// string, or any error from [`Self::set_controller_uuid`].
    pub fn set_controller_uuid_string(&mut self, uuid: Option<&str>) -> Result<(), VitaError> {
        match uuid {
            Some(s) => self.set_controller_uuid(Some(uuid_from_string(s)?)),
            None => self.set_controller_uuid(None),
        }
    }
    /// Sets the controller UUID. If `None` is passed, the field
    /// will be unset.
    ///
    /// # Errors
    /// If this function is called while the `controller_id` field is set,
    /// an error will be returned as these fields are mutually exclusive.
    pub fn set_controller_uuid(&mut self, uuid: Option<u128>) -> Result<(), VitaError> {
        if self.controller_id.is_some() {
            return Err(VitaError::TriedUuidWhenIdSet);
        }
        self.controller_uuid = uuid;
        if uuid.is_some() {
            self.cam.enable_controller();
            self.cam.set_controller_id_format(IdFormat::Uuid128bit);
        } else {
            self.cam.disable_controller();
            self.cam.set_controller_id_format(IdFormat::Id32bit);
        }
        Ok(())
    }

    /// Get the size of the command packet (in 32-bit words).
    pub fn size_words(&self) -> u16 {
        let mut ret = self.cam.size_words();
        ret += 1; // message_id
        if self.controllee_id.is_some() {
            ret += 1;
        } else if self.controllee_uuid.is_some() {
            ret += 4;
        }
        if self.controller_id.is_some() {
            ret += 1;
        } else if self.controller_uuid.is_some() {
            ret += 4;
        }
        ret += self.payload.size_words();
        ret
    }
}

impl TryFrom<Payload> for Command {
    type Error = Payload;

    fn try_from(value: Payload) -> Result<Self, Self::Error> {
        match value {
            Payload::Command(c) => Ok(c),
            a => Err(a),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.cam)?;
        writeln!(f, "Message ID: {:x}", self.message_id)?;
        if let Some(cid) = self.controllee_id {
            writeln!(f, "Controllee ID: {:x}", cid)?;
        }
        if let Some(cuuid) = self.controllee_uuid {
            writeln!(f, "Controllee UUID: {:x}", cuuid)?;
        }
        if let Some(cid) = self.controller_id {
            writeln!(f, "Controller ID: {:x}", cid)?;
        }
        if let Some(cuuid) = self.controller_uuid {
            writeln!(f, "Controller UUID: {:x}", cuuid)?;
        }
        match &self.payload {
            CommandPayload::Control(c) => write!(f, "{c}")?,
            CommandPayload::Cancellation(c) => write!(f, "{c}")?,
            CommandPayload::ValidationAck(a) => write!(f, "{a}")?,
            CommandPayload::ExecAck(a) => write!(f, "{a}")?,
            CommandPayload::QueryAck(a) => write!(f, "{a}")?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use crate::{ActionMode, ControlAckMode, IdFormat, Tsf, Tsi};

    #[test]
    fn create_command_packet() {
        let mut packet = Vrt::new_control_packet();
        packet.set_stream_id(Some(0xDEADBEEF));
        packet.set_integer_timestamp(Some(0), Tsi::Utc).unwrap();
        packet
            .set_fractional_timestamp(Some(0), Tsf::SampleCount)
            .unwrap();
        let command = packet.payload_mut().command_mut().unwrap();
        command.set_message_id(123);
        let mut cam = ControlAckMode::default();
        cam.enable_controllee();
        cam.enable_controller();
        cam.set_controllee_id_format(IdFormat::Id32bit);
        cam.set_controller_id_format(IdFormat::Uuid128bit);
        cam.set_action_mode(ActionMode::Execute);
        cam.set_partial_packet_impl_permitted();
        cam.set_warnings_permitted();
        cam.set_validation();
        cam.set_warning();
        cam.set_error();
        command.set_cam(cam);
        command.set_controllee_id(Some(123)).unwrap();
        command.set_controller_uuid(Some(321)).unwrap();

        let control = command.payload_mut().control_mut().unwrap();
        assert_eq!(control.cif0().as_u32(), 0);
        control.set_rf_ref_freq_hz(Some(100e6));
        assert_eq!(control.cif0().as_u32(), 0x800_0000);
        control.set_bandwidth_hz(Some(8e6));
        assert_eq!(control.cif0().as_u32(), 0x2800_0000);
    }

    #[test]
    fn controllee_uuid_string_roundtrip() {
        let mut packet = Vrt::new_control_packet();
        let command = packet.payload_mut().command_mut().unwrap();
        command
            .set_controllee_uuid_string(Some("550e8400-e29b-41d4-a716-446655440000"))
            .unwrap();
        assert_eq!(
            command.controllee_uuid_string().unwrap(),
            "550e8400-e29b-41d4-a716-446655440000"
        );
        assert!(command.set_controllee_id(Some(1)).is_err());
    }

    #[test]
    fn validation_ack_roundtrip_kind() {
        let packet = Vrt::new_validation_ack_packet();
        let command = packet.payload().command().unwrap();
        assert!(command.payload().validation_ack().is_ok());
        assert!(command.payload().exec_ack().is_err());
    }
}
