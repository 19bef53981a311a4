//! Outbound update requests and inbound message keys.

/// Inbound field keys understood by the board.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MessageKey {
    StopData,
    ArrivalData,
}

impl MessageKey {
    pub const fn code(self) -> u32 {
        match self {
            Self::StopData => 0,
            Self::ArrivalData => 1,
        }
    }
}

impl TryFrom<u32> for MessageKey {
    type Error = UnknownKey;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::StopData),
            1 => Ok(Self::ArrivalData),
            other => Err(UnknownKey(other)),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct UnknownKey(pub u32);

/// Fields of an outbound refresh request. Serialization belongs to the
/// host transport.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct UpdateRequest {
    pub stop_id: i32,
    pub refresh_stop_list: bool,
}

/// Message port the host implements to reach the feed service.
pub trait TransportPort {
    type Error;

    fn request_update(&mut self, request: UpdateRequest) -> Result<(), Self::Error>;
}

/// No-network port used during bring-up.
#[derive(Default, Debug, Clone, Copy)]
pub struct NullTransport;

impl NullTransport {
    pub const fn new() -> Self {
        Self
    }
}

impl TransportPort for NullTransport {
    type Error = core::convert::Infallible;

    fn request_update(&mut self, _request: UpdateRequest) -> Result<(), Self::Error> {
        Ok(())
    }
}
