//! Connection seam
//!
//! The network connection to the player is owned elsewhere; the display only
//! needs to hand it a named packet.

/// Errors a connection may report for a send
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkError {
    /// The player is not connected
    Closed,
    /// The write failed
    Io,
}

/// Packet sink towards the player
///
/// Delivery, retries and reconnects are the implementation's business.
pub trait Connection {
    /// Send one packet on a named channel
    ///
    /// The packet length is `payload.len()`.
    fn send(&mut self, channel: &str, payload: &[u8]) -> Result<(), LinkError>;
}

impl<C: Connection + ?Sized> Connection for &mut C {
    fn send(&mut self, channel: &str, payload: &[u8]) -> Result<(), LinkError> {
        (**self).send(channel, payload)
    }
}
