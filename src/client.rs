use async_trait::async_trait;

use crate::error::PlcError;

/// The operation set every protocol backend must provide.
///
/// Wire-level codecs (MC frame assembly, S7 handshakes, checksums) live
/// entirely behind this trait; the session layer only selects, configures and
/// drives one instance of an implementation. Register strings ("M100",
/// "D100", "X1", ...) are opaque here; their meaning is the backend's
/// business.
///
/// Write acknowledgments are advisory: the session layer never trusts a
/// write's `Ok(())` and always confirms with an independent read-back.
#[async_trait]
pub trait ProtocolClient: Send {
    /// Establish the transport connection. Called exactly once, by the
    /// session that owns this client, during session construction.
    async fn connect(&mut self) -> Result<(), PlcError>;

    async fn read_bool(&mut self, register: &str) -> Result<bool, PlcError>;
    async fn read_int16(&mut self, register: &str) -> Result<i16, PlcError>;
    async fn read_int32(&mut self, register: &str) -> Result<i32, PlcError>;

    async fn write_bool(&mut self, register: &str, value: bool) -> Result<(), PlcError>;
    async fn write_int16(&mut self, register: &str, value: i16) -> Result<(), PlcError>;
    async fn write_int32(&mut self, register: &str, value: i32) -> Result<(), PlcError>;
}
