//! In-process mock protocol client and factory.
//!
//! Lets applications exercise the full session layer (connection lifecycle,
//! read sentinels, write verification, operation logging) without hardware.
//! The failure knobs map to the situations the verification contract exists
//! for: a dead transport (`fail_connect`, `fail_reads`) and a device that
//! acknowledges writes without applying them (`drop_writes`).

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::sleep;

use crate::client::ProtocolClient;
use crate::error::PlcError;
use crate::factory::{ClientBinding, ClientFactory};

/// Mock PLC backed by typed in-memory register maps.
#[derive(Clone, Debug, Default)]
pub struct MockClient {
    bits: HashMap<String, bool>,
    words: HashMap<String, i16>,
    dwords: HashMap<String, i32>,
    fail_connect: bool,
    fail_reads: bool,
    drop_writes: bool,
    latency: Option<Duration>,
}

impl MockClient {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-load a bit register.
    #[must_use]
    pub fn with_bit(mut self, register: impl Into<String>, value: bool) -> Self {
        self.bits.insert(register.into(), value);
        self
    }

    /// Pre-load a 16-bit register.
    #[must_use]
    pub fn with_word(mut self, register: impl Into<String>, value: i16) -> Self {
        self.words.insert(register.into(), value);
        self
    }

    /// Pre-load a 32-bit register.
    #[must_use]
    pub fn with_dword(mut self, register: impl Into<String>, value: i32) -> Self {
        self.dwords.insert(register.into(), value);
        self
    }

    /// Make `connect` report failure.
    #[must_use]
    pub const fn with_fail_connect(mut self) -> Self {
        self.fail_connect = true;
        self
    }

    /// Make every read report failure, regardless of stored state.
    #[must_use]
    pub const fn with_fail_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    /// Acknowledge writes without storing them, so read-backs see stale
    /// values. This is the device behavior write verification exists for.
    #[must_use]
    pub const fn with_drop_writes(mut self) -> Self {
        self.drop_writes = true;
        self
    }

    /// Delay every call by `latency`, for exercising caller-side timeouts.
    #[must_use]
    pub const fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    async fn simulate_latency(&self) {
        if let Some(d) = self.latency {
            sleep(d).await;
        }
    }
}

#[async_trait]
impl ProtocolClient for MockClient {
    async fn connect(&mut self) -> Result<(), PlcError> {
        self.simulate_latency().await;
        if self.fail_connect {
            return Err(PlcError::Protocol("mock: connect refused".into()));
        }
        Ok(())
    }

    async fn read_bool(&mut self, register: &str) -> Result<bool, PlcError> {
        self.simulate_latency().await;
        if self.fail_reads {
            return Err(PlcError::Timeout);
        }
        Ok(self.bits.get(register).copied().unwrap_or(false))
    }

    async fn read_int16(&mut self, register: &str) -> Result<i16, PlcError> {
        self.simulate_latency().await;
        if self.fail_reads {
            return Err(PlcError::Timeout);
        }
        Ok(self.words.get(register).copied().unwrap_or(0))
    }

    async fn read_int32(&mut self, register: &str) -> Result<i32, PlcError> {
        self.simulate_latency().await;
        if self.fail_reads {
            return Err(PlcError::Timeout);
        }
        Ok(self.dwords.get(register).copied().unwrap_or(0))
    }

    async fn write_bool(&mut self, register: &str, value: bool) -> Result<(), PlcError> {
        self.simulate_latency().await;
        if !self.drop_writes {
            self.bits.insert(register.to_string(), value);
        }
        Ok(())
    }

    async fn write_int16(&mut self, register: &str, value: i16) -> Result<(), PlcError> {
        self.simulate_latency().await;
        if !self.drop_writes {
            self.words.insert(register.to_string(), value);
        }
        Ok(())
    }

    async fn write_int32(&mut self, register: &str, value: i32) -> Result<(), PlcError> {
        self.simulate_latency().await;
        if !self.drop_writes {
            self.dwords.insert(register.to_string(), value);
        }
        Ok(())
    }
}

/// Factory that clones a prototype [`MockClient`] per session and records
/// every binding it was asked for, so tests can assert on family/variant
/// dispatch (and on the factory never being reached for rejected configs).
#[derive(Debug, Default)]
pub struct MockFactory {
    prototype: MockClient,
    bindings: Mutex<Vec<ClientBinding>>,
}

impl MockFactory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn returning(prototype: MockClient) -> Self {
        Self {
            prototype,
            bindings: Mutex::new(Vec::new()),
        }
    }

    /// Bindings seen so far, oldest first.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn bindings(&self) -> Vec<ClientBinding> {
        self.bindings.lock().expect("bindings lock").clone()
    }
}

impl ClientFactory for MockFactory {
    fn make_client(&self, binding: &ClientBinding) -> Box<dyn ProtocolClient> {
        self.bindings
            .lock()
            .expect("bindings lock")
            .push(binding.clone());
        Box::new(self.prototype.clone())
    }
}
