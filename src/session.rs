use serde::Deserialize;
use tracing::{info, warn};

use crate::client::ProtocolClient;
use crate::endpoint::Endpoint;
use crate::error::PlcError;
use crate::factory::{ClientBinding, ClientFactory};
use crate::op_log::{OperationLog, OperationLogRoot};
use crate::plc_type::PlcType;

const DEFAULT_ADDRESS: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 80;
const DEFAULT_PLC_TYPE: &str = "MEL_FX5U";

/// Configuration for one logical PLC connection slot.
///
/// `plc_type` is carried as the raw identifier string (the form it arrives in
/// from config files and operator input) and validated in [`Session::open`]
/// before anything touches the network.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub instance_id: u32,
    pub address: String,
    pub port: u16,
    pub plc_type: String,
    pub logging: bool,
}

impl SessionConfig {
    #[must_use]
    pub fn new() -> Self {
        Self {
            instance_id: 0,
            address: DEFAULT_ADDRESS.to_string(),
            port: DEFAULT_PORT,
            plc_type: DEFAULT_PLC_TYPE.to_string(),
            logging: false,
        }
    }

    #[must_use]
    pub const fn with_instance_id(mut self, id: u32) -> Self {
        self.instance_id = id;
        self
    }

    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    #[must_use]
    pub fn with_plc_type(mut self, plc_type: impl Into<String>) -> Self {
        self.plc_type = plc_type.into();
        self
    }

    #[must_use]
    pub const fn with_logging(mut self, logging: bool) -> Self {
        self.logging = logging;
        self
    }

    /// Parse a session configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `PlcError::Config` when the text is not valid TOML for this
    /// shape. The `plc_type` string is not validated here; that happens in
    /// [`Session::open`].
    pub fn from_toml_str(text: &str) -> Result<Self, PlcError> {
        toml::from_str(text).map_err(|e| PlcError::Config(format!("session config: {e}")))
    }

    fn endpoint(&self) -> Endpoint {
        Endpoint::of(self.address.clone(), self.port)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// One live PLC connection slot: an owned protocol client plus its advisory
/// connection state and optional operation log.
///
/// The session connects exactly once, during [`Session::open`]. A failed
/// connect is not fatal: the session is still handed out with
/// [`connected`](Session::connected) false, and every register operation
/// still delegates to the client and reports per-call success. Reconnecting
/// means opening a new session.
///
/// Operations take `&mut self`; one session is driven by one caller at a
/// time. Independent sessions are fully independent.
pub struct Session {
    pub(crate) instance_id: u32,
    pub(crate) plc_type: PlcType,
    pub(crate) endpoint: Endpoint,
    pub(crate) connected: bool,
    pub(crate) client: Box<dyn ProtocolClient>,
    pub(crate) op_log: Option<OperationLog>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("instance_id", &self.instance_id)
            .field("plc_type", &self.plc_type)
            .field("endpoint", &self.endpoint)
            .field("connected", &self.connected)
            .field("op_log", &self.op_log)
            .finish_non_exhaustive()
    }
}

impl Session {
    /// Validate the configuration, produce a client through `factory` and
    /// attempt the one connect.
    ///
    /// `log_root` is the process-wide operation-log root; it is only touched
    /// when `config.logging` is set.
    ///
    /// # Errors
    ///
    /// Returns `PlcError::Config` for an unsupported `plc_type` (before the
    /// factory is ever invoked) and `PlcError::Io` when a requested log
    /// stream cannot be created. Connect failure is not an error.
    pub async fn open(
        config: SessionConfig,
        factory: &dyn ClientFactory,
        log_root: &OperationLogRoot,
    ) -> Result<Self, PlcError> {
        let plc_type = PlcType::from_str(&config.plc_type).ok_or_else(|| {
            PlcError::Config(format!("unsupported plc_type: {}", config.plc_type))
        })?;
        let endpoint = config.endpoint();

        let mut op_log = if config.logging {
            Some(log_root.stream(config.instance_id)?)
        } else {
            None
        };
        if let Some(log) = op_log.as_mut() {
            Self::append_record(
                log,
                &format!(
                    "Initializing PLC with instance_id {}, plc_type {}, address {} and port {}",
                    config.instance_id, plc_type, endpoint.host, endpoint.port
                ),
            );
        }

        let binding = ClientBinding::new(plc_type.family(), endpoint.clone());
        let mut client = factory.make_client(&binding);

        let connected = match client.connect().await {
            Ok(()) => {
                info!(instance_id = config.instance_id, addr = %endpoint, "connected");
                true
            }
            Err(e) => {
                warn!(instance_id = config.instance_id, addr = %endpoint, error = %e, "connect failed");
                false
            }
        };
        if let Some(log) = op_log.as_mut() {
            let line = if connected {
                "Connection Successful!"
            } else {
                "Connection Failed!"
            };
            Self::append_record(log, line);
        }

        Ok(Self {
            instance_id: config.instance_id,
            plc_type,
            endpoint,
            connected,
            client,
            op_log,
        })
    }

    #[must_use]
    pub const fn instance_id(&self) -> u32 {
        self.instance_id
    }

    #[must_use]
    pub const fn plc_type(&self) -> PlcType {
        self.plc_type
    }

    #[must_use]
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Outcome of the single connect attempt made at open time. Advisory:
    /// it is not re-validated by later operations.
    #[must_use]
    pub const fn connected(&self) -> bool {
        self.connected
    }

    #[must_use]
    pub const fn logging_enabled(&self) -> bool {
        self.op_log.is_some()
    }

    // Log-sink failures must not take the register path down.
    pub(crate) fn append_record(log: &mut OperationLog, message: &str) {
        if let Err(e) = log.append(message) {
            warn!(instance_id = log.instance_id(), error = %e, "operation log write failed");
        }
    }

    pub(crate) fn record(&mut self, message: &str) {
        if let Some(log) = self.op_log.as_mut() {
            Self::append_record(log, message);
        }
    }
}

/// Process-level entry point: one factory plus one operation-log root,
/// created once and reused for every session the process opens.
pub struct Gateway<F: ClientFactory> {
    factory: F,
    log_root: OperationLogRoot,
}

impl<F: ClientFactory> Gateway<F> {
    #[must_use]
    pub fn new(factory: F, log_root: OperationLogRoot) -> Self {
        Self { factory, log_root }
    }

    /// Factory with the log root taken from the environment (`PLC_LOG_DIR`).
    #[must_use]
    pub fn with_env_log_root(factory: F) -> Self {
        Self::new(factory, OperationLogRoot::from_env())
    }

    /// Open a session for `config` against this gateway's factory.
    ///
    /// # Errors
    ///
    /// Same contract as [`Session::open`].
    pub async fn open_session(&self, config: SessionConfig) -> Result<Session, PlcError> {
        Session::open(config, &self.factory, &self.log_root).await
    }

    #[must_use]
    pub fn log_root(&self) -> &OperationLogRoot {
        &self.log_root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_match_documented_ones() {
        let cfg = SessionConfig::new();
        assert_eq!(cfg.instance_id, 0);
        assert_eq!(cfg.address, "127.0.0.1");
        assert_eq!(cfg.port, 80);
        assert_eq!(cfg.plc_type, "MEL_FX5U");
        assert!(!cfg.logging);
    }

    #[test]
    fn config_from_toml() {
        let cfg = SessionConfig::from_toml_str(
            r#"
            instance_id = 2
            address = "192.168.1.40"
            port = 502
            plc_type = "SMN_S1200"
            logging = true
            "#,
        )
        .expect("parse");
        assert_eq!(cfg.instance_id, 2);
        assert_eq!(cfg.port, 502);
        assert_eq!(cfg.plc_type, "SMN_S1200");
        assert!(cfg.logging);

        // missing keys fall back to defaults
        let cfg = SessionConfig::from_toml_str("port = 5007").expect("parse");
        assert_eq!(cfg.address, "127.0.0.1");
        assert_eq!(cfg.plc_type, "MEL_FX5U");
        assert_eq!(cfg.port, 5007);
    }

    #[test]
    fn config_from_toml_rejects_garbage() {
        let err = SessionConfig::from_toml_str("port = \"not a number\"").unwrap_err();
        assert!(matches!(err, PlcError::Config(_)));
    }
}
