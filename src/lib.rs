#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::doc_markdown,
    clippy::too_long_first_doc_paragraph
)]

//! plc_gateway
//!
//! plc_gateway is a unifying session layer for reading and writing typed
//! registers on industrial PLCs (Mitsubishi MC family, Siemens S7 family).
//! It selects and drives an externally supplied protocol client and layers a
//! read-back write-verification contract and an optional per-instance
//! operation log on top.
//!
//! What it provides:
//! - PLC model dispatch (`PlcType` -> protocol family / S7 sub-variant)
//! - a one-shot connection lifecycle per [`Session`] (connect once at open,
//!   `connected` stays advisory afterwards)
//! - typed reads returning `Option<T>` (`None` = the call failed, never a
//!   legitimate value)
//! - verified writes classified Success / Failure / Unconfirmed by an
//!   independent read-back
//! - an append-only per-instance operation log
//!
//! Wire codecs are out of scope: implement [`ProtocolClient`] (and a
//! [`ClientFactory`]) over your MC / S7 stack, or use [`mock::MockClient`]
//! for hardware-free testing.
//!
//! ```no_run
//! use plc_gateway::{mock::MockFactory, Gateway, OperationLogRoot, PlcError, SessionConfig};
//!
//! async fn demo() -> Result<(), PlcError> {
//!     let gateway = Gateway::new(MockFactory::new(), OperationLogRoot::from_env());
//!     let mut plc = gateway
//!         .open_session(SessionConfig::new().with_port(502).with_plc_type("MEL_FX5U"))
//!         .await?;
//!     let outcome = plc.write_int16("D100", 1234).await;
//!     assert!(outcome.is_success());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod factory;
pub mod mock;
pub mod op_log;
pub mod plc_type;
pub mod register_io;
pub mod session;

pub use client::ProtocolClient;
pub use endpoint::Endpoint;
pub use error::PlcError;
pub use factory::{ClientBinding, ClientFactory, ProtocolFamily, S7Variant};
pub use op_log::{OperationLog, OperationLogRoot};
pub use plc_type::PlcType;
pub use register_io::WriteOutcome;
pub use session::{Gateway, Session, SessionConfig};

/// Initialize process-wide tracing output.
///
/// Call once, explicitly, from the application entry point; the library
/// itself never installs a subscriber as a side effect. Safe to skip in
/// processes that install their own subscriber.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt().with_target(false).try_init();
}
