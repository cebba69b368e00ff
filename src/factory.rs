use serde::{Deserialize, Serialize};

use crate::client::ProtocolClient;
use crate::endpoint::Endpoint;

/// Siemens S7 device sub-variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum S7Variant {
    S200Smart,
    S300,
    S1200,
    S1500,
}

impl S7Variant {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::S200Smart => "S200Smart",
            Self::S300 => "S300",
            Self::S1200 => "S1200",
            Self::S1500 => "S1500",
        }
    }
}

/// Protocol family a client must speak, with the Siemens sub-variant where
/// the S7 handshake differs per device line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum ProtocolFamily {
    /// Mitsubishi MC protocol, QnA-compatible 3E frames (FX5U, Q series).
    MelsecMc,
    /// Mitsubishi MC protocol, A-compatible 1E frames (FX3U).
    MelsecA1e,
    /// Siemens S7 protocol.
    SiemensS7(S7Variant),
}

/// Everything a factory needs to produce a correctly configured client.
///
/// The binding is resolved from the session configuration before any socket
/// activity; producing it performs no I/O.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientBinding {
    pub family: ProtocolFamily,
    pub endpoint: Endpoint,
}

impl ClientBinding {
    #[must_use]
    pub fn new(family: ProtocolFamily, endpoint: Endpoint) -> Self {
        Self { family, endpoint }
    }
}

/// Produces protocol clients for resolved bindings.
///
/// The factory itself must not touch the network; connecting is the session's
/// responsibility. Applications supply an implementation backed by their wire
/// codecs; tests use [`crate::mock::MockFactory`].
pub trait ClientFactory: Send + Sync {
    fn make_client(&self, binding: &ClientBinding) -> Box<dyn ProtocolClient>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plc_type::PlcType;

    #[test]
    fn family_dispatch_covers_all_models() {
        let expect = [
            (PlcType::MelFx5u, ProtocolFamily::MelsecMc),
            (PlcType::MelQser, ProtocolFamily::MelsecMc),
            (PlcType::MelFx3u, ProtocolFamily::MelsecA1e),
            (PlcType::SmnS300, ProtocolFamily::SiemensS7(S7Variant::S300)),
            (
                PlcType::SmnS1200,
                ProtocolFamily::SiemensS7(S7Variant::S1200),
            ),
            (
                PlcType::SmnS1500,
                ProtocolFamily::SiemensS7(S7Variant::S1500),
            ),
            (
                PlcType::SmnS200,
                ProtocolFamily::SiemensS7(S7Variant::S200Smart),
            ),
        ];
        for (t, fam) in expect {
            assert_eq!(t.family(), fam, "wrong family for {t}");
        }
    }
}
