use serde::{Deserialize, Serialize};

use crate::factory::{ProtocolFamily, S7Variant};

/// The closed set of supported PLC models.
///
/// The string forms (`MEL_FX5U`, `SMN_S1200`, ...) are the identifiers
/// accepted in session configuration; anything outside this set is rejected
/// with a configuration error before any network activity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum PlcType {
    /// Mitsubishi FX5U
    MelFx5u,
    /// Mitsubishi Q series
    MelQser,
    /// Mitsubishi FX3U
    MelFx3u,
    /// Siemens S7-300
    SmnS300,
    /// Siemens S7-1200
    SmnS1200,
    /// Siemens S7-1500
    SmnS1500,
    /// Siemens S7-200 Smart
    SmnS200,
}

impl PlcType {
    /// Parse a PLC type identifier like "MEL_FX5U" or "SMN_S1200".
    #[allow(clippy::should_implement_trait)]
    #[must_use]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "MEL_FX5U" => Some(Self::MelFx5u),
            "MEL_QSER" => Some(Self::MelQser),
            "MEL_FX3U" => Some(Self::MelFx3u),
            "SMN_S300" => Some(Self::SmnS300),
            "SMN_S1200" => Some(Self::SmnS1200),
            "SMN_S1500" => Some(Self::SmnS1500),
            "SMN_S200" => Some(Self::SmnS200),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MelFx5u => "MEL_FX5U",
            Self::MelQser => "MEL_QSER",
            Self::MelFx3u => "MEL_FX3U",
            Self::SmnS300 => "SMN_S300",
            Self::SmnS1200 => "SMN_S1200",
            Self::SmnS1500 => "SMN_S1500",
            Self::SmnS200 => "SMN_S200",
        }
    }

    /// Protocol family (and Siemens sub-variant) this model speaks.
    ///
    /// FX5U and Q series use the QnA-compatible MC frames; FX3U only speaks
    /// the older A-compatible 1E frames. The S7-200 Smart maps to the S7
    /// family like the rest of the Siemens models.
    #[must_use]
    pub const fn family(&self) -> ProtocolFamily {
        match self {
            Self::MelFx5u | Self::MelQser => ProtocolFamily::MelsecMc,
            Self::MelFx3u => ProtocolFamily::MelsecA1e,
            Self::SmnS300 => ProtocolFamily::SiemensS7(S7Variant::S300),
            Self::SmnS1200 => ProtocolFamily::SiemensS7(S7Variant::S1200),
            Self::SmnS1500 => ProtocolFamily::SiemensS7(S7Variant::S1500),
            Self::SmnS200 => ProtocolFamily::SiemensS7(S7Variant::S200Smart),
        }
    }

    /// All supported types, in the order they are documented.
    pub const ALL: [Self; 7] = [
        Self::MelFx5u,
        Self::MelQser,
        Self::MelFx3u,
        Self::SmnS300,
        Self::SmnS1200,
        Self::SmnS1500,
        Self::SmnS200,
    ];
}

impl std::str::FromStr for PlcType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or(())
    }
}

impl std::fmt::Display for PlcType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_roundtrip() {
        for t in PlcType::ALL {
            assert_eq!(PlcType::from_str(t.as_str()), Some(t));
        }
    }

    #[test]
    fn unknown_identifiers_rejected() {
        assert_eq!(PlcType::from_str("MEL_FX9U"), None);
        assert_eq!(PlcType::from_str("mel_fx5u"), None);
        // near-miss identifiers must not slip through
        assert_eq!(PlcType::from_str("SMN_S2000"), None);
    }

    #[test]
    fn s200_binds_to_s7() {
        assert_eq!(
            PlcType::SmnS200.family(),
            ProtocolFamily::SiemensS7(S7Variant::S200Smart)
        );
    }
}
