//! Typed register operations on a [`Session`]: plain reads and verified
//! writes.
//!
//! A write is never trusted on the strength of its acknowledgment. Register
//! writes can silently fail at the device even when the transport ack
//! succeeds, and another actor can overwrite the register between the write
//! and the check, so every write is followed by an independent read-back and
//! classified three ways: the read-back failed (`Unconfirmed`, could not
//! verify), matched (`Success`) or disagreed (`Failure`, verified and wrong).
//! Callers handle `Unconfirmed` and `Failure` differently (retry vs alarm);
//! this layer retries nothing.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::config as global_config;
use crate::session::Session;

/// Verdict of one verified write.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum WriteOutcome {
    /// Read-back succeeded and matched the intended value.
    Success,
    /// Read-back succeeded but the device holds a different value.
    Failure,
    /// Read-back failed; the write may or may not have taken effect.
    Unconfirmed,
}

impl WriteOutcome {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Failure => "Failure",
            Self::Unconfirmed => "Unconfirmed",
        }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

impl std::fmt::Display for WriteOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Three-way verification rule shared by all write widths.
fn classify<T: PartialEq>(intended: &T, readback: Option<&T>) -> WriteOutcome {
    match readback {
        None => WriteOutcome::Unconfirmed,
        Some(seen) if seen == intended => WriteOutcome::Success,
        Some(_) => WriteOutcome::Failure,
    }
}

fn read_record<T: std::fmt::Display>(kind: &str, register: &str, value: Option<&T>) -> String {
    match value {
        Some(v) => format!("{kind} operation : Register : {register}, Result : {v}, Status : Success"),
        None => format!("{kind} operation : Register : {register}, Result : None, Status : Failure"),
    }
}

fn write_record<T: std::fmt::Display>(
    kind: &str,
    register: &str,
    value: &T,
    outcome: WriteOutcome,
) -> String {
    format!("{kind} operation : Register : {register}, Value : {value}, Status : {outcome}")
}

impl Session {
    /// Read a boolean register. `None` means the underlying call failed;
    /// it is distinguishable from a legitimate `Some(false)`.
    pub async fn read_bool(&mut self, register: &str) -> Option<bool> {
        let result = self.client.read_bool(register).await;
        self.finish_read("Read Bool", register, result)
    }

    /// Read a 16-bit signed register. `None` means the call failed, never a
    /// value of zero.
    pub async fn read_int16(&mut self, register: &str) -> Option<i16> {
        let result = self.client.read_int16(register).await;
        self.finish_read("Read Int16", register, result)
    }

    /// Read a 32-bit signed register. `None` means the call failed.
    pub async fn read_int32(&mut self, register: &str) -> Option<i32> {
        let result = self.client.read_int32(register).await;
        self.finish_read("Read Int32", register, result)
    }

    /// Write a boolean register and verify it by reading it back.
    pub async fn write_bool(&mut self, register: &str, value: bool) -> WriteOutcome {
        if let Err(e) = self.client.write_bool(register, value).await {
            Self::note_write_ack_failure("Write Bool", register, &e);
        }
        let readback = self.client.read_bool(register).await.ok();
        self.finish_write("Write Bool", register, value, readback)
    }

    /// Write a 16-bit signed register and verify it by reading it back.
    pub async fn write_int16(&mut self, register: &str, value: i16) -> WriteOutcome {
        if let Err(e) = self.client.write_int16(register, value).await {
            Self::note_write_ack_failure("Write Int16", register, &e);
        }
        let readback = self.client.read_int16(register).await.ok();
        self.finish_write("Write Int16", register, value, readback)
    }

    /// Write a 32-bit signed register and verify it by reading it back.
    pub async fn write_int32(&mut self, register: &str, value: i32) -> WriteOutcome {
        if let Err(e) = self.client.write_int32(register, value).await {
            Self::note_write_ack_failure("Write Int32", register, &e);
        }
        let readback = self.client.read_int32(register).await.ok();
        self.finish_write("Write Int32", register, value, readback)
    }

    fn finish_read<T: std::fmt::Display + Copy>(
        &mut self,
        kind: &str,
        register: &str,
        result: Result<T, crate::error::PlcError>,
    ) -> Option<T> {
        match result {
            Ok(v) => {
                debug!(instance_id = self.instance_id, register, value = %v, "{kind} ok");
                self.record(&read_record(kind, register, Some(&v)));
                Some(v)
            }
            Err(e) => {
                if global_config().plc_dump_on_error {
                    warn!(instance_id = self.instance_id, register, error = %e, "{kind} failed");
                } else {
                    debug!(instance_id = self.instance_id, register, error = %e, "{kind} failed");
                }
                self.record(&read_record::<T>(kind, register, None));
                None
            }
        }
    }

    fn finish_write<T: PartialEq + std::fmt::Display>(
        &mut self,
        kind: &str,
        register: &str,
        value: T,
        readback: Option<T>,
    ) -> WriteOutcome {
        let outcome = classify(&value, readback.as_ref());
        debug!(
            instance_id = self.instance_id,
            register,
            intended = %value,
            outcome = outcome.as_str(),
            "{kind} verified"
        );
        self.record(&write_record(kind, register, &value, outcome));
        outcome
    }

    // Ack failures are deliberately not classified here: the read-back alone
    // decides the outcome.
    fn note_write_ack_failure(kind: &str, register: &str, err: &crate::error::PlcError) {
        if global_config().plc_dump_on_error {
            warn!(register, error = %err, "{kind} ack failed");
        } else {
            debug!(register, error = %err, "{kind} ack failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_three_ways() {
        assert_eq!(classify(&true, Some(&true)), WriteOutcome::Success);
        assert_eq!(classify(&true, Some(&false)), WriteOutcome::Failure);
        assert_eq!(classify(&true, None), WriteOutcome::Unconfirmed);
        assert_eq!(classify(&1234i16, Some(&1234i16)), WriteOutcome::Success);
        assert_eq!(classify(&1234i16, Some(&0i16)), WriteOutcome::Failure);
        assert_eq!(classify(&1234i16, None), WriteOutcome::Unconfirmed);
    }

    #[test]
    fn record_lines_match_documented_format() {
        assert_eq!(
            read_record("Read Bool", "M100", Some(&true)),
            "Read Bool operation : Register : M100, Result : true, Status : Success"
        );
        assert_eq!(
            read_record::<i16>("Read Int16", "D100", None),
            "Read Int16 operation : Register : D100, Result : None, Status : Failure"
        );
        assert_eq!(
            write_record("Write Int32", "D200", &12_345_678i32, WriteOutcome::Unconfirmed),
            "Write Int32 operation : Register : D200, Value : 12345678, Status : Unconfirmed"
        );
    }
}
