//! Fixture replay
//!
//! Sends records through a transport in fixture order.

use tracing::{info, warn};

use crate::buffer::Command;
use crate::models::{ReplayOutcome, ReplayReport};
use crate::transport::{PayloadMode, Transport};

/// Sends every record in order and collects the responses.
///
/// Stops at the first transport error, recording its index in the report.
pub async fn replay<T, B>(transport: &mut T, records: &[B], mode: PayloadMode) -> ReplayReport
where
    T: Transport,
    B: AsRef<[u8]>,
{
    let mut report = ReplayReport::new();

    for (index, record) in records.iter().enumerate() {
        let record = record.as_ref();
        let payload = mode.payload(record);

        match transport.send(payload).await {
            Ok(response) => report.outcomes.push(ReplayOutcome {
                index,
                command: command_label(record),
                bytes_sent: payload.len(),
                exit_code: response.status,
                stdout: String::from_utf8_lossy(&response.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&response.stderr).into_owned(),
            }),
            Err(e) => {
                warn!("Replay stopped at record {}: {}", index, e);
                report.failed_at = Some(index);
                report.error = Some(e.to_string());
                return report;
            }
        }
    }

    info!("Replayed {} record(s)", report.sent());
    report
}

fn command_label(record: &[u8]) -> String {
    match record.first() {
        Some(&byte) => Command::try_from(byte)
            .map(|c| c.name().to_string())
            .unwrap_or_else(|_| format!("0x{:02x}", byte)),
        None => "empty".to_string(),
    }
}
