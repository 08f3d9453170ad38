//! Local network addresses.
//!
//! On Linux the address list comes from `hostname -I`, which reports every
//! configured address. The command runs under a hard deadline and is killed
//! if it overruns. Otherwise, or when the command yields nothing, the
//! address of the default route is found by connecting a UDP socket (no
//! packet is sent by `connect`).

use std::io::Read;
use std::net::UdpSocket;
use std::process::{Child, Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::colors::GREEN;
use crate::error::ProbeError;
use crate::probe::Probe;
use crate::tone::Tone;
use crate::value::Sample;

/// Upper bound on a single `hostname -I` run.
pub const ADDRESS_PROBE_TIMEOUT: Duration = Duration::from_millis(250);

/// Poll interval while waiting for the child process.
const POLL_INTERVAL: Duration = Duration::from_millis(5);

/// Any routable address works; nothing is sent to it.
const ROUTE_TARGET: &str = "8.8.8.8:80";

const UNKNOWN_MARKER: &str = "UNKNOWN";

pub struct AddressProbe {
    timeout: Duration,
}

impl AddressProbe {
    /// Probe whose `hostname -I` run is killed after `timeout`.
    pub const fn new(timeout: Duration) -> Self { Self { timeout } }
}

impl Default for AddressProbe {
    fn default() -> Self { Self::new(ADDRESS_PROBE_TIMEOUT) }
}

impl Probe for AddressProbe {
    fn read(&mut self) -> Result<Sample, ProbeError> {
        let addresses = if cfg!(target_os = "linux") {
            match host_addresses(self.timeout) {
                Ok(list) if !list.is_empty() => list,
                Ok(_) => route_address()?,
                Err(err) => {
                    debug!(error = %err, "hostname -I unavailable, using route lookup");
                    route_address()?
                }
            }
        } else {
            route_address()?
        };

        Ok(Sample::text(&addresses, Tone::Safe, GREEN))
    }

    fn unknown(&self) -> Sample { Sample::unknown(UNKNOWN_MARKER) }
}

/// Run `hostname -I`, returning its whitespace-normalized output.
fn host_addresses(timeout: Duration) -> Result<String, ProbeError> {
    const WHAT: &str = "hostname -I";

    let mut child = Command::new("hostname")
        .arg("-I")
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|source| ProbeError::Io { what: WHAT, source })?;

    let deadline = Instant::now() + timeout;
    let status = loop {
        match child.try_wait() {
            Ok(Some(status)) => break status,
            Ok(None) if Instant::now() >= deadline => {
                reap(&mut child);
                return Err(ProbeError::Timeout { what: WHAT, timeout });
            }
            Ok(None) => thread::sleep(POLL_INTERVAL),
            Err(source) => {
                reap(&mut child);
                return Err(ProbeError::Io { what: WHAT, source });
            }
        }
    };

    if !status.success() {
        return Err(ProbeError::Empty { what: WHAT });
    }

    let mut out = String::new();
    if let Some(mut stdout) = child.stdout.take() {
        stdout
            .read_to_string(&mut out)
            .map_err(|source| ProbeError::Io { what: WHAT, source })?;
    }

    Ok(normalize_addresses(&out))
}

/// Kill `child` and collect its exit status so it does not outlive the probe.
fn reap(child: &mut Child) {
    child.kill().ok();
    child.wait().ok();
}

/// Local address of the default route.
fn route_address() -> Result<String, ProbeError> {
    const WHAT: &str = "route address";

    let socket = UdpSocket::bind("0.0.0.0:0").map_err(|source| ProbeError::Io { what: WHAT, source })?;
    socket
        .connect(ROUTE_TARGET)
        .map_err(|source| ProbeError::Io { what: WHAT, source })?;
    let local = socket
        .local_addr()
        .map_err(|source| ProbeError::Io { what: WHAT, source })?;

    if local.ip().is_unspecified() {
        return Err(ProbeError::Empty { what: WHAT });
    }
    Ok(local.ip().to_string())
}

/// Collapse any run of whitespace into a single space.
fn normalize_addresses(raw: &str) -> String { raw.split_whitespace().collect::<Vec<_>>().join(" ") }

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::RED;

    #[test]
    fn test_normalize_addresses() {
        assert_eq!(normalize_addresses("192.168.1.5 10.0.0.2 \n"), "192.168.1.5 10.0.0.2");
        assert_eq!(normalize_addresses("  \n"), "");
    }

    #[test]
    fn test_reap_collects_running_child() {
        let Ok(mut child) = Command::new("sleep").arg("5").spawn() else {
            return;
        };
        let started = Instant::now();
        reap(&mut child);
        assert!(started.elapsed() < Duration::from_secs(2), "child was killed, not waited out");
        assert!(
            matches!(child.try_wait(), Ok(Some(_))),
            "exit status already collected"
        );
    }

    #[test]
    fn test_unknown_marker() {
        let probe = AddressProbe::default();
        let sample = probe.unknown();
        assert_eq!(sample.text.as_str(), "UNKNOWN");
        assert_eq!(sample.color, RED);
        assert_eq!(sample.tone, Tone::Unknown);
    }

    #[test]
    fn test_read_is_bounded() {
        // Whatever the host network looks like, a read returns promptly and
        // either yields addresses or a typed error.
        let mut probe = AddressProbe::new(Duration::from_millis(100));
        let started = Instant::now();
        match probe.read() {
            Ok(sample) => assert_eq!(sample.tone, Tone::Safe),
            Err(err) => assert!(!err.to_string().is_empty()),
        }
        assert!(started.elapsed() < Duration::from_secs(2), "probe overran its deadline");
    }
}
