//! Built-in probes for the local system.
//!
//! - [`AddressProbe`]: local network addresses
//! - [`CpuTempProbe`]: SoC temperature from the thermal zone

mod address;
mod cpu_temp;

pub use address::{ADDRESS_PROBE_TIMEOUT, AddressProbe};
pub use cpu_temp::{CpuTempProbe, DEFAULT_THERMAL_ZONE};
