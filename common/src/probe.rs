//! The probe boundary.
//!
//! A probe takes one reading of one metric. Failures come back as
//! [`ProbeError`]; the sampler replaces them with the probe's own
//! [`Probe::unknown`] sample so a bad read never stalls the frame loop.

use crate::error::ProbeError;
use crate::value::Sample;

pub trait Probe {
    /// Take a fresh reading. Must return within a bounded time.
    fn read(&mut self) -> Result<Sample, ProbeError>;

    /// The sample shown when [`Probe::read`] fails.
    fn unknown(&self) -> Sample;
}

/// Adapts a closure into a [`Probe`] with a fixed failure sample.
pub struct FnProbe<F> {
    read: F,
    unknown: Sample,
}

impl<F> FnProbe<F>
where
    F: FnMut() -> Result<Sample, ProbeError>,
{
    /// Probe calling `read`, falling back to `unknown` on failure.
    pub const fn new(
        unknown: Sample,
        read: F,
    ) -> Self {
        Self { read, unknown }
    }
}

impl<F> Probe for FnProbe<F>
where
    F: FnMut() -> Result<Sample, ProbeError>,
{
    fn read(&mut self) -> Result<Sample, ProbeError> { (self.read)() }

    fn unknown(&self) -> Sample { self.unknown.clone() }
}

impl<P: Probe + ?Sized> Probe for Box<P> {
    fn read(&mut self) -> Result<Sample, ProbeError> { (**self).read() }

    fn unknown(&self) -> Sample { (**self).unknown() }
}
