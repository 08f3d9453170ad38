//! Staggered per-metric polling.
//!
//! [`DiagnosticsSampler::tick`] runs once per frame. Each metric has its own
//! [`TimerState`]; when it expires the metric's probe is read and the cached
//! [`Sample`] replaced. Between refreshes the last sample is reused as-is.
//!
//! # Failure Handling
//!
//! A probe error is logged and replaced by the probe's unknown sample. The
//! next attempt waits for the next scheduled expiry; there are no retries.
//!
//! # Initial State
//!
//! Registering a metric reads its probe immediately, so the very first frame
//! shows real data.

use core::fmt;

use tracing::{debug, warn};

use crate::config::HudConfig;
use crate::probe::Probe;
use crate::probes::{AddressProbe, CpuTempProbe};
use crate::timer::TimerState;
use crate::value::Sample;

/// Metrics owned by the sampler.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum MetricId {
    Address,
    CpuTemp,
}

impl MetricId {
    /// Stable name used in logs.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Address => "address",
            Self::CpuTemp => "cpu_temp",
        }
    }
}

impl fmt::Display for MetricId {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.name())
    }
}

struct Metric {
    id: MetricId,
    timer: TimerState,
    probe: Box<dyn Probe>,
    sample: Sample,
    refreshes: u32,
}

impl Metric {
    fn refresh(&mut self) {
        self.sample = match self.probe.read() {
            Ok(sample) => {
                debug!(metric = %self.id, text = sample.text.as_str(), tone = %sample.tone, "metric refreshed");
                sample
            }
            Err(err) => {
                warn!(metric = %self.id, error = %err, "probe failed");
                self.probe.unknown()
            }
        };
        self.refreshes = self.refreshes.wrapping_add(1);
    }
}

/// Owns the refresh timers and the last-good sample of every metric.
#[derive(Default)]
pub struct DiagnosticsSampler {
    metrics: Vec<Metric>,
}

impl DiagnosticsSampler {
    /// Create a sampler with no metrics.
    pub const fn new() -> Self { Self { metrics: Vec::new() } }

    /// Sampler with the address and CPU temperature probes on the
    /// periods from `config`.
    pub fn with_system_probes(config: &HudConfig) -> Self {
        let mut sampler = Self::new();
        sampler.register(MetricId::Address, config.address_refresh_frames, AddressProbe::default());
        sampler.register(
            MetricId::CpuTemp,
            config.cpu_temp_refresh_frames,
            CpuTempProbe::new(&config.thermal_zone_path),
        );
        sampler
    }

    /// Add (or replace) a metric and take its first reading now.
    pub fn register<P>(
        &mut self,
        id: MetricId,
        period: u32,
        probe: P,
    ) where
        P: Probe + 'static,
    {
        let mut metric = Metric {
            id,
            timer: TimerState::new(period),
            sample: probe.unknown(),
            probe: Box::new(probe),
            refreshes: 0,
        };
        metric.refresh();

        if let Some(slot) = self.metrics.iter_mut().find(|m| m.id == id) {
            *slot = metric;
        } else {
            self.metrics.push(metric);
        }
    }

    /// Advance every timer by one frame, re-probing the metrics that expired.
    pub fn tick(&mut self) {
        for metric in &mut self.metrics {
            if metric.timer.tick() {
                metric.refresh();
            }
        }
    }

    /// Re-probe one metric now and restart its timer.
    pub fn force_refresh(
        &mut self,
        id: MetricId,
    ) {
        if let Some(metric) = self.metric_mut(id) {
            metric.refresh();
            metric.timer.reset();
        }
    }

    /// Last sample of `id`, or `None` if it was never registered.
    pub fn sample(
        &self,
        id: MetricId,
    ) -> Option<&Sample> {
        self.metric(id).map(|m| &m.sample)
    }

    /// Number of probe reads for `id`, including the initial one.
    pub fn refresh_count(
        &self,
        id: MetricId,
    ) -> u32 {
        self.metric(id).map_or(0, |m| m.refreshes)
    }

    /// Current refresh timer of `id`.
    pub fn timer(
        &self,
        id: MetricId,
    ) -> Option<TimerState> {
        self.metric(id).map(|m| m.timer)
    }

    fn metric(
        &self,
        id: MetricId,
    ) -> Option<&Metric> {
        self.metrics.iter().find(|m| m.id == id)
    }

    fn metric_mut(
        &mut self,
        id: MetricId,
    ) -> Option<&mut Metric> {
        self.metrics.iter_mut().find(|m| m.id == id)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::colors::GREEN;
    use crate::error::ProbeError;
    use crate::probe::FnProbe;
    use crate::tone::Tone;

    /// Probe that counts reads and reports the count as its text.
    fn counting_probe(reads: Rc<Cell<u32>>) -> impl Probe {
        FnProbe::new(Sample::unknown("UNKNOWN"), move || {
            reads.set(reads.get() + 1);
            Ok(Sample::text(&reads.get().to_string(), Tone::Safe, GREEN))
        })
    }

    fn failing_probe() -> impl Probe {
        FnProbe::new(Sample::unavailable("---"), || {
            Err(ProbeError::Empty { what: "test metric" })
        })
    }

    #[test]
    fn test_register_reads_immediately() {
        let reads = Rc::new(Cell::new(0));
        let mut sampler = DiagnosticsSampler::new();
        sampler.register(MetricId::Address, 120, counting_probe(Rc::clone(&reads)));

        assert_eq!(reads.get(), 1, "first value is synchronous");
        assert_eq!(sampler.sample(MetricId::Address).unwrap().text.as_str(), "1");
    }

    #[test]
    fn test_probe_fires_once_after_exactly_period_ticks() {
        const PERIOD: u32 = 60;
        let reads = Rc::new(Cell::new(0));
        let mut sampler = DiagnosticsSampler::new();
        sampler.register(MetricId::CpuTemp, PERIOD, counting_probe(Rc::clone(&reads)));

        for _ in 0..PERIOD - 1 {
            sampler.tick();
        }
        assert_eq!(reads.get(), 1, "no refresh before the period elapses");

        sampler.tick();
        assert_eq!(reads.get(), 2, "exactly one refresh at the period");
        assert_eq!(sampler.refresh_count(MetricId::CpuTemp), 2);
    }

    #[test]
    fn test_cached_sample_reused_between_refreshes() {
        let reads = Rc::new(Cell::new(0));
        let mut sampler = DiagnosticsSampler::new();
        sampler.register(MetricId::Address, 10, counting_probe(Rc::clone(&reads)));

        let before = sampler.sample(MetricId::Address).cloned();
        for _ in 0..9 {
            sampler.tick();
            assert_eq!(sampler.sample(MetricId::Address).cloned(), before);
        }
    }

    #[test]
    fn test_timers_are_independent() {
        let address_reads = Rc::new(Cell::new(0));
        let temp_reads = Rc::new(Cell::new(0));
        let mut sampler = DiagnosticsSampler::new();
        sampler.register(MetricId::Address, 120, counting_probe(Rc::clone(&address_reads)));
        sampler.register(MetricId::CpuTemp, 60, counting_probe(Rc::clone(&temp_reads)));

        for _ in 0..240 {
            sampler.tick();
        }
        assert_eq!(address_reads.get(), 1 + 2);
        assert_eq!(temp_reads.get(), 1 + 4);
    }

    #[test]
    fn test_failing_probe_yields_unknown_marker() {
        let mut sampler = DiagnosticsSampler::new();
        sampler.register(MetricId::CpuTemp, 1, failing_probe());

        for _ in 0..5 {
            sampler.tick();
        }
        let sample = sampler.sample(MetricId::CpuTemp).unwrap();
        assert_eq!(*sample, Sample::unavailable("---"));
        assert_eq!(sampler.refresh_count(MetricId::CpuTemp), 6);
    }

    #[test]
    fn test_failure_then_recovery() {
        let healthy = Rc::new(Cell::new(false));
        let flag = Rc::clone(&healthy);
        let probe = FnProbe::new(Sample::unknown("UNKNOWN"), move || {
            if flag.get() {
                Ok(Sample::text("10.0.0.2", Tone::Safe, GREEN))
            } else {
                Err(ProbeError::Empty { what: "address" })
            }
        });

        let mut sampler = DiagnosticsSampler::new();
        sampler.register(MetricId::Address, 3, probe);
        assert!(sampler.sample(MetricId::Address).unwrap().is_unknown());

        healthy.set(true);
        sampler.tick();
        sampler.tick();
        assert!(sampler.sample(MetricId::Address).unwrap().is_unknown(), "no retry before expiry");
        sampler.tick();
        assert_eq!(sampler.sample(MetricId::Address).unwrap().text.as_str(), "10.0.0.2");
    }

    #[test]
    fn test_force_refresh_restarts_timer() {
        let reads = Rc::new(Cell::new(0));
        let mut sampler = DiagnosticsSampler::new();
        sampler.register(MetricId::Address, 4, counting_probe(Rc::clone(&reads)));

        sampler.tick();
        sampler.tick();
        sampler.force_refresh(MetricId::Address);
        assert_eq!(reads.get(), 2);
        assert_eq!(sampler.timer(MetricId::Address).unwrap().countdown(), 4);

        for _ in 0..3 {
            sampler.tick();
        }
        assert_eq!(reads.get(), 2);
        sampler.tick();
        assert_eq!(reads.get(), 3);
    }

    #[test]
    fn test_register_replaces_existing_metric() {
        let mut sampler = DiagnosticsSampler::new();
        sampler.register(MetricId::CpuTemp, 60, failing_probe());
        sampler.register(
            MetricId::CpuTemp,
            60,
            FnProbe::new(Sample::unavailable("---"), || Ok(Sample::text("40C", Tone::Safe, GREEN))),
        );
        assert_eq!(sampler.sample(MetricId::CpuTemp).unwrap().text.as_str(), "40C");
        assert_eq!(sampler.refresh_count(MetricId::CpuTemp), 1);
    }

    #[test]
    fn test_unregistered_metric() {
        let sampler = DiagnosticsSampler::new();
        assert!(sampler.sample(MetricId::Address).is_none());
        assert_eq!(sampler.refresh_count(MetricId::Address), 0);
    }
}
