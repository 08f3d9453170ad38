//! Peripheral CO sensor interface.
//!
//! The sensor handle is passed in explicitly. "No handle" and "feature
//! disabled" are separate states and the presenter draws them differently.

use crate::error::SensorError;
use crate::value::MetricValue;

/// A CO detector that also reports its own battery.
pub trait GasSensor {
    /// Carbon monoxide in PPM. `Text`/`Unknown` when the device has no reading yet.
    fn co_level(&mut self) -> Result<MetricValue, SensorError>;

    /// Battery charge in percent, or a status token such as `"CHG"`.
    fn battery(&mut self) -> Result<MetricValue, SensorError>;
}

/// Hands out the currently attached sensor, if any.
pub trait SensorProvider {
    fn sensor(&mut self) -> Option<&mut dyn GasSensor>;
}

/// Provider with nothing attached.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoSensor;

impl SensorProvider for NoSensor {
    fn sensor(&mut self) -> Option<&mut dyn GasSensor> { None }
}

impl<S: GasSensor> SensorProvider for Option<S> {
    fn sensor(&mut self) -> Option<&mut dyn GasSensor> { self.as_mut().map(|s| s as &mut dyn GasSensor) }
}

impl<S: GasSensor + ?Sized> GasSensor for Box<S> {
    fn co_level(&mut self) -> Result<MetricValue, SensorError> { (**self).co_level() }

    fn battery(&mut self) -> Result<MetricValue, SensorError> { (**self).battery() }
}
