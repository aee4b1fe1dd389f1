//! The analog temperature sensor: one normalized-voltage read per render.

use embassy_rp::Peri;
use embassy_rp::adc::{Adc, AdcPin, Blocking, Channel, Config as AdcConfig};
use embassy_rp::gpio::Pull;
use embassy_rp::peripherals::ADC;

/// Full-scale count of the RP2040's 12-bit ADC.
const FULL_SCALE: f32 = 4095.0;

/// Analog input carrying the temperature sensor voltage.
pub struct TempSensor<'d> {
    adc: Adc<'d, Blocking>,
    channel: Channel<'d>,
}

impl<'d> TempSensor<'d> {
    /// Claim the ADC and the sensor pin.
    pub fn new(adc: Peri<'d, ADC>, pin: Peri<'d, impl AdcPin>) -> Self {
        Self {
            adc: Adc::new_blocking(adc, AdcConfig::default()),
            channel: Channel::new_pin(pin, Pull::None),
        }
    }

    /// Read the sensor as a fraction of full scale, 0.0 to 1.0.
    ///
    /// A failed conversion reads as 0.0; sensor faults are out of scope and
    /// the loop retries within a second anyway.
    pub fn read_raw(&mut self) -> f32 {
        match self.adc.blocking_read(&mut self.channel) {
            Ok(sample) => f32::from(sample) / FULL_SCALE,
            Err(_) => 0.0,
        }
    }
}
