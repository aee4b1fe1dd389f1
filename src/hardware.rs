//! Pin binding for the LCD clock board.

use embassy_rp::Peri;
use embassy_rp::gpio::{self, Level, Pull};
use embassy_rp::peripherals::{ADC, I2C0, PIN_16, PIN_17, PIN_26};

use crate::pin_array::{InputArray, OutputArray};
use crate::shared_constants::{COL_COUNT, ROW_COUNT};

/// Every peripheral the clock uses, claimed once at startup.
pub struct Hardware {
    /// Keypad row strobe lines, idle high.
    pub rows: OutputArray<'static, ROW_COUNT>,
    /// Keypad column sense lines, pulled up.
    pub cols: InputArray<'static, COL_COUNT>,
    /// Temperature-unit toggle button, pulled up, active on the falling edge.
    pub unit_button: gpio::Input<'static>,
    /// ADC block for the temperature sensor.
    pub adc: Peri<'static, ADC>,
    /// Analog pin the sensor is wired to.
    pub adc_pin: Peri<'static, PIN_26>,
    /// I2C block for the LCD backpack.
    pub i2c0: Peri<'static, I2C0>,
    /// LCD I2C clock line.
    pub scl: Peri<'static, PIN_17>,
    /// LCD I2C data line.
    pub sda: Peri<'static, PIN_16>,
}

impl Default for Hardware {
    fn default() -> Self {
        let peripherals: embassy_rp::Peripherals =
            embassy_rp::init(embassy_rp::config::Config::default());

        let rows = OutputArray::new([
            gpio::Output::new(peripherals.PIN_6, Level::High),
            gpio::Output::new(peripherals.PIN_7, Level::High),
            gpio::Output::new(peripherals.PIN_8, Level::High),
            gpio::Output::new(peripherals.PIN_9, Level::High),
        ]);

        let cols = InputArray::new([
            gpio::Input::new(peripherals.PIN_10, Pull::Up),
            gpio::Input::new(peripherals.PIN_11, Pull::Up),
            gpio::Input::new(peripherals.PIN_12, Pull::Up),
            gpio::Input::new(peripherals.PIN_13, Pull::Up),
        ]);

        let unit_button = gpio::Input::new(peripherals.PIN_22, Pull::Up);

        Self {
            rows,
            cols,
            unit_button,
            adc: peripherals.ADC,
            adc_pin: peripherals.PIN_26,
            i2c0: peripherals.I2C0,
            scl: peripherals.PIN_17,
            sda: peripherals.PIN_16,
        }
    }
}
