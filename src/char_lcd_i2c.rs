//! HD44780 character LCD behind a PCF8574 I2C backpack, trimmed to the
//! cursor-reset and text-write surface the display scheduler needs.

use embassy_rp::Peri;
use embassy_rp::i2c::{self, Config as I2cConfig, Instance as I2cInstance, SclPin, SdaPin};
use embassy_time::Timer;

// PCF8574 pin mapping: P0=RS, P1=RW, P2=E, P3=Backlight, P4-P7=Data
const LCD_BACKLIGHT: u8 = 0x08;
const LCD_ENABLE: u8 = 0x04;
const LCD_RS: u8 = 0x01;

/// Character LCD with I2C interface (HD44780 + PCF8574 backpack).
///
/// No return value is consulted on writes; a wedged bus shows up as a blank
/// display, not an error channel.
pub struct CharLcdI2c<'d, T: I2cInstance> {
    i2c: i2c::I2c<'d, T, i2c::Blocking>,
    address: u8,
}

impl<'d, T: I2cInstance> CharLcdI2c<'d, T> {
    /// Create and initialize a display at the common PCF8574 address (0x27).
    pub async fn new<SCL, SDA>(
        i2c_peripheral: Peri<'d, T>,
        scl: Peri<'d, SCL>,
        sda: Peri<'d, SDA>,
    ) -> Self
    where
        SCL: SclPin<T>,
        SDA: SdaPin<T>,
    {
        let mut lcd = Self {
            i2c: i2c::I2c::new_blocking(i2c_peripheral, scl, sda, I2cConfig::default()),
            address: 0x27,
        };
        lcd.init().await;
        lcd
    }

    async fn init(&mut self) {
        Timer::after_millis(50).await;

        // Initialize in 4-bit mode
        self.write_nibble(0x03, false).await;
        Timer::after_millis(5).await;
        self.write_nibble(0x03, false).await;
        Timer::after_micros(150).await;
        self.write_nibble(0x03, false).await;
        self.write_nibble(0x02, false).await;

        // Function set: 4-bit, 2 lines, 5x8 font
        self.write_byte(0x28, false).await;
        // Display control: display on, cursor off, blink off
        self.write_byte(0x0C, false).await;
        // Clear display
        self.write_byte(0x01, false).await;
        Timer::after_millis(2).await;
        // Entry mode: increment cursor, no shift
        self.write_byte(0x06, false).await;
    }

    #[expect(clippy::arithmetic_side_effects, reason = "Bit operations")]
    async fn write_nibble(&mut self, nibble: u8, rs: bool) {
        let rs_bit = if rs { LCD_RS } else { 0 };
        let data = (nibble << 4) | LCD_BACKLIGHT | rs_bit;

        // Pulse enable high then low around each nibble
        let _ = self.i2c.blocking_write(self.address, &[data | LCD_ENABLE]);
        Timer::after_micros(1).await;
        let _ = self.i2c.blocking_write(self.address, &[data]);
        Timer::after_micros(50).await;
    }

    async fn write_byte(&mut self, byte: u8, rs: bool) {
        self.write_nibble((byte >> 4) & 0x0F, rs).await;
        self.write_nibble(byte & 0x0F, rs).await;
    }

    /// Clear the display and return the cursor home.
    pub async fn clear(&mut self) {
        self.write_byte(0x01, false).await;
        Timer::after_millis(2).await;
    }

    /// Move the cursor to the start of a display row.
    async fn set_row(&mut self, row: u8) {
        let address = match row {
            1 => 0x40,
            _ => 0x00,
        };
        self.write_byte(0x80 | address, false).await;
    }

    /// Write text at the current cursor position.
    pub async fn print(&mut self, text: &str) {
        for byte in text.bytes() {
            self.write_byte(byte, true).await;
        }
    }

    /// Clear and paint up to two lines, split on `'\n'`.
    pub async fn show(&mut self, text: &str) {
        self.clear().await;
        for (row, line) in text.split('\n').take(2).enumerate() {
            #[expect(clippy::cast_possible_truncation, reason = "row is 0 or 1")]
            let row = row as u8;
            if row > 0 {
                self.set_row(row).await;
            }
            self.print(line).await;
        }
    }
}
