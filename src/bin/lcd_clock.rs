//! An LCD clock with keypad time entry, on a Raspberry Pi Pico RP2040.
//!
//! The free-running loop per pass: keypad scan -> state machine (at most one
//! key event) -> commit propagation -> display scheduler. A second task
//! flips the temperature unit on button edges.
#![no_std]
#![no_main]
#![allow(clippy::future_not_send, reason = "single-threaded")]

use defmt::info;
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_time::Instant;
use lcd_clock::{
    CharLcdI2c, Hardware, Keypad, Never, RefreshSchedule, RenderAction, Result, TempSensor,
    TempUnitFlag, TimeEntry, WallClock, degrees, screen, unit_button_task,
};
use panic_probe as _;

#[embassy_executor::main]
async fn main(spawner: Spawner) -> ! {
    // If it returns, something went wrong.
    let err = inner_main(spawner).await.unwrap_err();
    core::panic!("{err}");
}

async fn inner_main(spawner: Spawner) -> Result<Never> {
    let hardware = Hardware::default();

    let mut lcd = CharLcdI2c::new(hardware.i2c0, hardware.scl, hardware.sda).await;
    let mut keypad = Keypad::new(hardware.rows, hardware.cols);
    let mut sensor = TempSensor::new(hardware.adc, hardware.adc_pin);

    static TEMP_UNIT: TempUnitFlag = TempUnitFlag::new();
    spawner.spawn(unit_button_task(hardware.unit_button, &TEMP_UNIT))?;

    let mut entry = TimeEntry::new();
    let mut wall_clock = WallClock::new(Instant::now());
    let mut schedule = RefreshSchedule::new(Instant::now());

    info!("lcd-clock running");
    loop {
        if let Some(key) = keypad.scan().await {
            if entry.handle_key(key) {
                schedule.mark_dirty();
            }
            if let Some(commit) = entry.take_commit() {
                // Seconds are forced to zero on every commit.
                wall_clock.commit(commit.hour, commit.minute, 0, Instant::now());
                info!("time committed: {}:{}", commit.hour, commit.minute);
            }
        }

        match schedule.poll(&mut entry, Instant::now()) {
            Some(RenderAction::Clock) => {
                let unit = TEMP_UNIT.unit();
                let temp = degrees(sensor.read_raw(), unit);
                let now = wall_clock.now(Instant::now());
                let line = screen::clock_line(now.hour, now.minute, now.second, temp, unit)?;
                lcd.show(&line).await;
            }
            Some(RenderAction::Prompt { field, slots }) => {
                lcd.show(&screen::prompt_line(field, slots)?).await;
            }
            Some(RenderAction::ErrorBanner) => {
                lcd.show(screen::ERROR_BANNER).await;
            }
            None => {}
        }
    }
}
