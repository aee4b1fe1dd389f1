//! The edge-triggered temperature-unit toggle.
//!
//! Fire-and-forget: the task flips the shared flag on every falling edge and
//! takes no part in the main loop's ordering.

use defmt::info;
use embassy_rp::gpio::Input;

use crate::temperature::TempUnitFlag;

/// Wait for falling edges on the toggle button and flip the unit flag.
#[embassy_executor::task]
pub async fn unit_button_task(mut button: Input<'static>, flag: &'static TempUnitFlag) -> ! {
    loop {
        button.wait_for_falling_edge().await;
        flag.toggle();
        info!("temperature unit: {}", flag.unit());
    }
}
