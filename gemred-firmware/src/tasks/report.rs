//! Reading report task
//!
//! Logs each new reading, or the fault the gauge is reporting.

use defmt::*;

use crate::channels::GAUGE_READING;

#[embassy_executor::task]
pub async fn report_task() {
    info!("Report task started");

    loop {
        let reading = GAUGE_READING.wait().await;
        match reading.degrees() {
            Some(degrees) => info!("Gauge reading: {=f32}", degrees),
            None => warn!("Gauge reports an error: {=str}", reading.description()),
        }
    }
}
