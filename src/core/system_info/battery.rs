use crate::core::system_info::types::BatteryFacts;
use crate::error::Result;
use battery::units::ratio::percent;
use battery::units::time::minute;
use battery::State;

/// First battery reported by the system, `None` on machines without one
pub fn collect() -> Result<Option<BatteryFacts>> {
    let manager = battery::Manager::new()?;
    let mut batteries = manager.batteries()?;

    let Some(battery) = batteries.next().transpose()? else {
        return Ok(None);
    };

    Ok(Some(BatteryFacts {
        percent: Some(battery.state_of_charge().get::<percent>() as f64),
        charging: matches!(battery.state(), State::Charging),
        minutes_remaining: battery
            .time_to_empty()
            .map(|time| time.get::<minute>() as f64),
    }))
}
