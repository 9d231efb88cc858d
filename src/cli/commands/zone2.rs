use crate::cli::parser::Commands;
use crate::core::zone2::Zone2Logic;
use crate::errors::AppResult;
use crate::ui::messages::header;

const MESSAGE_WIDTH: usize = 72;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Zone2 { name, age } = cmd {
        let estimate = Zone2Logic::estimate(
            name.as_deref().unwrap_or_default(),
            age.as_deref().unwrap_or_default(),
        )?;

        header("Zone 2");
        println!(
            "Max heart rate: {} bpm | Zone 2: {}-{} bpm\n",
            estimate.max_heart_rate, estimate.zone_low, estimate.zone_high
        );
        println!("{}", estimate.message(MESSAGE_WIDTH));
    }

    Ok(())
}
