use anyhow::Result;
use meetcal_core::meetcal::Meetcal;
use meetcal_core::meetcal_config::MeetcalConfig;
use owo_colors::OwoColorize;

pub fn run() -> Result<()> {
    let config_path = MeetcalConfig::config_path()?;
    let meetcal = Meetcal::load()?;

    println!("{}", "Paths".bold());
    println!("  Config:  {}", config_path.display());
    println!("  Data:    {}", meetcal.data_path().display());
    println!();
    println!("{}", "Sync".bold());
    println!("  Delay:   {}ms", meetcal.config().sync_delay_ms);

    Ok(())
}
