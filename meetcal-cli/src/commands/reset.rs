use anyhow::Result;
use owo_colors::OwoColorize;

use super::open_store;

pub fn run() -> Result<()> {
    let (meetcal, mut store) = open_store()?;
    store.clear();

    println!(
        "{} {}",
        "Cleared stored meetings in".green(),
        meetcal.display_path().display()
    );
    println!("{}", "The default meetings will be restored on next use.".dimmed());

    Ok(())
}
