use anyhow::Result;
use chrono::NaiveDate;
use meetcal_core::sync::{SyncCommand, SyncOutcome, SyncSession, TokioDelay};
use owo_colors::OwoColorize;

use super::open_store;
use crate::render::Render;
use crate::utils::tui;

pub async fn run(id: u64, today: NaiveDate) -> Result<()> {
    let (meetcal, mut store) = open_store()?;

    let title = store
        .load()
        .into_iter()
        .find(|m| m.id == id)
        .map(|m| m.render())
        .unwrap_or_else(|| format!("#{id}"));

    // Ctrl-C ends the session; a sync still in flight then writes nothing.
    let session = SyncSession::new();
    let watcher = {
        let session = session.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                session.end();
            }
        })
    };

    let spinner = tui::create_spinner(format!("Syncing {title}"));
    let outcome = SyncCommand::new(id, session.token())
        .with_delay(meetcal.sync_delay())
        .run(&mut store, &TokioDelay, today)
        .await;
    spinner.finish_and_clear();
    watcher.abort();

    match outcome {
        SyncOutcome::Synced(_) => println!("{} {}", "✓ Synced".green(), title),
        SyncOutcome::AlreadySynced => println!("{} {}", title, "is already synced".dimmed()),
        SyncOutcome::Past => println!(
            "{} {}",
            title,
            "is in the past and cannot be modified".red()
        ),
        SyncOutcome::NotFound => anyhow::bail!("No meeting with id {id}"),
        SyncOutcome::Abandoned => println!("{}", "Sync cancelled".yellow()),
    }

    Ok(())
}
