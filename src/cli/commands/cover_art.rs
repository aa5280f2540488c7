//! Cover art command handler

use crate::config::Config;
use crate::state::SharedState;

pub async fn cmd_apply_cover_art(config: Config) -> anyhow::Result<()> {
    let state = SharedState::new(config).await?;
    let report = state.database_service.apply_cover_art().await?;

    if report.attempted == 0 {
        println!("Every book already has cover art.");
        return Ok(());
    }

    println!(
        "Updated cover art for {} of {} books",
        report.updated, report.attempted
    );

    if !report.failures.is_empty() {
        println!();
        println!("Failed ({}):", report.failures.len());
        for failure in &report.failures {
            println!("  [{}] {}: {}", failure.book_id, failure.book_name, failure.error);
            println!("      {}", failure.url);
        }
    }

    Ok(())
}
