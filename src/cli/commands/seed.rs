//! Seed command handler

use crate::config::Config;
use crate::state::SharedState;

pub async fn cmd_seed(config: Config) -> anyhow::Result<()> {
    let state = SharedState::new(config).await?;
    let summary = state.database_service.seed_database().await?;

    if summary.total() == 0 {
        println!("Nothing to seed, the catalog is already up to date.");
        return Ok(());
    }

    println!("Seeded {} new records", summary.total());
    println!("  Series:      {}", summary.series);
    println!("  Books:       {}", summary.books);
    println!("  Characters:  {}", summary.characters);
    println!("  Appearances: {}", summary.book_characters);

    let counts = state.store.catalog_counts().await?;
    println!();
    println!(
        "Catalog now holds {} series, {} books and {} characters",
        counts.series, counts.books, counts.characters
    );

    Ok(())
}
