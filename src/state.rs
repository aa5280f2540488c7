use std::sync::Arc;

use crate::config::Config;
use crate::db::Store;
use crate::services::{
    BookService, CharacterService, CoverArtFetcher, DatabaseService, HttpCoverArtFetcher,
    SeaOrmBookService, SeaOrmCharacterService, SeaOrmDatabaseService, SeaOrmSeriesService,
    SeriesService,
};

#[derive(Clone)]
pub struct SharedState {
    pub config: Arc<Config>,

    pub store: Arc<Store>,

    pub book_service: Arc<dyn BookService>,

    pub series_service: Arc<dyn SeriesService>,

    pub character_service: Arc<dyn CharacterService>,

    pub database_service: Arc<dyn DatabaseService>,
}

impl SharedState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let fetcher = Arc::new(HttpCoverArtFetcher::new(&config.cover_art)?);
        Self::with_cover_fetcher(config, fetcher).await
    }

    /// Builds the state around a caller-supplied cover art source.
    pub async fn with_cover_fetcher(
        config: Config,
        fetcher: Arc<dyn CoverArtFetcher>,
    ) -> anyhow::Result<Self> {
        let store = Arc::new(
            Store::with_pool_options(
                &config.general.database_path,
                config.general.max_db_connections,
                config.general.min_db_connections,
            )
            .await?,
        );

        let config = Arc::new(config);

        let book_service =
            Arc::new(SeaOrmBookService::new(store.clone())) as Arc<dyn BookService>;
        let series_service =
            Arc::new(SeaOrmSeriesService::new(store.clone())) as Arc<dyn SeriesService>;
        let character_service =
            Arc::new(SeaOrmCharacterService::new(store.clone())) as Arc<dyn CharacterService>;
        let database_service = Arc::new(SeaOrmDatabaseService::new(
            store.clone(),
            fetcher,
            config.clone(),
        )) as Arc<dyn DatabaseService>;

        Ok(Self {
            config,
            store,
            book_service,
            series_service,
            character_service,
            database_service,
        })
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }
}
