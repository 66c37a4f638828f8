use std::sync::Arc;

use mongodb::Collection;

use super::{config::Config, database::init_mongo, models::StoredPlace};

pub struct State {
    pub config: Config,
    pub places: Collection<StoredPlace>,
}

impl State {
    pub async fn new() -> Arc<Self> {
        let config = Config::load();

        let places = init_mongo(&config.mongodb_uri).await;

        Arc::new(Self { config, places })
    }
}
