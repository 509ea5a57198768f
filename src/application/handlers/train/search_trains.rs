//! SearchTrainsHandler - Query handler for the passenger train search.

use std::sync::Arc;
use tracing::debug;

use crate::application::ServiceError;
use crate::domain::train::Train;
use crate::ports::TrainRepository;

/// Station terms typed into the search form. Either may be empty.
#[derive(Debug, Clone, Default)]
pub struct SearchTrainsQuery {
    pub from: String,
    pub to: String,
}

/// Handler for searching trains by route.
pub struct SearchTrainsHandler {
    trains: Arc<dyn TrainRepository>,
}

impl SearchTrainsHandler {
    pub fn new(trains: Arc<dyn TrainRepository>) -> Self {
        Self { trains }
    }

    /// Trains whose route contains both terms, in either direction.
    pub async fn handle(&self, query: SearchTrainsQuery) -> Result<Vec<Train>, ServiceError> {
        let matches: Vec<Train> = self
            .trains
            .list_all()
            .await?
            .into_iter()
            .filter(|train| train.serves(&query.from, &query.to))
            .collect();

        debug!(from = %query.from, to = %query.to, found = matches.len(), "Train search");
        Ok(matches)
    }
}
