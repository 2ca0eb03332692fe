//! Forward geocoding against OpenStreetMap Nominatim.
//!
//! The `geocoding` crate is blocking, so lookups run on the blocking thread
//! pool. A configurable pause before each lookup keeps the pipeline inside
//! Nominatim's one-request-per-second usage policy.

use geocoding::{Forward, Openstreetmap, Point};
use std::time::Duration;
use tokio::task;
use tracing::warn;

use crate::errors::PipelineError;

pub struct Geocoder {
    delay: Duration,
}

impl Geocoder {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Best candidate location for a free-form address line, if any.
    ///
    /// Lookup failures are logged and reported as `None`: one unresolvable
    /// address must not abort a multi-hour harvest.
    ///
    /// # Errors
    ///
    /// Returns an error only if the blocking lookup task itself dies.
    pub async fn locate(&self, address: &str) -> Result<Option<Point<f64>>, PipelineError> {
        tokio::time::sleep(self.delay).await;

        let query = address.to_string();
        let candidates = task::spawn_blocking(move || {
            let osm = Openstreetmap::new();
            osm.forward(&query)
        })
        .await?;

        match candidates {
            Ok(points) => Ok(points.into_iter().next()),
            Err(e) => {
                warn!("Geocoding failed for {address:?}: {e}");
                Ok(None)
            }
        }
    }
}
