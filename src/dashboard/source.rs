use std::future::Future;

use crate::error::FetchError;
use crate::selection::FetchRequest;
use crate::telemetry::RawReading;

/// The data-fetch boundary: one network call per fetch cycle.
pub trait ReadingSource {
    fn fetch(
        &self,
        request: &FetchRequest,
    ) -> impl Future<Output = Result<Vec<RawReading>, FetchError>> + Send;
}
