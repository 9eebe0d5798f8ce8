use thiserror::Error;
use validator::ValidationErrors;

use crate::resolver::ResolveError;

#[derive(Debug, Error)]
pub enum ModelError {
    /// Resolution failed for a reference held by `record`; the record type
    /// name locates the offending data.
    #[error("{record}. Got {source}")]
    Resolve {
        record: &'static str,
        #[source]
        source: ResolveError,
    },
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
}
