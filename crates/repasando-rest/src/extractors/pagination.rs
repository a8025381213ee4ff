//! Pagination extractor.

use repasando_config::PaginationConfig;
use repasando_core::{PageRequest, RepasandoError, RepasandoResult};
use serde::Deserialize;
use utoipa::IntoParams;

/// Query parameters for paginated listings.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageSizeQuery {
    /// Items per page. Defaults to the configured page size, capped at the
    /// configured maximum.
    #[serde(default)]
    pub size: Option<i64>,
}

impl PageSizeQuery {
    /// Combines the path page number with this query into a page request.
    ///
    /// Negative page numbers and sizes below one are rejected; oversized
    /// pages are clamped to `config.max_page_size`.
    pub fn to_page_request(&self, page: i64, config: &PaginationConfig) -> RepasandoResult<PageRequest> {
        let page = usize::try_from(page)
            .map_err(|_| RepasandoError::invalid_page("page number must be >= 0"))?;

        let size = match self.size {
            None => config.default_page_size,
            Some(size) if size < 1 => {
                return Err(RepasandoError::invalid_page("page size must be >= 1"));
            }
            Some(size) => usize::try_from(size).unwrap_or(usize::MAX),
        };

        Ok(PageRequest::bounded(page, size, config.max_page_size))
    }
}
