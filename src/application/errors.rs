// Error types shared by the repository seam and the services
use thiserror::Error;

/// Failures reported by a [`DashboardRepository`](super::dashboard_repository::DashboardRepository)
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("foreign key constraint failed")]
    ForeignKey,

    #[error("unique constraint failed")]
    Unique,

    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("{0}")]
    Validation(String),

    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    #[error("{0}")]
    Conflict(String),

    #[error("storage error: {0}")]
    Storage(anyhow::Error),
}

impl DashboardError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

impl From<RepositoryError> for DashboardError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Backend(e) => Self::Storage(e),
            other => Self::Storage(anyhow::Error::new(other)),
        }
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;

/// Returns the trimmed value when it is present and not blank
pub(crate) fn required_text(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Position one past the highest sibling, or 0 for the first sibling
pub(crate) fn next_position(max: Option<i64>) -> Result<i64> {
    match max {
        None => Ok(0),
        Some(max) => max.checked_add(1).ok_or_else(|| {
            DashboardError::validation("positions are exhausted, reorder the siblings first")
        }),
    }
}
