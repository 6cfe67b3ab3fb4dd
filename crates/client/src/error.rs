use reqwest::StatusCode;
use thiserror::Error;

/// One error taxonomy for every store method; no store swallows failures.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },
    #[error("{status}: {message}")]
    Server { status: StatusCode, message: String },
}

/// Map a non-success status to the store error for an entity lookup.
pub(crate) fn status_error(
    entity: &'static str,
    id: i64,
    status: StatusCode,
    message: String,
) -> StoreError {
    if status == StatusCode::NOT_FOUND {
        StoreError::NotFound { entity, id }
    } else {
        StoreError::Server { status, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_its_own_variant() {
        let err = status_error("wallet", 4, StatusCode::NOT_FOUND, "gone".to_string());
        assert!(matches!(
            err,
            StoreError::NotFound {
                entity: "wallet",
                id: 4
            }
        ));
        assert_eq!(err.to_string(), "wallet 4 not found");
    }

    #[test]
    fn other_statuses_surface_status_and_message() {
        let err = status_error(
            "budget",
            1,
            StatusCode::INTERNAL_SERVER_ERROR,
            "boom".to_string(),
        );
        assert_eq!(err.to_string(), "500 Internal Server Error: boom");
    }
}
