use crate::error::ObserverError;

/// Result of registry and notification operations
pub type ObserverResult<T> = Result<T, ObserverError>;
