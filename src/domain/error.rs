use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("Password hashing failed: {0}")]
    PasswordHash(String),
}

#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A username or email uniqueness constraint rejected the write
    #[error("Unique constraint violated: {0}")]
    UniqueViolation(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repository_error_converts_into_domain_error() {
        let error: DomainError = RepositoryError::DatabaseError("connection reset".to_string()).into();

        assert!(matches!(error, DomainError::Repository(RepositoryError::DatabaseError(_))));
        assert_eq!(error.to_string(), "Repository error: Database error: connection reset");
    }
}
