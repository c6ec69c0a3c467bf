use diesel::result::Error as DieselError;

/// Coarse classification the central error handler dispatches on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Cast,
    Validation,
    Type,
    Other,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Cast to id failed for value \"{value}\"")]
    Cast { value: String },
    #[error("{0}")]
    Validation(String),
    #[error("Type error: {0}")]
    Type(String),
    #[error("Malformed request body: {0}")]
    Body(String),
    #[error("Request body exceeds {limit} bytes")]
    PayloadTooLarge { limit: usize },
    #[error("Corrupt stored record: {0}")]
    Record(String),
    #[error("Diesel error: {0}")]
    Database(#[from] DieselError),
    #[error("Pool error: {0}")]
    Pool(#[from] r2d2::Error),
    #[error("Blocking task failed: {0}")]
    Blocking(#[from] tokio::task::JoinError),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Cast { .. } => ErrorKind::Cast,
            Error::Validation(_) => ErrorKind::Validation,
            Error::Type(_) => ErrorKind::Type,
            _ => ErrorKind::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_kinds_are_preserved() {
        let cast = Error::Cast {
            value: "abc".to_string(),
        };
        assert_eq!(cast.kind(), ErrorKind::Cast);
        assert_eq!(cast.to_string(), "Cast to id failed for value \"abc\"");
        assert_eq!(
            Error::Validation("bad".to_string()).kind(),
            ErrorKind::Validation
        );
        assert_eq!(Error::Type("gone".to_string()).kind(), ErrorKind::Type);
    }

    #[test]
    fn infrastructure_failures_are_unclassified() {
        assert_eq!(Error::Database(DieselError::NotFound).kind(), ErrorKind::Other);
        assert_eq!(Error::Body("eof".to_string()).kind(), ErrorKind::Other);
        assert_eq!(Error::Record("bad id".to_string()).kind(), ErrorKind::Other);
    }
}
