#[derive(thiserror::Error, Debug)]
pub enum ReadError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

#[derive(thiserror::Error, Debug)]
pub enum WriteError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialization(String),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_error_from_storage_error() {
        assert!(matches!(
            ReadError::from(StorageError::Serialization("foo".to_string())),
            ReadError::Storage(StorageError::Serialization(error)) if error == "foo"
        ));
    }

    #[test]
    fn test_storage_error_from_io_error() {
        let error = StorageError::from(std::io::Error::from(std::io::ErrorKind::NotFound));
        assert!(matches!(
            error,
            StorageError::Io(err) if err.kind() == std::io::ErrorKind::NotFound
        ));
    }
}
