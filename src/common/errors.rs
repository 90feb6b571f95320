use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Record {index} in collection {collection:?} has an empty primary label")]
    EmptyLabel { collection: String, index: usize },

    #[error("Collection {0:?} is defined more than once")]
    DuplicateCollection(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value {value:?} for {name}")]
    InvalidVar { name: &'static str, value: String },
}
