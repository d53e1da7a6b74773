use std::path::PathBuf;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no compatible datatype for {table}.{column} found (data type `{data_type}`)")]
    UnsupportedType {
        table: String,
        column: String,
        data_type: String,
    },

    #[error("schema access failed: {0}")]
    SchemaAccess(#[from] sqlx::Error),

    #[error("could not write output: {0}")]
    OutputSink(#[source] std::io::Error),

    #[error("invalid config file {}: {message}", path.display())]
    Config { path: PathBuf, message: String },
}
