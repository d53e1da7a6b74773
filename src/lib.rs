//! Generates Go structs from a MySQL schema catalog: one struct per table, one
//! field per column, optionally tagged with the column name.

use crate::db::Db;
use clio::ClioPath;
use std::path::{Path, PathBuf};
use std::time::Instant;

pub mod column;
pub mod config;
pub mod db;
pub mod emit;
pub mod error;
pub mod ident;
pub mod sink;
pub mod type_map;

pub use crate::column::{ColumnSchema, Nullable};
pub use crate::config::{Config, GenerationConfig};
pub use crate::emit::{emit, EmittedOutput};
pub use crate::error::{Error, Result};
pub use crate::ident::format_name;
pub use crate::type_map::{map_type, MappedType};

/// Renders `columns` and writes them to `output`, returning the bytes written.
/// Nothing is written when any column fails to map.
pub fn generate(
    columns: &[ColumnSchema],
    config: &GenerationConfig,
    output: ClioPath,
) -> Result<usize> {
    let emitted = emit(columns, config)?;
    sink::write_output(&emitted, output)
}

pub struct DbStructsBuilder {
    config: Config,
    output: ClioPath,
}

impl Default for DbStructsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DbStructsBuilder {
    pub fn new() -> Self {
        Self {
            config: Config::default(),
            output: ClioPath::std(),
        }
    }

    pub fn from_config_file(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new().config(Config::from_file(path)?))
    }

    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn connection_string(mut self, url: impl Into<String>) -> Self {
        self.config.connection_string = Some(url.into());
        self
    }

    pub fn db_name(mut self, name: impl Into<String>) -> Self {
        self.config.db_name = name.into();
        self
    }

    pub fn package_name(mut self, name: impl Into<String>) -> Self {
        self.config.pkg_name = name.into();
        self
    }

    pub fn tag_label(mut self, label: impl Into<String>) -> Self {
        self.config.tag_label = label.into();
        self
    }

    /// Output destination, `-` being stdout
    pub fn output(mut self, output: ClioPath) -> Self {
        self.output = output;
        self
    }

    pub fn output_path(self, path: impl Into<PathBuf>) -> Self {
        self.output(ClioPath::local(path.into()))
    }

    pub fn get_config(&self) -> &Config {
        &self.config
    }

    /// Introspects the configured database and writes the generated structs.
    /// Returns the number of bytes written.
    pub async fn build(self) -> Result<usize> {
        let start = Instant::now();

        let mut db = Db::connect(&self.config).await?;
        let columns = db.column_schemas(&self.config.db_name).await?;
        db.close().await?;

        let written = generate(&columns, &self.config.generation(), self.output)?;

        log::info!(
            "Wrote {} bytes for schema {} in {:.2}s",
            written,
            self.config.db_name,
            start.elapsed().as_secs_f64()
        );

        Ok(written)
    }
}
