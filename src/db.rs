use crate::column::ColumnSchema;
use crate::config::Config;
use crate::error::Result;
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
use sqlx::{ConnectOptions, Connection};
use std::str::FromStr;

// MySQL 8 reports several catalog columns with binary collations, hence the casts.
const COLUMNS_INTROSPECTION_QUERY: &str = "\
SELECT CAST(TABLE_NAME AS CHAR), CAST(COLUMN_NAME AS CHAR), CAST(IS_NULLABLE AS CHAR), \
CAST(DATA_TYPE AS CHAR), CAST(CHARACTER_MAXIMUM_LENGTH AS SIGNED), \
CAST(NUMERIC_PRECISION AS SIGNED), CAST(NUMERIC_SCALE AS SIGNED), \
CAST(COLUMN_TYPE AS CHAR), CAST(COLUMN_KEY AS CHAR) \
FROM COLUMNS WHERE TABLE_SCHEMA = ? ORDER BY TABLE_NAME, ORDINAL_POSITION";

pub struct Db {
    pub conn: MySqlConnection,
}

impl Db {
    pub async fn connect(config: &Config) -> Result<Self> {
        let conn = Self::connect_options(config)?.connect().await?;

        log::info!("Connected to MySQL");

        Ok(Db { conn })
    }

    /// Catalog connection options. The catalog always lives in `information_schema`,
    /// whatever database a connection string names.
    pub fn connect_options(config: &Config) -> Result<MySqlConnectOptions> {
        let options = match &config.connection_string {
            Some(url) => MySqlConnectOptions::from_str(url)?,
            None => {
                let mut options = MySqlConnectOptions::new()
                    .username(&config.db_user)
                    .password(&config.db_password);
                if !config.host.is_empty() && config.port > 0 {
                    options = options.host(&config.host).port(config.port);
                }
                options
            }
        };

        Ok(options.database("information_schema"))
    }

    /// Column metadata of every table in `db_name`, grouped by table and in
    /// column order.
    pub async fn column_schemas(&mut self, db_name: &str) -> Result<Vec<ColumnSchema>> {
        let columns = sqlx::query(COLUMNS_INTROSPECTION_QUERY)
            .bind(db_name)
            .fetch_all(&mut self.conn)
            .await?
            .into_iter()
            .map(ColumnSchema::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        log::info!("Found {} columns in schema {}", columns.len(), db_name);

        Ok(columns)
    }

    pub async fn close(self) -> Result<()> {
        self.conn.close().await?;
        Ok(())
    }
}
