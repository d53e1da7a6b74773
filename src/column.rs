use sqlx::mysql::MySqlRow;
use sqlx::Row;

/// Catalog nullability flag (`IS_NULLABLE`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Nullable {
    Yes,
    #[default]
    No,
}

impl From<&str> for Nullable {
    fn from(s: &str) -> Self {
        match s {
            "YES" => Nullable::Yes,
            _ => Nullable::No,
        }
    }
}

/// One row of `information_schema.COLUMNS`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColumnSchema {
    pub table_name: String,
    pub column_name: String,
    pub is_nullable: Nullable,
    pub data_type: String,
    pub character_maximum_length: Option<i64>,
    pub numeric_precision: Option<i64>,
    pub numeric_scale: Option<i64>,
    pub column_type: String,
    pub column_key: String,
}

impl ColumnSchema {
    pub fn new(
        table_name: impl Into<String>,
        column_name: impl Into<String>,
        data_type: impl Into<String>,
        is_nullable: Nullable,
    ) -> Self {
        let data_type = data_type.into();

        Self {
            table_name: table_name.into(),
            column_name: column_name.into(),
            is_nullable,
            column_type: data_type.clone(),
            data_type,
            ..Default::default()
        }
    }

    pub fn nullable(&self) -> bool {
        self.is_nullable == Nullable::Yes
    }

    /// `table.column`, as used in diagnostics
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.table_name, self.column_name)
    }
}

impl TryFrom<MySqlRow> for ColumnSchema {
    type Error = sqlx::Error;

    fn try_from(row: MySqlRow) -> Result<Self, Self::Error> {
        Ok(Self {
            table_name: row.try_get(0)?,
            column_name: row.try_get(1)?,
            is_nullable: row.try_get::<&str, _>(2)?.into(),
            data_type: row.try_get(3)?,
            character_maximum_length: row.try_get(4)?,
            numeric_precision: row.try_get(5)?,
            numeric_scale: row.try_get(6)?,
            column_type: row.try_get(7)?,
            column_key: row.try_get(8)?,
        })
    }
}
