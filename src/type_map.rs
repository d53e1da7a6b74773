use crate::column::ColumnSchema;
use crate::error::{Error, Result};
use phf::phf_map;

pub const SQL_IMPORT: &str = "database/sql";
pub const TIME_IMPORT: &str = "time";

/// Go type chosen for a column, plus the package the generated file has to
/// import for it (if any).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MappedType {
    pub type_name: &'static str,
    pub import: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeFamily {
    Text,
    Blob,
    Temporal,
    Integer,
    Float,
}

static CATALOG_TYPES: phf::Map<&'static str, TypeFamily> = phf_map! {
    "varchar" => TypeFamily::Text,
    "enum" => TypeFamily::Text,
    "text" => TypeFamily::Text,
    "longtext" => TypeFamily::Text,
    "mediumtext" => TypeFamily::Text,
    "blob" => TypeFamily::Blob,
    "mediumblob" => TypeFamily::Blob,
    "longblob" => TypeFamily::Blob,
    "date" => TypeFamily::Temporal,
    "time" => TypeFamily::Temporal,
    "datetime" => TypeFamily::Temporal,
    "timestamp" => TypeFamily::Temporal,
    "tinyint" => TypeFamily::Integer,
    "smallint" => TypeFamily::Integer,
    "int" => TypeFamily::Integer,
    "mediumint" => TypeFamily::Integer,
    "bigint" => TypeFamily::Integer,
    "float" => TypeFamily::Float,
    "decimal" => TypeFamily::Float,
    "double" => TypeFamily::Float,
};

impl TypeFamily {
    pub fn from_catalog(data_type: &str) -> Option<Self> {
        CATALOG_TYPES.get(data_type).copied()
    }

    /// Blobs and temporal values are never wrapped, even when nullable.
    pub fn go_type(self, nullable: bool) -> MappedType {
        let (type_name, import) = match (self, nullable) {
            (TypeFamily::Text, false) => ("string", None),
            (TypeFamily::Text, true) => ("sql.NullString", Some(SQL_IMPORT)),
            (TypeFamily::Blob, _) => ("[]byte", None),
            (TypeFamily::Temporal, _) => ("time.Time", Some(TIME_IMPORT)),
            (TypeFamily::Integer, false) => ("int64", None),
            (TypeFamily::Integer, true) => ("sql.NullInt64", Some(SQL_IMPORT)),
            (TypeFamily::Float, false) => ("float64", None),
            (TypeFamily::Float, true) => ("sql.NullFloat64", Some(SQL_IMPORT)),
        };

        MappedType { type_name, import }
    }
}

pub fn map_type(col: &ColumnSchema) -> Result<MappedType> {
    let family =
        TypeFamily::from_catalog(&col.data_type).ok_or_else(|| Error::UnsupportedType {
            table: col.table_name.clone(),
            column: col.column_name.clone(),
            data_type: col.data_type.clone(),
        })?;

    let mapped = family.go_type(col.nullable());
    log::trace!("{} ({}) -> {}", col.qualified_name(), col.data_type, mapped.type_name);

    Ok(mapped)
}
