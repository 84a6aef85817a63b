use serde::{Deserialize, Serialize};

/// Declared column type, as reported by the service in `data_type`.
///
/// Only five wire names carry meaning; every other name (`"Utf8"`,
/// `"Date32"`, `"Decimal128(18, 2)"`, ...) is read as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DataType {
    Int32,
    Int64,
    Float32,
    Float64,
    Boolean,
    #[default]
    Utf8,
}

impl DataType {
    pub fn from_wire(name: &str) -> Self {
        match name {
            "Int32" => Self::Int32,
            "Int64" => Self::Int64,
            "Float32" => Self::Float32,
            "Float64" => Self::Float64,
            "Boolean" => Self::Boolean,
            _ => Self::Utf8,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Int32 => "Int32",
            Self::Int64 => "Int64",
            Self::Float32 => "Float32",
            Self::Float64 => "Float64",
            Self::Boolean => "Boolean",
            Self::Utf8 => "Utf8",
        }
    }
}

/// A single column of a result schema.
///
/// `type_name` is the raw wire string; `data_type` is what the cursor
/// coerces by.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "WireColumn", into = "WireColumn")]
pub struct Column {
    pub name: String,
    pub data_type: DataType,
    pub type_name: String,
}

impl Column {
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
            type_name: data_type.as_str().to_string(),
        }
    }

    /// Build a column from its wire form, keeping the raw type name.
    pub fn from_wire(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        let type_name = type_name.into();
        Self {
            name: name.into(),
            data_type: DataType::from_wire(&type_name),
            type_name,
        }
    }
}

/// `{ "name": ..., "data_type": ... }`
#[derive(Serialize, Deserialize)]
struct WireColumn {
    name: String,
    #[serde(default)]
    data_type: String,
}

impl From<WireColumn> for Column {
    fn from(w: WireColumn) -> Self {
        Column::from_wire(w.name, w.data_type)
    }
}

impl From<Column> for WireColumn {
    fn from(c: Column) -> Self {
        WireColumn {
            name: c.name,
            data_type: c.type_name,
        }
    }
}

/// Ordered column list. Position determines the column index.
pub type ColumnSchema = Vec<Column>;

/// One row of nullable text cells, positional against the schema.
pub type Row = Vec<Option<String>>;

/// Rows as received from the service. Rows are expected, not checked, to
/// have one cell per schema column.
pub type RowMatrix = Vec<Row>;
