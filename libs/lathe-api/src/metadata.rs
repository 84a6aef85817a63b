use crate::error::CursorError;
use crate::schema::{Column, ColumnSchema, DataType};

/// Generic SQL type a column is reported as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlType {
    Integer,
    Double,
    Boolean,
    Varchar,
}

impl SqlType {
    /// Numeric type code as used by `java.sql.Types`.
    pub fn code(&self) -> i32 {
        match self {
            Self::Integer => 4,
            Self::Double => 8,
            Self::Boolean => 16,
            Self::Varchar => 12,
        }
    }
}

impl From<DataType> for SqlType {
    fn from(t: DataType) -> Self {
        match t {
            DataType::Int32 | DataType::Int64 => Self::Integer,
            DataType::Float32 | DataType::Float64 => Self::Double,
            DataType::Boolean => Self::Boolean,
            DataType::Utf8 => Self::Varchar,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nullability {
    NoNulls,
    Nullable,
    Unknown,
}

/// Column metadata of a result, derived from the schema alone.
///
/// Holds no reference to cursor state, so it stays valid regardless of
/// where the cursor is positioned. Column indices are 1-based.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultMetadata {
    columns: ColumnSchema,
}

impl ResultMetadata {
    pub fn new(columns: &[Column]) -> Self {
        Self {
            columns: columns.to_vec(),
        }
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    fn column(&self, column: usize) -> Result<&Column, CursorError> {
        column
            .checked_sub(1)
            .and_then(|i| self.columns.get(i))
            .ok_or(CursorError::ColumnIndex {
                index: column,
                count: self.columns.len(),
            })
    }

    pub fn column_name(&self, column: usize) -> Result<&str, CursorError> {
        Ok(&self.column(column)?.name)
    }

    /// The wire format has no display labels; the label is the name.
    pub fn column_label(&self, column: usize) -> Result<&str, CursorError> {
        self.column_name(column)
    }

    pub fn column_type(&self, column: usize) -> Result<SqlType, CursorError> {
        Ok(self.column(column)?.data_type.into())
    }

    /// Raw type name as sent by the service, e.g. `"Int32"` or `"Date32"`.
    pub fn column_type_name(&self, column: usize) -> Result<&str, CursorError> {
        Ok(&self.column(column)?.type_name)
    }

    pub fn column_class_name(&self, column: usize) -> Result<&'static str, CursorError> {
        Ok(match self.column(column)?.data_type {
            DataType::Int32 => "Integer",
            DataType::Int64 => "Long",
            DataType::Float32 => "Float",
            DataType::Float64 => "Double",
            DataType::Boolean => "Boolean",
            DataType::Utf8 => "String",
        })
    }

    pub fn is_nullable(&self, column: usize) -> Result<Nullability, CursorError> {
        self.column(column)?;
        Ok(Nullability::Nullable)
    }

    pub fn is_auto_increment(&self, column: usize) -> Result<bool, CursorError> {
        self.column(column).map(|_| false)
    }

    pub fn is_case_sensitive(&self, column: usize) -> Result<bool, CursorError> {
        self.column(column).map(|_| true)
    }

    pub fn is_searchable(&self, column: usize) -> Result<bool, CursorError> {
        self.column(column).map(|_| true)
    }

    pub fn is_currency(&self, column: usize) -> Result<bool, CursorError> {
        self.column(column).map(|_| false)
    }

    pub fn is_signed(&self, column: usize) -> Result<bool, CursorError> {
        self.column(column).map(|_| true)
    }

    pub fn is_read_only(&self, column: usize) -> Result<bool, CursorError> {
        self.column(column).map(|_| true)
    }

    pub fn is_writable(&self, column: usize) -> Result<bool, CursorError> {
        self.column(column).map(|_| false)
    }

    pub fn is_definitely_writable(&self, column: usize) -> Result<bool, CursorError> {
        self.column(column).map(|_| false)
    }

    pub fn column_display_size(&self, column: usize) -> Result<u32, CursorError> {
        self.column(column).map(|_| 0)
    }

    pub fn precision(&self, column: usize) -> Result<u32, CursorError> {
        self.column(column).map(|_| 0)
    }

    pub fn scale(&self, column: usize) -> Result<u32, CursorError> {
        self.column(column).map(|_| 0)
    }

    // No source-table provenance in the wire format.

    pub fn schema_name(&self, column: usize) -> Result<&str, CursorError> {
        self.column(column).map(|_| "")
    }

    pub fn table_name(&self, column: usize) -> Result<&str, CursorError> {
        self.column(column).map(|_| "")
    }

    pub fn catalog_name(&self, column: usize) -> Result<&str, CursorError> {
        self.column(column).map(|_| "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn metadata() -> ResultMetadata {
        ResultMetadata::new(&[
            Column::new("id", DataType::Int32),
            Column::new("total", DataType::Int64),
            Column::new("ratio", DataType::Float32),
            Column::new("score", DataType::Float64),
            Column::new("active", DataType::Boolean),
            Column::from_wire("day", "Date32"),
        ])
    }

    #[test]
    fn type_mapping() {
        let md = metadata();
        let types: Vec<SqlType> = (1..=6).map(|c| md.column_type(c).unwrap()).collect();
        assert_eq!(
            types,
            vec![
                SqlType::Integer,
                SqlType::Integer,
                SqlType::Double,
                SqlType::Double,
                SqlType::Boolean,
                SqlType::Varchar,
            ]
        );
        assert_eq!(SqlType::Integer.code(), 4);
        assert_eq!(SqlType::Varchar.code(), 12);
    }

    #[test]
    fn class_names_and_raw_type_names() {
        let md = metadata();
        let classes: Vec<&str> = (1..=6).map(|c| md.column_class_name(c).unwrap()).collect();
        assert_eq!(classes, ["Integer", "Long", "Float", "Double", "Boolean", "String"]);
        assert_eq!(md.column_type_name(1).unwrap(), "Int32");
        assert_eq!(md.column_type_name(6).unwrap(), "Date32");
    }

    #[test]
    fn constant_descriptors() {
        let md = metadata();
        assert_eq!(md.column_count(), 6);
        assert_eq!(md.column_label(2).unwrap(), "total");
        assert_eq!(md.is_nullable(1).unwrap(), Nullability::Nullable);
        assert!(md.is_case_sensitive(1).unwrap());
        assert!(md.is_searchable(1).unwrap());
        assert!(!md.is_currency(1).unwrap());
        assert!(md.is_signed(1).unwrap());
        assert!(md.is_read_only(1).unwrap());
        assert!(!md.is_writable(1).unwrap());
        assert_eq!(md.precision(1).unwrap(), 0);
        assert_eq!(md.table_name(1).unwrap(), "");
    }

    #[test]
    fn out_of_range_column() {
        let md = metadata();
        assert_eq!(md.column_name(0).unwrap_err().kind(), ErrorKind::Range);
        assert_eq!(md.column_name(7).unwrap_err().kind(), ErrorKind::Range);
    }
}
