pub mod cursor;
pub mod error;
pub mod metadata;
pub mod schema;
pub mod value;

pub use cursor::TabularCursor;
pub use error::{CursorError, ErrorKind};
pub use metadata::{Nullability, ResultMetadata, SqlType};
pub use schema::{Column, ColumnSchema, DataType, Row, RowMatrix};
pub use value::{FromValue, Value, ValueKind};
