use std::borrow::Cow;

use crate::error::CursorError;
use crate::metadata::ResultMetadata;
use crate::schema::{Column, DataType, Row};
use crate::value::{FromCell, FromValue, Value};

/// Scrollable, read-only cursor over one query result.
///
/// Rows and columns are addressed 1-based. The position starts before the
/// first row and ranges over `[-1, row_count]`, where `-1` is before-first
/// and `row_count` is after-last.
///
/// Absent cells: a `null` cell and an empty-string cell both count as
/// absent. Primitive accessors return the type's zero value for them and
/// `get_object` returns `None` (text columns excepted, see
/// [`get_object`](Self::get_object)). `get_string` returns the raw cell
/// unchanged, so `""` comes back as `Some("")`, while still setting
/// [`was_null`](Self::was_null).
///
/// Numbers parse with Rust's `str::parse`, so float columns also accept
/// `inf`, `infinity` and `nan` in any case. Booleans accept only `true` or
/// `false`, ignoring case; other text is a format error.
///
/// Every successful accessor call overwrites the `was_null` flag, so a
/// cursor is not meant to be shared across threads without a lock.
#[derive(Debug, Clone)]
pub struct TabularCursor<'a> {
    columns: Cow<'a, [Column]>,
    rows: Cow<'a, [Row]>,
    position: isize,
    was_null: bool,
}

impl<'a> TabularCursor<'a> {
    /// Wrap a schema and its rows. Nothing is validated up front: a row
    /// shorter than the schema fails when one of its missing cells is read.
    pub fn new(columns: impl Into<Cow<'a, [Column]>>, rows: impl Into<Cow<'a, [Row]>>) -> Self {
        Self {
            columns: columns.into(),
            rows: rows.into(),
            position: -1,
            was_null: false,
        }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn count(&self) -> isize {
        self.rows.len() as isize
    }

    pub fn metadata(&self) -> ResultMetadata {
        ResultMetadata::new(&self.columns)
    }

    /// Nothing to release; consuming the cursor is all closing means.
    pub fn close(self) {}

    // -----------------------------------------------------------------------
    // Navigation
    // -----------------------------------------------------------------------

    /// Move to the next row. Returns `false` once past the last row; the
    /// position stays at after-last. On an empty result the cursor does
    /// not move.
    pub fn advance(&mut self) -> bool {
        let count = self.count();
        if count == 0 {
            return false;
        }
        self.position = (self.position + 1).min(count);
        self.position < count
    }

    pub fn before_first(&mut self) {
        self.position = -1;
    }

    pub fn after_last(&mut self) {
        self.position = self.count();
    }

    pub fn first(&mut self) -> bool {
        if self.rows.is_empty() {
            return false;
        }
        self.position = 0;
        true
    }

    pub fn last(&mut self) -> bool {
        if self.rows.is_empty() {
            return false;
        }
        self.position = self.count() - 1;
        true
    }

    /// Move to a 1-based row. Negative rows count from the end, so `-1` is
    /// the last row. Anything out of range leaves the cursor after-last.
    pub fn absolute(&mut self, row: isize) -> bool {
        let count = self.count();
        let row = if row < 0 { count + row + 1 } else { row };
        if row < 1 || row > count {
            self.position = count;
            return false;
        }
        self.position = row - 1;
        true
    }

    /// Same as `absolute(current_row_number() + rows)`, including its
    /// treatment of negative targets. A target that overflows `isize` is
    /// out of range.
    pub fn relative(&mut self, rows: isize) -> bool {
        match self.position.checked_add(1).and_then(|p| p.checked_add(rows)) {
            Some(target) => self.absolute(target),
            None => {
                self.position = self.count();
                false
            }
        }
    }

    pub fn previous(&mut self) -> bool {
        if self.position <= 0 {
            return false;
        }
        self.position -= 1;
        true
    }

    /// 1-based number of the current row, `0` when before-first.
    pub fn current_row_number(&self) -> usize {
        (self.position + 1) as usize
    }

    pub fn is_before_first(&self) -> bool {
        self.position == -1
    }

    pub fn is_after_last(&self) -> bool {
        !self.rows.is_empty() && self.position >= self.count()
    }

    pub fn is_first(&self) -> bool {
        !self.rows.is_empty() && self.position == 0
    }

    pub fn is_last(&self) -> bool {
        !self.rows.is_empty() && self.position == self.count() - 1
    }

    // -----------------------------------------------------------------------
    // Field access
    // -----------------------------------------------------------------------

    /// Whether the cell read by the last accessor was absent.
    pub fn was_null(&self) -> bool {
        self.was_null
    }

    /// 1-based index of the first column whose name matches, ignoring case.
    pub fn find_column(&self, name: &str) -> Result<usize, CursorError> {
        self.columns
            .iter()
            .position(|c| eq_ignore_case(&c.name, name))
            .map(|i| i + 1)
            .ok_or_else(|| CursorError::ColumnNotFound(name.to_string()))
    }

    /// Raw cell at the current row.
    fn cell(&self, column: usize) -> Result<Option<&str>, CursorError> {
        let row = usize::try_from(self.position)
            .ok()
            .and_then(|p| self.rows.get(p))
            .ok_or(CursorError::NoCurrentRow)?;
        let out_of_range = CursorError::ColumnIndex {
            index: column,
            count: self.columns.len(),
        };
        if column < 1 || column > self.columns.len() {
            return Err(out_of_range);
        }
        let cell = row.get(column - 1).ok_or(out_of_range)?;
        Ok(cell.as_deref())
    }

    fn read<T: FromCell>(&mut self, column: usize) -> Result<T, CursorError> {
        let parsed = match self.cell(column)? {
            None | Some("") => None,
            Some(text) => Some(T::parse_cell(text).ok_or_else(|| CursorError::Format {
                column,
                target: T::TARGET,
                value: text.to_string(),
            })),
        };
        self.was_null = parsed.is_none();
        parsed.unwrap_or_else(|| Ok(T::zero()))
    }

    pub fn get_string(&mut self, column: usize) -> Result<Option<String>, CursorError> {
        let value = self.cell(column)?.map(str::to_owned);
        self.was_null = value.as_deref().is_none_or(str::is_empty);
        Ok(value)
    }

    pub fn get_boolean(&mut self, column: usize) -> Result<bool, CursorError> {
        self.read(column)
    }

    pub fn get_byte(&mut self, column: usize) -> Result<i8, CursorError> {
        self.read(column)
    }

    pub fn get_short(&mut self, column: usize) -> Result<i16, CursorError> {
        self.read(column)
    }

    pub fn get_int(&mut self, column: usize) -> Result<i32, CursorError> {
        self.read(column)
    }

    pub fn get_long(&mut self, column: usize) -> Result<i64, CursorError> {
        self.read(column)
    }

    pub fn get_float(&mut self, column: usize) -> Result<f32, CursorError> {
        self.read(column)
    }

    pub fn get_double(&mut self, column: usize) -> Result<f64, CursorError> {
        self.read(column)
    }

    /// Read a cell as its declared column type.
    ///
    /// Absent cells give `None`. A text column returns an empty cell as
    /// `Some(Value::Text(""))`, matching `get_string`.
    pub fn get_object(&mut self, column: usize) -> Result<Option<Value>, CursorError> {
        let cell = self.cell(column)?;
        let absent = cell.is_none_or(str::is_empty);
        let data_type = self.columns[column - 1].data_type;
        let parsed = match cell {
            None => None,
            Some("") if data_type != DataType::Utf8 => None,
            Some(text) => Some(Value::parse(data_type, text).ok_or_else(|| {
                CursorError::Format {
                    column,
                    target: data_type.as_str(),
                    value: text.to_string(),
                }
            })),
        };
        self.was_null = absent;
        parsed.transpose()
    }

    /// Read a cell as its declared type and require it to be a `T`.
    pub fn get_object_as<T: FromValue>(&mut self, column: usize) -> Result<Option<T>, CursorError> {
        self.get_object(column)?
            .map(|value| {
                T::from_value(value).map_err(|other| CursorError::Cast {
                    column,
                    target: T::TARGET,
                    actual: other.kind(),
                })
            })
            .transpose()
    }

    pub fn get_string_by_name(&mut self, name: &str) -> Result<Option<String>, CursorError> {
        let column = self.find_column(name)?;
        self.get_string(column)
    }

    pub fn get_boolean_by_name(&mut self, name: &str) -> Result<bool, CursorError> {
        let column = self.find_column(name)?;
        self.get_boolean(column)
    }

    pub fn get_byte_by_name(&mut self, name: &str) -> Result<i8, CursorError> {
        let column = self.find_column(name)?;
        self.get_byte(column)
    }

    pub fn get_short_by_name(&mut self, name: &str) -> Result<i16, CursorError> {
        let column = self.find_column(name)?;
        self.get_short(column)
    }

    pub fn get_int_by_name(&mut self, name: &str) -> Result<i32, CursorError> {
        let column = self.find_column(name)?;
        self.get_int(column)
    }

    pub fn get_long_by_name(&mut self, name: &str) -> Result<i64, CursorError> {
        let column = self.find_column(name)?;
        self.get_long(column)
    }

    pub fn get_float_by_name(&mut self, name: &str) -> Result<f32, CursorError> {
        let column = self.find_column(name)?;
        self.get_float(column)
    }

    pub fn get_double_by_name(&mut self, name: &str) -> Result<f64, CursorError> {
        let column = self.find_column(name)?;
        self.get_double(column)
    }

    pub fn get_object_by_name(&mut self, name: &str) -> Result<Option<Value>, CursorError> {
        let column = self.find_column(name)?;
        self.get_object(column)
    }

    pub fn get_object_as_by_name<T: FromValue>(
        &mut self,
        name: &str,
    ) -> Result<Option<T>, CursorError> {
        let column = self.find_column(name)?;
        self.get_object_as(column)
    }
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}
