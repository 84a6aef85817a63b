use lathe_api::{CursorError, TabularCursor};

const SEPARATOR: &str = " | ";

/// Render a result as text lines: a header of column names, then one line
/// per row with `NULL` for absent cells.
///
/// Rewinds the cursor first and leaves it after the last row.
pub fn render_table(cursor: &mut TabularCursor<'_>) -> Result<Vec<String>, CursorError> {
    let metadata = cursor.metadata();
    let column_count = metadata.column_count();

    let header = (1..=column_count)
        .map(|c| metadata.column_name(c))
        .collect::<Result<Vec<_>, _>>()?
        .join(SEPARATOR);

    let mut lines = Vec::with_capacity(cursor.row_count() + 1);
    lines.push(header);

    cursor.before_first();
    while cursor.advance() {
        let mut cells = Vec::with_capacity(column_count);
        for c in 1..=column_count {
            cells.push(cursor.get_string(c)?.unwrap_or_else(|| "NULL".to_string()));
        }
        lines.push(cells.join(SEPARATOR));
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use lathe_api::{Column, DataType, ErrorKind};

    use super::*;

    #[test]
    fn renders_header_and_rows() {
        let columns = vec![
            Column::new("id", DataType::Int32),
            Column::new("name", DataType::Utf8),
        ];
        let rows = vec![
            vec![Some("1".to_string()), Some("John".to_string())],
            vec![Some("2".to_string()), None],
        ];
        let mut cursor = TabularCursor::new(columns, rows);
        cursor.advance();

        let lines = render_table(&mut cursor).unwrap();
        assert_eq!(lines, ["id | name", "1 | John", "2 | NULL"]);
        assert!(cursor.is_after_last());
    }

    #[test]
    fn short_row_is_an_error() {
        let columns = vec![
            Column::new("a", DataType::Utf8),
            Column::new("b", DataType::Utf8),
        ];
        let mut cursor = TabularCursor::new(columns, vec![vec![Some("x".to_string())]]);
        let err = render_table(&mut cursor).unwrap_err();
        assert_eq!(err, CursorError::ColumnIndex { index: 2, count: 2 });
        assert_eq!(err.kind(), ErrorKind::Range);
    }
}
