use super::error::{ExecErr, Result};
use crate::query::extract_fields;
use crate::storage::{ColumnSpec, TableSpec, ValueType};

const FIELDS_PER_COLUMN: usize = 4;

/// Builds the schema of `table` from a CREATE TABLE column block.
///
/// Each column is a `(name, type, size, default)` record. The whole table is
/// rejected on the first bad type or size, and when the fields do not split
/// evenly into records.
pub fn build_table(table: &str, columns_block: &str) -> Result<TableSpec> {
    let fields = extract_fields(columns_block);

    let leftover = fields.len() % FIELDS_PER_COLUMN;
    if leftover != 0 {
        return Err(ExecErr::IncompleteColumn {
            table: table.to_string(),
            leftover,
        });
    }

    let mut columns = Vec::with_capacity(fields.len() / FIELDS_PER_COLUMN);
    let mut fields = fields.iter();
    while let (Some(name), Some(value_type), Some(size), Some(default_value)) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    {
        columns.push(build_column(name, value_type, size, default_value)?);
    }

    Ok(TableSpec::new(table, columns))
}

fn build_column(name: &str, value_type: &str, size: &str, default_value: &str) -> Result<ColumnSpec> {
    let value_type: ValueType = value_type
        .parse()
        .map_err(|_| ExecErr::UnknownType(value_type.to_string()))?;
    let size: usize = size
        .parse()
        .map_err(|_| ExecErr::InvalidSize(size.to_string()))?;
    Ok(ColumnSpec::new(name, value_type, size, default_value))
}
