pub mod registry;

pub use registry::{RegistryErr, TableRegistry};

use std::collections::HashMap;
use std::fmt::{self, Display};
use std::str::FromStr;

#[repr(u8)]
#[derive(PartialEq, Eq, Hash, Clone, Debug, Copy)]
pub enum ValueType {
    Number = 1,
    String = 2,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownType(pub String);

impl ValueType {
    pub fn as_str(self) -> &'static str {
        match self {
            ValueType::Number => "number",
            ValueType::String => "string",
        }
    }
}

impl FromStr for ValueType {
    type Err = UnknownType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "number" => Ok(ValueType::Number),
            "string" => Ok(ValueType::String),
            _ => Err(UnknownType(s.to_string())),
        }
    }
}

impl Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    name: String,
    value_type: ValueType,
    size: usize,
    // kept as typed by the user, never coerced
    default_value: String,
}

impl ColumnSpec {
    pub fn new(name: &str, value_type: ValueType, size: usize, default_value: &str) -> Self {
        Self {
            name: name.to_string(),
            value_type,
            size,
            default_value: default_value.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn default_value(&self) -> &str {
        &self.default_value
    }
}

impl Display for ColumnSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Column name: {}", self.name)?;
        writeln!(f, "Type: {}", self.value_type)?;
        writeln!(f, "Size: {}", self.size)?;
        writeln!(f, "Default: {}", self.default_value)?;
        write!(f, "~~~~~~~~~~~~~~~~")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSpec {
    name: String,
    columns: Vec<ColumnSpec>,
}

impl TableSpec {
    pub fn new(name: &str, columns: Vec<ColumnSpec>) -> Self {
        Self {
            name: name.to_string(),
            columns,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }
}

impl Display for TableSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "------ <{}> ------", self.name)?;
        for column in &self.columns {
            write!(f, "\n{}", column)?;
        }
        Ok(())
    }
}

/// Owner of the table schemas produced by CREATE TABLE.
///
/// Existence is decided by the [`TableRegistry`]; a store only keeps the
/// schema that belongs to a registered name.
pub trait TableStore {
    fn store(&mut self, table: TableSpec);
    fn evict(&mut self, name: &str) -> Option<TableSpec>;
    fn get(&self, name: &str) -> Option<&TableSpec>;
}

/// In-memory table collection, lives as long as the session.
#[derive(Debug, Default)]
pub struct TableBuffer {
    tables: HashMap<String, TableSpec>,
}

impl TableBuffer {
    pub fn new() -> Self {
        Self {
            tables: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl TableStore for TableBuffer {
    fn store(&mut self, table: TableSpec) {
        self.tables.insert(table.name.clone(), table);
    }

    fn evict(&mut self, name: &str) -> Option<TableSpec> {
        self.tables.remove(name)
    }

    fn get(&self, name: &str) -> Option<&TableSpec> {
        self.tables.get(name)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_value_type_is_case_insensitive() {
        assert_eq!("number".parse::<ValueType>(), Ok(ValueType::Number));
        assert_eq!("NUMBER".parse::<ValueType>(), Ok(ValueType::Number));
        assert_eq!("String".parse::<ValueType>(), Ok(ValueType::String));
    }

    #[test]
    fn test_value_type_rejects_unknown() {
        assert_eq!(
            "bool".parse::<ValueType>(),
            Err(UnknownType("bool".to_string()))
        );
        assert!("".parse::<ValueType>().is_err());
    }

    #[test]
    fn test_table_display() {
        let table = TableSpec::new(
            "t",
            vec![ColumnSpec::new("a", ValueType::Number, 10, "0")],
        );
        let out = table.to_string();
        assert!(out.starts_with("------ <t> ------"));
        assert!(out.contains("Column name: a"));
        assert!(out.contains("Type: number"));
        assert!(out.contains("Size: 10"));
        assert!(out.contains("Default: 0"));
    }

    #[test]
    fn test_buffer_store_and_evict() {
        let mut buffer = TableBuffer::new();
        buffer.store(TableSpec::new("t", vec![]));
        assert_eq!(buffer.len(), 1);
        assert_eq!(buffer.get("t").map(|t| t.name()), Some("t"));
        assert!(buffer.evict("t").is_some());
        assert!(buffer.is_empty());
        assert!(buffer.evict("t").is_none());
    }
}
