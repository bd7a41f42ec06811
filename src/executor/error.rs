use crate::storage::RegistryErr;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ExecErr>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExecErr {
    #[error("Type of column must be number or string, found '{0}'.")]
    UnknownType(String),
    #[error("Size of column must be a non-negative integer, found '{0}'.")]
    InvalidSize(String),
    #[error("Column definition of table {table} is incomplete: {leftover} trailing field(s).")]
    IncompleteColumn { table: String, leftover: usize },
    #[error("Table {0} already exists.")]
    DuplicateTable(String),
    #[error("Wrong command: too many table names.")]
    ListNotAllowed,
    #[error(transparent)]
    Registry(#[from] RegistryErr),
    #[error("Handler failed: {0}")]
    Handler(String),
}
