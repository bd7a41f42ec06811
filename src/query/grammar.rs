//! Recognizers for the nine command kinds.
//!
//! Every kind carries two patterns: a loose keyword pattern used to guess
//! what the user meant, and a strict shape pattern whose named groups become
//! the fields of a [`ParsedCommand`](super::ParsedCommand). Both are
//! anchored at the start of the line and case-insensitive over ASCII only,
//! so letter classes never match folded forms such as U+212A or U+017F.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::{self, Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    CreateTable,
    CreateIndex,
    DropTable,
    DropIndex,
    DisplayTable,
    InsertInto,
    DeleteFrom,
    Select,
    Update,
}

impl CommandKind {
    /// Order in which keyword patterns are tried.
    pub const PRIORITY: [CommandKind; 9] = [
        CommandKind::CreateTable,
        CommandKind::CreateIndex,
        CommandKind::DropTable,
        CommandKind::DropIndex,
        CommandKind::DisplayTable,
        CommandKind::InsertInto,
        CommandKind::DeleteFrom,
        CommandKind::Select,
        CommandKind::Update,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CommandKind::CreateTable => "CREATE TABLE",
            CommandKind::CreateIndex => "CREATE INDEX",
            CommandKind::DropTable => "DROP TABLE",
            CommandKind::DropIndex => "DROP INDEX",
            CommandKind::DisplayTable => "DISPLAY TABLE",
            CommandKind::InsertInto => "INSERT INTO",
            CommandKind::DeleteFrom => "DELETE FROM",
            CommandKind::Select => "SELECT",
            CommandKind::Update => "UPDATE",
        }
    }

    /// Help text printed verbatim when the shape pattern rejects a line.
    pub fn expected_format(self) -> &'static str {
        match self {
            CommandKind::CreateTable => {
                "CREATE TABLE table_name [IF NOT EXISTS] ( (column_name1, type, size, default_value1), (column_name1, type, size, default_value1)... )"
            }
            CommandKind::CreateIndex => {
                "CREATE INDEX [IF NOT EXISTS] index_name ON table_name (column_name) - creates an index only on a single column"
            }
            CommandKind::DropTable => "DROP TABLE table_name",
            CommandKind::DropIndex => "DROP INDEX index_name",
            CommandKind::DisplayTable => "DISPLAY TABLE table_name",
            CommandKind::InsertInto => {
                "INSERT INTO table VALUES(...); values are separated by , and they have the exact number and order as the table definition"
            }
            CommandKind::DeleteFrom => {
                "DELETE FROM table_name WHERE column_name = value (deletes allows only one column in the where clause)"
            }
            CommandKind::Select => {
                "SELECT (at_least_one_column, ...) | ALL FROM table_name [WHERE column_name = value] - the where clause is optional"
            }
            CommandKind::Update => {
                "UPDATE table_name SET column_name = value WHERE  column_name = value (the SET column may be different than the WHERE one)"
            }
        }
    }

    pub fn keyword(self) -> &'static Regex {
        &CATALOG[self as usize].keyword
    }

    pub fn shape(self) -> &'static Regex {
        &CATALOG[self as usize].shape
    }

    fn patterns(self) -> (&'static str, &'static str) {
        match self {
            CommandKind::CreateTable => (
                r"(?i-u)^\s*CREATE\s+TABLE\s*",
                r"(?i-u)^\s*CREATE\s+TABLE\s+(?P<table>[A-Za-z][A-Za-z0-9]*)\s*(?P<if_not_exists>IF\s+NOT\s+EXISTS)?\s*\(\s*(?P<columns>(?:\(\s*[A-Za-z][A-Za-z0-9]*\s*,\s*[A-Za-z]+\s*,\s*[0-9]+\s*,\s*[A-Za-z0-9]+\s*\)\s*,?\s*)+)\s*\)",
            ),
            CommandKind::CreateIndex => (
                r"(?i-u)^\s*CREATE\s+INDEX\s*",
                r"(?i-u)^\s*CREATE\s+INDEX\s*(?P<if_not_exists>IF\s+NOT\s+EXISTS)?\s+(?P<index>[A-Za-z0-9]+)\s+ON\s+(?P<table>[A-Za-z0-9]+)\s*\(\s*(?P<column>[A-Za-z0-9]+)\s*\)",
            ),
            CommandKind::DropTable => (
                r"(?i-u)^\s*DROP\s+TABLE\s*",
                r"(?i-u)^\s*DROP\s+TABLE\s+(?P<table>[A-Za-z0-9]+)\s*",
            ),
            CommandKind::DropIndex => (
                r"(?i-u)^\s*DROP\s+INDEX\s*",
                r"(?i-u)^\s*DROP\s+INDEX\s+(?P<index>[A-Za-z0-9]+)\s*",
            ),
            CommandKind::DisplayTable => (
                r"(?i-u)^\s*DISPLAY\s+TABLE\s*",
                r"(?i-u)^\s*DISPLAY\s+TABLE\s+(?P<table>[A-Za-z0-9]+)\s*",
            ),
            CommandKind::InsertInto => (
                r"(?i-u)^\s*INSERT\s+INTO\s*",
                r"(?i-u)^\s*INSERT\s+INTO\s+(?P<table>[A-Za-z0-9]+)\s+VALUES\s*\((?P<values>(?:\s*[A-Za-z0-9]+\s*,?\s*)+)\)\s*",
            ),
            CommandKind::DeleteFrom => (
                r"(?i-u)^\s*DELETE\s+FROM\s*",
                r"(?i-u)^\s*DELETE\s+FROM\s+(?P<table>[A-Za-z0-9]+)\s+WHERE\s+(?P<column>[A-Za-z0-9]+)\s*=\s*(?P<value>[A-Za-z0-9]+)\s*",
            ),
            CommandKind::Select => (
                r"(?i-u)^\s*SELECT\s*",
                r"(?i-u)^\s*SELECT\s*(?:\((?P<columns>(?:\s*[A-Za-z0-9]+\s*,?\s*)+)\)|(?P<all>ALL))\s*FROM\s+(?P<table>[A-Za-z0-9]+)\s*(?:WHERE\s+(?P<column>[A-Za-z0-9]+)\s*=\s*(?P<value>[A-Za-z0-9]+))?",
            ),
            CommandKind::Update => (
                r"(?i-u)^\s*UPDATE\s*",
                r"(?i-u)^\s*UPDATE\s+(?P<table>[A-Za-z0-9]+)\s+SET\s+(?P<set_column>[A-Za-z0-9]+)\s*=\s*(?P<set_value>[A-Za-z0-9]+)\s+WHERE\s+(?P<where_column>[A-Za-z0-9]+)\s*=\s*(?P<where_value>[A-Za-z0-9]+)\s*",
            ),
        }
    }
}

impl Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

struct Grammar {
    keyword: Regex,
    shape: Regex,
}

// Indexed by `CommandKind as usize`; PRIORITY lists the variants in declaration order.
static CATALOG: Lazy<Vec<Grammar>> = Lazy::new(|| {
    CommandKind::PRIORITY
        .iter()
        .map(|kind| {
            let (keyword, shape) = kind.patterns();
            Grammar {
                keyword: Regex::new(keyword).unwrap(),
                shape: Regex::new(shape).unwrap(),
            }
        })
        .collect()
});

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_catalog_follows_declaration_order() {
        for (i, kind) in CommandKind::PRIORITY.iter().enumerate() {
            assert_eq!(*kind as usize, i);
        }
        assert_eq!(CATALOG.len(), CommandKind::PRIORITY.len());
    }

    #[test]
    fn test_keyword_is_case_insensitive() {
        let re = CommandKind::CreateTable.keyword();
        assert!(re.is_match("create table t"));
        assert!(re.is_match("CREATE TABLE t"));
        assert!(re.is_match("Create Table t"));
        assert!(re.is_match("   CrEaTe    tAbLe"));
    }

    #[test]
    fn test_keyword_is_anchored() {
        assert!(!CommandKind::Select.keyword().is_match("please SELECT ALL FROM t"));
        assert!(!CommandKind::DropTable.keyword().is_match("x DROP TABLE t"));
    }

    #[test]
    fn test_case_folding_is_ascii_only() {
        assert!(!CommandKind::Select.keyword().is_match("\u{17F}ELECT ALL FROM t"));
        assert!(!CommandKind::CreateTable
            .shape()
            .is_match("CREATE TABLE t ( (a\u{212A}b, number, 1, 0) )"));
        assert!(!CommandKind::DropTable.shape().is_match("DROP TABLE \u{212A}"));
    }

    #[test]
    fn test_create_keywords_do_not_overlap() {
        assert!(!CommandKind::CreateTable.keyword().is_match("CREATE INDEX i ON t (c)"));
        assert!(!CommandKind::CreateIndex.keyword().is_match("CREATE TABLE t ( (a, number, 1, 0) )"));
    }

    #[test]
    fn test_create_table_shape_captures() {
        let caps = CommandKind::CreateTable
            .shape()
            .captures("CREATE TABLE users IF NOT EXISTS ( (id, number, 4, 0), (name, string, 20, none) )")
            .unwrap();
        assert_eq!(&caps["table"], "users");
        assert!(caps.name("if_not_exists").is_some());
        assert_eq!(
            caps["columns"].trim(),
            "(id, number, 4, 0), (name, string, 20, none)"
        );
    }

    #[test]
    fn test_select_shape_alternatives() {
        let shape = CommandKind::Select.shape();
        let caps = shape.captures("SELECT ALL FROM t").unwrap();
        assert!(caps.name("all").is_some());
        assert!(caps.name("columns").is_none());
        assert!(caps.name("column").is_none());

        let caps = shape.captures("select (a, b) from t where a = 1").unwrap();
        assert_eq!(&caps["columns"], "a, b");
        assert_eq!(&caps["table"], "t");
        assert_eq!(&caps["column"], "a");
        assert_eq!(&caps["value"], "1");
    }

    #[test]
    fn test_expected_format_text() {
        assert_eq!(CommandKind::DropTable.expected_format(), "DROP TABLE table_name");
        assert_eq!(CommandKind::DropIndex.expected_format(), "DROP INDEX index_name");
        assert!(CommandKind::Update
            .expected_format()
            .contains("WHERE  column_name = value"));
    }
}
