pub mod error;
pub mod grammar;
pub mod lexer;
pub mod parser;

pub use error::{FormatErr, InputErr};
pub use grammar::CommandKind;
pub use lexer::{FieldLexer, extract_fields};
pub use parser::{ParsedCommand, classify, validate};
