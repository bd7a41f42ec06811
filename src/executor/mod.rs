pub mod error;
pub mod handler;
pub mod schema;

pub use error::{ExecErr, Result};
pub use handler::{Deferred, StatementHandler};

use crate::query::{CommandKind, FormatErr, ParsedCommand, classify, validate};
use crate::storage::{TableBuffer, TableRegistry, TableStore};
use std::fmt::{self, Display};

/// What a handler did with an accepted command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    TableCreated { name: String, if_not_exists: bool },
    // IF NOT EXISTS on a name that is already registered
    TableExists(String),
    TableDropped(String),
    Deferred(CommandKind),
}

impl Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::TableCreated { name, .. } => write!(f, "Table {} has been created.", name),
            Report::TableExists(name) => write!(f, "Table {} already exists, nothing to do.", name),
            Report::TableDropped(name) => write!(f, "Table {} has been dropped.", name),
            Report::Deferred(kind) => write!(f, "{} accepted.", kind),
        }
    }
}

#[derive(Debug)]
pub enum Outcome {
    /// The line matched the full shape of `kind`. Handler failures are
    /// carried in `result`; the command still counts as handled.
    Handled { kind: CommandKind, result: Result<Report> },
    FormatError(FormatErr),
    Unrecognized,
}

impl Outcome {
    pub fn kind(&self) -> Option<CommandKind> {
        match self {
            Outcome::Handled { kind, .. } => Some(*kind),
            Outcome::FormatError(err) => Some(err.kind),
            Outcome::Unrecognized => None,
        }
    }
}

/// Runs one command line at a time against the session state.
pub struct Executor<S: TableStore = TableBuffer> {
    registry: TableRegistry,
    store: S,
    handler: Box<dyn StatementHandler>,
}

impl Executor {
    pub fn new() -> Self {
        Self::with_store(TableBuffer::new())
    }
}

impl Default for Executor {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: TableStore> Executor<S> {
    pub fn with_store(store: S) -> Self {
        Self {
            registry: TableRegistry::new(),
            store,
            handler: Box::new(Deferred),
        }
    }

    pub fn with_handler(mut self, handler: impl StatementHandler + 'static) -> Self {
        self.handler = Box::new(handler);
        self
    }

    pub fn registry(&self) -> &TableRegistry {
        &self.registry
    }

    pub fn tables(&self) -> &S {
        &self.store
    }

    pub fn process(&mut self, line: &str) -> Outcome {
        let Some(kind) = classify(line) else {
            log::debug!("unrecognized command: {:?}", line);
            return Outcome::Unrecognized;
        };
        log::debug!("classified as {}", kind);

        let command = match validate(line, kind) {
            Ok(command) => command,
            Err(err) => {
                log::warn!("malformed {} command", kind);
                return Outcome::FormatError(err);
            }
        };

        let result = self.dispatch(command);
        if let Err(err) = &result {
            log::warn!("{} rejected: {}", kind, err);
        }
        Outcome::Handled { kind, result }
    }

    fn dispatch(&mut self, command: ParsedCommand) -> Result<Report> {
        match command.kind() {
            CommandKind::CreateTable => self.create_table(&command),
            CommandKind::DropTable => self.drop_table(&command),
            _ => self.handler.handle(command),
        }
    }

    fn create_table(&mut self, command: &ParsedCommand) -> Result<Report> {
        let name = command.get("table").unwrap_or_default();
        let if_not_exists = command.get("if_not_exists").is_some();

        if self.registry.contains(name) {
            if if_not_exists {
                log::info!("table {} already exists, skipping", name);
                return Ok(Report::TableExists(name.to_string()));
            }
            return Err(ExecErr::DuplicateTable(name.to_string()));
        }

        let table = schema::build_table(name, command.get("columns").unwrap_or_default())?;
        log::info!(
            "table {} created with {} column(s)",
            name,
            table.columns().len()
        );
        self.registry.register(name);
        self.store.store(table);

        Ok(Report::TableCreated {
            name: name.to_string(),
            if_not_exists,
        })
    }

    fn drop_table(&mut self, command: &ParsedCommand) -> Result<Report> {
        let name = command.get("table").unwrap_or_default();

        // exactly one name, and no comma list trailing after it
        let tail = format!("{} {}", name, command.remainder());
        if tail.split_whitespace().count() > 1 || tail.contains(',') {
            return Err(ExecErr::ListNotAllowed);
        }

        self.registry.unregister(name)?;
        self.store.evict(name);
        log::info!("table {} dropped", name);
        Ok(Report::TableDropped(name.to_string()))
    }
}
