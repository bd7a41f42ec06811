use super::Report;
use super::error::Result;
use crate::query::ParsedCommand;

/// Seam for the commands this front-end only recognizes: CREATE INDEX,
/// DROP INDEX, DISPLAY TABLE, INSERT INTO, DELETE FROM, SELECT and UPDATE.
///
/// The command passed in has already matched the full shape of its kind, so
/// every mandatory group is present.
pub trait StatementHandler {
    fn handle(&mut self, command: ParsedCommand) -> Result<Report>;
}

/// Accepts the command and leaves the work to a later storage layer.
#[derive(Debug, Default)]
pub struct Deferred;

impl StatementHandler for Deferred {
    fn handle(&mut self, command: ParsedCommand) -> Result<Report> {
        log::info!(
            "{} accepted without a handler: {:?}",
            command.kind(),
            command.captures()
        );
        Ok(Report::Deferred(command.kind()))
    }
}
