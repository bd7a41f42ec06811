use super::error::FormatErr;
use super::grammar::CommandKind;

/// A line accepted by the shape pattern of its kind.
///
/// `captures` holds every named group of the pattern in declaration order;
/// optional groups that did not take part in the match are empty strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    kind: CommandKind,
    captures: Vec<(String, String)>,
    matched: String,
    remainder: String,
}

impl ParsedCommand {
    pub fn kind(&self) -> CommandKind {
        self.kind
    }

    pub fn captures(&self) -> &[(String, String)] {
        &self.captures
    }

    /// Value of a named group, `None` when the group is unknown or empty.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.captures
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
            .filter(|v| !v.is_empty())
    }

    /// The part of the line covered by the shape pattern.
    pub fn matched(&self) -> &str {
        &self.matched
    }

    /// Whatever followed the match on the same line.
    pub fn remainder(&self) -> &str {
        &self.remainder
    }
}

fn normalize(line: &str) -> &str {
    let line = line.trim();
    line.strip_suffix(';').unwrap_or(line).trim_end()
}

/// Picks the first kind whose keyword pattern matches, in priority order.
pub fn classify(line: &str) -> Option<CommandKind> {
    let line = normalize(line);
    CommandKind::PRIORITY
        .into_iter()
        .find(|kind| kind.keyword().is_match(line))
}

/// Checks `line` against the full shape of `kind` and collects its fields.
pub fn validate(line: &str, kind: CommandKind) -> Result<ParsedCommand, FormatErr> {
    let line = normalize(line);
    let shape = kind.shape();
    let caps = shape.captures(line).ok_or_else(|| FormatErr::new(kind))?;
    // group 0 always participates in a successful match
    let whole = caps.get(0).ok_or_else(|| FormatErr::new(kind))?;

    let captures = shape
        .capture_names()
        .flatten()
        .map(|name| {
            let value = caps.name(name).map_or("", |m| m.as_str());
            (name.to_string(), value.to_string())
        })
        .collect();

    Ok(ParsedCommand {
        kind,
        captures,
        matched: whole.as_str().to_string(),
        remainder: line[whole.end()..].to_string(),
    })
}
