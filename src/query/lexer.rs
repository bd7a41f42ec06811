use std::collections::VecDeque;

/// Splits a column block such as `(a, number, 10, 0), (b, string, 5, x)`
/// into its atomic fields. Parentheses, commas and whitespace only separate
/// fields and never show up in the output.
pub struct FieldLexer {
    src: VecDeque<char>,
}

impl FieldLexer {
    pub fn new(src: &str) -> Self {
        FieldLexer {
            src: src.chars().collect(),
        }
    }

    fn is_separator(ch: char) -> bool {
        ch == '(' || ch == ')' || ch == ',' || ch.is_whitespace()
    }

    fn is_word(ch: char) -> bool {
        ch.is_ascii_alphanumeric()
    }

    fn curr(&self) -> Option<char> {
        self.src.front().copied()
    }

    fn walk(&mut self) -> Option<char> {
        self.src.pop_front()
    }

    fn skip_separators(&mut self) {
        while let Some(ch) = self.curr()
            && Self::is_separator(ch)
        {
            self.walk();
        }
    }

    fn lex_field(&mut self, start: char) -> String {
        let mut out = String::from(start);
        while let Some(ch) = self.curr()
            && Self::is_word(ch)
        {
            out.push(ch);
            self.walk();
        }
        out
    }
}

impl Iterator for FieldLexer {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.skip_separators();
        // any non-separator opens a field, only alphanumerics extend it
        let start = self.walk()?;
        Some(self.lex_field(start))
    }
}

pub fn extract_fields(block: &str) -> Vec<String> {
    FieldLexer::new(block).collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_single_column() {
        assert_eq!(extract_fields("(a, number, 10, 0)"), ["a", "number", "10", "0"]);
    }

    #[test]
    fn test_multiple_columns() {
        let fields = extract_fields("(id,number,4,0),  (name , STRING, 20, anon) ");
        assert_eq!(
            fields,
            ["id", "number", "4", "0", "name", "STRING", "20", "anon"]
        );
    }

    #[test]
    fn test_separators_only() {
        assert!(extract_fields("( , ) \t\n").is_empty());
        assert!(extract_fields("").is_empty());
    }

    #[test]
    fn test_punctuation_opens_new_field() {
        let mut lexer = FieldLexer::new("-5 a_b");
        assert_eq!(lexer.next(), Some("-5".to_string()));
        assert_eq!(lexer.next(), Some("a".to_string()));
        assert_eq!(lexer.next(), Some("_b".to_string()));
        assert_eq!(lexer.next(), None);
    }
}
