//! Path expression parser.
//!
//! Paths are split on `.` into parts; each part is an optional name followed
//! by zero or more `[N]` index groups.

use std::str::FromStr;

use super::ast::{Path, Step};
use super::error::{ParseError, PartDefect};

/// Byte offsets of one `[`...`]` group inside a part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct IndexPair {
    open: usize,
    close: usize,
}

/// Parser for path expressions.
pub struct Parser<'a> {
    path: &'a str,
    steps: Vec<Step>,
}

impl<'a> Parser<'a> {
    /// Creates a new parser for the given path string.
    pub fn new(path: &'a str) -> Self {
        Self {
            path,
            steps: Vec::new(),
        }
    }

    /// Parses the path string into a [`Path`].
    pub fn parse(path: &str) -> Result<Path, ParseError> {
        Parser::new(path).parse_path()
    }

    fn parse_path(mut self) -> Result<Path, ParseError> {
        let trimmed = self.path.trim();
        if trimmed.is_empty() {
            return Err(ParseError::Empty);
        }

        for raw_part in trimmed.split('.') {
            let part = raw_part.trim();
            if part.is_empty() {
                return Err(ParseError::EmptyPart {
                    path: self.path.to_string(),
                });
            }
            self.parse_part(part)?;
        }

        Ok(Path::from_steps(self.steps))
    }

    /// Appends the named step (if any) and the index steps of one part.
    fn parse_part(&mut self, part: &str) -> Result<(), ParseError> {
        let pairs = extract_index_pairs(part).map_err(|defect| self.invalid(part, defect))?;

        if !part.starts_with('[') {
            let name = match pairs.first() {
                Some(pair) => &part[..pair.open],
                None => part,
            };
            self.steps.push(Step::Name(name.to_string()));
        }

        for pair in &pairs {
            let digits = &part[pair.open + 1..pair.close];
            let index = digits
                .parse::<usize>()
                .map_err(|_| self.invalid(part, PartDefect::InvalidIndex(digits.to_string())))?;
            self.steps.push(Step::Index(index));
        }

        Ok(())
    }

    fn invalid(&self, part: &str, defect: PartDefect) -> ParseError {
        ParseError::InvalidPart {
            path: self.path.to_string(),
            part: part.to_string(),
            defect,
        }
    }
}

/// Locates the bracket groups of a part, validating their layout.
fn extract_index_pairs(part: &str) -> Result<Vec<IndexPair>, PartDefect> {
    let mut opens = Vec::new();
    let mut closes = Vec::new();

    for (idx, ch) in part.char_indices() {
        match ch {
            '[' => opens.push(idx),
            ']' => closes.push(idx),
            _ => {}
        }
    }

    if opens.len() != closes.len() {
        return Err(PartDefect::UnbalancedBrackets);
    }

    if !closes.is_empty() && !part.ends_with(']') {
        return Err(PartDefect::TrailingText);
    }

    let mut pairs: Vec<IndexPair> = Vec::with_capacity(opens.len());
    for (&open, &close) in opens.iter().zip(&closes) {
        if close <= open {
            return Err(PartDefect::MisplacedBrackets);
        }
        // groups must follow each other directly: `[1][2]`
        if let Some(prev) = pairs.last() {
            if open != prev.close + 1 {
                return Err(PartDefect::MisplacedBrackets);
            }
        }
        pairs.push(IndexPair { open, close });
    }

    Ok(pairs)
}

impl FromStr for Path {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Parser::parse(s)
    }
}

impl Path {
    /// Parses a path expression such as `items[2].name`.
    ///
    /// # Example
    ///
    /// ```
    /// use dotpath::path::{Path, Step};
    ///
    /// let path = Path::parse("users[0].name").unwrap();
    /// assert_eq!(
    ///     path.steps(),
    ///     &[Step::Name("users".into()), Step::Index(0), Step::Name("name".into())]
    /// );
    /// ```
    pub fn parse(path: &str) -> Result<Path, ParseError> {
        Parser::parse(path)
    }
}
