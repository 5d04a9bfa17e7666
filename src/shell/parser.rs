//! Shell command parser
//!
//! Splits a command line into a verb and its arguments. The lab shell has
//! no quoting, pipes or redirections: words are separated by whitespace and
//! nothing else. Parsing never fails; a blank line is an empty command.

use std::iter::Peekable;
use std::str::Chars;

/// A parsed command line (verb + arguments)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedCommand {
    /// Command name, empty for a blank line
    pub verb: String,
    /// Arguments (not including the verb)
    pub args: Vec<String>,
}

impl ParsedCommand {
    pub fn new(verb: impl Into<String>) -> Self {
        Self {
            verb: verb.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(|s| s.into()));
        self
    }

    /// Blank line: nothing to run
    pub fn is_empty(&self) -> bool {
        self.verb.is_empty()
    }
}

/// Word splitter for shell input
struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
}

impl<'a> Lexer<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(&c) = self.chars.peek() {
            if c.is_whitespace() {
                self.chars.next();
            } else {
                break;
            }
        }
    }

    fn next_word(&mut self) -> Option<String> {
        self.skip_whitespace();
        self.chars.peek()?;

        let mut word = String::new();
        while let Some(&c) = self.chars.peek() {
            if c.is_whitespace() {
                break;
            }
            word.push(c);
            self.chars.next();
        }
        Some(word)
    }
}

impl Iterator for Lexer<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.next_word()
    }
}

/// Parse a command line
pub fn parse(input: &str) -> ParsedCommand {
    let mut words = Lexer::new(input);
    match words.next() {
        Some(verb) => ParsedCommand::new(verb).args(words),
        None => ParsedCommand::default(),
    }
}
