use crate::{automaton::Automaton, error::Error, generation::Generation, rule::Rule};
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
    str::FromStr,
};

/// The two characters used to draw dead and live cells.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Symbols {
    pub dead: char,
    pub alive: char,
}

impl Symbols {
    pub const fn new(dead: char, alive: char) -> Self {
        Symbols { dead, alive }
    }
}

impl Default for Symbols {
    fn default() -> Self {
        Symbols::new('0', '1')
    }
}

impl FromStr for Symbols {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        match (
            tokens.next().and_then(|t| t.chars().next()),
            tokens.next().and_then(|t| t.chars().next()),
        ) {
            (Some(dead), Some(alive)) => Ok(Symbols::new(dead, alive)),
            _ => Err(Error::InvalidSymbols(s.to_string())),
        }
    }
}

/// A simulation setup: a rule line, a symbol line and the initial row.
///
/// ```text
/// 90
/// . #
/// ....#....
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub rule: Rule,
    pub symbols: Symbols,
    pub initial: Generation,
}

impl Config {
    pub fn new(rule: Rule, symbols: Symbols, initial: Generation) -> Self {
        Config {
            rule,
            symbols,
            initial,
        }
    }

    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        let mut lines = reader.lines();
        let mut next_line = |name: &'static str| -> Result<String, Error> {
            match lines.next() {
                Some(line) => Ok(line?),
                None => Err(Error::MissingLine(name)),
            }
        };
        let rule: Rule = next_line("rule")?.parse()?;
        let symbols: Symbols = next_line("symbol")?.parse()?;
        let row = next_line("initial generation")?;
        let initial = Generation::from_symbols(row.trim_end_matches('\r'), symbols.alive)?;
        Ok(Config::new(rule, symbols, initial))
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let file = File::open(path)?;
        Config::from_reader(BufReader::new(file))
    }

    pub fn automaton(&self) -> Automaton {
        Automaton::new(self.rule, self.initial.clone())
    }
}

impl FromStr for Config {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Config::from_reader(s.as_bytes())
    }
}
