//! Reader for parameter files.
//!
//! # File Format
//!
//! ```text
//! [Grid]                          # block header
//! X1-grid    1  0.0  64  u  1.0   # name followed by values
//! geometry   cartesian
//!
//! [Hydro]
//! solver     tvdlf
//! gamma      1.4
//! ```
//!
//! Anything after `#` is a comment. Values are stored as strings and
//! converted on access. A parameter repeated within a block accumulates
//! its values; a parameter without values is not stored.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Error type for parameter file parsing and lookup.
#[derive(Debug, Error)]
pub enum InputError {
    /// File I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// `[` without a matching `]`
    #[error("Block name not properly ended at line {line}")]
    UnterminatedBlock { line: usize },

    /// Parameter line before the first block header
    #[error("A block name must be given before the first parameter (line {line})")]
    ParameterBeforeBlock { line: usize },

    /// Unknown block
    #[error("Block [{0}] cannot be found")]
    MissingBlock(String),

    /// Unknown parameter in an existing block
    #[error("Parameter {name} cannot be found in block [{block}]")]
    MissingParameter { block: String, name: String },

    /// Value position beyond the number of values
    #[error("Index {index} cannot be found in {block}:{name} ({len} values)")]
    IndexOutOfRange {
        block: String,
        name: String,
        index: usize,
        len: usize,
    },

    /// Value that does not convert to the requested type
    #[error("Value '{value}' of {block}:{name} at index {index} is not a valid {expected}")]
    InvalidValue {
        block: String,
        name: String,
        index: usize,
        value: String,
        expected: &'static str,
    },
}

type Block = BTreeMap<String, Vec<String>>;

/// Parsed parameter file: blocks of named value lists.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Input {
    source: Option<PathBuf>,
    blocks: BTreeMap<String, Block>,
}

impl Input {
    /// Empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse parameter file content.
    pub fn parse(content: &str) -> Result<Self, InputError> {
        let mut input = Self::new();
        let mut current: Option<String> = None;

        for (line_num, raw) in content.lines().enumerate() {
            let line = raw.split('#').next().unwrap_or("").trim();
            if line.is_empty() {
                continue;
            }

            if let Some(rest) = line.strip_prefix('[') {
                let end = rest.find(']').ok_or(InputError::UnterminatedBlock {
                    line: line_num + 1,
                })?;
                let name = rest[..end].trim().to_string();
                input.blocks.entry(name.clone()).or_default();
                current = Some(name);
                continue;
            }

            let block = current
                .as_ref()
                .ok_or(InputError::ParameterBeforeBlock { line: line_num + 1 })?;

            let mut tokens = line.split_whitespace();
            let Some(name) = tokens.next() else {
                continue;
            };
            let values: Vec<String> = tokens.map(str::to_string).collect();
            if values.is_empty() {
                continue;
            }
            input
                .blocks
                .entry(block.clone())
                .or_default()
                .entry(name.to_string())
                .or_default()
                .extend(values);
        }

        Ok(input)
    }

    /// Read and parse a parameter file.
    pub fn from_file(path: &Path) -> Result<Self, InputError> {
        let content = fs::read_to_string(path)?;
        let mut input = Self::parse(&content)?;
        input.source = Some(path.to_path_buf());
        log::info!(
            "Read {} parameter blocks from {}",
            input.blocks.len(),
            path.display()
        );
        Ok(input)
    }

    /// File the parameters were read from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Set (replace) the values of a parameter.
    pub fn set<S: AsRef<str>>(&mut self, block: &str, name: &str, values: &[S]) {
        self.blocks.entry(block.to_string()).or_default().insert(
            name.to_string(),
            values.iter().map(|v| v.as_ref().to_string()).collect(),
        );
    }

    /// Builder form of [`Input::set`].
    pub fn with_entry<S: AsRef<str>>(mut self, block: &str, name: &str, values: &[S]) -> Self {
        self.set(block, name, values);
        self
    }

    /// Block names, sorted.
    pub fn blocks(&self) -> impl Iterator<Item = &str> {
        self.blocks.keys().map(String::as_str)
    }

    /// Whether a block exists.
    pub fn has_block(&self, block: &str) -> bool {
        self.blocks.contains_key(block)
    }

    /// Number of values of a parameter, `None` if it does not exist.
    pub fn check_entry(&self, block: &str, name: &str) -> Option<usize> {
        self.blocks.get(block)?.get(name).map(Vec::len)
    }

    /// Value at position `index` as a string.
    pub fn get_string(&self, block: &str, name: &str, index: usize) -> Result<&str, InputError> {
        let values = self
            .blocks
            .get(block)
            .ok_or_else(|| InputError::MissingBlock(block.to_string()))?
            .get(name)
            .ok_or_else(|| InputError::MissingParameter {
                block: block.to_string(),
                name: name.to_string(),
            })?;
        values
            .get(index)
            .map(String::as_str)
            .ok_or_else(|| InputError::IndexOutOfRange {
                block: block.to_string(),
                name: name.to_string(),
                index,
                len: values.len(),
            })
    }

    /// Value at position `index` as a real number.
    pub fn get_real(&self, block: &str, name: &str, index: usize) -> Result<f64, InputError> {
        self.get_parsed(block, name, index, "real number")
    }

    /// Value at position `index` as an integer.
    pub fn get_int(&self, block: &str, name: &str, index: usize) -> Result<i64, InputError> {
        self.get_parsed(block, name, index, "integer")
    }

    fn get_parsed<T: std::str::FromStr>(
        &self,
        block: &str,
        name: &str,
        index: usize,
        expected: &'static str,
    ) -> Result<T, InputError> {
        let value = self.get_string(block, name, index)?;
        value.parse().map_err(|_| InputError::InvalidValue {
            block: block.to_string(),
            name: name.to_string(),
            index,
            value: value.to_string(),
            expected,
        })
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Some(path) => writeln!(f, "Input parameters from {}:", path.display())?,
            None => writeln!(f, "Input parameters:")?,
        }
        for (block, params) in &self.blocks {
            writeln!(f, "[{block}]")?;
            for (name, values) in params {
                write!(f, "\t{name}\t")?;
                for value in values {
                    write!(f, "\t{value}")?;
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
