//! Program images and the `.ls8` text loader.
//!
//! A `.ls8` file holds one byte per line, written in binary. Only the
//! leading run of `0`/`1` digits on a line counts, so comments may follow:
//!
//! ```text
//! # print8.ls8
//! 10000010 # LDI R0,8
//! 00000000
//! 00001000
//! 01000111 # PRN R0
//! 00000000
//! 00000001 # HLT
//! ```
//!
//! Lines without a leading binary digit (blank lines, comment lines) are
//! skipped and do not occupy an address.

use log::debug;

use crate::error::LoadError;

/// Size of the LS-8 address space in bytes.
pub const MEMORY_SIZE: usize = 256;

/// A program image, loaded into memory starting at address 0.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    bytes: Vec<u8>,
}

/// Result of parsing program text: the image plus the lines that were skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseReport {
    /// The parsed program.
    pub program: Program,
    /// 1-based line numbers that did not start with a binary digit.
    pub skipped: Vec<usize>,
}

impl Program {
    /// Create a program from raw bytes.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Result<Self, LoadError> {
        let bytes = bytes.into();
        if bytes.len() > MEMORY_SIZE {
            return Err(LoadError::ProgramTooLarge {
                len: bytes.len(),
                max: MEMORY_SIZE,
            });
        }
        Ok(Self { bytes })
    }

    /// Parse `.ls8` program text.
    pub fn parse(text: &str) -> Result<Self, LoadError> {
        Self::parse_report(text).map(|report| report.program)
    }

    /// Parse `.ls8` program text, also reporting which lines were skipped.
    pub fn parse_report(text: &str) -> Result<ParseReport, LoadError> {
        let mut bytes = Vec::new();
        let mut skipped = Vec::new();

        for (i, line) in text.lines().enumerate() {
            match parse_line(line) {
                Some(byte) => bytes.push(byte),
                None => {
                    debug!("skipping line {}: {:?}", i + 1, line);
                    skipped.push(i + 1);
                }
            }
        }

        let program = Self::from_bytes(bytes)?;
        debug!(
            "parsed {} program bytes, skipped {} lines",
            program.len(),
            skipped.len()
        );
        Ok(ParseReport { program, skipped })
    }

    /// The program image.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Number of bytes in the program.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns true if the program has no bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Parse the leading binary token of one line.
///
/// Digits beyond the low eight bits are shifted out, so wide values keep
/// their low byte.
fn parse_line(line: &str) -> Option<u8> {
    let token: &str = {
        let trimmed = line.trim_start();
        let end = trimmed
            .find(|c: char| c != '0' && c != '1')
            .unwrap_or(trimmed.len());
        &trimmed[..end]
    };

    if token.is_empty() {
        return None;
    }

    Some(
        token
            .bytes()
            .fold(0u8, |acc, digit| (acc << 1) | (digit - b'0')),
    )
}
