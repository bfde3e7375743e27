//! Output sinks for PRN.

use std::io::{self, Write};

use log::warn;

/// Receives the values PRN emits.
pub trait Output {
    fn emit(&mut self, value: u8);
}

/// Collects emitted values in order.
impl Output for Vec<u8> {
    fn emit(&mut self, value: u8) {
        self.push(value);
    }
}

/// Writes each value in decimal on its own line.
///
/// Write failures are logged and dropped; the machine does not stop for a
/// closed pipe.
#[derive(Debug)]
pub struct Console<W: Write> {
    writer: W,
}

impl Console<io::Stdout> {
    /// A console sink on standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Console<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Output for Console<W> {
    fn emit(&mut self, value: u8) {
        if let Err(e) = writeln!(self.writer, "{value}") {
            warn!("dropping output value {value}: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_collects_in_order() {
        let mut out = Vec::new();
        out.emit(3);
        out.emit(255);
        assert_eq!(out, vec![3, 255]);
    }

    #[test]
    fn console_writes_decimal_lines() {
        let mut console = Console::new(Vec::new());
        console.emit(72);
        console.emit(0);
        let text = String::from_utf8(console.into_inner()).unwrap();
        assert_eq!(text, "72\n0\n");
    }
}
