//! Plain line-oriented front end
//!
//! Reads one expression per line and writes one reply per non-silent
//! outcome. Used for piped input and with `--plain`.

use crate::interpreter::engine::{Calculator, Outcome};
use std::io::{self, BufRead, Write};

/// Run the session until `/exit` or end of input.
///
/// Lines that are not valid UTF-8 are decoded lossily and rejected by the
/// calculator like any other bad input.
pub fn run<R: BufRead, W: Write>(
    calculator: &mut Calculator,
    mut input: R,
    mut output: W,
) -> io::Result<()> {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        let line = line.trim_end_matches(['\n', '\r']);
        let outcome = calculator.process(line);

        if let Some(reply) = outcome.reply() {
            writeln!(output, "{}", reply)?;
        }
        if matches!(outcome, Outcome::Exit(_)) {
            break;
        }
    }
    output.flush()
}
