/// Clipboard sink via the OSC 52 escape sequence.
///
/// Works through the hosting terminal, so it survives SSH sessions where no
/// display server is reachable. Fire-and-forget: a failed copy never touches
/// palette state.
use std::io::{self, Write};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

pub fn copy(text: &str) -> io::Result<()> {
    let mut stdout = io::stdout();
    write!(stdout, "\x1b]52;c;{}\x07", STANDARD.encode(text))?;
    stdout.flush()
}
