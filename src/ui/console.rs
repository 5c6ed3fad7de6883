//! Line-oriented console shell
//!
//! Used where no native window is available. Each line read from the
//! input stands for one edit of the input field, and the converted text
//! is printed under the output label.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::app::ConversionController;
use crate::ui::{INPUT_LABEL, OUTPUT_LABEL};

/// Runs the prompt/convert loop until `input` reaches end of stream
pub fn run_console<R, W>(controller: &ConversionController, mut input: R, mut output: W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut line = String::new();
    loop {
        write!(output, "{INPUT_LABEL}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            debug!("console input closed");
            return Ok(());
        }

        let text = line.trim_end_matches(['\r', '\n']);
        writeln!(output, "{OUTPUT_LABEL}{}", controller.on_input_changed(text))?;
    }
}
