use std::io::{BufRead, Write};

use wordgauge::config::TokenizerConfig;

use crate::logging::LogArgs;

/// Args for the segment command.
#[derive(clap::Args, Debug)]
pub struct SegmentArgs {
    /// Tokenizer config to load.
    #[arg(long)]
    config: String,

    #[clap(flatten)]
    pub logging: LogArgs,
}

impl SegmentArgs {
    /// Run the segment command.
    ///
    /// Reads whitespace-separated words from stdin and writes one line of
    /// space-joined subword tokens per input line.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let segmenter =
            TokenizerConfig::from_path(&self.config)?.build_segmenter()?;

        let stdin = std::io::stdin().lock();
        let mut stdout = std::io::stdout().lock();

        for line in stdin.lines() {
            let line = line?;
            match segmenter.segment_text(&line) {
                Ok(tokens) => {
                    writeln!(stdout, "{}", tokens.join(" "))?;
                }
                Err(err) => {
                    log::error!("cannot segment line: {err}");
                    writeln!(stdout)?;
                }
            }
            stdout.flush()?;
        }

        Ok(())
    }
}
