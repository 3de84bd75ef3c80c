use crate::commands::{eval::EvalArgs, segment::SegmentArgs};

pub mod eval;
pub mod segment;

/// Subcommands for wordgauge-cli
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Evaluate a list of tokenizers and write a metrics table.
    Eval(EvalArgs),

    /// Stream text through a configured segmenter.
    Segment(SegmentArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Eval(cmd) => cmd.run(),
            Commands::Segment(cmd) => cmd.run(),
        }
    }
}
