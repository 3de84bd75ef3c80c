use stderrlog::Timestamp;

/// Logging setup arg group.
///
/// Each subcommand carries its own default verbosity; `-v` flags override it.
#[derive(clap::Args, Debug)]
pub struct LogArgs {
    /// Silence log messages.
    #[clap(short, long)]
    pub quiet: bool,

    /// Turn debugging information on (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, default_value = None)]
    verbose: Option<u8>,

    /// Enable timestamped logging.
    #[clap(short, long)]
    pub ts: bool,
}

impl LogArgs {
    fn level(
        &self,
        default: u8,
    ) -> stderrlog::LogLevelNum {
        let verbosity = match self.verbose {
            Some(v) if v > 0 => v,
            _ => default,
        };

        match verbosity {
            0 => stderrlog::LogLevelNum::Off,
            1 => stderrlog::LogLevelNum::Error,
            2 => stderrlog::LogLevelNum::Warn,
            3 => stderrlog::LogLevelNum::Info,
            4 => stderrlog::LogLevelNum::Debug,
            _ => stderrlog::LogLevelNum::Trace,
        }
    }

    pub fn setup_logging(
        &self,
        default: u8,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let timestamp = if self.ts {
            Timestamp::Second
        } else {
            Timestamp::Off
        };

        stderrlog::new()
            .quiet(self.quiet)
            .verbosity(self.level(default))
            .timestamp(timestamp)
            .init()?;

        Ok(())
    }
}
