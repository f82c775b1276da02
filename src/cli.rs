// CLI module - command-line argument surface

use clap::Parser;

use crate::loader::Source;

/// Step through a recorded pattern-match trace
#[derive(Parser, Debug)]
#[command(name = "retrace")]
#[command(version)]
#[command(about = "Step through a recorded pattern-match trace", long_about = None)]
pub struct Cli {
    /// Recording to replay: a file path or an http(s) URL
    #[arg(
        value_name = "SOURCE",
        conflicts_with = "demo",
        required_unless_present = "demo"
    )]
    pub source: Option<String>,

    /// Replay the bundled demo recording
    #[arg(long)]
    pub demo: bool,

    /// Print the selected step as text and exit instead of opening the UI
    #[arg(long)]
    pub dump: bool,

    /// Step to show first, clamped to the recording (default: the last step)
    #[arg(long, value_name = "N")]
    pub step: Option<usize>,
}

impl Cli {
    /// Resolve where the recording comes from.
    pub fn recording_source(&self) -> Source {
        if self.demo {
            Source::Demo
        } else {
            match &self.source {
                Some(arg) => Source::parse(arg),
                // clap enforces SOURCE when --demo is absent
                None => Source::Demo,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn argument_surface_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn requires_a_source_or_demo() {
        assert!(Cli::try_parse_from(["retrace"]).is_err());
        assert!(Cli::try_parse_from(["retrace", "--demo"]).is_ok());
        assert!(Cli::try_parse_from(["retrace", "trace.json"]).is_ok());
    }

    #[test]
    fn source_and_demo_conflict() {
        assert!(Cli::try_parse_from(["retrace", "trace.json", "--demo"]).is_err());
    }

    #[test]
    fn resolves_sources() {
        let cli = Cli::try_parse_from(["retrace", "--demo"]).unwrap();
        assert_eq!(cli.recording_source(), Source::Demo);

        let cli = Cli::try_parse_from(["retrace", "http://localhost/r.json"]).unwrap();
        assert!(matches!(cli.recording_source(), Source::Url(_)));

        let cli = Cli::try_parse_from(["retrace", "--dump", "--step", "7", "trace.json"]).unwrap();
        assert!(cli.dump);
        assert_eq!(cli.step, Some(7));
        assert!(matches!(cli.recording_source(), Source::File(_)));
    }
}
