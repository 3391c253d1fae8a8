//! Command-line argument parsing.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, ValueEnum};

use crate::models::ModernBertSize;

/// sentiq: sentiment classification for the command line
///
/// Classifies the given text with a pretrained sentiment model and prints
/// POSITIVE or NEUTRAL_OR_NEGATIVE.
#[derive(Parser, Debug, Clone)]
#[command(name = "sentiq")]
#[command(version)]
#[command(about = "Classify the sentiment of a piece of text", long_about = None)]
pub struct Args {
    /// Text to classify
    pub text: String,

    /// Model size to use
    #[arg(long, value_enum, default_value_t = SizeArg::Base)]
    pub size: SizeArg,

    /// Run on a CUDA GPU (device index); default is CPU
    #[arg(long, value_name = "INDEX")]
    pub cuda: Option<usize>,

    /// Output as JSON (verdict, label, score)
    #[arg(long)]
    pub json: bool,

    /// Verbose logging on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Model size choices exposed on the CLI.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeArg {
    /// ModernBERT base (~150M parameters)
    Base,
    /// ModernBERT large (~400M parameters)
    Large,
}

impl From<SizeArg> for ModernBertSize {
    fn from(value: SizeArg) -> Self {
        match value {
            SizeArg::Base => ModernBertSize::Base,
            SizeArg::Large => ModernBertSize::Large,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html#testing
    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }

    #[test]
    fn text_is_required() {
        let result = Args::try_parse_from(["sentiq"]);
        assert!(result.is_err());
    }

    #[test]
    fn defaults_are_cpu_base_plain_output() {
        let args = Args::try_parse_from(["sentiq", "I love this!"]).unwrap();
        assert_eq!(args.text, "I love this!");
        assert_eq!(args.size, SizeArg::Base);
        assert_eq!(args.cuda, None);
        assert!(!args.json);
        assert_eq!(args.verbose, 0);
    }
}
