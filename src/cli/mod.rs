//! CLI orchestration: verdict mapping and the `run` entry point.
//!
//! The binary is a thin shell; everything here is testable from the library.

pub mod args;

pub use args::{Args, SizeArg};

use tracing::{debug, info};

use crate::error::Result;
use crate::sentiment::{Prediction, SentimentAnalysisPipelineBuilder};

/// The two output categories.
///
/// Chosen solely from the top prediction's label; the confidence score never
/// influences it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Top label is "POSITIVE".
    Positive,
    /// Any other top label.
    NeutralOrNegative,
}

impl Verdict {
    /// Map a provider label to a verdict.
    ///
    /// Comparison is ASCII case-insensitive: label casing belongs to the
    /// checkpoint's id2label table and must not flip the verdict.
    pub fn from_label(label: &str) -> Self {
        if label.eq_ignore_ascii_case("positive") {
            Verdict::Positive
        } else {
            Verdict::NeutralOrNegative
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Verdict::Positive => "POSITIVE",
            Verdict::NeutralOrNegative => "NEUTRAL_OR_NEGATIVE",
        };
        write!(f, "{text}")
    }
}

/// Classify `args.text` and print the verdict to stdout.
///
/// # Errors
///
/// Returns an error if model download, device initialization, tokenization,
/// or inference fails. Nothing is printed to stdout in that case.
pub fn run(args: &Args) -> Result<()> {
    let mut builder = SentimentAnalysisPipelineBuilder::modernbert(args.size.into());
    if let Some(index) = args.cuda {
        builder = builder.cuda(index);
    }

    info!(size = ?args.size, cuda = ?args.cuda, "building pipeline");
    let pipeline = builder.build()?;

    let output = pipeline.run(args.text.as_str())?;
    debug!(
        label = %output.prediction.label,
        score = output.prediction.score,
        "top prediction"
    );

    println!("{}", render(&output.prediction, args.json)?);
    Ok(())
}

/// Render the output line for a prediction.
fn render(prediction: &Prediction, json: bool) -> Result<String> {
    let verdict = Verdict::from_label(&prediction.label);

    if json {
        let value = serde_json::json!({
            "verdict": verdict.to_string(),
            "label": prediction.label,
            "score": prediction.score,
        });
        Ok(serde_json::to_string(&value)?)
    } else {
        Ok(verdict.to_string())
    }
}
