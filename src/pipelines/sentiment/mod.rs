//! Sentiment analysis pipeline.
//!
//! Classifies text with a pretrained sequence-classification checkpoint and
//! returns both the predicted label and a confidence score.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use sentiq::sentiment::{ModernBertSize, SentimentAnalysisPipelineBuilder};
//!
//! # fn main() -> sentiq::error::Result<()> {
//! let pipeline = SentimentAnalysisPipelineBuilder::modernbert(ModernBertSize::Base).build()?;
//!
//! let output = pipeline.run("I absolutely love this product!")?;
//! println!("{} ({:.2})", output.prediction.label, output.prediction.score);
//! # Ok(())
//! # }
//! ```
//!
//! # Batch Inference
//!
//! Analyze multiple texts at once (returns `BatchOutput`):
//!
//! ```rust,no_run
//! # use sentiq::sentiment::{ModernBertSize, SentimentAnalysisPipelineBuilder};
//! # fn main() -> sentiq::error::Result<()> {
//! # let pipeline = SentimentAnalysisPipelineBuilder::modernbert(ModernBertSize::Base).build()?;
//! let reviews = &[
//!     "Best purchase I've ever made!",
//!     "Terrible quality, very disappointed.",
//! ];
//!
//! let output = pipeline.run(reviews)?;
//!
//! for r in output.results {
//!     let p = r.prediction?;
//!     println!("{}: {} ({:.2})", r.text, p.label, p.score);
//! }
//! # Ok(())
//! # }
//! ```

// ============ Internal API ============

pub(crate) mod builder;
pub(crate) mod model;
pub(crate) mod pipeline;

// ============ Public API ============

pub use crate::models::ModernBertSize;
pub use crate::pipelines::stats::PipelineStats;
pub use builder::SentimentAnalysisPipelineBuilder;
pub use model::{SentimentAnalysisModel, SentimentResult};
pub use pipeline::{BatchOutput, BatchResult, Output, Prediction, SentimentAnalysisPipeline};

#[doc(hidden)]
pub use pipeline::SentimentInput;

/// Only for generic annotations. Use [`SentimentAnalysisPipelineBuilder::modernbert`].
pub type SentimentModernBert = crate::models::modernbert::SentimentModernBertModel;
