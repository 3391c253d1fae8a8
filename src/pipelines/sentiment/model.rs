use candle_core::Device;
use tokenizers::Tokenizer;

use crate::error::Result;

/// A raw model prediction: the top label and its confidence.
#[derive(Debug, Clone)]
pub struct SentimentResult {
    /// The predicted label, as named by the checkpoint's `id2label` table.
    pub label: String,
    /// Confidence score for that label (0.0 to 1.0).
    pub score: f32,
}

/// The seam between pipeline orchestration and concrete model implementations.
///
/// Implemented by [`SentimentModernBert`](super::SentimentModernBert); test
/// doubles implement it to exercise the pipeline without weights.
pub trait SentimentAnalysisModel {
    /// Options type for model configuration.
    type Options: std::fmt::Debug + Clone;

    /// Create a new model instance on the given device.
    fn new(options: Self::Options, device: Device) -> Result<Self>
    where
        Self: Sized;

    /// Predict the sentiment of one text.
    fn predict_with_score(&self, tokenizer: &Tokenizer, text: &str) -> Result<SentimentResult>;

    /// Predict the sentiment of multiple texts, one result per input.
    fn predict_with_score_batch(
        &self,
        tokenizer: &Tokenizer,
        texts: &[&str],
    ) -> Result<Vec<Result<SentimentResult>>> {
        Ok(texts
            .iter()
            .map(|text| self.predict_with_score(tokenizer, text))
            .collect())
    }

    /// Load the tokenizer matching this model's checkpoint.
    fn get_tokenizer(options: Self::Options) -> Result<Tokenizer>;

    /// The device (CPU/GPU) the model is running on.
    fn device(&self) -> &Device;
}
