use std::sync::Arc;

use tokenizers::Tokenizer;
use tracing::debug;

use super::model::SentimentAnalysisModel;
use crate::error::{PipelineError, Result};
use crate::pipelines::stats::PipelineStats;

// ============ Output types ============

/// A sentiment prediction with label and confidence score.
#[derive(Debug, Clone)]
pub struct Prediction {
    /// The predicted sentiment label (e.g., "positive", "negative").
    pub label: String,
    /// Confidence score (0.0 to 1.0).
    pub score: f32,
}

/// Single-text output from `run()`.
#[derive(Debug)]
pub struct Output {
    /// Sentiment prediction.
    pub prediction: Prediction,
    /// Execution statistics.
    pub stats: PipelineStats,
}

/// Single result in batch output.
#[derive(Debug)]
pub struct BatchResult {
    /// Input text.
    pub text: String,
    /// Prediction or error for this input.
    pub prediction: Result<Prediction>,
}

/// Batch output from `run()`.
#[derive(Debug)]
pub struct BatchOutput {
    /// Results for each input.
    pub results: Vec<BatchResult>,
    /// Execution statistics.
    pub stats: PipelineStats,
}

// ============ Input trait for type-based dispatch ============

#[doc(hidden)]
pub trait SentimentInput<'a> {
    /// Output type for `.run()`.
    type Output;

    #[doc(hidden)]
    fn into_texts(self) -> Vec<&'a str>;
    #[doc(hidden)]
    fn convert_output(
        texts: Vec<&'a str>,
        predictions: Vec<Result<Prediction>>,
        stats: PipelineStats,
    ) -> Result<Self::Output>;
}

impl<'a> SentimentInput<'a> for &'a str {
    type Output = Output;

    fn into_texts(self) -> Vec<&'a str> {
        vec![self]
    }

    fn convert_output(
        _texts: Vec<&'a str>,
        mut predictions: Vec<Result<Prediction>>,
        stats: PipelineStats,
    ) -> Result<Self::Output> {
        let prediction = predictions
            .pop()
            .ok_or_else(|| PipelineError::EmptyOutput("No predictions returned".into()))??;
        Ok(Output { prediction, stats })
    }
}

impl<'a> SentimentInput<'a> for &'a [&'a str] {
    type Output = BatchOutput;

    fn into_texts(self) -> Vec<&'a str> {
        self.to_vec()
    }

    fn convert_output(
        texts: Vec<&'a str>,
        predictions: Vec<Result<Prediction>>,
        stats: PipelineStats,
    ) -> Result<Self::Output> {
        let results = texts
            .into_iter()
            .zip(predictions)
            .map(|(text, prediction)| BatchResult {
                text: text.to_string(),
                prediction,
            })
            .collect();
        Ok(BatchOutput { results, stats })
    }
}

impl<'a, const N: usize> SentimentInput<'a> for &'a [&'a str; N] {
    type Output = BatchOutput;

    fn into_texts(self) -> Vec<&'a str> {
        self.as_slice().to_vec()
    }

    fn convert_output(
        texts: Vec<&'a str>,
        predictions: Vec<Result<Prediction>>,
        stats: PipelineStats,
    ) -> Result<Self::Output> {
        let results = texts
            .into_iter()
            .zip(predictions)
            .map(|(text, prediction)| BatchResult {
                text: text.to_string(),
                prediction,
            })
            .collect();
        Ok(BatchOutput { results, stats })
    }
}

// ============ Pipeline ============

/// Classifies text sentiment.
///
/// Construct with [`SentimentAnalysisPipelineBuilder`](super::SentimentAnalysisPipelineBuilder).
/// The underlying model is shared through a weak process-wide cache and is
/// released when the last pipeline using it drops.
pub struct SentimentAnalysisPipeline<M: SentimentAnalysisModel> {
    pub(crate) model: Arc<M>,
    pub(crate) tokenizer: Tokenizer,
}

impl<M: SentimentAnalysisModel> SentimentAnalysisPipeline<M> {
    /// Analyze text sentiment.
    ///
    /// Single input → [`Output`], batch → [`BatchOutput`].
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use sentiq::sentiment::{ModernBertSize, SentimentAnalysisPipelineBuilder};
    /// # fn main() -> sentiq::error::Result<()> {
    /// # let pipeline = SentimentAnalysisPipelineBuilder::modernbert(ModernBertSize::Base).build()?;
    /// // Single
    /// let output = pipeline.run("I love this!")?;
    /// println!("{}", output.prediction.label);
    ///
    /// // Batch
    /// let output = pipeline.run(&["Great!", "Awful."])?;
    /// for r in output.results {
    ///     println!("{} → {}", r.text, r.prediction?.label);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn run<'a, I: SentimentInput<'a>>(&self, input: I) -> Result<I::Output> {
        let stats_builder = PipelineStats::start();
        let texts = input.into_texts();
        let item_count = texts.len();

        let results = self
            .model
            .predict_with_score_batch(&self.tokenizer, &texts)?;

        let predictions: Vec<Result<Prediction>> = results
            .into_iter()
            .map(|result| {
                result.map(|r| Prediction {
                    label: r.label,
                    score: r.score,
                })
            })
            .collect();

        let stats = stats_builder.finish(item_count);
        debug!(
            items = stats.items_processed,
            elapsed_ms = stats.total_time.as_millis() as u64,
            "inference complete"
        );

        I::convert_output(texts, predictions, stats)
    }

    /// Returns the device (CPU/GPU) the model is running on.
    pub fn device(&self) -> &candle_core::Device {
        self.model.device()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipelines::sentiment::model::SentimentResult;
    use candle_core::Device;
    use tokenizers::models::bpe::BPE;

    // Fixed-answer model; lets the pipeline run without weights or network.
    #[derive(Debug, Clone)]
    struct StubModel {
        label: &'static str,
        score: f32,
        device: Device,
    }

    impl StubModel {
        fn answering(label: &'static str, score: f32) -> Self {
            Self {
                label,
                score,
                device: Device::Cpu,
            }
        }
    }

    impl SentimentAnalysisModel for StubModel {
        type Options = ();

        fn new(_options: (), device: Device) -> crate::error::Result<Self> {
            Ok(Self {
                label: "positive",
                score: 1.0,
                device,
            })
        }

        fn predict_with_score(
            &self,
            _tokenizer: &Tokenizer,
            _text: &str,
        ) -> crate::error::Result<SentimentResult> {
            Ok(SentimentResult {
                label: self.label.to_string(),
                score: self.score,
            })
        }

        fn get_tokenizer(_options: ()) -> crate::error::Result<Tokenizer> {
            Ok(Tokenizer::new(BPE::default()))
        }

        fn device(&self) -> &Device {
            &self.device
        }
    }

    // Model that claims success but yields no predictions.
    #[derive(Debug, Clone)]
    struct SilentModel {
        device: Device,
    }

    impl SentimentAnalysisModel for SilentModel {
        type Options = ();

        fn new(_options: (), device: Device) -> crate::error::Result<Self> {
            Ok(Self { device })
        }

        fn predict_with_score(
            &self,
            _tokenizer: &Tokenizer,
            _text: &str,
        ) -> crate::error::Result<SentimentResult> {
            unreachable!("batch override returns nothing")
        }

        fn predict_with_score_batch(
            &self,
            _tokenizer: &Tokenizer,
            _texts: &[&str],
        ) -> crate::error::Result<Vec<crate::error::Result<SentimentResult>>> {
            Ok(vec![])
        }

        fn get_tokenizer(_options: ()) -> crate::error::Result<Tokenizer> {
            Ok(Tokenizer::new(BPE::default()))
        }

        fn device(&self) -> &Device {
            &self.device
        }
    }

    fn pipeline_over<M: SentimentAnalysisModel>(model: M) -> SentimentAnalysisPipeline<M> {
        SentimentAnalysisPipeline {
            model: Arc::new(model),
            tokenizer: Tokenizer::new(BPE::default()),
        }
    }

    #[test]
    fn single_input_passes_model_label_through() {
        let pipeline = pipeline_over(StubModel::answering("NEGATIVE", 0.95));

        let output = pipeline.run("This is terrible.").unwrap();
        assert_eq!(output.prediction.label, "NEGATIVE");
        assert_eq!(output.stats.items_processed, 1);
    }

    #[test]
    fn score_is_carried_but_never_alters_the_label() {
        let low = pipeline_over(StubModel::answering("POSITIVE", 0.51));
        let high = pipeline_over(StubModel::answering("POSITIVE", 0.99));

        let low_out = low.run("I love this!").unwrap();
        let high_out = high.run("I love this!").unwrap();

        assert_eq!(low_out.prediction.label, high_out.prediction.label);
        assert!((low_out.prediction.score - 0.51).abs() < f32::EPSILON);
        assert!((high_out.prediction.score - 0.99).abs() < f32::EPSILON);
    }

    #[test]
    fn batch_input_yields_one_result_per_text() {
        let pipeline = pipeline_over(StubModel::answering("positive", 0.8));

        let output = pipeline.run(&["Great!", "Awful.", "Meh."]).unwrap();
        assert_eq!(output.results.len(), 3);
        assert_eq!(output.stats.items_processed, 3);
        for r in output.results {
            assert_eq!(r.prediction.unwrap().label, "positive");
        }
    }

    #[test]
    fn empty_model_output_is_a_named_error_not_a_panic() {
        let pipeline = pipeline_over(SilentModel { device: Device::Cpu });

        let err = pipeline.run("anything").unwrap_err();
        assert!(matches!(err, PipelineError::EmptyOutput(_)));
    }
}
