#![cfg(feature = "cuda")]

use sentiq::cli::Verdict;
use sentiq::error::Result;
use sentiq::sentiment::{ModernBertSize, SentimentAnalysisPipelineBuilder};

#[test]
fn sentiment_basic() -> Result<()> {
    let pipeline = SentimentAnalysisPipelineBuilder::modernbert(ModernBertSize::Base)
        .cuda(0)
        .build()?;

    let output = pipeline.run("I love Rust!")?;
    assert!(!output.prediction.label.trim().is_empty());
    assert!(output.prediction.score >= 0.0 && output.prediction.score <= 1.0);
    assert_eq!(Verdict::from_label(&output.prediction.label), Verdict::Positive);
    Ok(())
}

#[test]
fn obvious_negative_is_not_positive() -> Result<()> {
    let pipeline = SentimentAnalysisPipelineBuilder::modernbert(ModernBertSize::Base)
        .cuda(0)
        .build()?;

    let output = pipeline.run("This is terrible, worst experience ever.")?;
    assert_eq!(
        Verdict::from_label(&output.prediction.label),
        Verdict::NeutralOrNegative
    );
    Ok(())
}

#[test]
fn batch_agrees_with_sequential() -> Result<()> {
    let pipeline = SentimentAnalysisPipelineBuilder::modernbert(ModernBertSize::Base)
        .cuda(0)
        .build()?;

    let texts: &[&str] = &[
        "I absolutely love this product!",
        "Complete waste of money.",
        "Great service, highly recommend!",
        "The staff was rude and unhelpful.",
    ];

    let sequential: Vec<_> = texts
        .iter()
        .map(|t| pipeline.run(*t).map(|o| o.prediction.label))
        .collect::<Result<_>>()?;

    let batched = pipeline.run(texts)?;

    for (seq_label, batch) in sequential.into_iter().zip(batched.results) {
        let batch_label = batch.prediction?.label;
        assert_eq!(seq_label, batch_label, "Labels should match");
    }

    Ok(())
}
