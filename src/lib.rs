//! Sentiment classification for the command line, powered by [Candle](https://github.com/huggingface/candle).
//!
//! The library half of the `sentiq` binary: a sentiment-analysis pipeline
//! over pretrained ModernBERT checkpoints, with an API inspired by Python's
//! [Transformers](https://huggingface.co/docs/transformers).

#![deny(missing_docs)]

// ============ Internal API ============

pub(crate) mod loaders;
pub(crate) mod models;
pub(crate) mod pipelines;

// ============ Public API ============

pub mod cli;
pub mod error;

pub use pipelines::sentiment;
