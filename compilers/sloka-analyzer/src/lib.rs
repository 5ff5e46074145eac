//! Sanskrit sentence analysis: the back half of the pipeline and its
//! boundary.
//!
//! [`Analyzer`] is the single entry point. It segments a sentence, glosses
//! and tags every token, classifies compounds, infers the sentence
//! structure and synthesises a paraphrase. Reference tables are shared and
//! read-only; the optional sandhi dataset only ever adds segmentation
//! patterns.

pub mod config;
pub mod dataset;
pub mod error;
pub mod pipeline;
pub mod request;
pub mod samasa;
pub mod synthesis;

pub use config::{AnalyzerConfig, DatasetConfig, LexiconConfig};
pub use dataset::{SandhiExample, SandhiRule, SandhiRuleSet, DEFAULT_DATASET_URL};
pub use error::{AnalyzeError, ConfigError, DatasetError, ErrorResponse};
pub use pipeline::{Analyzer, EngineStats};
pub use request::AnalyzeRequest;
pub use samasa::{analyze_compound, samasa_vigraha, NO_COMPOUND};
pub use synthesis::synthesize;

pub use sloka_protocol::AnalysisResult;
