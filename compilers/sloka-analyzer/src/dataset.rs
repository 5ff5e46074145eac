//! Sandhi augmentation dataset.
//!
//! A CSV of `(fused word, "left+right", category)` rows, grouped by the
//! characters meeting at the boundary. The pipeline only ever sees the
//! result through [`SandhiRuleSet::compound_patterns`], so everything here
//! is optional: a failed load leaves an empty rule set behind.

use std::collections::{HashMap, HashSet};
use std::io::Read;

use csv::ReaderBuilder;
use serde::Serialize;
use sloka_parser::CompoundPattern;
use tracing::debug;
#[cfg(feature = "fetch")]
use tracing::{info, warn};

use crate::config::DatasetConfig;
use crate::error::DatasetError;

/// Public sandhi training set.
pub const DEFAULT_DATASET_URL: &str =
    "https://hebbkx1anhila5yf.public.blob.vercel-storage.com/train-twv2JIBskDYrqsqlSKgZzHDaZ95cMO.csv";

/// Occurrences at which a rule's score saturates.
const CONFIDENCE_SATURATION: f32 = 10.0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SandhiExample {
    /// Split form, `left+right`.
    pub original: String,
    /// Fused surface form.
    pub result: String,
    pub kind: String,
}

impl SandhiExample {
    /// The two halves of [`Self::original`].
    pub fn halves(&self) -> Option<(&str, &str)> {
        self.original.split_once('+')
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SandhiRule {
    /// `<last char of left>+<first char of right>`
    pub pattern: String,
    pub examples: Vec<SandhiExample>,
    /// Number of rows that produced this pattern.
    pub confidence: usize,
    pub kind: String,
}

impl SandhiRule {
    /// Confidence normalised into `0.0..=1.0`.
    pub fn score(&self) -> f32 {
        (self.confidence as f32 / CONFIDENCE_SATURATION).min(1.0)
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SandhiRuleSet {
    rules: Vec<SandhiRule>,
    rows_read: usize,
    rows_skipped: usize,
}

impl SandhiRuleSet {
    /// Parses the dataset. Malformed rows are skipped; at most
    /// `config.row_budget` data rows are considered.
    pub fn from_csv<R: Read>(reader: R, config: &DatasetConfig) -> Result<Self, DatasetError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);
        reader.headers()?;

        let mut rules: Vec<SandhiRule> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut rows_read = 0;
        let mut rows_skipped = 0;

        for record in reader.records().take(config.row_budget) {
            rows_read += 1;
            let Some((pattern, example)) = record.ok().as_ref().and_then(parse_row) else {
                rows_skipped += 1;
                continue;
            };

            let slot = *index.entry(pattern.clone()).or_insert_with(|| {
                rules.push(SandhiRule {
                    pattern,
                    examples: Vec::new(),
                    confidence: 0,
                    kind: example.kind.clone(),
                });
                rules.len() - 1
            });

            let rule = &mut rules[slot];
            rule.confidence += 1;
            if rule.examples.len() < config.examples_per_pattern {
                rule.examples.push(example);
            }
        }

        if rules.is_empty() {
            return Err(DatasetError::Empty);
        }

        // Stable: ties keep first-seen order.
        rules.sort_by(|a, b| b.confidence.cmp(&a.confidence));
        debug!(rows_read, rows_skipped, rules = rules.len(), "sandhi dataset parsed");

        Ok(Self { rules, rows_read, rows_skipped })
    }

    pub fn rules(&self) -> &[SandhiRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn rows_read(&self) -> usize {
        self.rows_read
    }

    pub fn rows_skipped(&self) -> usize {
        self.rows_skipped
    }

    /// One segmentation pattern per retained example, in rule order, with
    /// duplicate surfaces and fused forms shorter than `min_surface_chars`
    /// dropped.
    pub fn compound_patterns(&self, min_surface_chars: usize) -> Vec<CompoundPattern> {
        let mut seen = HashSet::new();
        self.rules
            .iter()
            .flat_map(|rule| rule.examples.iter())
            .filter(|example| example.result.chars().count() >= min_surface_chars)
            .filter_map(|example| {
                let (left, right) = example.halves()?;
                seen.insert(example.result.as_str())
                    .then(|| CompoundPattern::new(example.result.as_str(), left, right))
            })
            .collect()
    }

    /// Downloads and parses the dataset at `url`.
    #[cfg(feature = "fetch")]
    pub async fn fetch(url: &str, config: &DatasetConfig) -> Result<Self, DatasetError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        let response = client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(DatasetError::Status(response.status().as_u16()));
        }

        let body = response.text().await?;
        Self::from_csv(body.as_bytes(), config)
    }

    /// Best effort: the configured dataset, or an empty set when none is
    /// configured or it cannot be used.
    #[cfg(feature = "fetch")]
    pub async fn load(config: &DatasetConfig) -> Self {
        let Some(url) = config.url.as_deref() else {
            return Self::default();
        };

        match Self::fetch(url, config).await {
            Ok(rules) => {
                info!(url, rules = rules.len(), rows = rules.rows_read, "sandhi dataset loaded");
                rules
            }
            Err(err) => {
                warn!(url, error = %err, "sandhi dataset unavailable, using built-in rules");
                Self::default()
            }
        }
    }
}

/// `word, left+right, kind` into its boundary pattern and example.
fn parse_row(record: &csv::StringRecord) -> Option<(String, SandhiExample)> {
    let field = |i: usize| record.get(i).map(|f| f.trim_matches('"').trim()).unwrap_or("");

    let word = field(0);
    let split = field(1);
    if word.is_empty() {
        return None;
    }

    let (left, right) = split.split_once('+')?;
    let (left, right) = (left.trim(), right.trim());
    if right.contains('+') || left.is_empty() || right.is_empty() {
        return None;
    }

    let pattern = format!("{}+{}", left.chars().last()?, right.chars().next()?);
    let example = SandhiExample {
        original: format!("{}+{}", left, right),
        result: word.to_string(),
        kind: field(2).to_string(),
    };
    Some((pattern, example))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = "\
word,split,type
हिमालयः,हिम+आलयः,vowel
विद्यालयः,विद्या+आलयः,vowel
सूर्योदयः,सूर्य+उदयः,vowel
धर्मालयः,धर्म+आलयः,vowel
broken-row
अत्र,no-plus,none
,राम+अस्य,vowel
बहु,a+b+c,vowel
";

    fn parse(csv: &str, config: &DatasetConfig) -> SandhiRuleSet {
        SandhiRuleSet::from_csv(csv.as_bytes(), config).unwrap()
    }

    #[test]
    fn test_groups_by_boundary() {
        let rules = parse(SAMPLE, &DatasetConfig::default());
        let patterns: Vec<&str> = rules.rules().iter().map(|r| r.pattern.as_str()).collect();

        // म+आ twice (हिम, धर्म), ा+आ once, य+उ once; ties stay in first-seen order.
        assert_eq!(patterns, vec!["म+आ", "ा+आ", "य+उ"]);
        assert_eq!(rules.rules()[0].confidence, 2);
        assert_eq!(rules.rules()[0].kind, "vowel");
        assert_eq!(rules.rows_read(), 8);
        assert_eq!(rules.rows_skipped(), 4);
    }

    #[test]
    fn test_example_cap_and_score() {
        let mut csv = String::from("word,split,type\n");
        for i in 0..12 {
            csv.push_str(&format!("देवालय{},देव+आलय{},vowel\n", i, i));
        }
        let config = DatasetConfig { examples_per_pattern: 3, ..DatasetConfig::default() };
        let rules = parse(&csv, &config);

        assert_eq!(rules.len(), 1);
        assert_eq!(rules.rules()[0].examples.len(), 3);
        assert_eq!(rules.rules()[0].confidence, 12);
        assert_eq!(rules.rules()[0].score(), 1.0);
    }

    #[test]
    fn test_row_budget() {
        let config = DatasetConfig { row_budget: 2, ..DatasetConfig::default() };
        let rules = parse(SAMPLE, &config);
        assert_eq!(rules.rows_read(), 2);
        assert_eq!(rules.rules().iter().map(|r| r.confidence).sum::<usize>(), 2);
    }

    #[test]
    fn test_only_malformed_rows_is_empty() {
        let result = SandhiRuleSet::from_csv("word,split\nx,y\n".as_bytes(), &DatasetConfig::default());
        assert!(matches!(result, Err(DatasetError::Empty)));
    }

    #[test]
    fn test_compound_patterns() {
        let rules = parse(SAMPLE, &DatasetConfig::default());
        let patterns = rules.compound_patterns(2);

        assert_eq!(patterns.len(), 4);
        assert_eq!(patterns[0], CompoundPattern::new("हिमालयः", "हिम", "आलयः"));
        assert!(rules.compound_patterns(usize::MAX).is_empty());
    }

    #[test]
    fn test_quoted_fields() {
        let rules = parse("word,split,type\n\"रामायणम्\",\"राम + अयनम्\",\"vowel\"\n", &DatasetConfig::default());
        assert_eq!(rules.rules()[0].pattern, "म+अ");
        assert_eq!(rules.rules()[0].examples[0].original, "राम+अयनम्");
    }
}
