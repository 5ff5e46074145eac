use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use sloka_ecs::components::DependencyRole;
use sloka_ecs::systems::agreement::AgreementError;
use sloka_ecs::SlokaWorld;
use sloka_lexicon::{compound_count, grammar_entry_count, read_dictionary, Lexicon};
use sloka_parser::syntax::structure_from;
use sloka_parser::{assign_roles, builtin_patterns, tag_tokens, Dependency, MorphToken, Segmenter, SyntaxRole};
use sloka_protocol::{AnalysisResult, GrammaticalAnalysis, GrammaticalInfo, Padartha, PartOfSpeech, TokenId};
use tracing::{debug, error, info};

use crate::config::AnalyzerConfig;
use crate::dataset::SandhiRuleSet;
use crate::error::{AnalyzeError, ConfigError};
use crate::request::AnalyzeRequest;
use crate::samasa::samasa_vigraha;
use crate::synthesis::synthesize;

const VISARGA_NOTE: &str = "विसर्ग सन्धि संभव (Visarga sandhi possible)";

/// Sizes of the tables an [`Analyzer`] works from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineStats {
    pub dictionary_entries: usize,
    pub compound_entries: usize,
    pub morphology_entries: usize,
    pub builtin_patterns: usize,
    pub learned_patterns: usize,
}

/// The sentence analyzer. Immutable once built, so one instance can serve
/// concurrent requests.
#[derive(Debug, Clone)]
pub struct Analyzer {
    lexicon: Arc<Lexicon>,
    segmenter: Segmenter,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer {
    /// Built-in tables and rules only.
    pub fn new() -> Self {
        Self {
            lexicon: Lexicon::builtin(),
            segmenter: Segmenter::new(),
        }
    }

    /// Appends the dataset's patterns after the built-in ones, replacing any
    /// previously learned set.
    pub fn with_rules(mut self, rules: &SandhiRuleSet, min_surface_chars: usize) -> Self {
        let learned = rules.compound_patterns(min_surface_chars);
        info!(rules = rules.len(), patterns = learned.len(), "segmentation patterns learned");
        self.segmenter = Segmenter::with_patterns(learned);
        self
    }

    pub fn with_lexicon(mut self, lexicon: Arc<Lexicon>) -> Self {
        self.lexicon = lexicon;
        self
    }

    /// Built-in rules plus the configured compiled lexicon, if any.
    pub fn from_config(config: &AnalyzerConfig) -> Result<Self, ConfigError> {
        let analyzer = Self::new();
        let Some(path) = config.lexicon.path.as_ref() else {
            return Ok(analyzer);
        };

        let extra = read_dictionary(path)?;
        let lexicon = Lexicon::builtin().layered(extra);
        info!(entries = lexicon.len(), "dictionary layered");
        Ok(analyzer.with_lexicon(Arc::new(lexicon)))
    }

    /// [`Self::from_config`] followed by a best-effort dataset load.
    #[cfg(feature = "fetch")]
    pub async fn bootstrap(config: &AnalyzerConfig) -> Result<Self, ConfigError> {
        let analyzer = Self::from_config(config)?;
        let rules = SandhiRuleSet::load(&config.dataset).await;
        if rules.is_empty() {
            return Ok(analyzer);
        }
        Ok(analyzer.with_rules(&rules, config.dataset.min_surface_chars))
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn segmenter(&self) -> &Segmenter {
        &self.segmenter
    }

    pub fn stats(&self) -> EngineStats {
        let builtin = builtin_patterns().len();
        EngineStats {
            dictionary_entries: self.lexicon.len(),
            compound_entries: compound_count(),
            morphology_entries: grammar_entry_count(),
            builtin_patterns: builtin,
            learned_patterns: self.segmenter.patterns().len().saturating_sub(builtin),
        }
    }

    /// Runs the whole pipeline. Total: every input yields a result.
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        let tokens = self.segmenter.segment(text);
        debug!(?tokens, "segmented");

        let samasa = samasa_vigraha(&tokens, text);
        let padartha = tokens
            .iter()
            .map(|word| Padartha { word: word.clone(), meaning: self.lexicon.gloss(word) })
            .collect();

        let word_analysis = tag_tokens(&tokens);
        let morph: Vec<MorphToken> = tokens
            .iter()
            .zip(&word_analysis)
            .map(|(text, info)| MorphToken::new(text, info.as_ref()))
            .collect();
        let deps = assign_roles(&morph);
        let sentence_structure = structure_from(&morph, &deps);
        let grammatical_notes = grammatical_notes(&tokens, &word_analysis, &deps);

        let vakyartha = synthesize(&tokens, text);

        AnalysisResult {
            sandhi_vigraha: tokens,
            samasa_vigraha: samasa,
            padartha,
            vakyartha,
            grammatical_analysis: GrammaticalAnalysis {
                word_analysis,
                sentence_structure,
                grammatical_notes,
            },
        }
    }

    /// Request boundary: validates the body, then runs the pipeline. A
    /// panic inside the pipeline becomes [`AnalyzeError::AnalysisFailed`].
    pub fn handle(&self, body: &Value) -> Result<AnalysisResult, AnalyzeError> {
        let request = AnalyzeRequest::from_json(body)?;
        self.run(&request)
    }

    pub fn run(&self, request: &AnalyzeRequest) -> Result<AnalysisResult, AnalyzeError> {
        info!(text = %request.text(), "analyzing");
        guarded(|| self.analyze(request.text()))
    }
}

/// Runs `f`, turning a panic into [`AnalyzeError::AnalysisFailed`] so no
/// partial result escapes.
fn guarded<T>(f: impl FnOnce() -> T) -> Result<T, AnalyzeError> {
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(|payload| {
        let message = panic_message(payload.as_ref());
        error!(%message, "analysis failed");
        AnalyzeError::AnalysisFailed(message)
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "internal error".to_string()
    }
}

/// Counts, visarga hints, then agreement findings.
fn grammatical_notes(tokens: &[String], tags: &[Option<GrammaticalInfo>], deps: &[Dependency]) -> Vec<String> {
    let mut notes = Vec::new();

    let verbs = tags.iter().flatten().filter(|info| info.is_verb()).count();
    let nouns = tags.iter().flatten().filter(|info| info.pos == PartOfSpeech::Noun).count();
    if verbs > 0 {
        notes.push(format!("{} क्रिया पद मिला ({} verb(s) found)", verbs, verbs));
    }
    if nouns > 0 {
        notes.push(format!("{} संज्ञा पद मिला ({} noun(s) found)", nouns, nouns));
    }

    for pair in tokens.windows(2) {
        if pair[0].ends_with('ः') && pair[1].starts_with('व') {
            notes.push(VISARGA_NOTE.to_string());
        }
    }

    notes.extend(agreement_notes(tokens, tags, deps).iter().map(AgreementError::note));
    notes
}

fn agreement_notes(tokens: &[String], tags: &[Option<GrammaticalInfo>], deps: &[Dependency]) -> Vec<AgreementError> {
    let mut world = SlokaWorld::new();
    let entities: Vec<_> = tokens
        .iter()
        .zip(tags)
        .enumerate()
        .map(|(i, (text, info))| world.add_token(TokenId::from(i), text.clone(), info.as_ref()))
        .collect();

    for dep in deps {
        let role = match dep.role {
            SyntaxRole::Subject => DependencyRole::Subject,
            SyntaxRole::Object => DependencyRole::Object,
            SyntaxRole::Predicate => DependencyRole::Predicate,
            SyntaxRole::Modifier => DependencyRole::Modifier,
            SyntaxRole::Root => continue,
        };
        if let Some(head) = dep.head_index {
            world.set_dependency(entities[dep.dependent_index], entities[head], role);
        }
    }

    world.validate()
}
