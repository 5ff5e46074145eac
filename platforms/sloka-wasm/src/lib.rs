use std::sync::Arc;

use wasm_bindgen::prelude::*;
use serde::Serialize;
use sloka_analyzer::{AnalyzeError, Analyzer, DatasetConfig, SandhiRuleSet};
use sloka_lexicon::{decode_dictionary, samasa_examples, Lexicon};
use sloka_protocol::SamasaKind;

#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Error object handed to JavaScript.
#[derive(Serialize)]
pub struct EngineError {
    pub error: String,
    pub status: u16,
}

impl From<AnalyzeError> for EngineError {
    fn from(e: AnalyzeError) -> Self {
        Self {
            status: e.status_code(),
            error: e.to_response().error,
        }
    }
}

/// One entry of the compound-type catalogue.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SamasaTypeInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub example: &'static str,
    pub vigraha: &'static str,
    pub known_compounds: Vec<&'static str>,
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn engine_error(e: AnalyzeError) -> JsValue {
    to_js(&EngineError::from(e)).unwrap_or_else(|err| err)
}

/// The analyzer running in the browser.
#[wasm_bindgen]
pub struct SlokaEngine {
    analyzer: Analyzer,
}

#[wasm_bindgen]
impl SlokaEngine {
    /// `lexicon` is an optional compiled lexicon (fetched by JS), layered
    /// under the built-in dictionary.
    #[wasm_bindgen(constructor)]
    pub fn new(lexicon: Option<Vec<u8>>) -> Result<SlokaEngine, JsValue> {
        let mut analyzer = Analyzer::new();
        if let Some(bytes) = lexicon {
            let dict = decode_dictionary(&bytes).map_err(|e| JsValue::from_str(&e.to_string()))?;
            analyzer = analyzer.with_lexicon(Arc::new(Lexicon::builtin().layered(dict)));
        }
        Ok(Self { analyzer })
    }

    /// Learns segmentation patterns from sandhi dataset CSV text. Returns
    /// the number of patterns added; a dataset that cannot be used adds none.
    #[wasm_bindgen(js_name = loadDataset)]
    pub fn load_dataset(&mut self, csv: &str) -> usize {
        let config = DatasetConfig::default();
        match SandhiRuleSet::from_csv(csv.as_bytes(), &config) {
            Ok(rules) => {
                self.analyzer = self.analyzer.clone().with_rules(&rules, config.min_surface_chars);
                self.analyzer.stats().learned_patterns
            }
            Err(_) => 0,
        }
    }

    /// `{ text }` in, analysis result out; rejects with `{ error, status }`.
    pub fn analyze(&self, request: JsValue) -> Result<JsValue, JsValue> {
        let body: serde_json::Value = serde_wasm_bindgen::from_value(request)
            .map_err(|e| engine_error(AnalyzeError::InvalidInput(e.to_string())))?;

        let result = self.analyzer.handle(&body).map_err(engine_error)?;
        to_js(&result)
    }

    /// Segmentation only.
    pub fn segment(&self, text: &str) -> Result<JsValue, JsValue> {
        to_js(&self.analyzer.segmenter().segment(text))
    }

    pub fn stats(&self) -> Result<JsValue, JsValue> {
        to_js(&self.analyzer.stats())
    }

    #[wasm_bindgen(js_name = samasaTypes)]
    pub fn samasa_types(&self) -> Result<JsValue, JsValue> {
        to_js(&samasa_catalogue())
    }
}

pub fn samasa_catalogue() -> Vec<SamasaTypeInfo> {
    SamasaKind::ALL
        .into_iter()
        .map(|kind| {
            let (example, vigraha) = kind.example();
            SamasaTypeInfo {
                name: kind.label(),
                description: kind.description(),
                example,
                vigraha,
                known_compounds: samasa_examples(kind),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sloka_lexicon::encode_dictionary;
    use sloka_protocol::{Dictionary, DictionaryEntry};

    #[test]
    fn test_engine_layers_compiled_lexicon() {
        let dict = Dictionary {
            version: 1,
            entries: vec![DictionaryEntry {
                word: "नदी".to_string(),
                meaning: "सरित्, तटिनी".to_string(),
                etymology: None,
                grammatical_info: None,
                synonyms: vec![],
            }],
        };
        let bytes = encode_dictionary(&dict).unwrap();

        let engine = SlokaEngine::new(Some(bytes)).ok().unwrap();
        assert_eq!(engine.analyzer.lexicon().gloss("नदी"), "सरित्, तटिनी");
        assert_eq!(engine.analyzer.stats().dictionary_entries, Lexicon::builtin().len() + 1);
    }

    #[test]
    fn test_dataset_adds_patterns() {
        let mut engine = SlokaEngine::new(None).ok().unwrap();
        assert_eq!(engine.load_dataset("word,split,type\nसूर्योदयः,सूर्य+उदयः,vowel\n"), 1);
        assert_eq!(engine.load_dataset("not a dataset"), 0);
        assert_eq!(engine.analyzer.stats().learned_patterns, 1);
    }

    #[test]
    fn test_catalogue_covers_every_kind() {
        let catalogue = samasa_catalogue();
        assert_eq!(catalogue.len(), 6);
        assert_eq!(catalogue[0].name, "तत्पुरुषः");
        assert!(catalogue.iter().all(|t| !t.known_compounds.is_empty()));
    }

    #[test]
    fn test_error_object() {
        let err = EngineError::from(AnalyzeError::InvalidInput("text is missing".into()));
        assert_eq!(err.status, 400);
        assert_eq!(err.error, "Invalid input text: text is missing");
    }
}
