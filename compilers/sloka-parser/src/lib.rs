//! Front half of the pipeline: tokenizer, segmenter, morphological tagger
//! and sentence-structure inference.

pub mod parser;
pub mod token;
pub mod sandhi;
pub mod morphology;
pub mod syntax;

pub use morphology::analyze_word;
pub use sandhi::{builtin_patterns, CompoundPattern, Segmenter};
pub use syntax::{assign_roles, infer_structure, Dependency, MorphToken, SyntaxRole};

use sloka_protocol::GrammaticalInfo;

/// Tags every token independently, preserving order.
pub fn tag_tokens<S: AsRef<str>>(tokens: &[S]) -> Vec<Option<GrammaticalInfo>> {
    tokens.iter().map(|t| analyze_word(t.as_ref())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sloka_protocol::StructureLabel;

    #[test]
    fn test_segment_then_tag() {
        let segmenter = Segmenter::new();
        let tokens = segmenter.segment("रामो वनं गच्छति।");
        assert_eq!(tokens, vec!["रामः", "वनं", "गच्छति"]);

        let tags = tag_tokens(&tokens);
        assert_eq!(tags.len(), tokens.len());
        assert!(tags.iter().all(Option::is_some));

        let morph: Vec<MorphToken> = tokens
            .iter()
            .zip(&tags)
            .map(|(t, info)| MorphToken::new(t, info.as_ref()))
            .collect();
        assert_eq!(infer_structure(&morph).structure, StructureLabel::SubjectObjectVerb);
    }
}
