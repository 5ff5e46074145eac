use sloka_lexicon::lookup_grammar;
use sloka_protocol::{GrammaticalInfo, MorphFlags, PartOfSpeech};
use tracing::debug;

/// One suffix heuristic: the ending, and the tag it implies.
struct SuffixRule {
    suffix: &'static str,
    pos: PartOfSpeech,
    flags: MorphFlags,
    records_suffix: bool,
}

/// Tried in order; the first matching ending wins.
const SUFFIX_RULES: [SuffixRule; 4] = [
    // लट् प्रथमपुरुष एकवचन
    SuffixRule {
        suffix: "ति",
        pos: PartOfSpeech::Verb,
        flags: MorphFlags::THIRD_PERSON
            .union(MorphFlags::SINGULAR)
            .union(MorphFlags::PRESENT)
            .union(MorphFlags::INDICATIVE)
            .union(MorphFlags::ACTIVE),
        records_suffix: true,
    },
    SuffixRule {
        suffix: "ः",
        pos: PartOfSpeech::Noun,
        flags: MorphFlags::NOMINATIVE
            .union(MorphFlags::SINGULAR)
            .union(MorphFlags::MASCULINE),
        records_suffix: false,
    },
    SuffixRule {
        suffix: "म्",
        pos: PartOfSpeech::Noun,
        flags: MorphFlags::NOMINATIVE
            .union(MorphFlags::ACCUSATIVE)
            .union(MorphFlags::SINGULAR)
            .union(MorphFlags::NEUTER),
        records_suffix: false,
    },
    SuffixRule {
        suffix: "े",
        pos: PartOfSpeech::Noun,
        flags: MorphFlags::LOCATIVE
            .union(MorphFlags::SINGULAR)
            .union(MorphFlags::MASCULINE)
            .union(MorphFlags::NEUTER),
        records_suffix: false,
    },
];

/// Tags a single token. `None` is a valid answer for words neither the
/// morphology table nor the suffix rules recognise.
pub fn analyze_word(word: &str) -> Option<GrammaticalInfo> {
    if let Some(info) = lookup_grammar(word) {
        debug!(word, "morphology table hit");
        return Some(info.clone());
    }

    let (rule, stem) = SUFFIX_RULES
        .iter()
        .find_map(|rule| word.strip_suffix(rule.suffix).map(|stem| (rule, stem)))?;

    debug!(word, suffix = rule.suffix, "suffix heuristic");
    let info = GrammaticalInfo::new(word, stem, rule.pos, rule.flags);
    Some(if rule.records_suffix {
        info.with_suffix(rule.suffix)
    } else {
        info
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_table_is_authoritative() {
        // गच्छति also ends in ति, but the table carries its root.
        let info = analyze_word("गच्छति").unwrap();
        assert_eq!(info.lemma, "गम्");
        assert_eq!(info.root.as_deref(), Some("गम्"));
    }

    #[test]
    fn test_verb_heuristic() {
        let info = analyze_word("खादति").unwrap();
        assert!(info.is_verb());
        assert_eq!(info.lemma, "खाद");
        assert_eq!(info.suffix.as_deref(), Some("ति"));
        assert_eq!(info.flags.person_label().as_deref(), Some("प्रथमपुरुष (3rd Person)"));
        assert_eq!(info.flags.voice_label().as_deref(), Some("परस्मैपद (Active)"));
    }

    #[test]
    fn test_neuter_heuristic_is_ambiguous() {
        let info = analyze_word("फलम्").unwrap();
        assert_eq!(info.lemma, "फल");
        assert_eq!(info.flags.case_label().as_deref(), Some("प्रथमा/द्वितीया (Nom/Acc)"));
        assert!(!info.is_nominative());
        assert!(info.is_accusative_marked());
    }

    #[test]
    fn test_locative_heuristic() {
        let info = analyze_word("वने").unwrap();
        assert_eq!(info.flags.case_label().as_deref(), Some("सप्तमी (Locative)"));
        assert!(info.flags.contains(MorphFlags::MASCULINE | MorphFlags::NEUTER));
    }

    #[test]
    fn test_untagged() {
        assert_eq!(analyze_word("यदा"), None);
    }

    proptest! {
        #[test]
        fn test_unknown_visarga_word_is_nominative(stem in "[क-ह][ा-ौ]?[क-ह]{1,4}") {
            let word = format!("{}ः", stem);
            prop_assume!(lookup_grammar(&word).is_none());

            let info = analyze_word(&word).unwrap();
            prop_assert_eq!(info.pos, PartOfSpeech::Noun);
            prop_assert_eq!(info.lemma, stem);
            prop_assert_eq!(
                info.flags,
                MorphFlags::NOMINATIVE | MorphFlags::SINGULAR | MorphFlags::MASCULINE
            );
        }
    }
}
