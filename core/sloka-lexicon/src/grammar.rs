//! Morphology database: authoritative, fully specified tags.

use std::collections::HashMap;
use std::sync::LazyLock;

use sloka_protocol::{GrammaticalInfo, MorphFlags, PartOfSpeech};

const NOM_SG_MASC: MorphFlags = MorphFlags::NOMINATIVE
    .union(MorphFlags::SINGULAR)
    .union(MorphFlags::MASCULINE);
const ACC_SG_MASC: MorphFlags = MorphFlags::ACCUSATIVE
    .union(MorphFlags::SINGULAR)
    .union(MorphFlags::MASCULINE);
const NOM_SG_NEUT: MorphFlags = MorphFlags::NOMINATIVE
    .union(MorphFlags::SINGULAR)
    .union(MorphFlags::NEUTER);
const ACC_SG_NEUT: MorphFlags = MorphFlags::ACCUSATIVE
    .union(MorphFlags::SINGULAR)
    .union(MorphFlags::NEUTER);
const NOM_ACC_SG_NEUT: MorphFlags = NOM_SG_NEUT.union(MorphFlags::ACCUSATIVE);
const LOC_SG_NEUT: MorphFlags = MorphFlags::LOCATIVE
    .union(MorphFlags::SINGULAR)
    .union(MorphFlags::NEUTER);

/// लट् परस्मैपद, singular; the person is added per entry.
const PRESENT_ACTIVE_SG: MorphFlags = MorphFlags::SINGULAR
    .union(MorphFlags::PRESENT)
    .union(MorphFlags::INDICATIVE)
    .union(MorphFlags::ACTIVE);

fn nominal(word: &str, lemma: &str, pos: PartOfSpeech, flags: MorphFlags) -> GrammaticalInfo {
    GrammaticalInfo::new(word, lemma, pos, flags)
}

fn noun(word: &str, lemma: &str, flags: MorphFlags) -> GrammaticalInfo {
    nominal(word, lemma, PartOfSpeech::Noun, flags)
}

fn verb(word: &str, lemma: &str, root: &str, suffix: &str, person: MorphFlags) -> GrammaticalInfo {
    GrammaticalInfo::new(word, lemma, PartOfSpeech::Verb, PRESENT_ACTIVE_SG | person)
        .with_root(root)
        .with_suffix(suffix)
}

static GRAMMAR: LazyLock<HashMap<String, GrammaticalInfo>> = LazyLock::new(|| {
    let entries = vec![
        noun("रामः", "राम", NOM_SG_MASC),
        noun("रामम्", "राम", ACC_SG_MASC),
        noun("वनम्", "वन", NOM_ACC_SG_NEUT),
        noun("वनं", "वन", ACC_SG_NEUT),
        noun("गुरुः", "गुरु", NOM_SG_MASC),
        noun("धर्म", "धर्म", NOM_SG_MASC),
        noun("क्षेत्रे", "क्षेत्र", LOC_SG_NEUT),
        noun("कुरु", "कुरु", NOM_SG_MASC),
        noun("ब्रह्मा", "ब्रह्मन्", NOM_SG_MASC),
        noun("विष्णुः", "विष्णु", NOM_SG_MASC),
        nominal("सत्यम्", "सत्य", PartOfSpeech::NounOrAdjective, NOM_SG_NEUT),
        nominal("शिवम्", "शिव", PartOfSpeech::NounOrAdjective, NOM_SG_NEUT),
        nominal("सुन्दरम्", "सुन्दर", PartOfSpeech::Adjective, NOM_SG_NEUT),
        nominal(
            "अहम्",
            "अस्मद्",
            PartOfSpeech::Pronoun,
            MorphFlags::NOMINATIVE | MorphFlags::SINGULAR | MorphFlags::FIRST_PERSON,
        ),
        nominal("च", "च", PartOfSpeech::Indeclinable, MorphFlags::empty())
            .with_particle("समुच्चयबोधक (Conjunction)"),
        verb("गच्छति", "गम्", "गम्", "ति", MorphFlags::THIRD_PERSON),
        verb("आगच्छति", "आगम्", "आ + गम्", "ति", MorphFlags::THIRD_PERSON),
        verb("पठति", "पठ्", "पठ्", "ति", MorphFlags::THIRD_PERSON),
        verb("पिबामि", "पा", "पा", "मि", MorphFlags::FIRST_PERSON),
    ];

    entries
        .into_iter()
        .map(|info| (info.word.clone(), info))
        .collect()
});

/// Exact lookup in the morphology database.
pub fn lookup_grammar(word: &str) -> Option<&'static GrammaticalInfo> {
    GRAMMAR.get(word)
}

pub fn grammar_entry_count() -> usize {
    GRAMMAR.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verb_entry() {
        let info = lookup_grammar("गच्छति").unwrap();
        assert!(info.is_verb());
        assert_eq!(info.root.as_deref(), Some("गम्"));
        assert_eq!(info.flags.person_label().as_deref(), Some("प्रथमपुरुष (3rd Person)"));
        assert_eq!(info.flags.mood_label().as_deref(), Some("लट्लकार (Indicative)"));
    }

    #[test]
    fn test_ambiguous_case_entry() {
        let info = lookup_grammar("वनम्").unwrap();
        assert!(!info.is_nominative());
        assert!(info.is_accusative_marked());
    }

    #[test]
    fn test_indeclinable() {
        let info = lookup_grammar("च").unwrap();
        assert!(info.is_indeclinable());
        assert_eq!(info.flags.case_label(), None);
        assert_eq!(info.particle.as_deref(), Some("समुच्चयबोधक (Conjunction)"));
    }
}
