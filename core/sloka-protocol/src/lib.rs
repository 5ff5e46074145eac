extern crate alloc;

pub mod ids;
pub mod morphology;

// Re-export core types for convenience
pub use ids::TokenId;
pub use morphology::*;

pub mod model;
pub use model::*;

#[cfg(test)]
mod tests {
    use super::*;
    use rkyv::{from_bytes, to_bytes};

    #[test]
    fn test_entry_archive() {
        let original = DictionaryEntry {
            word: "जलम्".to_string(),
            meaning: "उदकम्, नीरम्, वारि".to_string(),
            etymology: None,
            grammatical_info: Some("नपुंसकलिङ्गः".to_string()),
            synonyms: vec!["उदकम्".to_string()],
        };

        let bytes = to_bytes::<_, 256>(&original).expect("Failed to serialize DictionaryEntry");
        let restored: DictionaryEntry = from_bytes(&bytes).expect("Failed to deserialize DictionaryEntry");

        assert_eq!(original, restored);
    }

    #[test]
    fn test_id_layout() {
        assert_eq!(core::mem::size_of::<TokenId>(), 4);
    }

    #[test]
    fn test_single_feature_label() {
        let flags = MorphFlags::NOMINATIVE | MorphFlags::SINGULAR | MorphFlags::MASCULINE;
        assert_eq!(flags.case_label().as_deref(), Some("प्रथमा (Nominative)"));
        assert_eq!(flags.number_label().as_deref(), Some("एकवचन (Singular)"));
        assert_eq!(flags.gender_label().as_deref(), Some("पुंल्लिङ्ग (Masculine)"));
        assert_eq!(flags.tense_label(), None);
    }

    #[test]
    fn test_ambiguous_label() {
        let flags = MorphFlags::NOMINATIVE | MorphFlags::ACCUSATIVE;
        assert_eq!(flags.case_label().as_deref(), Some("प्रथमा/द्वितीया (Nom/Acc)"));

        let gender = MorphFlags::MASCULINE | MorphFlags::NEUTER;
        assert_eq!(gender.gender_label().as_deref(), Some("पुंल्लिङ्ग/नपुंसकलिङ्ग (Masc/Neut)"));
    }

    #[test]
    fn test_case_predicates() {
        let nom = GrammaticalInfo::new("रामः", "राम", PartOfSpeech::Noun, MorphFlags::NOMINATIVE);
        let nom_acc = GrammaticalInfo::new(
            "वनम्",
            "वन",
            PartOfSpeech::Noun,
            MorphFlags::NOMINATIVE | MorphFlags::ACCUSATIVE,
        );

        assert!(nom.is_nominative());
        assert!(!nom.is_accusative_marked());
        assert!(!nom_acc.is_nominative());
        assert!(nom_acc.is_accusative_marked());
    }

    #[test]
    fn test_samasa_category_display() {
        let genitive = SamasaCategory::tatpurusha(MorphFlags::GENITIVE);
        assert_eq!(genitive.to_string(), "षष्ठी-तत्पुरुषः");
        assert_eq!(SamasaCategory::of(SamasaKind::Dvandva).to_string(), "द्वन्द्वः");
        assert_eq!(
            SamasaCategory::probable(SamasaKind::Tatpurusha).to_string(),
            "तत्पुरुषः (संभावितः)"
        );
    }

    #[test]
    fn test_samasa_kind_parse() {
        assert_eq!("bahuvrihi".parse::<SamasaKind>(), Ok(SamasaKind::Bahuvrihi));
        assert_eq!("द्विगुः".parse::<SamasaKind>(), Ok(SamasaKind::Dvigu));
        assert!("compound".parse::<SamasaKind>().is_err());
    }
}
