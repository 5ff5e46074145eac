//! Compound (samāsa) database.

use std::collections::HashMap;
use std::sync::LazyLock;

use sloka_protocol::{MorphFlags, SamasaAnalysis, SamasaCategory, SamasaKind};

struct CompoundRow {
    compound: &'static str,
    category: SamasaCategory,
    vigraha: &'static str,
    explanation: &'static str,
    components: [&'static str; 2],
}

const GENITIVE_TATPURUSHA: SamasaCategory = SamasaCategory::tatpurusha(MorphFlags::GENITIVE);

const ROWS: &[CompoundRow] = &[
    CompoundRow {
        compound: "धर्मक्षेत्रे",
        category: GENITIVE_TATPURUSHA,
        vigraha: "धर्मस्य क्षेत्रम्",
        explanation: "धर्मस्य क्षेत्रम् इति अर्थः। षष्ठी विभक्तेः लोपः।",
        components: ["धर्म", "क्षेत्र"],
    },
    CompoundRow {
        compound: "कुरुक्षेत्रे",
        category: GENITIVE_TATPURUSHA,
        vigraha: "कुरूणां क्षेत्रम्",
        explanation: "कुरूणां क्षेत्रम् इति अर्थः। षष्ठी विभक्तेः लोपः।",
        components: ["कुरु", "क्षेत्र"],
    },
    CompoundRow {
        compound: "राजपुत्रः",
        category: GENITIVE_TATPURUSHA,
        vigraha: "राज्ञः पुत्रः",
        explanation: "राज्ञः पुत्रः इति अर्थः। राजा इत्यस्य षष्ठी विभक्तेः लोपः।",
        components: ["राजन्", "पुत्र"],
    },
    CompoundRow {
        compound: "गङ्गाजलम्",
        category: GENITIVE_TATPURUSHA,
        vigraha: "गङ्गायाः जलम्",
        explanation: "गङ्गायाः जलम् इति अर्थः। षष्ठी विभक्तेः लोपः।",
        components: ["गङ्गा", "जल"],
    },
    CompoundRow {
        compound: "भगवद्गीता",
        category: GENITIVE_TATPURUSHA,
        vigraha: "भगवतः गीता",
        explanation: "भगवतः गीता इति अर्थः। भगवान् इत्यस्य षष्ठी विभक्तेः लोपः।",
        components: ["भगवत्", "गीता"],
    },
    CompoundRow {
        compound: "गुरुदक्षिणा",
        category: SamasaCategory::tatpurusha(MorphFlags::DATIVE),
        vigraha: "गुरवे दक्षिणा",
        explanation: "गुरवे दक्षिणा इति अर्थः। चतुर्थी विभक्तेः लोपः।",
        components: ["गुरु", "दक्षिणा"],
    },
    CompoundRow {
        compound: "नीलकमलम्",
        category: SamasaCategory::of(SamasaKind::Karmadharaya),
        vigraha: "नीलं च तत् कमलं च",
        explanation: "नीलं कमलम् इति अर्थः। विशेषणविशेष्ययोः समासः।",
        components: ["नील", "कमल"],
    },
    CompoundRow {
        compound: "त्रिलोकी",
        category: SamasaCategory::of(SamasaKind::Dvigu),
        vigraha: "त्रयाणां लोकानां समाहारः",
        explanation: "त्रयः लोकाः इति अर्थः। संख्यापूर्वपदकः समासः।",
        components: ["त्रि", "लोक"],
    },
    CompoundRow {
        compound: "रामकृष्णौ",
        category: SamasaCategory::of(SamasaKind::Dvandva),
        vigraha: "रामः च कृष्णः च",
        explanation: "रामः च कृष्णः च इति अर्थः। द्वयोः समानाधिकरणयोः समासः।",
        components: ["राम", "कृष्ण"],
    },
    CompoundRow {
        compound: "चक्रपाणिः",
        category: SamasaCategory::of(SamasaKind::Bahuvrihi),
        vigraha: "चक्रं पाणौ यस्य सः",
        explanation: "चक्रं पाणौ यस्य सः इति अर्थः। अन्यपदार्थप्रधानः समासः।",
        components: ["चक्र", "पाणि"],
    },
    CompoundRow {
        compound: "यथाशक्ति",
        category: SamasaCategory::of(SamasaKind::Avyayibhava),
        vigraha: "शक्तिं यथा",
        explanation: "शक्तिं यथा इति अर्थः। अव्ययपूर्वपदकः समासः।",
        components: ["यथा", "शक्ति"],
    },
];

static COMPOUNDS: LazyLock<HashMap<&'static str, SamasaAnalysis>> = LazyLock::new(|| {
    ROWS.iter()
        .map(|row| {
            let analysis = SamasaAnalysis {
                compound: row.compound.to_string(),
                category: row.category,
                vigraha: row.vigraha.to_string(),
                explanation: row.explanation.to_string(),
                components: row.components.iter().map(|c| c.to_string()).collect(),
            };
            (row.compound, analysis)
        })
        .collect()
});

/// Exact lookup of a compound surface form.
pub fn lookup_compound(compound: &str) -> Option<&'static SamasaAnalysis> {
    COMPOUNDS.get(compound)
}

pub fn compound_count() -> usize {
    COMPOUNDS.len()
}

/// Compounds of the given category, in table order.
pub fn samasa_examples(kind: SamasaKind) -> Vec<&'static str> {
    ROWS.iter()
        .filter(|row| row.category.kind == kind)
        .map(|row| row.compound)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let analysis = lookup_compound("धर्मक्षेत्रे").unwrap();
        assert_eq!(analysis.vigraha, "धर्मस्य क्षेत्रम्");
        assert_eq!(analysis.category.to_string(), "षष्ठी-तत्पुरुषः");
        assert_eq!(analysis.components, vec!["धर्म", "क्षेत्र"]);
    }

    #[test]
    fn test_every_kind_has_an_example() {
        for kind in SamasaKind::ALL {
            assert!(!samasa_examples(kind).is_empty(), "no example for {:?}", kind);
        }
        assert_eq!(
            samasa_examples(SamasaKind::Tatpurusha),
            vec!["धर्मक्षेत्रे", "कुरुक्षेत्रे", "राजपुत्रः", "गङ्गाजलम्", "भगवद्गीता", "गुरुदक्षिणा"]
        );
    }

    #[test]
    fn test_table_keys_are_unique() {
        assert_eq!(compound_count(), ROWS.len());
    }
}
