//! Compound analyzer.

use sloka_lexicon::lookup_compound;
use sloka_parser::parser::clean;
use sloka_protocol::{SamasaAnalysis, SamasaCategory, SamasaKind};
use tracing::debug;

/// Reported when no compound is recognised.
pub const NO_COMPOUND: &str = "नास्ति समासः";

/// Substrings of the cleaned text that name a compound table entry outright.
const RAW_OVERRIDES: &[(&str, &str)] = &[
    ("गङ्गाजलं", "गङ्गाजलम्"),
    ("राजपुत्र", "राजपुत्रः"),
    ("धर्मक्षेत्र", "धर्मक्षेत्रे"),
];

/// Second members that betray a tatpuruṣa, with the case endings that may
/// follow them and the form used in the generated vigraha.
struct HeadStem {
    stem: &'static str,
    endings: &'static [&'static str],
    vigraha_form: &'static str,
}

const HEAD_STEMS: [HeadStem; 2] = [
    HeadStem { stem: "क्षेत्र", endings: &["े", "म्"], vigraha_form: "क्षेत्रम्" },
    HeadStem { stem: "पुत्र", endings: &["ः", "म्"], vigraha_form: "पुत्रः" },
];

/// Table lookup, then the head-stem guess.
pub fn analyze_compound(word: &str) -> Option<SamasaAnalysis> {
    if let Some(analysis) = lookup_compound(word) {
        debug!(word, "compound table hit");
        return Some(analysis.clone());
    }
    identify_by_head(word)
}

/// Probable genitive tatpuruṣa for `<modifier><head><ending>` forms.
pub fn identify_by_head(word: &str) -> Option<SamasaAnalysis> {
    HEAD_STEMS.iter().find_map(|head| {
        let modifier = head
            .endings
            .iter()
            .find_map(|ending| word.strip_suffix(ending)?.strip_suffix(head.stem))?;
        if modifier.is_empty() {
            return None;
        }

        debug!(word, head = head.stem, "compound head guess");
        let vigraha = format!("{}स्य {}", modifier, head.vigraha_form);
        Some(SamasaAnalysis {
            compound: word.to_string(),
            category: SamasaCategory::probable(SamasaKind::Tatpurusha),
            explanation: format!("{} इति संभावितः अर्थः।", vigraha),
            vigraha,
            components: vec![modifier.to_string(), head.stem.to_string()],
        })
    })
}

/// Compound paraphrase for a sentence: raw-text overrides, then the joined
/// tokens, then [`NO_COMPOUND`].
pub fn samasa_vigraha<S: AsRef<str>>(tokens: &[S], text: &str) -> String {
    let cleaned = clean(text);
    let overridden = RAW_OVERRIDES
        .iter()
        .filter(|(needle, _)| cleaned.contains(needle))
        .find_map(|(_, compound)| lookup_compound(compound));
    if let Some(analysis) = overridden {
        return analysis.paraphrase();
    }

    let joined: String = tokens.iter().map(AsRef::as_ref).collect();
    analyze_compound(&joined)
        .map(|analysis| analysis.paraphrase())
        .unwrap_or_else(|| NO_COMPOUND.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_beats_tokens() {
        let tokens = ["धर्म", "क्षेत्रे", "कुरु", "क्षेत्रे"];
        assert_eq!(samasa_vigraha(&tokens, "धर्मक्षेत्रे कुरुक्षेत्रे"), "धर्मस्य क्षेत्रम् (षष्ठी-तत्पुरुषः)");
        assert_eq!(samasa_vigraha(&["गङ्गा", "जलम्", "पिबामि"], "गङ्गाजलं पिबामि"), "गङ्गायाः जलम् (षष्ठी-तत्पुरुषः)");
    }

    #[test]
    fn test_joined_tokens_lookup() {
        assert_eq!(samasa_vigraha(&["गुरु", "दक्षिणा"], "गुरु दक्षिणा"), "गुरवे दक्षिणा (चतुर्थी-तत्पुरुषः)");
    }

    #[test]
    fn test_head_guess() {
        let analysis = analyze_compound("देवपुत्रः").unwrap();
        assert_eq!(analysis.vigraha, "देवस्य पुत्रः");
        assert_eq!(analysis.category.to_string(), "तत्पुरुषः (संभावितः)");
        assert_eq!(analysis.components, vec!["देव", "पुत्र"]);

        let analysis = analyze_compound("धर्मक्षेत्रम्").unwrap();
        assert_eq!(analysis.vigraha, "धर्मस्य क्षेत्रम्");
    }

    #[test]
    fn test_bare_head_is_no_compound() {
        assert_eq!(identify_by_head("पुत्रः"), None);
        assert_eq!(samasa_vigraha(&["रामः", "गच्छति"], "रामः गच्छति"), NO_COMPOUND);
    }
}
