use rkyv::{Archive, Deserialize, Serialize};
use crate::morphology::{MorphFlags, PartOfSpeech};
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// One headword of the dictionary. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[archive(check_bytes)]
pub struct DictionaryEntry {
    pub word: String,
    pub meaning: String,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub etymology: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub grammatical_info: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    pub synonyms: Vec<String>,
}

/// Serializable dictionary document, the input and output of the lexicon compiler.
#[derive(Debug, Clone, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct Dictionary {
    pub version: u32,
    pub entries: Vec<DictionaryEntry>,
}

/// Morphological tag of a single token.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeSerialize), serde(into = "GrammaticalRecord"))]
pub struct GrammaticalInfo {
    pub word: String,
    pub lemma: String,
    pub pos: PartOfSpeech,
    pub flags: MorphFlags,
    pub root: Option<String>,
    pub suffix: Option<String>,
    /// Function of an indeclinable, reported in place of its (absent) case.
    pub particle: Option<String>,
}

impl GrammaticalInfo {
    pub fn new(word: impl Into<String>, lemma: impl Into<String>, pos: PartOfSpeech, flags: MorphFlags) -> Self {
        Self {
            word: word.into(),
            lemma: lemma.into(),
            pos,
            flags,
            root: None,
            suffix: None,
            particle: None,
        }
    }

    pub fn with_root(mut self, root: impl Into<String>) -> Self {
        self.root = Some(root.into());
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    pub fn with_particle(mut self, particle: impl Into<String>) -> Self {
        self.particle = Some(particle.into());
        self
    }

    pub fn is_verb(&self) -> bool {
        self.pos == PartOfSpeech::Verb
    }

    pub fn is_indeclinable(&self) -> bool {
        self.pos == PartOfSpeech::Indeclinable
    }

    /// Unambiguously nominative: the case set is exactly {प्रथमा}.
    pub fn is_nominative(&self) -> bool {
        self.flags.intersection(MorphFlags::CASES) == MorphFlags::NOMINATIVE
    }

    /// Any reading of the token admits the accusative.
    pub fn is_accusative_marked(&self) -> bool {
        self.flags.contains(MorphFlags::ACCUSATIVE)
    }
}

/// Wire shape of [`GrammaticalInfo`]: one optional label per feature.
#[cfg(feature = "serde")]
#[derive(SerdeSerialize)]
#[serde(rename_all = "camelCase")]
pub struct GrammaticalRecord {
    word: String,
    lemma: String,
    part_of_speech: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    case: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    person: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tense: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    mood: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    voice: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    root: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    suffix: Option<String>,
}

#[cfg(feature = "serde")]
impl From<GrammaticalInfo> for GrammaticalRecord {
    fn from(info: GrammaticalInfo) -> Self {
        let flags = info.flags;
        Self {
            word: info.word,
            lemma: info.lemma,
            part_of_speech: info.pos.label(),
            case: flags.case_label().or(info.particle),
            number: flags.number_label(),
            gender: flags.gender_label(),
            person: flags.person_label(),
            tense: flags.tense_label(),
            mood: flags.mood_label(),
            voice: flags.voice_label(),
            root: info.root,
            suffix: info.suffix,
        }
    }
}

/// The six traditional samāsa categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub enum SamasaKind {
    Tatpurusha,
    Karmadharaya,
    Dvigu,
    Dvandva,
    Bahuvrihi,
    Avyayibhava,
}

impl SamasaKind {
    pub const ALL: [SamasaKind; 6] = [
        SamasaKind::Tatpurusha,
        SamasaKind::Karmadharaya,
        SamasaKind::Dvigu,
        SamasaKind::Dvandva,
        SamasaKind::Bahuvrihi,
        SamasaKind::Avyayibhava,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SamasaKind::Tatpurusha => "तत्पुरुषः",
            SamasaKind::Karmadharaya => "कर्मधारयः",
            SamasaKind::Dvigu => "द्विगुः",
            SamasaKind::Dvandva => "द्वन्द्वः",
            SamasaKind::Bahuvrihi => "बहुव्रीहिः",
            SamasaKind::Avyayibhava => "अव्ययीभावः",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            SamasaKind::Tatpurusha => "पूर्वपदं विशेषणम्, उत्तरपदं विशेष्यम्",
            SamasaKind::Karmadharaya => "विशेषणविशेष्ययोः समासः",
            SamasaKind::Dvigu => "संख्यापूर्वपदकः समासः",
            SamasaKind::Dvandva => "समानाधिकरणयोः पदयोः समासः",
            SamasaKind::Bahuvrihi => "अन्यपदार्थप्रधानः समासः",
            SamasaKind::Avyayibhava => "अव्ययपूर्वपदकः समासः",
        }
    }

    /// Canonical textbook example and its vigraha.
    pub fn example(self) -> (&'static str, &'static str) {
        match self {
            SamasaKind::Tatpurusha => ("राजपुत्रः", "राज्ञः पुत्रः"),
            SamasaKind::Karmadharaya => ("नीलकमलम्", "नीलं च तत् कमलं च"),
            SamasaKind::Dvigu => ("त्रिलोकी", "त्रयाणां लोकानां समाहारः"),
            SamasaKind::Dvandva => ("रामकृष्णौ", "रामः च कृष्णः च"),
            SamasaKind::Bahuvrihi => ("चक्रपाणिः", "चक्रं पाणौ यस्य सः (विष्णुः)"),
            SamasaKind::Avyayibhava => ("यथाशक्ति", "शक्तिं यथा"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown samāsa category: {0}")]
pub struct UnknownSamasaKind(pub String);

impl FromStr for SamasaKind {
    type Err = UnknownSamasaKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        SamasaKind::ALL
            .into_iter()
            .find(|kind| {
                let latin = alloc::format!("{:?}", kind).to_ascii_lowercase();
                latin == lowered || kind.label() == s.trim()
            })
            .ok_or_else(|| UnknownSamasaKind(s.into()))
    }
}

/// Category of an analysed compound.
///
/// `relation` carries the case of the elided relation for tatpuruṣa
/// compounds (षष्ठी for राजपुत्रः); `probable` marks categories guessed from
/// the head stem rather than looked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamasaCategory {
    pub kind: SamasaKind,
    pub relation: Option<MorphFlags>,
    pub probable: bool,
}

impl SamasaCategory {
    pub const fn of(kind: SamasaKind) -> Self {
        Self { kind, relation: None, probable: false }
    }

    pub const fn tatpurusha(relation: MorphFlags) -> Self {
        Self { kind: SamasaKind::Tatpurusha, relation: Some(relation), probable: false }
    }

    pub const fn probable(kind: SamasaKind) -> Self {
        Self { kind, relation: None, probable: true }
    }
}

impl fmt::Display for SamasaCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(case) = self.relation.and_then(MorphFlags::sanskrit_name) {
            write!(f, "{}-", case)?;
        }
        f.write_str(self.kind.label())?;
        if self.probable {
            f.write_str(" (संभावितः)")?;
        }
        Ok(())
    }
}

/// Analytic breakdown of one compound surface form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SamasaAnalysis {
    pub compound: String,
    pub category: SamasaCategory,
    pub vigraha: String,
    pub explanation: String,
    pub components: Vec<String>,
}

impl SamasaAnalysis {
    /// `"<vigraha> (<category>)"`, the form reported to callers.
    pub fn paraphrase(&self) -> String {
        alloc::format!("{} ({})", self.vigraha, self.category)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructureLabel {
    SubjectObjectVerb,
    SubjectVerb,
    SubjectPredicate,
    Apposition,
    Unknown,
}

impl StructureLabel {
    pub fn label(self) -> &'static str {
        match self {
            StructureLabel::SubjectObjectVerb => "कर्तृ-कर्म-क्रिया (Subject-Object-Verb)",
            StructureLabel::SubjectVerb => "कर्तृ-क्रिया (Subject-Verb)",
            StructureLabel::SubjectPredicate => "कर्तृ-विधेय (Subject-Predicate)",
            StructureLabel::Apposition => "समानाधिकरण (Apposition)",
            StructureLabel::Unknown => "अज्ञात (Unknown)",
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for StructureLabel {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeSerialize))]
pub struct SentenceStructure {
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub subject: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub object: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub verb: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub predicate: Option<String>,
    pub modifiers: Vec<String>,
    pub structure: StructureLabel,
}

/// Per-word gloss.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeSerialize))]
pub struct Padartha {
    pub word: String,
    pub meaning: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct GrammaticalAnalysis {
    pub word_analysis: Vec<Option<GrammaticalInfo>>,
    pub sentence_structure: SentenceStructure,
    pub grammatical_notes: Vec<String>,
}

/// Everything the analyzer reports for one sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AnalysisResult {
    pub sandhi_vigraha: Vec<String>,
    pub samasa_vigraha: String,
    pub padartha: Vec<Padartha>,
    pub vakyartha: String,
    pub grammatical_analysis: GrammaticalAnalysis,
}
