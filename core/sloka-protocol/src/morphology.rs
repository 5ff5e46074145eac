use rkyv::{Archive, Deserialize, Serialize};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use alloc::string::String;
use alloc::vec::Vec;
use bitflags::bitflags;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum PartOfSpeech {
    Noun = 0,
    Verb = 1,
    Adjective = 2,
    /// Substantive that also works attributively (सत्यम्, शिवम्).
    NounOrAdjective = 3,
    Pronoun = 4,
    Indeclinable = 5,
}

impl PartOfSpeech {
    pub fn label(self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "संज्ञा (Noun)",
            PartOfSpeech::Verb => "क्रिया (Verb)",
            PartOfSpeech::Adjective => "विशेषण (Adjective)",
            PartOfSpeech::NounOrAdjective => "संज्ञा/विशेषण (Noun/Adjective)",
            PartOfSpeech::Pronoun => "सर्वनाम (Pronoun)",
            PartOfSpeech::Indeclinable => "अव्यय (Indeclinable)",
        }
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    #[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
    pub struct MorphFlags: u32 {
        // Vibhakti (Bits 0-7)
        const NOMINATIVE = 1 << 0;
        const ACCUSATIVE = 1 << 1;
        const INSTRUMENTAL = 1 << 2;
        const DATIVE = 1 << 3;
        const ABLATIVE = 1 << 4;
        const GENITIVE = 1 << 5;
        const LOCATIVE = 1 << 6;
        const VOCATIVE = 1 << 7;

        // Linga (Bits 8-10)
        const MASCULINE = 1 << 8;
        const FEMININE = 1 << 9;
        const NEUTER = 1 << 10;

        // Vacana (Bits 11-13)
        const SINGULAR = 1 << 11;
        const DUAL = 1 << 12;
        const PLURAL = 1 << 13;

        // Purusha (Bits 14-16). Prathama is the grammarians' "first", i.e. 3rd.
        const THIRD_PERSON = 1 << 14;
        const SECOND_PERSON = 1 << 15;
        const FIRST_PERSON = 1 << 16;

        // Pada (Bits 17-18)
        const ACTIVE = 1 << 17;
        const MIDDLE = 1 << 18;

        // Kala (Bits 19-21)
        const PRESENT = 1 << 19;
        const PAST = 1 << 20;
        const FUTURE = 1 << 21;

        // Lakara mood (Bits 22-24)
        const INDICATIVE = 1 << 22;
        const IMPERATIVE = 1 << 23;
        const OPTATIVE = 1 << 24;
    }
}

impl MorphFlags {
    pub const CASES: Self = Self::from_bits_retain(0x0000_00FF);
    pub const GENDERS: Self = Self::from_bits_retain(0x0000_0700);
    pub const NUMBERS: Self = Self::from_bits_retain(0x0000_3800);
    pub const PERSONS: Self = Self::from_bits_retain(0x0001_C000);
    pub const VOICES: Self = Self::from_bits_retain(0x0006_0000);
    pub const TENSES: Self = Self::from_bits_retain(0x0038_0000);
    pub const MOODS: Self = Self::from_bits_retain(0x01C0_0000);

    /// Bilingual label for the features of `group` present in `self`.
    ///
    /// A single feature renders as `"प्रथमा (Nominative)"`; an ambiguous set
    /// renders with abbreviations, e.g. `"प्रथमा/द्वितीया (Nom/Acc)"`.
    pub fn label(self, group: MorphFlags) -> Option<String> {
        let selected: Vec<&FeatureLabel> = FEATURE_LABELS
            .iter()
            .filter(|l| group.contains(l.flag) && self.contains(l.flag))
            .collect();

        match selected.as_slice() {
            [] => None,
            [only] => Some(format!("{} ({})", only.sanskrit, only.english)),
            many => {
                let sanskrit: Vec<&str> = many.iter().map(|l| l.sanskrit).collect();
                let abbrev: Vec<&str> = many.iter().map(|l| l.abbrev).collect();
                Some(format!("{} ({})", sanskrit.join("/"), abbrev.join("/")))
            }
        }
    }

    /// Sanskrit name of a single feature (`GENITIVE` -> `"षष्ठी"`).
    pub fn sanskrit_name(self) -> Option<&'static str> {
        FEATURE_LABELS
            .iter()
            .find(|l| l.flag == self)
            .map(|l| l.sanskrit)
    }

    pub fn case_label(self) -> Option<String> {
        self.label(Self::CASES)
    }

    pub fn gender_label(self) -> Option<String> {
        self.label(Self::GENDERS)
    }

    pub fn number_label(self) -> Option<String> {
        self.label(Self::NUMBERS)
    }

    pub fn person_label(self) -> Option<String> {
        self.label(Self::PERSONS)
    }

    pub fn voice_label(self) -> Option<String> {
        self.label(Self::VOICES)
    }

    pub fn tense_label(self) -> Option<String> {
        self.label(Self::TENSES)
    }

    pub fn mood_label(self) -> Option<String> {
        self.label(Self::MOODS)
    }
}

struct FeatureLabel {
    flag: MorphFlags,
    sanskrit: &'static str,
    english: &'static str,
    abbrev: &'static str,
}

const fn feature(
    flag: MorphFlags,
    sanskrit: &'static str,
    english: &'static str,
    abbrev: &'static str,
) -> FeatureLabel {
    FeatureLabel { flag, sanskrit, english, abbrev }
}

const FEATURE_LABELS: &[FeatureLabel] = &[
    feature(MorphFlags::NOMINATIVE, "प्रथमा", "Nominative", "Nom"),
    feature(MorphFlags::ACCUSATIVE, "द्वितीया", "Accusative", "Acc"),
    feature(MorphFlags::INSTRUMENTAL, "तृतीया", "Instrumental", "Ins"),
    feature(MorphFlags::DATIVE, "चतुर्थी", "Dative", "Dat"),
    feature(MorphFlags::ABLATIVE, "पञ्चमी", "Ablative", "Abl"),
    feature(MorphFlags::GENITIVE, "षष्ठी", "Genitive", "Gen"),
    feature(MorphFlags::LOCATIVE, "सप्तमी", "Locative", "Loc"),
    feature(MorphFlags::VOCATIVE, "सम्बोधन", "Vocative", "Voc"),
    feature(MorphFlags::MASCULINE, "पुंल्लिङ्ग", "Masculine", "Masc"),
    feature(MorphFlags::FEMININE, "स्त्रीलिङ्ग", "Feminine", "Fem"),
    feature(MorphFlags::NEUTER, "नपुंसकलिङ्ग", "Neuter", "Neut"),
    feature(MorphFlags::SINGULAR, "एकवचन", "Singular", "Sg"),
    feature(MorphFlags::DUAL, "द्विवचन", "Dual", "Du"),
    feature(MorphFlags::PLURAL, "बहुवचन", "Plural", "Pl"),
    feature(MorphFlags::THIRD_PERSON, "प्रथमपुरुष", "3rd Person", "3rd"),
    feature(MorphFlags::SECOND_PERSON, "मध्यमपुरुष", "2nd Person", "2nd"),
    feature(MorphFlags::FIRST_PERSON, "उत्तमपुरुष", "1st Person", "1st"),
    feature(MorphFlags::ACTIVE, "परस्मैपद", "Active", "Act"),
    feature(MorphFlags::MIDDLE, "आत्मनेपद", "Middle", "Mid"),
    feature(MorphFlags::PRESENT, "वर्तमान", "Present", "Pres"),
    feature(MorphFlags::PAST, "भूत", "Past", "Past"),
    feature(MorphFlags::FUTURE, "भविष्यत्", "Future", "Fut"),
    feature(MorphFlags::INDICATIVE, "लट्लकार", "Indicative", "Ind"),
    feature(MorphFlags::IMPERATIVE, "लोट्लकार", "Imperative", "Imp"),
    feature(MorphFlags::OPTATIVE, "विधिलिङ्", "Optative", "Opt"),
];
