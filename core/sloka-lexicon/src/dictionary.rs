//! Built-in headwords.

use sloka_protocol::DictionaryEntry;

struct Headword {
    word: &'static str,
    meaning: &'static str,
    grammar: &'static str,
    etymology: Option<&'static str>,
    synonyms: &'static [&'static str],
}

const fn word(
    word: &'static str,
    meaning: &'static str,
    grammar: &'static str,
    synonyms: &'static [&'static str],
) -> Headword {
    Headword { word, meaning, grammar, etymology: None, synonyms }
}

const fn derived(
    word: &'static str,
    meaning: &'static str,
    grammar: &'static str,
    etymology: &'static str,
    synonyms: &'static [&'static str],
) -> Headword {
    Headword { word, meaning, grammar, etymology: Some(etymology), synonyms }
}

const HEADWORDS: &[Headword] = &[
    // Nouns - Masculine
    word("रामः", "अयोध्यानगरनिवासी इक्ष्वाकुवंशजः प्रसिद्धः पुरुषः", "पुंल्लिङ्गः, प्रथमा एकवचनम्", &["दाशरथिः", "सीतापतिः", "कोसलेन्द्रः"]),
    word("रामम्", "अयोध्यानगरनिवासी इक्ष्वाकुवंशजः प्रसिद्धः पुरुषः", "पुंल्लिङ्गः, द्वितीया एकवचनम्", &["दाशरथिम्", "सीतापतिम्"]),
    word("गुरुः", "आचार्यः, शिक्षकः, भारी", "पुंल्लिङ्गः, प्रथमा एकवचनम्", &["आचार्यः", "उपाध्यायः", "शिक्षकः"]),
    word("पुरुषः", "नरः, मनुष्यः, पुमान्", "पुंल्लिङ्गः, प्रथमा एकवचनम्", &["नरः", "मनुष्यः", "मानवः"]),
    word("बालकः", "शिशुः, कुमारः, बालः", "पुंल्लिङ्गः, प्रथमा एकवचनम्", &["शिशुः", "कुमारः", "बालः"]),
    word("बालकम्", "शिशुम्, कुमारम्, बालम्", "पुंल्लिङ्गः, द्वितीया एकवचनम्", &["शिशुम्", "कुमारम्"]),
    word("छात्रः", "शिष्यः, विद्यार्थी, अध्येता", "पुंल्लिङ्गः, प्रथमा एकवचनम्", &["शिष्यः", "विद्यार्थी", "अध्येता"]),
    word("अश्वः", "घोटकः, हयः, तुरगः", "पुंल्लिङ्गः, प्रथमा एकवचनम्", &["घोटकः", "हयः", "तुरगः"]),
    word("सूर्यः", "आदित्यः, रविः, दिनकरः", "पुंल्लिङ्गः, प्रथमा एकवचनम्", &["आदित्यः", "रविः", "दिनकरः"]),
    word("चन्द्रः", "शशी, सोमः, निशाकरः", "पुंल्लिङ्गः, प्रथमा एकवचनम्", &["शशी", "सोमः", "निशाकरः"]),
    word("पुत्रः", "सुतः, तनयः, आत्मजः", "पुंल्लिङ्गः, प्रथमा एकवचनम्", &["सुतः", "तनयः", "आत्मजः"]),
    word("विष्णुः", "नारायणः, हरिः, जगत्पालकः", "पुंल्लिङ्गः, प्रथमा एकवचनम्", &["नारायणः", "हरिः", "केशवः"]),
    word("ब्रह्मा", "सृष्टिकर्ता, विधाता, चतुर्मुखः", "पुंल्लिङ्गः, प्रथमा एकवचनम्", &["विधाता", "पितामहः", "स्वयम्भूः"]),
    // Nouns - Neuter
    word("वनम्", "अरण्यम्, विपिनम्, काननम्", "नपुंसकलिङ्गः, प्रथमा/द्वितीया एकवचनम्", &["अरण्यम्", "विपिनम्", "काननम्"]),
    word("वनं", "अरण्यम्, विपिनम्, काननम्", "नपुंसकलिङ्गः, द्वितीया एकवचनम्", &["अरण्यम्", "विपिनम्", "काननम्"]),
    word("क्षेत्रम्", "भूमिः, स्थानम्, प्रदेशः", "नपुंसकलिङ्गः, प्रथमा एकवचनम्", &["भूमिः", "स्थानम्", "प्रदेशः"]),
    word("क्षेत्रे", "भूमौ, स्थाने, प्रदेशे", "नपुंसकलिङ्गः, सप्तमी एकवचनम्", &["भूमौ", "स्थाने", "प्रदेशे"]),
    word("पुस्तकम्", "ग्रन्थः, पोथी, लेखः", "नपुंसकलिङ्गः, प्रथमा/द्वितीया एकवचनम्", &["ग्रन्थः", "पोथी", "लेखः"]),
    word("पुस्तकं", "ग्रन्थम्, पोथी, लेखम्", "नपुंसकलिङ्गः, द्वितीया एकवचनम्", &["ग्रन्थम्", "पोथी"]),
    word("फलम्", "फलम्, परिणामः, प्रतिफलम्", "नपुंसकलिङ्गः, प्रथमा/द्वितीया एकवचनम्", &["परिणामः", "प्रतिफलम्"]),
    word("फलं", "फलम्, परिणामम्, प्रतिफलम्", "नपुंसकलिङ्गः, द्वितीया एकवचनम्", &["परिणामम्", "प्रतिफलम्"]),
    word("गुरुम्", "आचार्यम्, शिक्षकम्, उपाध्यायम्", "पुंल्लिङ्गः, द्वितीया एकवचनम्", &["आचार्यम्", "शिक्षकम्", "उपाध्यायम्"]),
    word("जलम्", "उदकम्, नीरम्, वारि", "नपुंसकलिङ्गः, प्रथमा/द्वितीया एकवचनम्", &["उदकम्", "नीरम्", "वारि"]),
    word("जलं", "उदकम्, नीरम्, वारि", "नपुंसकलिङ्गः, द्वितीया एकवचनम्", &["उदकम्", "नीरम्", "वारि"]),
    word("सत्यम्", "ऋतम्, तथ्यम्, यथार्थम्", "नपुंसकलिङ्गः, प्रथमा एकवचनम्", &["ऋतम्", "तथ्यम्"]),
    word("शिवम्", "मङ्गलम्, कल्याणम्, शुभम्", "नपुंसकलिङ्गः, प्रथमा एकवचनम्", &["मङ्गलम्", "कल्याणम्", "शुभम्"]),
    word("सुन्दरम्", "रमणीयम्, मनोहरम्, रुचिरम्", "नपुंसकलिङ्गः, प्रथमा एकवचनम्", &["रमणीयम्", "मनोहरम्"]),
    // Nouns - Feminine
    derived("गीता", "गीयते इति गीता, भगवद्गीता", "स्त्रीलिङ्गः, प्रथमा एकवचनम्", "गै धातुः + क्त प्रत्ययः", &[]),
    word("सीता", "रामपत्नी, जनकदुहिता", "स्त्रीलिङ्गः, प्रथमा एकवचनम्", &["जानकी", "वैदेही", "मिथिलेशकुमारी"]),
    word("गङ्गा", "गङ्गा नदी, पवित्रा नदी", "स्त्रीलिङ्गः, प्रथमा एकवचनम्", &["भागीरथी", "जाह्नवी", "त्रिपथगा"]),
    word("गङ्गायाः", "गङ्गायाः (गङ्गा नद्याः)", "स्त्रीलिङ्गः, षष्ठी एकवचनम्", &["भागीरथ्याः", "जाह्नव्याः"]),
    // Verbs
    word("गच्छति", "गमनं करोति, यात्रां करोति", "गम् धातुः, लट्लकारः, प्रथमपुरुषः, एकवचनम्", &["यात्रां करोति", "प्रस्थानं करोति"]),
    word("आगच्छति", "आगमनं करोति, आयात्रां करोति", "आ + गम् धातुः, लट्लकारः, प्रथमपुरुषः, एकवचनम्", &["आयात्रां करोति", "समागच्छति"]),
    word("पठति", "अध्ययनं करोति, पाठं करोति", "पठ् धातुः, लट्लकारः, प्रथमपुरुषः, एकवचनम्", &["अध्ययनं करोति", "स्वाध्यायं करोति"]),
    word("खादति", "भक्षणं करोति, आहारं गृह्णाति", "खाद् धातुः, लट्लकारः, प्रथमपुरुषः, एकवचनम्", &["भक्षयति", "आहारं करोति"]),
    word("नमति", "प्रणामं करोति, नमस्कारं करोति", "नम् धातुः, लट्लकारः, प्रथमपुरुषः, एकवचनम्", &["प्रणामं करोति", "नमस्कारं करोति"]),
    word("पिबामि", "पानं करोमि, पीयूषं गृह्णामि", "पा धातुः, लट्लकारः, उत्तमपुरुषः, एकवचनम्", &["पानं करोमि", "आचमामि"]),
    // Particles and pronouns
    word("च", "अपि, तथा, समुच्चयार्थे", "अव्ययम्, समुच्चयबोधकम्", &["अपि", "तथा", "एवं च"]),
    word("तत्", "तस्य, तस्मात्, तदा", "सर्वनाम, नपुंसकलिङ्गः", &["तस्य", "तस्मात्"]),
    word("अहम्", "मम्, स्वयम्", "सर्वनाम, उत्तमपुरुषः, प्रथमा एकवचनम्", &["मम्", "स्वयम्"]),
    // Compound members
    derived("धर्म", "न्यायः, कर्तव्यम्, धारणीयगुणः", "पुंल्लिङ्गः, प्रथमा एकवचनम्", "धृ धातुः + मन् प्रत्ययः", &["न्यायः", "कर्तव्यम्", "स्वधर्मः"]),
    word("कुरु", "प्रसिद्धा राजवंशः, कुरुदेशः", "पुंल्लिङ्गः, प्रथमा एकवचनम्", &["कुरुवंशः", "कुरुदेशः"]),
    word("राज", "नृपः, भूपालः (समासे पूर्वपदम्)", "पुंल्लिङ्गः, समासे प्रातिपदिकम्", &["नृपः", "भूपालः"]),
];

pub(crate) fn builtin_entries() -> impl Iterator<Item = DictionaryEntry> {
    HEADWORDS.iter().map(|h| DictionaryEntry {
        word: h.word.to_string(),
        meaning: h.meaning.to_string(),
        etymology: h.etymology.map(str::to_string),
        grammatical_info: Some(h.grammar.to_string()),
        synonyms: h.synonyms.iter().map(|s| s.to_string()).collect(),
    })
}
