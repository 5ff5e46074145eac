use sloka_protocol::{GrammaticalInfo, SentenceStructure, StructureLabel};

#[derive(Debug, Clone)]
pub struct MorphToken<'a> {
    pub text: &'a str,
    pub info: Option<&'a GrammaticalInfo>,
}

impl<'a> MorphToken<'a> {
    pub fn new(text: &'a str, info: Option<&'a GrammaticalInfo>) -> Self {
        Self { text, info }
    }

    fn is_verb(&self) -> bool {
        self.info.is_some_and(GrammaticalInfo::is_verb)
    }

    fn is_nominative(&self) -> bool {
        self.info.is_some_and(GrammaticalInfo::is_nominative)
    }

    fn is_accusative_marked(&self) -> bool {
        self.info.is_some_and(GrammaticalInfo::is_accusative_marked)
    }

    fn is_indeclinable(&self) -> bool {
        self.info.is_some_and(GrammaticalInfo::is_indeclinable)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxRole {
    /// The main verb
    Root,
    Subject,
    Object,
    /// Second nominative, predicated of the subject
    Predicate,
    /// Indeclinable attached to the clause
    Modifier,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    /// `None` when the governing word is missing (no verb, for instance).
    pub head_index: Option<usize>,
    pub dependent_index: usize,
    pub role: SyntaxRole,
}

/// Single greedy pass over the tagged tokens.
///
/// Roles are tested in order per token: verb, nominative, accusative,
/// indeclinable. The first verb is the root; the first nominative is the
/// subject and later ones overwrite the predicate; the last
/// accusative-marked token is the object. Untagged tokens get no role.
/// Output is ordered by token position.
pub fn assign_roles(tokens: &[MorphToken]) -> Vec<Dependency> {
    let mut root = None;
    let mut subject = None;
    let mut predicate = None;
    let mut object = None;
    let mut modifiers = Vec::new();

    for (i, token) in tokens.iter().enumerate() {
        if token.is_verb() {
            root = root.or(Some(i));
        } else if token.is_nominative() {
            if subject.is_none() {
                subject = Some(i);
            } else {
                predicate = Some(i);
            }
        } else if token.is_accusative_marked() {
            object = Some(i);
        } else if token.is_indeclinable() {
            modifiers.push(i);
        }
    }

    let mut deps = Vec::new();
    if let Some(i) = root {
        deps.push(Dependency { head_index: None, dependent_index: i, role: SyntaxRole::Root });
    }
    if let Some(i) = subject {
        deps.push(Dependency { head_index: root, dependent_index: i, role: SyntaxRole::Subject });
    }
    if let Some(i) = predicate {
        deps.push(Dependency { head_index: subject, dependent_index: i, role: SyntaxRole::Predicate });
    }
    if let Some(i) = object {
        deps.push(Dependency { head_index: root, dependent_index: i, role: SyntaxRole::Object });
    }
    deps.extend(
        modifiers
            .into_iter()
            .map(|i| Dependency { head_index: root, dependent_index: i, role: SyntaxRole::Modifier }),
    );

    deps.sort_by_key(|d| d.dependent_index);
    deps
}

/// Structure record for the sentence.
pub fn infer_structure(tokens: &[MorphToken]) -> SentenceStructure {
    structure_from(tokens, &assign_roles(tokens))
}

pub fn structure_from(tokens: &[MorphToken], deps: &[Dependency]) -> SentenceStructure {
    let filled = |role: SyntaxRole| {
        deps.iter()
            .find(|d| d.role == role)
            .map(|d| tokens[d.dependent_index].text.to_string())
    };

    let subject = filled(SyntaxRole::Subject);
    let object = filled(SyntaxRole::Object);
    let verb = filled(SyntaxRole::Root);
    let predicate = filled(SyntaxRole::Predicate);
    let modifiers = deps
        .iter()
        .filter(|d| d.role == SyntaxRole::Modifier)
        .map(|d| tokens[d.dependent_index].text.to_string())
        .collect();

    let structure = match (&subject, &object, &verb, &predicate) {
        (Some(_), Some(_), Some(_), _) => StructureLabel::SubjectObjectVerb,
        (Some(_), _, Some(_), _) => StructureLabel::SubjectVerb,
        (Some(_), _, _, Some(_)) => StructureLabel::SubjectPredicate,
        _ if tokens.len() >= 2 && tokens.iter().all(MorphToken::is_nominative) => StructureLabel::Apposition,
        _ => StructureLabel::Unknown,
    };

    SentenceStructure { subject, object, verb, predicate, modifiers, structure }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morphology::analyze_word;
    use proptest::prelude::*;

    fn analyse(words: &[&str]) -> SentenceStructure {
        let infos: Vec<Option<GrammaticalInfo>> = words.iter().map(|w| analyze_word(w)).collect();
        let tokens: Vec<MorphToken> = words
            .iter()
            .zip(&infos)
            .map(|(w, info)| MorphToken::new(w, info.as_ref()))
            .collect();
        infer_structure(&tokens)
    }

    #[test]
    fn test_subject_object_verb() {
        let s = analyse(&["रामः", "वनं", "गच्छति"]);
        assert_eq!(s.subject.as_deref(), Some("रामः"));
        assert_eq!(s.object.as_deref(), Some("वनं"));
        assert_eq!(s.verb.as_deref(), Some("गच्छति"));
        assert_eq!(s.structure, StructureLabel::SubjectObjectVerb);
    }

    #[test]
    fn test_subject_verb_with_modifier() {
        let s = analyse(&["रामः", "च", "गच्छति"]);
        assert_eq!(s.structure, StructureLabel::SubjectVerb);
        assert_eq!(s.modifiers, vec!["च"]);
    }

    #[test]
    fn test_second_nominative_is_predicate() {
        let s = analyse(&["विष्णुः", "ब्रह्मा"]);
        assert_eq!(s.subject.as_deref(), Some("विष्णुः"));
        assert_eq!(s.predicate.as_deref(), Some("ब्रह्मा"));
        assert_eq!(s.structure, StructureLabel::SubjectPredicate);
    }

    #[test]
    fn test_first_verb_wins() {
        let s = analyse(&["गुरुः", "आगच्छति", "पठति"]);
        assert_eq!(s.verb.as_deref(), Some("आगच्छति"));
    }

    #[test]
    fn test_last_accusative_is_object() {
        let s = analyse(&["रामम्", "वनम्"]);
        assert_eq!(s.object.as_deref(), Some("वनम्"));
        assert_eq!(s.structure, StructureLabel::Unknown);
    }

    #[test]
    fn test_duplicate_modifiers_kept() {
        let s = analyse(&["च", "रामः", "च"]);
        assert_eq!(s.modifiers, vec!["च", "च"]);
    }

    #[test]
    fn test_untagged_sentence_is_unknown() {
        let s = analyse(&["यदा", "तदा"]);
        assert_eq!(s, SentenceStructure {
            subject: None,
            object: None,
            verb: None,
            predicate: None,
            modifiers: vec![],
            structure: StructureLabel::Unknown,
        });
    }

    #[test]
    fn test_dependency_heads() {
        let words = ["रामः", "वनं", "गच्छति"];
        let infos: Vec<_> = words.iter().map(|w| analyze_word(w)).collect();
        let tokens: Vec<_> = words.iter().zip(&infos).map(|(w, i)| MorphToken::new(w, i.as_ref())).collect();

        let deps = assign_roles(&tokens);
        assert_eq!(deps.len(), 3);
        assert_eq!(deps[0], Dependency { head_index: Some(2), dependent_index: 0, role: SyntaxRole::Subject });
        assert_eq!(deps[1], Dependency { head_index: Some(2), dependent_index: 1, role: SyntaxRole::Object });
        assert_eq!(deps[2], Dependency { head_index: None, dependent_index: 2, role: SyntaxRole::Root });
    }

    proptest! {
        #[test]
        fn test_sov_iff_all_three_roles(picks in prop::collection::vec(0usize..8, 1..6)) {
            const VOCAB: [&str; 8] = ["रामः", "वनम्", "वनं", "गच्छति", "च", "सत्यम्", "यदा", "अहम्"];
            let words: Vec<&str> = picks.iter().map(|&i| VOCAB[i]).collect();
            let s = analyse(&words);

            let all_three = s.subject.is_some() && s.object.is_some() && s.verb.is_some();
            prop_assert_eq!(s.structure == StructureLabel::SubjectObjectVerb, all_three);
        }
    }
}
