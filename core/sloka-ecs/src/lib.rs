pub mod components;
pub mod systems;

use hecs::{Entity, World};
use components::{DependencyRole, Morphology, Syntax, TokenData};
use sloka_protocol::{GrammaticalInfo, TokenId};
use systems::agreement::{check_agreement, AgreementError};

/// One sentence's tokens as ECS entities.
pub struct SlokaWorld {
    world: World,
}

impl Default for SlokaWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl SlokaWorld {
    pub fn new() -> Self {
        Self { world: World::new() }
    }

    /// Add a word to the sentence. Untagged words carry no [`Morphology`].
    pub fn add_token(&mut self, id: TokenId, text: String, info: Option<&GrammaticalInfo>) -> Entity {
        let data = TokenData { id, text };
        match info {
            Some(info) => self.world.spawn((data, Morphology::new(info.pos, info.flags))),
            None => self.world.spawn((data,)),
        }
    }

    pub fn set_dependency(&mut self, child: Entity, head: Entity, role: DependencyRole) {
        let _ = self.world.insert_one(child, Syntax { head, role });
    }

    /// Run all validation systems
    pub fn validate(&self) -> Vec<AgreementError> {
        check_agreement(&self.world)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sloka_protocol::{MorphFlags, PartOfSpeech};

    fn verb(word: &str, flags: MorphFlags) -> GrammaticalInfo {
        GrammaticalInfo::new(word, word, PartOfSpeech::Verb, flags)
    }

    #[test]
    fn test_person_mismatch() {
        // "अहम् पठति": 1st person pronoun with a 3rd person verb.
        let mut sw = SlokaWorld::new();

        let subject = GrammaticalInfo::new(
            "अहम्",
            "अस्मद्",
            PartOfSpeech::Pronoun,
            MorphFlags::NOMINATIVE | MorphFlags::SINGULAR | MorphFlags::FIRST_PERSON,
        );
        let predicate = verb("पठति", MorphFlags::SINGULAR | MorphFlags::THIRD_PERSON);

        let s = sw.add_token(TokenId::new(0), "अहम्".to_string(), Some(&subject));
        let v = sw.add_token(TokenId::new(1), "पठति".to_string(), Some(&predicate));
        sw.set_dependency(s, v, DependencyRole::Subject);

        let errors = sw.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].source, "अहम्");
        assert_eq!(errors[0].target, "पठति");
        assert!(errors[0].details.contains("Person mismatch"));
    }

    #[test]
    fn test_noun_subject_without_person_is_not_checked() {
        let mut sw = SlokaWorld::new();

        let subject = GrammaticalInfo::new(
            "रामः",
            "राम",
            PartOfSpeech::Noun,
            MorphFlags::NOMINATIVE | MorphFlags::SINGULAR | MorphFlags::MASCULINE,
        );
        let predicate = verb("पिबामि", MorphFlags::SINGULAR | MorphFlags::FIRST_PERSON);

        let s = sw.add_token(TokenId::new(0), "रामः".to_string(), Some(&subject));
        let v = sw.add_token(TokenId::new(1), "पिबामि".to_string(), Some(&predicate));
        sw.set_dependency(s, v, DependencyRole::Subject);

        assert!(sw.validate().is_empty());
    }
}
