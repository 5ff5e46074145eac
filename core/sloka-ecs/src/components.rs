use hecs::Entity;
use sloka_protocol::{MorphFlags, PartOfSpeech, TokenId};

/// Basic data about the token (Source of Truth)
#[derive(Debug, Clone)]
pub struct TokenData {
    pub id: TokenId,
    pub text: String,
}

/// Grammatical state of a tagged token.
/// Untagged tokens are spawned without this component.
#[derive(Debug, Clone, Copy)]
pub struct Morphology {
    pub pos: PartOfSpeech,
    pub flags: MorphFlags,
}

impl Morphology {
    pub fn new(pos: PartOfSpeech, flags: MorphFlags) -> Self {
        Self { pos, flags }
    }
}

/// The role a token plays in its clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencyRole {
    Subject,
    Object,
    Predicate,
    Modifier,
}

/// Edge to the token this one depends on (the verb, or the subject for a predicate).
#[derive(Debug, Clone, Copy)]
pub struct Syntax {
    pub head: Entity,
    pub role: DependencyRole,
}
