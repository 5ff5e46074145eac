use hecs::{Entity, World};
use crate::components::{DependencyRole, Morphology, Syntax, TokenData};
use sloka_protocol::{MorphFlags, TokenId};

#[derive(Debug, Clone)]
pub struct AgreementError {
    pub position: TokenId,
    pub source: String,
    pub target: String,
    pub details: String,
}

impl AgreementError {
    /// Bilingual note for the grammatical notes list.
    pub fn note(&self) -> String {
        format!("अन्वयदोषः {} → {} ({})", self.source, self.target, self.details)
    }
}

/// Reported in sentence order.
pub fn check_agreement(world: &World) -> Vec<AgreementError> {
    let mut errors = Vec::new();

    // 1. Subject-Verb Agreement
    errors.extend(check_role(world, DependencyRole::Subject, &[MorphFlags::NUMBERS, MorphFlags::PERSONS]));

    // 2. Predicate-Subject Agreement
    errors.extend(check_role(world, DependencyRole::Predicate, &[MorphFlags::NUMBERS]));

    errors.sort_by_key(|e| e.position);
    errors
}

fn check_role(world: &World, role: DependencyRole, groups: &[MorphFlags]) -> Vec<AgreementError> {
    let mut errors = Vec::new();

    for (_id, (morph, syntax, token)) in world.query::<(&Morphology, &Syntax, &TokenData)>().iter() {
        if syntax.role != role {
            continue;
        }

        // Untagged heads carry no Morphology; nothing to compare against.
        let Ok(head_morph) = world.get::<&Morphology>(syntax.head) else {
            continue;
        };

        for &group in groups {
            let own = morph.flags.intersection(group);
            let head = head_morph.flags.intersection(group);

            // Nouns carry no person; skip features either side leaves unspecified.
            if !own.is_empty() && !head.is_empty() && own != head {
                errors.push(AgreementError {
                    position: token.id,
                    source: token.text.clone(),
                    target: head_text(world, syntax.head),
                    details: format!(
                        "{} mismatch: {} vs {}",
                        group_name(group),
                        own.label(group).unwrap_or_default(),
                        head.label(group).unwrap_or_default(),
                    ),
                });
            }
        }
    }
    errors
}

fn head_text(world: &World, head: Entity) -> String {
    world
        .get::<&TokenData>(head)
        .map(|t| t.text.clone())
        .unwrap_or_else(|_| "?".to_string())
}

fn group_name(group: MorphFlags) -> &'static str {
    if group == MorphFlags::NUMBERS {
        "Number"
    } else if group == MorphFlags::PERSONS {
        "Person"
    } else if group == MorphFlags::GENDERS {
        "Gender"
    } else {
        "Feature"
    }
}
