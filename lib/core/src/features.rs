//! Composite text used as the vectorizer's document for each skill

use crate::catalog::SkillRecord;

/// Join the fields that describe a skill into one searchable blob:
/// skill, related skills, explanation and industry focus, space separated.
#[must_use]
pub fn compose(record: &SkillRecord) -> String {
    [
        record.skill.as_str(),
        record.related_skills.as_str(),
        record.explanation.as_str(),
        record.industry_focus.as_str(),
    ]
    .join(" ")
}
