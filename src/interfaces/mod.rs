use crate::{phonevalidator::StructuralRule, regexp_cache::InvalidRegexError};

/// Internal structural matching API used to isolate the underlying
/// implementation of the matcher and allow different implementations to be
/// swapped in easily.
pub(crate) trait MatcherApi: Send + Sync {
    /// Returns whether the given national number (a string containing only decimal
    /// digits) matches the pattern of the given structural rule as a whole.
    /// A rule with an empty pattern accepts every number.
    fn match_national_number(&self, number: &str, rule: &StructuralRule) -> bool;

    /// Prepares the rule's pattern ahead of the first match, reporting a
    /// pattern that can never match anything.
    fn prepare(&self, rule: &StructuralRule) -> Result<(), InvalidRegexError>;
}
