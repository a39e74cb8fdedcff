//! Switch evaluation: one pass over an element's attributes, three checks,
//! one conjunction.
//!
//! This is the per-element hot path of `<switch>` selection. Evaluation is
//! stateless and reentrant; the only external state consulted is the
//! process's language preferences, re-read per call at the default entry
//! point so late locale changes are honored.

use crate::{
    matches_system_language, split_list, ConditionalAttribute, FeatureSet, LanguagePreferences,
    IMPLEMENTED_EXTENSIONS, IMPLEMENTED_FEATURES,
};

/// Outcome of evaluating one element's conditional attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SwitchDecision {
    /// Conjunction of all applicable checks; vacuously `true` when none
    /// apply.
    pub permitted: bool,
    /// Whether any of the three recognized attributes was present. `false`
    /// means the element is unconditionally included, which callers must
    /// treat differently from "present and passed".
    pub has_conditionals: bool,
}

/// Returns `true` when every token of `value` is present in `set`.
///
/// A value that yields no tokens is a failed requirement, not a vacuous
/// pass: an attribute that is present but contributes nothing usable keeps
/// the element out. Evaluation short-circuits on the first miss.
///
/// # Example
///
/// ```
/// use svitch::{fulfills_requirement, IMPLEMENTED_EXTENSIONS, IMPLEMENTED_FEATURES};
///
/// let shape = "http://www.w3.org/TR/SVG11/feature#Shape";
/// assert!(fulfills_requirement(shape, &IMPLEMENTED_FEATURES));
/// assert!(!fulfills_requirement("unknown.feature", &IMPLEMENTED_FEATURES));
/// assert!(!fulfills_requirement("", &IMPLEMENTED_FEATURES));
/// assert!(!fulfills_requirement("anything", &IMPLEMENTED_EXTENSIONS));
/// ```
#[must_use]
pub fn fulfills_requirement(value: &str, set: &FeatureSet) -> bool {
    let mut tokens = split_list(value);
    let Some(first) = tokens.next() else {
        return false;
    };
    set.contains(first) && tokens.all(|token| set.contains(token))
}

impl ConditionalAttribute {
    /// Run this attribute's check against a raw value.
    ///
    /// `requiredFeatures` and `requiredExtensions` consult their catalogs;
    /// `systemLanguage` consults the given preferences.
    #[must_use]
    pub fn check(self, value: &str, preferences: &LanguagePreferences) -> bool {
        match self {
            Self::RequiredFeatures => fulfills_requirement(value, &IMPLEMENTED_FEATURES),
            Self::RequiredExtensions => fulfills_requirement(value, &IMPLEMENTED_EXTENSIONS),
            Self::SystemLanguage => matches_system_language(value, preferences),
        }
    }
}

/// Evaluate an element's conditional attributes against the built-in
/// catalogs and the process's current language preferences.
///
/// The environment is consulted on every call; use
/// [`evaluate_switch_conditions_with`] to inject an explicit preference
/// list instead.
pub fn evaluate_switch_conditions<'a, I>(attributes: I) -> SwitchDecision
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    evaluate_switch_conditions_with(attributes, &LanguagePreferences::from_env())
}

/// Evaluate an element's conditional attributes with an explicit language
/// preference list.
///
/// One pass over the bag: each recognized attribute dispatches to its check
/// and overwrites the matching accumulator (so a repeated attribute's last
/// occurrence wins); everything else is ignored. With no recognized
/// attribute present the result is `(permitted: true, has_conditionals:
/// false)`.
///
/// # Example
///
/// ```
/// use svitch::{evaluate_switch_conditions_with, LanguagePreferences};
///
/// let prefs = LanguagePreferences::new(["en-US"]);
/// let attrs = [
///     ("requiredFeatures", "http://www.w3.org/TR/SVG11/feature#Shape"),
///     ("systemLanguage", "en, fr"),
///     ("fill", "blue"),
/// ];
///
/// let decision = evaluate_switch_conditions_with(attrs, &prefs);
/// assert!(decision.permitted);
/// assert!(decision.has_conditionals);
/// ```
pub fn evaluate_switch_conditions_with<'a, I>(
    attributes: I,
    preferences: &LanguagePreferences,
) -> SwitchDecision
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut features_ok = true;
    let mut extensions_ok = true;
    let mut language_ok = true;
    let mut has_conditionals = false;

    for (name, value) in attributes {
        let Some(attribute) = ConditionalAttribute::from_name(name) else {
            continue;
        };
        has_conditionals = true;
        let satisfied = attribute.check(value, preferences);
        match attribute {
            ConditionalAttribute::RequiredFeatures => features_ok = satisfied,
            ConditionalAttribute::RequiredExtensions => extensions_ok = satisfied,
            ConditionalAttribute::SystemLanguage => language_ok = satisfied,
        }
    }

    SwitchDecision {
        permitted: features_ok && extensions_ok && language_ok,
        has_conditionals,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHAPE: &str = "http://www.w3.org/TR/SVG11/feature#Shape";
    const TEXT: &str = "http://www.w3.org/TR/SVG11/feature#BasicText";

    fn english() -> LanguagePreferences {
        LanguagePreferences::new(["en-US"])
    }

    // ========== fulfills_requirement ==========

    #[test]
    fn single_supported_feature_fulfills() {
        assert!(fulfills_requirement(SHAPE, &IMPLEMENTED_FEATURES));
    }

    #[test]
    fn every_token_must_be_supported() {
        let both = format!("{SHAPE} {TEXT}");
        assert!(fulfills_requirement(&both, &IMPLEMENTED_FEATURES));

        let mixed = format!("{SHAPE} unknown.feature");
        assert!(!fulfills_requirement(&mixed, &IMPLEMENTED_FEATURES));

        // Token order is irrelevant.
        let reversed = format!("unknown.feature {SHAPE}");
        assert!(!fulfills_requirement(&reversed, &IMPLEMENTED_FEATURES));
        let swapped = format!("{TEXT} {SHAPE}");
        assert!(fulfills_requirement(&swapped, &IMPLEMENTED_FEATURES));
    }

    #[test]
    fn blank_value_is_a_failed_requirement() {
        assert!(!fulfills_requirement("", &IMPLEMENTED_FEATURES));
        assert!(!fulfills_requirement("  , ", &IMPLEMENTED_FEATURES));
        assert!(!fulfills_requirement("", &IMPLEMENTED_EXTENSIONS));
    }

    #[test]
    fn empty_catalog_rejects_everything() {
        assert!(!fulfills_requirement("anything", &IMPLEMENTED_EXTENSIONS));
        assert!(!fulfills_requirement(SHAPE, &IMPLEMENTED_EXTENSIONS));
    }

    // ========== evaluate_switch_conditions_with ==========

    #[test]
    fn no_conditional_attributes_is_unconditionally_permitted() {
        let attrs = [("fill", "blue"), ("stroke", "red")];
        let decision = evaluate_switch_conditions_with(attrs, &english());
        assert_eq!(
            decision,
            SwitchDecision {
                permitted: true,
                has_conditionals: false,
            }
        );
    }

    #[test]
    fn empty_bag_is_unconditionally_permitted() {
        let decision =
            evaluate_switch_conditions_with(std::iter::empty::<(&str, &str)>(), &english());
        assert!(decision.permitted);
        assert!(!decision.has_conditionals);
    }

    #[test]
    fn supported_feature_is_permitted_and_conditional() {
        let decision = evaluate_switch_conditions_with([("requiredFeatures", SHAPE)], &english());
        assert!(decision.permitted);
        assert!(decision.has_conditionals);
    }

    #[test]
    fn unknown_feature_is_not_permitted() {
        let decision =
            evaluate_switch_conditions_with([("requiredFeatures", "unknown.feature")], &english());
        assert!(!decision.permitted);
        assert!(decision.has_conditionals);
    }

    #[test]
    fn checks_combine_with_and() {
        // Feature check passes, extension check cannot.
        let attrs = [
            ("requiredFeatures", SHAPE),
            ("requiredExtensions", "http://example.com/ext"),
        ];
        let decision = evaluate_switch_conditions_with(attrs, &english());
        assert!(!decision.permitted);
        assert!(decision.has_conditionals);
    }

    #[test]
    fn all_three_checks_can_pass_together() {
        let attrs = [("requiredFeatures", SHAPE), ("systemLanguage", "en")];
        let decision = evaluate_switch_conditions_with(attrs, &english());
        assert!(decision.permitted);
        assert!(decision.has_conditionals);
    }

    #[test]
    fn language_mismatch_is_not_permitted() {
        let prefs = LanguagePreferences::new(["fr"]);
        let decision = evaluate_switch_conditions_with([("systemLanguage", "en")], &prefs);
        assert!(!decision.permitted);
        assert!(decision.has_conditionals);
    }

    #[test]
    fn extension_attribute_with_content_is_never_permitted() {
        let decision =
            evaluate_switch_conditions_with([("requiredExtensions", "anything")], &english());
        assert!(!decision.permitted);

        let decision = evaluate_switch_conditions_with([("requiredExtensions", "")], &english());
        assert!(!decision.permitted);
        assert!(decision.has_conditionals);
    }

    #[test]
    fn unrecognized_attributes_never_affect_the_result() {
        let attrs = [
            ("requiredFeatures", SHAPE),
            ("REQUIREDFEATURES", "unknown.feature"),
            ("required-features", "unknown.feature"),
            ("data-whatever", ""),
        ];
        let decision = evaluate_switch_conditions_with(attrs, &english());
        assert!(decision.permitted);
    }

    #[test]
    fn repeated_attribute_last_occurrence_wins() {
        let attrs = [
            ("requiredFeatures", "unknown.feature"),
            ("requiredFeatures", SHAPE),
        ];
        let decision = evaluate_switch_conditions_with(attrs, &english());
        assert!(decision.permitted);

        let attrs = [
            ("requiredFeatures", SHAPE),
            ("requiredFeatures", "unknown.feature"),
        ];
        let decision = evaluate_switch_conditions_with(attrs, &english());
        assert!(!decision.permitted);
    }

    #[test]
    fn accepts_any_pair_iterator() {
        let owned: Vec<(String, String)> = vec![("systemLanguage".into(), "en".into())];
        let pairs = owned.iter().map(|(k, v)| (k.as_str(), v.as_str()));
        let decision = evaluate_switch_conditions_with(pairs, &english());
        assert!(decision.permitted);
    }

    #[test]
    fn decision_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SwitchDecision>();
    }
}
