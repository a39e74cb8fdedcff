//! Per-check evaluation traces.
//!
//! The trace variant runs the identical single pass as
//! [`evaluate_switch_conditions_with`](crate::evaluate_switch_conditions_with)
//! while recording every recognized attribute's check, in bag order. Use it
//! to answer "why was this element dropped".

use crate::{ConditionalAttribute, LanguagePreferences, SwitchDecision};

/// One recognized attribute's check during a traced evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ConditionCheck {
    /// Which conditional attribute was checked.
    pub attribute: ConditionalAttribute,
    /// The raw attribute value the check ran on.
    pub value: String,
    /// Whether the check was satisfied.
    pub satisfied: bool,
}

/// Trace of a full switch evaluation.
///
/// `decision` always equals what the untraced evaluation returns for the
/// same inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SwitchTrace {
    /// The final decision, identical to the untraced result.
    pub decision: SwitchDecision,
    /// Every recognized attribute's check, in bag order. A repeated
    /// attribute appears once per occurrence even though only its last
    /// occurrence decides.
    pub checks: Vec<ConditionCheck>,
}

/// Traced counterpart of
/// [`evaluate_switch_conditions_with`](crate::evaluate_switch_conditions_with).
///
/// # Example
///
/// ```
/// use svitch::{evaluate_switch_conditions_with_trace, LanguagePreferences};
///
/// let prefs = LanguagePreferences::new(["en-US"]);
/// let attrs = [
///     ("requiredFeatures", "unknown.feature"),
///     ("systemLanguage", "en"),
/// ];
///
/// let trace = evaluate_switch_conditions_with_trace(attrs, &prefs);
/// assert!(!trace.decision.permitted);
/// assert_eq!(trace.checks.len(), 2);
/// assert!(!trace.checks[0].satisfied);
/// assert!(trace.checks[1].satisfied);
/// ```
pub fn evaluate_switch_conditions_with_trace<'a, I>(
    attributes: I,
    preferences: &LanguagePreferences,
) -> SwitchTrace
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut features_ok = true;
    let mut extensions_ok = true;
    let mut language_ok = true;
    let mut has_conditionals = false;
    let mut checks = Vec::new();

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
        checks.push(ConditionCheck {
            attribute,
            value: value.to_string(),
            satisfied,
        });
    }

    SwitchTrace {
        decision: SwitchDecision {
            permitted: features_ok && extensions_ok && language_ok,
            has_conditionals,
        },
        checks,
    }
}
