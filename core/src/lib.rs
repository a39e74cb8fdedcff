//! svitch - Conditional-processing evaluation for SVG `<switch>`
//!
//! Implements the SVG 1.1 conditional-processing attributes
//! (`requiredFeatures`, `requiredExtensions`, `systemLanguage`) that decide
//! whether an element participates in `<switch>` selection. The tree walker
//! asks one yes/no question per element; this crate answers it from the
//! element's already-extracted attribute strings.
//!
//! # Architecture
//!
//! - [`FeatureSet`] — Sorted, immutable catalog of supported identifiers,
//!   binary-search lookup ([`IMPLEMENTED_FEATURES`], [`IMPLEMENTED_EXTENSIONS`])
//! - [`split_list`] — Whitespace/comma tokenizer for attribute values
//! - [`fulfills_requirement`] — Every listed token must be in the catalog
//! - [`matches_system_language`] — First preferred language against each
//!   listed tag, directional comparison
//! - [`evaluate_switch_conditions`] — Single pass over an attribute bag,
//!   AND of the three checks
//!
//! # Key Semantics
//!
//! 1. **Fail-closed**: no error type exists in this crate. Malformed
//!    values, empty token lists, and absent locale information all evaluate
//!    to "requirement not satisfied". Conditional attributes are advisory
//!    inclusion filters; on ambiguity the element is excluded rather than
//!    processing halted.
//!
//! 2. **Blank is a failure**: an attribute that is present but yields no
//!    tokens is a failed requirement, not a vacuous pass. Existing content
//!    depends on this.
//!
//! 3. **No opinion vs. passed**: `has_conditionals == false` means the
//!    element carried none of the three attributes. Callers distinguish
//!    that from an element whose conditions were evaluated and passed.
//!
//! # Example
//!
//! ```
//! use svitch::prelude::*;
//!
//! let prefs = LanguagePreferences::new(["en-US"]);
//! let attrs = [
//!     ("requiredFeatures", "http://www.w3.org/TR/SVG11/feature#Shape"),
//!     ("systemLanguage", "en, fr"),
//!     ("fill", "blue"), // not a conditional attribute, ignored
//! ];
//!
//! let decision = evaluate_switch_conditions_with(attrs, &prefs);
//! assert!(decision.permitted);
//! assert!(decision.has_conditionals);
//! ```
//!
//! The zero-argument entry point [`evaluate_switch_conditions`] reads the
//! language preferences from the process environment on every call, so late
//! locale changes are honored and no state is cached between evaluations.

// ═══════════════════════════════════════════════════════════════════════════════
// Modules
// ═══════════════════════════════════════════════════════════════════════════════

mod attribute;
mod cond;
mod lang;
mod list;
mod registry;
mod trace;

// ═══════════════════════════════════════════════════════════════════════════════
// Public API
// ═══════════════════════════════════════════════════════════════════════════════

pub use attribute::ConditionalAttribute;
pub use cond::{
    evaluate_switch_conditions, evaluate_switch_conditions_with, fulfills_requirement,
    SwitchDecision,
};
pub use lang::{locale_matches, matches_system_language, LanguagePreferences};
pub use list::split_list;
pub use registry::{FeatureSet, IMPLEMENTED_EXTENSIONS, IMPLEMENTED_FEATURES};
pub use trace::{evaluate_switch_conditions_with_trace, ConditionCheck, SwitchTrace};

// ═══════════════════════════════════════════════════════════════════════════════
// Prelude
// ═══════════════════════════════════════════════════════════════════════════════

/// Prelude module for convenient imports.
///
/// ```
/// use svitch::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        evaluate_switch_conditions,
        evaluate_switch_conditions_with,
        evaluate_switch_conditions_with_trace,
        fulfills_requirement,
        locale_matches,
        matches_system_language,
        split_list,
        ConditionCheck,
        // Attribute names
        ConditionalAttribute,
        // Catalogs
        FeatureSet,
        // Language matching
        LanguagePreferences,
        // Results
        SwitchDecision,
        SwitchTrace,
        IMPLEMENTED_EXTENSIONS,
        IMPLEMENTED_FEATURES,
    };
}
