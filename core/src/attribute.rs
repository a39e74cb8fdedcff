//! Conditional-processing attribute names.

use std::fmt;

/// The closed set of attributes that gate `<switch>` participation.
///
/// Name lookup is exact and case-sensitive, as markup attribute names are.
/// Anything outside this set never affects an evaluation.
///
/// # Example
///
/// ```
/// use svitch::ConditionalAttribute;
///
/// assert_eq!(
///     ConditionalAttribute::from_name("systemLanguage"),
///     Some(ConditionalAttribute::SystemLanguage)
/// );
/// assert_eq!(ConditionalAttribute::from_name("fill"), None);
/// assert_eq!(ConditionalAttribute::from_name("SYSTEMLANGUAGE"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum ConditionalAttribute {
    /// `requiredFeatures`: every listed feature URI must be implemented.
    RequiredFeatures,
    /// `requiredExtensions`: every listed extension must be implemented.
    RequiredExtensions,
    /// `systemLanguage`: some listed tag must match the preferred language.
    SystemLanguage,
}

impl ConditionalAttribute {
    /// All recognized conditional attributes.
    pub const ALL: [Self; 3] = [
        Self::RequiredFeatures,
        Self::RequiredExtensions,
        Self::SystemLanguage,
    ];

    /// Look up a markup attribute name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "requiredFeatures" => Some(Self::RequiredFeatures),
            "requiredExtensions" => Some(Self::RequiredExtensions),
            "systemLanguage" => Some(Self::SystemLanguage),
            _ => None,
        }
    }

    /// The canonical markup name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::RequiredFeatures => "requiredFeatures",
            Self::RequiredExtensions => "requiredExtensions",
            Self::SystemLanguage => "systemLanguage",
        }
    }
}

impl fmt::Display for ConditionalAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
