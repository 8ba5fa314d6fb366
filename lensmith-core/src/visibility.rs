//! Access-control levels.
//!
//! Levels form a total order from narrowest to widest:
//!
//! ```text
//! Private < FilePrivate < Internal < Public < Open
//! ```
//!
//! A member with no visibility annotation is [`Visibility::Internal`].

use std::fmt;

/// An access-control level gating who may read or write a member.
///
/// The derived [`Ord`] follows declaration order, so `Private` is the
/// smallest value and `Open` the largest.
///
/// # Examples
///
/// ```rust
/// use lensmith_core::Visibility;
///
/// assert!(Visibility::Private < Visibility::Public);
/// assert_eq!(Visibility::default(), Visibility::Internal);
/// assert_eq!(
///     Visibility::narrower(Visibility::Public, Visibility::FilePrivate),
///     Visibility::FilePrivate
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Visibility {
    /// Visible only inside the enclosing declaration.
    Private,
    /// Visible inside the enclosing source file.
    FilePrivate,
    /// Visible inside the defining module.
    #[default]
    Internal,
    /// Visible to importing modules.
    Public,
    /// Visible and overridable from importing modules.
    Open,
}

impl Visibility {
    /// Maps an access-control keyword to its level.
    ///
    /// `package` is treated as [`Visibility::Internal`]. Any other word
    /// returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lensmith_core::Visibility;
    ///
    /// assert_eq!(Visibility::from_keyword("fileprivate"), Some(Visibility::FilePrivate));
    /// assert_eq!(Visibility::from_keyword("static"), None);
    /// ```
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "private" => Some(Self::Private),
            "fileprivate" => Some(Self::FilePrivate),
            "internal" | "package" => Some(Self::Internal),
            "public" => Some(Self::Public),
            "open" => Some(Self::Open),
            _ => None,
        }
    }

    /// Returns the keyword that spells this level.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Private => "private",
            Self::FilePrivate => "fileprivate",
            Self::Internal => "internal",
            Self::Public => "public",
            Self::Open => "open",
        }
    }

    /// Returns the narrower of two levels.
    #[must_use]
    pub fn narrower(first: Self, second: Self) -> Self {
        first.min(second)
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.keyword())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("private", Some(Visibility::Private))]
    #[case("fileprivate", Some(Visibility::FilePrivate))]
    #[case("internal", Some(Visibility::Internal))]
    #[case("package", Some(Visibility::Internal))]
    #[case("public", Some(Visibility::Public))]
    #[case("open", Some(Visibility::Open))]
    #[case("Public", None)]
    #[case("mutating", None)]
    fn test_from_keyword(#[case] keyword: &str, #[case] expected: Option<Visibility>) {
        assert_eq!(Visibility::from_keyword(keyword), expected);
    }

    #[test]
    fn test_levels_are_totally_ordered() {
        let levels = [
            Visibility::Private,
            Visibility::FilePrivate,
            Visibility::Internal,
            Visibility::Public,
            Visibility::Open,
        ];
        for window in levels.windows(2) {
            assert!(window[0] < window[1]);
        }
    }

    #[rstest]
    #[case(Visibility::Public, Visibility::Private, Visibility::Private)]
    #[case(Visibility::Internal, Visibility::Open, Visibility::Internal)]
    #[case(Visibility::FilePrivate, Visibility::FilePrivate, Visibility::FilePrivate)]
    fn test_narrower(
        #[case] first: Visibility,
        #[case] second: Visibility,
        #[case] expected: Visibility,
    ) {
        assert_eq!(Visibility::narrower(first, second), expected);
        assert_eq!(Visibility::narrower(second, first), expected);
    }

    #[test]
    fn test_display_round_trips_through_keyword() {
        for level in [
            Visibility::Private,
            Visibility::FilePrivate,
            Visibility::Internal,
            Visibility::Public,
            Visibility::Open,
        ] {
            assert_eq!(Visibility::from_keyword(&level.to_string()), Some(level));
        }
    }
}
