//! Optional optics for focusing on values that may or may not exist.
//!
//! An Optional gives get/set access to a value that may be absent. The
//! [`OptionalLens`] adapter lifts any [`Lens`] over `S` to an Optional over
//! `Option<S>`: when the source is `None` nothing is read and writes leave it
//! `None`.
//!
//! # Laws
//!
//! Every Optional must satisfy two laws (when the element is present):
//!
//! 1. **`GetOptionSet` Law**: Getting and setting back yields the original.
//!    ```text
//!    if let Some(value) = optional.get_option(&source) then
//!        optional.set(value.clone(), source) == source
//!    ```
//!
//! 2. **`SetGetOption` Law**: Setting then getting yields the set value.
//!    ```text
//!    if optional.is_present(&source) then
//!        optional.get_option(&optional.set(value, source)) == Some(&value)
//!    ```
//!
//! # Examples
//!
//! ```
//! use lensmith::optics::{Lens, Optional};
//! use lensmith::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Session { user: String }
//!
//! let user = lens!(Session, user).optional();
//!
//! let active = Some(Session { user: "alice".to_string() });
//! assert_eq!(user.get_option(&active).map(String::as_str), Some("alice"));
//!
//! let missing: Option<Session> = None;
//! assert_eq!(user.get_option(&missing), None);
//! assert_eq!(user.set("bob".to_string(), missing), None);
//! ```

use std::marker::PhantomData;

use super::lens::Lens;

/// An Optional focuses on a value that may or may not exist.
///
/// # Type Parameters
///
/// - `S`: The source type (the whole structure)
/// - `A`: The target type (the focused element, if present)
pub trait Optional<S, A> {
    /// Attempts to get a reference to the focused element.
    ///
    /// Returns `Some` if the element is present, `None` otherwise.
    fn get_option<'a>(&self, source: &'a S) -> Option<&'a A>;

    /// Replaces the focused element if it is present.
    ///
    /// When the element is absent the source is returned unchanged.
    ///
    /// # Arguments
    ///
    /// * `value` - The new value for the focused element
    /// * `source` - The source structure (consumed)
    fn set(&self, value: A, source: S) -> S;

    /// Modifies the focused element if present.
    ///
    /// Returns `Some` with the modified source if the element is present,
    /// `None` otherwise.
    fn modify_option<F>(&self, source: S, function: F) -> Option<S>
    where
        F: FnOnce(A) -> A,
        A: Clone,
    {
        let current = self.get_option(&source).cloned();
        current.map(|value| self.set(function(value), source))
    }

    /// Modifies the focused element if present, otherwise returns the source
    /// unchanged.
    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
        A: Clone,
    {
        match self.get_option(&source).cloned() {
            Some(value) => self.set(function(value), source),
            None => source,
        }
    }

    /// Checks if the focused element is present.
    fn is_present(&self, source: &S) -> bool {
        self.get_option(source).is_some()
    }
}

/// A lens over `S` lifted to an Optional over `Option<S>`.
///
/// Created by [`Lens::optional`].
///
/// # Type Parameters
///
/// - `L`: The type of the lens
/// - `S`: The source type of the lens
/// - `A`: The target type of the lens
pub struct OptionalLens<L, S, A> {
    lens: L,
    _marker: PhantomData<(S, A)>,
}

impl<L, S, A> OptionalLens<L, S, A> {
    /// Wraps a lens.
    #[must_use]
    pub const fn new(lens: L) -> Self {
        Self {
            lens,
            _marker: PhantomData,
        }
    }

    /// Returns the wrapped lens.
    #[must_use]
    pub fn into_inner(self) -> L {
        self.lens
    }
}

impl<L, S, A> Optional<Option<S>, A> for OptionalLens<L, S, A>
where
    L: Lens<S, A>,
{
    fn get_option<'a>(&self, source: &'a Option<S>) -> Option<&'a A> {
        source.as_ref().map(|inner| self.lens.get(inner))
    }

    fn set(&self, value: A, source: Option<S>) -> Option<S> {
        source.map(|inner| self.lens.set(value, inner))
    }
}

impl<L: Clone, S, A> Clone for OptionalLens<L, S, A> {
    fn clone(&self) -> Self {
        Self::new(self.lens.clone())
    }
}

impl<L: std::fmt::Debug, S, A> std::fmt::Debug for OptionalLens<L, S, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("OptionalLens")
            .field("lens", &self.lens)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lens;

    #[derive(Clone, PartialEq, Debug)]
    struct Settings {
        volume: u8,
        muted: bool,
    }

    #[test]
    fn test_get_option_present() {
        let volume = lens!(Settings, volume).optional();
        let settings = Some(Settings {
            volume: 7,
            muted: false,
        });
        assert_eq!(volume.get_option(&settings), Some(&7));
        assert!(volume.is_present(&settings));
    }

    #[test]
    fn test_set_on_absent_source_stays_absent() {
        let volume = lens!(Settings, volume).optional();
        assert_eq!(volume.set(3, None), None);
        assert!(!volume.is_present(&None));
    }

    #[test]
    fn test_modify_option() {
        let volume = lens!(Settings, volume).optional();
        let settings = Some(Settings {
            volume: 7,
            muted: true,
        });

        let louder = volume.modify_option(settings, |level| level + 1);
        assert_eq!(
            louder,
            Some(Some(Settings {
                volume: 8,
                muted: true
            }))
        );
        assert_eq!(volume.modify_option(None, |level| level), None);
    }

    #[test]
    fn test_modify_leaves_absent_source() {
        let muted = lens!(Settings, muted).optional();
        assert_eq!(muted.modify(None, |flag| !flag), None);
    }
}
