//! Lens optics for focusing on struct fields.
//!
//! A Lens is a get/set pair over an outer type `S` and an inner type `A`.
//! Lenses are composable, allowing access to deeply nested fields.
//!
//! # Laws
//!
//! Every Lens must satisfy three laws:
//!
//! 1. **GetPut Law**: Getting and setting back yields the original.
//!    ```text
//!    lens.set(lens.get(&source).clone(), source) == source
//!    ```
//!
//! 2. **PutGet Law**: Setting then getting yields the set value.
//!    ```text
//!    lens.get(&lens.set(value, source)) == &value
//!    ```
//!
//! 3. **PutPut Law**: Two consecutive sets is equivalent to the last set.
//!    ```text
//!    lens.set(v2, lens.set(v1, source)) == lens.set(v2, source)
//!    ```
//!
//! # Examples
//!
//! ```
//! use lensmith::optics::{Lens, FunctionLens};
//! use lensmith::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Point { x: i32, y: i32 }
//!
//! let x_lens = lens!(Point, x);
//!
//! let point = Point { x: 10, y: 20 };
//! assert_eq!(*x_lens.get(&point), 10);
//!
//! let updated = x_lens.set(100, point);
//! assert_eq!(updated.x, 100);
//! ```

use std::marker::PhantomData;

use super::optional::OptionalLens;

/// A Lens focuses on a single field within a larger structure.
///
/// # Type Parameters
///
/// - `S`: The source type (the whole structure)
/// - `A`: The target type (the focused field)
pub trait Lens<S, A> {
    /// Gets a reference to the focused field.
    fn get<'a>(&self, source: &'a S) -> &'a A;

    /// Returns a new source with the focused field replaced by `value`.
    ///
    /// # Arguments
    ///
    /// * `value` - The new value for the focused field
    /// * `source` - The source structure (consumed)
    fn set(&self, value: A, source: S) -> S;

    /// Modifies the focused field by applying a function.
    ///
    /// # Example
    ///
    /// ```
    /// use lensmith::optics::Lens;
    /// use lensmith::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Point { x: i32, y: i32 }
    ///
    /// let x_lens = lens!(Point, x);
    /// let doubled = x_lens.modify(Point { x: 10, y: 20 }, |x| x * 2);
    /// assert_eq!(doubled.x, 20);
    /// ```
    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
        A: Clone,
    {
        let current = self.get(&source).clone();
        self.set(function(current), source)
    }

    /// Returns a function that replaces the focused field with `value`.
    ///
    /// # Example
    ///
    /// ```
    /// use lensmith::optics::Lens;
    /// use lensmith::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Point { x: i32, y: i32 }
    ///
    /// let x_lens = lens!(Point, x);
    /// let reset = x_lens.with_value(0);
    /// assert_eq!(reset(Point { x: 7, y: 1 }), Point { x: 0, y: 1 });
    /// assert_eq!(reset(Point { x: 9, y: 2 }), Point { x: 0, y: 2 });
    /// ```
    fn with_value(&self, value: A) -> impl Fn(S) -> S
    where
        A: Clone,
    {
        move |source| self.set(value.clone(), source)
    }

    /// Lifts a function on the focused field to a function on the source.
    ///
    /// # Example
    ///
    /// ```
    /// use lensmith::optics::Lens;
    /// use lensmith::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Counter { hits: u32 }
    ///
    /// let hits = lens!(Counter, hits);
    /// let increment = hits.apply_to(|hits| hits + 1);
    /// assert_eq!(increment(increment(Counter { hits: 0 })).hits, 2);
    /// ```
    fn apply_to<F>(&self, function: F) -> impl Fn(S) -> S
    where
        F: Fn(A) -> A,
        A: Clone,
    {
        move |source| self.modify(source, &function)
    }

    /// Composes this lens with another lens to focus on a nested field.
    ///
    /// # Example
    ///
    /// ```
    /// use lensmith::optics::Lens;
    /// use lensmith::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Address { street: String }
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Person { address: Address }
    ///
    /// let street = lens!(Person, address).compose(lens!(Address, street));
    /// let person = Person { address: Address { street: "Main St".to_string() } };
    /// assert_eq!(street.get(&person), "Main St");
    /// ```
    fn compose<B, L>(self, other: L) -> ComposedLens<Self, L, A>
    where
        Self: Sized,
        L: Lens<A, B>,
    {
        ComposedLens::new(self, other)
    }

    /// Adapts this lens to an optional source.
    ///
    /// Reads yield `None` and writes are no-ops when the source is absent.
    ///
    /// # Example
    ///
    /// ```
    /// use lensmith::optics::{Lens, Optional};
    /// use lensmith::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Point { x: i32 }
    ///
    /// let x = lens!(Point, x).optional();
    /// assert_eq!(x.set(5, Some(Point { x: 1 })), Some(Point { x: 5 }));
    /// assert_eq!(x.set(5, None), None);
    /// ```
    fn optional(self) -> OptionalLens<Self, S, A>
    where
        Self: Sized,
    {
        OptionalLens::new(self)
    }
}

/// A lens built from a getter and a setter.
///
/// # Type Parameters
///
/// - `S`: The source type
/// - `A`: The target type
/// - `G`: The getter function type
/// - `St`: The setter function type
///
/// # Example
///
/// ```
/// use lensmith::optics::{Lens, FunctionLens};
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let x_lens = FunctionLens::new(
///     |point: &Point| &point.x,
///     |x: i32, point: Point| Point { x, y: point.y },
/// );
///
/// let point = Point { x: 10, y: 20 };
/// assert_eq!(*x_lens.get(&point), 10);
/// ```
pub struct FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(A, S) -> S,
{
    getter: G,
    setter: St,
    _marker: PhantomData<(S, A)>,
}

impl<S, A, G, St> FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(A, S) -> S,
{
    /// Creates a new `FunctionLens` from a getter and a setter.
    ///
    /// # Arguments
    ///
    /// * `getter` - Projects the focused field out of the source
    /// * `setter` - Takes the new value and the original source and rebuilds the source
    #[must_use]
    pub const fn new(getter: G, setter: St) -> Self {
        Self {
            getter,
            setter,
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, St> Lens<S, A> for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(A, S) -> S,
{
    fn get<'a>(&self, source: &'a S) -> &'a A {
        (self.getter)(source)
    }

    fn set(&self, value: A, source: S) -> S {
        (self.setter)(value, source)
    }
}

impl<S, A, G, St> Clone for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A + Clone,
    St: Fn(A, S) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self {
            getter: self.getter.clone(),
            setter: self.setter.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, St> std::fmt::Debug for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(A, S) -> S,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionLens")
            .finish_non_exhaustive()
    }
}

/// Two lenses chained end to end: `S -> A` then `A -> B`.
///
/// # Type Parameters
///
/// - `L1`: The outer lens
/// - `L2`: The inner lens
/// - `A`: The intermediate type (target of L1, source of L2)
pub struct ComposedLens<L1, L2, A> {
    first: L1,
    second: L2,
    _marker: PhantomData<A>,
}

impl<L1, L2, A> ComposedLens<L1, L2, A> {
    /// Creates a new composed lens.
    #[must_use]
    pub const fn new(first: L1, second: L2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, L1, L2> Lens<S, B> for ComposedLens<L1, L2, A>
where
    L1: Lens<S, A>,
    L2: Lens<A, B>,
    A: Clone + 'static,
{
    fn get<'a>(&self, source: &'a S) -> &'a B {
        self.second.get(self.first.get(source))
    }

    fn set(&self, value: B, source: S) -> S {
        let intermediate = self.first.get(&source).clone();
        let rebuilt = self.second.set(value, intermediate);
        self.first.set(rebuilt, source)
    }
}

impl<L1: Clone, L2: Clone, A> Clone for ComposedLens<L1, L2, A> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

impl<L1: std::fmt::Debug, L2: std::fmt::Debug, A> std::fmt::Debug for ComposedLens<L1, L2, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedLens")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

/// Creates a lens for a struct field.
///
/// # Syntax
///
/// ```text
/// lens!(StructType, field_name)
/// ```
///
/// # Example
///
/// ```
/// use lensmith::optics::Lens;
/// use lensmith::lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let x_lens = lens!(Point, x);
/// let point = Point { x: 10, y: 20 };
///
/// assert_eq!(*x_lens.get(&point), 10);
/// assert_eq!(x_lens.set(100, point), Point { x: 100, y: 20 });
/// ```
#[macro_export]
macro_rules! lens {
    ($struct_type:ident, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$struct_type| &source.$field,
            |value, mut source: $struct_type| {
                source.$field = value;
                source
            },
        )
    };
    ($struct_type:ident < $($generic:tt),+ >, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$struct_type<$($generic),+>| &source.$field,
            |value, mut source: $struct_type<$($generic),+>| {
                source.$field = value;
                source
            },
        )
    };
    ($struct_type:path, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$struct_type| &source.$field,
            |value, mut source: $struct_type| {
                source.$field = value;
                source
            },
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[test]
    fn test_function_lens_get() {
        let x_lens = FunctionLens::new(
            |point: &Point| &point.x,
            |x: i32, point: Point| Point { x, y: point.y },
        );

        let point = Point { x: 10, y: 20 };
        assert_eq!(*x_lens.get(&point), 10);
    }

    #[test]
    fn test_function_lens_set() {
        let x_lens = FunctionLens::new(
            |point: &Point| &point.x,
            |x: i32, point: Point| Point { x, y: point.y },
        );

        let updated = x_lens.set(100, Point { x: 10, y: 20 });
        assert_eq!(updated, Point { x: 100, y: 20 });
    }

    #[test]
    fn test_with_value_is_reusable() {
        let y_lens = lens!(Point, y);
        let clear = y_lens.with_value(0);
        assert_eq!(clear(Point { x: 1, y: 2 }), Point { x: 1, y: 0 });
        assert_eq!(clear(Point { x: 3, y: 4 }), Point { x: 3, y: 0 });
    }

    #[test]
    fn test_apply_to() {
        let x_lens = lens!(Point, x);
        let negate = x_lens.apply_to(|x| -x);
        assert_eq!(negate(Point { x: 5, y: 5 }), Point { x: -5, y: 5 });
    }

    #[test]
    fn test_lens_compose() {
        #[derive(Clone, PartialEq, Debug)]
        struct Inner {
            value: i32,
        }

        #[derive(Clone, PartialEq, Debug)]
        struct Outer {
            inner: Inner,
        }

        let composed = lens!(Outer, inner).compose(lens!(Inner, value));
        let data = Outer {
            inner: Inner { value: 42 },
        };

        assert_eq!(*composed.get(&data), 42);
        assert_eq!(composed.set(100, data).inner.value, 100);
    }

    #[test]
    fn test_debug_output() {
        let x_lens = lens!(Point, x);
        assert_eq!(format!("{x_lens:?}"), "FunctionLens { .. }");
    }
}
