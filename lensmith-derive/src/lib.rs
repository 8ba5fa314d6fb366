//! Derive macro for lensmith lenses.
//!
//! `#[derive(Lenses)]` lowers a struct into the `lensmith-core` declaration
//! model, runs the lens synthesis pipeline and renders every synthesized
//! lens as an associated function of the struct.
//!
//! # Example
//!
//! ```rust,ignore
//! use lensmith::Lenses;
//! use lensmith::optics::Lens;
//!
//! #[derive(Clone, Debug, PartialEq, Lenses)]
//! pub struct Point {
//!     pub x: i32,
//!     pub y: i32,
//! }
//!
//! // Generated methods:
//! // - pub fn x_lens() -> impl Lens<Point, i32> + Clone
//! // - pub fn y_lens() -> impl Lens<Point, i32> + Clone
//!
//! let point = Point { x: 10, y: 20 };
//! assert_eq!(*Point::x_lens().get(&point), 10);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod lenses;

use proc_macro::TokenStream;

/// Derive macro generating one lens per struct field.
///
/// For each field `foo: T` the macro generates
///
/// ```rust,ignore
/// impl StructName {
///     <vis> fn foo_lens() -> impl ::lensmith::optics::Lens<Self, T> + Clone { ... }
/// }
/// ```
///
/// The setter rebuilds the struct with a literal that names every field in
/// declaration order: the replaced field takes the new value and the others
/// are moved out of the original.
///
/// # Visibility
///
/// A lens is as visible as its field can be written. By default that is the
/// field's own visibility. `#[lens(set = "...")]` narrows it:
///
/// ```rust,ignore
/// #[derive(Clone, Lenses)]
/// pub struct Account {
///     pub owner: String,
///     #[lens(set = "pub(crate)")]
///     pub balance: i64,
/// }
///
/// // pub fn owner_lens() ...
/// // pub(crate) fn balance_lens() ...
/// ```
///
/// Accepted values are `"private"`, `"pub(self)"`, `"pub(super)"`,
/// `"pub(in path)"`, `"pub(crate)"` and `"pub"`. Unrecognized values leave
/// the field's visibility in place.
///
/// # Unsupported shapes
///
/// Enums, unions, tuple structs and unit structs get no lenses. The derive
/// never fails: unsupported input expands to nothing.
///
/// # Requirements
///
/// The struct must not implement `Drop`, since the setter moves the
/// remaining fields out of the original value.
///
/// A field's `#[cfg(...)]` attributes are copied onto its lens and onto its
/// entry in every setter, so conditionally compiled fields are supported.
#[proc_macro_derive(Lenses, attributes(lens))]
pub fn derive_lenses(input: TokenStream) -> TokenStream {
    lenses::derive_lenses_impl(input)
}
