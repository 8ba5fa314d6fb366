//! # lensmith
//!
//! Lenses for immutable record types, written by hand or synthesized.
//!
//! ## Overview
//!
//! - **Optics**: the [`Lens`](optics::Lens) accessor pair, composition and
//!   adapters for optional values
//! - **Derive**: `#[derive(Lenses)]` generates one lens per struct field
//! - **Codegen**: the synthesis pipeline itself, which also reads and writes
//!   Swift-like declaration text
//!
//! ## Feature Flags
//!
//! - `optics`: the lens library
//! - `derive`: the `Lenses` derive macro
//! - `codegen`: re-export of `lensmith-core` as [`codegen`]
//! - `serde`: `serde` support for the generator configuration
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use lensmith::prelude::*;
//!
//! #[derive(Clone, Debug, PartialEq, Lenses)]
//! pub struct Address {
//!     pub city: String,
//! }
//!
//! #[derive(Clone, Debug, PartialEq, Lenses)]
//! pub struct Person {
//!     pub name: String,
//!     pub address: Address,
//! }
//!
//! let person = Person {
//!     name: "Alice".to_string(),
//!     address: Address { city: "Tokyo".to_string() },
//! };
//!
//! let city = Person::address_lens().compose(Address::city_lens());
//! let moved = city.set("Osaka".to_string(), person);
//! assert_eq!(moved.address.city, "Osaka");
//! assert_eq!(moved.name, "Alice");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use lensmith::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "optics")]
    pub use crate::optics::*;

    #[cfg(feature = "derive")]
    pub use lensmith_derive::Lenses;
}

#[cfg(feature = "optics")]
pub mod optics;

#[cfg(feature = "derive")]
pub use lensmith_derive::Lenses;

#[cfg(feature = "codegen")]
pub use lensmith_core as codegen;
