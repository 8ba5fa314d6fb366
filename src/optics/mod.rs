//! Optics for immutable data manipulation.
//!
//! A lens is an accessor pair: a getter that reads one field out of a value
//! and a setter that rebuilds the value with that field replaced. Lenses
//! compose, so a chain of them reads and writes deeply nested fields without
//! mutating anything.
//!
//! # Available Optics
//!
//! - [`Lens`]: Focus on a single field (get/set access)
//! - [`Optional`]: Focus on a value that may or may not exist
//!
//! # Example with Lens
//!
//! ```
//! use lensmith::optics::Lens;
//! use lensmith::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Address { street: String, city: String }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Person { name: String, address: Address }
//!
//! let person_street = lens!(Person, address).compose(lens!(Address, street));
//!
//! let person = Person {
//!     name: "Alice".to_string(),
//!     address: Address {
//!         street: "Main St".to_string(),
//!         city: "Tokyo".to_string(),
//!     },
//! };
//!
//! assert_eq!(*person_street.get(&person), "Main St");
//!
//! let updated = person_street.set("Oak Ave".to_string(), person);
//! assert_eq!(updated.address.street, "Oak Ave");
//! assert_eq!(updated.address.city, "Tokyo");
//! ```

mod lens;
mod optional;

pub use lens::ComposedLens;
pub use lens::FunctionLens;
pub use lens::Lens;

pub use optional::Optional;
pub use optional::OptionalLens;
