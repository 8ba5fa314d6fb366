//! Raw, syntax-level view of one type declaration.
//!
//! These nodes carry exactly what the pipeline consumes and nothing more.
//! Front ends other than the text parser build them directly.

use smallvec::SmallVec;

/// The introducer keyword of a type declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    /// `struct`: a fixed-shape value type.
    Struct,
    /// `class`.
    Class,
    /// `enum`.
    Enum,
    /// `actor`.
    Actor,
    /// `protocol`.
    Protocol,
    /// `extension`.
    Extension,
}

impl DeclarationKind {
    /// Maps an introducer keyword to its kind.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "struct" => Some(Self::Struct),
            "class" => Some(Self::Class),
            "enum" => Some(Self::Enum),
            "actor" => Some(Self::Actor),
            "protocol" => Some(Self::Protocol),
            "extension" => Some(Self::Extension),
            _ => None,
        }
    }

    /// Whether instances are fully described by a flat list of stored
    /// fields and rebuilt with one memberwise initializer call.
    #[must_use]
    pub const fn is_record_like(self) -> bool {
        matches!(self, Self::Struct)
    }
}

/// One type declaration: its name and its direct members in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDeclaration {
    /// Introducer keyword.
    pub kind: DeclarationKind,
    /// Simple type name, without generic parameters.
    pub name: Option<String>,
    /// Members in source order.
    pub members: Vec<RawMember>,
}

impl RawDeclaration {
    /// Creates a `struct` declaration with the given members.
    #[must_use]
    pub fn record(name: impl Into<String>, members: Vec<RawMember>) -> Self {
        Self {
            kind: DeclarationKind::Struct,
            name: Some(name.into()),
            members,
        }
    }
}

/// A member of a type body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawMember {
    /// `let` or `var`.
    Variable(RawVariable),
    /// `func`.
    Function {
        /// Function name, if one could be read.
        name: Option<String>,
    },
    /// `init`, `deinit`.
    Initializer,
    /// A nested `struct`, `class`, `enum`, `actor` or `protocol`.
    NestedType {
        /// Nested type name, if one could be read.
        name: Option<String>,
    },
    /// Anything else: `typealias`, `subscript`, `case`, ...
    Other,
}

/// `let` or `var`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Binding {
    /// `let`
    Let,
    /// `var`
    Var,
}

/// The accessor block attached to a variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessorBlock {
    /// A getter (explicit `get` or an implicit expression body).
    Computed,
    /// Only `willSet` / `didSet` observers; storage is still present.
    Observers,
}

/// A declaration modifier such as `static`, `public` or `private(set)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Modifier {
    /// The modifier keyword.
    pub name: String,
    /// The parenthesized qualifier, e.g. `set` in `private(set)`.
    pub detail: Option<String>,
}

impl Modifier {
    /// A modifier without a qualifier.
    #[must_use]
    pub fn plain(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            detail: None,
        }
    }

    /// A modifier with a parenthesized qualifier.
    #[must_use]
    pub fn qualified(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            detail: Some(detail.into()),
        }
    }
}

/// One `let`/`var` binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawVariable {
    /// Attribute names without the `@`, e.g. `Published`.
    pub attributes: Vec<String>,
    /// Declaration modifiers in source order.
    pub modifiers: SmallVec<[Modifier; 2]>,
    /// `let` or `var`.
    pub binding: Binding,
    /// The bound identifier, if the pattern is a plain identifier.
    pub name: Option<String>,
    /// The annotated type, copied verbatim from source.
    pub declared_type: Option<String>,
    /// Whether an `= expression` default is present.
    pub has_initializer: bool,
    /// The attached accessor block, if any.
    pub accessor: Option<AccessorBlock>,
}

impl RawVariable {
    /// A stored `var name: declared_type` with no modifiers.
    #[must_use]
    pub fn stored(name: impl Into<String>, declared_type: impl Into<String>) -> Self {
        Self {
            attributes: Vec::new(),
            modifiers: SmallVec::new(),
            binding: Binding::Var,
            name: Some(name.into()),
            declared_type: Some(declared_type.into()),
            has_initializer: false,
            accessor: None,
        }
    }

    /// Appends a modifier.
    #[must_use]
    pub fn with_modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.push(modifier);
        self
    }

    /// Sets the accessor block.
    #[must_use]
    pub const fn with_accessor(mut self, accessor: AccessorBlock) -> Self {
        self.accessor = Some(accessor);
        self
    }
}
