//! Lens emission.

use crate::arguments::{ReconstructionArgument, build_arguments};
use crate::member::Member;
use crate::visibility::Visibility;

/// One generated, type-owned lens declaration.
///
/// The getter projects `field` out of its input. The setter calls the
/// owner's memberwise initializer with `arguments`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesizedLens {
    /// Lens name: field name plus the configured suffix.
    pub name: String,
    /// The field the lens focuses on.
    pub field: String,
    /// The originating member's write visibility.
    pub visibility: Visibility,
    /// The declaration the lens belongs to.
    pub owner_type_name: String,
    /// The focused field's declared type.
    pub value_type_name: String,
    /// Reconstruction arguments for the setter body.
    pub arguments: Vec<ReconstructionArgument>,
}

/// Emits the lens for `member`.
///
/// Returns `None` when the member has no declared type to name in the
/// lens signature; the rest of the declaration is unaffected.
///
/// # Examples
///
/// ```rust
/// use lensmith_core::{Visibility, emit, parse_declaration, scan};
///
/// let raw = parse_declaration("struct Flag { private(set) var on: Bool }").unwrap();
/// let eligible = scan(&raw).unwrap().eligible_members();
/// let lens = emit("Flag", &eligible, &eligible[0], "Lens").unwrap();
///
/// assert_eq!(lens.name, "onLens");
/// assert_eq!(lens.visibility, Visibility::Private);
/// assert_eq!(lens.value_type_name, "Bool");
/// ```
#[must_use]
pub fn emit(
    owner_type_name: &str,
    eligible: &[Member],
    member: &Member,
    suffix: &str,
) -> Option<SynthesizedLens> {
    let Some(value_type_name) = member.declared_type.clone() else {
        tracing::debug!(
            owner = owner_type_name,
            field = %member.name,
            "skipping lens for field without a declared type"
        );
        return None;
    };

    let lens = SynthesizedLens {
        name: format!("{}{suffix}", member.name),
        field: member.name.clone(),
        visibility: member.write_visibility,
        owner_type_name: owner_type_name.to_string(),
        value_type_name,
        arguments: build_arguments(eligible, member),
    };
    tracing::trace!(owner = owner_type_name, lens = %lens.name, "emitted lens");
    Some(lens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arguments::ArgumentValue;
    use crate::member::StorageKind;

    fn member(name: &str, declared_type: Option<&str>, write: Visibility) -> Member {
        Member {
            name: name.to_string(),
            declared_type: declared_type.map(str::to_string),
            storage: StorageKind::Stored,
            read_visibility: Visibility::Public,
            write_visibility: write,
        }
    }

    #[test]
    fn test_emit_uses_write_visibility_and_suffix() {
        let eligible = vec![
            member("x", Some("Int"), Visibility::Public),
            member("y", Some("Int"), Visibility::FilePrivate),
        ];
        let lens = emit("Point", &eligible, &eligible[1], "_lens").unwrap();
        assert_eq!(lens.name, "y_lens");
        assert_eq!(lens.field, "y");
        assert_eq!(lens.visibility, Visibility::FilePrivate);
        assert_eq!(lens.owner_type_name, "Point");
        assert_eq!(lens.arguments.len(), 2);
        assert_eq!(lens.arguments[1].value, ArgumentValue::NewValue);
    }

    #[test]
    fn test_emit_skips_untyped_member() {
        let eligible = vec![member("x", None, Visibility::Public)];
        assert_eq!(emit("Point", &eligible, &eligible[0], "Lens"), None);
    }
}
