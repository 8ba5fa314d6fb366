//! Member classification.
//!
//! [`classify`] decides, for one raw member, whether it is a field at all,
//! whether it owns per-instance storage, and who may read and write it.

use crate::syntax::{AccessorBlock, Modifier, RawMember, RawVariable};
use crate::visibility::Visibility;

/// How a field's value is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKind {
    /// Per-instance storage written through the memberwise initializer.
    Stored,
    /// Produced by a getter body; no storage.
    Computed,
    /// Stored on the type rather than on instances.
    StaticStored,
}

/// A classified field-like member.
///
/// `write_visibility` is never wider than `read_visibility`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    /// Field name, unique within the declaration.
    pub name: String,
    /// Annotated type, if the declaration spelled one.
    pub declared_type: Option<String>,
    /// Storage classification.
    pub storage: StorageKind,
    /// Who may read the field.
    pub read_visibility: Visibility,
    /// Who may assign the field.
    pub write_visibility: Visibility,
}

impl Member {
    /// Whether this member takes part in reconstruction.
    #[must_use]
    pub fn is_eligible(&self) -> bool {
        self.storage == StorageKind::Stored
    }
}

/// Classifies one raw member.
///
/// Returns `None` for anything that is not a named `let`/`var`: functions,
/// initializers, nested types and destructuring patterns are skipped.
///
/// # Examples
///
/// ```rust
/// use lensmith_core::{Modifier, RawMember, RawVariable, StorageKind, Visibility, classify};
///
/// let raw = RawMember::Variable(
///     RawVariable::stored("balance", "Int")
///         .with_modifier(Modifier::plain("public"))
///         .with_modifier(Modifier::qualified("private", "set")),
/// );
/// let member = classify(&raw).unwrap();
/// assert_eq!(member.storage, StorageKind::Stored);
/// assert_eq!(member.read_visibility, Visibility::Public);
/// assert_eq!(member.write_visibility, Visibility::Private);
/// ```
#[must_use]
pub fn classify(member: &RawMember) -> Option<Member> {
    let RawMember::Variable(variable) = member else {
        return None;
    };
    let name = variable.name.clone()?;

    let read_visibility = read_visibility(&variable.modifiers).unwrap_or_default();
    let write_visibility = write_visibility(&variable.modifiers).map_or(read_visibility, |level| {
        Visibility::narrower(level, read_visibility)
    });

    let member = Member {
        name,
        declared_type: variable.declared_type.clone(),
        storage: storage_kind(variable),
        read_visibility,
        write_visibility,
    };
    tracing::trace!(
        name = %member.name,
        storage = ?member.storage,
        read = %member.read_visibility,
        write = %member.write_visibility,
        "classified member"
    );
    Some(member)
}

fn storage_kind(variable: &RawVariable) -> StorageKind {
    if variable.accessor == Some(AccessorBlock::Computed) {
        return StorageKind::Computed;
    }
    let is_static = variable
        .modifiers
        .iter()
        .any(|modifier| modifier.detail.is_none() && matches!(modifier.name.as_str(), "static" | "class"));
    if is_static {
        StorageKind::StaticStored
    } else {
        StorageKind::Stored
    }
}

fn read_visibility(modifiers: &[Modifier]) -> Option<Visibility> {
    modifiers
        .iter()
        .filter(|modifier| modifier.detail.is_none())
        .find_map(|modifier| Visibility::from_keyword(&modifier.name))
}

fn write_visibility(modifiers: &[Modifier]) -> Option<Visibility> {
    modifiers
        .iter()
        .filter(|modifier| modifier.detail.as_deref() == Some("set"))
        .find_map(|modifier| Visibility::from_keyword(&modifier.name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn variable(modifiers: &[Modifier]) -> RawVariable {
        let mut variable = RawVariable::stored("field", "Int");
        variable.modifiers.extend(modifiers.iter().cloned());
        variable
    }

    #[rstest]
    #[case(&[], Visibility::Internal, Visibility::Internal)]
    #[case(&[Modifier::plain("private")], Visibility::Private, Visibility::Private)]
    #[case(&[Modifier::plain("public")], Visibility::Public, Visibility::Public)]
    #[case(
        &[Modifier::plain("public"), Modifier::qualified("private", "set")],
        Visibility::Public,
        Visibility::Private
    )]
    #[case(&[Modifier::qualified("fileprivate", "set")], Visibility::Internal, Visibility::FilePrivate)]
    #[case(
        &[Modifier::plain("private"), Modifier::qualified("public", "set")],
        Visibility::Private,
        Visibility::Private
    )]
    #[case(&[Modifier::plain("secret")], Visibility::Internal, Visibility::Internal)]
    #[case(&[Modifier::qualified("unowned", "safe")], Visibility::Internal, Visibility::Internal)]
    fn test_visibility(
        #[case] modifiers: &[Modifier],
        #[case] read: Visibility,
        #[case] write: Visibility,
    ) {
        let member = classify(&RawMember::Variable(variable(modifiers))).unwrap();
        assert_eq!(member.read_visibility, read);
        assert_eq!(member.write_visibility, write);
        assert!(member.write_visibility <= member.read_visibility);
    }

    #[test]
    fn test_computed_takes_precedence_over_static() {
        let raw = variable(&[Modifier::plain("static")]).with_accessor(AccessorBlock::Computed);
        let member = classify(&RawMember::Variable(raw)).unwrap();
        assert_eq!(member.storage, StorageKind::Computed);
        assert!(!member.is_eligible());
    }

    #[rstest]
    #[case(&[Modifier::plain("static")])]
    #[case(&[Modifier::plain("public"), Modifier::plain("class")])]
    fn test_static_stored(#[case] modifiers: &[Modifier]) {
        let member = classify(&RawMember::Variable(variable(modifiers))).unwrap();
        assert_eq!(member.storage, StorageKind::StaticStored);
    }

    #[test]
    fn test_observers_keep_storage() {
        let raw = variable(&[]).with_accessor(AccessorBlock::Observers);
        let member = classify(&RawMember::Variable(raw)).unwrap();
        assert_eq!(member.storage, StorageKind::Stored);
        assert!(member.is_eligible());
    }

    #[test]
    fn test_non_fields_are_skipped() {
        assert_eq!(classify(&RawMember::Initializer), None);
        assert_eq!(classify(&RawMember::Other), None);
        assert_eq!(
            classify(&RawMember::Function {
                name: Some("run".to_string())
            }),
            None
        );
        let mut unnamed = variable(&[]);
        unnamed.name = None;
        assert_eq!(classify(&RawMember::Variable(unnamed)), None);
    }

    #[test]
    fn test_missing_type_is_kept() {
        let mut untyped = variable(&[]);
        untyped.declared_type = None;
        let member = classify(&RawMember::Variable(untyped)).unwrap();
        assert_eq!(member.declared_type, None);
        assert!(member.is_eligible());
    }
}
