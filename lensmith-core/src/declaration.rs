//! Declaration scanning.

use std::collections::HashSet;

use crate::member::{Member, classify};
use crate::syntax::RawDeclaration;

/// A record-like declaration with its classified members.
///
/// `members` keeps source order, which is the order the memberwise
/// initializer expects its arguments in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Simple type name.
    pub name: String,
    /// Every field-like member, eligible or not, in source order.
    pub members: Vec<Member>,
}

impl Declaration {
    /// Stored members in source order.
    pub fn eligible(&self) -> impl Iterator<Item = &Member> {
        self.members.iter().filter(|member| member.is_eligible())
    }

    /// Stored members collected into a vector.
    #[must_use]
    pub fn eligible_members(&self) -> Vec<Member> {
        self.eligible().cloned().collect()
    }
}

/// Scans a raw declaration.
///
/// Returns `None` when the declaration is not a record-like type or has no
/// name. Members that are not fields are dropped and occupy no slot. A
/// field name declared more than once keeps only its first declaration.
///
/// # Examples
///
/// ```rust
/// use lensmith_core::{parse_declaration, scan};
///
/// let raw = parse_declaration(
///     "struct User { let id: Int\n func greet() {}\n var name: String\n static let anonymous = 0 }",
/// )
/// .unwrap();
/// let declaration = scan(&raw).unwrap();
///
/// assert_eq!(declaration.name, "User");
/// assert_eq!(declaration.members.len(), 3);
/// let eligible: Vec<_> = declaration.eligible().map(|member| member.name.as_str()).collect();
/// assert_eq!(eligible, vec!["id", "name"]);
/// ```
#[must_use]
pub fn scan(raw: &RawDeclaration) -> Option<Declaration> {
    if !raw.kind.is_record_like() {
        tracing::debug!(kind = ?raw.kind, name = ?raw.name, "declaration is not record-like");
        return None;
    }
    let Some(name) = raw.name.clone() else {
        tracing::debug!("declaration has no name");
        return None;
    };
    let mut seen = HashSet::new();
    let members = raw
        .members
        .iter()
        .filter_map(classify)
        .filter(|member| {
            let first = seen.insert(member.name.clone());
            if !first {
                tracing::debug!(owner = %name, field = %member.name, "skipping redeclared member");
            }
            first
        })
        .collect();
    Some(Declaration { name, members })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::member::StorageKind;
    use crate::syntax::{AccessorBlock, DeclarationKind, Modifier, RawMember, RawVariable};

    fn sample() -> RawDeclaration {
        RawDeclaration::record(
            "Sample",
            vec![
                RawMember::Variable(RawVariable::stored("first", "Int")),
                RawMember::Initializer,
                RawMember::Variable(
                    RawVariable::stored("computed", "Int").with_accessor(AccessorBlock::Computed),
                ),
                RawMember::Variable(
                    RawVariable::stored("shared", "Int").with_modifier(Modifier::plain("static")),
                ),
                RawMember::Function { name: None },
                RawMember::Variable(RawVariable::stored("second", "String")),
            ],
        )
    }

    #[test]
    fn test_scan_keeps_field_order() {
        let declaration = scan(&sample()).unwrap();
        let names: Vec<_> = declaration
            .members
            .iter()
            .map(|member| member.name.as_str())
            .collect();
        assert_eq!(names, vec!["first", "computed", "shared", "second"]);
        assert_eq!(declaration.members[1].storage, StorageKind::Computed);
        assert_eq!(declaration.members[2].storage, StorageKind::StaticStored);
    }

    #[test]
    fn test_eligible_subset() {
        let declaration = scan(&sample()).unwrap();
        let eligible: Vec<_> = declaration
            .eligible_members()
            .into_iter()
            .map(|member| member.name)
            .collect();
        assert_eq!(eligible, vec!["first".to_string(), "second".to_string()]);
    }

    #[test]
    fn test_unsupported_kinds() {
        for kind in [
            DeclarationKind::Class,
            DeclarationKind::Enum,
            DeclarationKind::Actor,
            DeclarationKind::Protocol,
            DeclarationKind::Extension,
        ] {
            let raw = RawDeclaration {
                kind,
                ..sample()
            };
            assert_eq!(scan(&raw), None);
        }
    }

    #[test]
    fn test_unnamed_declaration() {
        let raw = RawDeclaration {
            name: None,
            ..sample()
        };
        assert_eq!(scan(&raw), None);
    }

    #[test]
    fn test_redeclared_member_keeps_first() {
        let raw = RawDeclaration::record(
            "Twice",
            vec![
                RawMember::Variable(RawVariable::stored("id", "Int")),
                RawMember::Variable(RawVariable::stored("name", "String")),
                RawMember::Variable(RawVariable::stored("id", "String")),
            ],
        );
        let declaration = scan(&raw).unwrap();
        let fields: Vec<_> = declaration
            .members
            .iter()
            .map(|member| (member.name.as_str(), member.declared_type.as_deref()))
            .collect();
        assert_eq!(fields, vec![("id", Some("Int")), ("name", Some("String"))]);
    }
}
