//! The generation pipeline.
//!
//! Scan, filter to stored members, emit one lens per member. Every anomaly
//! degrades to less output; nothing here returns an error.

use crate::config::GeneratorConfig;
use crate::declaration::scan;
use crate::emit::{SynthesizedLens, emit};
use crate::syntax::{RawDeclaration, parse_declarations_until_error};

/// Synthesizes the lenses of one declaration in field order.
///
/// Unsupported declarations and invalid configurations yield an empty
/// vector. Fields without a declared type are skipped individually.
///
/// # Examples
///
/// ```rust
/// use lensmith_core::{GeneratorConfig, Visibility, expand_declaration, parse_declaration};
///
/// let raw = parse_declaration(
///     "struct Pair { public let left: Int\n fileprivate var right: Int\n static var count = 0 }",
/// )
/// .unwrap();
/// let lenses = expand_declaration(&raw, &GeneratorConfig::default());
///
/// let summary: Vec<_> = lenses
///     .iter()
///     .map(|lens| (lens.name.as_str(), lens.visibility))
///     .collect();
/// assert_eq!(
///     summary,
///     vec![("leftLens", Visibility::Public), ("rightLens", Visibility::FilePrivate)]
/// );
/// ```
#[must_use]
pub fn expand_declaration(raw: &RawDeclaration, config: &GeneratorConfig) -> Vec<SynthesizedLens> {
    if let Err(error) = config.validate() {
        tracing::debug!(%error, "invalid generator configuration");
        return Vec::new();
    }
    let Some(declaration) = scan(raw) else {
        return Vec::new();
    };

    let eligible = declaration.eligible_members();
    let lenses: Vec<_> = eligible
        .iter()
        .filter_map(|member| emit(&declaration.name, &eligible, member, &config.lens_suffix))
        .collect();
    tracing::debug!(
        owner = %declaration.name,
        fields = eligible.len(),
        lenses = lenses.len(),
        "expanded declaration"
    );
    lenses
}

/// Renders the lenses of every type declared in `source`.
///
/// Declarations are processed independently and in source order. When the
/// text contains a lexical or syntax error, the declarations closed before
/// it still produce lenses; the declaration containing the error and
/// everything after it produce none.
///
/// # Examples
///
/// ```rust
/// use lensmith_core::{GeneratorConfig, expand_source};
///
/// let lenses = expand_source("struct Box { let item: String }", &GeneratorConfig::default());
/// assert_eq!(
///     lenses,
///     vec![
///         "static let itemLens = Lens<Box, String>(\n    get: { $0.item },\n    set: { newValue, whole in\n        Box(\n            item: newValue\n        )\n    }\n)"
///             .to_string()
///     ]
/// );
/// ```
#[must_use]
pub fn expand_source(source: &str, config: &GeneratorConfig) -> Vec<String> {
    let (declarations, error) = parse_declarations_until_error(source);
    if let Some(error) = error {
        tracing::debug!(
            %error,
            recovered = declarations.len(),
            "could not parse the whole declaration source"
        );
    }
    declarations
        .iter()
        .flat_map(|declaration| expand_declaration(declaration, config))
        .map(|lens| lens.render(config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{DeclarationKind, RawMember, RawVariable};

    #[test]
    fn test_invalid_config_yields_nothing() {
        let raw = RawDeclaration::record(
            "Point",
            vec![RawMember::Variable(RawVariable::stored("x", "Int"))],
        );
        let config = GeneratorConfig::default().with_parameters("same", "same");
        assert!(expand_declaration(&raw, &config).is_empty());
    }

    #[test]
    fn test_unsupported_declaration_yields_nothing() {
        let raw = RawDeclaration {
            kind: DeclarationKind::Enum,
            ..RawDeclaration::record("Choice", Vec::new())
        };
        assert!(expand_declaration(&raw, &GeneratorConfig::default()).is_empty());
    }

    #[test]
    fn test_unparsable_source_yields_nothing() {
        assert!(expand_source("struct Broken { let s = \"", &GeneratorConfig::default()).is_empty());
    }

    #[test]
    fn test_declarations_before_a_parse_error_still_expand() {
        let source = "struct Valid { let x: Int }\nstruct Broken { let s = \"";
        let rendered = expand_source(source, &GeneratorConfig::default());
        assert_eq!(rendered.len(), 1);
        assert!(rendered[0].starts_with("static let xLens = Lens<Valid, Int>("));
    }

    #[test]
    fn test_untyped_member_keeps_its_slot() {
        let raw = RawDeclaration::record(
            "Mixed",
            vec![
                RawMember::Variable(RawVariable {
                    declared_type: None,
                    ..RawVariable::stored("inferred", "")
                }),
                RawMember::Variable(RawVariable::stored("typed", "Int")),
            ],
        );
        let lenses = expand_declaration(&raw, &GeneratorConfig::default());
        assert_eq!(lenses.len(), 1);
        assert_eq!(lenses[0].name, "typedLens");
        let labels: Vec<_> = lenses[0]
            .arguments
            .iter()
            .map(|argument| argument.label.as_str())
            .collect();
        assert_eq!(labels, vec!["inferred", "typed"]);
    }
}
