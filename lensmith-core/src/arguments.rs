//! Reconstruction argument lists.
//!
//! A lens setter rebuilds its owner with one labeled argument per stored
//! field, in declaration order. The field being replaced takes the new
//! value; every other field is read off the original instance.

use crate::member::Member;

/// The expression passed for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgumentValue {
    /// The setter's new-value parameter.
    NewValue,
    /// The named field read off the setter's original-instance parameter.
    Original(String),
}

/// One `label: expression` slot of a memberwise initializer call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconstructionArgument {
    /// The field name used as the argument label.
    pub label: String,
    /// The argument expression.
    pub value: ArgumentValue,
    /// Whether a `,` follows this argument. False only for the last slot.
    pub trailing_separator: bool,
}

impl ReconstructionArgument {
    /// Spells the argument expression with the given parameter names.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lensmith_core::{ArgumentValue, ReconstructionArgument};
    ///
    /// let argument = ReconstructionArgument {
    ///     label: "age".to_string(),
    ///     value: ArgumentValue::Original("age".to_string()),
    ///     trailing_separator: true,
    /// };
    /// assert_eq!(argument.expression("newValue", "whole"), "whole.age");
    /// ```
    #[must_use]
    pub fn expression(&self, value_parameter: &str, instance_parameter: &str) -> String {
        match &self.value {
            ArgumentValue::NewValue => value_parameter.to_string(),
            ArgumentValue::Original(field) => format!("{instance_parameter}.{field}"),
        }
    }
}

/// Builds the argument list that rebuilds the owner with `target` replaced.
///
/// `eligible` must be the stored members in declaration order. The result
/// has one entry per eligible member, in the same order, and exactly
/// `eligible.len() - 1` separators.
///
/// # Examples
///
/// ```rust
/// use lensmith_core::{ArgumentValue, build_arguments, parse_declaration, scan};
///
/// let raw = parse_declaration("struct Size { var width: Int\n var height: Int }").unwrap();
/// let eligible = scan(&raw).unwrap().eligible_members();
/// let arguments = build_arguments(&eligible, &eligible[1]);
///
/// assert_eq!(arguments[0].value, ArgumentValue::Original("width".to_string()));
/// assert!(arguments[0].trailing_separator);
/// assert_eq!(arguments[1].value, ArgumentValue::NewValue);
/// assert!(!arguments[1].trailing_separator);
/// ```
#[must_use]
pub fn build_arguments(eligible: &[Member], target: &Member) -> Vec<ReconstructionArgument> {
    let last = eligible.len().saturating_sub(1);
    eligible
        .iter()
        .enumerate()
        .map(|(index, member)| ReconstructionArgument {
            label: member.name.clone(),
            value: if member.name == target.name {
                ArgumentValue::NewValue
            } else {
                ArgumentValue::Original(member.name.clone())
            },
            trailing_separator: index < last,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::member::StorageKind;
    use crate::visibility::Visibility;
    use proptest::prelude::*;

    fn member(name: &str) -> Member {
        Member {
            name: name.to_string(),
            declared_type: Some("Int".to_string()),
            storage: StorageKind::Stored,
            read_visibility: Visibility::Internal,
            write_visibility: Visibility::Internal,
        }
    }

    #[test]
    fn test_single_member_has_no_separator() {
        let only = member("value");
        let arguments = build_arguments(std::slice::from_ref(&only), &only);
        assert_eq!(
            arguments,
            vec![ReconstructionArgument {
                label: "value".to_string(),
                value: ArgumentValue::NewValue,
                trailing_separator: false,
            }]
        );
    }

    #[test]
    fn test_target_in_the_middle() {
        let eligible = vec![member("a"), member("b"), member("c")];
        let arguments = build_arguments(&eligible, &eligible[1]);
        let rendered: Vec<_> = arguments
            .iter()
            .map(|argument| {
                format!(
                    "{}: {}{}",
                    argument.label,
                    argument.expression("newValue", "whole"),
                    if argument.trailing_separator { "," } else { "" }
                )
            })
            .collect();
        assert_eq!(rendered, vec!["a: whole.a,", "b: newValue,", "c: whole.c"]);
    }

    #[test]
    fn test_empty_list() {
        assert!(build_arguments(&[], &member("ghost")).is_empty());
    }

    proptest! {
        #[test]
        fn prop_one_slot_per_member_in_order(count in 1usize..24, target_seed in any::<usize>()) {
            let eligible: Vec<Member> = (0..count).map(|index| member(&format!("field{index}"))).collect();
            let target = &eligible[target_seed % count];
            let arguments = build_arguments(&eligible, target);

            prop_assert_eq!(arguments.len(), count);
            let separators = arguments.iter().filter(|argument| argument.trailing_separator).count();
            prop_assert_eq!(separators, count - 1);
            prop_assert!(!arguments[count - 1].trailing_separator);

            for (argument, member) in arguments.iter().zip(&eligible) {
                prop_assert_eq!(&argument.label, &member.name);
            }
            let replaced: Vec<_> = arguments
                .iter()
                .filter(|argument| argument.value == ArgumentValue::NewValue)
                .collect();
            prop_assert_eq!(replaced.len(), 1);
            prop_assert_eq!(&replaced[0].label, &target.name);
        }
    }
}
