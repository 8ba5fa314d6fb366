//! Swift-like text for synthesized lenses.
//!
//! ```text
//! public static let ageLens = Lens<Person, Int>(
//!     get: { $0.age },
//!     set: { newValue, whole in
//!         Person(
//!             name: whole.name,
//!             age: newValue
//!         )
//!     }
//! )
//! ```

use std::fmt::Write as _;

use crate::config::GeneratorConfig;
use crate::emit::SynthesizedLens;
use crate::visibility::Visibility;

impl SynthesizedLens {
    /// Renders the lens as a member declaration.
    ///
    /// `open` is written as `public`: a static stored constant cannot be
    /// overridden.
    #[must_use]
    pub fn render(&self, config: &GeneratorConfig) -> String {
        let indent = &config.indent;
        let mut text = String::new();

        text.push_str(visibility_prefix(self.visibility, config));
        let _ = writeln!(
            text,
            "static let {} = {}<{}, {}>(",
            self.name, config.lens_type, self.owner_type_name, self.value_type_name
        );
        let _ = writeln!(text, "{indent}get: {{ $0.{} }},", self.field);
        let _ = writeln!(
            text,
            "{indent}set: {{ {}, {} in",
            config.value_parameter, config.instance_parameter
        );
        let _ = writeln!(text, "{indent}{indent}{}(", self.owner_type_name);
        for argument in &self.arguments {
            let _ = writeln!(
                text,
                "{indent}{indent}{indent}{}: {}{}",
                argument.label,
                argument.expression(&config.value_parameter, &config.instance_parameter),
                if argument.trailing_separator { "," } else { "" }
            );
        }
        let _ = writeln!(text, "{indent}{indent})");
        let _ = writeln!(text, "{indent}}}");
        text.push(')');
        text
    }
}

fn visibility_prefix(visibility: Visibility, config: &GeneratorConfig) -> &'static str {
    match visibility {
        Visibility::Private => "private ",
        Visibility::FilePrivate => "fileprivate ",
        Visibility::Internal if config.explicit_internal => "internal ",
        Visibility::Internal => "",
        Visibility::Public | Visibility::Open => "public ",
    }
}
