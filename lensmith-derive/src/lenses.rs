//! Implementation of the `#[derive(Lenses)]` macro.
//!
//! The struct is lowered into a [`RawDeclaration`], the core pipeline
//! decides which lenses exist and how each setter rebuilds the struct, and
//! this module only spells the result as Rust tokens.

use std::collections::HashMap;

use lensmith_core::{
    ArgumentValue, DeclarationKind, GeneratorConfig, Modifier, RawDeclaration, RawMember,
    RawVariable, SynthesizedLens, Visibility, expand_declaration,
};
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{ToTokens, format_ident, quote};
use syn::ext::IdentExt;
use syn::{Attribute, Data, DeriveInput, Field, Fields, Ident, LitStr, parse_macro_input};

/// Main implementation of the Lenses derive macro.
pub fn derive_lenses_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    TokenStream::from(expand(&input))
}

fn config() -> GeneratorConfig {
    GeneratorConfig::default()
        .with_lens_suffix("_lens")
        .with_parameters("value", "source")
}

/// Expands a parsed derive input into the generated `impl` block.
pub(crate) fn expand(input: &DeriveInput) -> TokenStream2 {
    let fields = named_fields(input);
    let declaration = lower(input);
    let config = config();

    let lens_methods: Vec<TokenStream2> = expand_declaration(&declaration, &config)
        .iter()
        .filter_map(|lens| render_lens(lens, &fields, &config))
        .collect();
    if lens_methods.is_empty() {
        return TokenStream2::new();
    }

    let name = &input.ident;
    let (impl_generics, type_generics, where_clause) = input.generics.split_for_impl();
    quote! {
        #[allow(dead_code)]
        impl #impl_generics #name #type_generics #where_clause {
            #(#lens_methods)*
        }
    }
}

/// Named fields keyed by their unescaped name.
fn named_fields(input: &DeriveInput) -> HashMap<String, &Field> {
    match &input.data {
        Data::Struct(data) => data
            .fields
            .iter()
            .filter_map(|field| Some((field.ident.as_ref()?.unraw().to_string(), field)))
            .collect(),
        Data::Enum(_) | Data::Union(_) => HashMap::new(),
    }
}

/// Builds the raw declaration the core pipeline consumes.
fn lower(input: &DeriveInput) -> RawDeclaration {
    let (kind, members) = match &input.data {
        Data::Struct(data) => (DeclarationKind::Struct, lower_fields(&data.fields)),
        Data::Enum(_) => (DeclarationKind::Enum, Vec::new()),
        Data::Union(_) => (DeclarationKind::Class, Vec::new()),
    };
    RawDeclaration {
        kind,
        name: Some(input.ident.unraw().to_string()),
        members,
    }
}

/// Every field is stored; tuple fields have no name and are dropped by the
/// classifier.
fn lower_fields(fields: &Fields) -> Vec<RawMember> {
    fields
        .iter()
        .map(|field| {
            let mut variable = RawVariable {
                name: field.ident.as_ref().map(|ident| ident.unraw().to_string()),
                declared_type: Some(field.ty.to_token_stream().to_string()),
                ..RawVariable::stored("", "")
            };
            variable.modifiers.push(Modifier::plain(read_keyword(&field.vis)));
            if let Some(setter) = setter_modifier(field) {
                variable.modifiers.push(setter);
            }
            RawMember::Variable(variable)
        })
        .collect()
}

/// Maps a Rust visibility onto the core's access levels.
///
/// `pub(in path)` is treated like `pub(super)`, which is never wider.
fn read_keyword(visibility: &syn::Visibility) -> &'static str {
    match visibility {
        syn::Visibility::Public(_) => "public",
        syn::Visibility::Restricted(restricted)
            if restricted.in_token.is_none() && restricted.path.is_ident("crate") =>
        {
            "internal"
        }
        syn::Visibility::Restricted(restricted)
            if restricted.in_token.is_none() && restricted.path.is_ident("self") =>
        {
            "private"
        }
        syn::Visibility::Restricted(_) => "fileprivate",
        syn::Visibility::Inherited => "private",
    }
}

/// Reads `#[lens(set = "...")]`.
fn setter_modifier(field: &Field) -> Option<Modifier> {
    let mut declared = None;
    for attribute in field.attrs.iter().filter(|attribute| attribute.path().is_ident("lens")) {
        // Malformed arguments are ignored like any other unrecognized annotation.
        let _ = attribute.parse_nested_meta(|meta| {
            if meta.path.is_ident("set") {
                let value: LitStr = meta.value()?.parse()?;
                declared = Some(value.value());
            }
            Ok(())
        });
    }
    declared.map(|text| Modifier::qualified(setter_keyword(&text), "set"))
}

fn setter_keyword(text: &str) -> String {
    match syn::parse_str::<syn::Visibility>(text) {
        Ok(visibility) if !matches!(visibility, syn::Visibility::Inherited) => {
            read_keyword(&visibility).to_string()
        }
        _ => text.trim().to_string(),
    }
}

/// `#[cfg(...)]` attributes, which must follow a field into every struct
/// literal that names it.
fn cfg_attributes(field: &Field) -> Vec<&Attribute> {
    field
        .attrs
        .iter()
        .filter(|attribute| attribute.path().is_ident("cfg"))
        .collect()
}

fn render_visibility(visibility: Visibility) -> TokenStream2 {
    match visibility {
        Visibility::Private => TokenStream2::new(),
        Visibility::FilePrivate => quote!(pub(super)),
        Visibility::Internal => quote!(pub(crate)),
        Visibility::Public | Visibility::Open => quote!(pub),
    }
}

fn render_lens(
    lens: &SynthesizedLens,
    fields: &HashMap<String, &Field>,
    config: &GeneratorConfig,
) -> Option<TokenStream2> {
    let field = fields.get(&lens.field)?;
    let field_ident = field.ident.as_ref()?;
    let field_type = &field.ty;
    let visibility = render_visibility(lens.visibility);
    let method_name = format_ident!("{}", lens.name);
    let value = format_ident!("{}", config.value_parameter);
    let source = format_ident!("{}", config.instance_parameter);
    let documentation = format!("Returns a lens focusing on the `{}` field.", lens.field);

    let field_cfgs = cfg_attributes(field);

    let arguments = lens
        .arguments
        .iter()
        .map(|argument| {
            let entry = fields.get(&argument.label)?;
            let label: &Ident = entry.ident.as_ref()?;
            let cfgs = cfg_attributes(entry);
            let expression = match &argument.value {
                ArgumentValue::NewValue => quote!(#value),
                ArgumentValue::Original(name) => {
                    let original: &Ident = fields.get(name)?.ident.as_ref()?;
                    quote!(#source.#original)
                }
            };
            let separator = argument.trailing_separator.then(|| quote!(,));
            Some(quote!(#(#cfgs)* #label: #expression #separator))
        })
        .collect::<Option<Vec<_>>>()?;

    Some(quote! {
        #(#field_cfgs)*
        #[doc = #documentation]
        #[inline]
        #[must_use]
        #visibility fn #method_name() -> impl ::lensmith::optics::Lens<Self, #field_type> + Clone {
            ::lensmith::optics::FunctionLens::new(
                |#source: &Self| &#source.#field_ident,
                |#value: #field_type, #source: Self| Self { #(#arguments)* },
            )
        }
    })
}
