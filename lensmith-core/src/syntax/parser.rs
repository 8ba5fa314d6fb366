//! Recursive-descent reader for Swift-like type declarations.
//!
//! The parser reads just enough structure to build [`RawDeclaration`]s:
//! type introducers, member introducers, modifiers, binding names, type
//! annotations and accessor blocks. Function bodies, initializer
//! expressions and nested types are skipped as balanced token runs.

use smallvec::SmallVec;

use super::ast::{
    AccessorBlock, Binding, DeclarationKind, Modifier, RawDeclaration, RawMember, RawVariable,
};
use super::lexer::{Token, TokenKind, tokenize};
use crate::error::ParseError;

const MODIFIER_KEYWORDS: &[&str] = &[
    "private",
    "fileprivate",
    "internal",
    "package",
    "public",
    "open",
    "static",
    "class",
    "final",
    "lazy",
    "weak",
    "unowned",
    "mutating",
    "nonmutating",
    "override",
    "required",
    "convenience",
    "dynamic",
    "optional",
    "nonisolated",
    "indirect",
    "prefix",
    "postfix",
    "infix",
    "distributed",
];

const DECLARATION_KEYWORDS: &[&str] = &[
    "var",
    "let",
    "func",
    "init",
    "deinit",
    "subscript",
    "typealias",
    "associatedtype",
    "case",
    "import",
    "struct",
    "class",
    "enum",
    "actor",
    "protocol",
    "extension",
    "operator",
    "precedencegroup",
    "macro",
];

const OBSERVER_KEYWORDS: &[&str] = &["willSet", "didSet"];

type Prefix = (Vec<String>, SmallVec<[Modifier; 2]>);

/// Parses every top-level type declaration in `source`.
///
/// Imports, free functions, attributes and compiler-directive lines around
/// the declarations are skipped.
///
/// # Errors
///
/// Returns a [`ParseError`] when the text cannot be tokenized or a type body
/// is not closed.
///
/// # Examples
///
/// ```rust
/// use lensmith_core::{DeclarationKind, parse_declarations};
///
/// let declarations = parse_declarations("struct A { let x: Int }\nenum B { case b }").unwrap();
/// assert_eq!(declarations.len(), 2);
/// assert_eq!(declarations[0].kind, DeclarationKind::Struct);
/// assert_eq!(declarations[1].name.as_deref(), Some("B"));
/// ```
pub fn parse_declarations(source: &str) -> Result<Vec<RawDeclaration>, ParseError> {
    match parse_declarations_until_error(source) {
        (declarations, None) => Ok(declarations),
        (_, Some(error)) => Err(error),
    }
}

/// Parses the top-level type declarations that are complete before the
/// first error in `source`, and reports that error.
///
/// A declaration the error falls inside is dropped; every declaration
/// closed before it is kept.
pub(crate) fn parse_declarations_until_error(
    source: &str,
) -> (Vec<RawDeclaration>, Option<ParseError>) {
    let (tokens, lexical_error) = tokenize(source);
    let mut declarations = Vec::new();
    let syntax_error = Parser::new(source, &tokens)
        .parse_file(&mut declarations)
        .err();
    (declarations, lexical_error.or(syntax_error))
}

/// Parses the first top-level type declaration in `source`.
///
/// # Errors
///
/// Returns [`ParseError::NoDeclaration`] if `source` declares no type, or
/// any error [`parse_declarations`] reports.
pub fn parse_declaration(source: &str) -> Result<RawDeclaration, ParseError> {
    parse_declarations(source)?
        .into_iter()
        .next()
        .ok_or(ParseError::NoDeclaration)
}

struct Parser<'a> {
    source: &'a str,
    tokens: &'a [Token],
    position: usize,
}

impl<'a> Parser<'a> {
    const fn new(source: &'a str, tokens: &'a [Token]) -> Self {
        Self {
            source,
            tokens,
            position: 0,
        }
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.position)
    }

    fn peek_at(&self, offset: usize) -> Option<&'a Token> {
        self.tokens.get(self.position + offset)
    }

    fn peek_identifier(&self) -> Option<&'a str> {
        self.peek().and_then(Token::identifier)
    }

    fn peek_punct(&self, expected: char) -> bool {
        self.peek().is_some_and(|token| token.is_punct(expected))
    }

    fn bump(&mut self) -> Option<&'a Token> {
        let token = self.peek()?;
        self.position += 1;
        Some(token)
    }

    fn bump_identifier(&mut self) -> Option<String> {
        let name = self.peek_identifier()?.to_string();
        self.position += 1;
        Some(name)
    }

    fn parse_file(&mut self, declarations: &mut Vec<RawDeclaration>) -> Result<(), ParseError> {
        let mut conditions = Conditions::default();
        while let Some(token) = self.peek() {
            if token.is_punct('#') && token.newline_before {
                self.skip_directive(&mut conditions);
                continue;
            }
            if token.is_punct('}') {
                return Err(unexpected(self.source, token, "a declaration"));
            }
            self.parse_prefix();
            match self.peek_identifier().and_then(DeclarationKind::from_keyword) {
                Some(kind) => {
                    let declaration = self.parse_type_declaration(kind)?;
                    if conditions.is_active() {
                        declarations.push(declaration);
                    }
                }
                None => {
                    self.skip_declaration()?;
                    if self.peek_punct(';') {
                        self.bump();
                    }
                }
            }
        }
        Ok(())
    }

    /// Reads a type declaration starting at its introducer keyword.
    fn parse_type_declaration(
        &mut self,
        kind: DeclarationKind,
    ) -> Result<RawDeclaration, ParseError> {
        self.bump();
        let name = self.bump_identifier();
        loop {
            match self.bump() {
                Some(token) if token.is_punct('{') => break,
                Some(_) => {}
                None => {
                    return Err(ParseError::UnexpectedEnd {
                        context: "a type body",
                    });
                }
            }
        }
        let members = self.parse_members()?;
        Ok(RawDeclaration {
            kind,
            name,
            members,
        })
    }

    /// Reads members up to and including the closing brace of a type body.
    fn parse_members(&mut self) -> Result<Vec<RawMember>, ParseError> {
        let mut members = Vec::new();
        let mut conditions = Conditions::default();
        loop {
            let Some(token) = self.peek() else {
                return Err(ParseError::UnexpectedEnd {
                    context: "a type body",
                });
            };
            if token.is_punct('}') {
                self.bump();
                return Ok(members);
            }
            if token.is_punct(';') {
                self.bump();
                continue;
            }
            if token.is_punct('#') && token.newline_before {
                self.skip_directive(&mut conditions);
                continue;
            }

            let first_member = members.len();
            let (attributes, modifiers) = self.parse_prefix();
            let Some(keyword) = self.peek_identifier() else {
                self.skip_declaration()?;
                if conditions.is_active() {
                    members.push(RawMember::Other);
                }
                continue;
            };
            match keyword {
                "var" | "let" => {
                    let variables = self.parse_variables(&attributes, &modifiers)?;
                    members.extend(variables.into_iter().map(RawMember::Variable));
                }
                "func" => {
                    self.bump();
                    let name = self.bump_identifier();
                    self.skip_declaration()?;
                    members.push(RawMember::Function { name });
                }
                "init" | "deinit" => {
                    self.bump();
                    self.skip_declaration()?;
                    members.push(RawMember::Initializer);
                }
                keyword if DeclarationKind::from_keyword(keyword).is_some() => {
                    self.bump();
                    let name = self.bump_identifier();
                    self.skip_declaration()?;
                    members.push(RawMember::NestedType { name });
                }
                _ => {
                    self.skip_declaration()?;
                    members.push(RawMember::Other);
                }
            }
            if !conditions.is_active() {
                members.truncate(first_member);
            }
        }
    }

    /// Consumes attributes and modifiers in front of a declaration.
    fn parse_prefix(&mut self) -> Prefix {
        let mut attributes = Vec::new();
        let mut modifiers = SmallVec::new();
        loop {
            if self.peek_punct('@') {
                self.bump();
                if let Some(name) = self.bump_identifier() {
                    attributes.push(name);
                }
                if self
                    .peek()
                    .is_some_and(|token| token.is_punct('(') && !token.newline_before)
                {
                    // An unclosed argument list simply runs to the end of input.
                    let _ = self.skip_balanced();
                }
                continue;
            }
            let Some(word) = self.peek_identifier() else {
                break;
            };
            if !MODIFIER_KEYWORDS.contains(&word) || (word == "class" && !self.class_is_modifier())
            {
                break;
            }
            self.bump();
            let detail = self.parse_modifier_detail();
            modifiers.push(Modifier {
                name: word.to_string(),
                detail,
            });
        }
        (attributes, modifiers)
    }

    /// `class var` is a modifier, `class Name` introduces a type.
    fn class_is_modifier(&self) -> bool {
        self.peek_at(1)
            .and_then(Token::identifier)
            .is_some_and(|next| {
                matches!(next, "var" | "let" | "func" | "subscript")
                    || (next != "class" && MODIFIER_KEYWORDS.contains(&next))
            })
    }

    /// Reads the `(set)` of `private(set)`.
    fn parse_modifier_detail(&mut self) -> Option<String> {
        let open = self.peek()?;
        if !open.is_punct('(') || open.newline_before {
            return None;
        }
        let detail = self.peek_at(1)?.identifier()?.to_string();
        if !self.peek_at(2)?.is_punct(')') {
            return None;
        }
        self.position += 3;
        Some(detail)
    }

    /// Reads `let`/`var` and every comma-separated binding that follows.
    fn parse_variables(
        &mut self,
        attributes: &[String],
        modifiers: &SmallVec<[Modifier; 2]>,
    ) -> Result<Vec<RawVariable>, ParseError> {
        let binding = if self.peek_identifier() == Some("let") {
            Binding::Let
        } else {
            Binding::Var
        };
        self.bump();

        let mut variables = Vec::new();
        let mut awaiting_type: Vec<RawVariable> = Vec::new();
        loop {
            let name = if self.peek_punct('(') {
                self.skip_balanced()?;
                None
            } else {
                self.bump_identifier()
            };
            let mut variable = RawVariable {
                attributes: attributes.to_vec(),
                modifiers: modifiers.clone(),
                binding,
                name,
                declared_type: None,
                has_initializer: false,
                accessor: None,
            };
            if self.peek_punct(':') {
                self.bump();
                variable.declared_type = self.parse_type_text();
            }
            if self.peek_punct('=') {
                self.bump();
                variable.has_initializer = true;
                self.skip_expression()?;
            }
            if self.peek_punct('{') {
                variable.accessor = Some(self.parse_accessor_block()?);
            }

            if let Some(declared_type) = &variable.declared_type {
                for mut earlier in awaiting_type.drain(..) {
                    earlier.declared_type = Some(declared_type.clone());
                    variables.push(earlier);
                }
                variables.push(variable);
            } else if !variable.has_initializer
                && variable.accessor.is_none()
                && self.peek_punct(',')
            {
                awaiting_type.push(variable);
            } else {
                variables.append(&mut awaiting_type);
                variables.push(variable);
            }

            if self.peek_punct(',') {
                self.bump();
            } else {
                break;
            }
        }
        variables.append(&mut awaiting_type);
        Ok(variables)
    }

    /// Reads a type annotation and returns its source text.
    fn parse_type_text(&mut self) -> Option<String> {
        let first = self.position;
        let mut depth = 0usize;
        while let Some(token) = self.peek() {
            if depth == 0 {
                let stops = match &token.kind {
                    TokenKind::Punct('=' | '{' | '}' | ',' | ';') => true,
                    TokenKind::Arrow | TokenKind::Punct('.' | '&') => false,
                    _ => token.newline_before && self.position > first,
                };
                if stops {
                    break;
                }
            }
            match token.kind {
                TokenKind::Punct('(' | '[' | '<') => depth += 1,
                TokenKind::Punct(')' | ']' | '>') => depth = depth.saturating_sub(1),
                _ => {}
            }
            self.bump();
        }
        if self.position == first {
            return None;
        }
        let start = self.tokens[first].start;
        let end = self.tokens[self.position - 1].end;
        Some(collapse_whitespace(&self.source[start..end]))
    }

    /// Skips an initializer expression.
    fn skip_expression(&mut self) -> Result<(), ParseError> {
        let first = self.position;
        while let Some(token) = self.peek() {
            if self.position > first && token.newline_before && self.starts_declaration() {
                return Ok(());
            }
            match token.kind {
                TokenKind::Punct(',' | ';' | '}') => return Ok(()),
                TokenKind::Punct('{') if self.opens_observers() => return Ok(()),
                TokenKind::Punct('(' | '[' | '{') => self.skip_balanced()?,
                _ => {
                    self.bump();
                }
            }
        }
        Ok(())
    }

    fn opens_observers(&self) -> bool {
        self.peek_at(1)
            .and_then(Token::identifier)
            .is_some_and(|word| OBSERVER_KEYWORDS.contains(&word))
    }

    /// Classifies and skips the `{ ... }` after a variable.
    fn parse_accessor_block(&mut self) -> Result<AccessorBlock, ParseError> {
        let accessor = if self.opens_observers() {
            AccessorBlock::Observers
        } else {
            AccessorBlock::Computed
        };
        self.skip_balanced()?;
        Ok(accessor)
    }

    /// Skips tokens up to the start of the next declaration, consuming a
    /// trailing body if one is found. A closing brace or semicolon is left
    /// for the caller.
    fn skip_declaration(&mut self) -> Result<(), ParseError> {
        let first = self.position;
        while let Some(token) = self.peek() {
            if self.position > first && token.newline_before && self.starts_declaration() {
                return Ok(());
            }
            match token.kind {
                TokenKind::Punct('}' | ';') => return Ok(()),
                TokenKind::Punct('{') => return self.skip_balanced(),
                TokenKind::Punct('(' | '[') => self.skip_balanced()?,
                _ => {
                    self.bump();
                }
            }
        }
        Ok(())
    }

    fn starts_declaration(&self) -> bool {
        let Some(token) = self.peek() else {
            return false;
        };
        match &token.kind {
            TokenKind::Punct('@' | '#') => true,
            TokenKind::Identifier(word) => {
                DECLARATION_KEYWORDS.contains(&word.as_str())
                    || MODIFIER_KEYWORDS.contains(&word.as_str())
            }
            _ => false,
        }
    }

    /// Skips a bracketed group starting at its opening token.
    fn skip_balanced(&mut self) -> Result<(), ParseError> {
        let mut depth = 0usize;
        while let Some(token) = self.bump() {
            match token.kind {
                TokenKind::Punct('(' | '[' | '{') => depth += 1,
                TokenKind::Punct(')' | ']' | '}') => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        return Ok(());
                    }
                }
                _ => {}
            }
        }
        Err(ParseError::UnexpectedEnd {
            context: "a bracketed group",
        })
    }

    /// Skips a compiler-directive line such as `#if DEBUG`, tracking which
    /// conditional branch the following members belong to.
    fn skip_directive(&mut self, conditions: &mut Conditions) {
        match self.peek_at(1).and_then(Token::identifier) {
            Some("if") => conditions.enter(),
            Some("elseif" | "else") => conditions.next_branch(),
            Some("endif") => conditions.leave(),
            _ => {}
        }
        self.skip_line();
    }

    fn skip_line(&mut self) {
        self.bump();
        while self.peek().is_some_and(|token| !token.newline_before) {
            self.bump();
        }
    }
}

/// Nesting of `#if` blocks. Only the first branch of each block is read,
/// so a member declared once per branch is seen once.
#[derive(Debug, Default)]
struct Conditions {
    first_branch: Vec<bool>,
}

impl Conditions {
    fn enter(&mut self) {
        self.first_branch.push(true);
    }

    fn next_branch(&mut self) {
        if let Some(first) = self.first_branch.last_mut() {
            *first = false;
        }
    }

    fn leave(&mut self) {
        self.first_branch.pop();
    }

    fn is_active(&self) -> bool {
        self.first_branch.iter().all(|&first| first)
    }
}

fn unexpected(source: &str, token: &Token, expected: &'static str) -> ParseError {
    ParseError::Unexpected {
        found: source[token.start..token.end].to_string(),
        expected,
        offset: token.start,
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
