//! Reads generated CSS back into rules.
//!
//! Used by tests and by preview tooling to compare stylesheets structurally
//! rather than byte by byte. Only what the compilers emit is understood:
//! style rules, optionally nested in `@media`. Other at-rules are skipped.

use cssparser::{Delimiter, ParseError, Parser, ParserInput, Token};
use serde::Serialize;

/// One style rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CssRule {
    /// The enclosing `@media` condition, e.g. `only screen and (max-width:768px)`.
    pub media: Option<String>,
    pub selector: String,
    /// `(property, value)` pairs in source order. Values keep `!important`.
    pub declarations: Vec<(String, String)>,
}

impl CssRule {
    /// Value of the last declaration of `property`.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .rev()
            .find(|(name, _)| name == property)
            .map(|(_, value)| value.as_str())
    }
}

/// Parses a stylesheet into its style rules, in source order.
///
/// Malformed rules and declarations are skipped.
///
/// ```rust
/// use prisma_styles::inspect::parse_rules;
///
/// let rules = parse_rules("a{color: red;}@media only screen and (max-width: 480px) {a{color:blue;} }");
/// assert_eq!(rules.len(), 2);
/// assert_eq!(rules[0].get("color"), Some("red"));
/// assert_eq!(rules[1].media.as_deref(), Some("only screen and (max-width:480px)"));
/// ```
pub fn parse_rules(css: &str) -> Vec<CssRule> {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);
    let mut rules = Vec::new();
    rule_list(&mut parser, None, &mut rules);
    rules
}

enum Head {
    Block,
    AtRule(String),
    End,
}

fn rule_list<'i>(parser: &mut Parser<'i, '_>, media: Option<&str>, rules: &mut Vec<CssRule>) {
    loop {
        parser.skip_whitespace();
        let start = parser.position();
        let head = loop {
            match parser.next() {
                Ok(Token::CurlyBracketBlock) => break Head::Block,
                Ok(Token::AtKeyword(name)) => break Head::AtRule(name.to_string()),
                Ok(Token::Semicolon) => break Head::End,
                Ok(_) => {}
                Err(_) => return,
            }
        };

        match head {
            Head::Block => {
                let selector = normalize(parser.slice_from(start).trim_end_matches('{'));
                let declarations = parser
                    .parse_nested_block(|p| Ok::<_, ParseError<'i, ()>>(declarations(p)))
                    .unwrap_or_default();
                rules.push(CssRule {
                    media: media.map(str::to_string),
                    selector,
                    declarations,
                });
            }
            Head::AtRule(name) => {
                let prelude_start = parser.position();
                let has_block = loop {
                    match parser.next() {
                        Ok(Token::CurlyBracketBlock) => break true,
                        Ok(Token::Semicolon) | Err(_) => break false,
                        Ok(_) => {}
                    }
                };
                if has_block && name.eq_ignore_ascii_case("media") {
                    let condition = normalize(parser.slice_from(prelude_start).trim_end_matches('{'));
                    let _ = parser.parse_nested_block(|p| {
                        rule_list(p, Some(&condition), rules);
                        Ok::<_, ParseError<'i, ()>>(())
                    });
                }
            }
            Head::End => {}
        }
    }
}

fn declarations<'i>(parser: &mut Parser<'i, '_>) -> Vec<(String, String)> {
    let mut out = Vec::new();
    while !parser.is_exhausted() {
        let parsed = parser.parse_until_after(Delimiter::Semicolon, |p| {
            let name = p.expect_ident()?.to_ascii_lowercase();
            p.expect_colon()?;
            let start = p.position();
            while p.next().is_ok() {}
            Ok::<_, ParseError<'i, ()>>((name, p.slice_from(start).trim().to_string()))
        });
        if let Ok(declaration) = parsed {
            out.push(declaration);
        }
    }
    out
}

/// Collapses whitespace and drops it after `:` and `,` so minified and
/// unminified preludes compare equal.
fn normalize(text: &str) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.replace(": ", ":").replace(", ", ",").replace(" ,", ",")
}
