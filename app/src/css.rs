//! Minimal CSS reader for the bundled stylesheets.
//!
//! Understands flat rule blocks only. At-rules (`@media`, `@supports`, ...) are skipped as a whole,
//! specificity and `!important` are not modelled.

use itertools::Itertools;

use crate::styles::Stylesheet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub selectors: Vec<String>,
    pub declarations: Vec<(String, String)>,
}

pub fn parse(source: &str) -> Vec<Rule> {
    let source = strip_comments(source);

    let mut rules = Vec::new();
    let mut rest = source.as_str();
    while let Some(open) = rest.find('{') {
        let prelude = rest[..open].trim();
        let body = &rest[open + 1..];

        let Some(close) = matching_brace(body) else {
            tracing::warn!(prelude, "unterminated css block");
            break;
        };

        if !prelude.starts_with('@') {
            rules.push(Rule {
                selectors: prelude
                    .split(',')
                    .map(|selector| selector.split_whitespace().join(" "))
                    .filter(|selector| !selector.is_empty())
                    .collect(),
                declarations: parse_declarations(&body[..close]),
            });
        }

        rest = &body[close + 1..];
    }

    rules
}

/// Rules of several stylesheets in load order.
#[derive(Debug, Default)]
pub struct Cascade {
    rules: Vec<Rule>,
}

impl Cascade {
    pub fn new<'a>(sheets: impl IntoIterator<Item = &'a Stylesheet>) -> Self {
        let rules = sheets
            .into_iter()
            .flat_map(|sheet| parse(sheet.source))
            .collect();
        Self { rules }
    }

    /// Value of `property` for `selector`, the last declaration wins.
    pub fn value(&self, selector: &str, property: &str) -> Option<&str> {
        let selector = selector.split_whitespace().join(" ");
        let property = property.to_ascii_lowercase();

        self.rules
            .iter()
            .filter(|rule| rule.selectors.iter().any(|s| *s == selector))
            .flat_map(|rule| rule.declarations.iter())
            .filter(|(name, _)| *name == property)
            .map(|(_, value)| value.as_str())
            .last()
    }
}

fn strip_comments(source: &str) -> String {
    let mut result = String::with_capacity(source.len());
    let mut rest = source;
    while let Some(start) = rest.find("/*") {
        result.push_str(&rest[..start]);
        rest = match rest[start + 2..].find("*/") {
            Some(end) => &rest[start + 2 + end + 2..],
            None => "",
        };
    }
    result.push_str(rest);
    result
}

fn matching_brace(body: &str) -> Option<usize> {
    let mut depth = 1usize;
    for (i, c) in body.char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

fn parse_declarations(body: &str) -> Vec<(String, String)> {
    body.split(';')
        .filter_map(|declaration| declaration.split_once(':'))
        .map(|(name, value)| (name.trim().to_ascii_lowercase(), value.trim().to_owned()))
        .filter(|(name, value)| !name.is_empty() && !value.is_empty())
        .collect()
}
