//! `{name}` utterance template parsing
//!
//! Sample utterances reference declared slots with `{slotName}`
//! placeholders. The same parser backs the Cartesian expander and the
//! template validation rules, so both agree on what compiles.

use thiserror::Error;

/// A parsed template piece: literal text or a slot variable
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Verbatim text between placeholders
    Literal(String),
    /// A `{name}` placeholder, braces stripped
    Variable(String),
}

/// Template parse/compile failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A `{` with no matching `}`
    #[error("unclosed '{{' in template \"{template}\"")]
    UnclosedBrace {
        /// The offending template
        template: String,
    },

    /// `{}` with no variable name inside
    #[error("empty placeholder in template \"{template}\"")]
    EmptyPlaceholder {
        /// The offending template
        template: String,
    },

    /// A placeholder naming a slot the intent does not declare
    #[error("template \"{template}\" references undeclared slot '{variable}'")]
    UndeclaredVariable {
        /// The offending template
        template: String,
        /// The unknown variable
        variable: String,
    },
}

/// Split a template into alternating literal/variable segments.
///
/// Zero-placeholder templates yield a single literal segment (or nothing
/// for the empty string).
///
/// # Errors
///
/// Returns `TemplateError` for unclosed braces or empty placeholders.
pub fn parse(template: &str) -> Result<Vec<Segment>, TemplateError> {
    let mut segments = Vec::new();
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        let (literal, tail) = rest.split_at(open);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal.to_string()));
        }
        let Some(close) = tail.find('}') else {
            return Err(TemplateError::UnclosedBrace {
                template: template.to_string(),
            });
        };
        let name = tail[1..close].trim();
        if name.is_empty() {
            return Err(TemplateError::EmptyPlaceholder {
                template: template.to_string(),
            });
        }
        segments.push(Segment::Variable(name.to_string()));
        rest = &tail[close + 1..];
    }

    if !rest.is_empty() {
        segments.push(Segment::Literal(rest.to_string()));
    }
    Ok(segments)
}

/// The placeholder names of a template, in order of appearance
///
/// # Errors
///
/// Returns `TemplateError` when the template does not parse.
pub fn variables(template: &str) -> Result<Vec<String>, TemplateError> {
    Ok(parse(template)?
        .into_iter()
        .filter_map(|segment| match segment {
            Segment::Variable(name) => Some(name),
            Segment::Literal(_) => None,
        })
        .collect())
}

/// Compile-check a template against an intent's declared slot names.
///
/// # Errors
///
/// Returns `TemplateError` when the template does not parse or references
/// a slot outside `declared`.
pub fn check(template: &str, declared: &[&str]) -> Result<(), TemplateError> {
    for variable in variables(template)? {
        if !declared.contains(&variable.as_str()) {
            return Err(TemplateError::UndeclaredVariable {
                template: template.to_string(),
                variable,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_alternating_segments() {
        let segments = parse("take me to {country} by {vehicle}").expect("parses");
        assert_eq!(
            segments,
            vec![
                Segment::Literal("take me to ".to_string()),
                Segment::Variable("country".to_string()),
                Segment::Literal(" by ".to_string()),
                Segment::Variable("vehicle".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_without_placeholders() {
        assert_eq!(
            parse("hello there").expect("parses"),
            vec![Segment::Literal("hello there".to_string())]
        );
        assert_eq!(parse("").expect("parses"), vec![]);
    }

    #[test]
    fn test_parse_adjacent_placeholders() {
        let segments = parse("{a}{b}").expect("parses");
        assert_eq!(
            segments,
            vec![
                Segment::Variable("a".to_string()),
                Segment::Variable("b".to_string()),
            ]
        );
    }

    #[test]
    fn test_unclosed_brace_fails() {
        assert!(matches!(
            parse("go to {country"),
            Err(TemplateError::UnclosedBrace { .. })
        ));
    }

    #[test]
    fn test_empty_placeholder_fails() {
        assert!(matches!(
            parse("go {}"),
            Err(TemplateError::EmptyPlaceholder { .. })
        ));
    }

    #[test]
    fn test_check_against_declared_slots() {
        assert!(check("fly to {country}", &["country"]).is_ok());
        let err = check("fly to {city}", &["country"]).unwrap_err();
        assert!(matches!(
            err,
            TemplateError::UndeclaredVariable { ref variable, .. } if variable == "city"
        ));
    }

    #[test]
    fn test_variables_in_order_with_repeats() {
        assert_eq!(
            variables("{a} then {b} then {a}").expect("parses"),
            vec!["a", "b", "a"]
        );
    }
}
