//! address text to [AddressPath]
//!
//! Addresses are parsed with the hcl expression grammar. Accepted are a bare variable (`a`) or a
//! traversal rooted at a variable (`a.b[0].c`).
//!
//! | text         | step                          |
//! |--------------|-------------------------------|
//! | `.name`      | [Step::Name]                  |
//! | `.0`, `[0]`  | [IndexKey::Ordinal]           |
//! | `["k"]`, `[k]` | [IndexKey::Key]             |
//! | `[*]`, `.*`  | [IndexKey::All]               |
//!
//! HCL requires a traversal to start with a name. Addresses starting with a digit or `[` (which
//! are produced when a reference is sliced) are parsed behind a synthetic root name which is
//! dropped again afterwards.
use crate::address::{AddressPath, IndexKey, Step};
use crate::Error;
use hcl::{Expression, Identifier, TraversalOperator};

const SYNTHETIC_ROOT: &str = "__root";

/// Parse address text
///
/// Fails with [Error::MalformedAddress] for empty text or text that is not an address.
#[tracing::instrument(level = "trace")]
pub fn parse(text: &str) -> Result<AddressPath, Error> {
    if text.trim().is_empty() {
        return Err(Error::malformed(text, "address is empty"));
    }

    let synthetic = match text.chars().next() {
        Some(c) if c.is_ascii_digit() => Some(format!("{SYNTHETIC_ROOT}.{text}")),
        Some('[') => Some(format!("{SYNTHETIC_ROOT}{text}")),
        _ => None,
    };

    let source = synthetic.as_deref().unwrap_or(text);
    let expr: hcl_edit::expr::Expression = source
        .parse()
        .map_err(|err: hcl_edit::parser::Error| Error::malformed(text, err))?;

    let mut steps = steps_from_expression(text, expr.into())?;
    if synthetic.is_some() {
        steps.remove(0);
    }

    tracing::trace!(?steps, "parsed address");
    Ok(steps.into())
}

impl std::str::FromStr for AddressPath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

fn steps_from_expression(text: &str, expr: Expression) -> Result<Vec<Step>, Error> {
    match expr {
        Expression::Variable(var) => Ok(vec![Step::Name(Identifier::unchecked(var.as_str()))]),
        Expression::Traversal(traversal) => {
            let Expression::Variable(root) = &traversal.expr else {
                return Err(Error::malformed(text, "traversal must start with a name"));
            };

            let mut steps = vec![Step::Name(Identifier::unchecked(root.as_str()))];
            for operator in traversal.operators {
                steps.push(step_from_operator(text, operator)?);
            }

            Ok(steps)
        }
        _ => Err(Error::malformed(text, "not a traversal expression")),
    }
}

fn step_from_operator(text: &str, operator: TraversalOperator) -> Result<Step, Error> {
    let key = match operator {
        TraversalOperator::GetAttr(ident) => return Ok(Step::Name(ident)),
        TraversalOperator::LegacyIndex(ordinal) => IndexKey::Ordinal(ordinal),
        TraversalOperator::AttrSplat | TraversalOperator::FullSplat => IndexKey::All,
        TraversalOperator::Index(Expression::Number(num)) => {
            let Some(ordinal) = num.as_u64() else {
                return Err(Error::malformed(
                    text,
                    format!("index {num} is not a non-negative integer"),
                ));
            };
            IndexKey::Ordinal(ordinal)
        }
        TraversalOperator::Index(Expression::String(key)) => IndexKey::Key(key),
        // `a[key]` refers to a map key, not to a variable named `key`
        TraversalOperator::Index(Expression::Variable(var)) => {
            IndexKey::Key(var.as_str().to_string())
        }
        TraversalOperator::Index(_) => {
            return Err(Error::malformed(text, "unsupported index expression"));
        }
    };

    Ok(Step::Index(key))
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn names() {
        assert_eq!(parse("a").unwrap(), AddressPath::new().attr("a"));
        assert_eq!(
            parse("a.b.c").unwrap(),
            AddressPath::new().attr("a").attr("b").attr("c")
        );
    }

    #[test]
    fn indices() {
        let expected = AddressPath::new()
            .attr("a")
            .index(0)
            .attr("b")
            .key("key")
            .attr("c")
            .key("quoted")
            .attr("d")
            .splat();

        assert_eq!(
            parse(r#"a[0].b[key].c["quoted"].d[*]"#).unwrap(),
            expected
        );
    }

    #[test]
    fn dotted_ordinal() {
        assert_eq!(
            parse("a.0.b.1").unwrap(),
            AddressPath::new().attr("a").index(0).attr("b").index(1)
        );
    }

    #[test]
    fn attribute_splat() {
        assert_eq!(
            parse("a.*.b").unwrap(),
            AddressPath::new().attr("a").splat().attr("b")
        );
    }

    #[test]
    fn leading_ordinal() {
        assert_eq!(
            parse("0.a.b.1").unwrap(),
            AddressPath::new().index(0).attr("a").attr("b").index(1)
        );
        assert_eq!(
            parse("[2].a").unwrap(),
            AddressPath::new().index(2).attr("a")
        );
    }

    #[test]
    fn empty_is_malformed() {
        assert!(parse("").unwrap_err().is_malformed_address());
        assert!(parse("  ").unwrap_err().is_malformed_address());
    }

    #[test]
    fn invalid_addresses() {
        for text in ["a[", "a[0", "a.", "a..b", "a[1.5]", "a[-1]", "a + b", "\"a\"", "f(x).a"] {
            let err = parse(text).expect_err(text);
            assert!(err.is_malformed_address(), "{text}: {err}");
        }
    }

    #[test]
    fn canonical_form_round_trips() {
        for text in ["a", "a.b[0].c[key].d[*]", "[0].a.b[1]", "a[*].b"] {
            let formatted = parse(text).unwrap().to_string();
            assert_eq!(formatted, text);
            assert_eq!(parse(&formatted).unwrap().to_string(), formatted);
        }
    }

    #[test]
    fn dotted_ordinal_is_not_canonical() {
        assert_eq!(parse("a.0.b").unwrap().to_string(), "a[0].b");
    }
}
