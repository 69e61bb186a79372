// CLASSIFICATION: COMMUNITY
// Filename: expand.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-18

//! Inline property references in init config strings.
//!
//! * `${name}` substitutes the property value.
//! * `${name:-default}` substitutes `default` when the property is empty.
//! * `$$` is a literal `$`.
//! * `$name` is the legacy form: the name runs to the end of the string.
//!
//! Expansion is a single pass. Substituted values and defaults are copied
//! verbatim and never scanned again, so `${a.${b}}` is not nested.

use log::error;
use thiserror::Error;

use crate::props::store::PropertyStore;

const DEFAULT_SEPARATOR: &str = ":-";

/// Failures reported by [`expand_props`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpandError {
    #[error("unexpected end of string in '{template}', looking for }}")]
    MalformedReference { template: String },
    #[error("invalid zero-length property name in '{template}'")]
    EmptyPropertyName { template: String },
    #[error("property '{name}' doesn't exist while expanding '{template}'")]
    UnresolvedProperty { name: String, template: String },
}

/// A reference parsed out of a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyReference<'a> {
    pub name: &'a str,
    pub default_value: Option<&'a str>,
}

impl<'a> PropertyReference<'a> {
    /// Parse the text between `${` and `}`.
    pub fn parse_braced(inner: &'a str) -> Self {
        match inner.split_once(DEFAULT_SEPARATOR) {
            Some((name, default)) => Self {
                name,
                default_value: Some(default),
            },
            None => Self {
                name: inner,
                default_value: None,
            },
        }
    }
}

fn fail(err: ExpandError) -> Result<String, ExpandError> {
    error!("{err}");
    Err(err)
}

/// Expand every property reference in `src` against `store`.
pub fn expand_props<S>(src: &str, store: &S) -> Result<String, ExpandError>
where
    S: PropertyStore + ?Sized,
{
    let mut dst = String::with_capacity(src.len());
    let mut rest = src;

    while let Some(pos) = rest.find('$') {
        dst.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];

        if let Some(tail) = after.strip_prefix('$') {
            dst.push('$');
            rest = tail;
            continue;
        }
        if after.is_empty() {
            return Ok(dst);
        }

        let (reference, tail) = match after.strip_prefix('{') {
            Some(braced) => {
                let Some(end) = braced.find('}') else {
                    return fail(ExpandError::MalformedReference {
                        template: src.to_string(),
                    });
                };
                (PropertyReference::parse_braced(&braced[..end]), &braced[end + 1..])
            }
            None => {
                error!("using deprecated syntax for specifying property '{after}', use ${{name}} instead");
                let reference = PropertyReference {
                    name: after,
                    default_value: None,
                };
                (reference, "")
            }
        };

        if reference.name.is_empty() {
            return fail(ExpandError::EmptyPropertyName {
                template: src.to_string(),
            });
        }

        let value = store.get(reference.name, "");
        if !value.is_empty() {
            dst.push_str(&value);
        } else if let Some(default) = reference.default_value {
            dst.push_str(default);
        } else {
            return fail(ExpandError::UnresolvedProperty {
                name: reference.name.to_string(),
                template: src.to_string(),
            });
        }
        rest = tail;
    }

    dst.push_str(rest);
    Ok(dst)
}
