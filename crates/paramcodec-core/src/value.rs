//! The in-memory parameter model.
//!
//! Tuple payloads are the same wire format as the top-level list, so the
//! model is a tagged sum type: the recursive structure is enforced by the
//! type system instead of by an untyped "string or array-of-strings"
//! convention.

use crate::types::TypeTag;

/// Payload of a single parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterValue {
    /// Scalar types: exactly one textual element.
    Scalar(String),
    /// Array types: one textual element per array entry.
    List(Vec<String>),
    /// A nested parameter list (self-similar with the outer format).
    Tuple(Box<ParameterList>),
    /// One nested parameter list per tuple instance.
    TupleList(Vec<ParameterList>),
}

/// A typed parameter descriptor. Immutable once appended to a list.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub tag: TypeTag,
    pub value: ParameterValue,
}

/// An ordered list of parameters, in call order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParameterList {
    params: Vec<Parameter>,
}

impl ParameterList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, param: Parameter) {
        self.params.push(param);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Parameter> {
        self.params.iter()
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

impl<'a> IntoIterator for &'a ParameterList {
    type Item = &'a Parameter;
    type IntoIter = std::slice::Iter<'a, Parameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_preserves_insertion_order() {
        let mut list = ParameterList::new();
        list.push(Parameter {
            tag: TypeTag::String,
            value: ParameterValue::Scalar("a".into()),
        });
        list.push(Parameter {
            tag: TypeTag::Uint64,
            value: ParameterValue::Scalar("1".into()),
        });

        let tags: Vec<TypeTag> = list.iter().map(|p| p.tag).collect();
        assert_eq!(tags, vec![TypeTag::String, TypeTag::Uint64]);
    }
}
