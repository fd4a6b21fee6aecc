//! Runtime value model: a closed sum of object variants plus the
//! canonical `NULL`/`TRUE`/`FALSE` singletons used for identity comparison.

use std::fmt;
use std::rc::Rc;

use crate::ast::{BlockStatement, Identifier};
use crate::environment::Environment;

/// The type tag returned by `Object::type_name`, matching spec's closed set
/// of string tags (`"INTEGER"`, `"BOOLEAN"`, ...).
pub const INTEGER_OBJ: &str = "INTEGER";
pub const BOOLEAN_OBJ: &str = "BOOLEAN";
pub const NULL_OBJ: &str = "NULL";
pub const RETURN_VALUE_OBJ: &str = "RETURN_VALUE";
pub const ERROR_OBJ: &str = "ERROR";
pub const FUNCTION_OBJ: &str = "FUNCTION";

#[derive(Debug, Clone)]
pub enum Object {
    Integer(i64),
    Boolean(bool),
    Null,
    ReturnValue(Rc<Object>),
    Error(String),
    Function(FunctionObject),
}

#[derive(Debug, Clone)]
pub struct FunctionObject {
    pub params: Vec<Identifier>,
    pub body: BlockStatement,
    pub env: Environment,
}

// `FunctionObject` carries an `Environment`, which is not `PartialEq`
// (closures compare by identity, not structurally), so `Object` derives
// its own narrow equality below instead of `#[derive(PartialEq)]`.
impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Object::Integer(a), Object::Integer(b)) => a == b,
            (Object::Boolean(a), Object::Boolean(b)) => a == b,
            (Object::Null, Object::Null) => true,
            (Object::Error(a), Object::Error(b)) => a == b,
            _ => false,
        }
    }
}

impl Object {
    pub fn type_name(&self) -> &'static str {
        match self {
            Object::Integer(_) => INTEGER_OBJ,
            Object::Boolean(_) => BOOLEAN_OBJ,
            Object::Null => NULL_OBJ,
            Object::ReturnValue(_) => RETURN_VALUE_OBJ,
            Object::Error(_) => ERROR_OBJ,
            Object::Function(_) => FUNCTION_OBJ,
        }
    }

    pub fn inspect(&self) -> String {
        match self {
            Object::Integer(value) => value.to_string(),
            Object::Boolean(value) => value.to_string(),
            Object::Null => "null".to_string(),
            Object::ReturnValue(value) => value.inspect(),
            Object::Error(message) => format!("ERROR: {message}"),
            Object::Function(func) => {
                let params: Vec<String> = func.params.iter().map(|p| p.to_string()).collect();
                format!("fn({}) {{ {} }}", params.join(", "), func.body)
            }
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Object::Error(_))
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inspect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inspect_formats_match_spec() {
        assert_eq!(Object::Integer(5).inspect(), "5");
        assert_eq!(Object::Boolean(true).inspect(), "true");
        assert_eq!(Object::Boolean(false).inspect(), "false");
        assert_eq!(Object::Null.inspect(), "null");
        assert_eq!(
            Object::ReturnValue(Rc::new(Object::Integer(5))).inspect(),
            "5"
        );
        assert_eq!(
            Object::Error("identifier not found: x".into()).inspect(),
            "ERROR: identifier not found: x"
        );
    }

    #[test]
    fn type_names_match_spec_tags() {
        assert_eq!(Object::Integer(1).type_name(), "INTEGER");
        assert_eq!(Object::Boolean(true).type_name(), "BOOLEAN");
        assert_eq!(Object::Null.type_name(), "NULL");
        assert_eq!(Object::Error(String::new()).type_name(), "ERROR");
    }
}
