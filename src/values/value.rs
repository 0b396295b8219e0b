use std::fmt::Display;

use crate::{
    config::constants::{bounded, MAX_STRING_LENGTH},
    errors::errors::ValueError,
    grammar::symbols::Terminal,
};

use super::{array::ArrayValue, dict::{DictValue, KeyType}};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Boolean,
    Integer,
    Float,
    String,
    Array,
    Dict,
}

impl ValueType {
    pub fn name(&self) -> &'static str {
        match self {
            ValueType::Boolean => "bool",
            ValueType::Integer => "int",
            ValueType::Float => "float",
            ValueType::String => "string",
            ValueType::Array => "array",
            ValueType::Dict => "dict",
        }
    }

    /// The value type a type keyword declares. `const` and the markers declare none.
    pub fn from_keyword(keyword: Terminal) -> Option<ValueType> {
        match keyword {
            Terminal::Int => Some(ValueType::Integer),
            Terminal::Str => Some(ValueType::String),
            Terminal::Float => Some(ValueType::Float),
            Terminal::Bool => Some(ValueType::Boolean),
            Terminal::Array => Some(ValueType::Array),
            Terminal::Dict => Some(ValueType::Dict),
            Terminal::Const | Terminal::Id | Terminal::End => None,
        }
    }
}

impl Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A declared value. Exactly one variant is active and it determines the
/// value's type.
#[derive(Debug, Clone, PartialEq)]
pub enum SymbolValue {
    Integer(i64),
    Float(f64),
    String(String),
    Boolean(bool),
    Array(ArrayValue),
    Dict(DictValue),
}

impl SymbolValue {
    /// A string value, truncated to the string bound.
    pub fn string(value: &str) -> Self {
        SymbolValue::String(bounded(value, MAX_STRING_LENGTH))
    }

    pub fn value_type(&self) -> ValueType {
        match self {
            SymbolValue::Integer(_) => ValueType::Integer,
            SymbolValue::Float(_) => ValueType::Float,
            SymbolValue::String(_) => ValueType::String,
            SymbolValue::Boolean(_) => ValueType::Boolean,
            SymbolValue::Array(_) => ValueType::Array,
            SymbolValue::Dict(_) => ValueType::Dict,
        }
    }

    /// Zero, empty string, `false`, or an empty container.
    /// Arrays default to integer elements and dictionaries to string keys and values.
    pub fn default_for(value_type: ValueType) -> Self {
        match value_type {
            ValueType::Boolean => SymbolValue::Boolean(false),
            ValueType::Integer => SymbolValue::Integer(0),
            ValueType::Float => SymbolValue::Float(0.0),
            ValueType::String => SymbolValue::String(String::new()),
            ValueType::Array => SymbolValue::Array(ArrayValue::new(ValueType::Integer)),
            ValueType::Dict => {
                SymbolValue::Dict(DictValue::new(KeyType::String, ValueType::String))
            }
        }
    }

    /// Default value for a declaration made with `keyword`, if it declares a value type.
    pub fn default_for_keyword(keyword: Terminal) -> Option<Self> {
        ValueType::from_keyword(keyword).map(SymbolValue::default_for)
    }

    pub fn validate_against(&self, declared: ValueType) -> Result<(), ValueError> {
        if self.value_type() != declared {
            return Err(ValueError::TypeMismatch {
                expected: declared.to_string(),
                received: self.value_type().to_string(),
            });
        }
        Ok(())
    }
}

impl Display for SymbolValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SymbolValue::Integer(value) => write!(f, "{}", value),
            SymbolValue::Float(value) => write!(f, "{:.2}", value),
            SymbolValue::String(value) => write!(f, "{}", value),
            SymbolValue::Boolean(value) => write!(f, "{}", if *value { "true" } else { "false" }),
            SymbolValue::Array(array) => write!(f, "{}", array),
            SymbolValue::Dict(dict) => write!(f, "{}", dict),
        }
    }
}
