use std::{collections::VecDeque, fmt::Display};

use crate::{
    config::constants::{HASH_MULTIPLIER, HASH_TABLE_SIZE},
    errors::errors::ValueError,
};

use super::value::{SymbolValue, ValueType};

/// Value types usable as dictionary keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyType {
    Integer,
    Float,
    String,
}

impl KeyType {
    pub fn value_type(&self) -> ValueType {
        match self {
            KeyType::Integer => ValueType::Integer,
            KeyType::Float => ValueType::Float,
            KeyType::String => ValueType::String,
        }
    }
}

impl TryFrom<ValueType> for KeyType {
    type Error = ValueError;

    fn try_from(value_type: ValueType) -> Result<Self, Self::Error> {
        match value_type {
            ValueType::Integer => Ok(KeyType::Integer),
            ValueType::Float => Ok(KeyType::Float),
            ValueType::String => Ok(KeyType::String),
            other => Err(ValueError::UnsupportedKeyType {
                type_: other.to_string(),
            }),
        }
    }
}

impl Display for KeyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value_type())
    }
}

#[derive(Debug, Clone, PartialEq)]
struct DictEntry {
    key: SymbolValue,
    value: SymbolValue,
}

/// Hashes `key` as a `key_type` key into `[0, bucket_count)`.
///
/// String keys use a ×31 rolling hash over their bytes; numeric keys hash by
/// their (truncated) numeric value.
pub fn hash_key(key: &SymbolValue, key_type: KeyType, bucket_count: usize) -> Result<usize, ValueError> {
    let hash = match (key_type, key) {
        (KeyType::String, SymbolValue::String(text)) => text.bytes().fold(0u64, |hash, byte| {
            hash.wrapping_mul(HASH_MULTIPLIER).wrapping_add(byte as u64)
        }),
        (KeyType::Integer, SymbolValue::Integer(value)) => *value as u64,
        (KeyType::Float, SymbolValue::Float(value)) => *value as i64 as u64,
        _ => {
            return Err(ValueError::TypeMismatch {
                expected: key_type.to_string(),
                received: key.value_type().to_string(),
            })
        }
    };

    Ok((hash % bucket_count.max(1) as u64) as usize)
}

fn keys_match(left: &SymbolValue, right: &SymbolValue) -> bool {
    match (left, right) {
        (SymbolValue::String(a), SymbolValue::String(b)) => a == b,
        (SymbolValue::Integer(a), SymbolValue::Integer(b)) => a == b,
        (SymbolValue::Float(a), SymbolValue::Float(b)) => a == b,
        _ => false,
    }
}

/// Hashed dictionary with a fixed bucket count and chained buckets. Key and
/// value types are fixed at creation; a key appears at most once.
#[derive(Debug, Clone, PartialEq)]
pub struct DictValue {
    key_type: KeyType,
    value_type: ValueType,
    size: usize,
    buckets: Vec<VecDeque<DictEntry>>,
}

impl DictValue {
    pub fn new(key_type: KeyType, value_type: ValueType) -> Self {
        DictValue {
            key_type,
            value_type,
            size: 0,
            buckets: vec![VecDeque::new(); HASH_TABLE_SIZE],
        }
    }

    /// Inserts `value` under `key`, replacing the value of an equal key in
    /// place. New keys go to the head of their bucket.
    pub fn set(&mut self, key: SymbolValue, value: SymbolValue) -> Result<(), ValueError> {
        let index = hash_key(&key, self.key_type, self.buckets.len())?;
        value.validate_against(self.value_type)?;

        let bucket = &mut self.buckets[index];
        if let Some(entry) = bucket.iter_mut().find(|entry| keys_match(&entry.key, &key)) {
            entry.value = value;
            return Ok(());
        }

        bucket
            .try_reserve(1)
            .map_err(|_| ValueError::AllocationFailed {
                requested: bucket.len() + 1,
            })?;
        bucket.push_front(DictEntry { key, value });
        self.size += 1;
        Ok(())
    }

    /// The value stored under `key`. Keys of the wrong type are never present.
    pub fn get(&self, key: &SymbolValue) -> Option<&SymbolValue> {
        let index = hash_key(key, self.key_type, self.buckets.len()).ok()?;
        self.buckets[index]
            .iter()
            .find(|entry| keys_match(&entry.key, key))
            .map(|entry| &entry.value)
    }

    pub fn contains_key(&self, key: &SymbolValue) -> bool {
        self.get(key).is_some()
    }

    pub fn key_type(&self) -> KeyType {
        self.key_type
    }

    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Entries in bucket order, head of each chain first.
    pub fn iter(&self) -> impl Iterator<Item = (&SymbolValue, &SymbolValue)> {
        self.buckets
            .iter()
            .flat_map(|bucket| bucket.iter().map(|entry| (&entry.key, &entry.value)))
    }
}

impl Display for DictValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let items = self
            .iter()
            .map(|(key, value)| format!("{}: {}", key, value))
            .collect::<Vec<String>>()
            .join(", ");
        write!(f, "{{{}}}", items)
    }
}
