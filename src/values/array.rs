use std::fmt::Display;

use crate::{config::constants::ARRAY_INITIAL_CAPACITY, errors::errors::ValueError};

use super::value::{SymbolValue, ValueType};

/// Growable buffer of values of one element type. Capacity doubles whenever a
/// push finds the buffer full.
#[derive(Debug, Clone)]
pub struct ArrayValue {
    element_type: ValueType,
    data: Vec<SymbolValue>,
    capacity: usize,
}

impl ArrayValue {
    pub fn new(element_type: ValueType) -> Self {
        ArrayValue {
            element_type,
            data: Vec::with_capacity(ARRAY_INITIAL_CAPACITY),
            capacity: ARRAY_INITIAL_CAPACITY,
        }
    }

    /// Appends `value`. A value of the wrong element type, or a failed
    /// growth, leaves the array untouched.
    pub fn push(&mut self, value: SymbolValue) -> Result<(), ValueError> {
        if value.value_type() != self.element_type {
            return Err(ValueError::ElementTypeMismatch {
                expected: self.element_type.to_string(),
                received: value.value_type().to_string(),
            });
        }

        if self.data.len() >= self.capacity {
            self.grow()?;
        }

        self.data.push(value);
        Ok(())
    }

    fn grow(&mut self) -> Result<(), ValueError> {
        let new_capacity = self
            .capacity
            .max(1)
            .checked_mul(2)
            .ok_or(ValueError::AllocationFailed {
                requested: usize::MAX,
            })?;

        self.data
            .try_reserve_exact(new_capacity - self.data.len())
            .map_err(|_| ValueError::AllocationFailed {
                requested: new_capacity,
            })?;

        self.capacity = new_capacity;
        Ok(())
    }

    pub fn get(&self, index: usize) -> Option<&SymbolValue> {
        self.data.get(index)
    }

    pub fn element_type(&self) -> ValueType {
        self.element_type
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = &SymbolValue> {
        self.data.iter()
    }
}

impl PartialEq for ArrayValue {
    fn eq(&self, other: &Self) -> bool {
        self.element_type == other.element_type && self.data == other.data
    }
}

impl Display for ArrayValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let items = self
            .data
            .iter()
            .map(|value| value.to_string())
            .collect::<Vec<String>>()
            .join(", ");
        write!(f, "[{}]", items)
    }
}
