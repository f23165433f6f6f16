//! Typed value access by option index.
//!
//! Reads and writes against the wrong kind, an empty slot, or an index past
//! the end do nothing. Callers know each index's kind from the table they
//! registered.

use crate::options::entry::{OptionEntry, OptionValue};
use crate::options::registry::OptionRegistry;

/// Returned by [`OptionRegistry::get_number`] for a bad index or non-number.
pub const NUMBER_SENTINEL: f64 = -1.0;

impl OptionRegistry {
    fn value_mut(&mut self, index: usize) -> Option<&mut OptionValue> {
        self.entry_mut(index).map(|e| &mut e.value)
    }

    pub fn get_string(&self, index: usize) -> Option<&str> {
        match self.entry(index).map(OptionEntry::value) {
            Some(OptionValue::String(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn get_number(&self, index: usize) -> f64 {
        match self.entry(index).map(OptionEntry::value) {
            Some(OptionValue::Number(n)) => *n,
            _ => NUMBER_SENTINEL,
        }
    }

    pub fn get_list(&self, index: usize) -> Option<&[String]> {
        match self.entry(index).map(OptionEntry::value) {
            Some(OptionValue::List(items)) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// Replace a string value. `None` stores the empty string.
    pub fn set_string(&mut self, index: usize, value: Option<&str>) {
        match self.value_mut(index) {
            Some(OptionValue::String(s)) => *s = value.unwrap_or_default().to_string(),
            _ => tracing::trace!(index, "set_string ignored"),
        }
    }

    pub fn set_number(&mut self, index: usize, value: f64) {
        match self.value_mut(index) {
            Some(OptionValue::Number(n)) => *n = value,
            _ => tracing::trace!(index, "set_number ignored"),
        }
    }

    /// Append one item to a list value.
    pub fn set_list_item(&mut self, index: usize, item: &str) {
        match self.value_mut(index) {
            Some(OptionValue::List(items)) => items.push(item.to_string()),
            _ => tracing::trace!(index, "set_list_item ignored"),
        }
    }
}
