use heapless::FnvIndexMap;

use super::error::ModelError;
use super::value::ParamValue;
use super::MAX_PARAMS;

/// Parameter values keyed by control key.
///
/// Controls never hold state themselves; they read and write here. An
/// absent key is a valid initial state: reads fall back to `0` / `false`
/// and the entry is created on the first write.
#[derive(Debug, Clone, Default)]
pub struct ParamStore {
    values: FnvIndexMap<&'static str, ParamValue, MAX_PARAMS>,
}

impl ParamStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from initial `(key, value)` pairs.
    ///
    /// Later duplicates overwrite earlier ones. Returns
    /// [`ModelError::StoreFull`] if more than [`MAX_PARAMS`] distinct keys
    /// are given.
    pub fn from_pairs(pairs: &[(&'static str, ParamValue)]) -> Result<Self, ModelError> {
        let mut store = Self::new();
        for &(key, value) in pairs {
            store.set(key, value)?;
        }
        Ok(store)
    }

    /// Raw stored value, or `None` if the key has never been written.
    pub fn get(&self, key: &str) -> Option<ParamValue> {
        self.values.get(key).copied()
    }

    /// Integer view of `key`, defaulting to `0`.
    pub fn int_or_zero(&self, key: &str) -> i32 {
        self.get(key).map_or(0, ParamValue::as_int)
    }

    /// Boolean view of `key`, defaulting to `false`.
    pub fn flag_or_false(&self, key: &str) -> bool {
        self.get(key).is_some_and(ParamValue::as_bool)
    }

    /// Write `value` under `key`, creating the entry if needed.
    pub fn set(&mut self, key: &'static str, value: ParamValue) -> Result<(), ModelError> {
        self.values
            .insert(key, value)
            .map(|_| ())
            .map_err(|_| ModelError::StoreFull)
    }

    /// Write used by controls. A full store drops the write and logs it
    /// instead of failing the event.
    pub(crate) fn write(&mut self, key: &'static str, value: ParamValue) {
        if self.set(key, value).is_err() {
            #[cfg(feature = "defmt")]
            defmt::warn!("parameter store full, dropped write to {}", key);
        }
    }

    /// Returns `true` if `key` has a stored value.
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if nothing has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate stored entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, ParamValue)> + '_ {
        self.values.iter().map(|(k, v)| (*k, *v))
    }
}
