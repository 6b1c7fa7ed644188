//! Flag values and the normalized argument map handed to handlers.

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use super::descriptor::{CommandDescriptor, FlagArity};

static DASH_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-((?-u:\w))").expect("valid camelize pattern"));

/// A resolved flag value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Bool(bool),
    Str(String),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            Value::Bool(_) => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            Value::Str(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{b}"),
            Value::Str(s) => f.write_str(s),
        }
    }
}

/// `skip-get-started` -> `skipGetStarted`.
///
/// Every dash followed by an ASCII word character is dropped and the
/// character upper-cased; everything else is kept as is.
pub fn camelize(name: &str) -> String {
    DASH_WORD
        .replace_all(name, |caps: &regex::Captures<'_>| caps[1].to_ascii_uppercase())
        .into_owned()
}

/// Key under which a flag's value is stored: camelized long name.
pub fn flag_key(long: &str) -> String {
    camelize(long.trim_start_matches('-'))
}

/// Live flag values collected while parsing one command.
///
/// Unset flags have no entry; defaults are seeded up front. A negating
/// flag (`--no-git`) seeds its target key with `true`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagState {
    values: HashMap<String, Value>,
}

impl FlagState {
    pub fn with_defaults(command: &CommandDescriptor) -> Self {
        let mut state = Self::default();
        for flag in command.flags {
            if let Some(default) = flag.default {
                state.set(&flag.key(), default.into());
            }
        }
        for flag in command.flags {
            if matches!(flag.arity, FlagArity::Negate(_)) && state.get(&flag.key()).is_none() {
                state.set(&flag.key(), Value::Bool(true));
            }
        }
        state
    }

    pub fn set(&mut self, key: &str, value: Value) {
        self.values.insert(key.to_string(), value);
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }
}

/// Ordered key-value view of the flags the user set, built once per
/// invocation. Keys follow flag declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMap {
    entries: Vec<(String, Value)>,
}

impl ArgumentMap {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    pub fn flag(&self, key: &str) -> bool {
        self.get(key).is_some_and(|v| !matches!(v, Value::Bool(false)))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, key: String, value: Value) {
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }
}

/// Extract the user-facing flag values of `command` from `state`.
///
/// A key is present iff its value is set and the key is not one of
/// [`CommandDescriptor::RESERVED_NAMES`].
pub fn normalize(command: &CommandDescriptor, state: &FlagState) -> ArgumentMap {
    let mut map = ArgumentMap::default();
    for flag in command.flags {
        let key = flag.key();
        if CommandDescriptor::is_reserved(&key) {
            continue;
        }
        if let Some(value) = state.get(&key) {
            map.insert(key, value.clone());
        }
    }
    map
}
