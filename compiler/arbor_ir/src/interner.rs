//! String interner for identifiers and operator tokens.
//!
//! Provides O(1) interning and lookup with thread-safe interior mutability,
//! so one interner can be shared by the builder, the formatter, and the
//! evaluator without handing out mutable references.

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::Name;

/// Operator tokens pre-interned at construction, in table order after the
/// empty string.
const PRE_INTERNED: [&str; 4] = ["+", "-", "*", "/"];

/// Interner storage: the lookup map and the string table it indexes.
struct InternTable {
    /// Map from string content to table index.
    map: FxHashMap<&'static str, u32>,
    /// Storage for string contents, indexed by `Name`.
    strings: Vec<&'static str>,
}

impl InternTable {
    fn with_defaults() -> Self {
        let mut table = InternTable {
            map: FxHashMap::default(),
            strings: Vec::with_capacity(64),
        };
        // Empty string lives at index 0 so Name::EMPTY always resolves.
        table.insert("");
        for token in PRE_INTERNED {
            table.insert(token);
        }
        table
    }

    fn insert(&mut self, s: &'static str) -> Name {
        let index = match u32::try_from(self.strings.len()) {
            Ok(index) => index,
            Err(_) => panic!("interner capacity exceeded at {} strings", self.strings.len()),
        };
        self.map.insert(s, index);
        self.strings.push(s);
        Name::from_raw(index)
    }
}

/// String interner.
///
/// Interned strings live for the life of the process (contents are leaked
/// into `'static` storage), which is what lets [`resolve`](Self::resolve)
/// hand back `&'static str` without tying borrows to the interner.
///
/// # Thread Safety
///
/// Uses an `RwLock` so reads (the common case once a program is built) never
/// contend with each other.
pub struct StringInterner {
    table: RwLock<InternTable>,
}

impl StringInterner {
    /// Create a new interner with the empty string and the four arithmetic
    /// operator tokens pre-interned.
    pub fn new() -> Self {
        StringInterner {
            table: RwLock::new(InternTable::with_defaults()),
        }
    }

    /// Intern a string, returning its `Name`.
    ///
    /// Interning the same content twice returns the same `Name`.
    pub fn intern(&self, s: &str) -> Name {
        // Fast path: already interned.
        {
            let table = self.table.read();
            if let Some(&index) = table.map.get(s) {
                return Name::from_raw(index);
            }
        }

        let mut table = self.table.write();
        // Re-check under the write lock: another caller may have interned
        // between the read and write acquisitions.
        if let Some(&index) = table.map.get(s) {
            return Name::from_raw(index);
        }
        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());
        table.insert(leaked)
    }

    /// Resolve a `Name` back to its string content.
    ///
    /// The `Name` must come from this interner; a foreign id panics.
    pub fn resolve(&self, name: Name) -> &'static str {
        self.table.read().strings[name.index()]
    }

    /// Number of interned strings (including the pre-interned set).
    pub fn len(&self) -> usize {
        self.table.read().strings.len()
    }

    /// Returns true if only pre-interned strings are present.
    pub fn is_empty(&self) -> bool {
        self.len() <= 1 + PRE_INTERNED.len()
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
