/// A decoded bencode value.
///
/// Bencode has exactly four data types; adding a variant here forces every
/// consumer to handle it at compile time.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(i64),
    /// Raw bytes; not guaranteed to be valid UTF-8.
    ByteString(Vec<u8>),
    List(Vec<Value>),
    Dict(Dict),
}

impl Value {
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::ByteString(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// Returns a UTF-8 view of a byte string, when it is one and is valid.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::ByteString(bytes) => std::str::from_utf8(bytes).ok(),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_dict(&self) -> Option<&Dict> {
        match self {
            Value::Dict(dict) => Some(dict),
            _ => None,
        }
    }
}

/// A bencode dictionary.
///
/// Keys are raw byte strings. Insertion order is preserved as decoded;
/// canonical bencode wants keys sorted, but sorting is left to consumers
/// (the renderer sorts for display, the encoder sorts for output).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dict(Vec<(Vec<u8>, Value)>);

impl Dict {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a key/value pair. A duplicate key replaces the previous
    /// value in place, keeping the original position.
    pub fn insert(&mut self, key: Vec<u8>, value: Value) {
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn get(&self, key: &[u8]) -> Option<&Value> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &[u8]) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries in decode (insertion) order.
    pub fn iter(&self) -> impl Iterator<Item = (&[u8], &Value)> {
        self.0.iter().map(|(k, v)| (k.as_slice(), v))
    }

    /// Entries sorted by lexicographic byte order of the key.
    pub fn sorted_entries(&self) -> Vec<(&[u8], &Value)> {
        let mut entries: Vec<(&[u8], &Value)> = self.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

impl FromIterator<(Vec<u8>, Value)> for Dict {
    fn from_iter<I: IntoIterator<Item = (Vec<u8>, Value)>>(iter: I) -> Self {
        let mut dict = Dict::new();
        for (key, value) in iter {
            dict.insert(key, value);
        }
        dict
    }
}
