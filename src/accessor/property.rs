//! Parsed property values handed over by the document parser.
//!
//! Accessor metadata arrives as an ordered bag of named, already-typed
//! values - the document parser is an external collaborator. The bag
//! preserves document order; values carry small lenient coercions so
//! descriptor construction can pick the representation each field needs.

/// One parsed property value.
#[derive(Clone, Debug, PartialEq)]
pub enum PropertyValue {
    /// Integer scalar.
    Integer(i64),
    /// Floating-point scalar.
    Number(f64),
    /// Text value.
    Text(String),
    /// Array of numbers.
    NumberArray(Vec<f64>),
}

impl PropertyValue {
    /// Coerce to a signed integer. Numbers truncate toward zero.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(v) => Some(*v),
            Self::Number(v) => Some(*v as i64),
            Self::Text(_) | Self::NumberArray(_) => None,
        }
    }

    /// Coerce to a non-negative index or count.
    pub fn as_usize(&self) -> Option<usize> {
        self.as_i64().and_then(|v| usize::try_from(v).ok())
    }

    /// Coerce to a floating-point scalar.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(v) => Some(*v as f64),
            Self::Number(v) => Some(*v),
            Self::Text(_) | Self::NumberArray(_) => None,
        }
    }

    /// The text value, if this is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The number array, if this is one.
    pub fn as_f64_array(&self) -> Option<&[f64]> {
        match self {
            Self::NumberArray(v) => Some(v),
            _ => None,
        }
    }
}

impl From<i64> for PropertyValue {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for PropertyValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<&str> for PropertyValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<Vec<f64>> for PropertyValue {
    fn from(v: Vec<f64>) -> Self {
        Self::NumberArray(v)
    }
}

/// Ordered name-to-value mapping.
///
/// Iteration order equals insertion order, which equals document order when
/// the parser fills the bag front to back.
#[derive(Clone, Debug, Default)]
pub struct PropertyBag {
    entries: Vec<(String, PropertyValue)>,
}

impl PropertyBag {
    /// Create an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a named value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<PropertyValue>) {
        self.entries.push((name.into(), value.into()));
    }

    /// Look up a value by name (first match).
    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Property names in document order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// (name, value) pairs in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the bag holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coercions() {
        assert_eq!(PropertyValue::Integer(7).as_i64(), Some(7));
        assert_eq!(PropertyValue::Integer(7).as_f64(), Some(7.0));
        assert_eq!(PropertyValue::Number(2.9).as_i64(), Some(2));
        assert_eq!(PropertyValue::Integer(-1).as_usize(), None);
        assert_eq!(PropertyValue::Text("VEC3".into()).as_str(), Some("VEC3"));
        assert_eq!(PropertyValue::Text("VEC3".into()).as_i64(), None);
        assert_eq!(
            PropertyValue::NumberArray(vec![1.0, 2.0]).as_f64_array(),
            Some(&[1.0, 2.0][..])
        );
    }

    #[test]
    fn test_bag_order() {
        let mut bag = PropertyBag::new();
        bag.insert("count", 3i64);
        bag.insert("type", "VEC3");
        bag.insert("byteOffset", 0i64);
        let keys: Vec<_> = bag.keys().collect();
        assert_eq!(keys, vec!["count", "type", "byteOffset"]);
        assert_eq!(bag.get("type"), Some(&PropertyValue::Text("VEC3".into())));
        assert_eq!(bag.get("missing"), None);
        assert_eq!(bag.len(), 3);
    }
}
