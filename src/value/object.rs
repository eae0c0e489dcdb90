//! Object payload: an insertion-ordered list of key/value members.
//!
//! Keys are not deduplicated. Lookups scan from the back, so when a key
//! occurs more than once the most recently added member wins.

use std::slice;

use super::{ArrayOrder, JsonString, Value};

/// One key/value pair of an [`Object`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Member {
    key: JsonString,
    value: Value,
}

impl Member {
    /// Create a member.
    pub fn new(key: impl Into<JsonString>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// The member key.
    pub fn key(&self) -> &JsonString {
        &self.key
    }

    /// The member value.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Mutable access to the member value.
    pub fn value_mut(&mut self) -> &mut Value {
        &mut self.value
    }

    /// Split into key and value.
    pub fn into_parts(self) -> (JsonString, Value) {
        (self.key, self.value)
    }
}

/// Ordered sequence of [`Member`]s.
///
/// Equality ignores member order: two objects are equal when they have the
/// same size and every key of one maps to an equal value in the other.
#[derive(Debug, Clone, Default)]
pub struct Object {
    members: Vec<Member>,
}

impl Object {
    /// Create an empty object without allocating.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty object able to hold `capacity` members.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            members: Vec::with_capacity(capacity),
        }
    }

    /// Number of members, duplicates included.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns true if there are no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Number of members the object can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.members.capacity()
    }

    /// Append a member. An existing member with the same key is kept but
    /// shadowed by the new one.
    pub fn push(&mut self, key: impl Into<JsonString>, value: impl Into<Value>) {
        self.members.push(Member::new(key, value));
    }

    /// Insert a member at `pos`, shifting later members right.
    ///
    /// Returns `pos`. Panics if `pos > len`.
    pub fn insert(&mut self, pos: usize, member: Member) -> usize {
        assert!(pos <= self.len(), "insert position {pos} out of bounds");
        self.members.insert(pos, member);
        pos
    }

    /// Remove up to `count` members starting at `pos`.
    ///
    /// Returns `pos`. Panics if `pos >= len`.
    pub fn erase(&mut self, pos: usize, count: usize) -> usize {
        assert!(pos < self.len(), "erase position {pos} out of bounds");
        let end = pos + count.min(self.len() - pos);
        self.members.drain(pos..end);
        pos
    }

    /// Remove the member that `get(key)` would return and yield its value.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        let index = self.find_index(key)?;
        Some(self.members.remove(index).value)
    }

    /// Index of the last member with this key.
    pub fn find_index(&self, key: &str) -> Option<usize> {
        self.members.iter().rposition(|m| m.key.as_str() == key)
    }

    /// Value of the last member with this key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.find_index(key).map(|i| &self.members[i].value)
    }

    /// Mutable value of the last member with this key.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        let index = self.find_index(key)?;
        Some(&mut self.members[index].value)
    }

    /// Returns true if any member has this key.
    pub fn contains_key(&self, key: &str) -> bool {
        self.find_index(key).is_some()
    }

    /// Member at `index`, if any.
    pub fn member(&self, index: usize) -> Option<&Member> {
        self.members.get(index)
    }

    /// Key of the member at `index`, if any.
    pub fn key(&self, index: usize) -> Option<&JsonString> {
        self.members.get(index).map(Member::key)
    }

    /// Value of the member at `index`, if any.
    pub fn value(&self, index: usize) -> Option<&Value> {
        self.members.get(index).map(Member::value)
    }

    /// Remove every member, keeping the allocation.
    pub fn clear(&mut self) {
        self.members.clear();
    }

    /// Ensure room for at least `new_cap` members in total.
    pub fn reserve(&mut self, new_cap: usize) {
        if new_cap > self.capacity() {
            self.members.reserve_exact(new_cap - self.members.len());
        }
    }

    /// Release unused capacity.
    pub fn shrink_to_fit(&mut self) {
        self.members.shrink_to_fit();
    }

    /// Iterate over members in insertion order.
    pub fn iter(&self) -> slice::Iter<'_, Member> {
        self.members.iter()
    }

    /// Iterate mutably over members in insertion order.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, Member> {
        self.members.iter_mut()
    }

    /// Compare with `other`, passing `order` down to nested arrays.
    ///
    /// Every member of each side must match the value the other side's
    /// lookup returns for its key.
    pub fn eq_with(&self, other: &Object, order: ArrayOrder) -> bool {
        self.len() == other.len()
            && self.members_found_in(other, order)
            && other.members_found_in(self, order)
    }

    fn members_found_in(&self, other: &Object, order: ArrayOrder) -> bool {
        self.iter().all(|m| {
            other
                .get(m.key.as_str())
                .is_some_and(|v| v.eq_with(&m.value, order))
        })
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        self.eq_with(other, ArrayOrder::Unordered)
    }
}

impl From<Vec<Member>> for Object {
    fn from(members: Vec<Member>) -> Self {
        Self { members }
    }
}

impl<K: Into<JsonString>> FromIterator<(K, Value)> for Object {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self {
            members: iter.into_iter().map(|(k, v)| Member::new(k, v)).collect(),
        }
    }
}

impl IntoIterator for Object {
    type Item = Member;
    type IntoIter = std::vec::IntoIter<Member>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.into_iter()
    }
}

impl<'a> IntoIterator for &'a Object {
    type Item = &'a Member;
    type IntoIter = slice::Iter<'a, Member>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Object {
        [("a", Value::from(1.0)), ("b", Value::from(2.0))]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_preserves_insertion_order() {
        let obj = sample();
        assert_eq!(obj.key(0).map(JsonString::as_str), Some("a"));
        assert_eq!(obj.key(1).map(JsonString::as_str), Some("b"));
        assert_eq!(obj.value(1), Some(&Value::from(2.0)));
    }

    #[test]
    fn test_lookup_last_match_wins() {
        let mut obj = sample();
        obj.push("a", 3.0);
        assert_eq!(obj.len(), 3);
        assert_eq!(obj.get("a"), Some(&Value::from(3.0)));
        assert_eq!(obj.find_index("a"), Some(2));

        assert_eq!(obj.remove("a"), Some(Value::from(3.0)));
        assert_eq!(obj.get("a"), Some(&Value::from(1.0)));
    }

    #[test]
    fn test_missing_key() {
        let obj = sample();
        assert!(obj.get("z").is_none());
        assert!(!obj.contains_key("z"));
    }

    #[test]
    fn test_get_mut() {
        let mut obj = sample();
        if let Some(v) = obj.get_mut("b") {
            v.set_bool(true);
        }
        assert_eq!(obj.get("b"), Some(&Value::Bool(true)));
    }

    #[test]
    fn test_order_independent_equality() {
        let reversed: Object = [("b", Value::from(2.0)), ("a", Value::from(1.0))]
            .into_iter()
            .collect();
        assert_eq!(sample(), reversed);

        let different: Object = [("a", Value::from(1.0)), ("b", Value::from(5.0))]
            .into_iter()
            .collect();
        assert_ne!(sample(), different);
    }

    #[test]
    fn test_duplicate_key_equality_is_symmetric() {
        let mut a = Object::new();
        a.push("k", 1.0);
        a.push("k", 2.0);
        let mut b = Object::new();
        b.push("k", 2.0);
        b.push("k", 2.0);
        assert_ne!(a, b);
        assert_ne!(b, a);

        let mut c = Object::new();
        c.push("k", 1.0);
        c.push("k", 2.0);
        assert_eq!(a, c);
        assert_eq!(c, a);
    }

    #[test]
    fn test_insert_and_erase() {
        let mut obj = sample();
        obj.insert(1, Member::new("mid", Value::Null));
        assert_eq!(obj.key(1).map(JsonString::as_str), Some("mid"));
        obj.erase(0, 2);
        assert_eq!(obj.len(), 1);
        assert_eq!(obj.key(0).map(JsonString::as_str), Some("b"));
    }

    #[test]
    fn test_reserve_and_shrink() {
        let mut obj = Object::new();
        obj.reserve(10);
        assert!(obj.capacity() >= 10);
        obj.push("k", Value::Null);
        obj.shrink_to_fit();
        assert_eq!(obj.capacity(), 1);
    }
}
