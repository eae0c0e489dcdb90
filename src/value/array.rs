//! Array payload: a contiguous, owned sequence of values.

use std::ops::{Index, IndexMut};
use std::slice;

use super::{ArrayOrder, Value};

/// Owned sequence of [`Value`]s.
///
/// `reserve` rounds the requested capacity up to the next power of two;
/// pushes beyond capacity grow the storage geometrically. Element order is
/// preserved by every operation, but the default equality ignores it (see
/// [`ArrayOrder`]).
#[derive(Debug, Clone, Default)]
pub struct Array {
    items: Vec<Value>,
}

impl Array {
    /// Create an empty array without allocating.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty array able to hold `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut array = Self::new();
        array.reserve(capacity);
        array
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if there are no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of elements the array can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Element at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    /// Mutable element at `index`, if any.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Value> {
        self.items.get_mut(index)
    }

    /// Append a value.
    pub fn push(&mut self, value: Value) {
        self.items.push(value);
    }

    /// Remove and return the last value.
    pub fn pop(&mut self) -> Option<Value> {
        self.items.pop()
    }

    /// Insert `value` at `pos`, shifting later elements right.
    ///
    /// Returns `pos`. Panics if `pos > len`.
    pub fn insert(&mut self, pos: usize, value: Value) -> usize {
        assert!(pos <= self.len(), "insert position {pos} out of bounds");
        self.items.insert(pos, value);
        pos
    }

    /// Remove up to `count` elements starting at `pos`, shifting later
    /// elements left.
    ///
    /// `count` is clamped to the elements available. Returns `pos`. Panics
    /// if `pos >= len`.
    pub fn erase(&mut self, pos: usize, count: usize) -> usize {
        assert!(pos < self.len(), "erase position {pos} out of bounds");
        let end = pos + count.min(self.len() - pos);
        self.items.drain(pos..end);
        pos
    }

    /// Remove every element, keeping the allocation.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Ensure room for at least `new_cap` elements in total.
    ///
    /// The capacity becomes the next power of two not below `new_cap`.
    /// Does nothing if the capacity is already large enough.
    pub fn reserve(&mut self, new_cap: usize) {
        if new_cap <= self.capacity() {
            return;
        }
        let target = new_cap.checked_next_power_of_two().unwrap_or(new_cap);
        self.items.reserve_exact(target - self.items.len());
    }

    /// Release unused capacity so that `capacity() == len()`.
    pub fn shrink_to_fit(&mut self) {
        self.items.shrink_to_fit();
    }

    /// Position of the first element equal to `value`.
    pub fn find(&self, value: &Value) -> Option<usize> {
        self.items.iter().position(|item| item == value)
    }

    /// Iterate over the elements in order.
    pub fn iter(&self) -> slice::Iter<'_, Value> {
        self.items.iter()
    }

    /// Iterate mutably over the elements in order.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, Value> {
        self.items.iter_mut()
    }

    /// Borrow the elements as a slice.
    pub fn as_slice(&self) -> &[Value] {
        &self.items
    }

    /// Compare with `other` under the given ordering rule.
    ///
    /// With [`ArrayOrder::Unordered`] the arrays are equal when they hold the
    /// same elements with the same multiplicities.
    pub fn eq_with(&self, other: &Array, order: ArrayOrder) -> bool {
        if self.len() != other.len() {
            return false;
        }
        match order {
            ArrayOrder::Ordered => self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| a.eq_with(b, order)),
            ArrayOrder::Unordered => {
                let mut matched = vec![false; self.len()];
                other.iter().all(|wanted| {
                    let hit = self
                        .iter()
                        .enumerate()
                        .find(|(i, item)| !matched[*i] && item.eq_with(wanted, order));
                    match hit {
                        Some((i, _)) => {
                            matched[i] = true;
                            true
                        }
                        None => false,
                    }
                })
            }
        }
    }
}

impl PartialEq for Array {
    fn eq(&self, other: &Self) -> bool {
        self.eq_with(other, ArrayOrder::Unordered)
    }
}

impl Index<usize> for Array {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        &self.items[index]
    }
}

impl IndexMut<usize> for Array {
    fn index_mut(&mut self, index: usize) -> &mut Value {
        &mut self.items[index]
    }
}

impl From<Vec<Value>> for Array {
    fn from(items: Vec<Value>) -> Self {
        Self { items }
    }
}

impl From<Array> for Vec<Value> {
    fn from(array: Array) -> Self {
        array.items
    }
}

impl FromIterator<Value> for Array {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Array {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a Value;
    type IntoIter = slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
