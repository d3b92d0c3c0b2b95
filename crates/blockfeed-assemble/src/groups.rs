use std::collections::HashMap;
use std::hash::Hash;

/// Insertion-ordered multimap for grouping child rows under a parent key.
///
/// Push order is the only order: values come back in the exact order they
/// were pushed, and groups are only ever reached through their key, so no
/// hash-iteration order is observable through the API.
pub struct OrderedGroups<K, V> {
    groups: Vec<(K, Vec<V>)>,
    index: HashMap<K, usize>,
}

impl<K: Eq + Hash + Clone, V> OrderedGroups<K, V> {
    pub fn new() -> Self {
        Self {
            groups: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Append `value` to the group for `key`, creating the group on first
    /// use.
    pub fn push(&mut self, key: K, value: V) {
        match self.index.get(&key) {
            Some(&position) => self.groups[position].1.push(value),
            None => {
                self.index.insert(key.clone(), self.groups.len());
                self.groups.push((key, vec![value]));
            }
        }
    }

    /// The group for `key`, in push order.
    pub fn get(&self, key: &K) -> Option<&[V]> {
        self.index
            .get(key)
            .map(|&position| self.groups[position].1.as_slice())
    }

    /// Remove and return the group for `key`, or an empty list when the key
    /// was never pushed.
    pub fn take(&mut self, key: &K) -> Vec<V> {
        match self.index.remove(key) {
            Some(position) => std::mem::take(&mut self.groups[position].1),
            None => Vec::new(),
        }
    }

    /// Number of distinct keys pushed so far.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

impl<K: Eq + Hash + Clone, V> Default for OrderedGroups<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_keep_push_order_within_a_group() {
        let mut groups = OrderedGroups::new();
        groups.push("a", 1);
        groups.push("b", 10);
        groups.push("a", 2);
        groups.push("a", 3);

        assert_eq!(groups.get(&"a"), Some(&[1, 2, 3][..]));
        assert_eq!(groups.get(&"b"), Some(&[10][..]));
        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn take_drains_the_group_once() {
        let mut groups = OrderedGroups::new();
        groups.push(7, "x");
        groups.push(7, "y");

        assert_eq!(groups.take(&7), vec!["x", "y"]);
        assert_eq!(groups.take(&7), Vec::<&str>::new());
    }

    #[test]
    fn missing_key_yields_empty_list() {
        let mut groups: OrderedGroups<i64, i32> = OrderedGroups::new();
        assert!(groups.get(&1).is_none());
        assert!(groups.take(&1).is_empty());
        assert!(groups.is_empty());
    }
}
