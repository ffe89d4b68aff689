use crate::entry::Entry;
use crate::splay_tree::node::Node;
use crate::splay_tree::traversal::{LevelOrder, PostOrder, PreOrder, ReverseInOrder};
use crate::splay_tree::tree;
use crate::splay_tree::{Error, Result};
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::borrow::Borrow;
use std::fmt;
use std::iter::FromIterator;
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};
use std::result;

/// An ordered map implemented using a splay tree.
///
/// A splay tree is a self-adjusting binary search tree with the additional property that recently
/// accessed entries are quick to access again. After an insert or a search, the node that was
/// touched is "splayed" to the root of the tree through a series of zig, zag, zig-zig, zag-zag,
/// zig-zag and zag-zig rotations. After a delete, the parent of the removed node is splayed
/// instead. Nodes hold no parent pointers; ancestors are found again by walking from the root.
///
/// Operations that only take `&self` (`get`, `floor`, `ceil`, `min`, `max` and the traversals)
/// never splay.
///
/// # Examples
///
/// ```
/// use splay_collections::splay_tree::SplayTree;
///
/// let mut tree = SplayTree::new();
/// tree.insert(0, 1);
/// tree.insert(3, 4);
///
/// assert_eq!(tree[&0], 1);
/// assert_eq!(tree.search(&1), None);
/// assert_eq!(tree.len(), 2);
///
/// assert_eq!(tree.min(), Some(&0));
/// assert_eq!(tree.ceil(&2), Some(&3));
///
/// tree[&0] = 2;
/// assert_eq!(tree.remove(&0), Some((0, 2)));
/// assert_eq!(tree.delete(&3, true), Some(4));
/// assert!(tree.is_empty());
/// ```
pub struct SplayTree<T, U> {
    tree: tree::Tree<T, U>,
    len: usize,
}

impl<T, U> SplayTree<T, U> {
    /// Constructs a new, empty `SplayTree<T, U>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayTree;
    ///
    /// let tree: SplayTree<u32, u32> = SplayTree::new();
    /// ```
    pub fn new() -> Self {
        SplayTree { tree: None, len: 0 }
    }

    /// Constructs a `SplayTree<T, U>` holding a single entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayTree;
    ///
    /// let tree = SplayTree::with_root(1, 2);
    /// assert_eq!(tree.len(), 1);
    /// assert_eq!(tree.root(), Some((&1, &2)));
    /// ```
    pub fn with_root(key: T, value: U) -> Self {
        SplayTree {
            tree: Some(Box::new(Node::new(key, value))),
            len: 1,
        }
    }

    /// Constructs a `SplayTree<T, U>` from an optional seed entry. Neither part gives an empty
    /// tree and both parts give a tree with one entry.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidKey` if a value is supplied without a key, and
    /// `Error::MissingValue` if a key is supplied without a value.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::{Error, SplayTree};
    ///
    /// let tree = SplayTree::from_seed(Some(1), Some("a")).unwrap();
    /// assert_eq!(tree.len(), 1);
    ///
    /// let tree = SplayTree::<u32, &str>::from_seed(None, None).unwrap();
    /// assert!(tree.is_empty());
    ///
    /// let seeded = SplayTree::<u32, &str>::from_seed(None, Some("a"));
    /// assert_eq!(seeded.err(), Some(Error::InvalidKey));
    /// ```
    pub fn from_seed(key: Option<T>, value: Option<U>) -> Result<Self> {
        match (key, value) {
            (Some(key), Some(value)) => Ok(Self::with_root(key, value)),
            (None, None) => Ok(Self::new()),
            (None, Some(_)) => Err(Error::InvalidKey),
            (Some(_), None) => Err(Error::MissingValue),
        }
    }

    /// Inserts a key-value pair into the tree and splays its node to the root. If the key already
    /// exists in the tree, its value is replaced and the old value is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// assert_eq!(tree.insert(1, 1), None);
    /// assert_eq!(tree.insert(2, 2), None);
    /// assert_eq!(tree.root(), Some((&2, &2)));
    /// assert_eq!(tree.insert(1, 3), Some(1));
    /// assert_eq!(tree.root(), Some((&1, &3)));
    /// ```
    pub fn insert(&mut self, key: T, value: U) -> Option<U>
    where
        T: Ord,
    {
        let SplayTree {
            ref mut tree,
            ref mut len,
        } = self;
        match tree::insert(tree, key, value) {
            Ok(None) => {
                *len += 1;
                None
            },
            Ok(old_value) => old_value,
            Err(err) => {
                tree::report(&err);
                None
            },
        }
    }

    /// Returns an immutable reference to the value associated with a particular key and splays
    /// its node to the root. Returns `None` and leaves the tree untouched if the key does not
    /// exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// tree.insert(1, "a");
    /// tree.insert(2, "b");
    /// assert_eq!(tree.search(&1), Some(&"a"));
    /// assert_eq!(tree.root(), Some((&1, &"a")));
    /// assert_eq!(tree.search(&3), None);
    /// assert_eq!(tree.root(), Some((&1, &"a")));
    /// ```
    pub fn search<V>(&mut self, key: &V) -> Option<&U>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree::search(&mut self.tree, key).map(|entry| &entry.value)
    }

    /// Returns a mutable reference to the value associated with a particular key and splays its
    /// node to the root. Returns `None` if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// tree.insert(1, 1);
    /// *tree.search_mut(&1).unwrap() = 2;
    /// assert_eq!(tree.get(&1), Some(&2));
    /// ```
    pub fn search_mut<V>(&mut self, key: &V) -> Option<&mut U>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree::search(&mut self.tree, key).map(|entry| &mut entry.value)
    }

    /// Checks if a key exists in the tree. Like `search`, a hit splays the key to the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// tree.insert(1, 1);
    /// assert!(!tree.contains(&0));
    /// assert!(tree.contains(&1));
    /// ```
    pub fn contains<V>(&mut self, key: &V) -> bool
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.search(key).is_some()
    }

    /// Returns an immutable reference to the value associated with a particular key. It will
    /// return `None` if the key does not exist in the tree. Note that `get` does not splay the
    /// tree in order to use a non-mutable reference.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// tree.insert(1, 1);
    /// tree.insert(2, 2);
    /// assert_eq!(tree.get(&0), None);
    /// assert_eq!(tree.get(&1), Some(&1));
    /// assert_eq!(tree.root(), Some((&2, &2)));
    /// ```
    pub fn get<V>(&self, key: &V) -> Option<&U>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree::get(&self.tree, key).map(|entry| &entry.value)
    }

    /// Removes a key-value pair from the tree. If the key exists in the tree, it will return the
    /// associated key-value pair and splay the parent of the removed node to the root. Otherwise
    /// it will return `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// tree.insert(1, 1);
    /// assert_eq!(tree.remove(&1), Some((1, 1)));
    /// assert_eq!(tree.remove(&1), None);
    /// ```
    pub fn remove<V>(&mut self, key: &V) -> Option<(T, U)>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let SplayTree {
            ref mut tree,
            ref mut len,
        } = self;
        match tree::remove(tree, key) {
            Ok(entry) => entry.map(|entry| {
                *len -= 1;
                entry.into_pair()
            }),
            Err(err) => {
                tree::report(&err);
                None
            },
        }
    }

    /// Removes a key from the tree. The removed value is returned only if `return_value` is
    /// `true`; a missing key always yields `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// tree.insert(1, "a");
    /// tree.insert(2, "b");
    /// assert_eq!(tree.delete(&1, false), None);
    /// assert_eq!(tree.delete(&2, true), Some("b"));
    /// assert!(tree.is_empty());
    /// ```
    pub fn delete<V>(&mut self, key: &V, return_value: bool) -> Option<U>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.remove(key)
            .and_then(|(_, value)| if return_value { Some(value) } else { None })
    }

    /// Returns the number of elements in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// tree.insert(1, 1);
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayTree;
    ///
    /// let tree: SplayTree<u32, u32> = SplayTree::new();
    /// assert!(tree.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears the tree, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// tree.insert(1, 1);
    /// tree.insert(2, 2);
    /// tree.clear();
    /// assert_eq!(tree.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        tree::dismantle(&mut self.tree);
        self.len = 0;
    }

    /// Returns the entry at the root of the tree, which is the most recently touched one.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// assert_eq!(tree.root(), None);
    /// tree.insert(1, 1);
    /// tree.insert(2, 2);
    /// assert_eq!(tree.root(), Some((&2, &2)));
    /// ```
    pub fn root(&self) -> Option<(&T, &U)> {
        self.tree.as_ref().map(|node| node.entry.as_pair())
    }

    /// Returns a key in the tree that is less than or equal to a particular key. Returns `None`
    /// if such a key does not exist. Note that `floor` does not splay the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// tree.insert(1, 1);
    /// assert_eq!(tree.floor(&0), None);
    /// assert_eq!(tree.floor(&2), Some(&1));
    /// ```
    pub fn floor<V>(&self, key: &V) -> Option<&T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree::floor(&self.tree, key).map(|entry| &entry.key)
    }

    /// Returns a key in the tree that is greater than or equal to a particular key. Returns
    /// `None` if such a key does not exist. Note that `ceil` does not splay the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// tree.insert(1, 1);
    /// assert_eq!(tree.ceil(&0), Some(&1));
    /// assert_eq!(tree.ceil(&2), None);
    /// ```
    pub fn ceil<V>(&self, key: &V) -> Option<&T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree::ceil(&self.tree, key).map(|entry| &entry.key)
    }

    /// Returns the minimum key of the tree. Returns `None` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// tree.insert(1, 1);
    /// tree.insert(3, 3);
    /// assert_eq!(tree.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&T> {
        tree::min(&self.tree).map(|entry| &entry.key)
    }

    /// Returns the maximum key of the tree. Returns `None` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// tree.insert(1, 1);
    /// tree.insert(3, 3);
    /// assert_eq!(tree.max(), Some(&3));
    /// ```
    pub fn max(&self) -> Option<&T> {
        tree::max(&self.tree).map(|entry| &entry.key)
    }

    /// Walks the whole tree and verifies that keys are strictly ordered and that `len` matches
    /// the number of nodes.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvariantViolation` describing the first problem found.
    pub fn check_invariants(&self) -> Result<()>
    where
        T: Ord,
    {
        tree::check(&self.tree, self.len)
    }

    /// Returns an iterator over the tree. The iterator will yield key-value pairs using in-order
    /// traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// tree.insert(1, 1);
    /// tree.insert(2, 2);
    ///
    /// let mut iterator = tree.iter();
    /// assert_eq!(iterator.next(), Some((&1, &1)));
    /// assert_eq!(iterator.next(), Some((&2, &2)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> SplayTreeIter<T, U> {
        SplayTreeIter {
            current: &self.tree,
            stack: Vec::new(),
        }
    }

    /// Returns a mutable iterator over the tree. The iterator will yield key-value pairs using
    /// in-order traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// tree.insert(1, 1);
    /// tree.insert(2, 2);
    ///
    /// for (key, value) in &mut tree {
    ///     *value += 1;
    /// }
    ///
    /// let mut iterator = tree.iter_mut();
    /// assert_eq!(iterator.next(), Some((&1, &mut 2)));
    /// assert_eq!(iterator.next(), Some((&2, &mut 3)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter_mut(&mut self) -> SplayTreeIterMut<T, U> {
        SplayTreeIterMut {
            current: self.tree.as_mut().map(|node| &mut **node),
            stack: Vec::new(),
        }
    }

    /// Returns an iterator yielding key-value pairs in ascending key order. Same as `iter`.
    pub fn in_order(&self) -> SplayTreeIter<T, U> {
        self.iter()
    }

    /// Returns an iterator yielding key-value pairs in descending key order.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayTree;
    ///
    /// let tree: SplayTree<_, _> = vec![(1, 'a'), (2, 'b'), (3, 'c')].into_iter().collect();
    /// let keys: Vec<_> = tree.reverse_in_order().map(|(key, _)| *key).collect();
    /// assert_eq!(keys, vec![3, 2, 1]);
    /// ```
    pub fn reverse_in_order(&self) -> ReverseInOrder<T, U> {
        ReverseInOrder::new(&self.tree)
    }

    /// Returns an iterator yielding each node before its left subtree and then its right
    /// subtree, starting at the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// tree.insert(1, 'a');
    /// tree.insert(2, 'b');
    /// tree.insert(0, 'c');
    ///
    /// // inserting 0 last splays it above 1 and 2
    /// let keys: Vec<_> = tree.pre_order().map(|(key, _)| *key).collect();
    /// assert_eq!(keys, vec![0, 1, 2]);
    /// ```
    pub fn pre_order(&self) -> PreOrder<T, U> {
        PreOrder::new(&self.tree)
    }

    /// Returns an iterator yielding each node after its left subtree and its right subtree.
    pub fn post_order(&self) -> PostOrder<T, U> {
        PostOrder::new(&self.tree)
    }

    /// Returns an iterator yielding nodes breadth-first, starting at the root and visiting left
    /// children before right children.
    pub fn level_order(&self) -> LevelOrder<T, U> {
        LevelOrder::new(&self.tree)
    }
}

impl<T, U> Drop for SplayTree<T, U> {
    fn drop(&mut self) {
        tree::dismantle(&mut self.tree);
    }
}

impl<T, U> IntoIterator for SplayTree<T, U> {
    type IntoIter = SplayTreeIntoIter<T, U>;
    type Item = (T, U);

    fn into_iter(mut self) -> Self::IntoIter {
        Self::IntoIter {
            current: self.tree.take(),
            stack: Vec::new(),
        }
    }
}

impl<'a, T, U> IntoIterator for &'a SplayTree<T, U>
where
    T: 'a,
    U: 'a,
{
    type IntoIter = SplayTreeIter<'a, T, U>;
    type Item = (&'a T, &'a U);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, U> IntoIterator for &'a mut SplayTree<T, U>
where
    T: 'a,
    U: 'a,
{
    type IntoIter = SplayTreeIterMut<'a, T, U>;
    type Item = (&'a T, &'a mut U);

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// An owning iterator for `SplayTree<T, U>`.
///
/// This iterator traverses the elements of the tree in-order and yields owned entries.
pub struct SplayTreeIntoIter<T, U> {
    current: tree::Tree<T, U>,
    stack: Vec<Node<T, U>>,
}

impl<T, U> Iterator for SplayTreeIntoIter<T, U> {
    type Item = (T, U);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(mut node) = self.current.take() {
            self.current = node.left.take();
            self.stack.push(*node);
        }
        self.stack.pop().map(|node| {
            let Node { entry, right, .. } = node;
            self.current = right;
            entry.into_pair()
        })
    }
}

impl<T, U> Drop for SplayTreeIntoIter<T, U> {
    fn drop(&mut self) {
        while self.next().is_some() {}
    }
}

/// An iterator for `SplayTree<T, U>`.
///
/// This iterator traverses the elements of the tree in-order and yields immutable references.
pub struct SplayTreeIter<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    current: &'a tree::Tree<T, U>,
    stack: Vec<&'a Node<T, U>>,
}

impl<'a, T, U> Iterator for SplayTreeIter<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    type Item = (&'a T, &'a U);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.current {
            self.current = &node.left;
            self.stack.push(node);
        }
        self.stack.pop().map(|node| {
            self.current = &node.right;
            node.entry.as_pair()
        })
    }
}

type BorrowedIterEntryMut<'a, T, U> = (&'a mut Entry<T, U>, Option<&'a mut Node<T, U>>);

/// A mutable iterator for `SplayTree<T, U>`.
///
/// This iterator traverses the elements of the tree in-order and yields mutable references.
pub struct SplayTreeIterMut<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    current: Option<&'a mut Node<T, U>>,
    stack: Vec<BorrowedIterEntryMut<'a, T, U>>,
}

impl<'a, T, U> Iterator for SplayTreeIterMut<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    type Item = (&'a T, &'a mut U);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.current.take() {
            let Node { entry, left, right } = node;
            self.current = left.as_mut().map(|node| &mut **node);
            self.stack.push((entry, right.as_mut().map(|node| &mut **node)));
        }
        self.stack.pop().map(|(entry, right)| {
            self.current = right;
            (&entry.key, &mut entry.value)
        })
    }
}

impl<T, U> Default for SplayTree<T, U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, U> fmt::Debug for SplayTree<T, U>
where
    T: fmt::Debug,
    U: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Formats the entries in pre-order, so the first pair shown is the root.
impl<T, U> fmt::Display for SplayTree<T, U>
where
    T: fmt::Display,
    U: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        for (index, (key, value)) in self.pre_order().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "({}, {})", key, value)?;
        }
        write!(f, "]")
    }
}

impl<T, U> PartialEq for SplayTree<T, U>
where
    T: PartialEq,
    U: PartialEq,
{
    fn eq(&self, other: &SplayTree<T, U>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T, U> Eq for SplayTree<T, U>
where
    T: Eq,
    U: Eq,
{
}

impl<T, U> FromIterator<(T, U)> for SplayTree<T, U>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (T, U)>,
    {
        let mut tree = SplayTree::new();
        tree.extend(iter);
        tree
    }
}

impl<T, U> Extend<(T, U)> for SplayTree<T, U>
where
    T: Ord,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = (T, U)>,
    {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<'a, T, U, V> Index<&'a V> for SplayTree<T, U>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    type Output = U;

    fn index(&self, key: &V) -> &Self::Output {
        self.get(key).expect("Error: key does not exist.")
    }
}

impl<'a, T, U, V> IndexMut<&'a V> for SplayTree<T, U>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    fn index_mut(&mut self, key: &V) -> &mut Self::Output {
        self.search_mut(key).expect("Error: key does not exist.")
    }
}

impl<T, U> Serialize for SplayTree<T, U>
where
    T: Serialize,
    U: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

struct SplayTreeVisitor<T, U> {
    marker: PhantomData<(T, U)>,
}

impl<'de, T, U> Visitor<'de> for SplayTreeVisitor<T, U>
where
    T: Deserialize<'de> + Ord,
    U: Deserialize<'de>,
{
    type Value = SplayTree<T, U>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map")
    }

    fn visit_map<A>(self, mut access: A) -> result::Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut tree = SplayTree::new();
        while let Some((key, value)) = access.next_entry()? {
            tree.insert(key, value);
        }
        Ok(tree)
    }
}

impl<'de, T, U> Deserialize<'de> for SplayTree<T, U>
where
    T: Deserialize<'de> + Ord,
    U: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(SplayTreeVisitor {
            marker: PhantomData,
        })
    }
}
