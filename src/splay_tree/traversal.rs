use crate::splay_tree::node::Node;
use crate::splay_tree::tree::Tree;
use std::collections::VecDeque;

fn as_node<T, U>(tree: &Tree<T, U>) -> Option<&Node<T, U>> {
    tree.as_ref().map(|node| &**node)
}

/// An iterator for `SplayTree<T, U>` that yields entries in descending key order.
pub struct ReverseInOrder<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    current: &'a Tree<T, U>,
    stack: Vec<&'a Node<T, U>>,
}

impl<'a, T, U> ReverseInOrder<'a, T, U> {
    pub(crate) fn new(tree: &'a Tree<T, U>) -> Self {
        ReverseInOrder {
            current: tree,
            stack: Vec::new(),
        }
    }
}

impl<'a, T, U> Iterator for ReverseInOrder<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    type Item = (&'a T, &'a U);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(ref node) = self.current {
            self.current = &node.right;
            self.stack.push(node);
        }
        self.stack.pop().map(|node| {
            self.current = &node.left;
            node.entry.as_pair()
        })
    }
}

/// An iterator for `SplayTree<T, U>` that yields each node before its left and right subtrees.
pub struct PreOrder<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    stack: Vec<&'a Node<T, U>>,
}

impl<'a, T, U> PreOrder<'a, T, U> {
    pub(crate) fn new(tree: &'a Tree<T, U>) -> Self {
        PreOrder {
            stack: as_node(tree).into_iter().collect(),
        }
    }
}

impl<'a, T, U> Iterator for PreOrder<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    type Item = (&'a T, &'a U);

    fn next(&mut self) -> Option<Self::Item> {
        self.stack.pop().map(|node| {
            self.stack.extend(as_node(&node.right));
            self.stack.extend(as_node(&node.left));
            node.entry.as_pair()
        })
    }
}

/// An iterator for `SplayTree<T, U>` that yields each node after its left and right subtrees.
pub struct PostOrder<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    // the flag marks nodes whose children have already been scheduled
    stack: Vec<(&'a Node<T, U>, bool)>,
}

impl<'a, T, U> PostOrder<'a, T, U> {
    pub(crate) fn new(tree: &'a Tree<T, U>) -> Self {
        PostOrder {
            stack: as_node(tree).map(|node| (node, false)).into_iter().collect(),
        }
    }
}

impl<'a, T, U> Iterator for PostOrder<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    type Item = (&'a T, &'a U);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, expanded)) = self.stack.pop() {
            if expanded {
                return Some(node.entry.as_pair());
            }
            self.stack.push((node, true));
            self.stack.extend(as_node(&node.right).map(|node| (node, false)));
            self.stack.extend(as_node(&node.left).map(|node| (node, false)));
        }
        None
    }
}

/// An iterator for `SplayTree<T, U>` that yields nodes breadth-first, starting at the root.
pub struct LevelOrder<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    queue: VecDeque<&'a Node<T, U>>,
}

impl<'a, T, U> LevelOrder<'a, T, U> {
    pub(crate) fn new(tree: &'a Tree<T, U>) -> Self {
        LevelOrder {
            queue: as_node(tree).into_iter().collect(),
        }
    }
}

impl<'a, T, U> Iterator for LevelOrder<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    type Item = (&'a T, &'a U);

    fn next(&mut self) -> Option<Self::Item> {
        self.queue.pop_front().map(|node| {
            self.queue.extend(as_node(&node.left));
            self.queue.extend(as_node(&node.right));
            node.entry.as_pair()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{LevelOrder, PostOrder, PreOrder, ReverseInOrder};
    use crate::splay_tree::node::Node;
    use crate::splay_tree::tree::Tree;

    fn node(key: u32, left: Tree<u32, char>, right: Tree<u32, char>) -> Tree<u32, char> {
        let mut node = Node::new(key, (b'a' + key as u8) as char);
        node.left = left;
        node.right = right;
        Some(Box::new(node))
    }

    //       4
    //     /   \
    //    2     5
    //   / \     \
    //  1   3     6
    fn sample() -> Tree<u32, char> {
        let two = node(2, node(1, None, None), node(3, None, None));
        let five = node(5, None, node(6, None, None));
        node(4, two, five)
    }

    fn keys<'a, I>(iter: I) -> Vec<u32>
    where
        I: Iterator<Item = (&'a u32, &'a char)>,
    {
        iter.map(|(key, _)| *key).collect()
    }

    #[test]
    fn test_reverse_in_order() {
        let tree = sample();
        assert_eq!(keys(ReverseInOrder::new(&tree)), vec![6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_pre_order() {
        let tree = sample();
        assert_eq!(keys(PreOrder::new(&tree)), vec![4, 2, 1, 3, 5, 6]);
    }

    #[test]
    fn test_post_order() {
        let tree = sample();
        assert_eq!(keys(PostOrder::new(&tree)), vec![1, 3, 2, 6, 5, 4]);
    }

    #[test]
    fn test_level_order() {
        let tree = sample();
        assert_eq!(keys(LevelOrder::new(&tree)), vec![4, 2, 5, 1, 3, 6]);
    }

    #[test]
    fn test_values_follow_keys() {
        let tree = sample();
        let mut iter = LevelOrder::new(&tree);
        assert_eq!(iter.next(), Some((&4, &'e')));
        assert_eq!(iter.next(), Some((&2, &'c')));
    }

    #[test]
    fn test_empty() {
        let tree: Tree<u32, char> = None;
        assert_eq!(ReverseInOrder::new(&tree).next(), None);
        assert_eq!(PreOrder::new(&tree).next(), None);
        assert_eq!(PostOrder::new(&tree).next(), None);
        assert_eq!(LevelOrder::new(&tree).next(), None);
    }
}
