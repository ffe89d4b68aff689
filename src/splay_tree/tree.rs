use crate::entry::Entry;
use crate::splay_tree::node::Node;
use crate::splay_tree::{Direction, Error, Result};
use log::{debug, trace, warn};
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::mem;

pub type Tree<T, U> = Option<Box<Node<T, U>>>;

/// Result of walking from the root towards a key.
#[derive(Debug, Eq, PartialEq)]
pub enum Search {
    /// Path to the node holding the key.
    Found(Vec<Direction>),
    /// Path to the empty slot where the key would be attached.
    Vacant(Vec<Direction>),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Step {
    Zig,
    Zag,
    ZigZig,
    ZagZag,
    ZigZag,
    ZagZig,
}

impl Step {
    fn single(dir: Direction) -> Step {
        match dir {
            Direction::Left => Step::Zig,
            Direction::Right => Step::Zag,
        }
    }

    // `outer` is the grandparent-to-parent side, `inner` the parent-to-target side
    fn double(outer: Direction, inner: Direction) -> Step {
        match (outer, inner) {
            (Direction::Left, Direction::Left) => Step::ZigZig,
            (Direction::Right, Direction::Right) => Step::ZagZag,
            (Direction::Left, Direction::Right) => Step::ZigZag,
            (Direction::Right, Direction::Left) => Step::ZagZig,
        }
    }
}

pub fn locate<T, U, V>(tree: &Tree<T, U>, key: &V) -> Search
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    let mut path = Vec::new();
    let mut curr = tree;
    while let Some(node) = curr {
        let dir = match key.cmp(node.entry.key.borrow()) {
            Ordering::Less => Direction::Left,
            Ordering::Greater => Direction::Right,
            Ordering::Equal => return Search::Found(path),
        };
        path.push(dir);
        curr = node.child(dir);
    }
    Search::Vacant(path)
}

/// Re-walks `path` from the root and returns the slot it ends at, which may be empty.
pub fn descend<'a, T, U>(
    tree: &'a mut Tree<T, U>,
    path: &[Direction],
) -> Result<&'a mut Tree<T, U>> {
    let mut curr = tree;
    for &dir in path {
        curr = match { curr } {
            Some(node) => node.child_mut(dir),
            None => return Err(Error::InvariantViolation("path leads past a leaf")),
        };
    }
    Ok(curr)
}

fn rotate_twice<T, U>(
    grandparent: &mut Node<T, U>,
    outer: Direction,
    inner: Direction,
) -> Result<()> {
    if outer == inner {
        grandparent.lift(outer)?;
    } else {
        grandparent
            .child_mut(outer)
            .as_mut()
            .ok_or(Error::InvariantViolation("missing parent"))?
            .lift(inner)?;
    }
    grandparent.lift(outer)
}

/// Moves the node at the end of `path` to the root.
///
/// The target is lifted two levels at a time by rotating at its grandparent's slot, which is
/// found again from the root before each step. A target one level below the root finishes with
/// a single rotation. If a walk or rotation finds a child missing, splaying stops; every
/// rotation performed up to that point preserves the ordering of the tree.
pub fn splay<T, U>(tree: &mut Tree<T, U>, path: &[Direction]) -> Result<()> {
    let mut depth = path.len();
    while depth >= 2 {
        let (outer, inner) = (path[depth - 2], path[depth - 1]);
        trace!("splay {:?} at depth {}", Step::double(outer, inner), depth);
        let grandparent = descend(tree, &path[..depth - 2])?
            .as_mut()
            .ok_or(Error::InvariantViolation("missing grandparent"))?;
        rotate_twice(grandparent, outer, inner)?;
        depth -= 2;
    }
    if depth == 1 {
        trace!("splay {:?} at the root", Step::single(path[0]));
        tree.as_mut()
            .ok_or(Error::InvariantViolation("missing root"))?
            .lift(path[0])?;
    }
    Ok(())
}

/// Reports an error that correct code can never produce. Panics in debug builds; release builds
/// log it and carry on with the tree in its current, still ordered, shape.
pub fn report(err: &Error) {
    warn!("abandoning tree operation: {}", err);
    debug_assert!(false, "tree operation failed: {}", err);
}

/// Splays towards the root and reports a failure instead of returning it.
pub fn splay_or_report<T, U>(tree: &mut Tree<T, U>, path: &[Direction]) -> bool {
    match splay(tree, path) {
        Ok(()) => true,
        Err(err) => {
            report(&err);
            false
        },
    }
}

/// Inserts `key` or overwrites its value, then splays its node to the root. Returns the old
/// value if the key was already present.
pub fn insert<T, U>(tree: &mut Tree<T, U>, key: T, value: U) -> Result<Option<U>>
where
    T: Ord,
{
    let (path, replaced) = match locate(tree, &key) {
        Search::Found(path) => {
            let node = descend(tree, &path)?
                .as_mut()
                .ok_or(Error::InvariantViolation("located node is missing"))?;
            let old_value = mem::replace(&mut node.entry.value, value);
            (path, Some(old_value))
        },
        Search::Vacant(path) => {
            let slot = descend(tree, &path)?;
            if slot.is_some() {
                return Err(Error::InvariantViolation("vacant slot is occupied"));
            }
            *slot = Some(Box::new(Node::new(key, value)));
            (path, None)
        },
    };
    splay_or_report(tree, &path);
    Ok(replaced)
}

/// Finds `key` and splays its node to the root. A miss leaves the tree untouched.
pub fn search<'a, T, U, V>(tree: &'a mut Tree<T, U>, key: &V) -> Option<&'a mut Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    let path = match locate(tree, key) {
        Search::Found(path) => path,
        Search::Vacant(_) => return None,
    };
    if splay_or_report(tree, &path) {
        tree.as_mut().map(|node| &mut node.entry)
    } else {
        match locate(tree, key) {
            Search::Found(path) => descend(tree, &path).ok()?.as_mut().map(|node| &mut node.entry),
            Search::Vacant(_) => None,
        }
    }
}

// precondition: the subtree is non-empty
fn remove_min<T, U>(tree: &mut Tree<T, U>) -> Result<Box<Node<T, U>>> {
    let mut depth = 0;
    let mut curr = tree
        .as_ref()
        .ok_or(Error::InvariantViolation("empty subtree has no minimum"))?;
    while let Some(left) = &curr.left {
        curr = left;
        depth += 1;
    }

    let slot = descend(tree, &vec![Direction::Left; depth])?;
    let mut min = slot
        .take()
        .ok_or(Error::InvariantViolation("minimum node is missing"))?;
    *slot = min.right.take();
    Ok(min)
}

fn detach<T, U>(tree: &mut Tree<T, U>, path: &[Direction]) -> Result<Entry<T, U>> {
    let slot = descend(tree, path)?;
    let has_both_children = slot
        .as_ref()
        .map(|node| node.has_both_children())
        .ok_or(Error::InvariantViolation("located node is missing"))?;

    if has_both_children {
        let node = slot
            .as_mut()
            .ok_or(Error::InvariantViolation("located node is missing"))?;
        let Node { entry, .. } = *remove_min(&mut node.right)?;
        debug!("moving in-order successor into a node with two children");
        Ok(mem::replace(&mut node.entry, entry))
    } else {
        let mut node = slot
            .take()
            .ok_or(Error::InvariantViolation("located node is missing"))?;
        *slot = node.left.take().or(node.right.take());
        let Node { entry, .. } = *node;
        Ok(entry)
    }
}

/// Removes `key` and splays the parent of the node that held it. When the key sat at the root,
/// its replacement stays at the root and nothing is splayed.
pub fn remove<T, U, V>(tree: &mut Tree<T, U>, key: &V) -> Result<Option<Entry<T, U>>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    let path = match locate(tree, key) {
        Search::Found(path) => path,
        Search::Vacant(_) => return Ok(None),
    };
    let entry = detach(tree, &path)?;
    if let Some((_, parent_path)) = path.split_last() {
        splay_or_report(tree, parent_path);
    }
    Ok(Some(entry))
}

pub fn get<'a, T, U, V>(tree: &'a Tree<T, U>, key: &V) -> Option<&'a Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    let mut curr = tree;
    while let Some(node) = curr {
        match key.cmp(node.entry.key.borrow()) {
            Ordering::Less => curr = &node.left,
            Ordering::Greater => curr = &node.right,
            Ordering::Equal => return Some(&node.entry),
        }
    }
    None
}

pub fn ceil<'a, T, U, V>(tree: &'a Tree<T, U>, key: &V) -> Option<&'a Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    let mut curr = tree;
    let mut best = None;
    while let Some(node) = curr {
        match key.cmp(node.entry.key.borrow()) {
            Ordering::Greater => curr = &node.right,
            Ordering::Less => {
                best = Some(&node.entry);
                curr = &node.left;
            },
            Ordering::Equal => return Some(&node.entry),
        }
    }
    best
}

pub fn floor<'a, T, U, V>(tree: &'a Tree<T, U>, key: &V) -> Option<&'a Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    let mut curr = tree;
    let mut best = None;
    while let Some(node) = curr {
        match key.cmp(node.entry.key.borrow()) {
            Ordering::Less => curr = &node.left,
            Ordering::Greater => {
                best = Some(&node.entry);
                curr = &node.right;
            },
            Ordering::Equal => return Some(&node.entry),
        }
    }
    best
}

pub fn min<T, U>(tree: &Tree<T, U>) -> Option<&Entry<T, U>> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.entry
    })
}

pub fn max<T, U>(tree: &Tree<T, U>) -> Option<&Entry<T, U>> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.entry
    })
}

/// Verifies strict key ordering and that `len` nodes are reachable from the root.
pub fn check<T, U>(tree: &Tree<T, U>, len: usize) -> Result<()>
where
    T: Ord,
{
    let mut count = 0;
    let mut stack: Vec<(&Node<T, U>, Option<&T>, Option<&T>)> = Vec::new();
    if let Some(node) = tree {
        stack.push((&**node, None, None));
    }
    while let Some((node, lower, upper)) = stack.pop() {
        count += 1;
        let key = &node.entry.key;
        if lower.map_or(false, |lower| lower >= key) || upper.map_or(false, |upper| key >= upper) {
            return Err(Error::InvariantViolation("keys are out of order"));
        }
        if let Some(left) = &node.left {
            stack.push((&**left, lower, Some(key)));
        }
        if let Some(right) = &node.right {
            stack.push((&**right, Some(key), upper));
        }
    }
    if count != len {
        return Err(Error::InvariantViolation("length does not match the node count"));
    }
    Ok(())
}

/// Empties the tree, releasing nodes from an explicit stack instead of recursive drops.
pub fn dismantle<T, U>(tree: &mut Tree<T, U>) {
    let mut stack: Vec<Box<Node<T, U>>> = tree.take().into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}
