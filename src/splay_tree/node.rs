use crate::entry::Entry;
use crate::splay_tree::tree::Tree;
use crate::splay_tree::{Direction, Error, Result};
use std::mem;

pub struct Node<T, U> {
    pub entry: Entry<T, U>,
    pub left: Tree<T, U>,
    pub right: Tree<T, U>,
}

impl<T, U> Node<T, U> {
    pub fn new(key: T, value: U) -> Self {
        Node {
            entry: Entry { key, value },
            left: None,
            right: None,
        }
    }

    pub fn child(&self, dir: Direction) -> &Tree<T, U> {
        match dir {
            Direction::Left => &self.left,
            Direction::Right => &self.right,
        }
    }

    pub fn child_mut(&mut self, dir: Direction) -> &mut Tree<T, U> {
        match dir {
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
        }
    }

    pub fn has_both_children(&self) -> bool {
        self.left.is_some() && self.right.is_some()
    }

    /// Zag: the right child takes this node's place and this node becomes its left child.
    pub fn rotate_left(&mut self) -> Result<()> {
        let mut child = self
            .right
            .take()
            .ok_or(Error::InvariantViolation("zag without a right child"))?;
        self.right = child.left.take();
        mem::swap(&mut *child, self);
        self.left = Some(child);
        Ok(())
    }

    /// Zig: the left child takes this node's place and this node becomes its right child.
    pub fn rotate_right(&mut self) -> Result<()> {
        let mut child = self
            .left
            .take()
            .ok_or(Error::InvariantViolation("zig without a left child"))?;
        self.left = child.right.take();
        mem::swap(&mut *child, self);
        self.right = Some(child);
        Ok(())
    }

    /// Lifts the child on side `dir` into this node's position.
    pub fn lift(&mut self, dir: Direction) -> Result<()> {
        match dir {
            Direction::Left => self.rotate_right(),
            Direction::Right => self.rotate_left(),
        }
    }
}
