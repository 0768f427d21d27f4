//! Traversal orders and the borrowing iterator that walks a tree in one of them.

use std::fmt;
use std::iter::FusedIterator;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseTraversalError;
use crate::player::Player;
use crate::tree::Node;

/// The order in which a tree's players are visited.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Traversal {
    /// Left subtree, node, right subtree. Yields players sorted by name.
    InOrder,
    /// Node, left subtree, right subtree.
    PreOrder,
    /// Left subtree, right subtree, node.
    PostOrder,
}

impl Traversal {
    /// All three orders.
    pub const ALL: [Traversal; 3] = [Self::InOrder, Self::PreOrder, Self::PostOrder];
}

impl fmt::Display for Traversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InOrder => "in-order",
            Self::PreOrder => "pre-order",
            Self::PostOrder => "post-order",
        })
    }
}

/// Parses `in-order`, `inorder`, `IN_ORDER` and friends. Case and `-`/`_` separators are ignored.
///
/// # Examples
///
/// ```
/// use leaderboard_bst::Traversal;
///
/// assert_eq!("PRE_ORDER".parse(), Ok(Traversal::PreOrder));
/// assert_eq!("post-order".parse(), Ok(Traversal::PostOrder));
/// assert!("level-order".parse::<Traversal>().is_err());
/// ```
impl FromStr for Traversal {
    type Err = ParseTraversalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match normalized.as_str() {
            "inorder" => Ok(Self::InOrder),
            "preorder" => Ok(Self::PreOrder),
            "postorder" => Ok(Self::PostOrder),
            _ => Err(ParseTraversalError::Unknown(s.to_owned())),
        }
    }
}

/// Work left to do for a node on the traversal stack.
enum Step<'a> {
    /// Expand this subtree according to the traversal order.
    Visit(&'a Node),
    /// The node's own turn has come: yield its player.
    Yield(&'a Node),
}

/// An iterator over the players of a [`PlayerTree`][crate::PlayerTree] in a chosen
/// [`Traversal`] order. Created by [`PlayerTree::iter`][crate::PlayerTree::iter].
///
/// Uses an explicit stack rather than recursion so list-shaped trees can be walked without
/// growing the call stack.
pub struct Iter<'a> {
    order: Traversal,
    stack: Vec<Step<'a>>,
    remaining: usize,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(root: Option<&'a Node>, order: Traversal, len: usize) -> Self {
        Self {
            order,
            stack: root.map(Step::Visit).into_iter().collect(),
            remaining: len,
        }
    }

    /// Pushes the children and the node itself so that they pop in `self.order`.
    fn expand(&mut self, node: &'a Node) {
        let left = node.left.as_deref().map(Step::Visit);
        let right = node.right.as_deref().map(Step::Visit);

        // Pushed in reverse: the last item pushed is visited first.
        match self.order {
            Traversal::InOrder => {
                self.stack.extend(right);
                self.stack.push(Step::Yield(node));
                self.stack.extend(left);
            }
            Traversal::PreOrder => {
                self.stack.extend(right);
                self.stack.extend(left);
                self.stack.push(Step::Yield(node));
            }
            Traversal::PostOrder => {
                self.stack.push(Step::Yield(node));
                self.stack.extend(right);
                self.stack.extend(left);
            }
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Player;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(step) = self.stack.pop() {
            match step {
                Step::Visit(node) => self.expand(node),
                Step::Yield(node) => {
                    self.remaining -= 1;
                    return Some(&node.player);
                }
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
