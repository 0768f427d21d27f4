//! A leaderboard stored as an unbalanced Binary Search Tree ordered by player name.
//!
//! # Examples
//!
//! ```
//! use leaderboard_bst::{Player, PlayerTree, Traversal};
//!
//! let mut tree = PlayerTree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains("magnus"));
//!
//! assert!(tree.insert(Player::new("magnus", 3)));
//! assert!(tree.insert(Player::new("hikaru", 5)));
//!
//! // Names are unique so a second "magnus" is turned away.
//! assert!(!tree.insert(Player::new("magnus", 40)));
//! assert_eq!(tree.get("magnus").map(|p| p.wins), Some(3));
//!
//! assert_eq!(tree.average_wins(), 4.0);
//! assert_eq!(tree.count_at_least(4), 1);
//!
//! let names: Vec<_> = tree.iter(Traversal::InOrder).map(|p| p.name.as_str()).collect();
//! assert_eq!(names, ["hikaru", "magnus"]);
//!
//! assert!(tree.remove("hikaru"));
//! assert!(!tree.remove("hikaru"));
//! assert_eq!(tree.len(), 1);
//! ```

use std::cmp::Ordering;
use std::fmt;

use log::{debug, trace};

use crate::player::Player;
use crate::traversal::{Iter, Traversal};

/// An owned, possibly empty, subtree.
type Link = Option<Box<Node>>;

/// A Binary Search Tree of [`Player`]s keyed by name. Each name appears at most once. The tree
/// never rebalances, so its shape is determined entirely by insertion and removal order.
pub struct PlayerTree {
    root: Link,
    len: usize,
}

impl Default for PlayerTree {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for PlayerTree {
    /// Frees every node in post-order using an explicit stack, so even a list-shaped tree built
    /// from sorted input is torn down without deep recursion.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            if node.left.is_none() && node.right.is_none() {
                // Both subtrees are already gone.
                continue;
            }
            let left = node.left.take();
            let right = node.right.take();
            stack.push(node);
            stack.extend(left);
            stack.extend(right);
        }
    }
}

impl Clone for PlayerTree {
    /// Re-inserting in pre-order reproduces the exact shape of the original.
    fn clone(&self) -> Self {
        self.iter(Traversal::PreOrder).cloned().collect()
    }
}

impl fmt::Debug for PlayerTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter(Traversal::InOrder)).finish()
    }
}

impl FromIterator<Player> for PlayerTree {
    fn from_iter<I: IntoIterator<Item = Player>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

/// Inserts each player in turn. Players whose name is already present are skipped.
impl Extend<Player> for PlayerTree {
    fn extend<I: IntoIterator<Item = Player>>(&mut self, iter: I) {
        for player in iter {
            self.insert(player);
        }
    }
}

impl PlayerTree {
    /// Generate a new, empty `PlayerTree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The number of players in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no players.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The player stored at the root, if any.
    pub fn root(&self) -> Option<&Player> {
        self.root.as_deref().map(|n| &n.player)
    }

    /// Potentially finds the player with the given name. If no node has the name, `None` is
    /// returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use leaderboard_bst::{Player, PlayerTree};
    ///
    /// let mut tree = PlayerTree::new();
    /// tree.insert(Player::new("ding", 2));
    ///
    /// assert_eq!(tree.get("ding"), Some(&Player::new("ding", 2)));
    /// assert_eq!(tree.get("gukesh"), None);
    /// ```
    pub fn get(&self, name: &str) -> Option<&Player> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match name.cmp(node.name()) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return Some(&node.player),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        None
    }

    /// Whether a player with the given name is in the tree.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Inserts the player as a new leaf and returns `true`. If a player with the same name is
    /// already present, nothing changes (not even the stored wins) and `false` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use leaderboard_bst::{Player, PlayerTree};
    ///
    /// let mut tree = PlayerTree::new();
    ///
    /// assert!(tree.insert(Player::new("alireza", 1)));
    /// assert!(!tree.insert(Player::new("alireza", 9)));
    ///
    /// assert_eq!(tree.len(), 1);
    /// assert_eq!(tree.get("alireza").map(|p| p.wins), Some(1));
    /// ```
    pub fn insert(&mut self, player: Player) -> bool {
        // Walks down slot by slot rather than recursing: sorted input builds a list.
        let mut slot = &mut self.root;
        loop {
            match slot {
                Some(node) => {
                    slot = match player.name.as_str().cmp(node.name()) {
                        Ordering::Less => &mut node.left,
                        Ordering::Equal => {
                            debug!("player {:?} is already on the board", player.name);
                            return false;
                        }
                        Ordering::Greater => &mut node.right,
                    };
                }
                None => {
                    trace!("inserting {:?}, tree will hold {} players", player.name, self.len + 1);
                    *slot = Some(Node::new_boxed(player));
                    self.len += 1;
                    return true;
                }
            }
        }
    }

    /// Removes the player with the given name and returns `true`. If no such player exists the
    /// tree is left untouched and `false` is returned.
    ///
    /// A node with two children is not unlinked itself. Instead it takes over the player of its
    /// in-order successor (the smallest name in its right subtree) and that successor's node is
    /// unlinked.
    ///
    /// # Examples
    ///
    /// ```
    /// use leaderboard_bst::{Player, PlayerTree};
    ///
    /// let mut tree: PlayerTree = ["b", "a", "c"].into_iter().map(|n| Player::new(n, 0)).collect();
    ///
    /// assert!(tree.remove("b"));
    /// assert!(!tree.contains("b"));
    /// assert_eq!(tree.root().map(|p| p.name.as_str()), Some("c"));
    /// assert!(!tree.remove("z"));
    /// ```
    pub fn remove(&mut self, name: &str) -> bool {
        let removed = remove_from(&mut self.root, name);
        if removed {
            self.len -= 1;
            trace!("removed {:?}, tree now holds {} players", name, self.len);
        } else {
            debug!("no player named {:?} to remove", name);
        }
        removed
    }

    /// The mean number of wins across all players, rounded half away from zero to two decimal
    /// places. An empty tree averages `0.0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use leaderboard_bst::{Player, PlayerTree};
    ///
    /// let mut tree = PlayerTree::new();
    /// assert_eq!(tree.average_wins(), 0.0);
    ///
    /// tree.extend([Player::new("a", 1), Player::new("b", 2), Player::new("c", 2)]);
    /// assert_eq!(tree.average_wins(), 1.67);
    /// ```
    pub fn average_wins(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }

        let total: u64 = self
            .iter(Traversal::PostOrder)
            .map(|p| u64::from(p.wins))
            .sum();

        // Rounded in integer hundredths: `total / len` as a float can land just under an exact
        // half (1.005 * 100.0 < 100.5) and round the wrong way.
        let len = self.len as u128;
        let hundredths = (u128::from(total) * 200 + len) / (2 * len);

        hundredths as f64 / 100.0
    }

    /// How many players have at least `min_wins` wins. The tree is ordered by name, not wins, so
    /// every node is examined.
    pub fn count_at_least(&self, min_wins: u32) -> usize {
        self.iter(Traversal::PreOrder)
            .filter(|p| p.wins >= min_wins)
            .count()
    }

    /// Iterates over every player exactly once in the given order.
    pub fn iter(&self, order: Traversal) -> Iter<'_> {
        Iter::new(self.root.as_deref(), order, self.len)
    }

    /// Copies every player out of the tree in the given order. The result always has
    /// [`len`][Self::len] elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use leaderboard_bst::{Player, PlayerTree, Traversal};
    ///
    /// let tree: PlayerTree = ["b", "a", "c"].into_iter().map(|n| Player::new(n, 0)).collect();
    /// let names = |order| -> Vec<String> {
    ///     tree.to_vec(order).into_iter().map(|p| p.name).collect()
    /// };
    ///
    /// assert_eq!(names(Traversal::InOrder), ["a", "b", "c"]);
    /// assert_eq!(names(Traversal::PreOrder), ["b", "a", "c"]);
    /// assert_eq!(names(Traversal::PostOrder), ["a", "c", "b"]);
    /// ```
    pub fn to_vec(&self, order: Traversal) -> Vec<Player> {
        self.iter(order).cloned().collect()
    }
}

/// Removes the node holding `name` from the subtree in `link`, re-linking `link` itself if the
/// subtree's root is the node that goes. Returns whether anything was removed.
fn remove_from(link: &mut Link, name: &str) -> bool {
    let Some(node) = link.as_mut() else {
        return false;
    };
    match node.remove(name) {
        RemoveResult::NotFound => false,
        RemoveResult::RemovedChild => true,
        RemoveResult::RemoveSelf => {
            if let Some(removed) = link.take() {
                *link = removed.into_only_child();
            }
            true
        }
    }
}

/// Unlinks the leftmost node of the subtree in `link` and returns its player. The leftmost node
/// has no left child, so its right subtree (if any) simply takes its place.
fn take_min(link: &mut Link) -> Option<Player> {
    let node = link.as_mut()?;
    if node.left.is_some() {
        return take_min(&mut node.left);
    }

    let Node { player, right, .. } = *link.take()?;
    *link = right;
    Some(player)
}

/// What happened when a subtree was asked to remove a name.
enum RemoveResult {
    /// The name wasn't found so nothing was removed.
    NotFound,
    /// The node returning this holds the name and has at most one child. Its parent must replace
    /// it with that child (see [`Node::into_only_child`]).
    RemoveSelf,
    /// A node below (or the successor of) the node returning this was unlinked. Nothing is left
    /// for the parent to do.
    RemovedChild,
}

/// A `Node` owns one player and up to two subtrees. It has no pointer back to its parent.
pub(crate) struct Node {
    pub(crate) player: Player,
    pub(crate) left: Link,
    pub(crate) right: Link,
}

impl Node {
    fn new_boxed(player: Player) -> Box<Self> {
        Box::new(Self {
            player,
            left: None,
            right: None,
        })
    }

    fn name(&self) -> &str {
        &self.player.name
    }

    fn remove(&mut self, name: &str) -> RemoveResult {
        match name.cmp(self.name()) {
            Ordering::Less => Self::removed_child(remove_from(&mut self.left, name)),
            Ordering::Equal => {
                if self.left.is_none() {
                    return RemoveResult::RemoveSelf;
                }
                // Two children: the successor's player moves up into this node. With no right
                // child, the left child replaces this node instead.
                match take_min(&mut self.right) {
                    Some(successor) => {
                        trace!("{:?} replaced by successor {:?}", name, successor.name);
                        self.player = successor;
                        RemoveResult::RemovedChild
                    }
                    None => RemoveResult::RemoveSelf,
                }
            }
            Ordering::Greater => Self::removed_child(remove_from(&mut self.right, name)),
        }
    }

    fn removed_child(removed: bool) -> RemoveResult {
        if removed {
            RemoveResult::RemovedChild
        } else {
            RemoveResult::NotFound
        }
    }

    /// Consumes a node with at most one child and returns that child.
    fn into_only_child(self: Box<Self>) -> Link {
        debug_assert!(self.left.is_none() || self.right.is_none());
        let Node { left, right, .. } = *self;
        left.or(right)
    }
}
