//! This crate exposes two small algorithmic utilities, mostly for
//! educational purposes: a binary tree with a handful of traversal
//! strategies, and a lazy prime sieve.
//!
//! ## Binary tree traversals
//!
//! A binary tree is defined recursively using the notion of a `Node`. A
//! `Node` stores some sort of value and sometimes has a left and/or right
//! child `Node`. Visiting every node of such a tree can be done in several
//! well-known orders:
//!
//! 1. **in-order** — left subtree, then the node, then the right subtree.
//! 2. **pre-order** — the node, then the left subtree, then the right subtree.
//! 3. **post-order** — left subtree, then right subtree, then the node.
//! 4. **level-order** — all nodes at one depth before any node at the next,
//!    left to right within a depth.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The first four traversals here are iterative, each carrying its own stack
//! or queue. The fifth, a threaded (Morris) in-order traversal, visits nodes
//! in the same order as in-order but with constant auxiliary space: it
//! temporarily rewires empty right-child links into "threads" pointing from a
//! node's in-order predecessor back to the node, and unlinks them again as it
//! goes.
//!
//! ## Prime sieve
//!
//! [`sieve::Primes`] is an iterator over the prime numbers with no upper
//! bound, driven by an incremental Sieve of Eratosthenes that only ever
//! remembers one upcoming composite per prime discovered so far.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod sieve;
pub mod tree;

#[cfg(test)]
pub(crate) mod test;
