//! BST-backed ordered collections and a dense matrix engine.
//!
//! This crate provides [`BstMap`], [`BstSet`] and [`BstMultiset`], ordered
//! associative containers built on a single arena-backed, *unbalanced*
//! binary search tree, plus [`Matrix`], a dense row-major `f64` matrix with
//! determinant, cofactor and inverse arithmetic.
//!
//! # Example
//!
//! ```
//! use arbor_collections::BstMap;
//!
//! let mut population = BstMap::new();
//! population.insert("Oslo", 709_000);
//! population.insert("Bergen", 291_000);
//! population.insert("Trondheim", 214_000);
//!
//! // Keys come back in sorted order.
//! let cities: Vec<_> = population.keys().copied().collect();
//! assert_eq!(cities, ["Bergen", "Oslo", "Trondheim"]);
//!
//! // Lookups are plain BST descent.
//! assert_eq!(population.get(&"Oslo"), Some(&709_000));
//! ```
//!
//! ```
//! use arbor_collections::Matrix;
//!
//! let m = Matrix::from_rows(&[&[1.0, 2.0], &[3.0, 4.0]]).unwrap();
//! assert_eq!(m.determinant().unwrap(), -2.0);
//!
//! let inv = m.inverse().unwrap();
//! let product = &m * &inv;
//! assert!(product.approx_eq(&Matrix::identity(2).unwrap()));
//! ```
//!
//! # Implementation
//!
//! The tree is a classic binary search tree in parent/left/right form with
//! **no balancing invariant**: worst-case operations are O(n) on adversarial
//! insertion orders. Nodes live in a slot arena addressed by niche-optimized
//! integer ids, so there are no owning pointer cycles and no recursive
//! destructors. Erase uses splice-and-reinsert: the doomed node is unlinked
//! and its orphaned subtrees are reattached wholesale by ordinary descent,
//! which preserves key order but not tree shape.
//!
//! The matrix engine computes determinants by Laplace expansion along the
//! first row, which is exponential in the matrix size and intended for
//! small matrices only.

// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_op_in_unsafe_fn)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod error;
mod raw;

pub mod bst_map;
pub mod bst_multiset;
pub mod bst_set;
pub mod matrix;

pub use bst_map::BstMap;
pub use bst_multiset::BstMultiset;
pub use bst_set::BstSet;
pub use error::{Error, Result};
pub use matrix::Matrix;
