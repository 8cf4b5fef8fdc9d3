#![deny(missing_docs)]

//! Crate with two small in-memory set collections, [`collections::Set`] and [`collections::SortedSet`].
//!
//! A [`collections::Set`] keeps its members in insertion order and enforces uniqueness by a linear scan.
//! A [`collections::SortedSet`] keeps its members ordered by a [`collections::Comparator`] at all times,
//! locating members and insertion points with a step-halving search.

//!# Features
//!
//! This crate supports the following cargo features:
//! - `serde` : enables serialisation of [`collections::Set`] and [`collections::SortedSet`] via serde crate.

/// Containers.
pub mod collections;
