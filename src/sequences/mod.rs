//! Functionality for working with per-basepair nucleotide data.
//!
//! ## Main Functionality
//!
//!  - The 2-bit base codec and its precomputed decoding tables, in [`codec`].
//!  - Lazy-loading and memoization of per-sequence data with the [`LazyLoader`] type.
//!  - The [`Nucleotides`] type that decoded regions are returned as.
//!
//! [`LazyLoader`]: crate::sequences::lazy::LazyLoader
//! [`Nucleotides`]: crate::sequences::nucleotide::Nucleotides

pub mod codec;
pub mod lazy;
pub mod nucleotide;
