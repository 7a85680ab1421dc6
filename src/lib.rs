//! This crate provides a balanced adaptive routing table (BART) for IPv4 and
//! IPv6 prefixes. Any lookup performs longest-prefix match.
//!
//! # Description of the table
//!
//! The table keeps one trie per address family and consumes addresses in
//! fixed 8-bit strides, one trie level per octet, without path compression.
//! Each level is a node holding two rank-compressed arrays:
//!
//! - The *prefix* array stores the values of all prefixes that end within
//!   this stride. The up-to-511 possible in-stride prefixes form a complete
//!   binary tree, numbered so that halving a slot index yields the next
//!   shorter covering prefix. The occupied slots are recorded in a bitset
//!   and their values packed into a vector indexed by bit rank.
//! - The *child* array records, the same way, the up-to-256 sub-tries that
//!   longer prefixes descend through.
//!
//! This is the classic ART layout with both per-node arrays replaced by a
//! bitset plus a popcount-indexed vector, trading a small constant factor in
//! lookup latency for an order of magnitude less memory.
//!
//! # Operations on the table
//!
//! [`Table`] supports exact-prefix access ([`Table::insert`],
//! [`Table::remove`], [`Table::get`], [`Table::get_mut`], [`Table::update`]),
//! longest-prefix match for addresses ([`Table::lookup`],
//! [`Table::contains`]) and prefixes ([`Table::lookup_prefix`]), and overlap
//! checks against a single prefix ([`Table::overlaps_prefix`]) or a whole
//! second table ([`Table::overlaps`]).
//!
//! ```
//! # use bart_trie::Table;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut table: Table<&str> = Table::new();
//! table.insert("0.0.0.0/0".parse()?, "default")?;
//! table.insert("192.168.0.0/16".parse()?, "site")?;
//! table.insert("192.168.1.0/24".parse()?, "lab")?;
//!
//! assert_eq!(table.lookup("192.168.1.42".parse()?), Some(&"lab"));
//! assert_eq!(table.lookup("192.168.2.1".parse()?), Some(&"site"));
//! assert_eq!(table.lookup("8.8.8.8".parse()?), Some(&"default"));
//! # Ok(())
//! # }
//! ```
//!
//! IPv4-mapped IPv6 addresses (`::ffff:a.b.c.d`) are demapped on lookup and
//! rejected on insert, so every IPv4 route has exactly one location.

mod base_index;
mod bitset;
mod error;
mod fmt;
mod node;
mod overlaps;
#[cfg(feature = "serde")]
mod serde;
mod table;


pub use error::InsertError;
pub use table::Table;
