//! Error types for table mutation.

use ipnet::Ipv6Net;
use thiserror::Error;

/// Errors returned when storing a prefix in a [`Table`](crate::Table).
///
/// Malformed prefixes cannot reach the table: `ipnet` rejects out-of-range
/// prefix lengths when the prefix itself is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InsertError {
    /// The prefix address is IPv4-mapped (`::ffff:a.b.c.d`). Lookups demap
    /// such addresses to the IPv4 root, so the route must be inserted as
    /// IPv4 by the caller.
    #[error("IPv4-mapped IPv6 prefix {0} must be inserted as IPv4")]
    Ipv4MappedPrefix(Ipv6Net),
}
