//! Formatting implementation for the routing table.

use std::fmt::{Debug, Formatter, Result};

use crate::Table;

impl<T: Debug> Debug for Table<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let mut map = f.debug_map();
        self.walk(|net, value| {
            map.entry(&format_args!("{net}"), value);
        });
        map.finish()
    }
}
