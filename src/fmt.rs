//! Formatting implementation for the Trie

use std::fmt::{Debug, Formatter, Result};

use ipnet::Ipv4Net;

use super::*;

impl Debug for Trie {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.debug_set()
            .entries(self.networks().map(Ipv4Net::from))
            .finish()
    }
}
