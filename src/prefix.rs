//! The bit codec: conversion between CIDR notation and the bit sequence of a network prefix.

use std::{
    fmt,
    net::Ipv4Addr,
    str::FromStr,
};

use ipnet::Ipv4Net;
use num_traits::{CheckedShr, PrimInt, Unsigned, Zero};

use crate::{Error, ADDR_BITS};

/// Trait for defining prefixes that can be inserted into a [`crate::Trie`].
pub trait Prefix: Sized {
    /// How can the prefix be represented. This must be one of `u8`, `u16`, `u32`, `u64`, or `u128`.
    type R: Unsigned + PrimInt + Zero + CheckedShr;

    /// Get raw representation of the address, ignoring the prefix length.
    fn repr(&self) -> Self::R;

    /// Prefix length
    fn prefix_len(&self) -> u8;

    /// mask `self.repr()` using `self.len()`. If you can guarantee that `repr` is already masked,
    /// them simply re-implement this function for your type.
    fn mask(&self) -> Self::R {
        self.repr() & mask_from_prefix_len(self.prefix_len())
    }

    /// Check if `self` contains `other` in its prefix range. This function also returns `True` if
    /// `self` is identical to `other`.
    fn contains(&self, other: &Self) -> bool {
        if self.prefix_len() > other.prefix_len() {
            return false;
        }
        other.repr() & mask_from_prefix_len(self.prefix_len()) == self.mask()
    }

    /// Check if a specific bit is set (counted from the left, where 0 is the first bit from the
    /// left). Host bits are never set.
    fn is_bit_set(&self, bit: u8) -> bool {
        let mask = (!Self::R::zero())
            .checked_shr(bit as u32)
            .unwrap_or_else(Self::R::zero)
            ^ (!Self::R::zero())
                .checked_shr(1u32 + bit as u32)
                .unwrap_or_else(Self::R::zero);
        mask & self.mask() != Self::R::zero()
    }
}

pub(crate) fn mask_from_prefix_len<R>(len: u8) -> R
where
    R: PrimInt + Zero,
{
    if len as u32 >= R::zero().count_zeros() {
        !R::zero()
    } else if len == 0 {
        R::zero()
    } else {
        !((!R::zero()) >> len as usize)
    }
}

/// The ordered bit sequence of an IPv4 network prefix, of length 0 to 32.
///
/// The bits are stored left-aligned in a `u32`. Bits beyond the prefix length are always zero,
/// so two `Bits` denoting the same network compare equal no matter how they were created.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Bits {
    repr: u32,
    len: u8,
}

impl Bits {
    /// The empty sequence, i.e., the prefix `0.0.0.0/0` that covers the whole address space.
    pub const EMPTY: Bits = Bits { repr: 0, len: 0 };

    /// Create a new bit sequence from an address and a prefix length. Host bits of `addr` are
    /// masked away. Lengths above 32 are clamped to 32.
    pub fn new(addr: u32, len: u8) -> Self {
        let len = len.min(ADDR_BITS);
        Self {
            repr: addr & mask_from_prefix_len::<u32>(len),
            len,
        }
    }

    /// Number of bits in the sequence.
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Returns `true` if the sequence has no bits.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The network address, with all host bits set to zero.
    pub fn network(&self) -> Ipv4Addr {
        self.repr.into()
    }

    /// Append a single bit at the end of the sequence. Returns `None` if the sequence already has
    /// 32 bits.
    pub fn push(self, bit: bool) -> Option<Self> {
        if self.len >= ADDR_BITS {
            return None;
        }
        let repr = if bit {
            self.repr | (1u32 << (ADDR_BITS - 1 - self.len))
        } else {
            self.repr
        };
        Some(Self {
            repr,
            len: self.len + 1,
        })
    }

    /// Iterate over the bits from the most significant one, `true` meaning a `1` bit.
    ///
    /// ```
    /// # use ip_cover_trie::Bits;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let bits: Bits = "160.0.0.0/3".parse()?;
    /// assert_eq!(bits.iter().collect::<Vec<_>>(), vec![true, false, true]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn iter(&self) -> BitIter {
        BitIter {
            bits: *self,
            pos: 0,
        }
    }
}

/// Iterator over the bits of a [`Bits`] sequence, from the most significant one.
#[derive(Clone, Debug)]
pub struct BitIter {
    bits: Bits,
    pos: u8,
}

impl Iterator for BitIter {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        if self.pos >= self.bits.len {
            return None;
        }
        let bit = self.bits.is_bit_set(self.pos);
        self.pos += 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = (self.bits.len - self.pos) as usize;
        (rest, Some(rest))
    }
}

impl ExactSizeIterator for BitIter {}

impl<'a> IntoIterator for &'a Bits {
    type Item = bool;
    type IntoIter = BitIter;

    fn into_iter(self) -> BitIter {
        self.iter()
    }
}

impl FromIterator<bool> for Bits {
    /// Collect at most 32 bits into a sequence. Any further bits are ignored.
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut bits = Bits::EMPTY;
        for bit in iter {
            match bits.push(bit) {
                Some(next) => bits = next,
                None => break,
            }
        }
        bits
    }
}

/// Parse a CIDR block or a bare IPv4 address (which implies a prefix length of 32) and return
/// its prefix bits. Host bits are masked rather than rejected, so `10.0.0.5/24` is the same as
/// `10.0.0.0/24`. Instead of a prefix length, the suffix may also be a netmask (`/255.0.0.0`) or
/// a hostmask (`/0.255.255.255`).
///
/// ```
/// # use ip_cover_trie::prefix::{encode, decode};
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// assert_eq!(decode(&encode("10.0.0.5/24")?), "10.0.0.0/24");
/// assert_eq!(decode(&encode("192.168.1.1")?), "192.168.1.1/32");
/// assert_eq!(decode(&encode("10.0.0.0/255.0.0.0")?), "10.0.0.0/8");
/// assert!(encode("10.0.0.0/33").is_err());
/// # Ok(())
/// # }
/// ```
pub fn encode(text: &str) -> Result<Bits, Error> {
    let text = text.trim();
    let bits = match text.split_once('/') {
        Some((addr, suffix)) => text
            .parse::<Ipv4Net>()
            .ok()
            .map(Bits::from)
            .or_else(|| with_mask(addr, suffix)),
        None => text.parse::<Ipv4Addr>().ok().map(Bits::from),
    };
    bits.ok_or_else(|| Error::InvalidAddress {
        input: text.to_string(),
        line: None,
    })
}

/// Parse an address with a netmask, or, if the mask is not contiguous, with a hostmask.
fn with_mask(addr: &str, mask: &str) -> Option<Bits> {
    let addr = addr.parse::<Ipv4Addr>().ok()?;
    let mask = mask.parse::<Ipv4Addr>().ok()?;
    let len = ipnet::ipv4_mask_to_prefix(mask)
        .or_else(|_| ipnet::ipv4_mask_to_prefix(Ipv4Addr::from(!u32::from(mask))))
        .ok()?;
    Some(Bits::new(addr.into(), len))
}

/// Render a bit sequence in CIDR notation. The sequence is padded with zeros to 32 bits, and the
/// prefix length is the length of the sequence.
pub fn decode(bits: &Bits) -> String {
    bits.to_string()
}

impl Prefix for Bits {
    type R = u32;

    fn repr(&self) -> u32 {
        self.repr
    }

    fn prefix_len(&self) -> u8 {
        self.len
    }

    fn mask(&self) -> u32 {
        self.repr
    }
}

impl Prefix for Ipv4Net {
    type R = u32;

    fn repr(&self) -> u32 {
        self.addr().into()
    }

    fn prefix_len(&self) -> u8 {
        self.prefix_len()
    }

    fn mask(&self) -> u32 {
        self.network().into()
    }

    fn contains(&self, other: &Self) -> bool {
        self.contains(other)
    }
}

impl From<Ipv4Net> for Bits {
    fn from(net: Ipv4Net) -> Self {
        Bits::new(net.network().into(), net.prefix_len())
    }
}

impl From<Bits> for Ipv4Net {
    fn from(bits: Bits) -> Self {
        // `Bits` never exceeds 32 bits, so this cannot fail.
        Ipv4Net::new(bits.network(), bits.len).unwrap_or_default()
    }
}

impl From<Ipv4Addr> for Bits {
    fn from(addr: Ipv4Addr) -> Self {
        Bits::new(addr.into(), ADDR_BITS)
    }
}

impl FromStr for Bits {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        encode(s)
    }
}

impl fmt::Display for Bits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.network(), self.len)
    }
}

impl fmt::Debug for Bits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bits: String = self.iter().map(|b| if b { '1' } else { '0' }).collect();
        write!(f, "0b{bits}/{}", self.len)
    }
}
