//! ASCII character classes of RFC 3986.
//!
//! Every validator and encoder in this crate consults the tables defined
//! here. All tables are `const` and live for the lifetime of the program.
//!
//! See [RFC 3986 section 2](https://tools.ietf.org/html/rfc3986#section-2).

use core::fmt;

/// A set of ASCII bytes.
///
/// Non-ASCII bytes are never members of any set.
///
/// # Examples
///
/// ```
/// use uri_generic::charset::{self, AllowedSet};
///
/// assert!(charset::PATH_SEGMENT.contains(b'@'));
/// assert!(!charset::PATH_SEGMENT.contains(b'/'));
/// assert!(charset::PATH.contains(b'/'));
///
/// const LOWER_HEX: AllowedSet = AllowedSet::EMPTY.with_range(b'0', b'9').with_range(b'a', b'f');
/// assert!(LOWER_HEX.contains(b'c'));
/// assert!(!LOWER_HEX.contains(b'C'));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct AllowedSet {
    /// Bit `n` is set iff byte `n` is a member.
    bits: u128,
}

impl AllowedSet {
    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };

    /// Returns a set with the given byte added.
    ///
    /// Non-ASCII bytes are ignored.
    #[must_use]
    pub const fn with(self, byte: u8) -> Self {
        if byte >= 0x80 {
            return self;
        }
        Self {
            bits: self.bits | (1 << byte),
        }
    }

    /// Returns a set with all the given bytes added.
    #[must_use]
    pub const fn with_bytes(self, bytes: &[u8]) -> Self {
        let mut set = self;
        let mut i = 0;
        while i < bytes.len() {
            set = set.with(bytes[i]);
            i += 1;
        }
        set
    }

    /// Returns a set with the inclusive range `lo..=hi` added.
    #[must_use]
    pub const fn with_range(self, lo: u8, hi: u8) -> Self {
        let mut set = self;
        let mut b = lo;
        while b <= hi && b < 0x80 {
            set = set.with(b);
            b += 1;
        }
        set
    }

    /// Returns a set with the given byte removed.
    #[must_use]
    pub const fn without(self, byte: u8) -> Self {
        if byte >= 0x80 {
            return self;
        }
        Self {
            bits: self.bits & !(1 << byte),
        }
    }

    /// Returns the union of the two sets.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }

    /// Returns `true` if the byte is a member of the set.
    #[inline]
    #[must_use]
    pub const fn contains(&self, byte: u8) -> bool {
        byte < 0x80 && (self.bits >> byte) & 1 == 1
    }
}

impl fmt::Debug for AllowedSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries((0_u8..0x80).filter(|&b| self.contains(b)).map(char::from))
            .finish()
    }
}

/// `ALPHA`.
pub const ALPHA: AllowedSet = AllowedSet::EMPTY
    .with_range(b'A', b'Z')
    .with_range(b'a', b'z');

/// `DIGIT`.
pub const DIGIT: AllowedSet = AllowedSet::EMPTY.with_range(b'0', b'9');

/// `HEXDIG`, case-insensitive.
pub const HEXDIG: AllowedSet = DIGIT.with_range(b'A', b'F').with_range(b'a', b'f');

/// `unreserved`: `ALPHA / DIGIT / "-" / "." / "_" / "~"`.
pub const UNRESERVED: AllowedSet = ALPHA.union(DIGIT).with_bytes(b"-._~");

/// `gen-delims`: `":" / "/" / "?" / "#" / "[" / "]" / "@"`.
pub const GEN_DELIMS: AllowedSet = AllowedSet::EMPTY.with_bytes(b":/?#[]@");

/// `sub-delims`: `"!" / "$" / "&" / "'" / "(" / ")" / "*" / "+" / "," / ";" / "="`.
pub const SUB_DELIMS: AllowedSet = AllowedSet::EMPTY.with_bytes(b"!$&'()*+,;=");

/// `reserved`: `gen-delims / sub-delims`.
pub const RESERVED: AllowedSet = GEN_DELIMS.union(SUB_DELIMS);

/// Characters allowed in `scheme`, except that the first one must be `ALPHA`.
pub const SCHEME: AllowedSet = ALPHA.union(DIGIT).with_bytes(b"+-.");

/// Characters allowed in `userinfo`.
pub const USERINFO: AllowedSet = UNRESERVED.union(SUB_DELIMS).with_bytes(b"%:");

/// Characters allowed in `reg-name`.
pub const HOST: AllowedSet = UNRESERVED.union(SUB_DELIMS).with(b'%');

/// `pchar`: characters allowed in a single path segment.
pub const PATH_SEGMENT: AllowedSet = UNRESERVED.union(SUB_DELIMS).with_bytes(b"%:@");

/// Characters allowed in a whole path.
pub const PATH: AllowedSet = PATH_SEGMENT.with(b'/');

/// Characters allowed in `query`.
pub const QUERY: AllowedSet = PATH.with(b'?');

/// Characters allowed in `fragment`. Same as [`QUERY`].
pub const FRAGMENT: AllowedSet = QUERY;

/// Characters allowed in a query item name or value.
///
/// This is [`QUERY`] without the separators `&`, `=` and `+`.
pub const QUERY_ITEM: AllowedSet = QUERY.without(b'&').without(b'=').without(b'+');

/// Characters that never appear literally in a URI reference.
pub(crate) const ALWAYS_ILLEGAL: AllowedSet = AllowedSet::EMPTY.with_bytes(b"<>{}|\\^`\"");

/// Checks if the byte matches `unreserved` rule.
#[inline]
#[must_use]
pub const fn is_unreserved(b: u8) -> bool {
    UNRESERVED.contains(b)
}

/// Checks if the byte matches `sub-delims` rule.
#[inline]
#[must_use]
pub const fn is_sub_delim(b: u8) -> bool {
    SUB_DELIMS.contains(b)
}

/// Checks if the byte matches `gen-delims` rule.
#[inline]
#[must_use]
pub const fn is_gen_delim(b: u8) -> bool {
    GEN_DELIMS.contains(b)
}

/// Checks if the byte matches `reserved` rule.
#[inline]
#[must_use]
pub const fn is_reserved(b: u8) -> bool {
    RESERVED.contains(b)
}
