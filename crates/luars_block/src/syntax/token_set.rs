use core::fmt;

use crate::syntax::lua_token_kind::LuaTokenKind;

/// Immutable set of token kinds, one bit per kind.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TokenSet(u128);

impl TokenSet {
    pub const EMPTY: TokenSet = TokenSet(0);

    pub const fn new(kinds: &[LuaTokenKind]) -> TokenSet {
        let mut bits = 0u128;
        let mut i = 0;
        while i < kinds.len() {
            bits |= mask(kinds[i]);
            i += 1;
        }
        TokenSet(bits)
    }

    pub const fn contains(&self, kind: LuaTokenKind) -> bool {
        self.0 & mask(kind) != 0
    }

    pub const fn is_disjoint(&self, other: &TokenSet) -> bool {
        self.0 & other.0 == 0
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

const fn mask(kind: LuaTokenKind) -> u128 {
    1u128 << (kind as u16 as u32)
}

impl fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_set();
        for bit in 0..u128::BITS {
            if self.0 & (1u128 << bit) != 0 {
                list.entry(&bit);
            }
        }
        list.finish()
    }
}
