//! Prefix masking over address word arrays.
//!
//! Derives the first or last address of a CIDR block by overwriting every bit
//! past the prefix boundary, regardless of whether the address stores 8-bit
//! octets or 16-bit hextets.

/// Storage word of an address: `u8` for IPv4 octets, `u16` for IPv6 hextets.
pub(crate) trait Word: Copy {
    const BITS: u32;

    /// Overwrites the `count` lowest bits with ones or zeros, keeping the rest.
    fn overwrite_low(self, count: u32, fill: bool) -> Self;
}

macro_rules! impl_word {
    ($($ty:ty),*) => {$(
        impl Word for $ty {
            const BITS: u32 = <$ty>::BITS;

            fn overwrite_low(self, count: u32, fill: bool) -> Self {
                if count == 0 {
                    return self;
                }
                let low = if count >= <$ty>::BITS {
                    <$ty>::MAX
                } else {
                    ((1u32 << count) - 1) as $ty
                };
                if fill { self | low } else { self & !low }
            }
        }
    )*};
}

impl_word!(u8, u16);

/// Keeps the leading `prefix` bits of `words` and forces everything after the
/// boundary to `fill`. The boundary may fall inside a word; for word `i` the
/// trailing `(i + 1) * BITS - prefix` bits are touched, clamped to the word
/// width.
pub(crate) fn mask_words<W: Word, const N: usize>(words: [W; N], prefix: u32, fill: bool) -> [W; N] {
    let mut masked = words;
    for (i, word) in masked.iter_mut().enumerate() {
        let count = ((i as u32 + 1) * W::BITS).saturating_sub(prefix).min(W::BITS);
        *word = word.overwrite_low(count, fill);
    }
    masked
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
