//! Bit-index list <-> integer mask conversions.
//!
//! The description format stores every encoding as a list of bit indices into
//! the instruction word. Masks are the compact form used by the tabular
//! export and by anything that wants to test bits in bulk.

use std::borrow::Borrow;

/// Integer wide enough for the widest instruction word (128 bits).
///
/// Bit indices at or above `BitMask::BITS` cannot be represented;
/// [`mask_from_bits`] drops them with a warning.
pub type BitMask = u128;

/// Build a mask with exactly the listed bits set.
///
/// Order and duplicates do not matter. Indices at or above
/// [`BitMask::BITS`] fall outside the mask and are dropped with a `warn!`;
/// the width of the target instruction word is not checked here.
///
/// ```
/// use xtgen_isa::mask_from_bits;
///
/// assert_eq!(mask_from_bits([0u32, 4, 4]), 0x11);
/// assert_eq!(mask_from_bits(Vec::<u32>::new()), 0);
/// ```
pub fn mask_from_bits<I>(bits: I) -> BitMask
where
    I: IntoIterator,
    I::Item: Borrow<u32>,
{
    bits.into_iter().fold(0, |mask, bit| {
        let bit = *bit.borrow();
        match BitMask::from(1u8).checked_shl(bit) {
            Some(b) => mask | b,
            None => {
                log::warn!("bit index {bit} is outside the {}-bit mask, dropped", BitMask::BITS);
                mask
            }
        }
    })
}

/// Set bit positions of `mask`, lowest first.
pub fn bits_from_mask(mask: BitMask) -> impl Iterator<Item = u32> {
    (0..BitMask::BITS).filter(move |&bit| (mask >> bit) & 1 != 0)
}

/// Render a mask as a `0x`-prefixed lowercase hex integer (`0x0` when empty).
pub fn format_mask(mask: BitMask) -> String {
    format!("{mask:#x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_zero() {
        assert_eq!(mask_from_bits(&[] as &[u32]), 0);
        assert_eq!(format_mask(0), "0x0");
    }

    #[test]
    fn sets_listed_bits() {
        assert_eq!(mask_from_bits(&[0u32, 1, 2, 3]), 0xf);
        assert_eq!(mask_from_bits(&[20u32, 23]), (1 << 20) | (1 << 23));
        assert_eq!(mask_from_bits(&[127u32]), 1u128 << 127);
    }

    #[test]
    fn order_and_duplicates_are_irrelevant() {
        let a = mask_from_bits(&[3u32, 17, 9]);
        let b = mask_from_bits(&[9u32, 3, 17, 3, 9]);
        assert_eq!(a, b);
    }

    #[test]
    fn out_of_word_indices_are_dropped() {
        assert_eq!(mask_from_bits(&[1u32, 128, 400]), 0x2);
    }

    #[test]
    fn in_word_bits_survive_a_dropped_index() {
        assert_eq!(mask_from_bits([3u32, 130]), 0x8);
        assert_eq!(mask_from_bits([130u32]), 0);
    }

    #[test]
    fn mask_back_to_bits() {
        let bits: Vec<u32> = bits_from_mask(mask_from_bits(&[40u32, 2, 7])).collect();
        assert_eq!(bits, [2, 7, 40]);
        assert_eq!(bits_from_mask(0).count(), 0);
    }

    #[test]
    fn hex_rendering_parses_back() {
        let cases: [&[u32]; 4] = [&[], &[0], &[5, 6, 63], &[64, 100, 127]];
        for bits in cases {
            let mask = mask_from_bits(bits);
            let text = format_mask(mask);
            let parsed = BitMask::from_str_radix(text.trim_start_matches("0x"), 16).unwrap();
            assert_eq!(parsed, mask, "{text}");
        }
    }
}
