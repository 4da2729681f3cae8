//! Memory access property tests.
//!
//! - Aligned and unaligned strategies read the same value from the same bytes
//! - Unaligned loads at any offset match the standard library's decoders
//! - Big and little endian reads of one window are byte swaps of each other

use proptest::prelude::*;
use stdaux::memory::{load, store, Access, Endian, Word};

use crate::common::AlignedBuf;

fn buffer() -> impl Strategy<Value = [u8; 16]> {
    any::<[u8; 16]>()
}

/// Aligned offsets for a word of `align` bytes inside a 16-byte buffer.
fn aligned_offsets(size: usize, align: usize) -> impl Iterator<Item = usize> {
    (0..=16 - size).filter(move |o| o % align == 0)
}

fn strategies_agree<T: Word>(buf: &AlignedBuf) {
    for offset in aligned_offsets(T::SIZE, T::ALIGN) {
        for endian in [Endian::Big, Endian::Little] {
            let aligned: T = load(buf.bytes(), offset, endian, Access::Aligned);
            let unaligned: T = load(buf.bytes(), offset, endian, Access::Unaligned);
            assert_eq!(aligned, unaligned, "offset {} {:?}", offset, endian);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: both access strategies agree at every aligned offset.
    #[test]
    fn prop_access_strategies_agree(bytes in buffer()) {
        let buf = AlignedBuf::from_slice(&bytes);
        strategies_agree::<u16>(&buf);
        strategies_agree::<u32>(&buf);
        strategies_agree::<u64>(&buf);
    }

    /// Property: unaligned loads at every offset match from_{be,le}_bytes.
    #[test]
    fn prop_unaligned_matches_std(bytes in buffer(), offset in 0usize..=8) {
        let window: [u8; 8] = bytes[offset..offset + 8].try_into().unwrap();
        prop_assert_eq!(
            load::<u64>(&bytes, offset, Endian::Big, Access::Unaligned),
            u64::from_be_bytes(window)
        );
        prop_assert_eq!(
            load::<u64>(&bytes, offset, Endian::Little, Access::Unaligned),
            u64::from_le_bytes(window)
        );
        let half: [u8; 4] = bytes[offset..offset + 4].try_into().unwrap();
        prop_assert_eq!(
            load::<u32>(&bytes, offset, Endian::Big, Access::Unaligned),
            u32::from_be_bytes(half)
        );
    }

    /// Property: the two byte orders of one window are byte swaps.
    #[test]
    fn prop_endians_are_swaps(bytes in buffer(), offset in 0usize..=12) {
        let be: u32 = load(&bytes, offset, Endian::Big, Access::Unaligned);
        let le: u32 = load(&bytes, offset, Endian::Little, Access::Unaligned);
        prop_assert_eq!(be.swap_bytes(), le);
    }

    /// Property: a store touches exactly its window.
    #[test]
    fn prop_store_touches_only_window(bytes in buffer(), offset in 0usize..=8, value: u64) {
        let mut buf = bytes;
        store(&mut buf, offset, value, Endian::Little, Access::Unaligned);
        prop_assert_eq!(&buf[..offset], &bytes[..offset]);
        prop_assert_eq!(&buf[offset + 8..], &bytes[offset + 8..]);
        prop_assert_eq!(&buf[offset..offset + 8], &value.to_le_bytes()[..]);
    }
}
