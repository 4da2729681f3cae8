// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for memory access strategies.
//!
//! An aligned load and an unaligned load of the same bytes must produce the
//! same number, and both must agree with the standard library decoders. A
//! store followed by a load of the same window must give the stored value
//! back without touching neighbouring bytes.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use stdaux::memory::{load, store, Access, Endian};

#[derive(Debug, Arbitrary)]
struct Input {
    bytes: [u8; 16],
    offset: u8,
    value: u64,
    big: bool,
}

#[repr(C, align(8))]
struct Aligned([u8; 16]);

fuzz_target!(|input: Input| {
    let endian = if input.big { Endian::Big } else { Endian::Little };
    let offset = usize::from(input.offset % 9);
    let buf = Aligned(input.bytes);

    let unaligned: u64 = load(&buf.0, offset, endian, Access::Unaligned);
    let window: [u8; 8] = buf.0[offset..offset + 8].try_into().unwrap();
    let expected = match endian {
        Endian::Big => u64::from_be_bytes(window),
        Endian::Little => u64::from_le_bytes(window),
    };
    assert_eq!(unaligned, expected);

    // Offsets 0 and 8 are aligned for u64 in an 8-aligned buffer.
    if offset % 8 == 0 {
        let aligned: u64 = load(&buf.0, offset, endian, Access::Aligned);
        assert_eq!(aligned, unaligned);
    }
    if offset % 4 == 0 {
        let a: u32 = load(&buf.0, offset, endian, Access::Aligned);
        let u: u32 = load(&buf.0, offset, endian, Access::Unaligned);
        assert_eq!(a, u);
    }

    let mut out = Aligned(input.bytes);
    store(&mut out.0, offset, input.value, endian, Access::Unaligned);
    assert_eq!(load::<u64>(&out.0, offset, endian, Access::Unaligned), input.value);
    assert_eq!(&out.0[..offset], &input.bytes[..offset]);
    assert_eq!(&out.0[offset + 8..], &input.bytes[offset + 8..]);
});
