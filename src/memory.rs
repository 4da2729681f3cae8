// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Endian-explicit, alignment-explicit integer access on byte slices.
//!
//! Nothing here ever reinterprets a pointer. The two access strategies differ
//! only in how the bytes are gathered:
//!
//! - [`Access::Aligned`]: the caller promises `buf.as_ptr() + offset` is
//!   naturally aligned for the word. The window is copied as one fixed-size
//!   array, which compiles to a single load.
//! - [`Access::Unaligned`]: the value is composed byte by byte with shifts,
//!   which is correct for any address.
//!
//! Both strategies produce the same number for the same bytes; only the
//! instructions differ. Bounds and alignment are caller preconditions,
//! checked by tier-2 contracts. An out-of-range window never reads out of
//! bounds: slice indexing panics first.
//!
//! # Format
//!
//! ```text
//! bytes:        01 02 03 04
//! Endian::Big:    0x01020304
//! Endian::Little: 0x04030201
//! ```

use std::fmt;

use crate::contracts;

/// Byte order of a multi-byte word in memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endian {
    /// Most significant byte first.
    Big,
    /// Least significant byte first.
    Little,
}

impl Endian {
    /// Byte order of the host.
    pub const NATIVE: Endian = if cfg!(target_endian = "big") {
        Endian::Big
    } else {
        Endian::Little
    };
}

/// How the bytes of a word are gathered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Access {
    /// Address is naturally aligned for the word (caller's promise).
    Aligned,
    /// No assumption about the address.
    Unaligned,
}

mod private {
    pub trait Sealed {}
}

/// Fixed-width unsigned integers that can be loaded from and stored to bytes.
pub trait Word: Copy + Eq + fmt::Debug + private::Sealed {
    /// Width in bytes.
    const SIZE: usize;
    /// Natural alignment in bytes on this target.
    const ALIGN: usize;

    /// The word as a byte array.
    type Bytes: AsRef<[u8]> + AsMut<[u8]> + Default;

    fn from_bytes(bytes: Self::Bytes, endian: Endian) -> Self;
    fn to_bytes(self, endian: Endian) -> Self::Bytes;

    /// Low `SIZE` bytes of `value`.
    fn from_u64_truncating(value: u64) -> Self;
    fn to_u64(self) -> u64;
}

macro_rules! impl_word {
    ($($t:ty),* $(,)?) => {$(
        impl private::Sealed for $t {}

        impl Word for $t {
            const SIZE: usize = std::mem::size_of::<$t>();
            const ALIGN: usize = std::mem::align_of::<$t>();

            type Bytes = [u8; std::mem::size_of::<$t>()];

            #[inline]
            fn from_bytes(bytes: Self::Bytes, endian: Endian) -> Self {
                match endian {
                    Endian::Big => <$t>::from_be_bytes(bytes),
                    Endian::Little => <$t>::from_le_bytes(bytes),
                }
            }

            #[inline]
            fn to_bytes(self, endian: Endian) -> Self::Bytes {
                match endian {
                    Endian::Big => self.to_be_bytes(),
                    Endian::Little => self.to_le_bytes(),
                }
            }

            #[inline]
            fn from_u64_truncating(value: u64) -> Self {
                value as $t
            }

            #[inline]
            fn to_u64(self) -> u64 {
                u64::from(self)
            }
        }
    )*};
}

impl_word!(u8, u16, u32, u64);

/// Read a `T` from `buf[offset..offset + T::SIZE]`.
///
/// # Panics
/// If the window does not fit in `buf`. With the tier-2 contracts enabled, a
/// window that does not fit or a misaligned [`Access::Aligned`] read
/// terminates the process with a diagnostic instead.
#[inline]
pub fn load<T: Word>(buf: &[u8], offset: usize, endian: Endian, access: Access) -> T {
    contracts::check_window(buf.len(), offset, T::SIZE);
    let window = &buf[offset..offset + T::SIZE];
    match access {
        Access::Aligned => {
            contracts::check_aligned(window.as_ptr() as usize, T::ALIGN);
            let mut bytes = T::Bytes::default();
            bytes.as_mut().copy_from_slice(window);
            T::from_bytes(bytes, endian)
        }
        Access::Unaligned => compose(window, endian),
    }
}

/// Write `value` into `buf[offset..offset + T::SIZE]`.
///
/// Same preconditions as [`load`].
#[inline]
pub fn store<T: Word>(buf: &mut [u8], offset: usize, value: T, endian: Endian, access: Access) {
    contracts::check_window(buf.len(), offset, T::SIZE);
    let window = &mut buf[offset..offset + T::SIZE];
    match access {
        Access::Aligned => {
            contracts::check_aligned(window.as_ptr() as usize, T::ALIGN);
            window.copy_from_slice(value.to_bytes(endian).as_ref());
        }
        Access::Unaligned => decompose(window, value, endian),
    }
}

/// Build a word from its bytes one at a time.
fn compose<T: Word>(window: &[u8], endian: Endian) -> T {
    let mut acc: u64 = 0;
    match endian {
        Endian::Big => {
            for &b in window {
                acc = (acc << 8) | u64::from(b);
            }
        }
        Endian::Little => {
            for &b in window.iter().rev() {
                acc = (acc << 8) | u64::from(b);
            }
        }
    }
    T::from_u64_truncating(acc)
}

/// Scatter a word into its bytes one at a time.
fn decompose<T: Word>(window: &mut [u8], value: T, endian: Endian) {
    let mut acc = value.to_u64();
    match endian {
        Endian::Big => {
            for b in window.iter_mut().rev() {
                *b = acc as u8;
                acc >>= 8;
            }
        }
        Endian::Little => {
            for b in window.iter_mut() {
                *b = acc as u8;
                acc >>= 8;
            }
        }
    }
}

/// Read the byte at `offset`.
#[inline]
pub fn load_u8(buf: &[u8], offset: usize) -> u8 {
    load(buf, offset, Endian::Little, Access::Unaligned)
}

/// Write the byte at `offset`.
#[inline]
pub fn store_u8(buf: &mut [u8], offset: usize, value: u8) {
    store(buf, offset, value, Endian::Little, Access::Unaligned);
}

macro_rules! named_access {
    ($($load:ident, $store:ident: $t:ty, $endian:ident, $access:ident;)*) => {$(
        #[doc = concat!(
            "[`load`] of a `", stringify!($t), "`, `Endian::", stringify!($endian),
            "`, `Access::", stringify!($access), "`."
        )]
        #[inline]
        pub fn $load(buf: &[u8], offset: usize) -> $t {
            load(buf, offset, Endian::$endian, Access::$access)
        }

        #[doc = concat!(
            "[`store`] of a `", stringify!($t), "`, `Endian::", stringify!($endian),
            "`, `Access::", stringify!($access), "`."
        )]
        #[inline]
        pub fn $store(buf: &mut [u8], offset: usize, value: $t) {
            store(buf, offset, value, Endian::$endian, Access::$access)
        }
    )*};
}

named_access! {
    load_u16_be_unaligned, store_u16_be_unaligned: u16, Big, Unaligned;
    load_u16_be_aligned, store_u16_be_aligned: u16, Big, Aligned;
    load_u16_le_unaligned, store_u16_le_unaligned: u16, Little, Unaligned;
    load_u16_le_aligned, store_u16_le_aligned: u16, Little, Aligned;
    load_u32_be_unaligned, store_u32_be_unaligned: u32, Big, Unaligned;
    load_u32_be_aligned, store_u32_be_aligned: u32, Big, Aligned;
    load_u32_le_unaligned, store_u32_le_unaligned: u32, Little, Unaligned;
    load_u32_le_aligned, store_u32_le_aligned: u32, Little, Aligned;
    load_u64_be_unaligned, store_u64_be_unaligned: u64, Big, Unaligned;
    load_u64_be_aligned, store_u64_be_aligned: u64, Big, Aligned;
    load_u64_le_unaligned, store_u64_le_unaligned: u64, Little, Unaligned;
    load_u64_le_aligned, store_u64_le_aligned: u64, Little, Aligned;
}
