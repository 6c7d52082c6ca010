//! The top-level registry structure tying together the header and the entry slots into a unified
//! on-chain representation.

use pinocchio::pubkey::Pubkey;

use crate::{
    error::{
        BasketError,
        BasketResult,
    },
    state::{
        registry_header::{
            RegistryHeader,
            REGISTRY_ACCOUNT_DISCRIMINANT,
        },
        token_entry::TokenEntry,
        transmutable::Transmutable,
    },
};

/// The account space required for a registry with `max_tokens` entry slots.
pub const fn required_space(max_tokens: u8) -> usize {
    RegistryHeader::LEN + TokenEntry::LEN * max_tokens as usize
}

pub struct Registry<Header, EntryBytes> {
    pub header: Header,
    pub entry_bytes: EntryBytes,
}

pub type RegistryRef<'a> = Registry<&'a RegistryHeader, &'a [u8]>;
pub type RegistryRefMut<'a> = Registry<&'a mut RegistryHeader, &'a mut [u8]>;

impl AsRef<RegistryHeader> for &RegistryHeader {
    #[inline(always)]
    fn as_ref(&self) -> &RegistryHeader {
        self
    }
}

impl AsRef<RegistryHeader> for &mut RegistryHeader {
    #[inline(always)]
    fn as_ref(&self) -> &RegistryHeader {
        self
    }
}

impl<'a> RegistryRef<'a> {
    /// Returns immutable references to a registry's header and entry slot bytes.
    ///
    /// Checking that `data` belongs to a registry account and holds initialized data is left up
    /// to the caller.
    ///
    /// # Safety
    ///
    /// Caller guarantees that `data.len() >= RegistryHeader::LEN` and that the header's `paused`
    /// byte is 0 or 1.
    pub unsafe fn from_bytes(data: &'a [u8]) -> Self {
        let (header_bytes, entry_bytes) = data.split_at_unchecked(RegistryHeader::LEN);
        // Safety: The caller guarantees the header bytes are a valid `RegistryHeader`.
        let header = unsafe { RegistryHeader::load_unchecked(header_bytes) };

        Self {
            header,
            entry_bytes,
        }
    }
}

impl<'a> RegistryRefMut<'a> {
    /// Returns mutable references to a registry's header and entry slot bytes.
    ///
    /// Checking that `data` belongs to a registry account and holds initialized data is left up
    /// to the caller.
    ///
    /// # Safety
    ///
    /// Caller guarantees that `data.len() >= RegistryHeader::LEN` and that the header's `paused`
    /// byte is 0 or 1.
    pub unsafe fn from_bytes_mut(data: &'a mut [u8]) -> Self {
        let (header_bytes, entry_bytes) = data.split_at_mut_unchecked(RegistryHeader::LEN);
        // Safety: The caller guarantees the header bytes are a valid `RegistryHeader`.
        let header = unsafe { RegistryHeader::load_unchecked_mut(header_bytes) };

        Self {
            header,
            entry_bytes,
        }
    }

    /// Appends an entry to the live region, failing if every slot is occupied.
    pub fn push_entry(&mut self, entry: &TokenEntry) -> BasketResult {
        let num_tokens = self.header.num_tokens() as usize;
        if num_tokens >= self.capacity() as usize {
            return Err(BasketError::BasketFull);
        }

        let offset = num_tokens * TokenEntry::LEN;
        self.entry_bytes[offset..offset + TokenEntry::LEN].copy_from_slice(entry.as_bytes());
        self.header.increment_num_tokens();

        Ok(())
    }

    /// Removes the entry at `index`, shifting all later entries left so insertion order is
    /// preserved. The freed slot is zeroed.
    pub fn remove_entry(&mut self, index: usize) -> BasketResult {
        let num_tokens = self.header.num_tokens() as usize;
        if index >= num_tokens {
            return Err(BasketError::TokenNotFound);
        }

        let removed_start = index * TokenEntry::LEN;
        let live_end = num_tokens * TokenEntry::LEN;
        self.entry_bytes
            .copy_within(removed_start + TokenEntry::LEN..live_end, removed_start);
        self.entry_bytes[live_end - TokenEntry::LEN..live_end].fill(0);
        self.header.decrement_num_tokens();

        Ok(())
    }
}

impl<H: AsRef<RegistryHeader>, B: AsRef<[u8]>> Registry<H, B> {
    /// The total number of entry slots, live or not.
    #[inline(always)]
    pub fn capacity(&self) -> u8 {
        (self.entry_bytes.as_ref().len() / TokenEntry::LEN) as u8
    }

    /// The live entries, in insertion order.
    #[inline(always)]
    pub fn entries(&self) -> &[TokenEntry] {
        // The count never exceeds the slot capacity while the header invariants hold; the `min`
        // keeps the slice in bounds even for corrupt account data.
        let num_tokens = self.header.as_ref().num_tokens().min(self.capacity()) as usize;

        // Safety: `TokenEntry` has alignment 1, all bit patterns are valid, and the region
        // `[0, num_tokens * TokenEntry::LEN)` is in bounds of the entry bytes.
        unsafe {
            core::slice::from_raw_parts(
                self.entry_bytes.as_ref().as_ptr() as *const TokenEntry,
                num_tokens,
            )
        }
    }

    /// Returns the index of the live entry with the given mint, if any.
    #[inline(always)]
    pub fn find_entry(&self, mint: &Pubkey) -> Option<usize> {
        self.entries().iter().position(|entry| &entry.mint == mint)
    }

    /// The sum of all live entry weights.
    #[inline(always)]
    pub fn total_weight(&self) -> u16 {
        self.entries()
            .iter()
            .map(|entry| entry.weight as u16)
            .sum()
    }

    #[inline(always)]
    pub fn is_initialized(&self) -> bool {
        self.header.as_ref().discriminant() == REGISTRY_ACCOUNT_DISCRIMINANT
    }
}
