// SPDX-FileCopyrightText: 2025 The vita49-rs Authors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
/*!
Data structures and methods related to context association lists
(ANSI/VITA-49.2-2017 section 9.13.2).
*/

use core::fmt;

use deku::prelude::*;

/// Base context association lists structure. Carries up to five lists of
/// StreamIDs (or, for the vector-component list, opaque tags) associating a
/// context stream with other related streams.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default, DekuRead, DekuWrite)]
#[deku(endian = "endian", ctx = "endian: deku::ctx::Endian")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContextAssociationLists {
    w1: u32,
    w2: u32,
    #[deku(count = "((w1 >> 16) & 0x3FF)")]
    source_list: Vec<u32>,
    #[deku(count = "(w1 & 0x3FF)")]
    system_list: Vec<u32>,
    #[deku(count = "(w2 >> 16)")]
    vector_component_list: Vec<u32>,
    #[deku(count = "(w2 & 0x1FF)")]
    async_channel_list: Vec<u32>,
    #[deku(cond = "(w2 & (1 << 15) > 1)", count = "(w2 & 0x1FF)")]
    async_channel_tag_list: Vec<u32>,
}

impl ContextAssociationLists {
    /// Get the size of the lists in 32-bit words.
    pub fn size_words(&self) -> u16 {
        // Start with the 2 top words
        let mut ret = 2;
        ret += self.source_list.len();
        ret += self.system_list.len();
        ret += self.vector_component_list.len();
        ret += self.async_channel_list.len();
        ret += self.async_channel_tag_list.len();
        ret as u16
    }

    /// Gets the list of source context StreamIDs.
    pub fn source_list(&self) -> &[u32] {
        &self.source_list
    }
    /// Sets the list of source context StreamIDs.
    ///
    /// # Panics
    /// Panics if `list` has more than 1023 entries (the field's 10-bit
    /// length is unable to represent a larger count).
    pub fn set_source_list(&mut self, list: Vec<u32>) {
        assert!(list.len() <= 0x3FF, "source list too long");
        self.w1 = (self.w1 & 0x0000_FFFF) | ((list.len() as u32) << 16);
        self.source_list = list;
    }

    /// Gets the list of system context StreamIDs.
    pub fn system_list(&self) -> &[u32] {
        &self.system_list
    }
    /// Sets the list of system context StreamIDs.
    ///
    /// # Panics
    /// Panics if `list` has more than 1023 entries (the field's 10-bit
    /// length is unable to represent a larger count).
    pub fn set_system_list(&mut self, list: Vec<u32>) {
        assert!(list.len() <= 0x3FF, "system list too long");
        self.w1 = (self.w1 & 0xFFFF_0000) | (list.len() as u32);
        self.system_list = list;
    }

    /// Gets the list of vector-component tags.
    pub fn vector_component_list(&self) -> &[u32] {
        &self.vector_component_list
    }
    /// Sets the list of vector-component tags.
    ///
    /// # Panics
    /// Panics if `list` has more than 65535 entries (the field's 16-bit
    /// length is unable to represent a larger count).
    pub fn set_vector_component_list(&mut self, list: Vec<u32>) {
        assert!(list.len() <= 0xFFFF, "vector-component list too long");
        self.w2 = (self.w2 & 0x0000_FFFF) | ((list.len() as u32) << 16);
        self.vector_component_list = list;
    }

    /// Gets the list of asynchronous-channel context StreamIDs.
    pub fn async_channel_list(&self) -> &[u32] {
        &self.async_channel_list
    }
    /// Sets the list of asynchronous-channel context StreamIDs. If an
    /// async-channel-tag list is present, it's truncated/extended to match
    /// the new length.
    ///
    /// # Panics
    /// Panics if `list` has more than 511 entries (the field's 9-bit length
    /// is unable to represent a larger count).
    pub fn set_async_channel_list(&mut self, list: Vec<u32>) {
        assert!(list.len() <= 0x1FF, "async-channel list too long");
        self.w2 = (self.w2 & !0x1FF) | (list.len() as u32);
        if !self.async_channel_tag_list.is_empty() {
            self.async_channel_tag_list.resize(list.len(), 0);
        }
        self.async_channel_list = list;
    }

    /// True if an asynchronous-channel tag list follows the
    /// asynchronous-channel list.
    pub fn async_channel_tag_list_enabled(&self) -> bool {
        self.w2 & (1 << 15) != 0
    }

    /// Gets the list of asynchronous-channel tags, if enabled.
    pub fn async_channel_tag_list(&self) -> Option<&[u32]> {
        self.async_channel_tag_list_enabled()
            .then_some(&self.async_channel_tag_list)
    }
    /// Sets the list of asynchronous-channel tags. Pass `None` to omit the
    /// list entirely. The list's length is tied to the asynchronous-channel
    /// list's length, so it's resized to match on assignment.
    pub fn set_async_channel_tag_list(&mut self, list: Option<Vec<u32>>) {
        match list {
            Some(mut list) => {
                self.w2 |= 1 << 15;
                list.resize(self.async_channel_list.len(), 0);
                self.async_channel_tag_list = list;
            }
            None => {
                self.w2 &= !(1 << 15);
                self.async_channel_tag_list.clear();
            }
        }
    }
}

impl fmt::Display for ContextAssociationLists {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Context association lists:")?;
        writeln!(f, "  Source list: {:?}", self.source_list())?;
        writeln!(f, "  System list: {:?}", self.system_list())?;
        writeln!(
            f,
            "  Vector-component list: {:?}",
            self.vector_component_list()
        )?;
        writeln!(f, "  Async-channel list: {:?}", self.async_channel_list())?;
        writeln!(
            f,
            "  Async-channel tag list: {:?}",
            self.async_channel_tag_list()
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lengths_stay_in_sync_with_header_words() {
        let mut lists = ContextAssociationLists::default();
        lists.set_source_list(vec![1, 2, 3]);
        lists.set_system_list(vec![4, 5]);
        lists.set_vector_component_list(vec![6]);
        lists.set_async_channel_list(vec![7, 8, 9, 10]);

        assert_eq!((lists.w1 >> 16) & 0x3FF, 3);
        assert_eq!(lists.w1 & 0x3FF, 2);
        assert_eq!(lists.w2 >> 16, 1);
        assert_eq!(lists.w2 & 0x1FF, 4);
        assert_eq!(lists.size_words(), 2 + 3 + 2 + 1 + 4);
    }

    #[test]
    fn async_channel_tag_list_follows_channel_list_length() {
        let mut lists = ContextAssociationLists::default();
        lists.set_async_channel_list(vec![1, 2, 3]);
        assert_eq!(lists.async_channel_tag_list(), None);

        lists.set_async_channel_tag_list(Some(vec![10, 20, 30]));
        assert!(lists.async_channel_tag_list_enabled());
        assert_eq!(lists.async_channel_tag_list(), Some(&[10, 20, 30][..]));

        lists.set_async_channel_list(vec![1, 2]);
        assert_eq!(lists.async_channel_tag_list(), Some(&[10, 20][..]));

        lists.set_async_channel_tag_list(None);
        assert_eq!(lists.async_channel_tag_list(), None);
    }
}
