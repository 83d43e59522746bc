// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;

use super::BaseHasher;
use super::BloomFilter;
use super::Locations;
use super::Murmur3Split;
use super::builder::num_words;
use super::locations;
use super::sketch::false_positive_rate;

/// A Bloom filter whose bits can be set concurrently through a shared reference.
///
/// Bits are stored as [`AtomicU64`] words and set with `fetch_or`, so inserts racing on the same
/// word never lose each other's bits. An insert that happens-before a query is always observed
/// by it. A query that races with an insert of the same element may see only part of that
/// element's bits and return `false` until the insert completes.
///
/// Use [`super::BloomFilterBuilder::build_atomic`] to construct instances.
///
/// # Examples
///
/// ```
/// # use dhbloom::bloom::BloomFilterBuilder;
/// let filter = BloomFilterBuilder::with_accuracy(1000, 0.01).build_atomic().unwrap();
/// std::thread::scope(|s| {
///     s.spawn(|| filter.insert("left"));
///     s.spawn(|| filter.insert("right"));
/// });
/// assert!(filter.contains("left"));
/// assert!(filter.contains("right"));
/// ```
#[derive(Debug)]
pub struct AtomicBloomFilter<H = Murmur3Split> {
    hasher: H,
    num_hashes: u32,
    capacity_bits: u64,
    bit_array: Box<[AtomicU64]>,
}

impl<H: BaseHasher> AtomicBloomFilter<H> {
    pub(super) fn empty(hasher: H, num_hashes: u32, capacity_bits: u64) -> Self {
        let bit_array = (0..num_words(capacity_bits))
            .map(|_| AtomicU64::new(0))
            .collect();
        AtomicBloomFilter {
            hasher,
            num_hashes,
            capacity_bits,
            bit_array,
        }
    }

    /// Inserts an item into the filter.
    pub fn insert(&self, item: impl AsRef<[u8]>) {
        for bit_index in self.locations(item) {
            let (word, mask) = self.word_and_mask(bit_index);
            word.fetch_or(mask, Ordering::Release);
        }
    }

    /// Tests whether an item is possibly in the set.
    pub fn contains(&self, item: impl AsRef<[u8]>) -> bool {
        self.locations(item).all(|bit_index| {
            let (word, mask) = self.word_and_mask(bit_index);
            word.load(Ordering::Acquire) & mask != 0
        })
    }

    /// Inserts an item and returns whether all of its bits were already set.
    ///
    /// When two threads insert the same new element at once, at most one of them can observe
    /// every bit already set; both may report `false`.
    pub fn contains_and_insert(&self, item: impl AsRef<[u8]>) -> bool {
        let mut was_present = true;
        for bit_index in self.locations(item) {
            let (word, mask) = self.word_and_mask(bit_index);
            was_present &= word.fetch_or(mask, Ordering::AcqRel) & mask != 0;
        }
        was_present
    }

    /// Returns the `k` bit locations this filter uses for `item`.
    pub fn locations(&self, item: impl AsRef<[u8]>) -> Locations {
        let hashes = self.hasher.base_hashes(item.as_ref());
        locations(hashes, self.num_hashes, self.capacity_bits)
    }

    /// Clears all bits. Exclusive access guarantees no insert is in flight.
    pub fn reset(&mut self) {
        for word in self.bit_array.iter_mut() {
            *word.get_mut() = 0;
        }
    }

    /// Returns the number of bits set to 1, counted at call time.
    pub fn bits_used(&self) -> u64 {
        self.bit_array
            .iter()
            .map(|word| u64::from(word.load(Ordering::Acquire).count_ones()))
            .sum()
    }

    /// Returns whether no bit is set.
    pub fn is_empty(&self) -> bool {
        self.bit_array
            .iter()
            .all(|word| word.load(Ordering::Acquire) == 0)
    }

    /// Returns the total number of bits in the filter (m).
    pub fn capacity(&self) -> u64 {
        self.capacity_bits
    }

    /// Returns the number of locations per element (k).
    pub fn num_hashes(&self) -> u32 {
        self.num_hashes
    }

    /// Returns the base hash strategy.
    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    /// Returns the current load factor (fraction of bits set).
    pub fn load_factor(&self) -> f64 {
        self.bits_used() as f64 / self.capacity_bits as f64
    }

    /// Estimates the false positive probability after `elements_added` distinct insertions.
    ///
    /// See [`BloomFilter::estimate_false_positive_rate`].
    pub fn estimate_false_positive_rate(&self, elements_added: u64) -> f64 {
        false_positive_rate(self.capacity_bits, self.num_hashes, elements_added)
    }

    /// Copies the current bits into a single-owner [`BloomFilter`].
    pub fn to_filter(&self) -> BloomFilter<H>
    where
        H: Clone,
    {
        let bit_array: Vec<u64> = self
            .bit_array
            .iter()
            .map(|word| word.load(Ordering::Acquire))
            .collect();
        let num_bits_set = bit_array.iter().map(|w| u64::from(w.count_ones())).sum();
        BloomFilter {
            hasher: self.hasher.clone(),
            num_hashes: self.num_hashes,
            capacity_bits: self.capacity_bits,
            num_bits_set,
            bit_array,
        }
    }

    #[inline]
    fn word_and_mask(&self, bit_index: u64) -> (&AtomicU64, u64) {
        (
            &self.bit_array[(bit_index >> 6) as usize],
            1u64 << (bit_index & 63),
        )
    }
}

impl<H: BaseHasher> From<BloomFilter<H>> for AtomicBloomFilter<H> {
    fn from(filter: BloomFilter<H>) -> Self {
        AtomicBloomFilter {
            hasher: filter.hasher,
            num_hashes: filter.num_hashes,
            capacity_bits: filter.capacity_bits,
            bit_array: filter.bit_array.into_iter().map(AtomicU64::new).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bloom::BloomFilterBuilder;

    #[test]
    fn test_insert_and_contains() {
        let filter = BloomFilterBuilder::with_size(2048, 5).build_atomic().unwrap();
        assert!(filter.is_empty());
        assert!(!filter.contains("apple"));

        filter.insert("apple");
        assert!(filter.contains("apple"));
        assert!(!filter.is_empty());
        assert!(filter.bits_used() <= 5);
    }

    #[test]
    fn test_contains_and_insert() {
        let filter = BloomFilterBuilder::with_size(2048, 5).build_atomic().unwrap();
        assert!(!filter.contains_and_insert("apple"));
        assert!(filter.contains_and_insert("apple"));
    }

    #[test]
    fn test_matches_single_owner_filter() {
        let mut plain = BloomFilterBuilder::with_size(999, 4).seed(7).build().unwrap();
        let atomic = BloomFilterBuilder::with_size(999, 4).seed(7).build_atomic().unwrap();
        for i in 0u32..300 {
            plain.insert(i.to_le_bytes());
            atomic.insert(i.to_le_bytes());
        }
        assert_eq!(atomic.to_filter(), plain);
        assert_eq!(atomic.bits_used(), plain.bits_used());
    }

    #[test]
    fn test_from_filter_and_reset() {
        let mut plain = BloomFilterBuilder::with_size(512, 3).build().unwrap();
        plain.insert("kept");

        let mut atomic = AtomicBloomFilter::from(plain.clone());
        assert!(atomic.contains("kept"));
        assert_eq!(atomic.bits_used(), plain.bits_used());

        atomic.reset();
        assert!(atomic.is_empty());
        assert!(!atomic.contains("kept"));
        assert_eq!(atomic.capacity(), 512);
    }
}
