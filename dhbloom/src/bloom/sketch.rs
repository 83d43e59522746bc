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

use super::BaseHasher;
use super::Locations;
use super::Murmur3Split;
use super::locations;

/// A Bloom filter for probabilistic set membership testing.
///
/// Provides fast membership queries with:
/// - No false negatives (inserted items always return `true`)
/// - Tunable false positive rate
/// - Constant space usage
///
/// Each element is hashed once by the base hash strategy `H`; its `k` bit locations are then
/// derived by double hashing, see [`locations`](super::locations).
///
/// Mutation requires `&mut self`. For concurrent inserts use [`super::AtomicBloomFilter`].
///
/// Use [`super::BloomFilterBuilder`] to construct instances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BloomFilter<H = Murmur3Split> {
    /// Base hash strategy
    pub(super) hasher: H,
    /// Number of locations per element (k)
    pub(super) num_hashes: u32,
    /// Total number of bits in the filter (m)
    pub(super) capacity_bits: u64,
    /// Count of bits set to 1
    pub(super) num_bits_set: u64,
    /// Bit array packed into u64 words, length = ceil(capacity_bits / 64)
    pub(super) bit_array: Vec<u64>,
}

impl<H: BaseHasher> BloomFilter<H> {
    /// Tests whether an item is possibly in the set.
    ///
    /// Returns:
    /// - `true`: Item was **possibly** inserted (or false positive)
    /// - `false`: Item was **definitely not** inserted
    ///
    /// # Examples
    ///
    /// ```
    /// # use dhbloom::bloom::BloomFilterBuilder;
    /// let mut filter = BloomFilterBuilder::with_accuracy(100, 0.01).build().unwrap();
    /// filter.insert("apple");
    ///
    /// assert!(filter.contains("apple"));
    /// assert!(!filter.contains("grape"));
    /// ```
    pub fn contains(&self, item: impl AsRef<[u8]>) -> bool {
        if self.is_empty() {
            return false;
        }
        self.locations(item).all(|bit_index| self.get_bit(bit_index))
    }

    /// Tests and inserts an item in a single operation, hashing it only once.
    ///
    /// Returns whether the item was possibly already in the set before insertion.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dhbloom::bloom::BloomFilterBuilder;
    /// let mut filter = BloomFilterBuilder::with_accuracy(100, 0.01).build().unwrap();
    ///
    /// assert!(!filter.contains_and_insert(b"apple"));
    /// assert!(filter.contains_and_insert(b"apple"));
    /// ```
    pub fn contains_and_insert(&mut self, item: impl AsRef<[u8]>) -> bool {
        let mut was_present = true;
        for bit_index in self.locations(item) {
            was_present &= self.set_bit(bit_index);
        }
        was_present
    }

    /// Inserts an item into the filter.
    ///
    /// After insertion, `contains(item)` will always return `true`. Inserting the same item
    /// again does not change the filter.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dhbloom::bloom::BloomFilterBuilder;
    /// let mut filter = BloomFilterBuilder::with_accuracy(100, 0.01).build().unwrap();
    ///
    /// filter.insert("apple");
    /// filter.insert(42_u64.to_le_bytes());
    /// filter.insert([1u8, 2, 3]);
    ///
    /// assert!(filter.contains("apple"));
    /// ```
    pub fn insert(&mut self, item: impl AsRef<[u8]>) {
        for bit_index in self.locations(item) {
            self.set_bit(bit_index);
        }
    }

    /// Returns the `k` bit locations this filter uses for `item`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dhbloom::bloom::BloomFilterBuilder;
    /// let filter = BloomFilterBuilder::with_size(64, 3).build().unwrap();
    /// let locs: Vec<u64> = filter.locations(b"apple").collect();
    /// assert_eq!(locs.len(), 3);
    /// assert!(locs.iter().all(|&loc| loc < 64));
    /// ```
    pub fn locations(&self, item: impl AsRef<[u8]>) -> Locations {
        let hashes = self.hasher.base_hashes(item.as_ref());
        locations(hashes, self.num_hashes, self.capacity_bits)
    }

    /// Resets the filter to its initial empty state.
    ///
    /// Clears all bits while preserving capacity and configuration.
    pub fn reset(&mut self) {
        self.bit_array.fill(0);
        self.num_bits_set = 0;
    }

    /// Returns whether the filter is empty (no items inserted).
    pub fn is_empty(&self) -> bool {
        self.num_bits_set == 0
    }

    /// Returns the number of bits set to 1. Never decreases until [`reset()`](Self::reset).
    pub fn bits_used(&self) -> u64 {
        self.num_bits_set
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
    ///
    /// Values above 0.5 indicate degraded false positive rates.
    pub fn load_factor(&self) -> f64 {
        self.num_bits_set as f64 / self.capacity_bits as f64
    }

    /// Estimates the current false positive probability from the observed load factor.
    ///
    /// Uses the approximation `load_factor^k`.
    pub fn estimated_fpp(&self) -> f64 {
        self.load_factor().powf(f64::from(self.num_hashes))
    }

    /// Estimates the false positive probability after `elements_added` distinct insertions.
    ///
    /// Uses `(1 - e^(-k * n / m))^k`, which assumes uniformly distributed locations.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dhbloom::bloom::BloomFilterBuilder;
    /// let filter = BloomFilterBuilder::with_accuracy(1000, 0.01).build().unwrap();
    /// assert_eq!(filter.estimate_false_positive_rate(0), 0.0);
    /// assert!(filter.estimate_false_positive_rate(1000) < 0.011);
    /// ```
    pub fn estimate_false_positive_rate(&self, elements_added: u64) -> f64 {
        false_positive_rate(self.capacity_bits, self.num_hashes, elements_added)
    }

    /// Gets the value of a single bit.
    fn get_bit(&self, bit_index: u64) -> bool {
        let word_index = (bit_index >> 6) as usize;
        let mask = 1u64 << (bit_index & 63);
        (self.bit_array[word_index] & mask) != 0
    }

    /// Sets a single bit, returning whether it was already set.
    fn set_bit(&mut self, bit_index: u64) -> bool {
        let word_index = (bit_index >> 6) as usize;
        let mask = 1u64 << (bit_index & 63);

        let word = &mut self.bit_array[word_index];
        let was_set = *word & mask != 0;
        if !was_set {
            *word |= mask;
            self.num_bits_set += 1;
        }
        was_set
    }
}

/// `(1 - e^(-k * n / m))^k`
pub(super) fn false_positive_rate(num_bits: u64, num_hashes: u32, elements_added: u64) -> f64 {
    let k = f64::from(num_hashes);
    let fill = -k * elements_added as f64 / num_bits as f64;
    (1.0 - fill.exp()).powf(k)
}
