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

//! Bloom filter implementation for probabilistic set membership testing.
//!
//! A Bloom filter is a space-efficient probabilistic data structure used to test whether
//! an element is a member of a set. False positive matches are possible, but false negatives
//! are not. In other words, a query returns either "possibly in set" or "definitely not in set".
//!
//! # Properties
//!
//! - **No false negatives**: If an item was inserted, `contains()` will always return `true`
//! - **Possible false positives**: `contains()` may return `true` for items never inserted
//! - **Fixed size**: The bit array never grows or shrinks after construction
//! - **One hash per element**: The base hash is evaluated once, whatever `k` is
//!
//! # Usage
//!
//! ```rust
//! use dhbloom::bloom::BloomFilterBuilder;
//!
//! // Create a filter sized for 1000 items with 1% false positive rate
//! let mut filter = BloomFilterBuilder::with_accuracy(1000, 0.01).build().unwrap();
//!
//! filter.insert("apple");
//! filter.insert(42_u64.to_le_bytes());
//!
//! assert!(filter.contains("apple"));
//! assert!(!filter.contains("grape")); // never inserted (probably)
//!
//! println!("Capacity: {} bits", filter.capacity());
//! println!("Bits used: {}", filter.bits_used());
//! println!("Est. FPP at 1000 items: {:.4}", filter.estimate_false_positive_rate(1000));
//! ```
//!
//! # Location assignment
//!
//! Elements are reduced to bit locations in two steps:
//!
//! 1. A [`BaseHasher`] strategy turns the element bytes into [`BaseHashes`].
//! 2. [`locations`] combines those words by double hashing into `k` indices in `[0, m)`.
//!
//! The default strategy, [`Murmur3Split`], evaluates MurmurHash3 x64/128 once and uses its two
//! 64-bit halves as `h0` and `h1`, so location `i` is `(h0 + i * h1) mod m`. Its location
//! histograms pass a chi-squared goodness-of-fit test against the uniform distribution even for
//! an 8-bit array.
//!
//! Other strategies are kept only as named legacy variants:
//!
//! - [`LegacyQuadHash`]: four words from two MurmurHash3 digests, combined with an alternating
//!   secondary multiplier
//! - [`LegacyPairHash`]: the same four words, of which only the first two are used
//! - [`Fnv1Split32`] and [`Fnv1aSplit32`]: a 64-bit FNV digest split into two 32-bit halves,
//!   which produces detectably non-uniform locations and must not be used in production
//!
//! # Concurrency
//!
//! [`BloomFilter`] needs `&mut self` to insert. [`AtomicBloomFilter`] inserts through `&self`
//! with atomic bit operations and can be shared between threads directly.
//!
//! # References
//!
//! - Bloom, Burton H. (1970). "Space/time trade-offs in hash coding with allowable errors"
//! - Kirsch and Mitzenmacher (2008). "Less Hashing, Same Performance: Building a Better Bloom
//!   Filter"

mod atomic;
mod builder;
mod location;
mod sketch;
mod strategy;

pub use self::atomic::AtomicBloomFilter;
pub use self::builder::BloomFilterBuilder;
pub use self::builder::MAX_NUM_BITS;
pub use self::builder::MAX_NUM_HASHES;
pub use self::builder::MIN_NUM_BITS;
pub use self::builder::MIN_NUM_HASHES;
pub use self::location::Locations;
pub use self::location::location;
pub use self::location::locations;
pub use self::sketch::BloomFilter;
pub use self::strategy::BaseHasher;
pub use self::strategy::BaseHashes;
pub use self::strategy::Fnv1Split32;
pub use self::strategy::Fnv1aSplit32;
pub use self::strategy::LegacyPairHash;
pub use self::strategy::LegacyQuadHash;
pub use self::strategy::Murmur3Split;
