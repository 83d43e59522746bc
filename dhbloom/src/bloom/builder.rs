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

use super::AtomicBloomFilter;
use super::BaseHasher;
use super::BloomFilter;
use super::Murmur3Split;
use crate::error::Error;

/// Smallest accepted bit count `m`.
pub const MIN_NUM_BITS: u64 = 1;
/// Largest accepted bit count `m`; keeps the word count within `u32`.
pub const MAX_NUM_BITS: u64 = u32::MAX as u64 * 64;
/// Smallest accepted number of locations per element `k`.
pub const MIN_NUM_HASHES: u32 = 1;
/// Largest accepted number of locations per element `k`.
pub const MAX_NUM_HASHES: u32 = u16::MAX as u32;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Sizing {
    Size { num_bits: u64, num_hashes: u32 },
    Accuracy { max_items: u64, fpp: f64 },
}

/// Builder for creating [`BloomFilter`] and [`AtomicBloomFilter`] instances.
///
/// Provides two construction modes:
/// - [`with_accuracy()`](Self::with_accuracy): Specify target items and false positive rate
///   (recommended)
/// - [`with_size()`](Self::with_size): Specify the bit count `m` and locations per element `k`
///
/// Parameters are validated when the filter is built; invalid ones yield an
/// [`ErrorKind::InvalidArgument`](crate::error::ErrorKind::InvalidArgument) error.
#[derive(Debug, Clone)]
pub struct BloomFilterBuilder<H = Murmur3Split> {
    sizing: Sizing,
    hasher: H,
}

impl BloomFilterBuilder<Murmur3Split> {
    /// Creates a builder with optimal parameters for a target accuracy.
    ///
    /// # Arguments
    ///
    /// - `max_items`: Maximum expected number of distinct items (must be positive)
    /// - `fpp`: Target false positive probability in `(0.0, 1.0]`
    ///
    /// # Examples
    ///
    /// ```
    /// # use dhbloom::bloom::BloomFilterBuilder;
    /// let filter = BloomFilterBuilder::with_accuracy(10_000, 0.01).build().unwrap();
    /// assert_eq!(filter.num_hashes(), 7);
    /// ```
    pub fn with_accuracy(max_items: u64, fpp: f64) -> Self {
        BloomFilterBuilder {
            sizing: Sizing::Accuracy { max_items, fpp },
            hasher: Murmur3Split::default(),
        }
    }

    /// Creates a builder with an explicit bit count and number of locations per element.
    ///
    /// The bit count is used as is; it is not rounded to a word boundary.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dhbloom::bloom::BloomFilterBuilder;
    /// let filter = BloomFilterBuilder::with_size(1000, 5).build().unwrap();
    /// assert_eq!(filter.capacity(), 1000);
    ///
    /// assert!(BloomFilterBuilder::with_size(1000, 0).build().is_err());
    /// ```
    pub fn with_size(num_bits: u64, num_hashes: u32) -> Self {
        BloomFilterBuilder {
            sizing: Sizing::Size {
                num_bits,
                num_hashes,
            },
            hasher: Murmur3Split::default(),
        }
    }

    /// Sets a custom seed for the default MurmurHash3 strategy (default: 0).
    pub fn seed(mut self, seed: u64) -> Self {
        self.hasher = Murmur3Split::with_seed(seed);
        self
    }

    /// Suggests optimal number of bits given max items and target FPP.
    ///
    /// Formula: `m = ceil(-n * ln(p) / (ln(2)^2))`
    ///
    /// # Examples
    ///
    /// ```
    /// # use dhbloom::bloom::BloomFilterBuilder;
    /// assert_eq!(BloomFilterBuilder::suggest_num_bits(1000, 0.01), 9586);
    /// ```
    pub fn suggest_num_bits(max_items: u64, fpp: f64) -> u64 {
        let n = max_items as f64;
        let ln2_squared = std::f64::consts::LN_2 * std::f64::consts::LN_2;
        let bits = (-n * fpp.ln() / ln2_squared).ceil() as u64;
        bits.clamp(MIN_NUM_BITS, MAX_NUM_BITS)
    }

    /// Suggests optimal number of locations per element given max items and bit count.
    ///
    /// Formula: `k = round((m / n) * ln(2))`, clamped to
    /// `[MIN_NUM_HASHES, MAX_NUM_HASHES]`. A `max_items` of zero yields [`MIN_NUM_HASHES`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use dhbloom::bloom::BloomFilterBuilder;
    /// assert_eq!(BloomFilterBuilder::suggest_num_hashes(1000, 9586), 7); // 6.64
    /// ```
    pub fn suggest_num_hashes(max_items: u64, num_bits: u64) -> u32 {
        if max_items == 0 {
            return MIN_NUM_HASHES;
        }
        let k = (num_bits as f64 / max_items as f64 * std::f64::consts::LN_2).round();
        k.clamp(f64::from(MIN_NUM_HASHES), f64::from(MAX_NUM_HASHES)) as u32
    }
}

impl<H: BaseHasher> BloomFilterBuilder<H> {
    /// Replaces the base hash strategy.
    ///
    /// The default [`Murmur3Split`] is the only strategy intended for production; the legacy
    /// strategies exist for compatibility and regression testing.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dhbloom::bloom::{BloomFilterBuilder, LegacyQuadHash};
    /// let filter = BloomFilterBuilder::with_size(4096, 4)
    ///     .hasher(LegacyQuadHash)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(filter.num_hashes(), 4);
    /// ```
    pub fn hasher<G: BaseHasher>(self, hasher: G) -> BloomFilterBuilder<G> {
        BloomFilterBuilder {
            sizing: self.sizing,
            hasher,
        }
    }

    /// Builds a single-owner Bloom filter.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidArgument` error if the bit count or number of locations is zero or
    /// too large, if `max_items` is zero, or if `fpp` is not in `(0.0, 1.0]`.
    pub fn build(self) -> Result<BloomFilter<H>, Error> {
        let (num_bits, num_hashes) = self.resolve()?;
        Ok(BloomFilter {
            hasher: self.hasher,
            num_hashes,
            capacity_bits: num_bits,
            num_bits_set: 0,
            bit_array: vec![0u64; num_words(num_bits)],
        })
    }

    /// Builds a filter that accepts concurrent inserts through a shared reference.
    ///
    /// # Errors
    ///
    /// Same conditions as [`build()`](Self::build).
    pub fn build_atomic(self) -> Result<AtomicBloomFilter<H>, Error> {
        let (num_bits, num_hashes) = self.resolve()?;
        Ok(AtomicBloomFilter::empty(self.hasher, num_hashes, num_bits))
    }

    /// Validates the sizing and returns `(num_bits, num_hashes)`.
    fn resolve(&self) -> Result<(u64, u32), Error> {
        let (num_bits, num_hashes) = match self.sizing {
            Sizing::Size {
                num_bits,
                num_hashes,
            } => (num_bits, num_hashes),
            Sizing::Accuracy { max_items, fpp } => {
                if max_items == 0 {
                    return Err(Error::zero_parameter("max_items"));
                }
                if !(fpp > 0.0 && fpp <= 1.0) {
                    return Err(
                        Error::invalid_argument("fpp must be in (0.0, 1.0]").with_context("fpp", fpp)
                    );
                }
                let num_bits = BloomFilterBuilder::<Murmur3Split>::suggest_num_bits(max_items, fpp);
                let num_hashes =
                    BloomFilterBuilder::<Murmur3Split>::suggest_num_hashes(max_items, num_bits);
                (num_bits, num_hashes)
            }
        };

        if num_bits < MIN_NUM_BITS {
            return Err(Error::zero_parameter("num_bits"));
        }
        if num_bits > MAX_NUM_BITS {
            return Err(Error::parameter_too_large("num_bits", num_bits, MAX_NUM_BITS));
        }
        if num_hashes < MIN_NUM_HASHES {
            return Err(Error::zero_parameter("num_hashes"));
        }
        if num_hashes > MAX_NUM_HASHES {
            return Err(Error::parameter_too_large(
                "num_hashes",
                u64::from(num_hashes),
                u64::from(MAX_NUM_HASHES),
            ));
        }

        tracing::debug!(
            num_bits,
            num_hashes,
            hasher = self.hasher.name(),
            "building bloom filter"
        );
        if num_bits == 1 {
            tracing::warn!(
                num_hashes,
                "single-bit bloom filter reports every element as present after the first insert"
            );
        }

        Ok((num_bits, num_hashes))
    }
}

/// Number of `u64` words backing `num_bits` bits. `num_bits` is at most [`MAX_NUM_BITS`].
pub(super) fn num_words(num_bits: u64) -> usize {
    num_bits.div_ceil(64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bloom::Fnv1Split32;
    use crate::error::ErrorKind;

    #[test]
    fn test_suggestions() {
        assert_eq!(BloomFilterBuilder::suggest_num_bits(1000, 0.01), 9586);
        assert_eq!(BloomFilterBuilder::suggest_num_hashes(1000, 9586), 7);
        // fpp of 1.0 needs no bits at all, clamped to one
        assert_eq!(BloomFilterBuilder::suggest_num_bits(1000, 1.0), MIN_NUM_BITS);
        assert_eq!(BloomFilterBuilder::suggest_num_hashes(1000, 1), MIN_NUM_HASHES);
        assert_eq!(BloomFilterBuilder::suggest_num_hashes(1000, 0), MIN_NUM_HASHES);
        // no items: 0/0 and m/0 must not leak through the clamp
        assert_eq!(BloomFilterBuilder::suggest_num_hashes(0, 0), MIN_NUM_HASHES);
        assert_eq!(BloomFilterBuilder::suggest_num_hashes(0, 1000), MIN_NUM_HASHES);
        assert_eq!(
            BloomFilterBuilder::suggest_num_hashes(1, MAX_NUM_BITS),
            MAX_NUM_HASHES
        );
    }

    #[test]
    fn test_with_accuracy() {
        let filter = BloomFilterBuilder::with_accuracy(1000, 0.01).build().unwrap();
        assert_eq!(filter.capacity(), 9586);
        assert_eq!(filter.num_hashes(), 7);
        assert!(filter.is_empty());
    }

    #[test]
    fn test_word_count_rounds_up() {
        assert_eq!(num_words(1), 1);
        assert_eq!(num_words(64), 1);
        assert_eq!(num_words(65), 2);
        let filter = BloomFilterBuilder::with_size(65, 2).build().unwrap();
        assert_eq!(filter.bit_array.len(), 2);
    }

    #[test]
    fn test_rejects_zero_parameters() {
        let err = BloomFilterBuilder::with_size(0, 3).build().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(err.context("num_bits"), Some("0"));

        let err = BloomFilterBuilder::with_size(64, 0).build().unwrap_err();
        assert_eq!(err.context("num_hashes"), Some("0"));

        let err = BloomFilterBuilder::with_accuracy(0, 0.01).build().unwrap_err();
        assert_eq!(err.context("max_items"), Some("0"));
    }

    #[test]
    fn test_rejects_out_of_range() {
        for fpp in [0.0, -0.5, 1.5, f64::NAN] {
            let err = BloomFilterBuilder::with_accuracy(100, fpp).build().unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidArgument);
            assert!(err.message().starts_with("fpp"));
        }

        let err = BloomFilterBuilder::with_size(MAX_NUM_BITS + 1, 3)
            .build_atomic()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        let err = BloomFilterBuilder::with_size(64, MAX_NUM_HASHES + 1)
            .build()
            .unwrap_err();
        assert_eq!(err.context("num_hashes"), Some("65536"));
    }

    #[test]
    fn test_max_num_bits_boundary() {
        // validated without allocating the ~32 GiB array
        let resolved = BloomFilterBuilder::with_size(MAX_NUM_BITS, 3).resolve().unwrap();
        assert_eq!(resolved, (MAX_NUM_BITS, 3));
        assert_eq!(num_words(MAX_NUM_BITS), u32::MAX as usize);

        let err = BloomFilterBuilder::with_size(MAX_NUM_BITS + 1, 3)
            .resolve()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(err.context("num_bits"), Some("274877906881"));

        let resolved = BloomFilterBuilder::with_size(1, MAX_NUM_HASHES).resolve().unwrap();
        assert_eq!(resolved, (1, MAX_NUM_HASHES));
    }

    #[test]
    fn test_hasher_swap_keeps_sizing() {
        let filter = BloomFilterBuilder::with_size(512, 3)
            .hasher(Fnv1Split32)
            .build()
            .unwrap();
        assert_eq!(filter.capacity(), 512);
        assert_eq!(filter.num_hashes(), 3);
        assert_eq!(filter.hasher().name(), "fnv1-64-split32");
    }

    #[test]
    fn test_seed() {
        let filter = BloomFilterBuilder::with_size(512, 3).seed(42).build().unwrap();
        assert_eq!(filter.hasher().seed(), 42);
    }
}
