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

use std::fmt;

use crate::hash::fnv1_64;
use crate::hash::fnv1a_64;
use crate::hash::murmur3_x64_128;
use crate::hash::murmur3_x64_128_extended;

/// Base hash words derived from an element, consumed by [`locations`](super::locations).
///
/// The variant decides which double hashing form is used: a pair is combined as
/// `h0 + i * h1`, a quad with the legacy alternating form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseHashes {
    /// Two 64-bit words `[h0, h1]`.
    Pair([u64; 2]),
    /// Four 64-bit words `[h0, h1, h2, h3]`.
    Quad([u64; 4]),
}

/// Derives base hash words from the bytes of an element.
///
/// Implementations must be pure: the same bytes always produce the same words, whatever was
/// hashed before. They are evaluated exactly once per inserted or queried element.
pub trait BaseHasher: fmt::Debug {
    /// Short, stable name used in logs and test reports.
    fn name(&self) -> &'static str;

    /// Computes the base hash words for `data`. Empty input is valid.
    fn base_hashes(&self, data: &[u8]) -> BaseHashes;
}

impl<H: BaseHasher + ?Sized> BaseHasher for &H {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn base_hashes(&self, data: &[u8]) -> BaseHashes {
        (**self).base_hashes(data)
    }
}

/// MurmurHash3 x64/128, split into two full 64-bit words.
///
/// This is the production strategy and the default for every filter type. Its location
/// histograms are indistinguishable from uniform even for tiny bit arrays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Murmur3Split {
    seed: u64,
}

impl Murmur3Split {
    /// Creates the strategy with a custom hash seed (default: 0).
    ///
    /// Filters built with different seeds place the same element at different locations.
    pub fn with_seed(seed: u64) -> Self {
        Murmur3Split { seed }
    }

    /// Returns the hash seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl BaseHasher for Murmur3Split {
    fn name(&self) -> &'static str {
        "murmur3-128-split"
    }

    #[inline]
    fn base_hashes(&self, data: &[u8]) -> BaseHashes {
        let (h0, h1) = murmur3_x64_128(data, self.seed);
        BaseHashes::Pair([h0, h1])
    }
}

/// Legacy four-word scheme: MurmurHash3 x64/128 of the element, then of the element followed by
/// a single `0x01` byte.
///
/// Yields [`BaseHashes::Quad`], so locations use the alternating secondary multiplier. Kept for
/// compatibility with filters populated by the older scheme; not a production default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LegacyQuadHash;

impl LegacyQuadHash {
    fn words(data: &[u8]) -> [u64; 4] {
        let ((v1, v2), (v3, v4)) = murmur3_x64_128_extended(data, 1, 0);
        [v1, v2, v3, v4]
    }
}

impl BaseHasher for LegacyQuadHash {
    fn name(&self) -> &'static str {
        "legacy-quad"
    }

    fn base_hashes(&self, data: &[u8]) -> BaseHashes {
        BaseHashes::Quad(Self::words(data))
    }
}

/// Legacy scheme that computes the four legacy words but combines only the first two.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LegacyPairHash;

impl BaseHasher for LegacyPairHash {
    fn name(&self) -> &'static str {
        "legacy-pair"
    }

    fn base_hashes(&self, data: &[u8]) -> BaseHashes {
        let [h0, h1, _, _] = LegacyQuadHash::words(data);
        BaseHashes::Pair([h0, h1])
    }
}

/// Splits a 64-bit digest into two zero-extended 32-bit halves: low half first.
#[inline]
fn split_32(digest: u64) -> BaseHashes {
    BaseHashes::Pair([digest & 0xffff_ffff, digest >> 32])
}

/// FNV-1 64-bit split into two 32-bit halves.
///
/// Produces measurably non-uniform locations (badly skewed for non-power-of-two sizes,
/// implausibly regular for power-of-two sizes). Regression baseline only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Fnv1Split32;

impl BaseHasher for Fnv1Split32 {
    fn name(&self) -> &'static str {
        "fnv1-64-split32"
    }

    fn base_hashes(&self, data: &[u8]) -> BaseHashes {
        split_32(fnv1_64(data))
    }
}

/// FNV-1a 64-bit split into two 32-bit halves. Regression baseline only, see [`Fnv1Split32`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Fnv1aSplit32;

impl BaseHasher for Fnv1aSplit32 {
    fn name(&self) -> &'static str {
        "fnv1a-64-split32"
    }

    fn base_hashes(&self, data: &[u8]) -> BaseHashes {
        split_32(fnv1a_64(data))
    }
}
