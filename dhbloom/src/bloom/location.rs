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

use std::iter::FusedIterator;

use super::BaseHashes;

/// Computes the `i`-th location in `[0, m)` from base hash words.
///
/// Pairs use Kirsch-Mitzenmacher double hashing:
///
/// ```text
/// location(i) = (h0 + i * h1) mod m
/// ```
///
/// Quads use the legacy alternating form, which switches both the primary and the secondary
/// word as `i` advances:
///
/// ```text
/// location(i) = (h[i mod 2] + i * h[2 + ((i + i mod 2) mod 4) / 2]) mod m
/// ```
///
/// All arithmetic wraps at 64 bits before the reduction.
///
/// # Panics
///
/// Panics if `m` is 0.
#[inline]
pub fn location(hashes: &BaseHashes, i: u64, m: u64) -> u64 {
    let combined = match *hashes {
        BaseHashes::Pair([h0, h1]) => h0.wrapping_add(i.wrapping_mul(h1)),
        BaseHashes::Quad(h) => {
            let primary = h[(i % 2) as usize];
            let secondary = h[2 + ((i + i % 2) % 4 / 2) as usize];
            primary.wrapping_add(i.wrapping_mul(secondary))
        }
    };
    combined % m
}

/// Derives the `k` locations of an element in an `m`-bit array.
///
/// Locations are not necessarily distinct. `k == 0` yields nothing; `m == 1` yields only zeros.
///
/// # Examples
///
/// ```
/// # use dhbloom::bloom::{locations, BaseHashes};
/// let locs: Vec<u64> = locations(BaseHashes::Pair([10, 3]), 4, 7).collect();
/// assert_eq!(locs, vec![3, 6, 2, 5]);
/// ```
pub fn locations(hashes: BaseHashes, k: u32, m: u64) -> Locations {
    debug_assert!(m > 0, "m must be positive");
    Locations {
        hashes,
        next: 0,
        k,
        m,
    }
}

/// Iterator over the locations of one element. Created by [`locations`].
#[derive(Debug, Clone)]
pub struct Locations {
    hashes: BaseHashes,
    next: u32,
    k: u32,
    m: u64,
}

impl Iterator for Locations {
    type Item = u64;

    #[inline]
    fn next(&mut self) -> Option<u64> {
        if self.next >= self.k {
            return None;
        }
        let i = self.next;
        self.next += 1;
        Some(location(&self.hashes, u64::from(i), self.m))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.k - self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Locations {}

impl FusedIterator for Locations {}
