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

use dhbloom::bloom::BaseHasher;
use dhbloom::bloom::BaseHashes;
use dhbloom::bloom::Fnv1Split32;
use dhbloom::bloom::LegacyQuadHash;
use dhbloom::bloom::Murmur3Split;
use dhbloom::bloom::locations;

const SIZES: [u64; 7] = [1, 2, 7, 8, 64, 1000, 1 << 40];
const COUNTS: [u32; 5] = [1, 2, 3, 7, 31];

fn elements() -> Vec<Vec<u8>> {
    let mut elements: Vec<Vec<u8>> = (0u32..64).map(|i| i.to_le_bytes().to_vec()).collect();
    elements.push(vec![]);
    elements.push(b"The quick brown fox jumps over the lazy dog".to_vec());
    elements.push(vec![0xff; 1000]);
    elements
}

fn all_locations<H: BaseHasher>(hasher: &H, data: &[u8], k: u32, m: u64) -> Vec<u64> {
    locations(hasher.base_hashes(data), k, m).collect()
}

#[test]
fn test_deterministic() {
    let murmur = Murmur3Split::default();
    for data in elements() {
        for m in SIZES {
            for k in COUNTS {
                let first = all_locations(&murmur, &data, k, m);
                let second = all_locations(&murmur, &data, k, m);
                assert_eq!(first, second);
                assert_eq!(
                    all_locations(&LegacyQuadHash, &data, k, m),
                    all_locations(&LegacyQuadHash, &data, k, m)
                );
            }
        }
    }
}

#[test]
fn test_length_and_range() {
    let murmur = Murmur3Split::with_seed(9001);
    for data in elements() {
        for m in SIZES {
            for k in COUNTS {
                for locs in [
                    all_locations(&murmur, &data, k, m),
                    all_locations(&LegacyQuadHash, &data, k, m),
                    all_locations(&Fnv1Split32, &data, k, m),
                ] {
                    assert_eq!(locs.len(), k as usize);
                    assert!(locs.iter().all(|&loc| loc < m), "m = {m}: {locs:?}");
                }
            }
        }
    }
}

#[test]
fn test_single_bit_array_maps_to_zero() {
    for data in elements() {
        for k in COUNTS {
            assert_eq!(
                all_locations(&Murmur3Split::default(), &data, k, 1),
                vec![0; k as usize]
            );
        }
    }
}

#[test]
fn test_no_locations_for_zero_k() {
    assert_eq!(locations(BaseHashes::Pair([7, 9]), 0, 64).count(), 0);
    assert_eq!(locations(BaseHashes::Quad([7, 9, 11, 13]), 0, 64).count(), 0);
}

#[test]
fn test_duplicates_are_tolerated() {
    // h1 = 0 collapses every location onto h0
    let locs: Vec<u64> = locations(BaseHashes::Pair([42, 0]), 5, 100).collect();
    assert_eq!(locs, vec![42; 5]);

    // h1 a multiple of m does the same
    let locs: Vec<u64> = locations(BaseHashes::Pair([3, 16]), 4, 8).collect();
    assert_eq!(locs, vec![3; 4]);
}

#[test]
fn test_full_width_multiplier() {
    // i * h1 must not be truncated to 32 bits before reduction
    let h1 = 1u64 << 40;
    let locs: Vec<u64> = locations(BaseHashes::Pair([0, h1]), 3, 1_000_003).collect();
    assert_eq!(locs, vec![0, h1 % 1_000_003, (2 * h1) % 1_000_003]);
}
