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

use byteorder::ByteOrder;
use byteorder::LE;

const C1: u64 = 0x87c37b91114253d5;
const C2: u64 = 0x4cf5ad432745937f;
const BLOCK_LEN: usize = 16;

/// Running MurmurHash3 x64/128 state over whole 16-byte blocks.
#[derive(Debug, Clone, Copy)]
struct State {
    h1: u64,
    h2: u64,
}

impl State {
    fn new(seed: u64) -> Self {
        State { h1: seed, h2: seed }
    }

    /// Absorbs every whole block of `data` and returns the unconsumed tail (< 16 bytes).
    fn absorb<'a>(&mut self, data: &'a [u8]) -> &'a [u8] {
        let mut blocks = data.chunks_exact(BLOCK_LEN);
        for block in &mut blocks {
            self.mix_block(block);
        }
        blocks.remainder()
    }

    #[inline]
    fn mix_block(&mut self, block: &[u8]) {
        let k1 = LE::read_u64(&block[..8]);
        let k2 = LE::read_u64(&block[8..BLOCK_LEN]);

        self.h1 ^= mix_k1(k1);
        self.h1 = self
            .h1
            .rotate_left(27)
            .wrapping_add(self.h2)
            .wrapping_mul(5)
            .wrapping_add(0x52dce729);

        self.h2 ^= mix_k2(k2);
        self.h2 = self
            .h2
            .rotate_left(31)
            .wrapping_add(self.h1)
            .wrapping_mul(5)
            .wrapping_add(0x38495ab5);
    }

    /// Folds in the tail and the total input length, consuming the state.
    fn finish(mut self, tail: &[u8], total_len: u64) -> (u64, u64) {
        debug_assert!(tail.len() < BLOCK_LEN);

        if tail.len() > 8 {
            self.h2 ^= mix_k2(read_partial_u64(&tail[8..]));
        }
        if !tail.is_empty() {
            self.h1 ^= mix_k1(read_partial_u64(&tail[..tail.len().min(8)]));
        }

        let mut h1 = self.h1 ^ total_len;
        let mut h2 = self.h2 ^ total_len;
        h1 = h1.wrapping_add(h2);
        h2 = h2.wrapping_add(h1);
        h1 = fmix64(h1);
        h2 = fmix64(h2);
        h1 = h1.wrapping_add(h2);
        h2 = h2.wrapping_add(h1);
        (h1, h2)
    }
}

#[inline]
fn mix_k1(k1: u64) -> u64 {
    k1.wrapping_mul(C1).rotate_left(31).wrapping_mul(C2)
}

#[inline]
fn mix_k2(k2: u64) -> u64 {
    k2.wrapping_mul(C2).rotate_left(33).wrapping_mul(C1)
}

/// Reads up to 8 bytes as a little-endian integer, zero-padding the high bytes.
#[inline]
fn read_partial_u64(bytes: &[u8]) -> u64 {
    let mut buf = [0u8; 8];
    buf[..bytes.len()].copy_from_slice(bytes);
    LE::read_u64(&buf)
}

/// Finalization mix: force all bits of a hash block to avalanche.
#[inline]
fn fmix64(mut k: u64) -> u64 {
    k ^= k >> 33;
    k = k.wrapping_mul(0xff51afd7ed558ccd);
    k ^= k >> 33;
    k = k.wrapping_mul(0xc4ceb9fe1a85ec53);
    k ^ (k >> 33)
}

/// MurmurHash3 x64/128 of `data`, returned as its two 64-bit halves.
pub(crate) fn murmur3_x64_128(data: &[u8], seed: u64) -> (u64, u64) {
    let mut state = State::new(seed);
    let tail = state.absorb(data);
    state.finish(tail, data.len() as u64)
}

/// Hashes both `data` and `data ‖ suffix`, walking the body of `data` only once.
///
/// Equivalent to writing `data` into a streaming hasher, taking a digest, then writing the
/// single `suffix` byte and taking a second digest.
pub(crate) fn murmur3_x64_128_extended(
    data: &[u8],
    suffix: u8,
    seed: u64,
) -> ((u64, u64), (u64, u64)) {
    let mut state = State::new(seed);
    let tail = state.absorb(data);
    let total_len = data.len() as u64;
    let plain = state.finish(tail, total_len);

    let mut buf = [0u8; BLOCK_LEN];
    buf[..tail.len()].copy_from_slice(tail);
    buf[tail.len()] = suffix;
    let extended_tail_len = tail.len() + 1;

    let extended = if extended_tail_len == BLOCK_LEN {
        state.mix_block(&buf);
        state.finish(&[], total_len + 1)
    } else {
        state.finish(&buf[..extended_tail_len], total_len + 1)
    };
    (plain, extended)
}
