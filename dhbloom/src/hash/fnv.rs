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

//! 64-bit Fowler-Noll-Vo hashes.
//!
//! Only the legacy 32-bit-halves strategies use these; a 64-bit digest cannot be split into two
//! full-width words, which is what makes those strategies unsuitable for production.

const OFFSET_BASIS: u64 = 0xcbf29ce484222325;
const PRIME: u64 = 0x100000001b3;

/// FNV-1: multiply, then xor each byte.
pub(crate) fn fnv1_64(data: &[u8]) -> u64 {
    data.iter()
        .fold(OFFSET_BASIS, |h, &b| h.wrapping_mul(PRIME) ^ u64::from(b))
}

/// FNV-1a: xor each byte, then multiply.
pub(crate) fn fnv1a_64(data: &[u8]) -> u64 {
    data.iter()
        .fold(OFFSET_BASIS, |h, &b| (h ^ u64::from(b)).wrapping_mul(PRIME))
}
