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

//! Non-cryptographic hash functions backing the base hash strategies.
//!
//! Everything here is a pure function of its input bytes (and an explicit seed, where one
//! exists). None of these are exposed publicly; callers pick a hash through
//! [`BaseHasher`](crate::bloom::BaseHasher) strategies instead.

mod fnv;
mod murmurhash;

pub(crate) use self::fnv::fnv1_64;
pub(crate) use self::fnv::fnv1a_64;
pub(crate) use self::murmurhash::murmur3_x64_128;
pub(crate) use self::murmurhash::murmur3_x64_128_extended;
