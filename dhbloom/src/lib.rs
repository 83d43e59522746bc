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

//! # dhbloom
//!
//! A Bloom filter whose `k` bit locations per element are derived from a single 128-bit hash
//! evaluation, split into two 64-bit words and combined by Kirsch-Mitzenmacher double hashing.
//!
//! The [`bloom`] module holds the filter types, the pluggable base hash strategies and the
//! location assignor. Errors surface only at construction time, see [`error`].
//!
//! ```rust
//! use dhbloom::bloom::BloomFilterBuilder;
//!
//! let mut filter = BloomFilterBuilder::with_accuracy(1000, 0.01).build().unwrap();
//! filter.insert(b"apple");
//! assert!(filter.contains(b"apple"));
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]

pub mod bloom;
pub mod error;

mod hash;
