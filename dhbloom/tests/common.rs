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
use dhbloom::bloom::locations;

/// Two-sided 0.001 acceptance band of the chi-squared distribution, as `(lower, upper)`.
///
/// A statistic below `lower` means the histogram is implausibly even for random placement; one
/// above `upper` means it is skewed.
#[allow(dead_code)] // false-positive
pub fn chi_squared_band(degrees_of_freedom: u64) -> (f64, f64) {
    match degrees_of_freedom {
        7 => (0.5985, 24.3219),
        11 => (1.8339, 31.2641),
        _ => panic!("no critical values tabulated for {degrees_of_freedom} degrees of freedom"),
    }
}

/// Upper 0.05 critical value of the chi-squared distribution.
#[allow(dead_code)] // false-positive
pub fn chi_squared_critical_5_percent(degrees_of_freedom: u64) -> f64 {
    match degrees_of_freedom {
        7 => 14.0671,
        11 => 19.6751,
        _ => panic!("no critical values tabulated for {degrees_of_freedom} degrees of freedom"),
    }
}

/// Feeds the 4-byte little-endian counters `0..rounds` through `hasher` and counts how often
/// each of the `m` locations is chosen.
#[allow(dead_code)] // false-positive
pub fn location_histogram<H: BaseHasher>(hasher: &H, m: u64, k: u32, rounds: u32) -> Vec<u64> {
    let mut histogram = vec![0u64; m as usize];
    for x in 0..rounds {
        for loc in locations(hasher.base_hashes(&x.to_le_bytes()), k, m) {
            histogram[loc as usize] += 1;
        }
    }
    histogram
}

/// Pearson's chi-squared statistic of `histogram` against a uniform expectation.
#[allow(dead_code)] // false-positive
pub fn chi_squared(histogram: &[u64]) -> f64 {
    let total: u64 = histogram.iter().sum();
    let expected = total as f64 / histogram.len() as f64;
    histogram
        .iter()
        .map(|&observed| {
            let diff = observed as f64 - expected;
            diff * diff / expected
        })
        .sum()
}
