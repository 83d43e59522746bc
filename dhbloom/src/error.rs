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

//! Error types for filter construction.
//!
//! Hashing and location assignment are total functions; the only fallible step in this crate is
//! turning a [`BloomFilterBuilder`](crate::bloom::BloomFilterBuilder) into a filter.

use std::fmt;

/// ErrorKind is all kinds of Error of dhbloom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A construction parameter is zero, out of range, or not a number.
    InvalidArgument,
}

impl ErrorKind {
    /// Convert this error kind instance into static str.
    pub const fn into_static(self) -> &'static str {
        match self {
            ErrorKind::InvalidArgument => "InvalidArgument",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.into_static())
    }
}

/// Error is the error struct returned by all fallible dhbloom functions.
///
/// # Examples
///
/// ```
/// # use dhbloom::error::Error;
/// # use dhbloom::error::ErrorKind;
/// let err = Error::new(ErrorKind::InvalidArgument, "num_hashes must be at least 1")
///     .with_context("num_hashes", 0);
/// assert_eq!(err.kind(), ErrorKind::InvalidArgument);
/// assert_eq!(err.context("num_hashes"), Some("0"));
/// ```
pub struct Error {
    kind: ErrorKind,
    message: String,
    context: Vec<(&'static str, String)>,
}

impl Error {
    /// Create a new Error with error kind and message.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            context: vec![],
        }
    }

    /// Add more context in error.
    pub fn with_context(mut self, key: &'static str, value: impl ToString) -> Self {
        self.context.push((key, value.to_string()));
        self
    }

    /// Return error's kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Return error's message.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Return the first context value recorded under `key`, if any.
    pub fn context(&self, key: &str) -> Option<&str> {
        self.context
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    fn write_context(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries = self.context.iter();
        if let Some((k, v)) = entries.next() {
            write!(f, "{k}: {v}")?;
            for (k, v) in entries {
                write!(f, ", {k}: {v}")?;
            }
        }
        Ok(())
    }
}

// Constructors for the builder's parameter checks.
impl Error {
    pub(crate) fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument, msg)
    }

    pub(crate) fn zero_parameter(name: &'static str) -> Self {
        Self::invalid_argument(format!("{name} must be at least 1")).with_context(name, 0)
    }

    pub(crate) fn parameter_too_large(name: &'static str, value: u64, max: u64) -> Self {
        Self::invalid_argument(format!("{name} must not exceed {max}")).with_context(name, value)
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            return f
                .debug_struct("Error")
                .field("kind", &self.kind)
                .field("message", &self.message)
                .field("context", &self.context)
                .finish();
        }

        write!(f, "{}", self.kind)?;
        if !self.message.is_empty() {
            write!(f, " => {}", self.message)?;
        }
        if !self.context.is_empty() {
            writeln!(f)?;
            writeln!(f)?;
            writeln!(f, "Context:")?;
            for (k, v) in &self.context {
                writeln!(f, "   {k}: {v}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if !self.context.is_empty() {
            f.write_str(", context: { ")?;
            self.write_context(f)?;
            f.write_str(" }")?;
        }
        if !self.message.is_empty() {
            write!(f, " => {}", self.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}
