// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::sync::Arc;

use dashmap::DashMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("An error occurred while trying to create regex from `{pattern}`: {message}")]
pub struct InvalidRegexError {
    pub pattern: String,
    pub message: String,
}

/// Compiled regexes keyed by their source. Most countries share one of a
/// handful of `^\d{n}$` patterns, so every distinct pattern is compiled once.
pub struct RegexCache {
    cache: DashMap<String, Arc<regex::Regex>>
}

impl RegexCache {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: DashMap::with_capacity(capacity),
        }
    }

    pub fn get_regex(&self, pattern: &str) -> Result<Arc<regex::Regex>, InvalidRegexError> {
        if let Some(regex) = self.cache.get(pattern) {
            Ok(regex.value().clone())
        } else {
            let entry = self.cache.entry(pattern.to_string()).or_try_insert_with(|| {
                regex::Regex::new(pattern)
                    .map(Arc::new)
                    .map_err(|err| InvalidRegexError {
                        pattern: pattern.to_string(),
                        message: err.to_string(),
                    })
            })?;
            Ok(entry.value().clone())
        }
    }

    /// Regex that only matches when the whole input matches `pattern`.
    /// Cached separately from the plain pattern under its anchored form.
    pub fn get_full_match_regex(&self, pattern: &str) -> Result<Arc<regex::Regex>, InvalidRegexError> {
        let anchored = fast_cat::concat_str!("^(?:", pattern, ")$");
        self.get_regex(&anchored).map_err(|err| InvalidRegexError {
            pattern: pattern.to_string(),
            message: err.message,
        })
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.cache.len()
    }
}
