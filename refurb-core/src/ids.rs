//! Identifier allocation
//!
//! Assets and jobs carry human-readable ids of the form `<Prefix>-<N>`.
//! An [`IdAllocator`] hands them out in strictly increasing order and is
//! reseeded from persisted history on startup so numbers are never reissued
//! across restarts.

use crate::error::{CoreError, Result};

/// Prefix used for asset ids
pub const ASSET_PREFIX: &str = "Asset";

/// Prefix used for job ids
pub const JOB_PREFIX: &str = "JOB";

/// Issues `<prefix>-<N>` identifiers with `N` increasing by one per call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdAllocator {
    prefix: &'static str,
    next: u64,
}

impl IdAllocator {
    /// Creates an allocator starting at 1
    pub fn new(prefix: &'static str) -> Self {
        Self { prefix, next: 1 }
    }

    /// Allocator for asset ids (`Asset-<N>`)
    pub fn assets() -> Self {
        Self::new(ASSET_PREFIX)
    }

    /// Allocator for job ids (`JOB-<N>`)
    pub fn jobs() -> Self {
        Self::new(JOB_PREFIX)
    }

    pub fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// The number the next call to [`next_id`](Self::next_id) will use
    pub fn peek(&self) -> u64 {
        self.next
    }

    /// Returns the next identifier and advances the counter
    ///
    /// Fails with [`CoreError::InvalidState`] once the counter has no
    /// successor left, so an id is never handed out twice.
    pub fn next_id(&mut self) -> Result<String> {
        let following = self.next.checked_add(1).ok_or_else(|| {
            CoreError::InvalidState(format!("{} identifiers exhausted", self.prefix))
        })?;
        let id = format_id(self.prefix, self.next);
        self.next = following;
        Ok(id)
    }

    /// Moves the counter strictly above every id in `existing`
    ///
    /// The counter never moves backwards. Any id that does not parse as
    /// `<prefix>-<integer>` aborts the reseed with [`CoreError::CorruptId`]
    /// and leaves the allocator untouched.
    pub fn reseed<'a, I>(&mut self, existing: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut highest: Option<(u64, &str)> = None;
        for id in existing {
            let number = parse_id(self.prefix, id)?;
            if highest.is_none_or(|(max, _)| number > max) {
                highest = Some((number, id));
            }
        }

        if let Some((number, id)) = highest {
            let following = number.checked_add(1).ok_or_else(|| CoreError::CorruptId {
                prefix: self.prefix.to_string(),
                id: id.to_string(),
            })?;
            self.next = self.next.max(following);
        }
        Ok(())
    }
}

/// Formats an identifier as `<prefix>-<number>`
pub fn format_id(prefix: &str, number: u64) -> String {
    format!("{}-{}", prefix, number)
}

/// Extracts the numeric suffix of a `<prefix>-<number>` identifier
pub fn parse_id(prefix: &str, id: &str) -> Result<u64> {
    id.strip_prefix(prefix)
        .and_then(|rest| rest.strip_prefix('-'))
        .filter(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|digits| digits.parse::<u64>().ok())
        .ok_or_else(|| CoreError::CorruptId {
            prefix: prefix.to_string(),
            id: id.to_string(),
        })
}
