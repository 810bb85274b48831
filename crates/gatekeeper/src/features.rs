//! Feature toggles loaded once at startup. Flags are read from a compact
//! `key=value,key=value` string so a static deployment can switch site
//! sections on or off without a rebuild of the gating logic.

use crate::{Error, Result};
use std::{fmt, str::FromStr};
use tracing::warn;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FeatureFlag {
    Rsvp,
    Gallery,
    Registry,
    CoupleArea,
}

impl FeatureFlag {
    pub const ALL: [FeatureFlag; 4] = [
        FeatureFlag::Rsvp,
        FeatureFlag::Gallery,
        FeatureFlag::Registry,
        FeatureFlag::CoupleArea,
    ];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            FeatureFlag::Rsvp => "rsvp",
            FeatureFlag::Gallery => "gallery",
            FeatureFlag::Registry => "registry",
            FeatureFlag::CoupleArea => "couple-area",
        }
    }
}

impl fmt::Display for FeatureFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FeatureFlag {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|flag| flag.key() == normalized)
            .ok_or_else(|| Error::UnknownFlag(value.trim().to_string()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureFlags {
    pub rsvp: bool,
    pub gallery: bool,
    pub registry: bool,
    pub couple_area: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            rsvp: true,
            gallery: true,
            registry: true,
            couple_area: false,
        }
    }
}

impl FeatureFlags {
    /// Parses a flag string on top of the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFlagValue`] when a recognized flag carries a value
    /// that is not a boolean. Unknown flags are skipped with a warning.
    pub fn parse(input: &str) -> Result<Self> {
        let mut flags = Self::default();
        flags.apply(input)?;
        Ok(flags)
    }

    /// Applies a flag string over the current values. On error `self` is left
    /// unchanged.
    ///
    /// # Errors
    ///
    /// See [`FeatureFlags::parse`].
    pub fn apply(&mut self, input: &str) -> Result<()> {
        let mut next = *self;
        for entry in input.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (key, value) = match entry.split_once('=') {
                Some((key, value)) => (key.trim(), Some(value.trim())),
                None => (entry, None),
            };
            let flag = match key.parse::<FeatureFlag>() {
                Ok(flag) => flag,
                Err(err) => {
                    warn!(%err, "ignoring feature flag");
                    continue;
                }
            };
            let enabled = match value {
                None => true,
                Some(raw) => parse_bool(raw).ok_or_else(|| Error::InvalidFlagValue {
                    flag: flag.key().to_string(),
                    value: raw.to_string(),
                })?,
            };
            next.set(flag, enabled);
        }
        *self = next;
        Ok(())
    }

    #[must_use]
    pub const fn is_enabled(&self, flag: FeatureFlag) -> bool {
        match flag {
            FeatureFlag::Rsvp => self.rsvp,
            FeatureFlag::Gallery => self.gallery,
            FeatureFlag::Registry => self.registry,
            FeatureFlag::CoupleArea => self.couple_area,
        }
    }

    pub fn set(&mut self, flag: FeatureFlag, enabled: bool) {
        match flag {
            FeatureFlag::Rsvp => self.rsvp = enabled,
            FeatureFlag::Gallery => self.gallery = enabled,
            FeatureFlag::Registry => self.registry = enabled,
            FeatureFlag::CoupleArea => self.couple_area = enabled,
        }
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "on" | "true" | "1" | "yes" => Some(true),
        "off" | "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
