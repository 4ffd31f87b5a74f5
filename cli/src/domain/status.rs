//! Machine lifecycle states and the `vagrant status` output parser.
//!
//! The parser is a three-state line scanner: find the header, skip the blank
//! separator, then read `<name> <state>[ (<provider>)]` entries until the
//! next blank line or end of input.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Serialize, Serializer};

use crate::domain::error::StatusParseError;

/// Lifecycle state reported by `vagrant status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MachineState {
    /// `vagrant up`
    Running,
    /// `vagrant destroy`, or never brought up
    NotCreated,
    /// `vagrant halt`
    PowerOff,
    /// The provider aborted the machine.
    Aborted,
    /// `vagrant suspend`
    Saved,
}

impl MachineState {
    pub const ALL: [Self; 5] = [
        Self::Running,
        Self::NotCreated,
        Self::PowerOff,
        Self::Aborted,
        Self::Saved,
    ];

    /// The literal Vagrant prints for this state.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::NotCreated => "not created",
            Self::PowerOff => "poweroff",
            Self::Aborted => "aborted",
            Self::Saved => "saved",
        }
    }

    #[must_use]
    pub fn from_literal(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|state| state.as_str() == s)
    }
}

impl fmt::Display for MachineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for MachineState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Machine name → lifecycle state, as parsed from one `vagrant status` run.
pub type MachineStatus = BTreeMap<String, MachineState>;

static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^Current (VM|machine) states:").expect("valid regex")
});

static PROVIDER_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^\s*(?P<value>.+?)\s+\((?P<provider>[^)]+)\)\s*$").expect("valid regex")
});

static ENTRY_RE: LazyLock<Regex> = LazyLock::new(|| {
    let states = MachineState::ALL.map(MachineState::as_str).join("|");
    #[allow(clippy::expect_used)]
    Regex::new(&format!(r"^(?P<name>.*?)\s+(?P<state>{states})$")).expect("valid regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Header,
    Separator,
    Entries,
}

/// Split a trailing ` (provider)` annotation off an entry line.
///
/// Returns the trimmed line and `None` when there is no annotation.
#[must_use]
pub fn split_provider(line: &str) -> (&str, Option<&str>) {
    match PROVIDER_RE.captures(line) {
        Some(caps) => match (caps.name("value"), caps.name("provider")) {
            (Some(value), Some(provider)) => (value.as_str(), Some(provider.as_str())),
            _ => (line.trim(), None),
        },
        None => (line.trim(), None),
    }
}

/// Parse captured `vagrant status` output.
///
/// Output without a `Current machine states:` header yields an empty map.
///
/// # Errors
///
/// Returns [`StatusParseError`] with the offending line when an entry does not
/// end in a known state literal. Entries parsed before it are discarded.
pub fn parse_status<S: AsRef<str>>(lines: &[S]) -> Result<MachineStatus, StatusParseError> {
    let mut state = ScanState::Header;
    let mut statuses = MachineStatus::new();

    for line in lines {
        let line = line.as_ref();
        let blank = line.trim().is_empty();
        match state {
            ScanState::Header => {
                if HEADER_RE.is_match(line.trim()) {
                    state = ScanState::Separator;
                }
            }
            ScanState::Separator => {
                if blank {
                    state = ScanState::Entries;
                }
            }
            ScanState::Entries => {
                if blank {
                    break;
                }
                let (entry, _provider) = split_provider(line);
                let parsed = ENTRY_RE.captures(entry).and_then(|caps| {
                    let name = caps.name("name")?.as_str();
                    let machine_state = MachineState::from_literal(caps.name("state")?.as_str())?;
                    Some((name.to_string(), machine_state))
                });
                match parsed {
                    Some((name, machine_state)) => {
                        statuses.insert(name, machine_state);
                    }
                    None => {
                        return Err(StatusParseError {
                            line: line.to_string(),
                        });
                    }
                }
            }
        }
    }

    Ok(statuses)
}
