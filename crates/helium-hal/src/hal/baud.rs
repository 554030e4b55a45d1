// Copyright 2025 Helium Client Contributors
// SPDX-License-Identifier: Apache-2.0

use core::fmt;

/// Nominal line speeds a Helium Atom can be driven at
///
/// `B14400` is a legacy selector: POSIX termios has no 14400 line speed, so
/// platforms run the line at the next faster rate (see [`BaudRate::effective`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BaudRate {
    B9600,
    B14400,
    B19200,
    B38400,
    B57600,
    B115200,
}

impl BaudRate {
    /// All selectors, slowest first
    pub const ALL: [BaudRate; 6] = [
        BaudRate::B9600,
        BaudRate::B14400,
        BaudRate::B19200,
        BaudRate::B38400,
        BaudRate::B57600,
        BaudRate::B115200,
    ];

    /// Requested rate in bits per second
    pub const fn nominal(self) -> u32 {
        match self {
            BaudRate::B9600 => 9_600,
            BaudRate::B14400 => 14_400,
            BaudRate::B19200 => 19_200,
            BaudRate::B38400 => 38_400,
            BaudRate::B57600 => 57_600,
            BaudRate::B115200 => 115_200,
        }
    }

    /// Rate the line actually runs at
    ///
    /// Identity for every selector except `B14400`, which degrades to
    /// `B19200` instead of failing.
    pub const fn effective(self) -> BaudRate {
        match self {
            BaudRate::B14400 => BaudRate::B19200,
            other => other,
        }
    }

    /// Smallest selector at or above `rate`
    ///
    /// Returns `None` for a zero rate or anything faster than 115200.
    pub fn round_up(rate: u32) -> Option<BaudRate> {
        if rate == 0 {
            return None;
        }
        Self::ALL.into_iter().find(|baud| baud.nominal() >= rate)
    }
}

impl fmt::Display for BaudRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.nominal())
    }
}

/// Error for a numeric rate that is not one of the nominal selectors
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported baud rate: {0}")]
pub struct UnsupportedBaudRate(pub u32);

impl TryFrom<u32> for BaudRate {
    type Error = UnsupportedBaudRate;

    fn try_from(rate: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|baud| baud.nominal() == rate)
            .ok_or(UnsupportedBaudRate(rate))
    }
}

impl From<BaudRate> for u32 {
    fn from(baud: BaudRate) -> Self {
        baud.nominal()
    }
}
