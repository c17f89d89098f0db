//! Command Module
//!
//! The closed set of cache operations a record can select.

use std::fmt;

use crate::error::BufferError;

// == Command ==
/// Operation selector stored in the first byte of every record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Command {
    /// Store an entry (`'I'`)
    Insert = b'I',
    /// Look up an entry (`'G'`)
    Get = b'G',
    /// Drop an entry (`'R'`)
    Remove = b'R',
    /// Purge expired entries (`'H'`)
    Cleanup = b'H',
}

impl Command {
    /// Every command.
    pub const ALL: [Command; 4] = [
        Command::Insert,
        Command::Get,
        Command::Remove,
        Command::Cleanup,
    ];

    /// Commands written by the default fixture, in order.
    pub const SCENARIO: [Command; 3] = [Command::Insert, Command::Get, Command::Remove];

    /// Returns the wire byte.
    pub fn as_byte(self) -> u8 {
        self as u8
    }

    /// Returns a lowercase name for logs and reports.
    pub fn name(self) -> &'static str {
        match self {
            Command::Insert => "insert",
            Command::Get => "get",
            Command::Remove => "remove",
            Command::Cleanup => "cleanup",
        }
    }
}

impl TryFrom<u8> for Command {
    type Error = BufferError;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        match byte {
            b'I' => Ok(Command::Insert),
            b'G' => Ok(Command::Get),
            b'R' => Ok(Command::Remove),
            b'H' => Ok(Command::Cleanup),
            other => Err(BufferError::UnknownCommand(other)),
        }
    }
}

impl From<Command> for u8 {
    fn from(command: Command) -> Self {
        command.as_byte()
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
