//! Errors used by the [`Board`][crate::board::Board].

use thiserror::Error;

use crate::board::LineId;

/// Reason why a particular line could not be claimed.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotClaimReason {
    /// The id did not refer to a line of this board.
    #[error("the id does not refer to a line of this board")]
    UnknownLine,

    /// The line was already claimed by a player. Line ownership is
    /// write-once; the first claim stands.
    #[error("the line was already claimed")]
    AlreadyClaimed,
}

/// Error returned when trying to claim a line.
#[derive(Debug, Error)]
#[error("could not claim line {line:?}: {reason:?}")]
pub struct ClaimError {
    /// Reason why the line could not be claimed.
    #[source]
    reason: CannotClaimReason,

    /// The line that could not be claimed.
    line: LineId,
}

impl ClaimError {
    /// Construct a claim error with the given reason for the specified line.
    pub(super) fn new(reason: CannotClaimReason, line: LineId) -> Self {
        Self { reason, line }
    }

    /// Get the reason the claim failed.
    pub fn reason(&self) -> CannotClaimReason {
        self.reason
    }

    /// Get the id of the line that could not be claimed.
    pub fn line(&self) -> LineId {
        self.line
    }
}
