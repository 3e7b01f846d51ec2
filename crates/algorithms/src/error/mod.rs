//! Error handling for extension-field point arithmetic

use core::fmt;

/// The error type for extension-field point operations.
///
/// Every variant is a caller contract violation: none of these occur at
/// runtime for correctly constructed inputs, and none is worth retrying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A point breached its representation invariant, e.g. a finite point
    /// carrying a zero z coordinate.
    InvalidPointState {
        /// Operation that observed the breach
        context: &'static str,
        /// What was wrong with the representation
        details: &'static str,
    },

    /// A coordinate-system tag with no defined conversion.
    UnsupportedCoordinateSystem {
        /// The unrecognized tag value
        tag: u8,
    },

    /// Inversion, single or simultaneous, attempted on an exact zero.
    ZeroInversion {
        /// Operation in which the zero was encountered
        context: &'static str,
    },

    /// A caller-supplied argument outside the accepted domain.
    InvalidArgument {
        /// Name of the offending argument
        name: &'static str,
        /// Why the value is not acceptable
        reason: &'static str,
    },
}

/// Result type for extension-field point operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidPointState { context, details } => {
                write!(f, "Invalid point state in {}: {}", context, details)
            }
            Error::UnsupportedCoordinateSystem { tag } => {
                write!(f, "Unsupported coordinate system tag {}", tag)
            }
            Error::ZeroInversion { context } => {
                write!(f, "Inversion of zero in {}", context)
            }
            Error::InvalidArgument { name, reason } => {
                write!(f, "Invalid argument '{}': {}", name, reason)
            }
        }
    }
}

impl std::error::Error for Error {}

// Include the validation submodule
pub mod validate;

#[cfg(test)]
mod tests;
