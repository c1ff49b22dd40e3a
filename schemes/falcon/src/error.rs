//! Error types for Falcon.
//!
//! Expected rejections inside the key generation and signing loops
//! (a candidate (f, g) without an NTRU solution, a signature vector that
//! is too long) are not errors: those loops simply try again. The
//! variants here cover what reaches the caller: malformed inputs, bad
//! parameters, and internal invariant violations.

use std::fmt;

/// Specific reasons why signature verification failed.
///
/// Only [`crate::verify::verify_detailed`] exposes this; [`crate::verify::verify`]
/// collapses every failure into `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationFailure {
    /// The public key bytes are malformed (bad header, length or coefficient).
    MalformedPublicKey,
    /// The signature bytes are malformed (bad header, length or encoding).
    MalformedSignature,
    /// The public key and signature use different degrees.
    DegreeMismatch,
    /// The aggregate vector (s1, s2) exceeds the L2-norm bound.
    NormBoundExceeded,
}

impl fmt::Display for VerificationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerificationFailure::MalformedPublicKey => write!(f, "malformed public key"),
            VerificationFailure::MalformedSignature => write!(f, "malformed signature"),
            VerificationFailure::DegreeMismatch => write!(f, "degree mismatch"),
            VerificationFailure::NormBoundExceeded => write!(f, "signature norm exceeded"),
        }
    }
}

/// Errors that can occur during Falcon operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FalconError {
    /// Signature verification failed with a specific reason.
    VerificationFailed(VerificationFailure),

    /// The provided key is invalid.
    InvalidKey {
        /// Description of why the key is invalid.
        reason: &'static str,
    },

    /// The parameters are invalid.
    InvalidParams {
        /// Description of why the parameters are invalid.
        reason: &'static str,
    },

    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: &'static str,
        /// Description of why the input is invalid.
        reason: &'static str,
    },

    /// Error decoding data.
    DecodingError {
        /// Context about what was being decoded.
        context: &'static str,
    },

    /// An internal invariant was violated.
    ///
    /// This signals a defect (for instance an encoded key whose length
    /// does not match the parameter tables) and is never part of normal
    /// control flow.
    Internal {
        /// Which invariant broke.
        context: &'static str,
    },
}

impl fmt::Display for FalconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FalconError::VerificationFailed(reason) => {
                write!(f, "signature verification failed: {}", reason)
            }
            FalconError::InvalidKey { reason } => write!(f, "invalid key: {}", reason),
            FalconError::InvalidParams { reason } => write!(f, "invalid parameters: {}", reason),
            FalconError::InvalidInput { field, reason } => {
                write!(f, "invalid {}: {}", field, reason)
            }
            FalconError::DecodingError { context } => write!(f, "decoding error: {}", context),
            FalconError::Internal { context } => {
                write!(f, "internal invariant violated: {}", context)
            }
        }
    }
}

impl std::error::Error for FalconError {}

/// Result type alias for Falcon operations.
pub type Result<T> = std::result::Result<T, FalconError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            format!("{}", FalconError::InvalidKey { reason: "corrupt" }),
            "invalid key: corrupt"
        );
        assert_eq!(
            format!("{}", FalconError::DecodingError { context: "public key header" }),
            "decoding error: public key header"
        );
        assert_eq!(
            format!(
                "{}",
                FalconError::VerificationFailed(VerificationFailure::NormBoundExceeded)
            ),
            "signature verification failed: signature norm exceeded"
        );
        assert_eq!(
            format!("{}", FalconError::InvalidInput { field: "seed", reason: "too short" }),
            "invalid seed: too short"
        );
    }

    #[test]
    fn test_error_is_error_trait() {
        let err: Box<dyn std::error::Error> =
            Box::new(FalconError::Internal { context: "secret key length" });
        assert!(err.to_string().contains("secret key length"));
    }
}
