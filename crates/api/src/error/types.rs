//! Error type definitions for ring-signature operations

#[cfg(feature = "std")]
use std::string::String;

/// Primary error type for ring-signature operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Key material that does not parse as a valid SSH key
    MalformedKey {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Key or signature algorithm this library does not handle
    UnsupportedAlgorithm {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// An encrypted private key was supplied without a passphrase
    PassphraseRequired {
        context: &'static str,
    },

    /// The supplied passphrase does not decrypt the private key
    WrongPassphrase {
        context: &'static str,
    },

    /// Private key material that fails internal consistency checks
    InvalidPrivateKey {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Ring smaller than the configured minimum anonymity set
    InsufficientRingSize {
        context: &'static str,
        minimum: usize,
        actual: usize,
    },

    /// Ring larger than the configured maximum
    RingTooLarge {
        context: &'static str,
        maximum: usize,
        actual: usize,
    },

    /// The signer's own public key is absent from the candidate set
    SelfKeyMissing {
        context: &'static str,
    },

    /// Candidate keys mix more than one algorithm
    MixedAlgorithms {
        context: &'static str,
    },

    /// The signing key's public half is not a member of the ring
    KeyNotInRing {
        context: &'static str,
    },

    /// Transport bytes that do not decode as a ring signature
    MalformedSignature {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// A structurally sound signature that fails cryptographic checks
    InvalidSignature {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// A signature encoded with a format version this build does not know
    UnsupportedVersion {
        context: &'static str,
        version: u8,
    },

    /// Invalid length error with context
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Other error
    Other {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },
}

/// Result type for ring-signature operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Add context to an existing error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::MalformedKey { .. } => Self::MalformedKey {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
            Self::UnsupportedAlgorithm { .. } => Self::UnsupportedAlgorithm {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
            Self::PassphraseRequired { .. } => Self::PassphraseRequired { context },
            Self::WrongPassphrase { .. } => Self::WrongPassphrase { context },
            Self::InvalidPrivateKey { .. } => Self::InvalidPrivateKey {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
            Self::InsufficientRingSize { minimum, actual, .. } => Self::InsufficientRingSize {
                context,
                minimum,
                actual,
            },
            Self::RingTooLarge { maximum, actual, .. } => Self::RingTooLarge {
                context,
                maximum,
                actual,
            },
            Self::SelfKeyMissing { .. } => Self::SelfKeyMissing { context },
            Self::MixedAlgorithms { .. } => Self::MixedAlgorithms { context },
            Self::KeyNotInRing { .. } => Self::KeyNotInRing { context },
            Self::MalformedSignature { .. } => Self::MalformedSignature {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
            Self::InvalidSignature { .. } => Self::InvalidSignature {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
            Self::UnsupportedVersion { version, .. } => Self::UnsupportedVersion {
                context,
                version,
            },
            Self::InvalidLength { expected, actual, .. } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::Other { .. } => Self::Other {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
        }
    }

    /// Add a message to an existing error (when std is available)
    #[cfg(feature = "std")]
    pub fn with_message(self, message: impl Into<String>) -> Self {
        let message = message.into();
        match self {
            Self::MalformedKey { context, .. } => Self::MalformedKey { context, message },
            Self::UnsupportedAlgorithm { context, .. } => {
                Self::UnsupportedAlgorithm { context, message }
            }
            Self::InvalidPrivateKey { context, .. } => {
                Self::InvalidPrivateKey { context, message }
            }
            Self::MalformedSignature { context, .. } => {
                Self::MalformedSignature { context, message }
            }
            Self::InvalidSignature { context, .. } => {
                Self::InvalidSignature { context, message }
            }
            Self::Other { context, .. } => Self::Other { context, message },
            other => other,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            #[cfg(feature = "std")]
            Self::MalformedKey { context, message } if !message.is_empty() => {
                write!(f, "Malformed key: {}: {}", context, message)
            }
            Self::MalformedKey { context, .. } => {
                write!(f, "Malformed key: {}", context)
            }
            #[cfg(feature = "std")]
            Self::UnsupportedAlgorithm { context, message } if !message.is_empty() => {
                write!(f, "Unsupported algorithm: {}: {}", context, message)
            }
            Self::UnsupportedAlgorithm { context, .. } => {
                write!(f, "Unsupported algorithm: {}", context)
            }
            Self::PassphraseRequired { context } => {
                write!(f, "Passphrase required: {}", context)
            }
            Self::WrongPassphrase { context } => {
                write!(f, "Wrong passphrase: {}", context)
            }
            #[cfg(feature = "std")]
            Self::InvalidPrivateKey { context, message } if !message.is_empty() => {
                write!(f, "Invalid private key: {}: {}", context, message)
            }
            Self::InvalidPrivateKey { context, .. } => {
                write!(f, "Invalid private key: {}", context)
            }
            Self::InsufficientRingSize { context, minimum, actual } => {
                write!(
                    f,
                    "{}: ring of {} below minimum anonymity set of {}",
                    context, actual, minimum
                )
            }
            Self::RingTooLarge { context, maximum, actual } => {
                write!(f, "{}: ring of {} above maximum of {}", context, actual, maximum)
            }
            Self::SelfKeyMissing { context } => {
                write!(f, "Signer key missing from candidates: {}", context)
            }
            Self::MixedAlgorithms { context } => {
                write!(f, "Mixed key algorithms in ring: {}", context)
            }
            Self::KeyNotInRing { context } => {
                write!(f, "Signing key not in ring: {}", context)
            }
            #[cfg(feature = "std")]
            Self::MalformedSignature { context, message } if !message.is_empty() => {
                write!(f, "Malformed signature: {}: {}", context, message)
            }
            Self::MalformedSignature { context, .. } => {
                write!(f, "Malformed signature: {}", context)
            }
            #[cfg(feature = "std")]
            Self::InvalidSignature { context, message } if !message.is_empty() => {
                write!(f, "Invalid signature: {}: {}", context, message)
            }
            Self::InvalidSignature { context, .. } => {
                write!(f, "Invalid signature: {}", context)
            }
            Self::UnsupportedVersion { context, version } => {
                write!(f, "{}: unsupported format version {}", context, version)
            }
            Self::InvalidLength { context, expected, actual } => {
                write!(
                    f,
                    "{}: invalid length (expected {}, got {})",
                    context, expected, actual
                )
            }
            #[cfg(feature = "std")]
            Self::Other { context, message } if !message.is_empty() => {
                write!(f, "{}: {}", context, message)
            }
            Self::Other { context, .. } => {
                write!(f, "Error: {}", context)
            }
        }
    }
}
