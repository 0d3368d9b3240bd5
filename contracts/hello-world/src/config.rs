//! Configuration constants for the `Main` greeting contract.
//!
//! Deployment-specific values (the recipient a deployment greets) are passed
//! to the constructor; everything here is fixed at compile time.

// ===== GREETING FORMAT =====

/// Text placed before the recipient name
pub const GREETING_PREFIX: &str = "Hello ";

/// Text placed after the recipient name
pub const GREETING_SUFFIX: &str = "!";

/// Recipient used while no user name has been registered
pub const ANONYMOUS_RECIPIENT: &str = "World";

// ===== DEPLOYMENT =====

/// Recipient used by the default deployment
pub const DEFAULT_RECIPIENT: &str = "Swarna";

/// Maximum recipient length in bytes
pub const MAX_RECIPIENT_LENGTH: u32 = 64;

/// Upper bound of a composed greeting in bytes
pub const MAX_GREETING_LENGTH: usize =
    GREETING_PREFIX.len() + MAX_RECIPIENT_LENGTH as usize + GREETING_SUFFIX.len();
