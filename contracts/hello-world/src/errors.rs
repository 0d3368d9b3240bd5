use soroban_sdk::contracterror;

/// Error codes returned by the `Main` greeting contract.
///
/// Codes are stable and surface to clients as `Error(Contract, #n)`.
///
/// # Example Usage
///
/// ```rust
/// # use hello_world::errors::Error;
/// let error = Error::RecipientTooLong;
/// assert_eq!(error.code(), "RECIPIENT_TOO_LONG");
/// assert_eq!(error as u32, 2);
/// ```
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Recipient passed to the constructor is empty
    RecipientEmpty = 1,
    /// Recipient passed to the constructor exceeds the maximum length
    RecipientTooLong = 2,
    /// Contract storage holds no recipient; unreachable after a successful
    /// constructor unless the instance entry is lost
    NotInitialized = 3,
}

impl Error {
    /// Human readable description of the error.
    pub fn description(&self) -> &'static str {
        match self {
            Error::RecipientEmpty => "Recipient name must not be empty",
            Error::RecipientTooLong => "Recipient name exceeds the maximum length",
            Error::NotInitialized => "Contract has not been initialized",
        }
    }

    /// Stable string code for logs and client applications.
    pub fn code(&self) -> &'static str {
        match self {
            Error::RecipientEmpty => "RECIPIENT_EMPTY",
            Error::RecipientTooLong => "RECIPIENT_TOO_LONG",
            Error::NotInitialized => "NOT_INITIALIZED",
        }
    }
}
