#![no_std]
use soroban_sdk::{contract, contractimpl, log, panic_with_error, Env, String};

pub mod config;
pub mod errors;
pub mod events;
mod greeting;
mod storage;

#[cfg(any(test, feature = "testutils"))]
pub mod greeting_check;
#[cfg(any(test, feature = "testutils"))]
pub mod registry;

pub use errors::Error;

use config::MAX_RECIPIENT_LENGTH;
use events::GreetingEvents;
use storage::GreetingStorage;

/// Hello World greeting contract.
///
/// A deployment is bound to a recipient at construction. Users register a
/// name with [`Main::set_user_name`]; from then on [`Main::print_message`]
/// greets the deployment's recipient. Until a name is registered the contract
/// answers with the anonymous `"Hello World!"`.
///
/// # Contract Functions
///
/// - `__constructor(recipient)` - Binds the deployment to a recipient
/// - `set_user_name(name)` - Stores the caller's user name (mutating)
/// - `print_message()` - Returns the greeting (read-only)
/// - `user_name()` / `recipient()` - Read the stored values
///
/// # Example Usage
///
/// ```rust
/// # use soroban_sdk::{Env, String};
/// # use hello_world::{Main, MainClient};
/// let env = Env::default();
/// let contract_id = env.register(Main, (String::from_str(&env, "Swarna"),));
/// let client = MainClient::new(&env, &contract_id);
///
/// client.set_user_name(&String::from_str(&env, "Samuel"));
/// assert_eq!(client.print_message(), String::from_str(&env, "Hello Swarna!"));
/// ```
#[contract]
pub struct Main;

#[contractimpl]
impl Main {
    /// Binds the deployment to `recipient`.
    ///
    /// # Panics
    ///
    /// * `Error::RecipientEmpty` - `recipient` is empty
    /// * `Error::RecipientTooLong` - `recipient` exceeds `MAX_RECIPIENT_LENGTH` bytes
    pub fn __constructor(env: Env, recipient: String) {
        if recipient.len() == 0 {
            panic_with_error!(&env, Error::RecipientEmpty);
        }
        if recipient.len() > MAX_RECIPIENT_LENGTH {
            panic_with_error!(&env, Error::RecipientTooLong);
        }
        GreetingStorage::set_recipient(&env, &recipient);
    }

    /// Stores `name` as the current user name, replacing any previous one.
    ///
    /// No validation is applied to `name`. Emits `user_name_set`.
    pub fn set_user_name(env: Env, name: String) {
        let previous = GreetingStorage::replace_user_name(&env, &name);
        log!(&env, "user name set", name);
        GreetingEvents::emit_user_name_set(&env, previous, &name);
    }

    /// Returns the greeting for the current state.
    ///
    /// `"Hello <recipient>!"` once a user name is stored, `"Hello World!"`
    /// before that. Has no side effects.
    pub fn print_message(env: Env) -> String {
        if GreetingStorage::user_name(&env).is_none() {
            return greeting::anonymous(&env);
        }
        let recipient = Self::recipient(env.clone());
        greeting::compose(&env, &recipient)
    }

    /// Returns the stored user name, if any.
    pub fn user_name(env: Env) -> Option<String> {
        GreetingStorage::user_name(&env)
    }

    /// Returns the recipient this deployment greets.
    ///
    /// The constructor always stores a recipient, so `Error::NotInitialized`
    /// only surfaces when instance storage has lost the entry.
    pub fn recipient(env: Env) -> String {
        GreetingStorage::recipient(&env)
            .unwrap_or_else(|| panic_with_error!(&env, Error::NotInitialized))
    }
}

#[cfg(test)]
mod tests;
