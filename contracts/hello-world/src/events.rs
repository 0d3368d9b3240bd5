use soroban_sdk::{contracttype, Env, String, Symbol};

/// Event emitted whenever a user name is registered with the contract.
///
/// Overwriting a name with the same value still emits an event; `previous`
/// then equals `name`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UserNameSetEvent {
    /// Name stored before this call, if any
    pub previous: Option<String>,
    /// Newly stored name
    pub name: String,
    /// Ledger timestamp of the change
    pub timestamp: u64,
}

/// Topic under which [`UserNameSetEvent`] is published
pub const USER_NAME_SET_TOPIC: &str = "user_name_set";

pub struct GreetingEvents;

impl GreetingEvents {
    pub fn emit_user_name_set(env: &Env, previous: Option<String>, name: &String) {
        let event = UserNameSetEvent {
            previous,
            name: name.clone(),
            timestamp: env.ledger().timestamp(),
        };
        env.events()
            .publish((Symbol::new(env, USER_NAME_SET_TOPIC),), event);
    }
}
