use soroban_sdk::{contracttype, Env, String};

/// Keys of the contract's instance storage.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Name greeted by this deployment, fixed at construction
    Recipient,
    /// Last registered user name
    UserName,
}

/// Typed access to the greeting contract's instance storage.
pub struct GreetingStorage;

impl GreetingStorage {
    pub fn recipient(env: &Env) -> Option<String> {
        env.storage().instance().get(&DataKey::Recipient)
    }

    pub fn set_recipient(env: &Env, recipient: &String) {
        env.storage().instance().set(&DataKey::Recipient, recipient);
    }

    pub fn user_name(env: &Env) -> Option<String> {
        env.storage().instance().get(&DataKey::UserName)
    }

    /// Overwrites the stored user name and returns the one it replaced.
    pub fn replace_user_name(env: &Env, name: &String) -> Option<String> {
        let previous = Self::user_name(env);
        env.storage().instance().set(&DataKey::UserName, name);
        previous
    }
}
