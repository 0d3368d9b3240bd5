use soroban_sdk::{Env, String};

use crate::config::{ANONYMOUS_RECIPIENT, GREETING_PREFIX, GREETING_SUFFIX, MAX_GREETING_LENGTH};

/// Builds `"Hello <recipient>!"`.
///
/// The recipient must not exceed `MAX_RECIPIENT_LENGTH` bytes; the
/// constructor enforces that for every stored recipient.
pub fn compose(env: &Env, recipient: &String) -> String {
    let prefix = GREETING_PREFIX.as_bytes();
    let suffix = GREETING_SUFFIX.as_bytes();
    let name_end = prefix.len() + recipient.len() as usize;
    let total = name_end + suffix.len();

    let mut buf = [0u8; MAX_GREETING_LENGTH];
    buf[..prefix.len()].copy_from_slice(prefix);
    recipient.copy_into_slice(&mut buf[prefix.len()..name_end]);
    buf[name_end..total].copy_from_slice(suffix);

    String::from_bytes(env, &buf[..total])
}

/// Greeting returned before any user name has been registered.
pub fn anonymous(env: &Env) -> String {
    compose(env, &String::from_str(env, ANONYMOUS_RECIPIENT))
}
