//! Deployment registry and call handles for `Main` deployments.
//!
//! The greeting test depends on these traits only. [`LocalRegistry`] backs
//! them with the Soroban test host; tests may substitute their own
//! implementations.

use core::cell::RefCell;

use soroban_sdk::{Address, Env, String};

use crate::config::DEFAULT_RECIPIENT;
use crate::{Main, MainClient};

/// What the hosting environment reported when a call did not produce a value.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CallFailure {
    /// No instance has been deployed
    NotDeployed,
    /// The call failed with a contract or host error value
    Contract(soroban_sdk::Error),
    /// The invocation aborted without an error value
    Invoke,
    /// The returned value could not be decoded
    Conversion,
}

/// Entry points of a deployed `Main` contract.
pub trait MainInstance {
    /// Mutating call. Returns once the state change has settled.
    fn set_user_name(&self, name: &String) -> Result<(), CallFailure>;

    /// Read-only call.
    fn print_message(&self) -> Result<String, CallFailure>;
}

/// Resolves the deployed `Main` contract.
pub trait ContractRegistry {
    type Instance: MainInstance;

    fn deployed(&self) -> Result<Self::Instance, CallFailure>;
}

/// Handle to a `Main` deployment inside a Soroban [`Env`].
#[derive(Clone)]
pub struct MainHandle {
    env: Env,
    address: Address,
}

impl MainHandle {
    pub fn new(env: &Env, address: &Address) -> Self {
        Self {
            env: env.clone(),
            address: address.clone(),
        }
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    fn client(&self) -> MainClient<'_> {
        MainClient::new(&self.env, &self.address)
    }
}

impl MainInstance for MainHandle {
    fn set_user_name(&self, name: &String) -> Result<(), CallFailure> {
        match self.client().try_set_user_name(name) {
            Ok(Ok(())) => Ok(()),
            Ok(Err(_)) => Err(CallFailure::Conversion),
            Err(Ok(err)) => Err(CallFailure::Contract(err)),
            Err(Err(_)) => Err(CallFailure::Invoke),
        }
    }

    fn print_message(&self) -> Result<String, CallFailure> {
        match self.client().try_print_message() {
            Ok(Ok(message)) => Ok(message),
            Ok(Err(_)) => Err(CallFailure::Conversion),
            Err(Ok(err)) => Err(CallFailure::Contract(err)),
            Err(Err(_)) => Err(CallFailure::Invoke),
        }
    }
}

/// Registry deploying `Main` into a Soroban test environment.
///
/// `deployed()` resolves the most recent deployment.
pub struct LocalRegistry {
    env: Env,
    latest: RefCell<Option<Address>>,
}

impl LocalRegistry {
    pub fn new(env: &Env) -> Self {
        Self {
            env: env.clone(),
            latest: RefCell::new(None),
        }
    }

    /// Deploys a `Main` instance greeting `recipient`.
    ///
    /// # Panics
    ///
    /// When the constructor rejects `recipient`.
    pub fn deploy(&self, recipient: &str) -> Address {
        let recipient = String::from_str(&self.env, recipient);
        let address = self.env.register(Main, (recipient,));
        self.latest.replace(Some(address.clone()));
        address
    }

    /// Deploys `Main` with [`DEFAULT_RECIPIENT`].
    pub fn deploy_default(&self) -> Address {
        self.deploy(DEFAULT_RECIPIENT)
    }
}

impl ContractRegistry for LocalRegistry {
    type Instance = MainHandle;

    fn deployed(&self) -> Result<MainHandle, CallFailure> {
        self.latest
            .borrow()
            .as_ref()
            .map(|address| MainHandle::new(&self.env, address))
            .ok_or(CallFailure::NotDeployed)
    }
}
