//! Mock `Main` deployments for exercising the greeting test without the
//! contract, including failing and misbehaving instances.

extern crate alloc;

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};

use soroban_sdk::{Env, String};

use crate::registry::{CallFailure, ContractRegistry, MainInstance};

/// Mock Behavior Configuration
#[derive(Debug, Clone, Copy)]
pub enum MockBehavior {
    /// Accepts every name and always answers with the given greeting
    Greets(&'static str),
    /// `set_user_name` fails with the given contract error code
    FailsWrite(u32),
    /// `print_message` fails with the given contract error code
    FailsRead(u32),
    /// `print_message` aborts without an error value
    AbortsRead,
}

/// Calls observed by a mock instance, in order.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Call {
    SetUserNameStarted,
    SetUserNameSettled,
    PrintMessage,
}

pub type CallLog = Rc<RefCell<Vec<Call>>>;

pub struct MockMain {
    env: Env,
    behavior: MockBehavior,
    stored_name: Rc<RefCell<Option<String>>>,
    log: CallLog,
}

impl MainInstance for MockMain {
    fn set_user_name(&self, name: &String) -> Result<(), CallFailure> {
        self.log.borrow_mut().push(Call::SetUserNameStarted);
        if let MockBehavior::FailsWrite(code) = self.behavior {
            return Err(CallFailure::Contract(soroban_sdk::Error::from_contract_error(code)));
        }
        self.stored_name.replace(Some(name.clone()));
        self.log.borrow_mut().push(Call::SetUserNameSettled);
        Ok(())
    }

    fn print_message(&self) -> Result<String, CallFailure> {
        self.log.borrow_mut().push(Call::PrintMessage);
        match self.behavior {
            MockBehavior::Greets(message) => Ok(String::from_str(&self.env, message)),
            MockBehavior::FailsWrite(_) => Err(CallFailure::Invoke),
            MockBehavior::FailsRead(code) => Err(CallFailure::Contract(
                soroban_sdk::Error::from_contract_error(code),
            )),
            MockBehavior::AbortsRead => Err(CallFailure::Invoke),
        }
    }
}

/// Registry handing out [`MockMain`] instances that share one call log and
/// one stored name.
pub struct MockRegistry {
    env: Env,
    behavior: MockBehavior,
    resolution: Option<CallFailure>,
    resolutions: Cell<u32>,
    stored_name: Rc<RefCell<Option<String>>>,
    log: CallLog,
}

impl MockRegistry {
    pub fn new(env: &Env, behavior: MockBehavior) -> Self {
        Self {
            env: env.clone(),
            behavior,
            resolution: None,
            resolutions: Cell::new(0),
            stored_name: Rc::new(RefCell::new(None)),
            log: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Makes `deployed()` fail with `failure`.
    pub fn unresolvable(env: &Env, failure: CallFailure) -> Self {
        let mut registry = Self::new(env, MockBehavior::Greets(""));
        registry.resolution = Some(failure);
        registry
    }

    /// Number of `deployed()` calls so far, failed ones included.
    pub fn resolutions(&self) -> u32 {
        self.resolutions.get()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.log.borrow().clone()
    }

    pub fn stored_name(&self) -> Option<String> {
        self.stored_name.borrow().clone()
    }
}

impl ContractRegistry for MockRegistry {
    type Instance = MockMain;

    fn deployed(&self) -> Result<MockMain, CallFailure> {
        self.resolutions.set(self.resolutions.get() + 1);
        if let Some(failure) = self.resolution {
            return Err(failure);
        }
        Ok(MockMain {
            env: self.env.clone(),
            behavior: self.behavior,
            stored_name: self.stored_name.clone(),
            log: self.log.clone(),
        })
    }
}
