//! Greeting test for a deployed `Main` contract.
//!
//! [`ContractGreetingTest::run`] resolves the deployment, registers a user
//! name, reads the greeting and compares it with the expected message. Each
//! call settles before the next one is issued and every failure is returned
//! to the caller untouched.

use core::cell::Cell;

use soroban_sdk::{Env, String};

use crate::registry::{CallFailure, ContractRegistry, MainInstance};

/// User name registered by the default greeting test
pub const DEFAULT_USER_NAME: &str = "Samuel";

/// Greeting the default test expects back
pub const EXPECTED_MESSAGE: &str = "Hello Swarna!";

/// Failure message reported when the greeting does not match
pub const ASSERTION_MESSAGE: &str = "should print out hello to entered name";

/// Progress of a single [`ContractGreetingTest::run`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Stage {
    NotStarted,
    NameSet,
    MessageRead,
    Asserted,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GreetingTestError {
    /// The deployed contract could not be resolved
    DeploymentResolution(CallFailure),
    /// `set_user_name` failed
    Transaction(CallFailure),
    /// `print_message` failed
    ReadCall(CallFailure),
    /// The greeting did not match
    Assertion {
        expected: String,
        actual: String,
        message: &'static str,
    },
}

impl GreetingTestError {
    pub fn message(&self) -> &'static str {
        match self {
            GreetingTestError::DeploymentResolution(_) => "deployed contract could not be resolved",
            GreetingTestError::Transaction(_) => "set_user_name call failed",
            GreetingTestError::ReadCall(_) => "print_message call failed",
            GreetingTestError::Assertion { message, .. } => *message,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            GreetingTestError::DeploymentResolution(_) => "DEPLOYMENT_RESOLUTION_FAILURE",
            GreetingTestError::Transaction(_) => "TRANSACTION_FAILURE",
            GreetingTestError::ReadCall(_) => "READ_CALL_FAILURE",
            GreetingTestError::Assertion { .. } => "ASSERTION_FAILURE",
        }
    }

    /// The host-reported failure behind a call error, if any.
    pub fn call_failure(&self) -> Option<CallFailure> {
        match self {
            GreetingTestError::DeploymentResolution(failure)
            | GreetingTestError::Transaction(failure)
            | GreetingTestError::ReadCall(failure) => Some(*failure),
            GreetingTestError::Assertion { .. } => None,
        }
    }
}

/// Sets a user name on the deployed `Main` contract and checks the greeting.
///
/// # Example Usage
///
/// ```rust
/// # use soroban_sdk::Env;
/// # use hello_world::greeting_check::ContractGreetingTest;
/// # use hello_world::registry::LocalRegistry;
/// let env = Env::default();
/// let registry = LocalRegistry::new(&env);
/// registry.deploy_default();
///
/// let test = ContractGreetingTest::new(&env, registry);
/// assert_eq!(test.run(), Ok(()));
/// ```
pub struct ContractGreetingTest<'a, R: ContractRegistry> {
    env: Env,
    registry: R,
    user_name: &'a str,
    expected_message: &'a str,
    stage: Cell<Stage>,
}

impl<'a, R: ContractRegistry> ContractGreetingTest<'a, R> {
    pub fn new(env: &Env, registry: R) -> Self {
        Self {
            env: env.clone(),
            registry,
            user_name: DEFAULT_USER_NAME,
            expected_message: EXPECTED_MESSAGE,
            stage: Cell::new(Stage::NotStarted),
        }
    }

    pub fn with_user_name(mut self, user_name: &'a str) -> Self {
        self.user_name = user_name;
        self
    }

    pub fn with_expected_message(mut self, expected_message: &'a str) -> Self {
        self.expected_message = expected_message;
        self
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Last stage reached by the most recent run.
    pub fn stage(&self) -> Stage {
        self.stage.get()
    }

    pub fn run(&self) -> Result<(), GreetingTestError> {
        self.stage.set(Stage::NotStarted);

        let instance = self
            .registry
            .deployed()
            .map_err(GreetingTestError::DeploymentResolution)?;

        let name = String::from_str(&self.env, self.user_name);
        instance
            .set_user_name(&name)
            .map_err(GreetingTestError::Transaction)?;
        self.stage.set(Stage::NameSet);

        let actual = instance
            .print_message()
            .map_err(GreetingTestError::ReadCall)?;
        self.stage.set(Stage::MessageRead);

        let expected = String::from_str(&self.env, self.expected_message);
        if actual != expected {
            return Err(GreetingTestError::Assertion {
                expected,
                actual,
                message: ASSERTION_MESSAGE,
            });
        }
        self.stage.set(Stage::Asserted);
        Ok(())
    }
}
