//! Account use cases

mod create_account;

pub use create_account::{CreateAccountCommand, CreateAccountUseCase};
