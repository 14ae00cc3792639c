//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy type with its own input type, so the
//! binaries dispatch statically. Strategies write their report to stdout; the
//! report builders they delegate to take any [`std::io::Write`] so they can be
//! exercised in tests.

mod check_key;
mod extract;

pub use check_key::{CheckKeyInput, CheckKeyStrategy, KeyCheckReport, check_key, load_credential};
pub use extract::{ExtractInput, ExtractStrategy, USAGE, extract_strings};

/// Core trait defining the contract for all command strategies.
///
/// # Design Principles
/// - **Static dispatch**: All calls are monomorphized at compile time
/// - **Type safety**: Each strategy defines its own input type via associated type
///
/// # Example
/// ```rust,ignore
/// struct MyStrategy;
///
/// impl CommandStrategy for MyStrategy {
///     type Input = MyInput;
///
///     async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
///         // Command logic here
///         Ok(())
///     }
/// }
/// ```
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// Failures the command knows how to report are printed and yield
    /// `Ok(())`; only failures writing the report itself are returned.
    async fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}
