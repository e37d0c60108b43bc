//! Types downstream clients interact with.
mod errors;
mod observer;
mod providers;

pub use errors::{ProviderError, Result, RuntimeError};
pub use observer::{BattleObserver, NullObserver};
pub use providers::{ActionProvider, ScriptedActionProvider, WaitActionProvider};
