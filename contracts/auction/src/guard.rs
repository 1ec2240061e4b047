use crate::errors::Error;
use crate::storage;
use soroban_sdk::Env;

/// Run `f` with the contract-wide reentrancy lock held.
///
/// The lock is released on every return path of `f`, including errors. A
/// trap inside `f` discards the whole invocation, lock write included.
pub fn non_reentrant<T, F>(env: &Env, f: F) -> Result<T, Error>
where
    F: FnOnce() -> Result<T, Error>,
{
    if storage::is_locked(env) {
        return Err(Error::ReentrancyDetected);
    }
    storage::set_locked(env, true);

    let result = f();

    storage::set_locked(env, false);
    result
}
