use crate::{storage, Error};
use soroban_sdk::{Address, Env};

/// Checks that `caller` is the configured administrator. The caller must also
/// authorize the invocation.
pub fn require_admin(env: &Env, caller: &Address) -> Result<(), Error> {
    caller.require_auth();
    let admin = storage::get_admin(env).ok_or(Error::NotInitialized)?;
    if admin != *caller {
        return Err(Error::Unauthorized);
    }
    Ok(())
}
