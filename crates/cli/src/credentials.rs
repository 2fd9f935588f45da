// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tracker password lookup.
//!
//! Order: `--password`, then `$LPS_PASSWORD`, then the OS keyring entry
//! whose service is the tracker URL and whose user is the tracker user name.

use crate::env;
use crate::error::{Error, Result};

/// Resolve the password for `user`, consulting `lookup` only when neither
/// the flag nor the environment supplies one.
pub fn resolve_password(
    flag: Option<String>,
    from_env: Option<String>,
    server: &str,
    user: &str,
    lookup: impl FnOnce(&str, &str) -> Result<Option<String>>,
) -> Result<String> {
    if let Some(password) = flag.or(from_env) {
        return Ok(password);
    }
    lookup(server, user)?.ok_or_else(|| Error::MissingPassword {
        server: server.to_string(),
        user: user.to_string(),
    })
}

/// The password stored in the OS keyring, if any.
pub fn keyring_password(server: &str, user: &str) -> Result<Option<String>> {
    let entry = keyring::Entry::new(server, user)?;
    match entry.get_password() {
        Ok(password) => Ok(Some(password)),
        Err(keyring::Error::NoEntry) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Password for `user` on `server` from the flag, environment, or keyring.
pub fn password(flag: Option<String>, server: &str, user: &str) -> Result<String> {
    resolve_password(flag, env::password(), server, user, keyring_password)
}

#[cfg(test)]
#[path = "credentials_tests.rs"]
mod tests;
