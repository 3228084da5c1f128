/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::error::AppError;
use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::warn;

/// Reads an environment variable, treating blank values as unset
fn read_env(env_var: &str) -> Option<String> {
    env::var(env_var)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Gets an environment variable or returns a default value if not found or cannot be parsed
///
/// # Arguments
///
/// * `env_var` - The name of the environment variable
/// * `default` - The value used when the variable is unset, blank or unparsable
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match read_env(env_var) {
        Some(val) => val.parse::<T>().unwrap_or_else(|e| {
            warn!("Failed to parse {}={:?}: {:?}, using default", env_var, val, e);
            default
        }),
        None => default,
    }
}

/// Gets an environment variable and parses it, returning None if not found or invalid
pub fn get_env_or_none<T: FromStr>(env_var: &str) -> Option<T> {
    read_env(env_var).and_then(|val| val.parse::<T>().ok())
}

/// Gets a mandatory environment variable
///
/// # Returns
/// * `Ok(String)` - The trimmed value
/// * `Err(AppError::Configuration)` - If the variable is unset or blank
pub fn get_env_required(env_var: &str) -> Result<String, AppError> {
    read_env(env_var)
        .ok_or_else(|| AppError::Configuration(format!("{env_var} is not set")))
}
