//! Where config env-var overrides come from.
//!
//! Layering tests need to pin down exactly which variables are set, and
//! mutating the process environment from tests is both unsafe and racy
//! under the parallel test runner. `Env` makes the source explicit: the
//! process environment in production, a fixed map in tests.

use std::collections::HashMap;
use std::env::VarError;

/// Source of environment variables for config resolution.
#[derive(Clone, Debug)]
pub enum Env {
    /// Read from the process environment.
    Process,
    /// Serve values from a fixed map; everything else is absent.
    Fixed(HashMap<String, String>),
}

impl Env {
    pub fn real() -> Self {
        Env::Process
    }

    /// An env serving exactly the given pairs.
    pub fn mock(vars: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>) -> Self {
        Env::Fixed(vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }

    pub fn var(&self, name: &str) -> Result<String, VarError> {
        match self {
            Env::Process => std::env::var(name),
            Env::Fixed(map) => map.get(name).cloned().ok_or(VarError::NotPresent),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_env_serves_only_its_pairs() {
        let env = Env::mock([("ISSUEMILL_MODEL", "deepseek-reasoner")]);
        assert_eq!(env.var("ISSUEMILL_MODEL").unwrap(), "deepseek-reasoner");
        assert_eq!(env.var("ISSUEMILL_API_KEY"), Err(VarError::NotPresent));
    }

    #[test]
    fn empty_fixed_env_has_nothing() {
        let env = Env::mock(Vec::<(&str, &str)>::new());
        assert!(env.var("PATH").is_err());
    }

    #[test]
    fn process_env_reads_through() {
        // Set by cargo for every test binary.
        assert!(Env::real().var("CARGO_MANIFEST_DIR").is_ok());
    }
}
