//! Test utilities for property-based testing
//!
//! This module provides generators and helpers for proptest.

#[cfg(test)]
pub mod generators {
    use proptest::prelude::*;

    use crate::core::exec_opts::exec_opt_rule;

    /// Generate an absolute base directory
    pub fn base_dir() -> impl Strategy<Value = String> {
        "(/[A-Za-z0-9_-]{1,12}){1,4}"
    }

    /// Generate any MTU value, including unset and negative ones
    pub fn mtu_value() -> impl Strategy<Value = i32> {
        prop_oneof![Just(0), Just(1500), -10_000i32..70_000]
    }

    /// Generate an MTU that is set and differs from the default
    pub fn non_default_mtu() -> impl Strategy<Value = i32> {
        prop_oneof![-10_000i32..0, 1i32..1500, 1501i32..70_000]
    }

    /// Generate a non-empty exec-option value
    pub fn exec_opt_value() -> impl Strategy<Value = String> {
        "[A-Za-z0-9._:-]{1,24}"
    }

    /// Generate an exec-option name this platform does not recognize
    pub fn unknown_exec_opt_name() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9.-]{0,24}".prop_filter("Name must not be a known option", |name| {
            exec_opt_rule(name).is_none()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::generators::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_base_dir_generator(dir in base_dir()) {
            prop_assert!(dir.starts_with('/'));
            prop_assert!(!dir.ends_with('/'));
        }

        #[test]
        fn test_non_default_mtu_generator(mtu in non_default_mtu()) {
            prop_assert!(mtu != 0 && mtu != 1500);
        }

        #[test]
        fn test_exec_opt_value_generator(value in exec_opt_value()) {
            prop_assert!(!value.is_empty());
            prop_assert!(!value.contains('='));
        }

        #[test]
        fn test_unknown_exec_opt_name_generator(name in unknown_exec_opt_name()) {
            prop_assert!(name != "isolation" && name != "native.cgroupdriver");
        }
    }
}
