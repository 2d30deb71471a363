//! Platform default resolution
//!
//! Fills the data-root, exec-root and pid-file of a freshly allocated
//! [`Config`] from the shared application-data directory.

use std::path::PathBuf;

use tracing::debug;

use crate::config::defaults::{ENV_PROGRAM_DATA, EXEC_ROOT_DIR_NAME, PIDFILE_NAME, ROOT_DIR_NAME};
use crate::core::config::Config;
use crate::infra::env::EnvSource;

/// Apply the platform default paths to `config`
///
/// - `root` becomes `<ProgramData>/docker`
/// - `exec_root` becomes `<ProgramData>/docker/exec-root`
/// - `pidfile` becomes `<root>/docker.pid`
///
/// When `ProgramData` is unset or empty the paths stay relative
/// (`docker`, `docker/exec-root`, `docker/docker.pid`). Running this again
/// with the same environment produces the same values.
pub fn set_platform_defaults(config: &mut Config, env: &impl EnvSource) {
    let base = program_data_dir(env);

    config.root = base.join(ROOT_DIR_NAME);
    config.exec_root = base.join(ROOT_DIR_NAME).join(EXEC_ROOT_DIR_NAME);
    config.pidfile = config.root.join(PIDFILE_NAME);

    debug!(
        root = %config.root.display(),
        exec_root = %config.exec_root.display(),
        pidfile = %config.pidfile.display(),
        "Applied platform defaults"
    );
}

/// Base directory for the daemon's default paths
///
/// Empty when the environment does not name one.
pub fn program_data_dir(env: &impl EnvSource) -> PathBuf {
    env.get_non_empty(ENV_PROGRAM_DATA)
        .map(PathBuf::from)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::env::MapEnv;
    use crate::test_utils::generators::base_dir;
    use proptest::prelude::*;
    use std::path::Path;

    #[test]
    fn test_defaults_from_program_data() {
        let env = MapEnv::new().with("ProgramData", "/c/ProgramData");
        let mut config = Config::default();
        set_platform_defaults(&mut config, &env);

        assert_eq!(config.root, Path::new("/c/ProgramData/docker"));
        assert_eq!(config.exec_root, Path::new("/c/ProgramData/docker/exec-root"));
        assert_eq!(config.pidfile, Path::new("/c/ProgramData/docker/docker.pid"));
    }

    #[test]
    fn test_missing_program_data_gives_relative_paths() {
        let mut config = Config::default();
        set_platform_defaults(&mut config, &MapEnv::new());

        assert_eq!(config.root, Path::new("docker"));
        assert_eq!(config.exec_root, Path::new("docker/exec-root"));
        assert_eq!(config.pidfile, Path::new("docker/docker.pid"));
    }

    #[test]
    fn test_empty_program_data_same_as_missing() {
        let empty = Config::with_platform_defaults(&MapEnv::new().with("ProgramData", ""));
        let missing = Config::with_platform_defaults(&MapEnv::new());
        assert_eq!(empty, missing);
    }

    #[test]
    fn test_defaults_leave_other_fields_alone() {
        let mut config = Config::default();
        config.bridge.mtu = 1400;
        config.firewall_backend = "iptables".to_string();
        set_platform_defaults(&mut config, &MapEnv::new().with("ProgramData", "/data"));

        assert_eq!(config.mtu(), 1400);
        assert_eq!(config.firewall_backend, "iptables");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_defaults_derive_from_base(base in base_dir()) {
            let env = MapEnv::new().with("ProgramData", &base);
            let mut config = Config::default();
            set_platform_defaults(&mut config, &env);

            let root = Path::new(&base).join("docker");
            prop_assert_eq!(&config.root, &root);
            prop_assert_eq!(&config.exec_root, &root.join("exec-root"));
            prop_assert_eq!(&config.pidfile, &root.join("docker.pid"));
            prop_assert!(config.exec_root.starts_with(&config.root));
            prop_assert!(config.pidfile.starts_with(&config.root));
        }

        #[test]
        fn prop_defaults_are_idempotent(base in base_dir()) {
            let env = MapEnv::new().with("ProgramData", &base);
            let mut config = Config::default();
            set_platform_defaults(&mut config, &env);
            let first = config.clone();
            set_platform_defaults(&mut config, &env);
            prop_assert_eq!(first, config);
        }
    }
}
