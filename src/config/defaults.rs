//! Default configuration values

/// MTU of the default network when none is configured
pub const DEFAULT_NETWORK_MTU: i32 = 1500;

/// Environment variable naming the shared application-data directory
pub const ENV_PROGRAM_DATA: &str = "ProgramData";

/// Daemon data directory name under the application-data directory
pub const ROOT_DIR_NAME: &str = "docker";

/// Execution root directory name under the daemon data directory
pub const EXEC_ROOT_DIR_NAME: &str = "exec-root";

/// Pid-file name under the daemon data directory
pub const PIDFILE_NAME: &str = "docker.pid";

/// Platform family name used in "only on linux" messages for exec-options
pub const LINUX_EXEC_OPT_PLATFORM: &str = "linux";

/// Platform family name used in "only on Linux" messages for fields
pub const LINUX_FIELD_PLATFORM: &str = "Linux";
