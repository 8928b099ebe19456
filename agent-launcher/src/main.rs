//! Entrypoint run by the AgentBeats controller.
//!
//! Reads `HOST` and `AGENT_PORT` from the environment (falling back to
//! `0.0.0.0:8000`), starts the agent server with those values plus the
//! placeholder-agent flag, and exits with the server's exit code. It
//! takes no arguments of its own; all configuration arrives via the
//! environment.

use std::env;
use std::ffi::OsString;
use std::io::ErrorKind;
use std::process::{Command, ExitStatus};

use tracing_subscriber::EnvFilter;

const AGENT_PROGRAM: &str = "agent-server";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: &str = "8000";

/// Environment lookup with `${VAR:-default}` semantics: unset and empty
/// both fall back to the default.
fn env_or(name: &str, default: &str) -> String {
    match env::var(name) {
        Ok(value) if !value.is_empty() => value,
        _ => default.to_string(),
    }
}

fn agent_args(host: &str, port: &str) -> Vec<String> {
    vec![
        "--host".to_string(),
        host.to_string(),
        "--port".to_string(),
        port.to_string(),
        "--use-placeholder-agent".to_string(),
    ]
}

/// Locate the agent server binary. Cargo drops both binaries into the
/// same target directory, so a sibling of the launcher executable wins;
/// otherwise the name goes through the PATH lookup of `Command`.
fn agent_program() -> OsString {
    if let Ok(exe) = env::current_exe() {
        let sibling = exe.with_file_name(format!("{}{}", AGENT_PROGRAM, env::consts::EXE_SUFFIX));
        if sibling.is_file() {
            return sibling.into_os_string();
        }
    }
    OsString::from(AGENT_PROGRAM)
}

/// Map a finished child to the code this process should exit with.
/// Termination by signal maps to `128 + signal`, as a shell would.
fn exit_code(status: ExitStatus) -> i32 {
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    status.code().unwrap_or(1)
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let host = env_or("HOST", DEFAULT_HOST);
    let port = env_or("AGENT_PORT", DEFAULT_PORT);
    let program = agent_program();

    tracing::info!(
        program = %program.to_string_lossy(),
        %host,
        %port,
        "starting agent server"
    );

    match Command::new(&program).args(agent_args(&host, &port)).status() {
        Ok(status) => std::process::exit(exit_code(status)),
        Err(err) => {
            tracing::error!(
                error = %err,
                program = %program.to_string_lossy(),
                "failed to start agent server"
            );
            // Shell launch-failure conventions: 127 when the program is
            // missing, 126 otherwise.
            let code = if err.kind() == ErrorKind::NotFound { 127 } else { 126 };
            std::process::exit(code);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_or_set_value_passes_through() {
        unsafe { env::set_var("LAUNCHER_TEST_SET", "127.0.0.1") };
        assert_eq!(env_or("LAUNCHER_TEST_SET", DEFAULT_HOST), "127.0.0.1");
        unsafe { env::remove_var("LAUNCHER_TEST_SET") };
    }

    #[test]
    fn test_env_or_unset_falls_back() {
        unsafe { env::remove_var("LAUNCHER_TEST_UNSET") };
        assert_eq!(env_or("LAUNCHER_TEST_UNSET", DEFAULT_PORT), "8000");
    }

    #[test]
    fn test_env_or_empty_falls_back() {
        unsafe { env::set_var("LAUNCHER_TEST_EMPTY", "") };
        assert_eq!(env_or("LAUNCHER_TEST_EMPTY", DEFAULT_HOST), "0.0.0.0");
        unsafe { env::remove_var("LAUNCHER_TEST_EMPTY") };
    }

    #[test]
    fn test_agent_args_order_and_flag() {
        assert_eq!(
            agent_args("127.0.0.1", "9090"),
            vec!["--host", "127.0.0.1", "--port", "9090", "--use-placeholder-agent"]
        );
    }

    #[test]
    fn test_agent_args_defaults() {
        assert_eq!(
            agent_args(DEFAULT_HOST, DEFAULT_PORT),
            vec!["--host", "0.0.0.0", "--port", "8000", "--use-placeholder-agent"]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_exit_code_propagates() {
        let status = Command::new("sh").args(["-c", "exit 7"]).status().unwrap();
        assert_eq!(exit_code(status), 7);

        let status = Command::new("sh").args(["-c", "exit 0"]).status().unwrap();
        assert_eq!(exit_code(status), 0);
    }

    #[cfg(unix)]
    #[test]
    fn test_exit_code_for_signal() {
        let status = Command::new("sh").args(["-c", "kill -9 $$"]).status().unwrap();
        assert_eq!(exit_code(status), 128 + 9);
    }

    #[test]
    fn test_missing_program_is_not_found() {
        let err = Command::new("agent-launcher-test-no-such-program").status().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }
}
