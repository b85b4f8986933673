use std::process::Command;

use log::{error, warn};

/// Print a `#### `-prefixed progress marker to stdout.
pub fn banner(msg: impl AsRef<str>) {
    println!("#### {}", msg.as_ref());
}

/// Synchronous runner for the fixed command sequences.
///
/// Every invocation is announced with Starting/Finished markers and its
/// stdout is captured and returned. Exit codes are logged but never fatal:
/// the orchestrated sequences carry on regardless, so a failed `umount` or
/// a missing `mysqld_multi` does not strand the rest of a teardown.
pub struct CommandRunner;

impl CommandRunner {
    /// Run `program` with `args`, returning whatever it wrote to stdout.
    pub fn run<S: AsRef<str>>(program: &str, args: &[S]) -> String {
        let command_line = Self::render_command_line(program, args);
        banner(format!("Starting: {command_line}"));

        let output = Command::new(program)
            .args(args.iter().map(|arg| arg.as_ref()))
            .output();

        let stdout = match output {
            Ok(output) => {
                if !output.status.success() {
                    warn!(
                        "'{}' exited with {}: {}",
                        command_line,
                        output.status,
                        String::from_utf8_lossy(&output.stderr).trim()
                    );
                }
                String::from_utf8_lossy(&output.stdout).into_owned()
            }
            Err(e) => {
                error!("Failed to spawn '{command_line}': {e}");
                String::new()
            }
        };

        banner(format!("Finished: {command_line}"));
        stdout
    }

    fn render_command_line<S: AsRef<str>>(program: &str, args: &[S]) -> String {
        let mut line = program.to_string();
        for arg in args {
            line.push(' ');
            line.push_str(arg.as_ref());
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_stdout() {
        let stdout = CommandRunner::run("echo", &["hello"]);
        assert_eq!(stdout.trim(), "hello");
    }

    #[test]
    fn nonzero_exit_is_not_fatal() {
        let stdout = CommandRunner::run("false", &[] as &[&str]);
        assert_eq!(stdout, "");
    }

    #[test]
    fn missing_binary_is_not_fatal() {
        let stdout = CommandRunner::run("mysql-ramdisk-no-such-binary", &["--version"]);
        assert_eq!(stdout, "");
    }

    #[test]
    fn command_line_rendering() {
        let line = CommandRunner::render_command_line("mount", &["-t", "HFS", "/dev/disk3"]);
        assert_eq!(line, "mount -t HFS /dev/disk3");
    }
}
