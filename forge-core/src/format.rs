//! External pretty-printer invocation.

use std::{
    io::Write,
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

use crate::SinkError;

/// An external formatter that reads source on stdin and writes it to stdout
/// (e.g. `prettier --stdin-filepath generated.ts`).
#[derive(Debug, Clone)]
pub struct Formatter {
    program: String,
    args: Vec<String>,
    current_dir: Option<PathBuf>,
}

impl Formatter {
    /// Build a formatter from a command line. Returns `None` for an empty command.
    pub fn from_command(command: &[String]) -> Option<Self> {
        let (program, args) = command.split_first()?;
        Some(Self {
            program: program.clone(),
            args: args.to_vec(),
            current_dir: None,
        })
    }

    /// Run the formatter from `dir`, so it can pick up project-local config.
    pub fn current_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.current_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Format `code`, returning the formatter's stdout.
    pub fn format(&self, code: &str) -> Result<String, SinkError> {
        let fail = |message: String| SinkError::Format {
            command: self.display(),
            message,
        };

        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(dir) = &self.current_dir {
            command.current_dir(dir);
        }

        let mut child = command
            .spawn()
            .map_err(|e| fail(format!("failed to spawn: {}", e)))?;
        if let Some(mut stdin) = child.stdin.take()
            && let Err(e) = stdin.write_all(code.as_bytes())
        {
            // Reap the child so a formatter that stopped reading is not left behind.
            let _ = child.kill();
            let _ = child.wait();
            return Err(fail(format!("failed to write stdin: {}", e)));
        }
        let output = child
            .wait_with_output()
            .map_err(|e| fail(format!("failed to wait: {}", e)))?;

        if output.status.success() {
            String::from_utf8(output.stdout).map_err(|e| fail(e.to_string()))
        } else {
            Err(fail(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ))
        }
    }

    /// Format `code`, falling back to the unformatted text on failure.
    pub fn format_or_original(&self, code: &str) -> String {
        match self.format(code) {
            Ok(formatted) => formatted,
            Err(e) => {
                tracing::warn!(error = %e, "formatting failed, keeping unformatted output");
                code.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_command_has_no_formatter() {
        assert!(Formatter::from_command(&[]).is_none());
    }

    #[test]
    fn test_missing_program_falls_back_to_original() {
        let formatter =
            Formatter::from_command(&["hookforge-no-such-formatter".to_string()]).unwrap();
        assert!(formatter.format("const a = 1;").is_err());
        assert_eq!(formatter.format_or_original("const a = 1;"), "const a = 1;");
    }

    #[cfg(unix)]
    #[test]
    fn test_formats_through_stdin_and_stdout() {
        let formatter = Formatter::from_command(&["cat".to_string()]).unwrap();
        assert_eq!(formatter.format("const a = 1;\n").unwrap(), "const a = 1;\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_formatter_that_ignores_stdin_is_reaped() {
        let formatter = Formatter::from_command(&["true".to_string()]).unwrap();
        let code = "x".repeat(4 * 1024 * 1024);
        let err = formatter.format(&code).unwrap_err();
        assert!(err.to_string().contains("failed to write stdin"), "{err}");
    }
}
