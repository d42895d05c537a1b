use crate::git::{ShellError, ShellOutput, ShellResult};
use std::process::{Command, Stdio};

pub trait Shell {
    fn run(&self, program: &str, args: &[&str]) -> ShellResult;
}

pub struct SystemShell;

impl SystemShell {
    pub fn new() -> Self {
        Self
    }
}

impl Shell for SystemShell {
    fn run(&self, program: &str, args: &[&str]) -> ShellResult {
        log::debug!("Running: {} {}", program, args.join(" "));

        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| ShellError::new(format!("Failed to execute {}: {}", program, e), None))?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        if !output.status.success() {
            log::debug!("{} exited with {:?}", program, output.status.code());
            return Err(ShellError::new(stderr, output.status.code()));
        }

        Ok(ShellOutput { stdout, stderr })
    }
}

#[cfg(test)]
pub struct MockShell {
    pub responses: std::collections::HashMap<String, ShellResult>,
    pub calls: std::sync::Mutex<Vec<String>>,
}

#[cfg(test)]
impl MockShell {
    pub fn new() -> Self {
        Self {
            responses: std::collections::HashMap::new(),
            calls: std::sync::Mutex::new(Vec::new()),
        }
    }

    /// Answer `command_line` (program and args joined by single spaces) with `result`
    pub fn with_response(mut self, command_line: &str, result: ShellResult) -> Self {
        self.responses.insert(command_line.to_string(), result);
        self
    }

    pub fn with_stdout(self, command_line: &str, stdout: &str) -> Self {
        self.with_response(
            command_line,
            Ok(ShellOutput {
                stdout: stdout.to_string(),
                stderr: String::new(),
            }),
        )
    }

    pub fn with_stderr(self, command_line: &str, stderr: &str) -> Self {
        self.with_response(
            command_line,
            Ok(ShellOutput {
                stdout: String::new(),
                stderr: stderr.to_string(),
            }),
        )
    }

    pub fn with_failure(self, command_line: &str, message: &str, code: i32) -> Self {
        self.with_response(command_line, Err(ShellError::new(message, Some(code))))
    }

    pub fn get_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl Shell for MockShell {
    fn run(&self, program: &str, args: &[&str]) -> ShellResult {
        let mut parts = vec![program];
        parts.extend_from_slice(args);
        let command_line = parts.join(" ");

        self.calls.lock().unwrap().push(command_line.clone());

        self.responses
            .get(&command_line)
            .cloned()
            .unwrap_or_else(|| Ok(ShellOutput::default()))
    }
}
