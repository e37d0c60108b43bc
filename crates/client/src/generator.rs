//! External enemy generator process.
use std::io::Write;
use std::process::{Command, Stdio};

use battle_content::ContentError;

/// Runs `command` with `prompt` on stdin and returns its stdout.
///
/// The command line is split on whitespace; no shell is involved.
pub fn run_command(command: &str, prompt: &str) -> Result<String, ContentError> {
    let mut parts = command.split_whitespace();
    let program = parts
        .next()
        .ok_or_else(|| ContentError::Unavailable("empty generator command".into()))?;

    let mut child = Command::new(program)
        .args(parts)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|error| ContentError::Unavailable(format!("spawning {program}: {error}")))?;

    if let Some(mut stdin) = child.stdin.take() {
        if let Err(error) = stdin.write_all(prompt.as_bytes()) {
            drop(stdin);
            // The child may already have exited; reap it either way.
            let _ = child.kill();
            let _ = child.wait();
            return Err(ContentError::Unavailable(format!("writing prompt: {error}")));
        }
    }

    let output = child
        .wait_with_output()
        .map_err(|error| ContentError::Unavailable(format!("waiting for {program}: {error}")))?;
    if !output.status.success() {
        return Err(ContentError::Unavailable(format!(
            "{program} exited with {}",
            output.status
        )));
    }

    tracing::debug!(program, bytes = output.stdout.len(), "generator responded");
    String::from_utf8(output.stdout)
        .map_err(|_| ContentError::Malformed("generator output is not UTF-8".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_command_is_unavailable() {
        assert!(matches!(run_command("   ", "hi"), Err(ContentError::Unavailable(_))));
    }

    #[test]
    fn missing_program_is_unavailable() {
        assert!(matches!(
            run_command("atb-no-such-generator-binary", "hi"),
            Err(ContentError::Unavailable(_))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn prompt_is_piped_through() {
        assert_eq!(run_command("cat", "Magitek Factory").unwrap(), "Magitek Factory");
    }

    #[cfg(unix)]
    #[test]
    fn prompt_to_a_child_that_never_reads_is_unavailable() {
        // `true` exits without reading; a prompt larger than the pipe buffer
        // can only end in a broken pipe.
        let prompt = "x".repeat(1 << 20);
        match run_command("true", &prompt) {
            Err(ContentError::Unavailable(reason)) => assert!(reason.starts_with("writing prompt")),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn failing_exit_status_is_unavailable() {
        assert!(matches!(run_command("false", ""), Err(ContentError::Unavailable(_))));
    }
}
