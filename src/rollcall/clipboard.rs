use crate::error::{Result, RollcallError};
use crate::model::StudentRecord;
use std::io::Write;
use std::process::{Command, Stdio};

/// Helper programs tried in order, each as `(program, args)`.
#[cfg(target_os = "macos")]
const CLIPBOARD_PROGRAMS: &[(&str, &[&str])] = &[("pbcopy", &[])];

#[cfg(target_os = "linux")]
const CLIPBOARD_PROGRAMS: &[(&str, &[&str])] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

#[cfg(target_os = "windows")]
const CLIPBOARD_PROGRAMS: &[(&str, &[&str])] = &[("clip", &[])];

#[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
const CLIPBOARD_PROGRAMS: &[(&str, &[&str])] = &[];

/// Copies text to the system clipboard through the platform's helper program.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut last_error = None;
    for (program, args) in CLIPBOARD_PROGRAMS {
        match pipe_to(program, args, text) {
            Ok(()) => return Ok(()),
            Err(e) => last_error = Some(e),
        }
    }
    Err(last_error.unwrap_or_else(|| {
        RollcallError::Api("Clipboard not supported on this platform".to_string())
    }))
}

fn pipe_to(program: &str, args: &[&str], text: &str) -> Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|e| RollcallError::Api(format!("Failed to spawn {}: {}", program, e)))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| RollcallError::Api(format!("Failed to write to {}: {}", program, e)))?;
    }

    let status = child
        .wait()
        .map_err(|e| RollcallError::Api(format!("Failed to wait for {}: {}", program, e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(RollcallError::Api(format!("{} exited with error", program)))
    }
}

/// A record as compact JSON, the same shape it is stored in.
pub fn format_for_clipboard(record: &StudentRecord) -> Result<String> {
    Ok(serde_json::to_string(record)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_for_clipboard_is_stored_json() {
        let record = StudentRecord {
            id: 1700000000000,
            roll_no: "CS1001".into(),
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            phone: "9876543210".into(),
            course: "Computer Science".into(),
            address: "".into(),
        };
        let text = format_for_clipboard(&record).unwrap();
        assert!(text.starts_with(r#"{"id":1700000000000,"rollNo":"CS1001""#));

        let parsed: StudentRecord = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_missing_program_is_an_error() {
        let err = pipe_to("rollcall-no-such-clipboard-tool", &[], "x").unwrap_err();
        assert!(err.to_string().contains("Failed to spawn"));
    }
}
