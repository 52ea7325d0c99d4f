//! Reminders.app access through `osascript`.

use std::ffi::OsString;

use tokio::process::Command;
use tracing::{debug, info};

use super::RuleSource;
use crate::error::SourceError;
use crate::rules::{parse_rules, RuleRecord};

/// Program used to run AppleScript.
pub const DEFAULT_PROGRAM: &str = "osascript";

/// Reads one Reminders list by running an AppleScript snippet.
///
/// The call blocks until the script exits. There is no timeout: if
/// Reminders shows a permission prompt, the cycle waits for it.
#[derive(Debug, Clone)]
pub struct RemindersSource {
    list_name: String,
    program: OsString,
}

impl RemindersSource {
    pub fn new(list_name: impl Into<String>) -> Self {
        Self {
            list_name: list_name.into(),
            program: OsString::from(DEFAULT_PROGRAM),
        }
    }

    /// Run `program -e <script>` instead of `osascript -e <script>`.
    pub fn with_program(mut self, program: impl Into<OsString>) -> Self {
        self.program = program.into();
        self
    }

    pub fn list_name(&self) -> &str {
        &self.list_name
    }

    /// The AppleScript that renders the list as `title|body|id` items.
    pub fn script(&self) -> String {
        build_script(&self.list_name)
    }

    /// Run the script and return its trimmed stdout.
    pub async fn read_raw(&self) -> Result<String, SourceError> {
        let output = Command::new(&self.program)
            .arg("-e")
            .arg(self.script())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| SourceError::Spawn {
                program: self.program.to_string_lossy().into_owned(),
                source: e,
            })?;

        if !output.status.success() {
            return Err(SourceError::Failed {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8(output.stdout)?;
        Ok(stdout.trim().to_string())
    }
}

impl RuleSource for RemindersSource {
    async fn list_rules(&self) -> Result<Vec<RuleRecord>, SourceError> {
        let raw = self.read_raw().await?;
        if raw.is_empty() {
            info!(list = %self.list_name, "no reminders found in list");
            return Ok(Vec::new());
        }

        let rules = parse_rules(&raw);
        if rules.is_empty() {
            debug!(
                list = %self.list_name,
                bytes = raw.len(),
                "no well-formed entries in reminders output"
            );
        } else {
            debug!(list = %self.list_name, bytes = raw.len(), "read reminders output");
        }
        Ok(rules)
    }
}

/// Build the AppleScript for `list_name`.
///
/// Notes that are `missing value` are rendered as an empty string.
pub fn build_script(list_name: &str) -> String {
    let list_name = escape_applescript(list_name);
    format!(
        r#"tell application "Reminders"
    set remindersList to list "{list_name}"
    set reminderData to {{}}
    repeat with aReminder in (reminders of remindersList)
        set reminderTitle to name of aReminder
        set reminderNotes to body of aReminder
        if reminderNotes is missing value then set reminderNotes to ""
        set reminderId to id of aReminder
        set end of reminderData to reminderTitle & "|" & reminderNotes & "|" & reminderId
    end repeat
    return reminderData
end tell"#
    )
}

fn escape_applescript(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
