use crate::{Error, Result};
use foxmark_core::MenuOptions;
use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};

/// Interactive selection from a list of labels
///
/// Implementations block until the user has picked an entry or cancelled.
pub trait MenuPicker {
    /// Returns the chosen line, or `None` when nothing was selected
    fn pick(&self, choices: &[String]) -> Result<Option<String>>;
}

/// Runs rofi (or a dmenu-compatible program) as a blocking subprocess
pub struct RofiMenu {
    options: MenuOptions,
}

impl RofiMenu {
    pub fn new(options: MenuOptions) -> Self {
        Self { options }
    }

    /// Build the menu program's command-line arguments
    fn build_args(&self) -> Vec<String> {
        let mut args = vec![
            "-dmenu".to_string(),
            "-p".to_string(),
            self.options.prompt.clone(),
            "-theme".to_string(),
            self.options.theme_path.display().to_string(),
        ];

        if self.options.case_insensitive {
            args.push("-i".to_string());
        }

        args.push("-matching".to_string());
        args.push(self.options.matching_mode.clone());

        args
    }
}

impl MenuPicker for RofiMenu {
    fn pick(&self, choices: &[String]) -> Result<Option<String>> {
        let args = self.build_args();
        tracing::debug!(
            "Running {} {} with {} choice(s)",
            self.options.program,
            args.join(" "),
            choices.len()
        );

        let mut child = Command::new(&self.options.program)
            .args(&args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| {
                Error::Menu(format!(
                    "Failed to run menu program '{}': {}",
                    self.options.program, e
                ))
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            match stdin.write_all(choices.join("\n").as_bytes()) {
                Ok(()) => {}
                // The picker exited before reading everything; its output decides
                Err(e) if e.kind() == ErrorKind::BrokenPipe => {
                    tracing::debug!("Menu program closed its input early");
                }
                Err(e) => return Err(e.into()),
            }
        }

        // rofi exits non-zero on cancel; only the output matters
        let output = child.wait_with_output()?;
        let selection = String::from_utf8_lossy(&output.stdout).trim().to_string();

        if selection.is_empty() {
            tracing::debug!("Menu closed without a selection");
            Ok(None)
        } else {
            Ok(Some(selection))
        }
    }
}
