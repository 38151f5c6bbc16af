//! Interactive login screen
//!
//! A prompt loop over injected reader/writer handles, so tests can drive
//! it with in-memory buffers while production runs it over stdin/stdout.
//! Submissions are sequential by construction, which is this layer's
//! protection against double submission.

use crate::flow::{LoginFlow, LoginOutcome};
use authc_domain::constants::{FIELD_EMAIL, FIELD_PASSWORD};
use authc_domain::entities::AccountModel;
use authc_domain::error::Result;
use std::io::{BufRead, Write};
use tracing::info;

/// Terminal login screen
pub struct LoginScreen<R, W> {
    reader: R,
    writer: W,
    flow: LoginFlow,
}

impl<R: BufRead, W: Write> LoginScreen<R, W> {
    /// Create a screen over the given handles and flow
    pub fn new(reader: R, writer: W, flow: LoginFlow) -> Self {
        Self {
            reader,
            writer,
            flow,
        }
    }

    /// Run the prompt loop until a login succeeds or input ends
    ///
    /// Re-prompts after validation errors and failed attempts. Returns the
    /// authenticated account, or `None` when the reader reaches EOF.
    pub async fn run(&mut self) -> Result<Option<AccountModel>> {
        loop {
            let Some(email) = self.prompt("Email: ")? else {
                return Ok(None);
            };
            let Some(password) = self.prompt("Password: ")? else {
                return Ok(None);
            };

            let mut form = self.flow.form();
            form.set_email(email);
            form.set_password(password);

            match self.flow.submit(&form).await {
                LoginOutcome::Authenticated(account) => {
                    info!(email = %form.email(), "login succeeded");
                    writeln!(self.writer, "Logged in.")?;
                    return Ok(Some(account));
                }
                LoginOutcome::Invalid {
                    email_error,
                    password_error,
                } => {
                    if let Some(message) = email_error {
                        writeln!(self.writer, "{FIELD_EMAIL}: {message}")?;
                    }
                    if let Some(message) = password_error {
                        writeln!(self.writer, "{FIELD_PASSWORD}: {message}")?;
                    }
                }
                LoginOutcome::CredentialsRejected(message) | LoginOutcome::Failed(message) => {
                    writeln!(self.writer, "{message}")?;
                }
            }
        }
    }

    /// Print a prompt and read one trimmed line; `None` on EOF
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.writer, "{label}")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
