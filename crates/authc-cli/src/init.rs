//! Client initialization
//!
//! Entry point for the login client: loads configuration, installs
//! logging, builds the object graph, and then either performs one
//! non-interactive attempt (both credentials supplied up front) or runs
//! the interactive screen.

use std::io;
use std::path::Path;

use authc_domain::error::Error;
use authc_infrastructure::config::{AppConfig, ConfigLoader};
use authc_infrastructure::di::{AppContext, init_app};
use authc_infrastructure::logging::init_logging;
use tracing::info;

use crate::flow::LoginFlow;
use crate::form::LoginForm;
use crate::screen::LoginScreen;

/// Run the login client
///
/// When both `email` and `password` are provided the attempt is
/// non-interactive: the access token is printed on success and the domain
/// error is returned on failure. Otherwise the interactive screen prompts
/// until a login succeeds or stdin closes.
pub async fn run(
    config_path: Option<&Path>,
    email: Option<String>,
    password: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path)?;
    init_logging(&config.logging)?;

    info!(url = %config.api.login_url(), "Starting authc login client");
    let context = init_app(config)?;

    match (email, password) {
        (Some(email), Some(password)) => authenticate_once(&context, email, password).await,
        _ => run_interactive(&context).await,
    }
}

/// Load configuration from an optional explicit path
fn load_config(config_path: Option<&Path>) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let loader = match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    Ok(loader.load()?)
}

/// One non-interactive attempt with the supplied credentials
async fn authenticate_once(
    context: &AppContext,
    email: String,
    password: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut form = LoginForm::new(context.validation());
    form.set_email(email);
    form.set_password(password);

    if let Some(message) = form.email_error() {
        return Err(Error::validation("email", message).into());
    }
    if let Some(message) = form.password_error() {
        return Err(Error::validation("password", message).into());
    }

    let account = context.authentication().authenticate(form.params()).await?;
    println!("{}", account.access_token);
    Ok(())
}

/// The interactive prompt loop over stdin/stdout
async fn run_interactive(context: &AppContext) -> Result<(), Box<dyn std::error::Error>> {
    let flow = LoginFlow::new(context.authentication(), context.validation());

    let stdin = io::stdin();
    let mut screen = LoginScreen::new(stdin.lock(), io::stdout(), flow);
    match screen.run().await? {
        Some(account) => {
            println!("{}", account.access_token);
            Ok(())
        }
        None => {
            info!("input closed before a successful login");
            Ok(())
        }
    }
}
