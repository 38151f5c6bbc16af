//! authc - Entry Point
//!
//! Binary entry point for the authc login client. Lives in the `authc`
//! facade crate next to the library of the same name.
//!
//! ## Operating Modes
//!
//! | Mode | Command | Description |
//! |------|---------|-------------|
//! | **Interactive** | `authc` | Prompts for email and password until a login succeeds |
//! | **One-shot** | `authc --email a@b.com --password ...` | Single attempt; prints the access token |

use clap::Parser;

/// Command line interface for the authc login client
#[derive(Parser, Debug)]
#[command(name = "authc")]
#[command(about = "authc - Login client for the account service")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Email to authenticate with
    ///
    /// When a password is also provided, authc performs a single
    /// non-interactive attempt instead of prompting.
    #[arg(long)]
    pub email: Option<String>,

    /// Password to authenticate with
    #[arg(long, env = "AUTHC_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

/// Main entry point for the authc login client
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    authc_cli::run(cli.config.as_deref(), cli.email, cli.password).await
}
