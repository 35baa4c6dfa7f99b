#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use flist_core::{BackendConfig, LocalAuthConfig, UserIdentity};
use tracing_subscriber::EnvFilter;

use crate::context::AppServices;

/// F-list - closet and wishlist catalog
#[derive(Parser, Debug)]
#[command(name = "flist-desktop")]
#[command(about = "F-list - your closet and wishlist in one place")]
struct Args {
    /// Data directory for storage (use different dirs for multiple instances)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Instance name (creates data dir: flist-<name>)
    #[arg(short, long)]
    name: Option<String>,

    /// Display name of the account the local identity provider signs in
    #[arg(long, default_value = "Closet Owner")]
    account_name: String,

    /// Email of the local account
    #[arg(long)]
    account_email: Option<String>,

    /// Behave like a provider whose sign-in overlay is blocked
    #[arg(long)]
    no_popup: bool,

    /// Hostname reported to the identity provider
    #[arg(long, default_value = "localhost")]
    origin: String,

    /// Origins allowed to sign in (repeatable; none means any)
    #[arg(long = "authorized-origin")]
    authorized_origins: Vec<String>,
}

impl Args {
    fn account(&self) -> UserIdentity {
        let key = self.account_email.as_deref().unwrap_or(&self.account_name);
        let uid = format!(
            "local-{}",
            key.to_lowercase()
                .chars()
                .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
                .collect::<String>()
        );

        let identity = UserIdentity::new(uid).with_display_name(&self.account_name);
        match &self.account_email {
            Some(email) => identity.with_email(email),
            None => identity,
        }
    }

    fn auth_config(&self) -> LocalAuthConfig {
        LocalAuthConfig::new(self.account(), &self.origin)
            .with_authorized_origins(self.authorized_origins.clone())
            .with_popup_enabled(!self.no_popup)
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    // Determine data directory and display name
    let (data_dir, display_name) = if let Some(dir) = args.data_dir.clone() {
        let name = dir
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("custom")
            .to_string();
        (dir, name)
    } else if let Some(ref name) = args.name {
        let base = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(format!("flist-{}", name));
        (base, name.clone())
    } else {
        let base = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("flist");
        (base, String::new())
    };

    let backend = BackendConfig::from_env();
    tracing::info!(
        project = %backend.project_id,
        hosted = backend.has_hosted_credentials(),
        "Backend configuration loaded"
    );

    let services = match AppServices::open(&data_dir, args.auth_config()) {
        Ok(services) => services,
        Err(e) => {
            tracing::error!(?data_dir, error = %e, "Failed to open F-list storage");
            std::process::exit(1);
        }
    };

    let title = if !display_name.is_empty() {
        format!("F-list - {}", display_name)
    } else {
        "F-list".to_string()
    };

    tracing::info!("Starting '{}' with data dir: {:?}", display_name, data_dir);

    // Phone-shaped window, like the catalog's mobile layout
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(480.0, 860.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .with_context(services)
        .launch(app::App);
}
