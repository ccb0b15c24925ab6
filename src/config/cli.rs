use super::ClientConfig;
use crate::core::router::RoutingMode;
use crate::domain::model::{Pagination, ProductType};
use crate::utils::error::{ClientError, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "activation-cli")]
#[command(about = "Command-line client for the activation code and payment platform")]
pub struct Cli {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Args)]
pub struct ConnectionArgs {
    #[arg(long, help = "Backend base URL (default: $ACTIVATION_API_BASE_URL or http://localhost:8000)")]
    pub base_url: Option<String>,

    #[arg(long, help = "TOML file with client settings")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Bearer token sent as Authorization header")]
    pub token: Option<String>,

    #[arg(long = "header", value_name = "NAME=VALUE", help = "Extra header, repeatable")]
    pub headers: Vec<String>,
}

impl ConnectionArgs {
    /// File (or environment) first, then command-line overrides.
    pub fn client_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.config {
            Some(path) => ClientConfig::from_file(path)?,
            None => ClientConfig::from_env(),
        };

        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(token) = &self.token {
            config = config.with_bearer_token(token.clone());
        }
        for raw in &self.headers {
            let (name, value) = parse_header(raw)?;
            config = config.with_header(name, value);
        }

        Ok(config)
    }
}

fn parse_header(raw: &str) -> Result<(String, String)> {
    match raw.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(ClientError::InvalidConfigValue {
            field: "header".to_string(),
            value: raw.to_string(),
            reason: "expected NAME=VALUE".to_string(),
        }),
    }
}

#[derive(Debug, Clone, Copy, Args)]
pub struct PageArgs {
    #[arg(long, default_value = "0")]
    pub skip: u64,

    #[arg(long, default_value = "100")]
    pub limit: u64,
}

impl From<PageArgs> for Pagination {
    fn from(args: PageArgs) -> Self {
        Pagination::new(args.skip, args.limit)
    }
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Activation code operations
    #[command(subcommand)]
    Activation(ActivationCommand),
    /// Hardware binding operations
    #[command(subcommand)]
    Hardware(HardwareCommand),
    /// Payment operations
    #[command(subcommand)]
    Payment(PaymentCommand),
    /// Product catalogue
    #[command(subcommand)]
    Products(ProductsCommand),
    /// Login, registration and current user
    #[command(subcommand)]
    Auth(AuthCommand),
    /// Admin views
    #[command(subcommand)]
    Admin(AdminCommand),
    /// Multi-step license activation on this machine
    #[command(subcommand)]
    License(LicenseCommand),
    /// Resolve a page location against the route table
    Routes {
        location: String,
        #[arg(long, value_enum, default_value = "history")]
        mode: RoutingMode,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum ActivationCommand {
    Generate {
        #[arg(long, help = "JSON request body")]
        body: String,
    },
    Verify {
        code: String,
        #[arg(long)]
        user_id: Option<String>,
    },
    Use {
        code: String,
        #[arg(long)]
        user_id: Option<String>,
    },
    UseDetailed {
        #[arg(long, help = "JSON request body")]
        body: String,
    },
    ByProduct {
        product_id: String,
        #[command(flatten)]
        page: PageArgs,
    },
    Stats {
        #[arg(long)]
        product_id: Option<String>,
    },
    Records {
        code: String,
    },
    Products,
    SecurityInfo,
}

#[derive(Debug, Clone, Subcommand)]
pub enum HardwareCommand {
    /// Print this machine's fingerprint
    Fingerprint,
    /// Ask the backend to fingerprint its own host
    RemoteFingerprint,
    BindingInfo {
        code: String,
    },
    Unbind {
        code: String,
        #[arg(long)]
        admin_key: String,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum PaymentCommand {
    Create {
        #[arg(long, help = "JSON request body")]
        body: String,
        #[arg(long, help = "Use the create-with-product endpoint")]
        with_product: bool,
    },
    Status {
        payment_id: String,
    },
    Success {
        payment_id: String,
    },
    Refund {
        payment_id: String,
        #[arg(long, default_value = "用户申请退款")]
        reason: String,
    },
    Statistics,
    List {
        #[command(flatten)]
        page: PageArgs,
        #[arg(long)]
        status: Option<String>,
    },
    Methods,
}

#[derive(Debug, Clone, Subcommand)]
pub enum ProductsCommand {
    List,
    Create {
        #[arg(long, help = "JSON request body")]
        body: String,
    },
    Update {
        id: String,
        #[arg(long, help = "JSON request body")]
        body: String,
    },
    Delete {
        id: String,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum AuthCommand {
    Login {
        username: String,
        #[arg(long)]
        password: String,
    },
    Register {
        #[arg(long, help = "JSON request body")]
        body: String,
    },
    Me,
}

#[derive(Debug, Clone, Subcommand)]
pub enum AdminCommand {
    Codes {
        #[command(flatten)]
        page: PageArgs,
    },
    Payments {
        #[command(flatten)]
        page: PageArgs,
    },
    Stats,
}

#[derive(Debug, Clone, Subcommand)]
pub enum LicenseCommand {
    /// Verify then redeem a software code
    Software {
        code: String,
        #[arg(long)]
        user_id: Option<String>,
    },
    /// Bind a code to this machine
    Bind {
        code: String,
        #[arg(long)]
        user_id: Option<String>,
    },
    /// Check a hardware-bound code against this machine
    Check {
        code: String,
    },
    /// Unified activation endpoint
    Unified {
        code: String,
        #[arg(long, value_enum)]
        product_type: ProductType,
        #[arg(long)]
        user_id: Option<String>,
        #[arg(long, help = "Redeem or bind instead of only checking")]
        bind: bool,
    },
}
