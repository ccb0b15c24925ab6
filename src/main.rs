use activation_client::config::cli::{
    ActivationCommand, AdminCommand, AuthCommand, Cli, Command, ConnectionArgs, HardwareCommand,
    LicenseCommand, PaymentCommand, ProductsCommand,
};
use activation_client::core::fingerprint::fingerprint;
use activation_client::core::router::{Authorizer, RouteTable, RoutingMode, SessionAuthorizer};
use activation_client::domain::model::HardwareUnbindRequest;
use activation_client::utils::error::{ClientError, ErrorSeverity};
use activation_client::utils::logger;
use activation_client::utils::validation::{validate_required_field, Validate};
use activation_client::{Api, LicenseActivator, SystemProbe};
use clap::Parser;
use serde::Serialize;
use serde_json::{json, Value};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting activation-cli");
    if cli.verbose {
        tracing::debug!("CLI args: {:?}", cli);
    }

    match run(cli).await {
        Ok(output) => print_json(&output),
        Err(e) => {
            tracing::error!(
                "❌ Request failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            std::process::exit(exit_code);
        }
    }
}

fn connect(connection: &ConnectionArgs) -> Result<Api, ClientError> {
    let config = connection.client_config()?;
    config.validate()?;
    tracing::debug!("Using backend at {}", config.base_url);
    Api::from_config(config)
}

async fn run(cli: Cli) -> Result<Value, ClientError> {
    let Cli {
        connection,
        command,
        ..
    } = cli;

    match command {
        // Offline; no backend config needed.
        Command::Routes { location, mode } => {
            Ok(describe_route(&location, mode, connection.token))
        }
        Command::Activation(cmd) => {
            let api = connect(&connection)?;
            let activation = api.activation();
            match cmd {
                ActivationCommand::Generate { body } => {
                    activation.generate_codes(&parse_body(&body)?).await
                }
                ActivationCommand::Verify { code, user_id } => {
                    activation.verify_code(&code, user_id.as_deref()).await
                }
                ActivationCommand::Use { code, user_id } => {
                    activation.use_code(&code, user_id.as_deref()).await
                }
                ActivationCommand::UseDetailed { body } => {
                    activation.use_code_with_details(&parse_body(&body)?).await
                }
                ActivationCommand::ByProduct { product_id, page } => {
                    activation.get_codes_by_product(&product_id, page.into()).await
                }
                ActivationCommand::Stats { product_id } => {
                    activation.get_stats(product_id.as_deref()).await
                }
                ActivationCommand::Records { code } => activation.get_records(&code).await,
                ActivationCommand::Products => activation.get_products().await,
                ActivationCommand::SecurityInfo => activation.get_security_info().await,
            }
        }
        Command::Hardware(HardwareCommand::Fingerprint) => {
            Ok(json!({ "fingerprint": fingerprint(&SystemProbe::new())? }))
        }
        Command::Hardware(HardwareCommand::RemoteFingerprint) => {
            let api = connect(&connection)?;
            api.hardware().generate_fingerprint().await
        }
        Command::Hardware(HardwareCommand::BindingInfo { code }) => {
            let api = connect(&connection)?;
            api.hardware().get_binding_info(&code).await
        }
        Command::Hardware(HardwareCommand::Unbind { code, admin_key }) => {
            let api = connect(&connection)?;
            api.hardware()
                .unbind(&HardwareUnbindRequest {
                    activation_code: code,
                    admin_key,
                })
                .await
        }
        Command::Payment(cmd) => {
            let api = connect(&connection)?;
            let payment = api.payment();
            match cmd {
                PaymentCommand::Create { body, with_product } => {
                    let body = parse_body(&body)?;
                    if with_product {
                        payment.create_payment_with_product(&body).await
                    } else {
                        payment.create_payment(&body).await
                    }
                }
                PaymentCommand::Status { payment_id } => {
                    payment.get_payment_status(&payment_id).await
                }
                PaymentCommand::Success { payment_id } => {
                    payment.get_payment_success_info(&payment_id).await
                }
                PaymentCommand::Refund { payment_id, reason } => {
                    payment.refund_payment(&payment_id, &reason).await
                }
                PaymentCommand::Statistics => payment.get_payment_statistics().await,
                PaymentCommand::List { page, status } => {
                    payment.get_payment_list(page.into(), status.as_deref()).await
                }
                PaymentCommand::Methods => payment.get_payment_methods().await,
            }
        }
        Command::Products(cmd) => {
            let api = connect(&connection)?;
            let products = api.products();
            match cmd {
                ProductsCommand::List => products.get_products().await,
                ProductsCommand::Create { body } => {
                    products.create_product(&parse_body(&body)?).await
                }
                ProductsCommand::Update { id, body } => {
                    products.update_product(&id, &parse_body(&body)?).await
                }
                ProductsCommand::Delete { id } => products.delete_product(&id).await,
            }
        }
        Command::Auth(cmd) => {
            let api = connect(&connection)?;
            let auth = api.auth();
            match cmd {
                AuthCommand::Login { username, password } => auth.login(&username, &password).await,
                AuthCommand::Register { body } => auth.register(&parse_body(&body)?).await,
                AuthCommand::Me => {
                    validate_required_field("token", &api.client().config().bearer_token)?;
                    auth.get_current_user().await
                }
            }
        }
        Command::Admin(cmd) => {
            let api = connect(&connection)?;
            let admin = api.admin();
            match cmd {
                AdminCommand::Codes { page } => admin.get_all_codes(page.into()).await,
                AdminCommand::Payments { page } => admin.get_all_payments(page.into()).await,
                AdminCommand::Stats => admin.get_system_stats().await,
            }
        }
        Command::License(cmd) => {
            let api = connect(&connection)?;
            let probe = SystemProbe::new();
            let activator = LicenseActivator::new(&api, &probe);
            let outcome = match cmd {
                LicenseCommand::Software { code, user_id } => {
                    activator.activate_software(&code, user_id.as_deref()).await?
                }
                LicenseCommand::Bind { code, user_id } => {
                    activator
                        .activate_hardware_bound(&code, user_id.as_deref())
                        .await?
                }
                LicenseCommand::Check { code } => activator.verify_hardware_bound(&code).await?,
                LicenseCommand::Unified {
                    code,
                    product_type,
                    user_id,
                    bind,
                } => {
                    if bind {
                        activator
                            .unified_bind(&code, product_type, user_id.as_deref())
                            .await?
                    } else {
                        activator
                            .unified_activation(&code, product_type, user_id.as_deref())
                            .await?
                    }
                }
            };
            to_value(&outcome)
        }
    }
}

fn describe_route(location: &str, mode: RoutingMode, token: Option<String>) -> Value {
    let table = RouteTable::standard(mode);
    let session = SessionAuthorizer::new(token);
    match table.resolve(location) {
        Some(route) => json!({
            "path": route.path,
            "href": table.href(route.path),
            "view": route.view.to_string(),
            "requires_auth": route.requires_auth,
            "access": format!("{:?}", session.authorize(route)),
        }),
        None => json!({ "path": location, "view": null }),
    }
}

fn parse_body(raw: &str) -> Result<Value, ClientError> {
    serde_json::from_str(raw).map_err(|e| ClientError::InvalidConfigValue {
        field: "body".to_string(),
        value: raw.to_string(),
        reason: e.to_string(),
    })
}

fn to_value<T: Serialize>(value: &T) -> Result<Value, ClientError> {
    serde_json::to_value(value).map_err(ClientError::Encode)
}

fn print_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{}", text),
        Err(_) => println!("{}", value),
    }
}
