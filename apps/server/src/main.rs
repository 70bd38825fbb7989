use std::sync::Arc;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use gymcheck_auth::Argon2Hasher;
use gymcheck_config::load as load_config;
use gymcheck_database::UserRole;
use gymcheck_gateway::create_router;
use gymcheck_runtime::{shutdown_signal, telemetry, BackendServices};
use gymcheck_users::{RegisterRequest, RegisterUseCase};
use tokio::net::TcpListener;
use tracing::info;

#[derive(Parser)]
#[command(name = "gymcheck")]
#[command(about = "Gym check-in backend (serves HTTP by default)")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Apply pending database migrations and exit
    Migrate,
    /// Register an account and promote it to admin
    CreateAdmin(CreateAdminArgs),
}

#[derive(Args)]
struct CreateAdminArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    email: String,
    #[arg(long, env = "GYMCHECK_ADMIN_PASSWORD")]
    password: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    telemetry::init_tracing().context("failed to initialise tracing")?;

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => run_server().await,
        Commands::Migrate => migrate().await,
        Commands::CreateAdmin(args) => create_admin(args).await,
    }
}

async fn initialise() -> anyhow::Result<BackendServices> {
    let config = load_config().context("failed to load configuration")?;
    BackendServices::initialise(&config)
        .await
        .context("failed to initialise backend services")
}

async fn run_server() -> anyhow::Result<()> {
    info!("starting gymcheck backend");

    let config = load_config().context("failed to load configuration")?;
    let services = BackendServices::initialise(&config)
        .await
        .context("failed to initialise backend services")?;

    let app = create_router(services.app_state());

    let address = format!("{}:{}", config.http.address, config.http.port);
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind http listener on {address}"))?;

    info!(%address, "http server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("http server error")?;

    info!("backend shut down");
    Ok(())
}

async fn migrate() -> anyhow::Result<()> {
    // Initialisation already runs the migrator
    initialise().await?;
    println!("Database is up to date");
    Ok(())
}

async fn create_admin(args: CreateAdminArgs) -> anyhow::Result<()> {
    let services = initialise().await?;

    let user = RegisterUseCase::new(services.users.clone(), Arc::new(Argon2Hasher::new()))
        .execute(RegisterRequest {
            name: args.name,
            email: args.email,
            password: args.password,
        })
        .await
        .context("failed to register admin account")?;

    let promoted = services
        .users
        .update_role(&user.id, UserRole::Admin)
        .await
        .context("failed to promote account")?;
    anyhow::ensure!(promoted, "account {} vanished before promotion", user.id);

    info!(user_id = %user.id, "admin account created");
    println!("Created admin {} ({})", user.email, user.id);
    Ok(())
}
