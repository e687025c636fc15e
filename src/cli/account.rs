#![expect(
    clippy::print_stdout,
    reason = "command output is the CLI's user interface"
)]

use clap::{Args, Subcommand};

use eshop_client::{
    account::models::{Credentials, NewAccount},
    api::StorefrontApi as _,
    config::BackendConfig,
    context::AppContext,
};

#[derive(Debug, Args)]
pub(crate) struct AccountCommand {
    #[command(subcommand)]
    command: AccountSubcommand,
}

#[derive(Debug, Subcommand)]
enum AccountSubcommand {
    /// Sign in and print the session token
    Login(LoginArgs),
    /// Create a new account
    Register(RegisterArgs),
    /// Show the authenticated user's profile
    Profile(AuthedArgs),
    /// End the session on the backend
    Logout(AuthedArgs),
}

#[derive(Debug, Args)]
struct LoginArgs {
    #[command(flatten)]
    backend: BackendConfig,

    /// Account email
    #[arg(long)]
    email: String,

    /// Account password
    #[arg(long, env = "ESHOP_PASSWORD", hide_env_values = true)]
    password: String,
}

#[derive(Debug, Args)]
struct RegisterArgs {
    #[command(flatten)]
    backend: BackendConfig,

    /// Display name
    #[arg(long)]
    name: String,

    /// Account email
    #[arg(long)]
    email: String,

    /// Account password
    #[arg(long, env = "ESHOP_PASSWORD", hide_env_values = true)]
    password: String,
}

#[derive(Debug, Args)]
struct AuthedArgs {
    #[command(flatten)]
    backend: BackendConfig,
}

pub(crate) async fn run(command: AccountCommand) -> Result<(), String> {
    match command.command {
        AccountSubcommand::Login(args) => login(args).await,
        AccountSubcommand::Register(args) => register(args).await,
        AccountSubcommand::Profile(args) => profile(args).await,
        AccountSubcommand::Logout(args) => logout(args).await,
    }
}

async fn login(args: LoginArgs) -> Result<(), String> {
    let ctx = AppContext::from_backend_config(&args.backend);

    let payload = ctx
        .api
        .login(Credentials {
            email: args.email,
            password: args.password,
        })
        .await
        .map_err(|error| format!("login failed: {error}"))?;

    println!("user: {} <{}>", payload.user.name, payload.user.email);

    match payload.token {
        Some(token) => {
            println!("token: {token}");
            println!("export ESHOP_API_TOKEN to authenticate later commands");
        }
        None => println!("no token returned"),
    }

    Ok(())
}

async fn register(args: RegisterArgs) -> Result<(), String> {
    let ctx = AppContext::from_backend_config(&args.backend);

    let payload = ctx
        .api
        .register(NewAccount {
            name: args.name,
            email: args.email,
            password: args.password,
        })
        .await
        .map_err(|error| format!("registration failed: {error}"))?;

    println!("registered: {} <{}>", payload.user.name, payload.user.email);

    Ok(())
}

async fn profile(args: AuthedArgs) -> Result<(), String> {
    let ctx = AppContext::from_backend_config(&require_token(args.backend)?);

    let user = ctx
        .api
        .get_profile()
        .await
        .map_err(|error| format!("failed to fetch profile: {error}"))?;

    println!("id: {}", user.id);
    println!("name: {}", user.name);
    println!("email: {}", user.email);

    Ok(())
}

async fn logout(args: AuthedArgs) -> Result<(), String> {
    let ctx = AppContext::from_backend_config(&require_token(args.backend)?);

    ctx.api
        .logout()
        .await
        .map_err(|error| format!("logout failed: {error}"))?;

    println!("logged out");

    Ok(())
}

fn require_token(backend: BackendConfig) -> Result<BackendConfig, String> {
    if backend.token.is_none() {
        return Err("a bearer token is required; pass --token or set ESHOP_API_TOKEN".to_string());
    }

    Ok(backend)
}
