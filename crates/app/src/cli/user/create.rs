use clap::Args;
use storefront_app::{
    auth::{AuthService, Passwords},
    domain::users::{PgUsersService, UsersService, data::NewUser},
};

use crate::cli::args::{DatabaseArgs, TokenSigningArgs};

#[derive(Debug, Args)]
pub(crate) struct CreateUserArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    #[command(flatten)]
    signing: TokenSigningArgs,

    /// Server-wide secret appended to passwords before hashing
    #[arg(long, env = "PASSWORD_PEPPER", hide_env_values = true)]
    password_pepper: String,

    #[arg(long)]
    username: String,

    #[arg(long)]
    first_name: String,

    #[arg(long)]
    last_name: String,

    #[arg(long, env = "STOREFRONT_USER_PASSWORD", hide_env_values = true)]
    password: String,
}

pub(crate) async fn run(args: CreateUserArgs) -> Result<(), String> {
    if args.password.is_empty() {
        return Err("password cannot be empty".to_string());
    }

    let auth = args.signing.auth_service()?;
    let db = args.database.connect().await?;
    let users = PgUsersService::new(db, Passwords::new(args.password_pepper));

    let user = users
        .create_user(NewUser {
            username: args.username,
            first_name: args.first_name,
            last_name: args.last_name,
            password: args.password,
        })
        .await
        .map_err(|error| format!("failed to create user: {error}"))?;

    let issued = auth
        .issue_token(user.id)
        .await
        .map_err(|error| format!("failed to issue token: {error}"))?;

    println!("user_id: {}", user.id);
    println!("username: {}", user.username);
    println!("token_expires_at: {}", issued.expires_at);
    println!("api_token: {}", issued.token);

    Ok(())
}
