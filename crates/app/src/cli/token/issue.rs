use clap::Args;
use storefront_app::{
    auth::{AuthService, Passwords},
    domain::users::{PgUsersService, UsersService, records::UserId},
};

use crate::cli::args::{DatabaseArgs, TokenSigningArgs};

#[derive(Debug, Args)]
pub(crate) struct IssueTokenArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    #[command(flatten)]
    signing: TokenSigningArgs,

    /// Id of the user the token identifies
    #[arg(long)]
    user_id: i64,
}

pub(crate) async fn run(args: IssueTokenArgs) -> Result<(), String> {
    let auth = args.signing.auth_service()?;
    let db = args.database.connect().await?;

    // Only the lookup runs here, so the pepper is irrelevant.
    let users = PgUsersService::new(db, Passwords::new(String::new()));

    let user = users
        .get_user(UserId::from_i64(args.user_id))
        .await
        .map_err(|error| format!("failed to load user: {error}"))?
        .ok_or_else(|| format!("user {} does not exist", args.user_id))?;

    let issued = auth
        .issue_token(user.id)
        .await
        .map_err(|error| format!("failed to issue token: {error}"))?;

    println!("user_id: {}", user.id);
    println!("token_expires_at: {}", issued.expires_at);
    println!("api_token: {}", issued.token);

    Ok(())
}
