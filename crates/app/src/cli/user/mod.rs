use clap::Subcommand;

mod create;

#[derive(Debug, Subcommand)]
pub(crate) enum UserCommand {
    /// Create a user and print a bearer token for it
    Create(create::CreateUserArgs),
}

pub(crate) async fn run(command: UserCommand) -> Result<(), String> {
    match command {
        UserCommand::Create(args) => create::run(args).await,
    }
}
