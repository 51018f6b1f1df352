use clap::Subcommand;

mod issue;
mod secret;

#[derive(Debug, Subcommand)]
pub(crate) enum TokenCommand {
    /// Sign a bearer token for an existing user
    Issue(issue::IssueTokenArgs),

    /// Print a freshly generated signing secret
    Secret,
}

pub(crate) async fn run(command: TokenCommand) -> Result<(), String> {
    match command {
        TokenCommand::Issue(args) => issue::run(args).await,
        TokenCommand::Secret => {
            secret::run();

            Ok(())
        }
    }
}
