use clap::Args;
use storefront_app::database;

use super::args::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct MigrateArgs {
    #[command(flatten)]
    database: DatabaseArgs,
}

pub(crate) async fn run(args: MigrateArgs) -> Result<(), String> {
    let db = args.database.connect().await?;

    database::migrate(db.pool())
        .await
        .map_err(|error| format!("failed to apply migrations: {error}"))?;

    let applied = database::MIGRATOR.iter().count();

    println!("migrations: {applied} known, database is up to date");

    Ok(())
}
