//! CLI module for the MyHome user service
//!
//! Provides administrative subcommands:
//! - `migrate`: apply the PostgreSQL schema
//! - `create-user`, `user-details`, `list-users`: user accounts
//! - `create-community`, `add-community-admins`: communities

pub mod communities;
pub mod migrate;
pub mod users;

use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::infrastructure::logging;
use crate::AppServices;

/// MyHome users - manage user accounts and community administrators
#[derive(Parser, Debug)]
#[command(name = "myhome-users")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Apply pending database migrations
    Migrate,

    /// Create a user unless the email is already registered
    CreateUser(users::CreateUserArgs),

    /// Show a user and the communities they administer
    UserDetails(users::UserDetailsArgs),

    /// List users
    ListUsers(users::ListUsersArgs),

    /// Create a community administered by the given user
    CreateCommunity(communities::CreateCommunityArgs),

    /// Add administrators to an existing community
    AddCommunityAdmins(communities::AddAdminsArgs),
}

/// Run the parsed command
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config()?;

    match cli.command {
        Command::Migrate => migrate::run(&config).await,
        Command::CreateUser(args) => users::create(&bootstrap(&config).await?, args).await,
        Command::UserDetails(args) => users::details(&bootstrap(&config).await?, args).await,
        Command::ListUsers(args) => users::list(&bootstrap(&config).await?, args).await,
        Command::CreateCommunity(args) => {
            communities::create(&bootstrap(&config).await?, args).await
        }
        Command::AddCommunityAdmins(args) => {
            communities::add_admins(&bootstrap(&config).await?, args).await
        }
    }
}

fn load_config() -> anyhow::Result<AppConfig> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    logging::init_logging(&config.logging);

    Ok(config)
}

async fn bootstrap(config: &AppConfig) -> anyhow::Result<AppServices> {
    Ok(crate::create_app_services(config).await?)
}

/// Print a value as pretty JSON on stdout
fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_migrate() {
        let cli = Cli::try_parse_from(["myhome-users", "migrate"]).unwrap();
        assert!(matches!(cli.command, Command::Migrate));
    }

    #[test]
    fn test_parse_create_user() {
        let cli = Cli::try_parse_from([
            "myhome-users",
            "create-user",
            "--user-id",
            "jane-doe",
            "--name",
            "Jane Doe",
            "--email",
            "jane@example.com",
            "--password",
            "secret",
        ])
        .unwrap();

        let Command::CreateUser(args) = cli.command else {
            panic!("expected create-user");
        };
        assert_eq!(args.user_id, "jane-doe");
        assert_eq!(args.email, "jane@example.com");
    }

    #[test]
    fn test_create_user_requires_email() {
        let result = Cli::try_parse_from([
            "myhome-users",
            "create-user",
            "--user-id",
            "jane-doe",
            "--name",
            "Jane Doe",
            "--password",
            "secret",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_add_community_admins() {
        let cli = Cli::try_parse_from([
            "myhome-users",
            "add-community-admins",
            "maple-court",
            "user-1",
            "user-2",
        ])
        .unwrap();

        let Command::AddCommunityAdmins(args) = cli.command else {
            panic!("expected add-community-admins");
        };
        assert_eq!(args.community_id, "maple-court");
        assert_eq!(args.admin_ids, vec!["user-1", "user-2"]);
    }

    #[test]
    fn test_parse_list_users_defaults() {
        let cli = Cli::try_parse_from(["myhome-users", "list-users"]).unwrap();

        let Command::ListUsers(args) = cli.command else {
            panic!("expected list-users");
        };
        assert_eq!(args.limit, 50);
        assert_eq!(args.offset, 0);
    }
}
