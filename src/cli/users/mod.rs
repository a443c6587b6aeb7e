//! User commands

use clap::Args;
use tracing::warn;

use super::print_json;
use crate::domain::{UserDto, UserQuery};
use crate::AppServices;

/// Arguments for `create-user`
#[derive(Args, Debug, Clone)]
pub struct CreateUserArgs {
    /// External user identifier
    #[arg(long)]
    pub user_id: String,

    /// Display name
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub email: String,

    /// Plaintext password, hashed before it is stored
    #[arg(long)]
    pub password: String,
}

/// Arguments for `user-details`
#[derive(Args, Debug, Clone)]
pub struct UserDetailsArgs {
    /// External user identifier
    pub user_id: String,
}

/// Arguments for `list-users`
#[derive(Args, Debug, Clone)]
pub struct ListUsersArgs {
    #[arg(long, default_value_t = 50)]
    pub limit: usize,

    #[arg(long, default_value_t = 0)]
    pub offset: usize,
}

pub async fn create(services: &AppServices, args: CreateUserArgs) -> anyhow::Result<()> {
    let request = UserDto::new_request(args.user_id, args.name, args.email, args.password);
    let email = request.email.clone();

    match services.users.create_user(request).await? {
        Some(user) => print_json(&user),
        None => {
            warn!(email = %email, "User not created");
            anyhow::bail!("a user with email '{}' already exists", email)
        }
    }
}

pub async fn details(services: &AppServices, args: UserDetailsArgs) -> anyhow::Result<()> {
    match services.users.get_user_details(&args.user_id).await? {
        Some(user) => print_json(&user),
        None => anyhow::bail!("user '{}' not found", args.user_id),
    }
}

pub async fn list(services: &AppServices, args: ListUsersArgs) -> anyhow::Result<()> {
    let query = UserQuery::new()
        .with_limit(args.limit)
        .with_offset(args.offset);

    let users = services.users.list_users(&query).await?;
    print_json(&users)
}
