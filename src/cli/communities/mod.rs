//! Community commands

use clap::Args;

use super::print_json;
use crate::infrastructure::community::CreateCommunityRequest;
use crate::AppServices;

/// Arguments for `create-community`
#[derive(Args, Debug, Clone)]
pub struct CreateCommunityArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub district: String,

    /// User id of the creating administrator
    #[arg(long)]
    pub admin_user_id: String,
}

/// Arguments for `add-community-admins`
#[derive(Args, Debug, Clone)]
pub struct AddAdminsArgs {
    pub community_id: String,

    /// User ids to register as administrators
    #[arg(required = true)]
    pub admin_ids: Vec<String>,
}

pub async fn create(services: &AppServices, args: CreateCommunityArgs) -> anyhow::Result<()> {
    let community = services
        .communities
        .create_community(CreateCommunityRequest {
            name: args.name,
            district: args.district,
            admin_user_id: args.admin_user_id,
        })
        .await?;

    print_json(&community)
}

pub async fn add_admins(services: &AppServices, args: AddAdminsArgs) -> anyhow::Result<()> {
    match services
        .communities
        .add_admins(&args.community_id, args.admin_ids)
        .await?
    {
        Some(community) => print_json(&community),
        None => anyhow::bail!("community '{}' not found", args.community_id),
    }
}
