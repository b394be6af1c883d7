//! Bootstrap an admin account.
//!
//! Creates the user when the username is free; otherwise resets the
//! password, promotes the account to `admin` and unlocks it.

use anyhow::{bail, Context};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use campus_api::auth::password::{hash_password, validate_password_strength, MIN_PASSWORD_LENGTH};
use campus_core::roles::ROLE_ADMIN;
use campus_db::models::user::CreateUser;
use campus_db::repositories::{RoleRepo, UserRepo};

#[derive(Parser, Debug)]
#[command(name = "create-admin")]
#[command(about = "Create or reset an admin account", long_about = None)]
struct Args {
    #[arg(long, value_name = "USERNAME")]
    username: String,

    /// Falls back to `ADMIN_PASSWORD` so it can stay out of shell history.
    #[arg(long, env = "ADMIN_PASSWORD", hide_env_values = true)]
    password: String,

    /// Required when the account does not exist yet.
    #[arg(long, value_name = "EMAIL")]
    email: Option<String>,

    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "create_admin=info,campus_db=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let username = args.username.trim();
    if username.is_empty() {
        bail!("--username must not be blank");
    }
    if let Err(msg) = validate_password_strength(&args.password, MIN_PASSWORD_LENGTH) {
        bail!(msg);
    }

    let pool = campus_db::create_pool(&args.database_url)
        .await
        .context("Failed to connect to database")?;
    campus_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    let role = RoleRepo::find_by_name(&pool, ROLE_ADMIN)
        .await?
        .with_context(|| format!("Role '{ROLE_ADMIN}' is missing; migrations seed it"))?;
    let password_hash = hash_password(&args.password)
        .map_err(|e| anyhow::anyhow!("Password hashing error: {e}"))?;

    match UserRepo::find_by_username(&pool, username).await? {
        Some(existing) => {
            UserRepo::reset_credentials(&pool, existing.id, &password_hash, role.id)
                .await?
                .context("User disappeared while resetting credentials")?;
            tracing::info!(user_id = existing.id, username, "Existing user promoted to admin");
        }
        None => {
            let email = args
                .email
                .as_deref()
                .map(str::trim)
                .filter(|e| !e.is_empty())
                .context("--email is required when creating a new user")?;
            let user = UserRepo::create(
                &pool,
                &CreateUser {
                    username: username.to_string(),
                    email: email.to_string(),
                    password_hash,
                    role_id: role.id,
                },
            )
            .await?;
            tracing::info!(user_id = user.id, username, "Admin user created");
        }
    }

    pool.close().await;
    Ok(())
}
