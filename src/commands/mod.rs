use crate::cli::{CategoryCmd, Cmd};
use crate::core::storage::AppCtx;

pub mod category;
pub mod copy;
pub mod delete;
pub mod edit;
pub mod favorite;
pub mod get;
pub mod list;
pub mod new;
pub mod optimize;
pub mod search;
pub mod stats;

/// Dispatches the parsed command to the appropriate handler.
pub async fn dispatch(command: Cmd, ctx: &AppCtx) -> Result<(), String> {
    match command {
        Cmd::List {
            category,
            favorites,
            tag,
        } => list::run(ctx, category.as_deref(), favorites, tag.as_deref()),
        Cmd::New => new::run(ctx),
        Cmd::Get { id } => get::run(ctx, &id),
        Cmd::Edit { id } => edit::run(ctx, &id),
        Cmd::Delete { id } => delete::run(ctx, &id),
        Cmd::Favorite { id } => favorite::run(ctx, &id),
        Cmd::Search {
            query,
            category,
            favorites,
            tag,
        } => search::run(ctx, &query, category.as_deref(), favorites, tag.as_deref()),
        Cmd::Copy { id } => copy::run(ctx, &id),
        Cmd::Optimize { id, dry_run } => optimize::run(ctx, &id, dry_run).await,
        Cmd::Category(category_cmd) => match category_cmd {
            CategoryCmd::List => category::list::run(ctx),
            CategoryCmd::Add { name } => category::add::run(ctx, &name),
        },
        Cmd::Stats => stats::run(ctx),
    }
}
