//! Command-line client: argument parsing, context setup and printing.
//! Everything here talks to the library only through [`linkdb::api`].

pub mod args;
mod print;

use args::{AttrCommand, Cli, Commands, SearchArgs};
use directories::ProjectDirs;
use linkdb::api::{ConfigAction, LinkDbApi, LinkUpdate, NewLink, SearchRequest};
use linkdb::commands::helpers::parse_attribute_pairs;
use linkdb::config::LinkDbConfig;
use linkdb::error::{LinkDbError, Result};
use linkdb::store::fs::FileStore;
use print::{print_config, print_full_links, print_links, print_messages};
use std::path::PathBuf;

pub struct AppContext {
    api: LinkDbApi<FileStore>,
    config: LinkDbConfig,
}

pub fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = match &cli.db {
        Some(dir) => dir.clone(),
        None => default_data_dir()?,
    };
    let config = LinkDbConfig::load(&data_dir)?;
    tracing::debug!(data_dir = %data_dir.display(), ?config, "initialised context");

    let store = FileStore::new(data_dir.clone()).with_file_name(&config.file_name);
    Ok(AppContext {
        api: LinkDbApi::new(store, data_dir),
        config,
    })
}

fn default_data_dir() -> Result<PathBuf> {
    ProjectDirs::from("org", "linkdb", "linkdb")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| LinkDbError::Config("Could not determine data directory".into()))
}

pub fn dispatch(ctx: &mut AppContext, command: Option<Commands>) -> Result<()> {
    match command {
        Some(Commands::Add {
            location,
            name,
            description,
            tags,
            attributes,
        }) => handle_add(ctx, location, name, description, tags, attributes),
        Some(Commands::List) | None => handle_list(ctx),
        Some(Commands::View { ids }) => handle_view(ctx, ids),
        Some(Commands::Delete { ids }) => handle_delete(ctx, ids),
        Some(Commands::Update {
            id,
            location,
            name,
            description,
        }) => handle_update(
            ctx,
            id,
            LinkUpdate {
                location,
                name,
                description,
            },
        ),
        Some(Commands::Tag { id, tags }) => handle_tag(ctx, id, tags),
        Some(Commands::Untag { id, tags, all }) => handle_untag(ctx, id, tags, all),
        Some(Commands::Attr(cmd)) => handle_attr(ctx, cmd),
        Some(Commands::Search(args)) => handle_search(ctx, args),
        Some(Commands::Config { key, value }) => handle_config(ctx, key, value),
    }
}

fn handle_add(
    ctx: &mut AppContext,
    location: String,
    name: String,
    description: String,
    tags: Vec<String>,
    attributes: Vec<String>,
) -> Result<()> {
    let link = NewLink {
        location,
        name,
        description,
        tags,
        attributes: parse_attribute_pairs(&attributes)?,
    };
    let result = ctx.api.add_link(link)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.list_links()?;
    print_links(&result.listed_links);
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &mut AppContext, ids: Vec<String>) -> Result<()> {
    let result = ctx.api.view_links(&ids)?;
    print_full_links(&result.listed_links);
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, ids: Vec<String>) -> Result<()> {
    let result = ctx.api.delete_links(&ids)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_update(ctx: &mut AppContext, id: String, update: LinkUpdate) -> Result<()> {
    let result = ctx.api.update_link(&id, update)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_tag(ctx: &mut AppContext, id: String, tags: Vec<String>) -> Result<()> {
    let result = ctx.api.tag_links(&[id], &tags)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_untag(ctx: &mut AppContext, id: String, tags: Vec<String>, all: bool) -> Result<()> {
    let result = if all {
        ctx.api.clear_tags(&[id])?
    } else {
        ctx.api.untag_links(&[id], &tags)?
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_attr(ctx: &mut AppContext, cmd: AttrCommand) -> Result<()> {
    let result = match cmd {
        AttrCommand::Set { id, pairs } => ctx.api.set_attributes(&id, &pairs)?,
        AttrCommand::Unset { id, keys } => ctx.api.unset_attributes(&id, &keys)?,
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &mut AppContext, args: SearchArgs) -> Result<()> {
    let mut options = ctx.config.search_options();
    if args.ignore_case {
        options.ignore_case = true;
    }
    if args.case_sensitive {
        options.ignore_case = false;
    }
    if args.full {
        options.match_full_string = true;
    }
    if args.partial {
        options.match_full_string = false;
    }

    let request = SearchRequest {
        terms: args.terms,
        location: args.location,
        name: args.name,
        description: args.description,
        tags: args.tags,
        attributes: parse_attribute_pairs(&args.attributes)?,
        match_any: args.any,
        options,
    };
    let result = ctx.api.search_links(&request)?;
    print_links(&result.listed_links);
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        print_config(config);
    }
    print_messages(&result.messages);
    Ok(())
}
