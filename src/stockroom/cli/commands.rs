//! Dispatch for the CLI: parse arguments, build the context, call the API
//! and hand the `CmdResult` to the printers.

use super::print::{
    print_config, print_content, print_fields, print_lines, print_messages, print_paths,
};
use super::setup::{Cli, Commands, RecordAction};
use clap::Parser;
use stockroom::api::{ConfigAction, StockroomApi};
use stockroom::context::initialize;
use stockroom::error::{Result, StockroomError};
use stockroom::model::{RecordKind, Scope};
use stockroom::store::fs::FileStore;
use std::path::PathBuf;

struct AppContext {
    api: StockroomApi<FileStore>,
    scope: Scope,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let Some(command) = cli.command else {
        return Ok(());
    };

    let file_override = command
        .kind()
        .and_then(|(kind, args)| args.file.clone().map(|f| (kind, f)));
    let ctx = init_context(cli.global, file_override)?;

    if let Some((kind, args)) = command.kind() {
        return match &args.action {
            RecordAction::Add { fields } => handle_add(&ctx, kind, fields.clone()),
            RecordAction::List => handle_list(&ctx, kind),
            RecordAction::Search { term } => handle_search(&ctx, kind, &term.join(" ")),
            RecordAction::Path => handle_path(&ctx, kind),
            RecordAction::Fields => handle_fields(&ctx, kind),
        };
    }

    match command {
        Commands::Init => handle_init(&ctx),
        Commands::Config { key, value } => handle_config(&ctx, key, value),
        Commands::Product(_) | Commands::Stock(_) | Commands::Supplier(_) => Ok(()),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env = env_logger::Env::default().default_filter_or(default_level);
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}

fn init_context(
    use_global: bool,
    file_override: Option<(RecordKind, PathBuf)>,
) -> Result<AppContext> {
    let cwd = std::env::current_dir().map_err(|e| StockroomError::io(".", e))?;
    let ctx = initialize(&cwd, use_global, file_override)?;
    Ok(AppContext {
        api: ctx.api,
        scope: ctx.scope,
    })
}

fn handle_add(ctx: &AppContext, kind: RecordKind, fields: Vec<String>) -> Result<()> {
    let result = ctx.api.add_record(kind, fields)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, kind: RecordKind) -> Result<()> {
    let result = ctx.api.list_records(kind)?;
    if let Some(content) = &result.content {
        print_content(content);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &AppContext, kind: RecordKind, term: &str) -> Result<()> {
    let result = ctx.api.search_records(kind, term)?;
    print_lines(&result.lines);
    print_messages(&result.messages);
    Ok(())
}

fn handle_path(ctx: &AppContext, kind: RecordKind) -> Result<()> {
    let result = ctx.api.store_path(kind)?;
    print_paths(&result.store_paths);
    Ok(())
}

fn handle_fields(ctx: &AppContext, kind: RecordKind) -> Result<()> {
    let result = ctx.api.fields(kind)?;
    print_fields(&result.fields);
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.init()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, None) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
        (None, Some(_)) => {
            return Err(StockroomError::Validation(
                "A config key is required when setting a value".to_string(),
            ))
        }
    };

    let result = ctx.api.config(ctx.scope, action)?;
    if let Some(config) = &result.config {
        print_config(config);
    }
    print_messages(&result.messages);
    Ok(())
}
