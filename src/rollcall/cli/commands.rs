//! # CLI Layer
//!
//! This module is **one possible view** for rollcall; it is not the application
//! itself. It is the only place that knows about terminal I/O, argument
//! parsing and exit codes.
//!
//! Each `handle_*` function builds its input, calls one `RollcallApi` method and
//! renders the resulting `CmdResult`. No business rules live here, with one
//! exception: the live-input filters are applied to typed values before they
//! are submitted, the way a form would apply them while the user types.

use super::render::{
    print_messages, render_field_errors, render_student_detail, render_student_list,
    render_text_list,
};
use super::setup::{Cli, Commands, RegisterArgs, UpdateArgs};
use clap::Parser;
use colored::Colorize;
use directories::ProjectDirs;
use rollcall::api::{CmdMessage, CmdResult, ConfigAction, RollcallApi};
use rollcall::clipboard::{copy_to_clipboard, format_for_clipboard};
use rollcall::config::RollcallConfig;
use rollcall::error::{Result, RollcallError};
use rollcall::filter::filter_draft;
use rollcall::logging::init_logging;
use rollcall::model::{StudentDraft, StudentRecord};
use rollcall::store::fs::FileStore;
use std::path::PathBuf;
use tracing::{debug, warn};

struct AppContext {
    api: RollcallApi<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity());

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Login { username, password }) => handle_login(&mut ctx, username, password),
        Some(Commands::Logout) => handle_logout(&mut ctx),
        Some(Commands::List { search }) => handle_list(&mut ctx, search),
        Some(Commands::Search { term }) => handle_list(&mut ctx, Some(term)),
        Some(Commands::Show { id }) => handle_show(&mut ctx, id),
        Some(Commands::Register(args)) => handle_register(&mut ctx, args),
        Some(Commands::Update { id, fields }) => handle_update(&mut ctx, id, fields),
        Some(Commands::Delete { id }) => handle_delete(&mut ctx, id),
        Some(Commands::Copy { id }) => handle_copy(&mut ctx, id),
        Some(Commands::Courses) => handle_courses(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        None => handle_default(&mut ctx),
    }
}

/// Prints an error the way the user needs to see it. Validation failures are
/// expanded to one line per field.
pub fn report_error(error: &RollcallError) {
    match error.field_errors() {
        Some(errors) => {
            eprintln!("{}", "Please fix the following:".red());
            eprint!("{}", render_field_errors(errors));
        }
        None => eprintln!("Error: {}", error),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = resolve_data_dir(cli.data_dir.clone())?;
    debug!(dir = %data_dir.display(), "using data directory");

    let config = RollcallConfig::load(&data_dir).unwrap_or_else(|e| {
        warn!(error = %e, "unreadable config, using defaults");
        RollcallConfig::default()
    });
    let store = FileStore::new(&data_dir);
    let api = RollcallApi::new(store, config).with_config_dir(&data_dir);

    Ok(AppContext { api })
}

fn resolve_data_dir(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir);
    }
    ProjectDirs::from("com", "rollcall", "rollcall")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| RollcallError::Api("Could not determine a data directory".to_string()))
}

fn handle_login(ctx: &mut AppContext, username: String, password: String) -> Result<()> {
    if !ctx.api.login(username.trim(), &password)? {
        return Err(RollcallError::InvalidCredentials);
    }
    print_messages(&[CmdMessage::success("Logged in as admin")]);
    Ok(())
}

fn handle_logout(ctx: &mut AppContext) -> Result<()> {
    ctx.api.logout()?;
    print_messages(&[CmdMessage::info("Logged out")]);
    Ok(())
}

fn handle_default(ctx: &mut AppContext) -> Result<()> {
    if ctx.api.is_logged_in() {
        handle_list(ctx, None)
    } else {
        println!("Not logged in. Run `rollcall login admin <password>` to start.");
        Ok(())
    }
}

fn handle_list(ctx: &mut AppContext, search: Option<String>) -> Result<()> {
    let result = match search {
        Some(term) => ctx.api.search_students(&term)?,
        None => ctx.api.list_students()?,
    };
    print!("{}", render_student_list(&result.listed_records));
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &mut AppContext, id: i64) -> Result<()> {
    let result = ctx.api.get_student(id)?;
    for record in &result.listed_records {
        print!("{}", render_student_detail(record));
    }
    Ok(())
}

fn handle_register(ctx: &mut AppContext, args: RegisterArgs) -> Result<()> {
    let draft = StudentDraft {
        roll_no: args.roll_no,
        name: args.name,
        email: args.email,
        phone: args.phone,
        course: args.course,
        address: args.address,
    };
    let draft = apply_live_filters(draft);
    let result = ctx.api.register_student(&draft)?;
    print_messages(&result.messages);
    print_affected(&result);
    Ok(())
}

fn handle_update(ctx: &mut AppContext, id: i64, fields: UpdateArgs) -> Result<()> {
    let current = ctx.api.get_student(id)?;
    let Some(record) = current.listed_records.first() else {
        return Err(RollcallError::StudentNotFound(id));
    };
    let draft = apply_live_filters(merge_update(record, fields));
    let result = ctx.api.update_student(id, &draft)?;
    print_messages(&result.messages);
    print_affected(&result);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, id: i64) -> Result<()> {
    let result = ctx.api.delete_student(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_copy(ctx: &mut AppContext, id: i64) -> Result<()> {
    let result = ctx.api.get_student(id)?;
    for record in &result.listed_records {
        copy_to_clipboard(&format_for_clipboard(record)?)?;
        print_messages(&[CmdMessage::success(format!(
            "Copied {} to clipboard",
            record.roll_no
        ))]);
    }
    Ok(())
}

fn handle_courses(ctx: &AppContext) -> Result<()> {
    let lines: Vec<String> = ctx.api.courses().to_vec();
    print!("{}", render_text_list(&lines, "No courses configured."));
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let show_all = key.is_none();
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if show_all {
        let lines: Vec<String> = result
            .config
            .iter()
            .flat_map(|config| config.list_all())
            .map(|(k, v)| format!("{} = {}", k, v))
            .collect();
        print!("{}", render_text_list(&lines, "No configuration values."));
    }
    print_messages(&result.messages);
    Ok(())
}

/// Runs the typed values through the live-input filters and surfaces their
/// one-shot warnings.
fn apply_live_filters(draft: StudentDraft) -> StudentDraft {
    let filtered = filter_draft(draft);
    let warnings: Vec<CmdMessage> = filtered
        .warnings
        .into_iter()
        .map(|(_, message)| CmdMessage::warning(message))
        .collect();
    print_messages(&warnings);
    filtered.draft
}

/// Starts from the stored record so omitted flags keep their current values.
fn merge_update(record: &StudentRecord, fields: UpdateArgs) -> StudentDraft {
    let current = StudentDraft::from(record);
    StudentDraft {
        roll_no: fields.roll_no.unwrap_or(current.roll_no),
        name: fields.name.unwrap_or(current.name),
        email: fields.email.unwrap_or(current.email),
        phone: fields.phone.unwrap_or(current.phone),
        course: fields.course.unwrap_or(current.course),
        address: fields.address.unwrap_or(current.address),
    }
}

fn print_affected(result: &CmdResult) {
    for record in &result.affected_records {
        print!("{}", render_student_detail(record));
    }
}
