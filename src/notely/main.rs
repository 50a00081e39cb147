use chrono::Utc;
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use log::warn;
use notely::error::{NotelyError, Result};
use notely::facets;
use notely::repository::Repository;
use notely::share;
use notely::store::fs::FileStore;
use notely::view::{visible_notes, ViewMode};
use std::path::PathBuf;
use uuid::Uuid;

mod cli;
use cli::args::{Cli, Commands};
use cli::print::{print_full_note, print_labels, print_notes, print_shared};

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    repo: Repository<FileStore>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::Create {
            title,
            content,
            tags,
            category,
        }) => handle_create(&mut ctx, title, content, tags, category),
        Some(Commands::List {
            archived,
            tag,
            category,
            search,
        }) => handle_list(&ctx, archived, tag, category, search),
        Some(Commands::View { index }) => handle_view(&ctx, index),
        Some(Commands::Edit {
            index,
            title,
            content,
            tags,
        }) => handle_edit(&mut ctx, index, title, content, tags),
        Some(Commands::Category { index, name, none }) => {
            let category = if none { None } else { name };
            handle_category(&mut ctx, index, category)
        }
        Some(Commands::Archive { index }) => handle_archive(&mut ctx, index),
        Some(Commands::Delete { index }) => handle_delete(&mut ctx, index),
        Some(Commands::Tags) => handle_tags(&ctx),
        Some(Commands::Folders) => handle_folders(&ctx),
        Some(Commands::Export { output }) => handle_export(&ctx, output),
        Some(Commands::Import { path }) => handle_import(&mut ctx, path),
        Some(Commands::Share { index }) => handle_share(&ctx, index),
        Some(Commands::OpenShared { token }) => handle_open_shared(&ctx, token),
        None => handle_list(&ctx, false, None, None, None),
    }
}

fn init_context() -> Result<AppContext> {
    let data_dir = match std::env::var_os("NOTELY_DATA_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => {
            let proj_dirs = ProjectDirs::from("com", "notely", "notely")
                .ok_or_else(|| NotelyError::Store("Could not determine data dir".to_string()))?;
            proj_dirs.data_dir().to_path_buf()
        }
    };

    let seed_path = data_dir.join("seed.json");
    let store = FileStore::new(data_dir).with_seed(seed_path);

    let mut repo = Repository::new(store);
    repo.load()?;
    Ok(AppContext { repo })
}

/// Resolve a 1-based position from `list` output to a stable note id.
fn resolve_index(ctx: &AppContext, index: usize) -> Result<Uuid> {
    ctx.repo
        .notes()
        .get(index.wrapping_sub(1))
        .map(|n| n.id)
        .ok_or_else(|| NotelyError::Api(format!("No note at position {}", index)))
}

fn handle_create(
    ctx: &mut AppContext,
    title: String,
    content: String,
    tags: Vec<String>,
    category: Option<String>,
) -> Result<()> {
    let id = ctx.repo.create(title, content, tags)?;
    if category.is_some() {
        ctx.repo.set_category(id, category)?;
    }

    let note = ctx.repo.find(id).expect("just created");
    println!("{}", format!("Note created: {}", note.display_title()).green());
    Ok(())
}

fn handle_list(
    ctx: &AppContext,
    archived: bool,
    tag: Option<String>,
    category: Option<String>,
    search: Option<String>,
) -> Result<()> {
    let view = if archived { Some("archived") } else { None };
    let mode = ViewMode::from_params(view, tag.as_deref(), category.as_deref());
    let query = search.unwrap_or_default();

    let visible = visible_notes(ctx.repo.notes(), &mode, &query);
    let entries = with_positions(ctx, &visible);
    print_notes(&entries);
    Ok(())
}

/// Pair each visible note with its 1-based position in the full collection,
/// so numbers stay valid across differently filtered listings.
fn with_positions<'a>(ctx: &AppContext, visible: &[&'a notely::model::Note]) -> Vec<(usize, &'a notely::model::Note)> {
    visible
        .iter()
        .map(|note| {
            let position = ctx
                .repo
                .notes()
                .iter()
                .position(|n| n.id == note.id)
                .expect("visible note comes from the collection")
                + 1;
            (position, *note)
        })
        .collect()
}

fn handle_view(ctx: &AppContext, index: usize) -> Result<()> {
    let id = resolve_index(ctx, index)?;
    let note = ctx.repo.find(id).expect("resolved above");
    print_full_note(index, note);
    Ok(())
}

fn handle_edit(
    ctx: &mut AppContext,
    index: usize,
    title: Option<String>,
    content: Option<String>,
    tags: Option<Vec<String>>,
) -> Result<()> {
    let id = resolve_index(ctx, index)?;
    let current = ctx.repo.find(id).expect("resolved above");

    let title = title.unwrap_or_else(|| current.title.clone());
    let content = content.unwrap_or_else(|| current.content.clone());
    let tags = tags.unwrap_or_else(|| current.tags.clone());

    ctx.repo.update(id, title, content, tags)?;
    let note = ctx.repo.find(id).expect("still present");
    println!("{}", format!("Note updated: {}", note.display_title()).green());
    Ok(())
}

fn handle_category(ctx: &mut AppContext, index: usize, category: Option<String>) -> Result<()> {
    let id = resolve_index(ctx, index)?;
    ctx.repo.set_category(id, category.clone())?;

    let note = ctx.repo.find(id).expect("resolved above");
    match &note.category {
        Some(c) => println!("{}", format!("Filed under: {}", c).green()),
        None => println!("{}", "Category cleared.".green()),
    }
    Ok(())
}

fn handle_archive(ctx: &mut AppContext, index: usize) -> Result<()> {
    let id = resolve_index(ctx, index)?;
    ctx.repo.toggle_archive(id)?;

    let note = ctx.repo.find(id).expect("resolved above");
    if note.is_archived {
        println!("{}", format!("Archived: {}", note.display_title()).green());
    } else {
        println!("{}", format!("Unarchived: {}", note.display_title()).green());
    }
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, index: usize) -> Result<()> {
    let id = resolve_index(ctx, index)?;
    let title = ctx
        .repo
        .find(id)
        .map(|n| n.display_title().to_string())
        .expect("resolved above");

    ctx.repo.delete(id)?;
    println!("{}", format!("Deleted: {}", title).green());
    Ok(())
}

fn handle_tags(ctx: &AppContext) -> Result<()> {
    print_labels(&facets::unique_tags(ctx.repo.notes()));
    Ok(())
}

fn handle_folders(ctx: &AppContext) -> Result<()> {
    print_labels(&facets::unique_categories(ctx.repo.notes()));
    Ok(())
}

fn handle_export(ctx: &AppContext, output: Option<PathBuf>) -> Result<()> {
    let path = output.unwrap_or_else(|| {
        PathBuf::from(format!("notely-{}.json", Utc::now().format("%Y-%m-%d_%H-%M-%S")))
    });

    let bytes = ctx.repo.export_all()?;
    std::fs::write(&path, bytes).map_err(NotelyError::Io)?;
    println!("{}", format!("Exported to {}", path.display()).green());
    Ok(())
}

fn handle_import(ctx: &mut AppContext, path: PathBuf) -> Result<()> {
    let bytes = std::fs::read(&path).map_err(NotelyError::Io)?;
    let count = ctx.repo.import_merge(&bytes)?;

    println!("{}", format!("Imported {} note(s).", count).green());
    println!(
        "{}",
        "Imports are additive: re-importing the same backup creates duplicates.".yellow()
    );
    Ok(())
}

fn handle_share(ctx: &AppContext, index: usize) -> Result<()> {
    let id = resolve_index(ctx, index)?;
    let note = ctx.repo.find(id).expect("resolved above");
    println!("?{}", share::share_query(note));
    Ok(())
}

fn handle_open_shared(ctx: &AppContext, token: String) -> Result<()> {
    let raw = token
        .strip_prefix(&format!("{}=", share::SHARE_PARAM))
        .unwrap_or(&token);

    match share::decode(raw) {
        Ok(payload) => {
            print_shared(&payload);
            Ok(())
        }
        Err(e) => {
            warn!("share token rejected: {}", e);
            eprintln!(
                "{}",
                "Share link invalid or corrupted, showing your notes instead.".yellow()
            );
            handle_list(ctx, false, None, None, None)
        }
    }
}
