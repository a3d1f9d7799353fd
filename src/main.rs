use anyhow::Result;
use clap::Parser;
use listpatch::changes::apply_changes;
use listpatch::store;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "listpatch")]
#[command(about = "Apply a batch of playlist changes to a music library dataset", long_about = None)]
struct Args {
    /// Path to the input dataset (JSON)
    dataset: PathBuf,

    /// Path to the change-set to apply (JSON)
    changes: PathBuf,

    /// Path the updated dataset is written to
    output: PathBuf,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let dataset = store::load_dataset(&args.dataset)?;
    log::info!(
        "Dataset loaded: {} users, {} playlists, {} songs",
        dataset.user_count(),
        dataset.playlist_count(),
        dataset.song_count()
    );

    let change_set = store::load_changes(&args.changes)?;
    log::info!("Loaded {} changes", change_set.len());

    let updated = apply_changes(&dataset, &change_set);
    log::info!(
        "Changes applied: {} playlists in, {} playlists out",
        dataset.playlist_count(),
        updated.playlist_count()
    );

    store::write_dataset(&updated, &args.output)?;
    log::info!("Updated dataset written to {:?}", args.output);

    Ok(())
}
