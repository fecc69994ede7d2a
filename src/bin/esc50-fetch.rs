use clap::{Parser, Subcommand};
use esc50_data::{
    fetch_dataset, CredentialSource, DataPaths, DatasetRef, DownloadProgress, FetchOptions,
    ProgressReporter,
};
use std::{path::PathBuf, process};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "esc50-fetch")]
#[command(about = "Create the ESC-50 data layout and download the dataset", long_about = None)]
#[command(version)]
struct Cli {
    /// Project root (defaults to $ESC50_ROOT, then the crate directory)
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    #[arg(long, global = true, default_value = esc50_data::types::DEFAULT_API_BASE)]
    api_base: String,

    /// Read kaggle.json from this directory instead of the usual places
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the directory tree only
    Init,

    /// Print the directory layout
    Paths,

    /// Download and unzip a dataset into the audio directory
    Fetch {
        #[arg(short, long, default_value = esc50_data::ESC50_DATASET)]
        dataset: DatasetRef,

        #[arg(long)]
        keep_archive: bool,

        #[arg(short, long)]
        quiet: bool,
    },
}

fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let paths = cli.root.map(DataPaths::new).unwrap_or_else(DataPaths::discover);

    let base = FetchOptions {
        api_base: cli.api_base,
        credentials: cli
            .config_dir
            .map(CredentialSource::ConfigDir)
            .unwrap_or_default(),
        ..FetchOptions::default()
    };

    let result = match cli.command {
        None => handle_fetch(&paths, base, false),
        Some(Commands::Init) => handle_init(&paths),
        Some(Commands::Paths) => handle_paths(&paths),
        Some(Commands::Fetch {
            dataset,
            keep_archive,
            quiet,
        }) => {
            let opts = FetchOptions {
                dataset,
                unzip: !keep_archive,
                ..base
            };
            handle_fetch(&paths, opts, quiet)
        }
    };

    match result {
        Ok(()) => process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("esc50_data=info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn handle_init(paths: &DataPaths) -> Result<(), Box<dyn std::error::Error>> {
    paths.ensure()?;
    tracing::info!(root = %paths.root().display(), "directory tree ready");
    Ok(())
}

fn handle_paths(paths: &DataPaths) -> Result<(), Box<dyn std::error::Error>> {
    println!("root:           {}", paths.root().display());
    println!("data:           {}", paths.data_dir().display());
    println!("raw:            {}", paths.raw_data_dir().display());
    println!("audio:          {}", paths.audio_dir().display());
    println!("meta:           {}", paths.meta_dir().display());
    println!("metadata csv:   {}", paths.metadata_csv().display());
    println!("processed:      {}", paths.processed_data_dir().display());
    println!("augmented data: {}", paths.augmented_data_dir().display());
    println!("models:         {}", paths.model_dir().display());
    Ok(())
}

fn handle_fetch(
    paths: &DataPaths,
    mut opts: FetchOptions,
    quiet: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    paths.ensure()?;

    if !quiet {
        opts.progress = Some(ProgressReporter::new(print_progress));
    }

    let report = fetch_dataset(paths, &opts)?;
    println!("{}", report.confirmation());
    Ok(())
}

fn print_progress(p: DownloadProgress) {
    let downloaded_mb = p.downloaded as f64 / 1_000_000.0;
    match (p.total, p.percent()) {
        (Some(total), Some(percent)) => {
            eprint!(
                "\rDownloading: {:>3}% ({:.2} MB / {:.2} MB)",
                percent.round() as u64,
                downloaded_mb,
                total as f64 / 1_000_000.0
            );
            if p.is_complete() {
                eprintln!();
            }
        }
        _ => eprint!("\rDownloading: {:.2} MB", downloaded_mb),
    }
}
