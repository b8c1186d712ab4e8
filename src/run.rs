//! Application run modes: logger init, formatting, and cache inspection.

use std::io;
use std::str::FromStr;

use documind::cache::{ArtifactCache, ArtifactKind, FileStore};
use documind::config::Config;
use documind::format;

use crate::cli::Args;

/// Initialize env_logger from the -v/-q flags. `RUST_LOG` overrides.
pub fn init_logger(args: &Args) {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(args.log_level()),
    )
    .try_init();
}

/// Read the raw response text: a file path, or stdin for '-' / no argument.
fn read_input(input: Option<&str>) -> io::Result<String> {
    match input {
        Some(path) if path != "-" => std::fs::read_to_string(path),
        _ => io::read_to_string(io::stdin()),
    }
}

/// Format mode: read raw text, run the pipeline, print plain text or blocks.
pub fn run_format(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let raw = read_input(args.input.as_deref())?;

    if args.blocks {
        let blocks = format::format_response_blocks(&raw);
        println!("{}", serde_json::to_string_pretty(&blocks)?);
        return Ok(());
    }

    let formatted = format::format_response(&raw);
    if args.width > 0 {
        for line in format::wrap_formatted(&formatted, args.width) {
            println!("{}", line);
        }
    } else {
        println!("{}", formatted);
    }
    Ok(())
}

/// Open the on-disk artifact cache at the configured root.
fn open_cache(config: &Config) -> Result<ArtifactCache<FileStore>, Box<dyn std::error::Error>> {
    let root = config
        .store_root()
        .ok_or("no artifact store directory available (set DOCUMIND_DATA_DIR)")?;
    Ok(ArtifactCache::new(
        FileStore::new(root),
        config.cache_config(),
    ))
}

/// `cache list [kind]`: print cached artifact keys, one per line.
pub fn run_cache_list(
    config: &Config,
    kind: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let cache = open_cache(config)?;
    let kinds = match kind {
        Some(k) => vec![ArtifactKind::from_str(k)?],
        None => ArtifactKind::ALL.to_vec(),
    };
    let mut total = 0;
    for kind in kinds {
        for key in cache.list_keys(kind)? {
            println!("{}", key);
            total += 1;
        }
    }
    if total == 0 {
        eprintln!("(no cached artifacts)");
    }
    Ok(())
}

/// `cache clear <kind>`: remove every cached artifact of that kind.
pub fn run_cache_clear(config: &Config, kind: &str) -> Result<(), Box<dyn std::error::Error>> {
    let cache = open_cache(config)?;
    let kind = ArtifactKind::from_str(kind)?;
    let removed = cache.clear_kind(kind)?;
    println!("Removed {} {} artifact(s)", removed, kind);
    Ok(())
}

/// `config`: show resolved paths, key prefix, and user scoping status.
pub fn run_config(config: &Config) {
    println!("Cache key prefix: {}", config.cache_prefix);
    match config.store_root() {
        Some(root) => println!("Artifact store:   {}", root.display()),
        None => println!("Artifact store:   (unavailable)"),
    }
    match config
        .bearer_token
        .as_deref()
        .and_then(documind::cache::token::user_id_from_token)
    {
        Some(uid) => println!("User scope:       user_{}", uid),
        None => println!("User scope:       (unscoped)"),
    }
}
