//! History command implementation

use crate::cli::output::{format_history_json, format_history_table};
use crate::cli::{load_config, HistoryClearArgs, HistoryListArgs};
use crate::history::HistoryStore;

/// Handle `rng-analyzer history list`
pub async fn handle_history_list(
    args: &HistoryListArgs,
    store: &HistoryStore,
) -> Result<String, Box<dyn std::error::Error>> {
    let entries = store.list().await;
    if args.json {
        Ok(format_history_json(&entries))
    } else {
        Ok(format_history_table(&entries))
    }
}

/// Handle `rng-analyzer history clear`
pub async fn handle_history_clear(
    args: &HistoryClearArgs,
    store: &HistoryStore,
) -> Result<String, Box<dyn std::error::Error>> {
    if !args.yes {
        return Err("Refusing to delete all analysis history without --yes".into());
    }

    store
        .clear()
        .await
        .map_err(|e| format!("Could not clear history: {}", e))?;
    Ok("✓ Analysis history cleared".to_string())
}

pub async fn run_history_list(args: HistoryListArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(&args.common)?;
    crate::logging::init_tracing(&config.logging)?;

    let store = HistoryStore::open(&config.history.data_dir);
    println!("{}", handle_history_list(&args, &store).await?);
    Ok(())
}

pub async fn run_history_clear(args: HistoryClearArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(&args.common)?;
    crate::logging::init_tracing(&config.logging)?;

    let store = HistoryStore::open(&config.history.data_dir);
    println!("{}", handle_history_clear(&args, &store).await?);
    Ok(())
}
