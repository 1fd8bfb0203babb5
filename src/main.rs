use clap::Parser;
use rng_analyzer::cli::{
    analyze, classes, handle_completions, handle_config_init, history, Cli, Commands,
    ConfigCommands, HistoryCommands,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze(args) => analyze::run_analyze(args).await,
        Commands::History(cmd) => match cmd {
            HistoryCommands::List(args) => history::run_history_list(args).await,
            HistoryCommands::Clear(args) => history::run_history_clear(args).await,
        },
        Commands::Classes(args) => {
            println!("{}", classes::handle_classes(&args));
            Ok(())
        }
        Commands::Config(config_cmd) => match config_cmd {
            ConfigCommands::Init(args) => {
                handle_config_init(&args).map(|message| println!("{}", message))
            }
        },
        Commands::Completions(args) => handle_completions(&args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
