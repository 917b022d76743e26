use lib::board::{
    activity_api::HttpApi, board_view::TerminalView, commands::forward_commands, models, run_tool,
};

use clap::Parser;
use figment::{
    providers::{Env, Format, Json},
    Figment,
};
use log::info;
use models::{Args, Config};
use tokio::{io::BufReader, sync::mpsc};

#[tokio::main]
async fn main() {
    /* Setup logging, stdout belongs to the board */
    env_logger::builder()
        .target(env_logger::Target::Stderr)
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    /* Get all the required resources */
    let args = Args::parse();
    let config: Config = Figment::new()
        .merge(Json::file(&args.config_json_path))
        .merge(Env::prefixed("BOARD_"))
        .extract()
        .unwrap();
    info!(
        "Read config.json from {}",
        std::path::absolute(&args.config_json_path)
            .unwrap()
            .display()
    );
    let api = HttpApi::new(&config).unwrap();
    info!("Using activity service at {}", api.base_url());

    /* Feed stdin commands into the board, unless we only print it once */
    let (events_tx, events_rx) = mpsc::channel(32);
    if args.once {
        drop(events_tx);
    } else {
        tokio::spawn(forward_commands(BufReader::new(tokio::io::stdin()), events_tx));
    }

    let mut view = TerminalView::new(std::io::stdout());
    run_tool::run(api, &mut view, events_rx).await;
}
