use anyhow::Context;
use clap::Parser;
use post_board::ui::ChangeEvent;
use post_board::utils::{logger, validation::Validate};
use post_board::{BoardError, CliArgs, HttpPostsApi, PostBoard};

fn fail(e: &BoardError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    if args.json_logs {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }
    tracing::debug!("CLI args: {:?}", args);

    let config = match args.validate().and_then(|_| args.board_config()) {
        Ok(config) => config,
        Err(e) => fail(&e),
    };
    tracing::info!("Using API at {}", config.api_base_url);

    let api = HttpPostsApi::from_config(&config).unwrap_or_else(|e| fail(&e));
    let mut board = PostBoard::new(api, &config);

    if let Err(e) = board.initialize_app().await {
        fail(&e);
    }

    match &args.user_id {
        Some(user_id) => {
            let event = ChangeEvent::with_value(user_id.clone());
            if let Err(e) = board.on_user_selected(Some(&event)).await {
                fail(&e);
            }
            for post_id in &args.toggle {
                if board.click_show_comments(*post_id).is_none() {
                    tracing::warn!("No comments button for post {}", post_id);
                }
            }
        }
        None => {
            if let Err(e) = board.display_initial_prompt() {
                fail(&e);
            }
        }
    }

    let html = board.document().document_html();
    match &args.output {
        Some(path) => {
            std::fs::write(path, &html).with_context(|| format!("writing {}", path))?;
            tracing::info!("📁 Page saved to: {}", path);
        }
        None => println!("{}", html),
    }

    Ok(())
}
