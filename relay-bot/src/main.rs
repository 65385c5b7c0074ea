use dotenvy::dotenv;
use openrouter_client::{CompletionClient, OpenRouterClient};
use relay_bot::{runner, BotConfig, MessageRelay};
use relay_core::{init_tracing, Bot, TelegramBot};
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    init_tracing("logs/relay-bot.log")?;

    // Missing credentials: log and return without starting the receive loop.
    let config = match BotConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "API keys are missing; check your .env file or environment");
            return Ok(());
        }
    };

    let client: Arc<dyn CompletionClient> = Arc::new(
        OpenRouterClient::new(config.openrouter_api_key.clone())
            .with_base_url(config.openrouter_base_url.clone())
            .with_model(config.model.clone())
            .with_attribution(config.app_referer.clone(), config.app_title.clone()),
    );

    let bot = teloxide::Bot::new(config.telegram_bot_token.clone());
    let adapter: Arc<dyn Bot> = Arc::new(TelegramBot::from_bot(bot.clone()));
    let relay = MessageRelay::new(adapter, client, config.thinking_message.clone());

    info!(model = %config.model, "Bot is online; send /start to test");

    runner::run_repl(bot, relay).await?;

    Ok(())
}
