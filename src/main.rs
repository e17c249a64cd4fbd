use vimcoach::bot::run_dispatcher;

#[tokio::main]
pub async fn main() {
    dotenv::dotenv().ok();
    pretty_env_logger::init();
    log::info!("Starting vimcoach bot...");

    let bot = teloxide::Bot::from_env();

    log::info!("vimcoach bot started successfully!");

    run_dispatcher(bot).await;
}
