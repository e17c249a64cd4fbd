use std::sync::Arc;

use futures::future::BoxFuture;
use teloxide::{
    dispatching::UpdateHandler, error_handlers::ErrorHandler, prelude::*, update_listeners,
    utils::command::BotCommands, RequestError,
};

use super::handler::{action_callback, action_help, action_start, action_text_message};

/* Dispatcher is the front-facing agent of the bot.
 * It receives messages and button presses from the user and routes each
 * one to a handler. All user interaction, including sending and crafting
 * of messages, is done in the handler module; the routing table itself
 * lives in the router module. The bot keeps no state between updates.
 */

/* Types */
pub type HandlerResult = Result<(), BotError>;

#[derive(thiserror::Error, Debug)]
pub enum BotError {
    #[error("Request error: {0}")]
    RequestError(RequestError),
}

impl From<RequestError> for BotError {
    fn from(request_error: RequestError) -> BotError {
        BotError::RequestError(request_error)
    }
}

#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase")]
pub enum Command {
    #[command(description = "показать меню с уроками.")]
    Start,
    #[command(description = "показать это сообщение.")]
    Help,
}

/* Routing schema.
 * Commands are tried first; any other message goes through the lesson
 * router, with unmatched text answered by a fixed fallback reply.
 * Callback queries carry lesson identifiers from inline buttons;
 * unknown identifiers are dropped without a reply.
 */
fn schema() -> UpdateHandler<BotError> {
    use dptree::case;

    let command_handler = teloxide::filter_command::<Command, _>()
        .branch(case![Command::Start].endpoint(action_start))
        .branch(case![Command::Help].endpoint(action_help));

    let message_handler = Update::filter_message()
        .branch(command_handler)
        .branch(dptree::endpoint(action_text_message));

    let callback_query_handler =
        Update::filter_callback_query().branch(dptree::endpoint(action_callback));

    dptree::entry()
        .branch(message_handler)
        .branch(callback_query_handler)
}

/* Main Dispatch function */
pub async fn run_dispatcher(bot: Bot) {
    let mut dispatcher = Dispatcher::builder(bot.clone(), schema())
        .enable_ctrlc_handler()
        .build();

    let listener = update_listeners::polling_default(bot).await;
    dispatcher
        .dispatch_with_listener(listener, Arc::new(PollingErrorObserver))
        .await;
}

/* Polling error observer.
 * Invoked when the receive loop itself fails, not when an individual
 * send fails. Writes one human-readable line and lets the listener
 * carry on; reconnecting is the listener's job.
 */
pub struct PollingErrorObserver;

impl ErrorHandler<RequestError> for PollingErrorObserver {
    fn handle_error(self: Arc<Self>, error: RequestError) -> BoxFuture<'static, ()> {
        log::error!("{}", describe_polling_error(&error));
        Box::pin(async {})
    }
}

pub fn describe_polling_error(error: &RequestError) -> String {
    match error {
        RequestError::Api(api_error) => format!("Telegram API error: {}", api_error),
        RequestError::Network(network_error) => {
            format!("Network error while polling: {}", network_error)
        }
        other => format!("Polling error: {}", other),
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use teloxide::ApiError;

    use super::*;

    #[test]
    fn test_schema_builds() {
        let _ = schema();
    }

    #[test]
    fn test_start_and_help_commands_parse() {
        assert!(matches!(
            Command::parse("/start", "vimcoach_bot"),
            Ok(Command::Start)
        ));
        assert!(matches!(
            Command::parse("/help", "vimcoach_bot"),
            Ok(Command::Help)
        ));
        assert!(Command::parse("Урок 1", "vimcoach_bot").is_err());
    }

    #[test]
    fn test_api_errors_are_classified() {
        let error = RequestError::Api(ApiError::BotBlocked);
        assert!(describe_polling_error(&error).starts_with("Telegram API error"));
    }

    #[test]
    fn test_other_errors_are_classified() {
        let error = RequestError::Io(io::Error::new(io::ErrorKind::Other, "boom"));
        assert!(describe_polling_error(&error).starts_with("Polling error"));
    }
}
