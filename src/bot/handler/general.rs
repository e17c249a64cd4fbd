use teloxide::{payloads::SendMessageSetters, prelude::*, utils::command::BotCommands};

use crate::bot::dispatcher::{Command, HandlerResult};

use super::{
    constants::{HELP_FOOTER, MENU_COLUMNS, WELCOME_MESSAGE},
    utils::make_lessons_keyboard,
};

/* Start command.
 * Displays the welcome message with the lesson menu keyboard attached.
 * Stateless, so repeating the command just sends the same menu again.
 */
pub async fn action_start(bot: Bot, msg: Message) -> HandlerResult {
    log::info!("Start - chat {} requested the main menu", msg.chat.id);

    bot.send_message(msg.chat.id, WELCOME_MESSAGE)
        .reply_markup(make_lessons_keyboard(MENU_COLUMNS))
        .await?;
    Ok(())
}

/* Help command.
 * Displays the list of commands available to the user.
 */
pub async fn action_help(bot: Bot, msg: Message) -> HandlerResult {
    let commands = Command::descriptions().to_string();

    bot.send_message(msg.chat.id, format!("{}\n\n{}", commands, HELP_FOOTER))
        .await?;
    Ok(())
}
