use teloxide::{
    payloads::{SendMessageSetters, SendPhotoSetters},
    prelude::*,
    types::{ChatId, InputFile, ParseMode},
};
use url::Url;

use crate::bot::{
    content::{self, Block},
    dispatcher::HandlerResult,
    router::{Lesson, Route},
};

use super::{constants::UNKNOWN_COMMAND_MESSAGE, utils::make_next_lesson_keyboard};

/* Plain text message.
 * Routed through the lesson table: an exact lesson label delivers that
 * lesson, anything else gets the fixed fallback reply. Messages without
 * text (media, stickers, service messages) are ignored.
 */
pub async fn action_text_message(bot: Bot, msg: Message) -> HandlerResult {
    let text = match msg.text() {
        Some(text) => text,
        None => return Ok(()),
    };

    match Route::from_message_text(text) {
        Route::Lesson(lesson) => {
            log::info!("Lesson - chat {} opened {} by label", msg.chat.id, lesson);
            send_lesson(&bot, msg.chat.id, lesson).await
        }
        Route::Unknown => {
            log::info!("Fallback - chat {} sent an unrecognized command", msg.chat.id);
            bot.send_message(msg.chat.id, UNKNOWN_COMMAND_MESSAGE)
                .parse_mode(ParseMode::Html)
                .await?;
            Ok(())
        }
    }
}

/* Button press.
 * A registered lesson identifier is acknowledged and delivered to the
 * chat the button lives in. Unknown identifiers (stale buttons, foreign
 * messages) are dropped without any reply.
 */
pub async fn action_callback(bot: Bot, query: CallbackQuery) -> HandlerResult {
    let data = match query.data.as_deref() {
        Some(data) => data,
        None => return Ok(()),
    };

    match Route::from_callback_data(data) {
        Route::Lesson(lesson) => {
            bot.answer_callback_query(query.id).await?;
            if let Some(message) = query.message {
                log::info!("Lesson - chat {} opened {} by button", message.chat.id, lesson);
                send_lesson(&bot, message.chat.id, lesson).await?;
            }
            Ok(())
        }
        Route::Unknown => {
            log::warn!("Callback - dropping unknown identifier: {}", data);
            Ok(())
        }
    }
}

/* Sends a lesson's blocks in their fixed order, all in MarkdownV2.
 * The final block carries the inline button to the next lesson, when
 * there is one.
 */
async fn send_lesson(bot: &Bot, chat_id: ChatId, lesson: Lesson) -> HandlerResult {
    let blocks = content::blocks(lesson);

    for (index, block) in blocks.iter().enumerate() {
        let keyboard = if index + 1 == blocks.len() {
            make_next_lesson_keyboard(lesson)
        } else {
            None
        };

        match block {
            Block::Photo { url, caption } => {
                let photo = InputFile::url(Url::parse(url).expect("lesson photo URLs are static"));
                let mut request = bot
                    .send_photo(chat_id, photo)
                    .caption(*caption)
                    .parse_mode(ParseMode::MarkdownV2);
                if let Some(markup) = keyboard {
                    request = request.reply_markup(markup);
                }
                request.await?;
            }
            Block::Text(text) => {
                let mut request = bot
                    .send_message(chat_id, *text)
                    .parse_mode(ParseMode::MarkdownV2);
                if let Some(markup) = keyboard {
                    request = request.reply_markup(markup);
                }
                request.await?;
            }
        }
    }

    Ok(())
}
