use teloxide::types::{
    InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton, KeyboardMarkup,
};

use crate::bot::router::Lesson;

/* Common utilities for handlers. */

// Make the persistent menu keyboard, one button per registered lesson.
pub fn make_lessons_keyboard(columns: usize) -> KeyboardMarkup {
    let mut keyboard: Vec<Vec<KeyboardButton>> = Vec::new();
    for chunk in Lesson::ALL.chunks(columns) {
        let row = chunk
            .iter()
            .map(|lesson| KeyboardButton::new(lesson.label()))
            .collect();
        keyboard.push(row);
    }

    KeyboardMarkup::new(keyboard).resize_keyboard(true)
}

// Make the one-button inline keyboard leading to the next lesson.
// None for the last lesson.
pub fn make_next_lesson_keyboard(lesson: Lesson) -> Option<InlineKeyboardMarkup> {
    lesson.next().map(|next| {
        InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::callback(
            format!("Дальше: {}", next.label()),
            next.callback_data(),
        )]])
    })
}

#[cfg(test)]
mod tests {
    use teloxide::types::InlineKeyboardButtonKind;

    use super::*;

    #[test]
    fn test_menu_covers_every_lesson_in_order() {
        let keyboard = make_lessons_keyboard(2);
        let labels: Vec<String> = keyboard
            .keyboard
            .iter()
            .flatten()
            .map(|button| button.text.clone())
            .collect();
        let expected: Vec<String> = Lesson::ALL.iter().map(|lesson| lesson.label()).collect();
        assert_eq!(labels, expected);
    }

    #[test]
    fn test_menu_rows_respect_column_count() {
        let keyboard = make_lessons_keyboard(2);
        assert!(keyboard.keyboard.iter().all(|row| row.len() <= 2));
        assert_eq!(keyboard.keyboard.len(), 5);
    }

    #[test]
    fn test_next_lesson_button_carries_the_following_identifier() {
        let markup = make_next_lesson_keyboard(Lesson::Modes).expect("first lesson has a next");
        let button = &markup.inline_keyboard[0][0];
        assert_eq!(button.text, "Дальше: Урок 2");
        assert_eq!(
            button.kind,
            InlineKeyboardButtonKind::CallbackData("lesson2".to_string())
        );
    }

    #[test]
    fn test_last_lesson_has_no_next_button() {
        assert!(make_next_lesson_keyboard(Lesson::Config).is_none());
    }
}
