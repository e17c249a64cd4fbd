/* User-facing texts shared across handlers. */

pub const WELCOME_MESSAGE: &str = "Добро пожаловать в бот для изучения Vim! Выберите урок:";

// HTML parse mode.
pub const UNKNOWN_COMMAND_MESSAGE: &str =
    "Извините, я не понимаю этой команды. Введите \"Урок N\", где N - это номер урока от 1 до 10.\n\
    \n<b>Выбрать урок можно кнопками на панели ниже</b>";

pub const HELP_FOOTER: &str =
    "Чтобы открыть урок, отправьте \"Урок N\" или нажмите кнопку на панели меню.";

// Lesson buttons per menu row.
pub const MENU_COLUMNS: usize = 2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_welcome_prompts_for_a_lesson() {
        assert!(WELCOME_MESSAGE.contains("Выберите урок"));
    }

    #[test]
    fn test_fallback_keeps_its_wording() {
        assert!(UNKNOWN_COMMAND_MESSAGE.contains("Извините, я не понимаю этой команды."));
    }
}
