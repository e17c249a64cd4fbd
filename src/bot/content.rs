use crate::bot::router::Lesson;

/* Content is the lesson registry: per lesson, an ordered sequence of
 * immutable payload blocks, compiled into the binary. Handlers send the
 * blocks verbatim; nothing here is computed at runtime.
 *
 * All texts are Telegram MarkdownV2, so reserved characters outside
 * code spans are backslash-escaped.
 */

#[derive(Debug)]
pub enum Block {
    Photo {
        url: &'static str,
        caption: &'static str,
    },
    Text(&'static str),
}

// A gap here is a compile error, which keeps the menu and the content
// registry total with respect to each other.
pub fn blocks(lesson: Lesson) -> &'static [Block] {
    match lesson {
        Lesson::Modes => MODES,
        Lesson::SaveQuit => SAVE_QUIT,
        Lesson::Motions => MOTIONS,
        Lesson::Delete => DELETE,
        Lesson::ChangeUndo => CHANGE_UNDO,
        Lesson::YankPaste => YANK_PASTE,
        Lesson::Search => SEARCH,
        Lesson::Substitute => SUBSTITUTE,
        Lesson::Visual => VISUAL,
        Lesson::Config => CONFIG,
    }
}

const MODES: &[Block] = &[
    Block::Photo {
        url: "https://postimg.cc/sBJhSkmf",
        caption: "Vim \\- довольно странный редактор\\. \n\n\
            В нем есть режимы :/\n\n\
            Режим для навигации/редактирования, режим для вставки текста, режим для выделения текста\\. \n\n\
            Это дает Vim возможность по\\-настоящему использовать преимущества вашей клавиатуры, \
            потому что он может сосредоточиться только на одной задаче за раз\\.",
    },
    Block::Text(
        "Давайте начнем отработку основ передвижения в normal режиме: `hjkl` позволяет \
        перемещать курсор на один пробел в любом направлении\\.",
    ),
    Block::Text(
        "\\>\\>      ↑\n\
        \\>\\>← h j k l →\n\
        \\>\\>        ↓",
    ),
    Block::Text(
        "Теперь, когда мы освоили самые основные приемы, давайте посмотрим, как можно заставить \
        редактор вести себя так, как вы привыкли: в режиме *Insert* Vim вставляет фрагменты \
        текста и кода, как обычный редактор\\.\n\n\
        Введите `i`, чтобы перейти в режим *Insert*\\.\n\
        Наберите `<ESC>`, `<CTRL-[>` или `<CTRL-C>`, чтобы вернуться в *обычный режим*\\.",
    ),
];

const SAVE_QUIT: &[Block] = &[
    Block::Text(
        "Чтобы выйти из Vim, сначала вернитесь в обычный режим \\(`<ESC>`\\), затем наберите \
        команду:\n\n\
        `:q` \\- выйти, если изменений не было\n\
        `:q!` \\- выйти и отбросить изменения\n\
        `:wq` \\- записать файл и выйти",
    ),
    Block::Text(
        "Команда `ZZ` в обычном режиме делает то же, что и `:wq`: записывает файл и закрывает \
        его\\.",
    ),
];

const MOTIONS: &[Block] = &[
    Block::Text(
        "Перемещаться по одному символу \\- медленно\\. В обычном режиме есть движения \
        побыстрее:\n\n\
        `w` \\- к началу следующего слова\n\
        `b` \\- к началу предыдущего слова\n\
        `e` \\- к концу слова",
    ),
    Block::Text(
        "`0` переводит курсор в начало строки, `$` \\- в её конец\\. Движения принимают счетчик: \
        `3w` прыгает сразу через три слова\\.",
    ),
];

const DELETE: &[Block] = &[
    Block::Text(
        "Удаление \\- это тоже команда обычного режима:\n\n\
        `x` \\- удалить символ под курсором\n\
        `dd` \\- удалить строку целиком\n\
        `dw` \\- удалить до начала следующего слова\n\
        `d$` \\- удалить до конца строки",
    ),
    Block::Text(
        "Заметили закономерность? `d` сочетается с любым движением из прошлого урока: \
        оператор \\+ движение \\= команда\\.",
    ),
];

const CHANGE_UNDO: &[Block] = &[
    Block::Text(
        "`cw` удаляет слово и сразу переводит в режим *Insert* \\- удобно, когда нужно заменить \
        слово новым\\. Точка `.` повторяет последнюю команду изменения\\.",
    ),
    Block::Text(
        "Ошиблись? `u` отменяет последнюю команду, `U` \\- все изменения в строке, а `<CTRL-R>` \
        возвращает отменённое обратно\\.",
    ),
];

const YANK_PASTE: &[Block] = &[
    Block::Text(
        "Скопировать текст \\- оператор `y` \\(yank\\):\n\n\
        `yy` \\- скопировать строку\n\
        `yw` \\- скопировать слово\n\
        `p` \\- вставить после курсора\n\
        `P` \\- вставить перед курсором",
    ),
    Block::Text(
        "Удалённое командами `x`, `dd` или `dw` тоже попадает в буфер \\- `p` вставит его \
        обратно\\.",
    ),
];

const SEARCH: &[Block] = &[
    Block::Text(
        "Наберите `/` и текст, чтобы искать вперёд по файлу, или `?` \\- чтобы искать назад\\.\n\n\
        `n` \\- повторить поиск\n\
        `N` \\- повторить поиск в обратном направлении",
    ),
    Block::Text(
        "`*` ищет слово, на котором стоит курсор\\. `<CTRL-O>` возвращает туда, откуда начался \
        поиск\\.",
    ),
];

const SUBSTITUTE: &[Block] = &[
    Block::Text(
        "Замена \\- это команда `:s`:\n\n\
        `:s/старое/новое` \\- заменить первое вхождение в строке\n\
        `:s/старое/новое/g` \\- заменить все вхождения в строке\n\
        `:%s/старое/новое/g` \\- заменить во всём файле",
    ),
    Block::Text(
        "Добавьте флаг `c` в конце \\(`:%s/старое/новое/gc`\\), и Vim будет спрашивать \
        подтверждение на каждую замену\\.",
    ),
];

const VISUAL: &[Block] = &[
    Block::Text(
        "Режим выделения включается прямо с клавиатуры:\n\n\
        `v` \\- выделение посимвольно\n\
        `V` \\- выделение строками\n\
        `<CTRL-V>` \\- прямоугольный блок",
    ),
    Block::Text(
        "К выделенному применимы уже знакомые операторы: `d` удалит его, `y` скопирует, а \
        `:w ИМЯ_ФАЙЛА` запишет в отдельный файл\\.",
    ),
];

const CONFIG: &[Block] = &[
    Block::Text(
        "Vim настраивается файлом `~/.vimrc`\\. Популярные опции:\n\n\
        `set number` \\- номера строк\n\
        `set incsearch` \\- поиск по мере набора\n\
        `set hlsearch` \\- подсветка найденного",
    ),
    Block::Text(
        "Встроенная справка отвечает почти на любой вопрос: `:help` открывает руководство, \
        `:help w` \\- справку по конкретной команде\\. На этом курс закончен, удачи\\!",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_lesson_has_content() {
        for lesson in Lesson::ALL {
            assert!(!blocks(lesson).is_empty(), "no content for {:?}", lesson);
        }
    }

    #[test]
    fn test_first_lesson_is_photo_then_three_texts() {
        let lesson = blocks(Lesson::Modes);
        assert_eq!(lesson.len(), 4);
        assert!(matches!(lesson[0], Block::Photo { .. }));
        assert!(lesson[1..]
            .iter()
            .all(|block| matches!(block, Block::Text(_))));
    }

    #[test]
    fn test_photo_urls_parse() {
        for lesson in Lesson::ALL {
            for block in blocks(lesson) {
                if let Block::Photo { url, .. } = block {
                    assert!(url::Url::parse(url).is_ok(), "bad photo url: {}", url);
                }
            }
        }
    }

    #[test]
    fn test_photos_only_lead_a_lesson() {
        // Follow-up blocks are plain texts; only the opening block may
        // carry an image.
        for lesson in Lesson::ALL {
            for block in &blocks(lesson)[1..] {
                assert!(matches!(block, Block::Text(_)), "{:?}", lesson);
            }
        }
    }
}
