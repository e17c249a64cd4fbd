use std::fmt;

/* Router is the static dispatch table of the bot.
 * It maps raw user input (message text or a callback identifier) to an
 * enumerated route, with rejected keys falling through to Route::Unknown.
 * Pure data and string equality only, so the whole table can be audited
 * and tested without a running bot.
 */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lesson {
    Modes,
    SaveQuit,
    Motions,
    Delete,
    ChangeUndo,
    YankPaste,
    Search,
    Substitute,
    Visual,
    Config,
}

/* Where one inbound key leads. Unknown is the default for every key
 * not present in the table: unmatched text gets the fallback reply,
 * unmatched callback identifiers are dropped without a reply.
 */
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Lesson(Lesson),
    Unknown,
}

impl Lesson {
    // Menu order. Every variant appears here exactly once; the menu
    // keyboard, both input mappings and the content registry are all
    // derived from this table.
    pub const ALL: [Lesson; 10] = [
        Lesson::Modes,
        Lesson::SaveQuit,
        Lesson::Motions,
        Lesson::Delete,
        Lesson::ChangeUndo,
        Lesson::YankPaste,
        Lesson::Search,
        Lesson::Substitute,
        Lesson::Visual,
        Lesson::Config,
    ];

    pub fn number(self) -> u8 {
        match self {
            Lesson::Modes => 1,
            Lesson::SaveQuit => 2,
            Lesson::Motions => 3,
            Lesson::Delete => 4,
            Lesson::ChangeUndo => 5,
            Lesson::YankPaste => 6,
            Lesson::Search => 7,
            Lesson::Substitute => 8,
            Lesson::Visual => 9,
            Lesson::Config => 10,
        }
    }

    // The button label shown in the menu, matched verbatim against
    // incoming message text.
    pub fn label(self) -> String {
        format!("Урок {}", self.number())
    }

    // The opaque identifier carried by inline buttons.
    pub fn callback_data(self) -> String {
        format!("lesson{}", self.number())
    }

    pub fn next(self) -> Option<Lesson> {
        let position = Lesson::ALL.iter().position(|&lesson| lesson == self)?;
        Lesson::ALL.get(position + 1).copied()
    }
}

impl fmt::Display for Lesson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Route {
    /* Exact label match, case- and punctuation-sensitive. */
    pub fn from_message_text(text: &str) -> Route {
        Lesson::ALL
            .iter()
            .copied()
            .find(|lesson| lesson.label() == text)
            .map_or(Route::Unknown, Route::Lesson)
    }

    /* Exact callback identifier match. */
    pub fn from_callback_data(data: &str) -> Route {
        Lesson::ALL
            .iter()
            .copied()
            .find(|lesson| lesson.callback_data() == data)
            .map_or(Route::Unknown, Route::Lesson)
    }
}
