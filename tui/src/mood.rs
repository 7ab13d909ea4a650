//! Face art for the guesser's mood.

use guess_engine::Mood;

const ART_WIDTH: usize = 11;

/// Lines of face art for `mood`, all exactly the same width.
#[must_use]
pub fn face(mood: Mood, ascii_only: bool) -> [&'static str; 5] {
    if ascii_only {
        ascii_face(mood)
    } else {
        unicode_face(mood)
    }
}

fn ascii_face(mood: Mood) -> [&'static str; 5] {
    match mood {
        Mood::Thinking => [
            "  _______  ",
            " /       \\ ",
            "|  o   o  |",
            "|    ~    |",
            " \\_______/ ",
        ],
        Mood::Happy => [
            "  _______  ",
            " /       \\ ",
            "|  ^   ^  |",
            "|  \\___/  |",
            " \\_______/ ",
        ],
        Mood::Sad => [
            "  _______  ",
            " /       \\ ",
            "|  ;   ;  |",
            "|   ___   |",
            " \\_______/ ",
        ],
        Mood::Surprised => [
            "  _______  ",
            " /       \\ ",
            "|  O   O  |",
            "|    o    |",
            " \\_______/ ",
        ],
        Mood::Neutral => [
            "  _______  ",
            " /       \\ ",
            "|  -   -  |",
            "|   ---   |",
            " \\_______/ ",
        ],
    }
}

fn unicode_face(mood: Mood) -> [&'static str; 5] {
    match mood {
        Mood::Thinking => [
            " ╭───────╮ ",
            " │       │ ",
            " │ •   • │ ",
            " │   ~   │ ",
            " ╰───────╯ ",
        ],
        Mood::Happy => [
            " ╭───────╮ ",
            " │       │ ",
            " │ ◠   ◠ │ ",
            " │ ╰───╯ │ ",
            " ╰───────╯ ",
        ],
        Mood::Sad => [
            " ╭───────╮ ",
            " │       │ ",
            " │ ╥   ╥ │ ",
            " │ ╭───╮ │ ",
            " ╰───────╯ ",
        ],
        Mood::Surprised => [
            " ╭───────╮ ",
            " │       │ ",
            " │ ◉   ◉ │ ",
            " │   ○   │ ",
            " ╰───────╯ ",
        ],
        Mood::Neutral => [
            " ╭───────╮ ",
            " │       │ ",
            " │ •   • │ ",
            " │  ───  │ ",
            " ╰───────╯ ",
        ],
    }
}

/// Display width of every art line.
#[must_use]
pub const fn width() -> usize {
    ART_WIDTH
}
