//! Parsing for the interactive prompt.
//!
//! One line of input maps to one `Command`. The first whitespace-delimited
//! word is the verb (case-sensitive, single-letter aliases included); the
//! rest of the line is handed to the handler as a raw argument string.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `search <query>` / `s <query>`: search and auto-play the first hit.
    Search(String),
    /// `pause` / `p`: toggle pause/resume.
    Pause,
    /// `stop` / `x`: stop playback.
    Stop,
    /// `next` / `n`: advance to the next track, wrapping around.
    Next,
    /// `list` / `l`: print the numbered catalog.
    List,
    /// `play <number>`: play a specific track, 1-based.
    Play(String),
    /// `help` / `h`: print the command summary.
    Help,
    /// `quit` / `q`: stop playback and exit.
    Quit,
    /// Anything else.
    Unknown(String),
    /// A blank line.
    Empty,
}

impl Command {
    pub fn parse(line: &str) -> Command {
        let line = line.trim();
        if line.is_empty() {
            return Command::Empty;
        }

        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb {
            "search" | "s" => Command::Search(rest.to_string()),
            "pause" | "p" => Command::Pause,
            "stop" | "x" => Command::Stop,
            "next" | "n" => Command::Next,
            "list" | "l" => Command::List,
            "play" => Command::Play(rest.to_string()),
            "help" | "h" => Command::Help,
            "quit" | "q" => Command::Quit,
            other => Command::Unknown(other.to_string()),
        }
    }
}

const COMMANDS: &[(&str, &str)] = &[
    ("s <query>", "Search for a song and play it"),
    ("p", "Pause or resume the current song"),
    ("x", "Stop the current song"),
    ("n", "Play the next song"),
    ("l", "List all songs"),
    ("play <number>", "Play a specific song by number"),
    ("q", "Exit the program"),
    ("h", "Show this help message"),
];

/// The command summary printed after every command and on `help`.
pub fn help_text() -> String {
    let mut out = String::from("\nCommands:\n");
    for (usage, description) in COMMANDS {
        out.push_str(&format!("  {usage:<15} {description}\n"));
    }
    out.push('\n');
    out
}
