//! ANSI escape sequences understood by the terminal shell

pub const RESET: &str = "\x1b[0m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const MAGENTA: &str = "\x1b[35m";
pub const CYAN: &str = "\x1b[36m";
pub const WHITE: &str = "\x1b[37m";
pub const BOLD: &str = "\x1b[1m";
pub const BOLD_YELLOW: &str = "\x1b[1m\x1b[33m";

/// Clear screen and home the cursor
pub const CLEAR_HOME: &str = "\x1b[2J\x1b[H";

/// Move the cursor to zero-based (`x`, `y`)
pub fn move_to(x: i32, y: i32) -> String {
    format!("\x1b[{};{}H", y + 1, x + 1)
}

/// Number of visible characters in `text`, skipping escape sequences
pub fn visible_len(text: &str) -> usize {
    let mut len = 0;
    let mut in_escape = false;
    for ch in text.chars() {
        if in_escape {
            if ch.is_ascii_alphabetic() {
                in_escape = false;
            }
        } else if ch == '\x1b' {
            in_escape = true;
        } else {
            len += 1;
        }
    }
    len
}

/// Remove escape sequences, keeping only visible characters
pub fn strip(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_escape = false;
    for ch in text.chars() {
        if in_escape {
            if ch.is_ascii_alphabetic() {
                in_escape = false;
            }
        } else if ch == '\x1b' {
            in_escape = true;
        } else {
            out.push(ch);
        }
    }
    out
}
