use termimad::{
    MadSkin,
    crossterm::style::{Color, Stylize},
};

/// Prints the core's plain-text messages, optionally with ANSI colors.
pub struct Renderer {
    skin: MadSkin,
    use_color: bool,
}

impl Renderer {
    pub fn new(use_color: bool) -> Self {
        Self {
            skin: MadSkin::default(),
            use_color,
        }
    }

    pub fn print_info(&self, message: &str) {
        if self.use_color {
            let md = format!("|-|\n| {message} |\n|-|\n");
            self.skin.print_text(&md);
        } else {
            println!("{message}");
        }
    }

    /// Prints the reminder message. Section headers (the lines ending in
    /// `:`) get color; entry lines stay untouched.
    pub fn print_message(&self, message: &str) {
        for line in message.lines() {
            if self.use_color && line.ends_with(':') {
                println!("{}", line.with(Color::Cyan));
            } else {
                println!("{line}");
            }
        }
    }

    /// Prints the unparsed-lines message to stderr, header first.
    pub fn print_error_message(&self, message: &str) {
        for (i, line) in message.lines().enumerate() {
            if self.use_color && i == 0 {
                eprintln!("{}", line.with(Color::Red));
            } else {
                eprintln!("{line}");
            }
        }
    }
}
