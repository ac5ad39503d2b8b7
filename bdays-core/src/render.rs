//! Builds the two plain-text display messages from classified views.
//!
//! Reminder message:
//!   <today section>
//!
//!   <upcoming section>
//!
//!   <this-month section>
//!
//! Error message: a header followed by each unparsed line verbatim.

use crate::entry::Entry;
use crate::views::Views;
use strum_macros::EnumString;

/// Which of the two fixed label sets to render with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum Language {
    #[default]
    English,
    Russian,
}

impl Language {
    /// The fixed label set for this language.
    pub fn labels(self) -> &'static Labels {
        match self {
            Language::English => &ENGLISH,
            Language::Russian => &RUSSIAN,
        }
    }
}

/// One fixed set of section labels.
#[derive(Debug)]
pub struct Labels {
    pub today_header: &'static str,
    pub today_empty: &'static str,
    pub upcoming_header: &'static str,
    pub uncertain_header: &'static str,
    pub errors_header: &'static str,
}

static ENGLISH: Labels = Labels {
    today_header: "Birthdays today:",
    today_empty: "No birthdays today",
    upcoming_header: "Birthdays soon:",
    uncertain_header: "This month:",
    errors_header: "Unprocessed lines:",
};

static RUSSIAN: Labels = Labels {
    today_header: "Сегодня празднуют:",
    today_empty: "Сегодня нет именинников",
    upcoming_header: "Скоро празднуют:",
    uncertain_header: "В этом месяце:",
    errors_header: "Не обработаны строки:",
};

/// The reminder message and the unparsable-lines message. Either may be
/// empty; an empty string means there is nothing to show at all.
#[derive(Debug, PartialEq)]
pub struct Messages {
    pub message: String,
    pub error_message: String,
}

/// Renders the classified views into the two display strings.
///
/// The today section is always first; when `today` is empty it collapses to
/// the fixed placeholder line. The upcoming and this-month sections are
/// omitted entirely when empty. When all three are empty the whole message
/// is the empty string, placeholder included — nothing to report means
/// nothing to show.
pub fn format_messages(views: &Views, labels: &Labels) -> Messages {
    let mut sections = Vec::new();
    if views.today.is_empty() {
        sections.push(labels.today_empty.to_string());
    } else {
        sections.push(section(labels.today_header, &views.today));
    }
    if !views.upcoming.is_empty() {
        sections.push(section(labels.upcoming_header, &views.upcoming));
    }
    if !views.uncertain.is_empty() {
        sections.push(section(labels.uncertain_header, &views.uncertain));
    }

    let nothing_to_report =
        views.today.is_empty() && views.upcoming.is_empty() && views.uncertain.is_empty();
    let message = if nothing_to_report {
        String::new()
    } else {
        sections.join("\n\n")
    };

    let error_message = if views.erroneous.is_empty() {
        String::new()
    } else {
        let mut lines = vec![labels.errors_header.to_string()];
        lines.extend(views.erroneous.iter().map(|entry| entry.raw.clone()));
        lines.join("\n")
    };

    Messages {
        message,
        error_message,
    }
}

fn section(header: &str, entries: &[Entry]) -> String {
    let mut lines = vec![header.to_string()];
    lines.extend(entries.iter().map(Entry::display_line));
    lines.join("\n")
}
