use colored::Colorize;
use linkdb::api::{CmdMessage, ListedLink, MessageLevel};
use linkdb::config::LinkDbConfig;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const ID_WIDTH: usize = 5;
const TAG_MARKER: &str = "#";

/// Warnings and errors go to stderr so scripted output stays clean.
pub(crate) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

/// One line per link: id, name (or location), then tags right-aligned.
pub(crate) fn print_links(links: &[ListedLink]) {
    if links.is_empty() {
        println!("No links found.");
        return;
    }

    for link in links {
        let id_str = format!("{:>width$}. ", link.id, width = ID_WIDTH);
        let entry = &link.entry;

        let title = match (entry.name().is_empty(), entry.location().is_empty()) {
            (false, true) => entry.name().to_string(),
            (false, false) => format!("{}  {}", entry.name(), entry.location()),
            (true, false) => entry.location().to_string(),
            (true, true) => "(empty link)".to_string(),
        };
        let tags: String = entry
            .tags()
            .iter()
            .map(|t| format!("{}{}", TAG_MARKER, t))
            .collect::<Vec<_>>()
            .join(" ");

        let fixed_width = id_str.width() + tags.width() + 1;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let title_display = truncate_to_width(&title, available);
        let padding = available.saturating_sub(title_display.width());

        println!(
            "{}{}{} {}",
            id_str.yellow(),
            title_display,
            " ".repeat(padding),
            tags.cyan()
        );
    }
}

pub(crate) fn print_full_links(links: &[ListedLink]) {
    for (i, link) in links.iter().enumerate() {
        if i > 0 {
            println!("\n================================\n");
        }
        let entry = &link.entry;
        println!("{} {}", link.id.to_string().yellow(), entry.name().bold());
        println!("--------------------------------");
        println!("{:<12}{}", "location:".dimmed(), entry.location());
        if !entry.description().is_empty() {
            println!("{:<12}{}", "description:".dimmed(), entry.description());
        }
        if !entry.tags().is_empty() {
            let tags: Vec<&str> = entry.tags().iter().map(String::as_str).collect();
            println!("{:<12}{}", "tags:".dimmed(), tags.join(", ").cyan());
        }
        for (key, value) in entry.attributes() {
            println!("{:<12}{} = {}", "attribute:".dimmed(), key, value);
        }
    }
}

pub(crate) fn print_config(config: &LinkDbConfig) {
    for key in LinkDbConfig::keys() {
        if let Ok(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}
