use colored::Colorize;
use std::path::PathBuf;
use stockroom::api::{CmdMessage, MessageLevel};
use stockroom::config::StockroomConfig;
use unicode_width::UnicodeWidthStr;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
        }
    }
}

/// Prints store text as stored, adding a final newline only if it lacks one.
pub(super) fn print_content(content: &str) {
    if content.trim().is_empty() {
        return;
    }
    print!("{}", content);
    if !content.ends_with('\n') {
        println!();
    }
}

pub(super) fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}

pub(super) fn print_paths(paths: &[PathBuf]) {
    for path in paths {
        println!("{}", path.display());
    }
}

pub(super) fn print_fields(fields: &[&str]) {
    let width = fields.iter().map(|f| f.width()).max().unwrap_or(0);
    for (i, field) in fields.iter().enumerate() {
        let marker = if i == 0 { "required" } else { "" };
        let padding = " ".repeat(width.saturating_sub(field.width()));
        println!(
            "{:>2}. {}{}  {}",
            i + 1,
            field.bold(),
            padding,
            marker.dimmed()
        );
    }
}

pub(super) fn print_config(config: &StockroomConfig) {
    for (key, value) in config.entries() {
        println!("{} = {}", key, value);
    }
}
