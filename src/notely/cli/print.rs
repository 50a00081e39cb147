use chrono::{DateTime, Utc};
use colored::Colorize;
use notely::model::Note;
use notely::share::SharePayload;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
const ARCHIVE_MARKER: &str = "▣";

/// Print a listing of notes. Each entry carries its 1-based position in the
/// full collection so other commands can address it.
pub fn print_notes(entries: &[(usize, &Note)]) {
    if entries.is_empty() {
        println!("No notes found.");
        return;
    }

    for (position, note) in entries {
        let idx_str = format!("{}. ", position);

        let marker = if note.is_archived {
            format!("{} ", ARCHIVE_MARKER)
        } else {
            "  ".to_string()
        };

        let mut summary = note.display_title().to_string();
        let preview: String = note
            .content
            .chars()
            .take(50)
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();
        if !preview.is_empty() {
            summary.push(' ');
            summary.push_str(&preview);
        }
        for tag in &note.tags {
            summary.push_str(&format!(" #{}", tag));
        }
        if let Some(category) = &note.category {
            summary.push_str(&format!(" ▸{}", category));
        }

        let fixed_width = marker.width() + idx_str.width() + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let summary_display = truncate_to_width(&summary, available);
        let padding = available.saturating_sub(summary_display.width());

        let idx_colored = if note.is_archived {
            idx_str.yellow()
        } else {
            idx_str.normal()
        };

        println!(
            "{}{}{}{}{}",
            marker,
            idx_colored,
            summary_display,
            " ".repeat(padding),
            format_time_ago(note.last_edited).dimmed()
        );
    }
}

pub fn print_full_note(position: usize, note: &Note) {
    println!(
        "{} {}",
        format!("{}.", position).yellow(),
        note.display_title().bold()
    );
    if !note.tags.is_empty() {
        let tags: Vec<String> = note.tags.iter().map(|t| format!("#{}", t)).collect();
        println!("{}", tags.join(" ").cyan());
    }
    if let Some(category) = &note.category {
        println!("{}", format!("▸ {}", category).cyan());
    }
    if note.is_archived {
        println!("{}", "(archived)".yellow());
    }
    println!("--------------------------------");
    println!("{}", note.content);
}

pub fn print_shared(payload: &SharePayload) {
    let title = if payload.title.trim().is_empty() {
        "Untitled Note"
    } else {
        &payload.title
    };
    println!("{}", title.bold());
    println!("--------------------------------");
    println!("{}", payload.content);
}

pub fn print_labels(labels: &[String]) {
    if labels.is_empty() {
        println!("Nothing here yet.");
        return;
    }
    for label in labels {
        println!("{}", label);
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
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

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(timestamp);

    let formatter = Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());

    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
