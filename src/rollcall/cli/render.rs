//! # Rendering
//!
//! Turns command results into terminal text. Layout math (column widths,
//! truncation, padding) is Unicode-aware; colors are applied last and can be
//! switched off so the layout can be tested as plain text.

use colored::{ColoredString, Colorize};
use rollcall::api::{CmdMessage, MessageLevel};
use rollcall::model::{Field, FieldErrors, StudentRecord};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ID_WIDTH: usize = 14;
const ROLL_NO_WIDTH: usize = 15;
const NAME_WIDTH: usize = 22;
const EMAIL_WIDTH: usize = 28;
const PHONE_WIDTH: usize = 10;
const COURSE_WIDTH: usize = 22;

const COLUMNS: [(&str, usize); 6] = [
    ("ID", ID_WIDTH),
    ("Roll No", ROLL_NO_WIDTH),
    ("Name", NAME_WIDTH),
    ("Email", EMAIL_WIDTH),
    ("Phone", PHONE_WIDTH),
    ("Course", COURSE_WIDTH),
];

const LABEL_WIDTH: usize = 12;

pub const EMPTY_LIST: &str = "No students found.";
const EMPTY_HINT: &str = "Use `rollcall register` to add the first student.";

fn use_color() -> bool {
    colored::control::SHOULD_COLORIZE.should_colorize()
}

fn paint(text: &str, color: bool, style: fn(&str) -> ColoredString) -> String {
    if color {
        style(text).to_string()
    } else {
        text.to_string()
    }
}

pub fn render_student_list(records: &[StudentRecord]) -> String {
    render_student_list_internal(records, use_color())
}

fn render_student_list_internal(records: &[StudentRecord], color: bool) -> String {
    if records.is_empty() {
        return format!(
            "{}\n{}\n",
            EMPTY_LIST,
            paint(EMPTY_HINT, color, |s| s.dimmed())
        );
    }

    let mut output = String::new();
    let header: Vec<&str> = COLUMNS.iter().map(|(title, _)| *title).collect();
    output.push_str(&paint(&format_row(&header), color, |s| s.bold()));
    output.push('\n');

    for record in records {
        let id = record.id.to_string();
        let cells = [
            id.as_str(),
            record.roll_no.as_str(),
            record.name.as_str(),
            record.email.as_str(),
            record.phone.as_str(),
            record.course.as_str(),
        ];
        output.push_str(&format_row(&cells));
        output.push('\n');
    }
    output
}

fn format_row(cells: &[&str]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(COLUMNS.iter())
        .map(|(cell, (_, width))| pad_to_width(&truncate_to_width(cell, *width), *width))
        .collect();
    padded.join("  ").trim_end().to_string()
}

pub fn render_student_detail(record: &StudentRecord) -> String {
    render_student_detail_internal(record, use_color())
}

fn render_student_detail_internal(record: &StudentRecord, color: bool) -> String {
    let id = record.id.to_string();
    let rows = [
        ("ID", id.as_str()),
        (Field::RollNo.label(), record.roll_no.as_str()),
        (Field::Name.label(), record.name.as_str()),
        (Field::Email.label(), record.email.as_str()),
        (Field::Phone.label(), record.phone.as_str()),
        (Field::Course.label(), record.course.as_str()),
        (Field::Address.label(), record.address.as_str()),
    ];

    let mut output = String::new();
    for (label, value) in rows {
        let label = format!("{:>width$}:", label, width = LABEL_WIDTH);
        output.push_str(&paint(&label, color, |s| s.yellow()));
        if !value.is_empty() {
            output.push(' ');
            output.push_str(value);
        }
        output.push('\n');
    }
    output
}

/// One line per failing field, labelled the way a form would show it.
pub fn render_field_errors(errors: &FieldErrors) -> String {
    render_field_errors_internal(errors, use_color())
}

fn render_field_errors_internal(errors: &FieldErrors, color: bool) -> String {
    errors
        .failing()
        .into_iter()
        .map(|(field, message)| {
            format!(
                "  {}: {}\n",
                field.label(),
                paint(message, color, |s| s.red())
            )
        })
        .collect()
}

pub fn render_text_list(lines: &[String], empty_message: &str) -> String {
    if lines.is_empty() {
        return format!("{}\n", empty_message);
    }
    lines.iter().map(|line| format!("{}\n", line)).collect()
}

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
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
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}
