use colored::Colorize;
use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;
use wordz::api::{CmdMessage, Lookup, MessageLevel};
use wordz::config::WordzConfig;
use wordz::model::Entry;

const WORD_HEADER: &str = "Word";
const MEANING_HEADER: &str = "Meaning";

pub(super) fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

/// Two-column word/meaning table, words padded to the widest one.
pub(super) fn print_entries<W: Write>(out: &mut W, entries: &[Entry]) -> io::Result<()> {
    if entries.is_empty() {
        return writeln!(out, "{}", "No data in dictionary".dimmed());
    }

    let width = entries
        .iter()
        .map(|e| e.word.width())
        .chain(std::iter::once(WORD_HEADER.width()))
        .max()
        .unwrap_or(0);

    writeln!(
        out,
        " {}   {}",
        pad(WORD_HEADER, width).bold(),
        MEANING_HEADER.bold()
    )?;
    writeln!(out, " {}   {}", "-".repeat(width), "-".repeat(10))?;
    for entry in entries {
        writeln!(out, " {}   {}", pad(&entry.word, width), entry.meaning)?;
    }
    Ok(())
}

pub(super) fn print_lookups<W: Write>(out: &mut W, lookups: &[Lookup]) -> io::Result<()> {
    for lookup in lookups {
        match lookup {
            Lookup::Found(entry) => {
                writeln!(out, "{} {}", "found with meaning:".green(), entry.meaning)?;
            }
            Lookup::Suggestions { query, matches } => {
                writeln!(out, "{}", not_found_line(query))?;
                writeln!(out, "Possible results:")?;
                for m in matches {
                    writeln!(out, "{} : {}", m.word.bold(), m.meaning)?;
                }
            }
            Lookup::NotFound { query } => {
                writeln!(out, "{}", not_found_line(query))?;
                writeln!(out, "{}", "No similar words found".dimmed())?;
            }
        }
    }
    Ok(())
}

pub(super) fn print_config<W: Write>(out: &mut W, config: &WordzConfig) -> io::Result<()> {
    for key in WordzConfig::KEYS {
        writeln!(out, "{} = {}", key, config.get(key).unwrap_or_default())?;
    }
    Ok(())
}

fn not_found_line(query: &str) -> String {
    format!("{} not found. Looking for similar ones.", query)
}

fn pad(s: &str, width: usize) -> String {
    format!("{}{}", s, " ".repeat(width.saturating_sub(s.width())))
}
