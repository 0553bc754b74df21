//! The interactive `>>>` prompt.
//!
//! Single-letter actions, each a variant of [`MenuAction`]. Sub-prompts are
//! shown as `(question) `. End of input anywhere ends the session; the caller
//! then saves the dictionary as for any other orderly exit.

use super::render::{print_entries, print_lookups, print_messages};
use std::io::{BufRead, Write};
use tracing::error;
use wordz::api::WordzApi;
use wordz::error::{Result, WordzError};
use wordz::model::normalize_word;
use wordz::store::StorageBackend;

const PROMPT: &str = ">>> ";
const CHOICES: [&str; 4] = ["y", "Y", "n", "N"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    List,
    Add,
    Search,
    Remove,
    Quit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 5] = [
        MenuAction::List,
        MenuAction::Add,
        MenuAction::Search,
        MenuAction::Remove,
        MenuAction::Quit,
    ];

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.key() == key)
    }

    pub fn key(self) -> &'static str {
        match self {
            MenuAction::List => "l",
            MenuAction::Add => "a",
            MenuAction::Search => "s",
            MenuAction::Remove => "r",
            MenuAction::Quit => "q",
        }
    }

    fn description(self) -> &'static str {
        match self {
            MenuAction::List => "list words in the dictionary",
            MenuAction::Add => "add a word to the dictionary",
            MenuAction::Search => "search a word in the dictionary",
            MenuAction::Remove => "remove a word from the dictionary",
            MenuAction::Quit => "quit",
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub struct Menu<'a, B: StorageBackend, R: BufRead, W: Write> {
    api: &'a WordzApi<B>,
    input: R,
    output: W,
}

impl<'a, B: StorageBackend, R: BufRead, W: Write> Menu<'a, B, R, W> {
    pub fn new(api: &'a WordzApi<B>, input: R, output: W) -> Self {
        Self { api, input, output }
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            let Some(line) = self.read(PROMPT)? else {
                writeln!(self.output)?;
                return Ok(());
            };
            let key = line.trim();
            if key.is_empty() {
                continue;
            }
            let Some(action) = MenuAction::from_key(key) else {
                self.print_usage()?;
                continue;
            };
            match self.execute(action) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => return Ok(()),
                Err(WordzError::Io(e)) => return Err(WordzError::Io(e)),
                Err(e) => {
                    error!("{:?} failed: {}", action, e);
                    writeln!(self.output, "Error: {}", e)?;
                }
            }
        }
    }

    fn execute(&mut self, action: MenuAction) -> Result<Flow> {
        match action {
            MenuAction::List => self.list(),
            MenuAction::Add => self.add(),
            MenuAction::Search => self.search(),
            MenuAction::Remove => self.remove(),
            MenuAction::Quit => {
                self.say("Exiting...")?;
                Ok(Flow::Quit)
            }
        }
    }

    fn list(&mut self) -> Result<Flow> {
        let result = self.api.list_words()?;
        print_entries(&mut self.output, &result.listed_entries)?;
        Ok(Flow::Continue)
    }

    fn add(&mut self) -> Result<Flow> {
        let Some(word) = self.ask("Input word to add")? else {
            return Ok(Flow::Quit);
        };
        let word = normalize_word(&word);
        if word.is_empty() {
            self.say("Word cannot be empty")?;
            return Ok(Flow::Continue);
        }

        if let Some(current) = self.api.meaning_of(&word) {
            self.say(&format!("{} already exists in the dictionary.", word))?;
            self.say(&format!(" Current meaning: {}", current))?;
            match self.confirm("Replace it with new meaning? y/N")? {
                Some(true) => {}
                Some(false) => return Ok(Flow::Continue),
                None => return Ok(Flow::Quit),
            }
        }

        let Some(meaning) = self.ask_non_empty("Input meaning")? else {
            return Ok(Flow::Quit);
        };
        let result = self.api.add_word(&word, &meaning, true)?;
        print_messages(&mut self.output, &result.messages)?;
        Ok(Flow::Continue)
    }

    fn search(&mut self) -> Result<Flow> {
        let Some(word) = self.ask("Input word to search")? else {
            return Ok(Flow::Quit);
        };
        let result = self.api.search_word(&word)?;
        print_lookups(&mut self.output, &result.lookups)?;
        Ok(Flow::Continue)
    }

    fn remove(&mut self) -> Result<Flow> {
        let Some(word) = self.ask("Input word to delete")? else {
            return Ok(Flow::Quit);
        };
        match self.confirm(&format!("confirm: delete {}? y/N", word))? {
            Some(true) => {
                let result = self.api.remove_word(&word)?;
                print_messages(&mut self.output, &result.messages)?;
                Ok(Flow::Continue)
            }
            Some(false) => Ok(Flow::Continue),
            None => Ok(Flow::Quit),
        }
    }

    fn print_usage(&mut self) -> Result<()> {
        writeln!(self.output, "These are the supported commands:")?;
        for action in MenuAction::ALL {
            writeln!(self.output, "{}   {}", action.key(), action.description())?;
        }
        Ok(())
    }

    fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "({})", text)?;
        Ok(())
    }

    fn ask(&mut self, question: &str) -> Result<Option<String>> {
        self.read(&format!("({}) ", question))
    }

    fn ask_non_empty(&mut self, question: &str) -> Result<Option<String>> {
        loop {
            match self.ask(question)? {
                Some(answer) if answer.trim().is_empty() => self.say("Input cannot be empty")?,
                other => return Ok(other),
            }
        }
    }

    /// `Some(true)` for y/Y, `Some(false)` for n/N, re-asked otherwise.
    fn confirm(&mut self, question: &str) -> Result<Option<bool>> {
        loop {
            let Some(answer) = self.ask(question)? else {
                return Ok(None);
            };
            let answer = answer.trim();
            if CHOICES.contains(&answer) {
                return Ok(Some(answer.eq_ignore_ascii_case("y")));
            }
        }
    }

    /// One line without its terminator, `None` at end of input.
    fn read(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}
