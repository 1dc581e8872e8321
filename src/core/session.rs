use crate::core::birthdays::BirthdayWindowQuery;
use crate::core::command::Command;
use crate::core::store::ContactStore;
use crate::domain::model::Birthday;
use crate::domain::ports::{Clock, ContactRepository, LoadOutcome};
use crate::utils::error::Result;
use std::io::{BufRead, Write};

pub const WELCOME: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";
const SAVING: &str = "Saving address book...";

/// Lines to print for one command, and whether the console should stop.
///
/// An `exit` reply has not saved anything yet; the caller follows it with
/// [`Session::close`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reply {
    pub lines: Vec<String>,
    pub exit: bool,
}

impl Reply {
    fn line(text: impl Into<String>) -> Self {
        Self {
            lines: vec![text.into()],
            exit: false,
        }
    }
}

/// One console run: the address book, where it is persisted and what day it is.
pub struct Session<R: ContactRepository, C: Clock> {
    store: ContactStore,
    repository: R,
    clock: C,
    query: BirthdayWindowQuery,
}

impl<R: ContactRepository, C: Clock> Session<R, C> {
    /// Loads the address book and returns the session with its startup banner.
    ///
    /// A missing file starts an empty book; a corrupt one is an error so that it
    /// is never overwritten on exit.
    pub fn open(
        repository: R,
        clock: C,
        query: BirthdayWindowQuery,
    ) -> Result<(Self, Vec<String>)> {
        let mut banner = Vec::new();
        let store = match repository.load()? {
            LoadOutcome::Loaded(contacts) => {
                banner.push("Address book loaded successfully.".to_string());
                ContactStore::from_contacts(contacts)
            }
            LoadOutcome::Missing => {
                banner.push("File not found. Creating a new address book.".to_string());
                ContactStore::new()
            }
        };
        banner.push(WELCOME.to_string());

        let session = Self {
            store,
            repository,
            clock,
            query,
        };
        Ok((session, banner))
    }

    pub fn store(&self) -> &ContactStore {
        &self.store
    }

    /// Runs one console line. Input mistakes become reply text.
    pub fn execute(&mut self, line: &str) -> Reply {
        let command = match Command::parse(line) {
            None => return Reply::default(),
            Some(Ok(command)) => command,
            Some(Err(e)) => return Reply::line(e.to_string()),
        };
        tracing::debug!("Executing {:?}", command);

        match command {
            Command::Hello => Reply::line("How can I help you?"),
            Command::Add { name, phone } => {
                Reply::line(message(self.store.add_contact(&name, &phone, None), |()| {
                    "Contact added.".to_string()
                }))
            }
            Command::AddBirthday { name, birthday } => {
                Reply::line(message(self.store.add_birthday(&name, &birthday), |()| {
                    "Birthday added for the contact.".to_string()
                }))
            }
            Command::Change { name, phone } => {
                Reply::line(message(self.store.change_phone(&name, &phone), |()| {
                    format!("Phone number updated for {}.", name)
                }))
            }
            Command::Phone { name } => Reply::line(message(self.store.show_phone(&name), |phone| {
                format!("Phone number for {}: {}", name, phone)
            })),
            Command::ShowBirthday { name } => {
                Reply::line(message(self.store.show_birthday(&name), |birthday| {
                    format!(
                        "Birthday for {}: {}",
                        name,
                        birthday.map_or("N/A", Birthday::as_str)
                    )
                }))
            }
            Command::All => match self.store.list_all() {
                Some(contacts) => Reply {
                    lines: contacts.iter().map(ToString::to_string).collect(),
                    exit: false,
                },
                None => Reply::line("No contacts found."),
            },
            Command::Birthdays => self.birthdays(),
            Command::Exit => Reply {
                lines: vec![SAVING.to_string()],
                exit: true,
            },
            Command::Unknown(word) => {
                tracing::debug!("Unknown command: {}", word);
                Reply::line("Invalid command.")
            }
        }
    }

    /// Saves the book and returns the farewell.
    pub fn close(&mut self) -> Result<Reply> {
        tracing::info!("Saving address book to {}", self.repository.location());
        self.repository.save(self.store.contacts())?;
        Ok(Reply {
            lines: vec!["Good bye!".to_string()],
            exit: true,
        })
    }

    /// Prompt loop over `input` until `exit`/`close` or end of input, both of
    /// which save.
    ///
    /// Lines are read as bytes; invalid UTF-8 is replaced rather than
    /// rejected. If reading fails the book is still saved before the error is
    /// returned.
    pub fn run<I: BufRead, O: Write>(&mut self, mut input: I, mut output: O) -> Result<()> {
        let mut buf = Vec::new();
        loop {
            write!(output, "{}", PROMPT)?;
            output.flush()?;

            buf.clear();
            let reply = match input.read_until(b'\n', &mut buf) {
                Ok(0) => {
                    // 輸入結束 (Ctrl-D) 時同樣存檔
                    writeln!(output)?;
                    Reply {
                        lines: vec![SAVING.to_string()],
                        exit: true,
                    }
                }
                Ok(_) => self.execute(&String::from_utf8_lossy(&buf)),
                Err(e) => {
                    tracing::error!("❌ Failed to read console input: {}", e);
                    writeln!(output, "{}", SAVING)?;
                    self.close()?;
                    return Err(e.into());
                }
            };

            write_lines(&mut output, &reply.lines)?;
            if reply.exit {
                let farewell = self.close()?;
                write_lines(&mut output, &farewell.lines)?;
                output.flush()?;
                return Ok(());
            }
        }
    }

    fn birthdays(&self) -> Reply {
        let report = self.query.run(&self.store, self.clock.today());
        let mut lines: Vec<String> = report.skipped.iter().map(ToString::to_string).collect();

        if report.is_empty() {
            lines.push("No birthdays coming up next week.".to_string());
        } else {
            lines.push("Colleagues to congratulate on their birthdays next week:".to_string());
            lines.extend(
                report
                    .upcoming
                    .iter()
                    .map(|b| format!("{}: {}", b.name, b.date.format("%Y-%m-%d"))),
            );
        }

        Reply { lines, exit: false }
    }
}

fn write_lines<O: Write>(output: &mut O, lines: &[String]) -> Result<()> {
    for line in lines {
        writeln!(output, "{}", line)?;
    }
    Ok(())
}

fn message<T>(result: Result<T>, success: impl FnOnce(T) -> String) -> String {
    match result {
        Ok(value) => success(value),
        Err(e) => e.to_string(),
    }
}
