use crate::utils::error::{BookError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add { name: String, phone: String },
    AddBirthday { name: String, birthday: String },
    Change { name: String, phone: String },
    Phone { name: String },
    ShowBirthday { name: String },
    All,
    Birthdays,
    Exit,
    Unknown(String),
}

impl Command {
    /// Splits a console line on whitespace and checks the argument count.
    ///
    /// Returns `None` for a blank line. The command word is matched
    /// case-insensitively; arguments are kept as typed.
    pub fn parse(line: &str) -> Option<Result<Command>> {
        let mut parts = line.split_whitespace();
        let word = parts.next()?.to_lowercase();
        let args: Vec<&str> = parts.collect();

        let command = match word.as_str() {
            "hello" => expect::<0>(&args, "hello").map(|_| Command::Hello),
            "add" => expect::<2>(&args, "add [name] [phone]").map(|[name, phone]| Command::Add {
                name: name.to_string(),
                phone: phone.to_string(),
            }),
            "add-birthday" => expect::<2>(&args, "add-birthday [name] [birthday]").map(
                |[name, birthday]| Command::AddBirthday {
                    name: name.to_string(),
                    birthday: birthday.to_string(),
                },
            ),
            "change" => {
                expect::<2>(&args, "change [name] [new_phone]").map(|[name, phone]| {
                    Command::Change {
                        name: name.to_string(),
                        phone: phone.to_string(),
                    }
                })
            }
            "phone" => expect::<1>(&args, "phone [name]").map(|[name]| Command::Phone {
                name: name.to_string(),
            }),
            "show-birthday" => {
                expect::<1>(&args, "show-birthday [name]").map(|[name]| Command::ShowBirthday {
                    name: name.to_string(),
                })
            }
            "all" => expect::<0>(&args, "all").map(|_| Command::All),
            "birthdays" => expect::<0>(&args, "birthdays").map(|_| Command::Birthdays),
            "close" | "exit" => expect::<0>(&args, "close | exit").map(|_| Command::Exit),
            _ => Ok(Command::Unknown(word)),
        };

        Some(command)
    }
}

fn expect<'a, const N: usize>(args: &[&'a str], usage: &'static str) -> Result<[&'a str; N]> {
    <[&str; N]>::try_from(args).map_err(|_| BookError::Usage { usage })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Result<Command> {
        Command::parse(line).expect("non-blank line")
    }

    #[test]
    fn test_blank_line() {
        assert!(Command::parse("").is_none());
        assert!(Command::parse("   \t ").is_none());
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse("hello").unwrap(), Command::Hello);
        assert_eq!(
            parse("add Alice 0123456789").unwrap(),
            Command::Add {
                name: "Alice".to_string(),
                phone: "0123456789".to_string()
            }
        );
        assert_eq!(
            parse("add-birthday Alice 05-03-1990").unwrap(),
            Command::AddBirthday {
                name: "Alice".to_string(),
                birthday: "05-03-1990".to_string()
            }
        );
        assert_eq!(
            parse("change Alice 0987654321").unwrap(),
            Command::Change {
                name: "Alice".to_string(),
                phone: "0987654321".to_string()
            }
        );
        assert_eq!(
            parse("phone Alice").unwrap(),
            Command::Phone {
                name: "Alice".to_string()
            }
        );
        assert_eq!(
            parse("show-birthday Alice").unwrap(),
            Command::ShowBirthday {
                name: "Alice".to_string()
            }
        );
        assert_eq!(parse("all").unwrap(), Command::All);
        assert_eq!(parse("birthdays").unwrap(), Command::Birthdays);
        assert_eq!(parse("close").unwrap(), Command::Exit);
        assert_eq!(parse("exit").unwrap(), Command::Exit);
    }

    #[test]
    fn test_command_word_is_case_insensitive() {
        assert_eq!(parse("HeLLo").unwrap(), Command::Hello);
        assert_eq!(
            parse("  PHONE   Alice  ").unwrap(),
            Command::Phone {
                name: "Alice".to_string()
            }
        );
    }

    #[test]
    fn test_wrong_argument_count() {
        for (line, usage) in [
            ("add Alice", "add [name] [phone]"),
            ("add Alice 0123456789 extra", "add [name] [phone]"),
            ("add-birthday Alice", "add-birthday [name] [birthday]"),
            ("change", "change [name] [new_phone]"),
            ("phone", "phone [name]"),
            ("phone Alice Bob", "phone [name]"),
            ("show-birthday", "show-birthday [name]"),
            ("all now", "all"),
            ("birthdays soon", "birthdays"),
            ("hello there", "hello"),
            ("exit now", "close | exit"),
        ] {
            match parse(line) {
                Err(BookError::Usage { usage: got }) => assert_eq!(got, usage, "{line}"),
                other => panic!("{line}: unexpected {other:?}"),
            }
        }
    }

    #[test]
    fn test_usage_message() {
        let err = parse("add Alice").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid number of arguments. Usage: add [name] [phone]"
        );
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            parse("delete Alice").unwrap(),
            Command::Unknown("delete".to_string())
        );
    }
}
