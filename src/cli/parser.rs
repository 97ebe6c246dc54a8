//! Command line parsing for the interactive loop

/// Commands understood by the interactive loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    RemovePhone,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    All,
    Delete,
    Help,
    Exit,
}

impl Command {
    /// Every command, in the order `help` lists them
    pub const ALL: [Command; 12] = [
        Command::Hello,
        Command::Add,
        Command::Change,
        Command::Phone,
        Command::RemovePhone,
        Command::AddBirthday,
        Command::ShowBirthday,
        Command::Birthdays,
        Command::All,
        Command::Delete,
        Command::Help,
        Command::Exit,
    ];

    /// Look up a command by its (lowercase) name
    pub fn from_name(name: &str) -> Option<Self> {
        let command = match name {
            "hello" => Self::Hello,
            "add" => Self::Add,
            "change" => Self::Change,
            "phone" => Self::Phone,
            "remove-phone" => Self::RemovePhone,
            "add-birthday" => Self::AddBirthday,
            "show-birthday" => Self::ShowBirthday,
            "birthdays" => Self::Birthdays,
            "all" => Self::All,
            "delete" => Self::Delete,
            "help" => Self::Help,
            "exit" | "close" => Self::Exit,
            _ => return None,
        };
        Some(command)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Hello => "hello",
            Self::Add => "add",
            Self::Change => "change",
            Self::Phone => "phone",
            Self::RemovePhone => "remove-phone",
            Self::AddBirthday => "add-birthday",
            Self::ShowBirthday => "show-birthday",
            Self::Birthdays => "birthdays",
            Self::All => "all",
            Self::Delete => "delete",
            Self::Help => "help",
            Self::Exit => "exit",
        }
    }

    pub fn usage(self) -> &'static str {
        match self {
            Self::Hello => "hello",
            Self::Add => "add <name> <phone>",
            Self::Change => "change <name> <old_phone> <new_phone>",
            Self::Phone => "phone <name>",
            Self::RemovePhone => "remove-phone <name> <phone>",
            Self::AddBirthday => "add-birthday <name> <DD.MM.YYYY>",
            Self::ShowBirthday => "show-birthday <name>",
            Self::Birthdays => "birthdays",
            Self::All => "all",
            Self::Delete => "delete <name>",
            Self::Help => "help",
            Self::Exit => "exit | close",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Hello => "Greet the assistant",
            Self::Add => "Add a contact, or another phone to an existing one",
            Self::Change => "Replace one of a contact's phones",
            Self::Phone => "Show a contact's phones",
            Self::RemovePhone => "Remove a phone from a contact",
            Self::AddBirthday => "Set a contact's birthday",
            Self::ShowBirthday => "Show a contact's birthday",
            Self::Birthdays => "List greetings due in the coming week",
            Self::All => "List all contacts",
            Self::Delete => "Delete a contact",
            Self::Help => "Show this help",
            Self::Exit => "Save and quit",
        }
    }

    /// Whether the command can change the address book
    pub fn is_mutating(self) -> bool {
        matches!(
            self,
            Self::Add | Self::Change | Self::RemovePhone | Self::AddBirthday | Self::Delete
        )
    }
}

/// Split a raw input line into a lowercased command token and its arguments
///
/// Returns `None` for a blank line.
pub fn parse_input(line: &str) -> Option<(String, Vec<String>)> {
    let mut parts = line.split_whitespace();
    let command = parts.next()?.to_lowercase();
    let args = parts.map(str::to_string).collect();
    Some((command, args))
}
