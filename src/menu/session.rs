//! Menu session
//!
//! The read-dispatch loop: one key per line, one command per key.

use std::io::{BufRead, Write};

use crate::error::Result;
use crate::protocol::Command;
use crate::store::Store;

use super::{write_response, Prompter};

const MENU: &str = "\nMenu:
a - Add record
e - Edit record
d - Delete record
s - Show all records
f - Search by last transaction date
o - Sort by balance
Enter - Exit";

/// Actions selectable from the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Add,
    Edit,
    Delete,
    Show,
    Find,
    Order,
    Exit,
}

impl MenuAction {
    /// Map a menu answer to an action
    ///
    /// An empty answer is Enter (exit). Only the first character counts and
    /// case is ignored.
    pub fn from_input(answer: &str) -> Option<Self> {
        let Some(key) = answer.trim().chars().next() else {
            return Some(MenuAction::Exit);
        };

        match key.to_ascii_lowercase() {
            'a' => Some(MenuAction::Add),
            'e' => Some(MenuAction::Edit),
            'd' => Some(MenuAction::Delete),
            's' => Some(MenuAction::Show),
            'f' => Some(MenuAction::Find),
            'o' => Some(MenuAction::Order),
            _ => None,
        }
    }
}

/// An interactive session over a borrowed store
pub struct Session<'a, R, W> {
    store: &'a mut Store,
    prompter: Prompter<R, W>,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(store: &'a mut Store, input: R, output: W) -> Self {
        Self {
            store,
            prompter: Prompter::new(input, output),
        }
    }

    /// Run until Enter or end of input
    ///
    /// Invalid answers are re-prompted; only I/O failures end the session
    /// with an error.
    pub fn run(&mut self) -> Result<()> {
        tracing::debug!(path = %self.store.path().display(), "Session started");

        loop {
            let Some(answer) = self.prompter.line(&format!("{}\n> ", MENU))? else {
                break;
            };

            let action = match MenuAction::from_input(&answer) {
                Some(MenuAction::Exit) => break,
                Some(action) => action,
                None => {
                    self.prompter.say("Unknown command.")?;
                    continue;
                }
            };

            let Some(command) = self.read_command(action)? else {
                break;
            };
            self.dispatch(command)?;
        }

        tracing::debug!("Session ended");
        Ok(())
    }

    /// Release the prompter's input and output
    pub fn into_inner(self) -> (R, W) {
        self.prompter.into_inner()
    }

    /// Gather whatever the action needs; `None` if input closed midway
    fn read_command(&mut self, action: MenuAction) -> Result<Option<Command>> {
        let command = match action {
            MenuAction::Add => self.prompter.record()?.map(|record| Command::Add { record }),
            MenuAction::Edit => {
                let Some(number) = self
                    .prompter
                    .positive_integer("Enter the number of the record to edit: ")?
                else {
                    return Ok(None);
                };
                self.prompter.record()?.map(|record| Command::Edit {
                    index: number - 1,
                    record,
                })
            }
            MenuAction::Delete => self
                .prompter
                .positive_integer("Enter the number of the record to delete: ")?
                .map(|number| Command::Delete { index: number - 1 }),
            MenuAction::Show => Some(Command::List),
            MenuAction::Find => self
                .prompter
                .date("Enter the date to search for (yyyy-MM-dd): ")?
                .map(|date| Command::SearchByDate { date }),
            MenuAction::Order => Some(Command::SortByBalance),
            MenuAction::Exit => None,
        };

        Ok(command)
    }

    fn dispatch(&mut self, command: Command) -> Result<()> {
        tracing::debug!(
            command = ?command.command_type(),
            mutation = command.is_mutation(),
            "Executing command"
        );

        let response = self.store.execute(command)?;
        write_response(self.prompter.output(), &response)
    }
}
