//! Validated prompts
//!
//! Each prompt loops until the answer parses. `Ok(None)` means the input
//! was closed.

use std::io::{BufRead, Write};

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::Result;
use crate::record::{parse_balance, parse_date, Record};

pub(crate) const INVALID_INTEGER: &str = "Invalid value! Please enter a positive whole number.";
pub(crate) const INVALID_DATE: &str = "Invalid date format! Please enter the date as yyyy-MM-dd.";
pub(crate) const INVALID_DECIMAL: &str = "Invalid value! Please enter a number.";

/// Line-oriented prompter over an input/output pair
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `prompt` and read one line without its line ending
    pub fn line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }

        let trimmed = buf.trim_end_matches(['\n', '\r']).len();
        buf.truncate(trimmed);
        Ok(Some(buf))
    }

    /// Ask for a positive whole number (a 1-based record number)
    pub fn positive_integer(&mut self, prompt: &str) -> Result<Option<usize>> {
        self.retry(prompt, INVALID_INTEGER, |answer| {
            answer.trim().parse::<usize>().ok().filter(|n| *n > 0)
        })
    }

    /// Ask for a `yyyy-MM-dd` date
    pub fn date(&mut self, prompt: &str) -> Result<Option<NaiveDate>> {
        self.retry(prompt, INVALID_DATE, |answer| parse_date(answer).ok())
    }

    /// Ask for a decimal amount
    pub fn decimal(&mut self, prompt: &str) -> Result<Option<Decimal>> {
        self.retry(prompt, INVALID_DECIMAL, |answer| parse_balance(answer).ok())
    }

    /// Ask for a name that fits the line format
    pub fn name(&mut self, prompt: &str, field: &'static str) -> Result<Option<String>> {
        loop {
            let Some(answer) = self.line(prompt)? else {
                return Ok(None);
            };
            match Record::validate_name(field, &answer) {
                Ok(()) => return Ok(Some(answer)),
                Err(e) => self.say(&e.to_string())?,
            }
        }
    }

    /// Ask for all four fields of a record
    pub fn record(&mut self) -> Result<Option<Record>> {
        let Some(last_name) = self.name("Last name: ", "last name")? else {
            return Ok(None);
        };
        let Some(first_name) = self.name("First name: ", "first name")? else {
            return Ok(None);
        };
        let Some(date) = self.date("Last transaction date (yyyy-MM-dd): ")? else {
            return Ok(None);
        };
        let Some(balance) = self.decimal("Balance: ")? else {
            return Ok(None);
        };

        Record::new(last_name, first_name, date, balance).map(Some)
    }

    /// Write one line of output
    pub fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    /// Output sink, for rendering
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Release the underlying input and output
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    fn retry<T>(
        &mut self,
        prompt: &str,
        complaint: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Result<Option<T>> {
        loop {
            let Some(answer) = self.line(prompt)? else {
                return Ok(None);
            };
            match parse(&answer) {
                Some(value) => return Ok(Some(value)),
                None => self.say(complaint)?,
            }
        }
    }
}
