// Prompt module: line-based questions with validated answers

use crate::error::InputError;
use crate::mods::{Catalog, ModMap};
use regex::Regex;
use reqwest::Url;
use std::io::{BufRead, Write};

/// Pattern for new CLI names: two or more lowercase letters, hyphens only in between
pub const CLI_NAME_PATTERN: &str = "^[a-z]+[a-z-]*[a-z]+$";

/// Checks one answer; `InputError::Validation` makes the prompt ask again
pub trait Validator {
    fn validate(&self, input: &str) -> Result<(), InputError>;
}

/// Accepts anything
pub struct NoOpValidator;

impl Validator for NoOpValidator {
    fn validate(&self, _input: &str) -> Result<(), InputError> {
        Ok(())
    }
}

pub struct RegexValidator {
    regex: Regex,
    message: String,
}

impl RegexValidator {
    pub fn new(pattern: &str, message: impl Into<String>) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(pattern)?,
            message: message.into(),
        })
    }
}

impl Validator for RegexValidator {
    fn validate(&self, input: &str) -> Result<(), InputError> {
        if self.regex.is_match(input) {
            Ok(())
        } else {
            Err(InputError::validation(self.message.clone()))
        }
    }
}

/// Requires an absolute URL; reachability is not checked
pub struct UrlValidator;

impl Validator for UrlValidator {
    fn validate(&self, input: &str) -> Result<(), InputError> {
        Url::parse(input)
            .map(|_| ())
            .map_err(|e| InputError::validation(format!("Invalid URL: {}", e)))
    }
}

/// Rejects CLI names that are already taken
pub struct CliNameUniquenessValidator {
    existing: ModMap,
}

impl CliNameUniquenessValidator {
    pub fn new(existing: ModMap) -> Self {
        Self { existing }
    }
}

impl Validator for CliNameUniquenessValidator {
    fn validate(&self, input: &str) -> Result<(), InputError> {
        if self.existing.contains_key(input) {
            return Err(InputError::validation(format!("Name is not unique: {}", input)));
        }
        Ok(())
    }
}

/// Requires the name of an existing server group
pub struct GroupNameValidator<'a> {
    catalog: &'a Catalog,
}

impl<'a> GroupNameValidator<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }
}

impl Validator for GroupNameValidator<'_> {
    fn validate(&self, input: &str) -> Result<(), InputError> {
        if !self.catalog.contains(input) {
            return Err(InputError::validation(format!("Unknown server group: {}", input)));
        }
        Ok(())
    }
}

/// Asks a question and reads a whole line as the answer
pub struct LinePrompt<'a> {
    text: String,
    validators: Vec<Box<dyn Validator + 'a>>,
}

impl<'a> LinePrompt<'a> {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            validators: Vec::new(),
        }
    }

    pub fn with_validator(mut self, validator: impl Validator + 'a) -> Self {
        self.validators.push(Box::new(validator));
        self
    }

    /// Write the prompt and read answers until one passes every validator
    pub fn get_input<R: BufRead, W: Write>(
        &self,
        reader: &mut R,
        writer: &mut W,
    ) -> Result<String, InputError> {
        loop {
            write!(writer, "{}", self.text)?;
            writer.flush()?;

            let mut line = String::new();
            if reader.read_line(&mut line)? == 0 {
                return Err(InputError::Eof);
            }
            let response = line.trim_end_matches(['\r', '\n']).to_string();

            match self.check(&response) {
                Ok(()) => return Ok(response),
                Err(InputError::Validation(message)) => writeln!(writer, "{}", message)?,
                Err(e) => return Err(e),
            }
        }
    }

    fn check(&self, response: &str) -> Result<(), InputError> {
        self.validators
            .iter()
            .try_for_each(|validator| validator.validate(response))
    }
}
