use crate::error::SeedError;
use std::io::{BufRead, Write};

pub const DEFAULT_START_ID: i64 = 1;

const PROMPT: &str = "Enter the starting vehicle ID (press Enter for default 1): ";
const INVALID: &str = "Invalid input. Please enter a number.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptState {
    AwaitingInput,
    Invalid,
    Valid(i64),
}

impl PromptState {
    /// Classifies one line of input, newline included.
    pub fn from_line(line: &str) -> Self {
        let line = line.strip_suffix('\n').unwrap_or(line);
        let line = line.strip_suffix('\r').unwrap_or(line);

        if line.is_empty() {
            return PromptState::Valid(DEFAULT_START_ID);
        }
        match line.trim().parse() {
            Ok(id) => PromptState::Valid(id),
            Err(_) => PromptState::Invalid,
        }
    }
}

/// Asks for the starting vehicle id until a number or an empty line is given.
pub fn read_start_id<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<i64, SeedError> {
    let mut state = PromptState::AwaitingInput;
    let mut line = String::new();

    loop {
        state = match state {
            PromptState::AwaitingInput => {
                output.write_all(PROMPT.as_bytes()).map_err(SeedError::Prompt)?;
                output.flush().map_err(SeedError::Prompt)?;

                line.clear();
                if input.read_line(&mut line).map_err(SeedError::Prompt)? == 0 {
                    return Err(SeedError::InputClosed);
                }
                PromptState::from_line(&line)
            }
            PromptState::Invalid => {
                writeln!(output, "{INVALID}").map_err(SeedError::Prompt)?;
                PromptState::AwaitingInput
            }
            PromptState::Valid(id) => return Ok(id),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn answer(input: &str) -> (Result<i64, SeedError>, String) {
        let mut output = Vec::new();
        let result = read_start_id(&mut Cursor::new(input), &mut output);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_from_line() {
        assert_eq!(PromptState::from_line("5\n"), PromptState::Valid(5));
        assert_eq!(PromptState::from_line("\n"), PromptState::Valid(1));
        assert_eq!(PromptState::from_line("\r\n"), PromptState::Valid(1));
        assert_eq!(PromptState::from_line(" 42 \n"), PromptState::Valid(42));
        assert_eq!(PromptState::from_line("-3\n"), PromptState::Valid(-3));
        assert_eq!(PromptState::from_line("abc\n"), PromptState::Invalid);
        assert_eq!(PromptState::from_line("4.5\n"), PromptState::Invalid);
        assert_eq!(PromptState::from_line("  \n"), PromptState::Invalid);
    }

    #[test]
    fn test_number_is_accepted() {
        let (result, output) = answer("5\n");

        assert_eq!(result.unwrap(), 5);
        assert_eq!(output, PROMPT);
    }

    #[test]
    fn test_empty_line_defaults_to_one() {
        let (result, _) = answer("\n");

        assert_eq!(result.unwrap(), 1);
    }

    #[test]
    fn test_invalid_input_reprompts_once() {
        let (result, output) = answer("abc\n2\n");

        assert_eq!(result.unwrap(), 2);
        assert_eq!(output, format!("{PROMPT}{INVALID}\n{PROMPT}"));
    }

    #[test]
    fn test_last_line_without_newline() {
        let (result, _) = answer("x\ny\n17");

        assert_eq!(result.unwrap(), 17);
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let (result, output) = answer("nope\n");

        assert!(matches!(result, Err(SeedError::InputClosed)));
        assert_eq!(output.matches(PROMPT).count(), 2);
    }
}
