use anyhow::{bail, Result};
use std::fmt::Display;
use std::io::{BufRead, Write};

use install_waterfox::progress::SEPARATOR;

/// Numbered-menu prompts on a terminal.
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl Prompt<std::io::StdinLock<'static>, std::io::Stderr> {
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stderr())
    }
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Show `options` numbered from 1, followed by `exit` when given, and
    /// ask until a valid number is entered. Returns the index into
    /// `options`, or `None` when the exit entry was picked.
    pub fn choose<T: Display>(
        &mut self,
        message: &str,
        options: &[T],
        exit: Option<&str>,
    ) -> Result<Option<usize>> {
        writeln!(self.output, "{message}")?;
        for (i, option) in options.iter().enumerate() {
            writeln!(self.output, "{}) {option}", i + 1)?;
        }
        let total = options.len() + usize::from(exit.is_some());
        if let Some(exit) = exit {
            writeln!(self.output, "{total}) {exit}")?;
        }

        loop {
            write!(self.output, "Enter your choice: ")?;
            self.output.flush().ok();

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                bail!("No choice entered");
            }
            match line.trim().parse::<usize>() {
                Ok(n) if (1..=total).contains(&n) => {
                    writeln!(self.output, "{SEPARATOR}")?;
                    return Ok((n <= options.len()).then(|| n - 1));
                }
                _ => {
                    writeln!(self.output, "\nInvalid option. Please try again.")?;
                    writeln!(self.output, "{SEPARATOR}")?;
                }
            }
        }
    }

    /// Yes/No menu.
    pub fn confirm(&mut self, message: &str) -> Result<bool> {
        Ok(self.choose(message, &["Yes", "No"], None)? == Some(0))
    }

    pub fn say(&mut self, message: impl Display) -> Result<()> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    /// Everything written so far.
    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompt(input: &str) -> Prompt<Cursor<Vec<u8>>, Vec<u8>> {
        Prompt::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_choose_retries_until_valid() {
        let mut p = prompt("0\nabc\n4\n2\n");
        let choice = p.choose("Pick", &["Classic", "G4"], Some("None")).unwrap();
        assert_eq!(choice, Some(1));

        let out = String::from_utf8(p.output).unwrap();
        assert!(out.starts_with("Pick\n1) Classic\n2) G4\n3) None\n"));
        assert_eq!(out.matches("Invalid option").count(), 3);
    }

    #[test]
    fn test_exit_entry() {
        let mut p = prompt("3\n");
        assert_eq!(p.choose("Pick", &["Install", "Uninstall"], Some("Quit")).unwrap(), None);
    }

    #[test]
    fn test_confirm() {
        assert!(prompt("1\n").confirm("Sure?").unwrap());
        assert!(!prompt("2\n").confirm("Sure?").unwrap());
    }

    #[test]
    fn test_end_of_input_is_an_error() {
        assert!(prompt("").confirm("Sure?").is_err());
    }
}
