//! Line-oriented interactive menus over any reader/writer pair

use std::io::{BufRead, Write};

/// Write `prompt` and read one trimmed line; `None` at end of input
pub fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> std::io::Result<Option<String>> {
    write!(output, "{prompt}")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Parse a 1-based menu choice among `n_options` entries
pub fn parse_choice(text: &str, n_options: usize) -> Option<usize> {
    text.trim()
        .parse::<usize>()
        .ok()
        .filter(|choice| (1..=n_options).contains(choice))
}

/// A number typed at a lookup prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lookup {
    /// Saturates at `u32::MAX`, which no draw contains
    pub number: u32,
    /// Decimal form as typed, without leading zeros
    pub label: String,
}

/// Parse a lookup number typed by the user: any non-negative integer
pub fn parse_lookup(text: &str) -> Option<Lookup> {
    let text = text.trim();
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let digits = text.trim_start_matches('0');
    let label = if digits.is_empty() { "0" } else { digits };
    Some(Lookup {
        number: label.parse().unwrap_or(u32::MAX),
        label: label.to_string(),
    })
}

/// A numbered menu whose last entry exits
pub struct Menu<'a> {
    pub title: &'a str,
    /// Every option except the final "Exit"
    pub options: &'a [&'a str],
}

impl Menu<'_> {
    fn n_options(&self) -> usize {
        self.options.len() + 1
    }

    fn choice_list(&self) -> String {
        (1..=self.n_options())
            .map(|i| i.to_string())
            .collect::<Vec<_>>()
            .join("/")
    }

    fn invalid_choice_message(&self) -> String {
        let n = self.n_options();
        let head: Vec<String> = (1..n).map(|i| i.to_string()).collect();
        format!("Invalid choice. Please select {}, or {n}.", head.join(", "))
    }

    /// Show the menu until the user exits or input ends.
    ///
    /// `handle` receives the 1-based choice of a non-exit option together
    /// with the reader and writer, so it can prompt for more input.
    pub fn run<R, W, F>(&self, input: &mut R, output: &mut W, mut handle: F) -> anyhow::Result<()>
    where
        R: BufRead,
        W: Write,
        F: FnMut(usize, &mut R, &mut W) -> anyhow::Result<()>,
    {
        let exit = self.n_options();
        loop {
            writeln!(output, "\n{}", self.title)?;
            for (i, option) in self.options.iter().enumerate() {
                writeln!(output, "{}. {option}", i + 1)?;
            }
            writeln!(output, "{exit}. Exit")?;

            let prompt = format!("Enter your choice ({}): ", self.choice_list());
            let Some(line) = prompt_line(input, output, &prompt)? else {
                writeln!(output)?;
                tracing::debug!(menu = self.title, "end of input; leaving menu");
                return Ok(());
            };

            match parse_choice(&line, exit) {
                Some(choice) if choice == exit => {
                    writeln!(output, "Exiting.")?;
                    return Ok(());
                }
                Some(choice) => handle(choice, input, output)?,
                None => writeln!(output, "{}", self.invalid_choice_message())?,
            }
        }
    }
}
