use std::io::{self, BufRead, Write};

/// Prompts and reads one line, `None` once input is exhausted.
pub fn input(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;
    read_line(&mut io::stdin().lock())
}

fn read_line(reader: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}

/// A line typed at the prompt.
#[derive(Debug, PartialEq, Eq)]
pub enum Command<'a> {
    Exit,
    Help,
    Play,
    /// `:n`, pick the n-th synonym or antonym.
    Select(usize),
    Lookup(&'a str),
}

pub fn parse_command(line: &str) -> Command<'_> {
    let trimmed = line.trim();
    if let Some(number) = trimmed.strip_prefix(':') {
        if let Ok(number) = number.trim().parse() {
            return Command::Select(number);
        }
    }
    let mut parts = trimmed.splitn(2, char::is_whitespace);
    match parts.next().unwrap_or_default() {
        "exit" | "leave" | "quit" | "e" | "q" | "l" if parts.next().is_none() => Command::Exit,
        "help" | "?" if parts.next().is_none() => Command::Help,
        "play" | "p" if parts.next().is_none() => Command::Play,
        "define" | "find" => Command::Lookup(parts.next().unwrap_or_default()),
        _ => Command::Lookup(line),
    }
}
