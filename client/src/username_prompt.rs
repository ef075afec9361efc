use std::io::{self, BufRead, Write};

/// Asks on stdin until a non-blank name is entered. `None` on end of input.
pub fn prompt_for_username() -> Option<String> {
    let stdin = io::stdin();
    read_username(&mut stdin.lock(), &mut io::stdout())
}

fn read_username(input: &mut impl BufRead, output: &mut impl Write) -> Option<String> {
    loop {
        let _ = write!(output, "Enter your name: ");
        let _ = output.flush();

        let mut line = String::new();
        match input.read_line(&mut line) {
            Ok(0) | Err(_) => return None,
            Ok(_) => {}
        }

        let trimmed = line.trim();
        if !trimmed.is_empty() {
            return Some(trimmed.to_string());
        }
        let _ = writeln!(output, "Name cannot be empty");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_lines_are_skipped() {
        let mut input = "\n   \n  Grace  \n".as_bytes();
        let mut output = Vec::new();

        let name = read_username(&mut input, &mut output);

        assert_eq!(name.as_deref(), Some("Grace"));
        let printed = String::from_utf8(output).unwrap();
        assert_eq!(printed.matches("Name cannot be empty").count(), 2);
    }

    #[test]
    fn test_end_of_input_gives_none() {
        let mut input = "".as_bytes();
        let mut output = Vec::new();

        assert_eq!(read_username(&mut input, &mut output), None);
    }
}
