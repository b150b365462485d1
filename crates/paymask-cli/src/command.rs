//! Line commands understood by the interactive form.

use anyhow::{Context, bail};
use paymask_core::Field;
use std::str::FromStr;

pub const HELP: &str = "\
Commands:
  type <field> <keys>   type keys one at a time into a field
  paste <field> <text>  propose a whole value at once
  del <field> [count]   press backspace in a field (default once)
  undo                  restore the previous form state
  reset                 clear the form
  show                  print the form
  submit                submit the payment
  help                  print this help
  quit                  exit

Fields: card, expiry, cvv, amount";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Type { field: Field, keys: String },
    Paste { field: Field, text: String },
    Delete { field: Field, count: usize },
    Undo,
    Reset,
    Show,
    Submit,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> anyhow::Result<Self> {
        let line = line.trim_start();
        let (name, rest) = line.split_once(' ').unwrap_or((line, ""));

        let command = match name.to_ascii_lowercase().as_str() {
            "type" | "t" => {
                let (field, keys) = field_and_rest(rest)?;
                Command::Type { field, keys }
            }
            "paste" | "p" => {
                let (field, text) = field_and_rest(rest)?;
                Command::Paste { field, text }
            }
            "del" | "d" => {
                let mut parts = rest.split_whitespace();
                let field = parse_field(parts.next().context("missing field name")?)?;
                let count = match parts.next() {
                    Some(count) => count
                        .parse()
                        .with_context(|| format!("invalid count '{count}'"))?,
                    None => 1,
                };
                Command::Delete { field, count }
            }
            "undo" | "u" => Command::Undo,
            "reset" => Command::Reset,
            "show" | "s" => Command::Show,
            "submit" => Command::Submit,
            "help" | "h" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            "" => bail!("empty command"),
            other => bail!("unknown command '{other}'"),
        };

        Ok(command)
    }
}

/// Split `<field> <text>`, keeping the text verbatim apart from the single
/// space after the field name.
fn field_and_rest(rest: &str) -> anyhow::Result<(Field, String)> {
    let rest = rest.trim_start();
    let (name, text) = rest.split_once(' ').unwrap_or((rest, ""));
    if name.is_empty() {
        bail!("missing field name");
    }
    Ok((parse_field(name)?, text.to_string()))
}

/// Parse a field name or one of its short aliases.
pub fn parse_field(name: &str) -> anyhow::Result<Field> {
    let field = match name.to_ascii_lowercase().as_str() {
        "card" => Field::CardNumber,
        "expiry" | "exp" | "date" => Field::ExpirationDate,
        _ => Field::from_str(name)?,
    };
    Ok(field)
}
