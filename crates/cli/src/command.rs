//! Shell command grammar.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown command '{0}' (type `help` for the list)")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error("'{0}' is not a valid quantity")]
    BadQuantity(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Menu,
    Add { item: String, quantity: i64 },
    Set { item: String, quantity: u32 },
    Remove { item: String },
    Clear,
    Cart,
    Name(String),
    Phone(String),
    Checkout,
    History,
    Analytics { top: Option<usize> },
    Export(PathBuf),
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  menu                     show the product menu
  add <item> [qty]         add items (item = menu number or name, qty defaults to 1)
  set <item> <qty>         set the quantity of an item (0 removes it)
  remove <item>            remove an item from the cart
  clear                    empty the cart and the customer form
  cart                     show the cart and amount due
  name <customer name>     set the customer name
  phone <10 digits>        set the customer mobile number
  checkout                 place the order
  history                  show the order history
  analytics [top]          show the sales summary and bestseller chart
  export <path>            copy the order log to a CSV file
  help                     show this help
  quit                     leave the till
";

impl Command {
    pub fn parse(line: &str) -> Result<Command, ParseError> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((v, r)) => (v, r.trim()),
            None => (line, ""),
        };

        match verb.to_ascii_lowercase().as_str() {
            "menu" => Ok(Command::Menu),
            "add" => {
                if rest.is_empty() {
                    return Err(ParseError::Usage("add <item> [qty]"));
                }
                let (item, quantity) = split_trailing_number(rest);
                let quantity = match quantity {
                    Some(q) => q
                        .parse::<i64>()
                        .map_err(|_| ParseError::BadQuantity(q.to_string()))?,
                    None => 1,
                };
                Ok(Command::Add {
                    item: item.to_string(),
                    quantity,
                })
            }
            "set" => {
                let (item, quantity) = split_trailing_number(rest);
                match quantity {
                    Some(q) if !item.is_empty() => Ok(Command::Set {
                        item: item.to_string(),
                        quantity: q
                            .parse::<u32>()
                            .map_err(|_| ParseError::BadQuantity(q.to_string()))?,
                    }),
                    _ => Err(ParseError::Usage("set <item> <qty>")),
                }
            }
            "remove" | "rm" => {
                if rest.is_empty() {
                    return Err(ParseError::Usage("remove <item>"));
                }
                Ok(Command::Remove {
                    item: rest.to_string(),
                })
            }
            "clear" => Ok(Command::Clear),
            "cart" => Ok(Command::Cart),
            "name" => Ok(Command::Name(rest.to_string())),
            "phone" => Ok(Command::Phone(rest.to_string())),
            "checkout" | "pay" => Ok(Command::Checkout),
            "history" => Ok(Command::History),
            "analytics" | "stats" => {
                if rest.is_empty() {
                    return Ok(Command::Analytics { top: None });
                }
                let top = rest
                    .parse::<usize>()
                    .map_err(|_| ParseError::BadQuantity(rest.to_string()))?;
                Ok(Command::Analytics { top: Some(top) })
            }
            "export" => {
                if rest.is_empty() {
                    return Err(ParseError::Usage("export <path>"));
                }
                Ok(Command::Export(PathBuf::from(rest)))
            }
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(ParseError::Unknown(other.to_string())),
        }
    }
}

/// Parse an `--item` value of the one-shot `order` command.
///
/// `"Iced Tea Fusion=2"` and `"3=2"` carry a quantity; a bare `"3"` means one.
pub fn parse_item_spec(spec: &str) -> Result<(String, i64), ParseError> {
    let (item, quantity) = match spec.rsplit_once('=') {
        Some((item, qty)) => {
            let qty = qty.trim();
            let qty = qty
                .parse::<i64>()
                .map_err(|_| ParseError::BadQuantity(qty.to_string()))?;
            (item.trim(), qty)
        }
        None => (spec.trim(), 1),
    };
    if item.is_empty() {
        return Err(ParseError::Usage("--item <item>[=qty]"));
    }
    Ok((item.to_string(), quantity))
}

/// Split `"Classic Lemonade 2"` into `("Classic Lemonade", Some("2"))`.
///
/// A lone token is always the item, so `add 3` means one of menu item #3.
fn split_trailing_number(rest: &str) -> (&str, Option<&str>) {
    match rest.rsplit_once(char::is_whitespace) {
        Some((item, last)) if looks_numeric(last) => (item.trim(), Some(last)),
        _ => (rest, None),
    }
}

fn looks_numeric(token: &str) -> bool {
    let digits = token.strip_prefix('-').unwrap_or(token);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_defaults_to_one_unit() {
        assert_eq!(
            Command::parse("add Classic Lemonade").unwrap(),
            Command::Add {
                item: "Classic Lemonade".into(),
                quantity: 1
            }
        );
        assert_eq!(
            Command::parse("add 3").unwrap(),
            Command::Add {
                item: "3".into(),
                quantity: 1
            }
        );
    }

    #[test]
    fn add_takes_a_trailing_quantity() {
        assert_eq!(
            Command::parse("  ADD   Iced Tea Fusion   4 ").unwrap(),
            Command::Add {
                item: "Iced Tea Fusion".into(),
                quantity: 4
            }
        );
        assert_eq!(
            Command::parse("add 1 -2").unwrap(),
            Command::Add {
                item: "1".into(),
                quantity: -2
            }
        );
    }

    #[test]
    fn set_requires_item_and_quantity() {
        assert_eq!(
            Command::parse("set 2 0").unwrap(),
            Command::Set {
                item: "2".into(),
                quantity: 0
            }
        );
        assert_eq!(
            Command::parse("set Mint"),
            Err(ParseError::Usage("set <item> <qty>"))
        );
        assert_eq!(
            Command::parse("set Mint -1"),
            Err(ParseError::BadQuantity("-1".into()))
        );
    }

    #[test]
    fn customer_fields_keep_the_rest_of_the_line() {
        assert_eq!(
            Command::parse("name Ada  Lovelace").unwrap(),
            Command::Name("Ada  Lovelace".into())
        );
        assert_eq!(Command::parse("name").unwrap(), Command::Name(String::new()));
        assert_eq!(
            Command::parse("phone 5551234567").unwrap(),
            Command::Phone("5551234567".into())
        );
    }

    #[test]
    fn misc_commands() {
        assert_eq!(Command::parse("analytics").unwrap(), Command::Analytics { top: None });
        assert_eq!(
            Command::parse("stats 3").unwrap(),
            Command::Analytics { top: Some(3) }
        );
        assert_eq!(
            Command::parse("export out/orders.csv").unwrap(),
            Command::Export(PathBuf::from("out/orders.csv"))
        );
        assert_eq!(Command::parse("exit").unwrap(), Command::Quit);
        assert!(matches!(Command::parse("dance"), Err(ParseError::Unknown(v)) if v == "dance"));
        assert_eq!(Command::parse("add"), Err(ParseError::Usage("add <item> [qty]")));
    }

    #[test]
    fn item_specs() {
        assert_eq!(parse_item_spec("Iced Tea Fusion=2").unwrap(), ("Iced Tea Fusion".into(), 2));
        assert_eq!(parse_item_spec(" 3 ").unwrap(), ("3".into(), 1));
        assert_eq!(parse_item_spec("3=x"), Err(ParseError::BadQuantity("x".into())));
        assert_eq!(parse_item_spec("=2"), Err(ParseError::Usage("--item <item>[=qty]")));
    }
}
