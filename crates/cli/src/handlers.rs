//! One function per shell command.
//!
//! Handlers mutate the [`Session`] and return the text to show. They never
//! print, so the shell and the one-shot subcommands share them.

use chrono::NaiveDateTime;

use lemonpos_infra::OrderLog;

use crate::command::{Command, HELP};
use crate::context::{AppContext, Session};
use crate::errors::AppError;
use crate::views;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Reply(String),
    Quit,
}

pub fn handle(
    ctx: &AppContext,
    session: &mut Session,
    command: Command,
    now: NaiveDateTime,
) -> Result<Outcome, AppError> {
    let reply = match command {
        Command::Menu => views::render_menu(ctx.catalog(), session),
        Command::Add { item, quantity } => add(ctx, session, &item, quantity)?,
        Command::Set { item, quantity } => {
            let product = ctx.catalog().resolve(&item)?;
            match session.cart.set_quantity(product, quantity) {
                0 => format!("Removed {} from the cart.\n", product.name()),
                q => format!("{} x{q} in cart.\n", product.name()),
            }
        }
        Command::Remove { item } => {
            let product = ctx.catalog().resolve(&item)?;
            match session.cart.remove(product.name()) {
                Some(_) => format!("Removed {} from the cart.\n", product.name()),
                None => format!("{} is not in the cart.\n", product.name()),
            }
        }
        Command::Clear => {
            session.reset();
            "Cart cleared! Ready for the next order.\n".to_string()
        }
        Command::Cart => views::render_cart(session),
        Command::Name(name) => {
            session.customer_name = name;
            format!("Customer name set to '{}'.\n", session.customer_name)
        }
        Command::Phone(phone) => {
            session.phone = phone;
            format!("Mobile number set to '{}'.\n", session.phone)
        }
        Command::Checkout => checkout(ctx, session, now)?,
        Command::History => {
            let orders = ctx.log().load_all()?;
            views::render_history(&orders, ctx.log().path())
        }
        Command::Analytics { top } => {
            let report = ctx.analytics().compute()?;
            views::render_analytics(&report, top.unwrap_or(views::DEFAULT_TOP))
        }
        Command::Export(dest) => {
            let bytes = ctx.log().export_to(&dest)?;
            format!("Exported order history to {} ({bytes} bytes).\n", dest.display())
        }
        Command::Help => HELP.to_string(),
        Command::Quit => return Ok(Outcome::Quit),
    };
    Ok(Outcome::Reply(reply))
}

fn add(
    ctx: &AppContext,
    session: &mut Session,
    item: &str,
    quantity: i64,
) -> Result<String, AppError> {
    let product = ctx.catalog().resolve(item)?;
    let before = session.cart.quantity_of(product.name());

    Ok(match session.cart.add(product, quantity) {
        None => "Quantity must be at least 1; cart unchanged.\n".to_string(),
        Some(total) if i64::from(total - before) < quantity => format!(
            "{} x{total} in cart (limit is {} per item).\n",
            product.name(),
            session.cart.max_line_quantity()
        ),
        Some(total) => format!("{} x{total} in cart.\n", product.name()),
    })
}

fn checkout(
    ctx: &AppContext,
    session: &mut Session,
    now: NaiveDateTime,
) -> Result<String, AppError> {
    let order = ctx
        .checkout()
        .checkout(&mut session.cart, &session.customer_name, &session.phone, now)?;
    session.reset();
    Ok(format!(
        "Order placed for {}! Total: {}\n",
        order.customer_name(),
        order.total()
    ))
}
