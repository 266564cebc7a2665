use std::io;
use std::path::PathBuf;

use anyhow::{Context, bail};
use chrono::{Local, NaiveDateTime};
use clap::{Parser, Subcommand};

use lemonpos_cli::{AppContext, Command, Outcome, handle, parse_item_spec, run_shell};
use lemonpos_infra::PosConfig;
use lemonpos_observability::LogFormat;

#[derive(Parser)]
#[command(name = "lemonpos")]
#[command(about = "Point-of-sale till for a lemonade stand")]
#[command(version)]
struct Cli {
    /// Configuration file (defaults to config/lemonpos.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Order log to use instead of a fresh per-run file
    #[arg(long)]
    data_file: Option<PathBuf>,

    /// Directory for per-run order logs
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Log line format: json or pretty
    #[arg(long)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive till (default)
    Shell,

    /// Print the product menu
    Menu,

    /// Place a single order
    Order {
        /// Customer name
        #[arg(long)]
        name: String,

        /// 10-digit mobile number
        #[arg(long)]
        phone: String,

        /// Item as `<name or menu number>[=qty]`; repeatable
        #[arg(long = "item", required = true)]
        items: Vec<String>,
    },

    /// Print the order history
    History,

    /// Print the sales summary and bestseller chart
    Analytics {
        /// Number of products in the chart
        #[arg(long)]
        top: Option<usize>,
    },

    /// Copy the order log to another CSV file
    Export {
        /// Destination path
        dest: PathBuf,
    },
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut cfg = PosConfig::load(cli.config.as_deref()).context("loading configuration")?;
    if let Some(dir) = cli.data_dir {
        cfg.data_dir = dir;
    }
    if let Some(file) = cli.data_file {
        cfg.data_file = Some(file);
    }
    if let Some(format) = cli.log_format {
        cfg.log_format = format;
    }

    lemonpos_observability::init(cfg.log_format);

    let command = cli.command.unwrap_or(Commands::Shell);
    if !matches!(command, Commands::Shell | Commands::Menu) && cfg.data_file.is_none() {
        bail!("this command reads an existing order log; pass --data-file or set data_file");
    }

    let ctx = AppContext::from_config(&cfg, now())?;
    let mut session = ctx.new_session();

    let script = match command {
        Commands::Shell => {
            run_shell(&ctx, &mut session, io::stdin().lock(), io::stdout().lock(), now)?;
            return Ok(());
        }
        Commands::Menu => vec![Command::Menu],
        Commands::Order { name, phone, items } => {
            let mut script = Vec::with_capacity(items.len() + 3);
            for spec in &items {
                let (item, quantity) = parse_item_spec(spec)?;
                script.push(Command::Add { item, quantity });
            }
            script.push(Command::Name(name));
            script.push(Command::Phone(phone));
            script.push(Command::Checkout);
            script
        }
        Commands::History => vec![Command::History],
        Commands::Analytics { top } => vec![Command::Analytics { top }],
        Commands::Export { dest } => vec![Command::Export(dest)],
    };

    for command in script {
        if let Outcome::Reply(text) = handle(&ctx, &mut session, command, now())? {
            print!("{text}");
        }
    }
    Ok(())
}
