mod config;
mod error;
mod executor;
mod icons;
mod matcher;
mod model;
mod sources;
mod state;
mod store;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{default_settings_path, load_settings};
use crate::error::StoreError;
use crate::model::EntryKind;
use crate::sources::browse::{self, DEFAULT_BROWSE_ROOT};
use crate::state::{Launcher, Listed};
use crate::store::ConfigStore;

#[derive(Parser, Debug)]
#[command(author, version, about = "Register and launch .desktop apps and games", long_about = None)]
struct Args {
    /// Config file holding the registered entries
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Settings file (TOML)
    #[arg(short, long, global = true)]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// List registered entries, grouped by tab
    List {
        /// Only show one tab
        #[arg(short = 't', long = "type", value_enum)]
        kind: Option<EntryKind>,

        /// Fuzzy filter on the display name
        #[arg(short, long)]
        filter: Option<String>,

        #[arg(long)]
        json: bool,
    },

    /// Register a .desktop file
    Add {
        path: PathBuf,

        #[arg(short = 't', long = "type", value_enum, default_value_t = EntryKind::App)]
        kind: EntryKind,
    },

    /// Unregister a .desktop file
    Remove { path: PathBuf },

    /// Launch a registered entry by path or name
    Launch { target: String },

    /// Launch a raw command line (no shell)
    Exec { command: String },

    /// Parse a single .desktop file and print the extracted fields
    Parse {
        path: PathBuf,

        #[arg(long)]
        json: bool,
    },

    /// Resolve an icon name to an image file
    Icon { name: String },

    /// Find .desktop files that could be registered
    Browse { roots: Vec<PathBuf> },
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let code = run(args)?;
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}

fn run(args: Args) -> Result<i32> {
    let settings_path = args.settings.unwrap_or_else(default_settings_path);
    let settings = load_settings(&settings_path)?;

    match args.cmd {
        Cmd::Parse { path, json } => {
            let info = sources::desktop::parse(&path);
            if json {
                print_json(&info)?;
            } else {
                println!("name={}", info.name);
                println!("exec={}", info.exec);
                println!("icon={}", info.icon);
            }
            Ok(0)
        }
        Cmd::Icon { name } => {
            let resolver = settings.icon_resolver();
            match resolver.resolve(&name) {
                Some(path) => {
                    println!("{}", path.display());
                    Ok(0)
                }
                None => {
                    eprintln!("shelf: icon {name:?} not found in {:?}", resolver.dirs());
                    Ok(1)
                }
            }
        }
        Cmd::Browse { roots } => {
            let roots = if roots.is_empty() {
                vec![PathBuf::from(DEFAULT_BROWSE_ROOT)]
            } else {
                roots
            };
            for path in browse::candidates(&roots) {
                println!("{}", path.display());
            }
            Ok(0)
        }
        cmd => {
            let config_path = args.config.unwrap_or_else(|| settings.config_path());
            let launcher = Launcher::open(ConfigStore::new(&config_path), settings)
                .with_context(|| format!("loading {}", config_path.display()))?;
            run_registered(launcher, cmd)
        }
    }
}

fn run_registered(mut launcher: Launcher, cmd: Cmd) -> Result<i32> {
    match cmd {
        Cmd::List { kind, filter, json } => {
            let mut rows = launcher.list_entries(kind);
            if let Some(query) = filter.as_deref() {
                rows = state::filter(rows, query);
            }

            if json {
                print_json(&rows)?;
            } else if kind.is_some() {
                print_rows(&rows);
            } else {
                for tab in EntryKind::ALL {
                    println!("[{}]", tab.label());
                    let in_tab: Vec<Listed> =
                        rows.iter().filter(|r| r.info.kind == tab).cloned().collect();
                    print_rows(&in_tab);
                }
            }
            Ok(0)
        }
        Cmd::Add { path, kind } => match launcher.add_entry(path.clone(), kind) {
            Ok(()) => {
                let name = sources::desktop::parse(&path).name;
                println!("added {name} ({kind})");
                Ok(0)
            }
            Err(StoreError::AlreadyRegistered(path)) => {
                eprintln!("shelf: {} is already registered", path.display());
                Ok(1)
            }
            Err(e) => Err(e.into()),
        },
        Cmd::Remove { path } => {
            if launcher.remove_entry(&path)? == 0 {
                println!("{} was not registered", path.display());
            } else {
                println!("removed {}", path.display());
            }
            Ok(0)
        }
        Cmd::Launch { target } => report_launch(launcher.launch(&target)),
        Cmd::Exec { command } => report_launch(launcher.launch_command(&command)),
        Cmd::Parse { .. } | Cmd::Icon { .. } | Cmd::Browse { .. } => {
            unreachable!("handled without loading the config")
        }
    }
}

fn report_launch<E: std::fmt::Display>(result: std::result::Result<u32, E>) -> Result<i32> {
    match result {
        Ok(_) => Ok(0),
        Err(e) => {
            eprintln!("shelf: {e}");
            Ok(1)
        }
    }
}

fn print_rows(rows: &[Listed]) {
    for row in rows {
        let icon = row
            .icon_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{}\t{}\t{}\t{}\t{}",
            row.info.name,
            row.info.kind,
            row.info.exec,
            icon,
            row.info.source_path.display()
        );
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let s = serde_json::to_string_pretty(value)?;
    println!("{s}");
    Ok(())
}
