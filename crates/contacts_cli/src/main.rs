//! Command-line driver for the contacts core.
//!
//! # Responsibility
//! - Exercise list/search/add/delete against a local database file.
//! - Mirror what a presentation layer does: drive view-models, then render.

use clap::{Parser, Subcommand};
use contacts_core::db::open_db;
use contacts_core::{
    default_log_level, init_logging, AddContactForm, ContactListViewModel, SqliteContactStore,
};
use std::path::PathBuf;
use std::process::ExitCode;

const CONTACTS_DB_PATH_ENV: &str = "CONTACTS_DB_PATH";
const DEFAULT_DB_FILE_NAME: &str = "contacts.sqlite3";

#[derive(Parser, Debug)]
#[command(about = "Local contacts book", long_about = None)]
struct Options {
    /// Database file (defaults to $CONTACTS_DB_PATH, then ./contacts.sqlite3)
    #[arg(long, value_name = "FILE")]
    db: Option<PathBuf>,

    /// Absolute directory for rolling log files; logging is off when unset
    #[arg(long, value_name = "DIR")]
    log_dir: Option<String>,

    /// Log level: trace|debug|info|warn|error
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List contacts, optionally filtered by a name/phone query
    List {
        query: Option<String>,
    },
    /// Add a new contact
    Add {
        first_name: String,
        last_name: String,
        phone: String,
        /// Attach a random placeholder photo URL
        #[arg(long)]
        random_image: bool,
    },
    /// Delete the contact at INDEX of the (filtered) list
    Delete {
        #[arg(allow_negative_numbers = true)]
        index: isize,
        /// Query applied before resolving INDEX
        #[arg(long, default_value = "")]
        query: String,
    },
}

fn main() -> ExitCode {
    let opts = Options::parse();

    if let Some(log_dir) = opts.log_dir.as_deref() {
        let level = opts.log_level.as_deref().unwrap_or(default_log_level());
        if let Err(err) = init_logging(level, log_dir) {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    }

    let db_path = resolve_db_path(opts.db);
    let conn = match open_db(&db_path) {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("error: cannot open `{}`: {err}", db_path.display());
            return ExitCode::FAILURE;
        }
    };

    let mut contacts = ContactListViewModel::with_default_store(&conn);
    contacts.load();

    match opts.command {
        Command::List { query } => {
            contacts.update_query(query.unwrap_or_default());
            render(&contacts);
            ExitCode::SUCCESS
        }
        Command::Add {
            first_name,
            last_name,
            phone,
            random_image,
        } => {
            let mut form = AddContactForm::new();
            form.first_name = first_name;
            form.last_name = last_name;
            form.phone = phone;
            if random_image {
                form.load_random_image();
            }
            let contact = match form.build_contact() {
                Ok(contact) => contact,
                Err(err) => {
                    eprintln!("error: {err}");
                    return ExitCode::FAILURE;
                }
            };
            if !contacts.add(&contact) {
                eprintln!("error: contact was not saved");
                return ExitCode::FAILURE;
            }
            println!("added {} ({})", contact.full_name(), contact.identifier());
            ExitCode::SUCCESS
        }
        Command::Delete { index, query } => {
            contacts.update_query(query);
            let Some(name) = contacts.item(index).map(|contact| contact.full_name()) else {
                eprintln!("no contact at index {index}");
                return ExitCode::FAILURE;
            };
            if !contacts.delete_at(index) {
                eprintln!("error: delete was not saved");
                return ExitCode::FAILURE;
            }
            println!("deleted {name}");
            ExitCode::SUCCESS
        }
    }
}

fn resolve_db_path(flag: Option<PathBuf>) -> PathBuf {
    flag.or_else(|| {
        std::env::var(CONTACTS_DB_PATH_ENV)
            .ok()
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty())
            .map(PathBuf::from)
    })
    .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_FILE_NAME))
}

fn render(contacts: &ContactListViewModel<SqliteContactStore<'_>>) {
    if contacts.number_of_items() == 0 {
        println!("no contacts");
        return;
    }
    for (index, contact) in contacts.filtered_contacts().iter().enumerate() {
        match contact.image_url.as_deref() {
            Some(url) => println!(
                "[{index}] {}  {}  {url}",
                contact.full_name(),
                contact.phone
            ),
            None => println!("[{index}] {}  {}", contact.full_name(), contact.phone),
        }
    }
}
