//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose contact list/search/add/delete to Dart via FRB.
//! - Translate core results into simple envelope structs.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - DB-backed calls are serialized process-wide; the stored collection is
//!   rewritten as a whole on every mutation.

use contacts_core::db::open_db;
use contacts_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    AddContactForm, Contact, ContactListViewModel, SqliteContactStore,
};
use log::info;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock, PoisonError};

const CONTACTS_DB_FILE_NAME: &str = "contacts.sqlite3";
const CONTACTS_DB_PATH_ENV: &str = "CONTACTS_DB_PATH";
static CONTACTS_DB_PATH: OnceLock<PathBuf> = OnceLock::new();
static CONTACTS_LOCK: Mutex<()> = Mutex::new(());

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One contact row as rendered by the list screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactItem {
    pub contact_id: String,
    pub first_name: String,
    pub last_name: String,
    /// `"<first_name> <last_name>"`.
    pub full_name: String,
    pub phone: String,
    /// Remote photo URL; Dart loads it, core never does.
    pub image_url: Option<String>,
}

/// List response envelope for the contacts screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactListResponse {
    /// Contacts visible under the query, in stored order.
    pub items: Vec<ContactItem>,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

/// Generic action response envelope for add/delete flows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactActionResponse {
    /// Whether the operation took effect and was persisted.
    pub ok: bool,
    /// Affected contact ID when one was resolved.
    pub contact_id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl ContactActionResponse {
    fn success(message: impl Into<String>, contact_id: String) -> Self {
        Self {
            ok: true,
            contact_id: Some(contact_id),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            contact_id: None,
            message: message.into(),
        }
    }
}

/// Lists contacts matching `query` (blank query lists everything).
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics; storage failures yield an empty list with a message.
#[flutter_rust_bridge::frb(sync)]
pub fn contacts_list(query: String) -> ContactListResponse {
    match with_list_view_model(|view_model| {
        view_model.update_query(query);
        view_model
            .filtered_contacts()
            .iter()
            .map(to_contact_item)
            .collect::<Vec<_>>()
    }) {
        Ok(items) => {
            let message = if items.is_empty() {
                "No contacts.".to_string()
            } else {
                format!("Found {} contact(s).", items.len())
            };
            ContactListResponse { items, message }
        }
        Err(err) => ContactListResponse {
            items: Vec::new(),
            message: format!("contacts_list failed: {err}"),
        },
    }
}

/// Validates add-form input and saves a new contact.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - First name, last name and phone must be non-empty after trimming.
/// - Returns the generated contact ID on success.
#[flutter_rust_bridge::frb(sync)]
pub fn contacts_add(
    first_name: String,
    last_name: String,
    phone: String,
    image_url: Option<String>,
) -> ContactActionResponse {
    let mut form = AddContactForm::new();
    form.first_name = first_name.trim().to_string();
    form.last_name = last_name.trim().to_string();
    form.phone = phone.trim().to_string();
    form.image_url = image_url
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty());

    let contact = match form.build_contact() {
        Ok(contact) => contact,
        Err(err) => {
            return ContactActionResponse::failure(format!("contacts_add rejected: {err}"));
        }
    };

    match with_list_view_model(|view_model| view_model.add(&contact)) {
        Ok(true) => {
            info!(
                "event=contact_add module=ffi status=ok contact_id={}",
                contact.identifier()
            );
            ContactActionResponse::success("Contact saved.", contact.identifier().to_string())
        }
        Ok(false) => ContactActionResponse::failure("contacts_add failed: contact not persisted"),
        Err(err) => ContactActionResponse::failure(format!("contacts_add failed: {err}")),
    }
}

/// Deletes the contact at `index` of the list filtered by `query`.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Out-of-range indexes are a no-op and report `ok=false`.
#[flutter_rust_bridge::frb(sync)]
pub fn contacts_delete(query: String, index: i64) -> ContactActionResponse {
    let index = isize::try_from(index).unwrap_or(-1);
    let outcome = with_list_view_model(|view_model| {
        view_model.update_query(query);
        let contact_id = view_model
            .item(index)
            .map(|contact| contact.identifier().to_string());
        let deleted = view_model.delete_at(index);
        (contact_id, deleted)
    });

    match outcome {
        Ok((Some(contact_id), true)) => {
            info!("event=contact_delete module=ffi status=ok contact_id={contact_id}");
            ContactActionResponse::success("Contact deleted.", contact_id)
        }
        Ok((Some(_), false)) => {
            ContactActionResponse::failure("contacts_delete failed: change not persisted")
        }
        Ok((None, _)) => ContactActionResponse::failure(format!(
            "contacts_delete ignored: no contact at index {index}"
        )),
        Err(err) => ContactActionResponse::failure(format!("contacts_delete failed: {err}")),
    }
}

/// Returns a fresh random placeholder photo URL for the add form.
#[flutter_rust_bridge::frb(sync)]
pub fn contacts_random_image_url() -> String {
    AddContactForm::new().load_random_image().to_string()
}

fn resolve_contacts_db_path() -> PathBuf {
    CONTACTS_DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var(CONTACTS_DB_PATH_ENV) {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(CONTACTS_DB_FILE_NAME)
        })
        .clone()
}

fn with_list_view_model<T>(
    f: impl FnOnce(&mut ContactListViewModel<SqliteContactStore<'_>>) -> T,
) -> Result<T, String> {
    let _guard = CONTACTS_LOCK
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    let conn = open_db(resolve_contacts_db_path())
        .map_err(|err| format!("contacts DB open failed: {err}"))?;
    let mut view_model = ContactListViewModel::with_default_store(&conn);
    view_model.load();
    Ok(f(&mut view_model))
}

fn to_contact_item(contact: &Contact) -> ContactItem {
    ContactItem {
        contact_id: contact.identifier().to_string(),
        first_name: contact.first_name.clone(),
        last_name: contact.last_name.clone(),
        full_name: contact.full_name(),
        phone: contact.phone.clone(),
        image_url: contact.image_url.clone(),
    }
}
