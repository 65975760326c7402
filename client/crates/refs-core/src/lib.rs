pub mod error;
pub mod export;
pub mod models;
pub mod route;
pub mod session;


pub use error::{CoreError, Result as CoreResult};
pub use export::csv_export::{CSV_FILENAME, CSV_HEADER, CsvExport};
pub use models::registration_record::RegistrationRecord;
pub use models::session_credential::SessionCredential;
pub use route::{Route, RouteMatch};
pub use session::file_session_store::FileSessionStore;
pub use session::memory_session_store::MemorySessionStore;
pub use session::{SESSION_KEY, SessionStore};
