//! Client for the SecureNexus analysis service.
//!
//! Submits source code, a suspicious message or a website URL to the
//! service's `/analyze`, `/phishing-check` or `/scan-web` endpoint and turns
//! the reply into HTML for a result container.
//!
//! Modules:
//!     models: modes and their routes, the page view-model, the client type
//!     clients: request submission and the dispatcher
//!     render: HTML escaping and the markdown-ish formatter
//!
//! Example:
//!
//! ```no_run
//! use rusty_scan_runner::{AnalysisClient, Mode, ViewModel};
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let client = AnalysisClient::new("http://127.0.0.1:8080/", None, true)?;
//! let mut view = ViewModel::new().with_input(Mode::Phishing, "You won! Click here.");
//! client.run_analysis(Mode::Phishing, &mut view).await;
//! assert_eq!(view.result().label(), "rendered");
//! # Ok(())
//! # }
//! ```

pub mod clients;
pub mod error;
pub mod models;
pub mod render;
pub mod utils;

pub use error::{DispatchError, InvalidMode};
pub use models::{
    AnalysisClient, AnalysisReply, Credentials, DEFAULT_BASE_URL, Mode, ModeRoute, ResultState,
    ScanReport, ViewModel,
};
pub use render::{escape_html, format_markdown};
pub use utils::init_tracing;
