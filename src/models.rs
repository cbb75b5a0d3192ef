pub mod analysis_client;
pub mod credentials;
pub mod mode;
pub mod response;
pub mod view;

pub use analysis_client::{AnalysisClient, DEFAULT_BASE_URL};
pub use credentials::Credentials;
pub use mode::{Mode, ModeRoute, ResponseShape};
pub use response::{AnalysisReply, ScanReport, select_text};
pub use view::{ResultState, ViewModel};
