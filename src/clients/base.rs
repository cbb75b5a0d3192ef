use tracing::{info, warn};

use crate::{
    clients::security_service::submit_analysis,
    error::DispatchError,
    models::{AnalysisClient, AnalysisReply, Mode, ViewModel, select_text},
};

impl AnalysisClient {
    /// Runs one analysis against `view` and leaves the outcome in its result
    /// container. Never fails: every error becomes a displayed message.
    ///
    /// A second call on the same view replaces whatever the first one left.
    pub async fn run_analysis(&self, mode: Mode, view: &mut ViewModel) {
        view.show_pending();
        let input = view.input_for(mode).to_owned();

        match self.dispatch(mode, &input).await {
            Ok(AnalysisReply::Json(payload)) => view.show_text(&select_text(mode, &payload)),
            Ok(AnalysisReply::Report(report)) => view.show_report(report),
            Err(err) if err.is_prompt() => view.show_prompt(mode.route().prompt),
            Err(err) => {
                warn!(mode = mode.as_str(), error = %err, "Analysis request failed");
                view.show_failure(err.to_string());
            }
        }
    }

    /// [`AnalysisClient::run_analysis`] for a mode given by name, as the page
    /// buttons pass it. Unknown names show `Invalid test type.`
    pub async fn run_analysis_by_name(&self, name: &str, view: &mut ViewModel) {
        match name.parse::<Mode>() {
            Ok(mode) => self.run_analysis(mode, view).await,
            Err(err) => {
                view.show_pending();
                warn!(mode_name = name, "Unknown analysis mode");
                view.show_failure(err.to_string());
            }
        }
    }

    /// Trims and validates the input, then submits it. Empty input is
    /// rejected before any request is built.
    pub async fn dispatch(&self, mode: Mode, input: &str) -> Result<AnalysisReply, DispatchError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(DispatchError::EmptyInput(mode));
        }

        let route = mode.route();
        info!(
            mode = mode.as_str(),
            endpoint = route.endpoint,
            input_len = input.len(),
            "Submitting analysis request"
        );

        submit_analysis(
            &self.http,
            &self.base_url,
            self.authorization.as_ref(),
            route,
            input,
        )
        .await
    }
}
