use std::time::Duration;

use tracing::error;

use crate::handlers::commands::handle_update;
use crate::state::AppState;

/// Delay before retrying after a failed poll.
const RETRY_DELAY: Duration = Duration::from_secs(5);

/// Long-poll loop. Runs until the process is stopped; poll failures back
/// off and retry instead of exiting.
pub async fn run(state: AppState) {
    let mut offset: Option<i64> = None;
    loop {
        match state.telegram.get_updates(offset).await {
            Ok(updates) => {
                for update in updates {
                    offset = Some(update.update_id + 1);
                    handle_update(&state, update).await;
                }
            }
            Err(e) => {
                error!(error = %e, "failed to fetch updates");
                tokio::time::sleep(RETRY_DELAY).await;
            }
        }
    }
}
