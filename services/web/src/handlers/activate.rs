use axum::{
    extract::{Path, State},
    response::Html,
};

use crate::error::WebServiceError;
use crate::state::AppState;
use crate::usecase::activate::ActivateUseCase;

pub async fn activate_account(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<Html<String>, WebServiceError> {
    let usecase = ActivateUseCase {
        accounts: state.account_repo(),
    };
    let account = usecase.execute(&token).await?;
    Ok(Html(confirmation_page(&account.username)))
}

fn confirmation_page(username: &str) -> String {
    format!(
        "<!doctype html>\n<html>\n<head><title>Account activated</title></head>\n<body>\n\
         <h1>Account activated</h1>\n\
         <p>You can now log in as <strong>{}</strong>.</p>\n\
         </body>\n</html>\n",
        escape_html(username)
    )
}

// Usernames are free-form text; escape before embedding in markup.
fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
