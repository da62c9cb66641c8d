use axum::{
    Form, Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use axum_extra::extract::CookieJar;
use serde::{Deserialize, Serialize};

use crate::error::WebServiceError;
use crate::session::set_session_cookie;
use crate::state::AppState;
use crate::usecase::login::{LoginInput, LoginUseCase};

#[derive(Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: &'static str,
}

pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Result<impl IntoResponse, WebServiceError> {
    let usecase = LoginUseCase {
        accounts: state.account_repo(),
        jwt_secret: state.jwt_secret.clone(),
    };

    let out = usecase
        .execute(LoginInput {
            username: form.username,
            password: form.password,
        })
        .await?;

    let jar = set_session_cookie(jar, out.access_token.clone(), state.cookie_domain.clone());

    Ok((
        StatusCode::OK,
        jar,
        Json(LoginResponse {
            access_token: out.access_token,
            token_type: "bearer",
        }),
    ))
}
