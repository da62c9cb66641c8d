use quitemap_domain::account::Account;
use quitemap_domain::password;

use crate::domain::repository::AccountRepository;
use crate::error::WebServiceError;
use crate::session::issue_session_token;

pub struct LoginInput {
    pub username: String,
    pub password: String,
}

#[derive(Debug)]
pub struct LoginOutput {
    pub account: Account,
    pub access_token: String,
    pub access_token_exp: u64,
}

pub struct LoginUseCase<A: AccountRepository> {
    pub accounts: A,
    pub jwt_secret: String,
}

impl<A: AccountRepository> LoginUseCase<A> {
    pub async fn execute(&self, input: LoginInput) -> Result<LoginOutput, WebServiceError> {
        // Unknown username, wrong password, and inactive account are
        // reported distinctly.
        let account = self
            .accounts
            .find_by_username(input.username.trim())
            .await?
            .ok_or(WebServiceError::UnknownUsername)?;

        if !password::verify_password(&input.password, &account.password_digest) {
            return Err(WebServiceError::WrongPassword);
        }

        if !account.is_active {
            return Err(WebServiceError::AccountInactive);
        }

        let (access_token, access_token_exp) =
            issue_session_token(account.id, &self.jwt_secret)
                .map_err(|e| WebServiceError::Internal(e.into()))?;

        Ok(LoginOutput {
            account,
            access_token,
            access_token_exp,
        })
    }
}
