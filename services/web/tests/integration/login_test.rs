use jsonwebtoken::{DecodingKey, Validation, decode};

use quitemap_domain::password::hash_password;
use quitemap_testing::fixture::{TEST_JWT_SECRET, active_account_with_password, inactive_account};
use quitemap_web::error::WebServiceError;
use quitemap_web::session::SessionClaims;
use quitemap_web::usecase::login::{LoginInput, LoginUseCase};

use crate::helpers::MockAccountRepo;

fn input(username: &str, password: &str) -> LoginInput {
    LoginInput {
        username: username.to_owned(),
        password: password.to_owned(),
    }
}

#[tokio::test]
async fn should_fail_unknown_username() {
    let uc = LoginUseCase {
        accounts: MockAccountRepo::empty(),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };
    let result = uc.execute(input("ghost", "secret1")).await;
    assert!(matches!(result, Err(WebServiceError::UnknownUsername)));
}

#[tokio::test]
async fn should_fail_wrong_password() {
    let uc = LoginUseCase {
        accounts: MockAccountRepo::new(vec![active_account_with_password(
            "alice", "alice_tg", "secret1",
        )]),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };
    let result = uc.execute(input("alice", "wrong-password")).await;
    assert!(matches!(result, Err(WebServiceError::WrongPassword)));
}

#[tokio::test]
async fn should_fail_inactive_account_with_distinct_error() {
    let mut account = inactive_account("alice", "alice_tg", "tok123");
    account.password_digest = hash_password("secret1").unwrap();

    let uc = LoginUseCase {
        accounts: MockAccountRepo::new(vec![account]),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };
    let result = uc.execute(input("alice", "secret1")).await;
    assert!(matches!(result, Err(WebServiceError::AccountInactive)));
}

#[tokio::test]
async fn should_login_active_account() {
    let account = active_account_with_password("alice", "alice_tg", "secret1");
    let account_id = account.id;

    let uc = LoginUseCase {
        accounts: MockAccountRepo::new(vec![account]),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };
    let out = uc.execute(input("alice", "secret1")).await.unwrap();

    assert_eq!(out.account.id, account_id);
    assert!(!out.access_token.is_empty());

    let data = decode::<SessionClaims>(
        &out.access_token,
        &DecodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
        &Validation::new(jsonwebtoken::Algorithm::HS256),
    )
    .unwrap();
    assert_eq!(data.claims.sub, account_id.to_string());
    assert_eq!(data.claims.exp, out.access_token_exp);
}

#[tokio::test]
async fn should_trim_username_on_login() {
    let uc = LoginUseCase {
        accounts: MockAccountRepo::new(vec![active_account_with_password(
            "alice", "alice_tg", "secret1",
        )]),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };
    let result = uc.execute(input("  alice  ", "secret1")).await;
    assert!(result.is_ok());
}
