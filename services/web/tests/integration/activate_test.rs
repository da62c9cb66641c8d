use quitemap_testing::fixture::{active_account, inactive_account};
use quitemap_web::error::WebServiceError;
use quitemap_web::usecase::activate::ActivateUseCase;

use crate::helpers::MockAccountRepo;

#[tokio::test]
async fn should_activate_account_and_clear_token() {
    let accounts = MockAccountRepo::new(vec![inactive_account("alice", "alice_tg", "tok123")]);
    let accounts_handle = accounts.accounts_handle();

    let uc = ActivateUseCase { accounts };
    let account = uc.execute("tok123").await.unwrap();
    assert_eq!(account.username, "alice");

    let accounts = accounts_handle.lock().unwrap();
    assert_eq!(accounts.len(), 1);
    assert!(accounts[0].is_active);
    assert!(accounts[0].activation_token.is_none());
}

#[tokio::test]
async fn should_fail_not_found_for_unknown_token() {
    let uc = ActivateUseCase {
        accounts: MockAccountRepo::new(vec![inactive_account("alice", "alice_tg", "tok123")]),
    };
    let result = uc.execute("other-token").await;
    assert!(matches!(
        result,
        Err(WebServiceError::ActivationTokenNotFound)
    ));
}

#[tokio::test]
async fn should_fail_already_activated_when_token_still_present() {
    // Degenerate state: active account whose token was never cleared.
    // The lookup still matches; activation must refuse to re-run.
    let mut account = active_account("alice", "alice_tg");
    account.activation_token = Some("tok123".to_owned());

    let uc = ActivateUseCase {
        accounts: MockAccountRepo::new(vec![account]),
    };
    let result = uc.execute("tok123").await;
    assert!(matches!(result, Err(WebServiceError::AlreadyActivated)));
}

#[tokio::test]
async fn should_not_replay_consumed_token() {
    let accounts = MockAccountRepo::new(vec![inactive_account("alice", "alice_tg", "tok123")]);

    let uc = ActivateUseCase { accounts };
    uc.execute("tok123").await.unwrap();

    // The winning UPDATE cleared the value the lookup matches on.
    let result = uc.execute("tok123").await;
    assert!(matches!(
        result,
        Err(WebServiceError::ActivationTokenNotFound)
    ));
}

#[tokio::test]
async fn should_only_touch_the_matching_account() {
    let accounts = MockAccountRepo::new(vec![
        inactive_account("alice", "alice_tg", "tok-alice"),
        inactive_account("bob", "bob_tg", "tok-bob"),
    ]);
    let accounts_handle = accounts.accounts_handle();

    let uc = ActivateUseCase { accounts };
    uc.execute("tok-alice").await.unwrap();

    let accounts = accounts_handle.lock().unwrap();
    let alice = accounts.iter().find(|a| a.username == "alice").unwrap();
    let bob = accounts.iter().find(|a| a.username == "bob").unwrap();
    assert!(alice.is_active);
    assert!(!bob.is_active);
    assert_eq!(bob.activation_token.as_deref(), Some("tok-bob"));
}
