use quitemap_bot::domain::types::ConfirmOutcome;
use quitemap_bot::usecase::confirm::ConfirmRegistrationUseCase;
use quitemap_testing::fixture::{
    active_account, expired_pending, inactive_account, pending,
};

use crate::helpers::InMemoryStore;

fn usecase(store: &InMemoryStore) -> ConfirmRegistrationUseCase<InMemoryStore, InMemoryStore> {
    ConfirmRegistrationUseCase {
        accounts: store.clone(),
        pendings: store.clone(),
    }
}

#[tokio::test]
async fn should_instruct_registration_when_nothing_known() {
    let store = InMemoryStore::new();
    let outcome = usecase(&store).execute("alice_tg").await.unwrap();
    assert_eq!(outcome, ConfirmOutcome::NotRegistered);
    assert_eq!(store.account_count(), 0);
    assert_eq!(store.pending_count(), 0);
}

#[tokio::test]
async fn should_report_active_account() {
    let store = InMemoryStore::with_accounts(vec![active_account("alice", "alice_tg")]);
    let outcome = usecase(&store).execute("alice_tg").await.unwrap();
    assert_eq!(
        outcome,
        ConfirmOutcome::AlreadyActive {
            username: "alice".to_owned()
        }
    );
}

#[tokio::test]
async fn should_report_activation_link_for_inactive_account() {
    let store =
        InMemoryStore::with_accounts(vec![inactive_account("alice", "alice_tg", "tok123")]);
    let outcome = usecase(&store).execute("alice_tg").await.unwrap();
    assert_eq!(
        outcome,
        ConfirmOutcome::AwaitingActivation {
            username: "alice".to_owned(),
            activation_token: "tok123".to_owned(),
        }
    );
}

#[tokio::test]
async fn should_report_admin_needed_when_token_missing() {
    let mut account = inactive_account("alice", "alice_tg", "unused");
    account.activation_token = None;
    let store = InMemoryStore::with_accounts(vec![account]);

    let outcome = usecase(&store).execute("alice_tg").await.unwrap();
    assert_eq!(
        outcome,
        ConfirmOutcome::ActivationUnavailable {
            username: "alice".to_owned()
        }
    );
}

#[tokio::test]
async fn should_delete_expired_pending_and_report_expiry() {
    let store = InMemoryStore::with_pendings(vec![expired_pending("alice", "alice_tg")]);
    let outcome = usecase(&store).execute("alice_tg").await.unwrap();
    assert_eq!(outcome, ConfirmOutcome::Expired);
    assert_eq!(store.pending_count(), 0);
    assert_eq!(store.account_count(), 0);
}

#[tokio::test]
async fn should_delete_pending_on_username_collision() {
    let store = InMemoryStore::with_pendings(vec![pending("alice", "alice_tg")]);
    store
        .accounts
        .lock()
        .unwrap()
        .push(active_account("alice", "other_tg"));

    let outcome = usecase(&store).execute("alice_tg").await.unwrap();
    assert_eq!(
        outcome,
        ConfirmOutcome::UsernameTaken {
            username: "alice".to_owned()
        }
    );
    assert_eq!(store.pending_count(), 0);
    assert_eq!(store.account_count(), 1, "no second account is created");
}

#[tokio::test]
async fn should_promote_pending_to_inactive_account() {
    let store = InMemoryStore::with_pendings(vec![pending("alice", "alice_tg")]);
    let outcome = usecase(&store).execute("alice_tg").await.unwrap();

    let ConfirmOutcome::Promoted {
        username,
        telegram_handle,
        activation_token,
    } = outcome
    else {
        panic!("expected promotion, got {outcome:?}");
    };
    assert_eq!(username, "alice");
    assert_eq!(telegram_handle, "alice_tg");
    assert!(!activation_token.is_empty());

    assert_eq!(store.pending_count(), 0, "pending must be consumed");
    let account = store.account_by_handle("alice_tg").unwrap();
    assert!(!account.is_active);
    assert_eq!(account.activation_token.as_deref(), Some(activation_token.as_str()));
    assert_eq!(account.username, "alice");
}

#[tokio::test]
async fn should_report_status_on_second_confirm() {
    let store = InMemoryStore::with_pendings(vec![pending("alice", "alice_tg")]);
    let uc = usecase(&store);

    let first = uc.execute("alice_tg").await.unwrap();
    let ConfirmOutcome::Promoted {
        activation_token, ..
    } = first
    else {
        panic!("expected promotion");
    };

    // Second signal finds the account, not the consumed pending.
    let second = uc.execute("alice_tg").await.unwrap();
    assert_eq!(
        second,
        ConfirmOutcome::AwaitingActivation {
            username: "alice".to_owned(),
            activation_token,
        }
    );
    assert_eq!(store.account_count(), 1, "no duplicate account");
}

#[tokio::test]
async fn should_carry_password_digest_through_promotion() {
    let mut row = pending("alice", "alice_tg");
    row.password_digest = "$argon2id$specific-digest".to_owned();
    let store = InMemoryStore::with_pendings(vec![row]);

    usecase(&store).execute("alice_tg").await.unwrap();

    let account = store.account_by_handle("alice_tg").unwrap();
    assert_eq!(account.password_digest, "$argon2id$specific-digest");
}
