/// What a confirmation attempt resolved to. The command handler turns
/// this into the reply text; the use case never talks to Telegram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmOutcome {
    /// An account for this handle exists and is active.
    AlreadyActive { username: String },
    /// An account exists but still awaits activation; token available.
    AwaitingActivation {
        username: String,
        activation_token: String,
    },
    /// An account exists, inactive, and has no activation token left.
    /// Nothing the bot can do; an administrator has to intervene.
    ActivationUnavailable { username: String },
    /// Neither an account nor a pending registration for this handle.
    NotRegistered,
    /// The pending registration had expired; it has been deleted.
    Expired,
    /// The desired username was claimed by someone else since intake;
    /// the pending registration has been deleted.
    UsernameTaken { username: String },
    /// Promotion succeeded: inactive account created, pending consumed.
    Promoted {
        username: String,
        telegram_handle: String,
        activation_token: String,
    },
}

/// Result of the atomic promote transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromoteResult {
    Promoted,
    /// The pending row was gone when the transaction ran; a concurrent
    /// confirmation consumed it first.
    PendingGone,
    /// A uniqueness constraint on accounts fired inside the transaction;
    /// everything rolled back.
    Conflict,
}
