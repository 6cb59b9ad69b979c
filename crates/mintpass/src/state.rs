//! The session state machine.
//!
//! Status changes flow exclusively through [`transition`], a pure
//! function over (state, event). Invalid pairs leave the state
//! unchanged; `Done` and `AlreadyRedeemed` absorb everything, except
//! that a detected duplicate pre-empts any state before `Done`.

/// Where a redemption session currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionStatus {
    /// Ready to claim, nothing in flight.
    Idle,
    /// Asking the wallet to move to the target network.
    SwitchingNetwork,
    /// Transaction submitted or about to be, awaiting confirmation.
    Claiming,
    /// The claim confirmed on chain.
    Done,
    /// A step failed; claiming may be retried.
    Error,
    /// The redemption hash was already consumed on chain.
    AlreadyRedeemed,
}

/// What happened to a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// The token URI became derivable from the current inputs.
    ConfigResolved,
    /// The token URI is not derivable from the current inputs.
    ConfigInvalid,
    /// A duplicate check came back positive.
    DuplicateDetected,
    /// The network switch began.
    SwitchStarted,
    /// The transaction submission began.
    SubmitStarted,
    /// The transaction confirmed.
    Confirmed,
    /// The switch or the transaction failed.
    Failed,
}

/// The one place state changes are decided.
pub fn transition(current: SessionStatus, event: &SessionEvent) -> SessionStatus {
    use SessionEvent as E;
    use SessionStatus as S;

    match (current, event) {
        (S::Done, _) | (S::AlreadyRedeemed, _) => current,
        (_, E::DuplicateDetected) => S::AlreadyRedeemed,
        (S::Error, E::ConfigResolved) => S::Idle,
        (S::Idle | S::Error, E::ConfigInvalid) => S::Error,
        (S::Idle | S::Error, E::SwitchStarted) => S::SwitchingNetwork,
        (S::SwitchingNetwork, E::SubmitStarted) => S::Claiming,
        (S::Claiming, E::Confirmed) => S::Done,
        (S::SwitchingNetwork | S::Claiming, E::Failed) => S::Error,
        _ => current,
    }
}
