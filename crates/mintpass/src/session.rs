//! The redemption session controller.
//!
//! A session is born from a scanned link's (code, id) pair. From those
//! inputs plus the collection config it derives the token URI and the
//! redemption hash, runs the advisory duplicate check, and walks the
//! claim pipeline: network switch, submit, confirm, metadata. Status
//! changes flow through the pure [`transition`] function; the session
//! layers a user-facing message and the derived values on top.
//!
//! Inputs may change while a duplicate check is in flight. Every input
//! change bumps a generation counter; a check result carrying an older
//! generation is discarded on arrival. Last write wins on inputs, never
//! on results.

use std::sync::Arc;

use mintpass_core::{
    derive_hash, derive_uri, CollectionConfig, ItemId, Metadata, RedeemCode, RedemptionHash,
    RedemptionRequest, TokenUri,
};
use mintpass_ledger::{RedemptionSubmitter, UsedHashQuery};
use mintpass_wallet::{ChainParams, NetworkReconciler};
use tracing::warn;

use crate::error::RedeemError;
use crate::metadata::MetadataFetcher;
use crate::state::{transition, SessionEvent, SessionStatus};

/// Everything a session talks to besides its own state.
///
/// The wallet is optional at construction: a session can run its
/// duplicate check before the user has connected one, and `claim` stays
/// a no-op until one is attached.
pub struct SessionDeps<Q, S, W, M> {
    pub query: Arc<Q>,
    pub submitter: Arc<S>,
    pub wallet: Option<Arc<W>>,
    pub fetcher: Arc<M>,
    pub target: ChainParams,
}

/// What constructing a session produced.
pub enum StartOutcome<Q, S, W, M> {
    /// The link carried no usable (code, id) pair; send the user home.
    RedirectHome,
    /// A live session.
    Started(RedeemSession<Q, S, W, M>),
}

impl<Q, S, W, M> StartOutcome<Q, S, W, M> {
    pub fn is_redirect(&self) -> bool {
        matches!(self, StartOutcome::RedirectHome)
    }

    /// The session, if construction produced one.
    pub fn into_session(self) -> Option<RedeemSession<Q, S, W, M>> {
        match self {
            StartOutcome::Started(session) => Some(session),
            StartOutcome::RedirectHome => None,
        }
    }
}

/// A snapshot of the derived hash and the generation it belongs to.
///
/// Duplicate checks run against a probe; the generation pins the result
/// to the inputs it was computed from.
#[derive(Debug, Clone, Copy)]
pub struct HashProbe {
    pub hash: RedemptionHash,
    generation: u64,
}

/// A single user's walk from scanned link to claimed token.
pub struct RedeemSession<Q, S, W, M> {
    code: RedeemCode,
    raw_id: String,
    config: Option<CollectionConfig>,
    deps: SessionDeps<Q, S, W, M>,
    status: SessionStatus,
    message: String,
    metadata: Option<Metadata>,
    uri: Option<TokenUri>,
    hash: Option<RedemptionHash>,
    redeemed: bool,
    generation: u64,
}

impl<Q, S, W, M> RedeemSession<Q, S, W, M>
where
    Q: UsedHashQuery,
    S: RedemptionSubmitter,
    W: NetworkReconciler,
    M: MetadataFetcher,
{
    /// Build a session from a scanned request.
    ///
    /// A blank code or id means the link was not a redemption link at
    /// all, so there is no session to run. A missing config or an
    /// unparseable id starts the session in `Error`; both are
    /// recoverable through [`set_config`](Self::set_config).
    pub fn start(
        request: RedemptionRequest,
        config: Option<CollectionConfig>,
        deps: SessionDeps<Q, S, W, M>,
    ) -> StartOutcome<Q, S, W, M> {
        let Some(code) = request.code() else {
            return StartOutcome::RedirectHome;
        };
        if request.raw_id().is_empty() {
            return StartOutcome::RedirectHome;
        }

        let mut session = Self {
            code,
            raw_id: request.raw_id().to_string(),
            config,
            deps,
            status: SessionStatus::Idle,
            message: String::new(),
            metadata: None,
            uri: None,
            hash: None,
            redeemed: false,
            generation: 0,
        };
        session.recompute();
        StartOutcome::Started(session)
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The resolved metadata record, present only after a confirmed
    /// claim whose fetch succeeded.
    pub fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
    }

    pub fn token_uri(&self) -> Option<&TokenUri> {
        self.uri.as_ref()
    }

    pub fn redemption_hash(&self) -> Option<RedemptionHash> {
        self.hash
    }

    /// Whether the last applied duplicate check found the hash used.
    pub fn is_redeemed(&self) -> bool {
        self.redeemed
    }

    /// Supply or replace the collection config. It may arrive after the
    /// session starts; a session stuck in `Error` for want of a config
    /// moves to `Idle` once the URI becomes derivable.
    pub fn set_config(&mut self, config: CollectionConfig) {
        self.config = Some(config);
        self.recompute();
    }

    /// Attach the user's wallet once it is connected.
    pub fn connect_wallet(&mut self, wallet: Arc<W>) {
        self.deps.wallet = Some(wallet);
    }

    /// Snapshot for an out-of-band duplicate check, if the hash is
    /// derivable from the current inputs.
    pub fn hash_probe(&self) -> Option<HashProbe> {
        self.hash.map(|hash| HashProbe {
            hash,
            generation: self.generation,
        })
    }

    /// Apply the result of a duplicate check.
    ///
    /// A probe from an older generation answers for a hash the session
    /// no longer holds; its result is discarded.
    pub fn apply_duplicate(&mut self, probe: HashProbe, redeemed: bool) {
        if probe.generation != self.generation {
            warn!(
                probe = probe.generation,
                current = self.generation,
                "discarding stale duplicate check"
            );
            return;
        }
        self.redeemed = redeemed;
        if redeemed {
            self.enter(SessionEvent::DuplicateDetected, "Coupon already redeemed");
        }
    }

    /// Run the duplicate check inline.
    ///
    /// Needs no wallet: the probe is read-only. A failed probe leaves
    /// the flag untouched; the contract still arbitrates at submit time.
    pub async fn refresh_redeemed(&mut self) {
        let Some(probe) = self.hash_probe() else {
            return;
        };
        match self.deps.query.used_hashes(&probe.hash).await {
            Ok(redeemed) => self.apply_duplicate(probe, redeemed),
            Err(err) => warn!(error = %err, "duplicate check failed"),
        }
    }

    /// Walk the claim pipeline to completion or error.
    ///
    /// A no-op while no wallet is attached or the URI is not derivable,
    /// and after `Done` or `AlreadyRedeemed`. `Error` is recoverable:
    /// call again.
    pub async fn claim(&mut self) {
        if matches!(
            self.status,
            SessionStatus::Done | SessionStatus::AlreadyRedeemed
        ) {
            return;
        }
        let Some(wallet) = self.deps.wallet.clone() else {
            return;
        };
        let (Some(uri), Some(probe)) = (self.uri.clone(), self.hash_probe()) else {
            return;
        };

        // Last-instant guard. The contract re-derives the hash and
        // remains the final arbiter either way.
        match self.deps.query.used_hashes(&probe.hash).await {
            Ok(true) => {
                self.apply_duplicate(probe, true);
                return;
            }
            Ok(false) => self.apply_duplicate(probe, false),
            Err(err) => warn!(error = %err, "pre-submit duplicate check failed"),
        }

        if let Err(err) = self.run_claim(wallet, uri).await {
            let message = err.user_message();
            self.enter(SessionEvent::Failed, message);
        }
    }

    async fn run_claim(&mut self, wallet: Arc<W>, uri: TokenUri) -> Result<(), RedeemError> {
        self.enter(
            SessionEvent::SwitchStarted,
            format!("Switching to {}…", self.deps.target.name),
        );
        wallet.ensure_network(&self.deps.target).await?;

        self.enter(SessionEvent::SubmitStarted, "Sending transaction…");
        let tx = self.deps.submitter.submit(&self.code, &uri).await?;
        let tx_text = tx.to_string();
        self.message = format!("Tx sent: {}…", &tx_text[..10]);
        self.deps.submitter.await_confirmation(tx).await?;

        match self.deps.fetcher.fetch(&uri).await {
            Ok(metadata) => self.metadata = Some(metadata),
            Err(err) => warn!(error = %err, "metadata fetch failed after a confirmed claim"),
        }
        self.redeemed = true;
        self.enter(SessionEvent::Confirmed, "NFT claimed!");
        Ok(())
    }

    /// Recompute the derived values after an input change.
    ///
    /// Bumps the generation so any duplicate check still in flight
    /// resolves against a stale probe, and resets the duplicate flag.
    fn recompute(&mut self) {
        self.generation += 1;
        self.redeemed = false;
        let item = ItemId::parse(&self.raw_id).ok();
        self.uri = match (&self.config, item) {
            (Some(config), Some(item)) => Some(derive_uri(item, &config.cid)),
            _ => None,
        };
        self.hash = self.uri.as_ref().map(|uri| derive_hash(&self.code, uri));
        match self.hash {
            Some(_) => self.enter(SessionEvent::ConfigResolved, ""),
            None => self.enter(SessionEvent::ConfigInvalid, "Invalid QR code."),
        }
    }

    fn enter(&mut self, event: SessionEvent, message: impl Into<String>) {
        let next = transition(self.status, &event);
        if next != self.status {
            self.status = next;
            self.message = message.into();
        }
    }
}
