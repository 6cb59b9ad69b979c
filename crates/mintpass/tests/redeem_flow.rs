//! End-to-end redemption flows against scripted wallet, contract, and
//! metadata implementations.

use std::sync::Arc;

use mintpass::ledger::{MockLedger, UsedHashQuery};
use mintpass::metadata::StaticMetadataFetcher;
use mintpass::session::{RedeemSession, SessionDeps};
use mintpass::state::SessionStatus;
use mintpass::store::{CollectionStore, MemoryStore};
use mintpass::wallet::{
    ChainId, InjectedWallet, ManagedWallet, MockChainControl, MockProvider, BASE_SEPOLIA,
};
use mintpass::RedemptionRequest;
use mintpass_testkit::{sample_metadata, RedemptionFixture};

type Wallet = InjectedWallet<MockChainControl>;
type Session = RedeemSession<MockLedger, MockLedger, Wallet, StaticMetadataFetcher>;
type Deps = SessionDeps<MockLedger, MockLedger, Wallet, StaticMetadataFetcher>;

fn deps(ledger: &Arc<MockLedger>, wallet: Option<Arc<Wallet>>) -> Deps {
    SessionDeps {
        query: Arc::clone(ledger),
        submitter: Arc::clone(ledger),
        wallet,
        fetcher: Arc::new(StaticMetadataFetcher::resolving(sample_metadata())),
        target: BASE_SEPOLIA,
    }
}

fn wallet_on(chain: ChainId) -> Arc<Wallet> {
    Arc::new(InjectedWallet::new(MockChainControl::on_chain(chain)))
}

fn start(fixture: &RedemptionFixture, deps: Deps) -> Session {
    RedeemSession::start(fixture.request(), Some(fixture.config.clone()), deps)
        .into_session()
        .unwrap()
}

#[tokio::test]
async fn test_full_claim_from_wrong_known_chain() {
    let fixture = RedemptionFixture::new();
    let ledger = Arc::new(MockLedger::new());
    let foreign = ChainId::new(1);
    let wallet = Arc::new(InjectedWallet::new(
        MockChainControl::on_chain(foreign).with_known(BASE_SEPOLIA.chain_id),
    ));
    let mut session = start(&fixture, deps(&ledger, Some(Arc::clone(&wallet))));

    session.refresh_redeemed().await;
    assert_eq!(session.status(), SessionStatus::Idle);

    session.claim().await;

    assert_eq!(session.status(), SessionStatus::Done);
    assert_eq!(session.message(), "NFT claimed!");
    assert_eq!(session.metadata(), Some(&sample_metadata()));

    // One switch, no registration: the chain was already known.
    assert_eq!(wallet.control().switch_log(), vec![BASE_SEPOLIA.chain_id]);
    assert!(wallet.control().add_log().is_empty());

    let submissions = ledger.submissions();
    assert_eq!(submissions.len(), 1);
    assert_eq!(submissions[0].uri, fixture.uri().as_str());
    assert_eq!(submissions[0].hash, fixture.hash());
}

#[tokio::test]
async fn test_claim_registers_unknown_chain_then_retries() {
    let fixture = RedemptionFixture::new();
    let ledger = Arc::new(MockLedger::new());
    let wallet = wallet_on(ChainId::new(1));
    let mut session = start(&fixture, deps(&ledger, Some(Arc::clone(&wallet))));

    session.claim().await;

    assert_eq!(session.status(), SessionStatus::Done);
    assert_eq!(wallet.control().add_log(), vec![BASE_SEPOLIA.chain_id]);
    assert_eq!(
        wallet.control().switch_log(),
        vec![BASE_SEPOLIA.chain_id, BASE_SEPOLIA.chain_id]
    );
}

#[tokio::test]
async fn test_claim_skips_switch_when_already_on_target() {
    let fixture = RedemptionFixture::new();
    let ledger = Arc::new(MockLedger::new());
    let wallet = wallet_on(BASE_SEPOLIA.chain_id);
    let mut session = start(&fixture, deps(&ledger, Some(Arc::clone(&wallet))));

    session.claim().await;

    assert_eq!(session.status(), SessionStatus::Done);
    assert!(wallet.control().switch_log().is_empty());
}

#[tokio::test]
async fn test_managed_wallet_claims_through_provider() {
    let fixture = RedemptionFixture::new();
    let ledger = Arc::new(MockLedger::new());
    let wallet = Arc::new(ManagedWallet::new(MockProvider::new()));
    let mut session = RedeemSession::start(
        fixture.request(),
        Some(fixture.config.clone()),
        SessionDeps {
            query: Arc::clone(&ledger),
            submitter: Arc::clone(&ledger),
            wallet: Some(Arc::clone(&wallet)),
            fetcher: Arc::new(StaticMetadataFetcher::resolving(sample_metadata())),
            target: BASE_SEPOLIA,
        },
    )
    .into_session()
    .unwrap();

    session.claim().await;

    assert_eq!(session.status(), SessionStatus::Done);
    assert_eq!(wallet.provider().switch_log(), vec![BASE_SEPOLIA.chain_id]);
}

#[tokio::test]
async fn test_refresh_preempts_claim_on_redeemed_hash() {
    let fixture = RedemptionFixture::new();
    let ledger = Arc::new(MockLedger::new().mark_used(fixture.hash()));
    let wallet = wallet_on(BASE_SEPOLIA.chain_id);
    let mut session = start(&fixture, deps(&ledger, Some(wallet)));

    session.refresh_redeemed().await;
    assert_eq!(session.status(), SessionStatus::AlreadyRedeemed);
    assert_eq!(session.message(), "Coupon already redeemed");

    session.claim().await;
    assert_eq!(session.status(), SessionStatus::AlreadyRedeemed);
    assert_eq!(ledger.submission_count(), 0);
}

#[tokio::test]
async fn test_last_instant_guard_catches_redeemed_hash() {
    // No advisory refresh ran; the pre-submit re-check still stops the
    // transaction.
    let fixture = RedemptionFixture::new();
    let ledger = Arc::new(MockLedger::new().mark_used(fixture.hash()));
    let wallet = wallet_on(BASE_SEPOLIA.chain_id);
    let mut session = start(&fixture, deps(&ledger, Some(wallet)));

    session.claim().await;

    assert_eq!(session.status(), SessionStatus::AlreadyRedeemed);
    assert_eq!(session.message(), "Coupon already redeemed");
    assert_eq!(ledger.submission_count(), 0);
}

#[tokio::test]
async fn test_second_claimant_loses_the_race() {
    let fixture = RedemptionFixture::new();
    let ledger = Arc::new(MockLedger::new());
    let mut first = start(&fixture, deps(&ledger, Some(wallet_on(BASE_SEPOLIA.chain_id))));
    let mut second = start(&fixture, deps(&ledger, Some(wallet_on(BASE_SEPOLIA.chain_id))));

    first.claim().await;
    assert_eq!(first.status(), SessionStatus::Done);

    second.claim().await;
    assert_eq!(second.status(), SessionStatus::AlreadyRedeemed);
    assert_eq!(ledger.submission_count(), 1);
}

#[tokio::test]
async fn test_contract_revert_reason_reaches_the_user() {
    // The probe lags behind the chain, so the duplicate slips past both
    // client checks and the contract itself rejects it.
    let fixture = RedemptionFixture::new();
    let ledger = Arc::new(MockLedger::new().lagging_probe());
    let mut first = start(&fixture, deps(&ledger, Some(wallet_on(BASE_SEPOLIA.chain_id))));
    let mut second = start(&fixture, deps(&ledger, Some(wallet_on(BASE_SEPOLIA.chain_id))));

    first.claim().await;
    assert_eq!(first.status(), SessionStatus::Done);

    second.claim().await;
    assert_eq!(second.status(), SessionStatus::Error);
    assert_eq!(second.message(), "hash already used");
}

#[tokio::test]
async fn test_switch_rejection_is_recoverable() {
    let fixture = RedemptionFixture::new();
    let ledger = Arc::new(MockLedger::new());
    let rejecting = Arc::new(InjectedWallet::new(
        MockChainControl::on_chain(ChainId::new(1)).reject_switches("user declined"),
    ));
    let mut session = start(&fixture, deps(&ledger, Some(rejecting)));

    session.claim().await;
    assert_eq!(session.status(), SessionStatus::Error);
    assert_eq!(session.message(), "chain switch rejected: user declined");
    assert_eq!(ledger.submission_count(), 0);

    session.connect_wallet(wallet_on(BASE_SEPOLIA.chain_id));
    session.claim().await;
    assert_eq!(session.status(), SessionStatus::Done);
    assert_eq!(session.message(), "NFT claimed!");
}

#[tokio::test]
async fn test_declined_transaction_shows_generic_failure() {
    let fixture = RedemptionFixture::new();
    let ledger = Arc::new(MockLedger::new().rejecting("user denied signature"));
    let wallet = wallet_on(BASE_SEPOLIA.chain_id);
    let mut session = start(&fixture, deps(&ledger, Some(wallet)));

    session.claim().await;

    assert_eq!(session.status(), SessionStatus::Error);
    assert_eq!(session.message(), "Transaction failed");
}

#[tokio::test]
async fn test_metadata_failure_leaves_claim_done() {
    let fixture = RedemptionFixture::new();
    let ledger = Arc::new(MockLedger::new());
    let mut session = RedeemSession::start(
        fixture.request(),
        Some(fixture.config.clone()),
        SessionDeps {
            query: Arc::clone(&ledger),
            submitter: Arc::clone(&ledger),
            wallet: Some(wallet_on(BASE_SEPOLIA.chain_id)),
            fetcher: Arc::new(StaticMetadataFetcher::failing("gateway timeout")),
            target: BASE_SEPOLIA,
        },
    )
    .into_session()
    .unwrap();

    session.claim().await;

    assert_eq!(session.status(), SessionStatus::Done);
    assert_eq!(session.message(), "NFT claimed!");
    assert!(session.metadata().is_none());
    assert_eq!(ledger.submission_count(), 1);
}

#[tokio::test]
async fn test_stale_duplicate_check_is_discarded() {
    let fixture = RedemptionFixture::new();
    let ledger = Arc::new(MockLedger::new().mark_used(fixture.hash()));
    let mut session = start(&fixture, deps(&ledger, None));

    // Snapshot the probe, then change the inputs while the check is
    // notionally in flight.
    let probe = session.hash_probe().unwrap();
    let answer = ledger.used_hashes(&probe.hash).await.unwrap();
    assert!(answer);

    session.set_config(mintpass_testkit::other_config());
    session.apply_duplicate(probe, answer);

    assert_eq!(session.status(), SessionStatus::Idle);
    assert!(!session.is_redeemed());
}

#[tokio::test]
async fn test_redirect_when_link_is_not_a_redemption() {
    let ledger = Arc::new(MockLedger::new());
    let outcome: mintpass::StartOutcome<_, _, Wallet, _> = RedeemSession::start(
        RedemptionRequest::new("", ""),
        None,
        deps(&ledger, None),
    );
    assert!(outcome.is_redirect());
}

#[tokio::test]
async fn test_invalid_id_recovers_when_config_loads_from_store() {
    let fixture = RedemptionFixture::new();
    let store = MemoryStore::new();
    store.import(&fixture.config).await.unwrap();

    let ledger = Arc::new(MockLedger::new());
    let mut session = RedeemSession::start(fixture.request(), None, deps(&ledger, None))
        .into_session()
        .unwrap();
    assert_eq!(session.status(), SessionStatus::Error);
    assert_eq!(session.message(), "Invalid QR code.");

    let config = store.current().await.unwrap().unwrap();
    session.set_config(config);

    assert_eq!(session.status(), SessionStatus::Idle);
    assert_eq!(session.token_uri().unwrap(), &fixture.uri());
    assert_eq!(session.redemption_hash(), Some(fixture.hash()));
}
