//! Wallet session: one interface over both wallet tiers.

use async_trait::async_trait;

use crate::chain::ChainParams;
use crate::control::{ChainControl, NetworkReconciler, ProviderSwitch};
use crate::error::Result;
use crate::reconcile::reconcile;

/// A wallet whose provider owns connectivity. A single provider-level
/// switch instruction is issued and its result treated as final.
pub struct ManagedWallet<P: ProviderSwitch> {
    provider: P,
}

impl<P: ProviderSwitch> ManagedWallet<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }
}

#[async_trait]
impl<P: ProviderSwitch> NetworkReconciler for ManagedWallet<P> {
    async fn ensure_network(&self, target: &ChainParams) -> Result<()> {
        self.provider.switch_chain(target.chain_id).await
    }
}

/// An externally-injected wallet driven through its raw capability set
/// by the [`reconcile`] protocol.
pub struct InjectedWallet<C: ChainControl> {
    control: C,
}

impl<C: ChainControl> InjectedWallet<C> {
    pub fn new(control: C) -> Self {
        Self { control }
    }

    pub fn control(&self) -> &C {
        &self.control
    }
}

#[async_trait]
impl<C: ChainControl> NetworkReconciler for InjectedWallet<C> {
    async fn ensure_network(&self, target: &ChainParams) -> Result<()> {
        reconcile(&self.control, target).await
    }
}

/// The two wallet tiers behind one type, for callers that decide the
/// tier at runtime.
pub enum WalletSession<P: ProviderSwitch, C: ChainControl> {
    Managed(ManagedWallet<P>),
    Injected(InjectedWallet<C>),
}

#[async_trait]
impl<P: ProviderSwitch, C: ChainControl> NetworkReconciler for WalletSession<P, C> {
    async fn ensure_network(&self, target: &ChainParams) -> Result<()> {
        match self {
            WalletSession::Managed(wallet) => wallet.ensure_network(target).await,
            WalletSession::Injected(wallet) => wallet.ensure_network(target).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::{ChainId, BASE_SEPOLIA};
    use crate::mock::{MockChainControl, MockProvider};

    #[tokio::test]
    async fn test_managed_always_issues_provider_switch() {
        // The provider decides whether a switch is needed; the session
        // does not pre-check the current chain.
        let wallet = ManagedWallet::new(MockProvider::new());

        wallet.ensure_network(&BASE_SEPOLIA).await.unwrap();

        assert_eq!(wallet.provider.switch_log(), vec![BASE_SEPOLIA.chain_id]);
    }

    #[tokio::test]
    async fn test_injected_runs_reconcile() {
        let control = MockChainControl::on_chain(ChainId::new(1));
        let wallet = InjectedWallet::new(control);

        wallet.ensure_network(&BASE_SEPOLIA).await.unwrap();

        assert_eq!(wallet.control.add_log(), vec![BASE_SEPOLIA.chain_id]);
        assert_eq!(wallet.control.switch_log().len(), 2);
    }

    #[tokio::test]
    async fn test_session_dispatches_by_tier() {
        let session: WalletSession<MockProvider, MockChainControl> =
            WalletSession::Injected(InjectedWallet::new(MockChainControl::on_chain(
                BASE_SEPOLIA.chain_id,
            )));

        session.ensure_network(&BASE_SEPOLIA).await.unwrap();
    }
}
