//! The reconciliation protocol for injected wallets.

use tracing::debug;

use crate::chain::ChainParams;
use crate::control::ChainControl;
use crate::error::{Result, WalletError};

/// Reconcile an injected wallet onto the target chain.
///
/// - Already on target: succeed without issuing any request.
/// - Otherwise request a switch. If the wallet reports the chain as
///   unrecognized, register it (RPC, name, currency, explorer) and retry
///   the switch exactly once.
/// - Any other failure during switch or add propagates unchanged.
pub async fn reconcile<C: ChainControl + ?Sized>(
    wallet: &C,
    target: &ChainParams,
) -> Result<()> {
    let current = wallet.current_chain().await?;
    if current == target.chain_id {
        debug!(chain = %current, "wallet already on target chain");
        return Ok(());
    }

    match wallet.switch_chain(target.chain_id).await {
        Ok(()) => Ok(()),
        Err(WalletError::UnrecognizedChain(_)) => {
            debug!(chain = %target.chain_id, "chain unknown to wallet, registering");
            wallet.add_chain(target).await?;
            wallet.switch_chain(target.chain_id).await
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::{ChainId, BASE_SEPOLIA};
    use crate::mock::MockChainControl;

    #[tokio::test]
    async fn test_already_on_target_issues_nothing() {
        let wallet = MockChainControl::on_chain(BASE_SEPOLIA.chain_id);

        reconcile(&wallet, &BASE_SEPOLIA).await.unwrap();

        assert!(wallet.switch_log().is_empty());
        assert!(wallet.add_log().is_empty());
    }

    #[tokio::test]
    async fn test_known_chain_single_switch() {
        let wallet = MockChainControl::on_chain(ChainId::new(1))
            .with_known(BASE_SEPOLIA.chain_id);

        reconcile(&wallet, &BASE_SEPOLIA).await.unwrap();

        assert_eq!(wallet.switch_log(), vec![BASE_SEPOLIA.chain_id]);
        assert!(wallet.add_log().is_empty());
        assert_eq!(wallet.current_chain().await.unwrap(), BASE_SEPOLIA.chain_id);
    }

    #[tokio::test]
    async fn test_unknown_chain_add_then_retry() {
        let wallet = MockChainControl::on_chain(ChainId::new(1));

        reconcile(&wallet, &BASE_SEPOLIA).await.unwrap();

        assert_eq!(
            wallet.switch_log(),
            vec![BASE_SEPOLIA.chain_id, BASE_SEPOLIA.chain_id]
        );
        assert_eq!(wallet.add_log(), vec![BASE_SEPOLIA.chain_id]);
        assert_eq!(wallet.current_chain().await.unwrap(), BASE_SEPOLIA.chain_id);
    }

    #[tokio::test]
    async fn test_switch_rejection_propagates_without_add() {
        let wallet = MockChainControl::on_chain(ChainId::new(1))
            .with_known(BASE_SEPOLIA.chain_id)
            .reject_switches("user denied");

        let err = reconcile(&wallet, &BASE_SEPOLIA).await.unwrap_err();

        assert!(matches!(err, WalletError::SwitchRejected(_)));
        assert!(wallet.add_log().is_empty());
    }

    #[tokio::test]
    async fn test_add_rejection_propagates() {
        let wallet = MockChainControl::on_chain(ChainId::new(1)).reject_adds("user denied");

        let err = reconcile(&wallet, &BASE_SEPOLIA).await.unwrap_err();

        assert!(matches!(err, WalletError::AddRejected(_)));
        assert_eq!(wallet.switch_log(), vec![BASE_SEPOLIA.chain_id]);
    }

    #[tokio::test]
    async fn test_retry_happens_exactly_once() {
        // A wallet that accepts the registration but still refuses to
        // recognize the chain must not be retried forever.
        let wallet = MockChainControl::on_chain(ChainId::new(1)).add_does_not_register();

        let err = reconcile(&wallet, &BASE_SEPOLIA).await.unwrap_err();

        assert!(matches!(err, WalletError::UnrecognizedChain(_)));
        assert_eq!(wallet.switch_log().len(), 2);
        assert_eq!(wallet.add_log().len(), 1);
    }
}
