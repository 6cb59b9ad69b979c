//! Scripted wallet implementations for testing.
//!
//! Every request is recorded so tests can assert the exact sequence the
//! reconciliation protocol issued.

use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::chain::{ChainId, ChainParams};
use crate::control::{ChainControl, ProviderSwitch};
use crate::error::{Result, WalletError};

/// In-memory injected wallet.
pub struct MockChainControl {
    inner: Mutex<MockState>,
    reject_switch: Option<String>,
    reject_add: Option<String>,
    add_registers: bool,
}

struct MockState {
    current: ChainId,
    known: HashSet<u64>,
    switches: Vec<ChainId>,
    adds: Vec<ChainId>,
}

impl MockChainControl {
    /// A wallet currently on `chain`, with only that chain registered.
    pub fn on_chain(chain: ChainId) -> Self {
        let mut known = HashSet::new();
        known.insert(chain.get());
        Self {
            inner: Mutex::new(MockState {
                current: chain,
                known,
                switches: Vec::new(),
                adds: Vec::new(),
            }),
            reject_switch: None,
            reject_add: None,
            add_registers: true,
        }
    }

    /// Pre-register an additional chain.
    pub fn with_known(self, chain: ChainId) -> Self {
        self.inner.lock().unwrap().known.insert(chain.get());
        self
    }

    /// Reject every switch request with the given message.
    pub fn reject_switches(mut self, msg: &str) -> Self {
        self.reject_switch = Some(msg.to_string());
        self
    }

    /// Reject every add request with the given message.
    pub fn reject_adds(mut self, msg: &str) -> Self {
        self.reject_add = Some(msg.to_string());
        self
    }

    /// Accept add requests without actually registering the chain.
    pub fn add_does_not_register(mut self) -> Self {
        self.add_registers = false;
        self
    }

    /// Chains the wallet was asked to switch to, in order.
    pub fn switch_log(&self) -> Vec<ChainId> {
        self.inner.lock().unwrap().switches.clone()
    }

    /// Chains the wallet was asked to register, in order.
    pub fn add_log(&self) -> Vec<ChainId> {
        self.inner.lock().unwrap().adds.clone()
    }
}

#[async_trait]
impl ChainControl for MockChainControl {
    async fn current_chain(&self) -> Result<ChainId> {
        Ok(self.inner.lock().unwrap().current)
    }

    async fn switch_chain(&self, chain: ChainId) -> Result<()> {
        let mut state = self.inner.lock().unwrap();
        state.switches.push(chain);

        if let Some(msg) = &self.reject_switch {
            return Err(WalletError::SwitchRejected(msg.clone()));
        }
        if !state.known.contains(&chain.get()) {
            return Err(WalletError::UnrecognizedChain(chain));
        }
        state.current = chain;
        Ok(())
    }

    async fn add_chain(&self, params: &ChainParams) -> Result<()> {
        let mut state = self.inner.lock().unwrap();
        state.adds.push(params.chain_id);

        if let Some(msg) = &self.reject_add {
            return Err(WalletError::AddRejected(msg.clone()));
        }
        if self.add_registers {
            state.known.insert(params.chain_id.get());
        }
        Ok(())
    }
}

/// In-memory managed-wallet provider.
pub struct MockProvider {
    switches: Mutex<Vec<ChainId>>,
    reject: Option<String>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self {
            switches: Mutex::new(Vec::new()),
            reject: None,
        }
    }

    /// Reject every switch with the given message.
    pub fn rejecting(msg: &str) -> Self {
        Self {
            switches: Mutex::new(Vec::new()),
            reject: Some(msg.to_string()),
        }
    }

    pub fn switch_log(&self) -> Vec<ChainId> {
        self.switches.lock().unwrap().clone()
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProviderSwitch for MockProvider {
    async fn switch_chain(&self, chain: ChainId) -> Result<()> {
        self.switches.lock().unwrap().push(chain);
        match &self.reject {
            Some(msg) => Err(WalletError::Provider(msg.clone())),
            None => Ok(()),
        }
    }
}
