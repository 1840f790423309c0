//! Redeem state management
//!
//! Bridges the [`ConnectionMachine`] into Leptos: the machine runs in a local
//! task, the UI reads its latest [`Snapshot`] from a signal and talks back
//! through a command channel.

use futures::channel::mpsc::{self, UnboundedSender};
use leptos::prelude::*;

use crate::config::RedeemConfig;
use crate::services::ethereum::Eip1193Provider;
use crate::state::machine::{Command, ConnectionMachine, Snapshot};

/// Global redeem context
#[derive(Clone, Copy)]
pub struct RedeemContext {
    pub snapshot: RwSignal<Snapshot>,
    config: StoredValue<RedeemConfig>,
    commands: StoredValue<UnboundedSender<Command>>,
}

impl RedeemContext {
    pub fn account(&self) -> Option<String> {
        self.snapshot.with(|s| s.account.clone())
    }

    pub fn config(&self) -> RedeemConfig {
        self.config.get_value()
    }

    /// Queue a wallet authorization request.
    pub fn connect(&self) {
        self.commands.with_value(|tx| {
            if let Err(e) = tx.unbounded_send(Command::Connect) {
                log::error!("[ACCOUNT] Connection task is gone, dropping connect request: {}", e);
            }
        });
    }
}

/// Create the context and start the connection task.
///
/// Provider discovery runs once, immediately; the task then waits for
/// commands for the lifetime of the page.
pub fn provide_redeem_context(config: RedeemConfig) -> RedeemContext {
    let snapshot = RwSignal::new(Snapshot::default());
    let (tx, rx) = mpsc::unbounded();

    let context = RedeemContext {
        snapshot,
        config: StoredValue::new(config.clone()),
        commands: StoredValue::new(tx),
    };
    provide_context(context);

    leptos::task::spawn_local(async move {
        let provider = Eip1193Provider::detect(&config.detection).await;
        let machine = ConnectionMachine::<Eip1193Provider>::new(config, move |s: &Snapshot| {
            snapshot.set(s.clone());
        });
        machine.run(provider, rx).await;
    });

    context
}

pub fn use_redeem_context() -> RedeemContext {
    expect_context::<RedeemContext>()
}
