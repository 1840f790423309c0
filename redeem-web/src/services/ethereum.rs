//! Injected Ethereum Provider via wasm-bindgen
//!
//! Bindings to the EIP-1193 object wallet extensions put on `window.ethereum`,
//! and the detection routine that waits for late injection.

use alloy_primitives::Bytes;
use async_trait::async_trait;
use futures::channel::oneshot;
use futures::future::{self, Either};
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::AddEventListenerOptions;

use crate::config::DetectionConfig;
use crate::error::WalletError;
use crate::services::provider::{CallRequest, WalletProvider};

/// Fired by MetaMask once `window.ethereum` has been assigned.
const INITIALIZED_EVENT: &str = "ethereum#initialized";

// ============================================================================
// JAVASCRIPT INTEROP
// ============================================================================

#[wasm_bindgen(inline_js = "
export function injectedEthereum() {
    return window.ethereum || null;
}
")]
extern "C" {
    /// `window.ethereum`, or null when no extension injected one
    fn injectedEthereum() -> JsValue;
}

#[wasm_bindgen]
extern "C" {
    /// The EIP-1193 provider object
    #[derive(Clone, Debug)]
    pub type Ethereum;

    #[wasm_bindgen(method, getter, js_name = isMetaMask)]
    fn is_metamask(this: &Ethereum) -> Option<bool>;

    /// `ethereum.request({ method, params })`
    #[wasm_bindgen(method, catch)]
    async fn request(this: &Ethereum, args: &JsValue) -> Result<JsValue, JsValue>;
}

#[derive(Serialize)]
struct RequestArguments<'a> {
    method: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    params: Option<Value>,
}

/// Convert a rejected `request` promise into a [`WalletError`].
///
/// Providers reject with `{ code, message }`; anything else is kept as text.
fn wallet_error_from_js(value: JsValue) -> WalletError {
    let field = |name: &str| js_sys::Reflect::get(&value, &JsValue::from_str(name)).ok();

    let code = field("code").and_then(|c| c.as_f64());
    let message = field("message")
        .and_then(|m| m.as_string())
        .or_else(|| value.as_string());

    match (code, message) {
        (Some(code), message) => WalletError::from_rpc(code as i64, message.unwrap_or_default()),
        (None, Some(message)) => WalletError::Js(message),
        (None, None) => WalletError::Js(format!("{:?}", value)),
    }
}

// ============================================================================
// PROVIDER
// ============================================================================

/// Wallet provider backed by the injected `window.ethereum` object.
#[derive(Clone, Debug)]
pub struct Eip1193Provider {
    ethereum: Ethereum,
}

impl Eip1193Provider {
    /// Synchronous check for an already injected provider.
    pub fn injected(require_metamask: bool) -> Option<Self> {
        let value = injectedEthereum();
        if value.is_null() || value.is_undefined() {
            return None;
        }

        let ethereum: Ethereum = value.unchecked_into();
        if require_metamask && ethereum.is_metamask() != Some(true) {
            log::warn!("[PROVIDER] Injected provider is not MetaMask, ignoring it");
            return None;
        }

        Some(Self { ethereum })
    }

    /// Find the injected provider, waiting up to `config.timeout_ms` for an
    /// extension that injects after the page script runs.
    pub async fn detect(config: &DetectionConfig) -> Option<Self> {
        if let Some(provider) = Self::injected(config.require_metamask) {
            return Some(provider);
        }

        log::debug!(
            "[PROVIDER] window.ethereum not set yet, waiting up to {}ms for injection",
            config.timeout_ms
        );
        wait_for_injection(config.timeout_ms).await;

        Self::injected(config.require_metamask)
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: &str,
        params: Option<Value>,
    ) -> Result<T, WalletError> {
        let args = RequestArguments { method, params }
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(|e| WalletError::Serialization(e.to_string()))?;

        let response = self
            .ethereum
            .request(&args)
            .await
            .map_err(wallet_error_from_js)?;
        log::debug!("[PROVIDER] {} -> {:?}", method, response);

        serde_wasm_bindgen::from_value(response)
            .map_err(|e| WalletError::Serialization(format!("{} response: {}", method, e)))
    }
}

#[async_trait(?Send)]
impl WalletProvider for Eip1193Provider {
    async fn accounts(&self) -> Result<Vec<String>, WalletError> {
        self.request("eth_accounts", None).await
    }

    async fn request_accounts(&self) -> Result<Vec<String>, WalletError> {
        self.request("eth_requestAccounts", None).await
    }

    async fn call(&self, request: &CallRequest) -> Result<Bytes, WalletError> {
        let call = serde_json::to_value(request)
            .map_err(|e| WalletError::Serialization(e.to_string()))?;
        let params = Value::Array(vec![call, Value::from("latest")]);

        let output: String = self.request("eth_call", Some(params)).await?;
        output
            .parse::<Bytes>()
            .map_err(|e| WalletError::Serialization(format!("eth_call output {:?}: {}", output, e)))
    }
}

/// Resolve on the injection event or after `timeout_ms`, whichever is first.
async fn wait_for_injection(timeout_ms: u32) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let (tx, rx) = oneshot::channel::<()>();
    let mut tx = Some(tx);
    let on_initialized = Closure::<dyn FnMut()>::new(move || {
        if let Some(tx) = tx.take() {
            let _ = tx.send(());
        }
    });

    let options = AddEventListenerOptions::new();
    options.set_once(true);
    let listening = window
        .add_event_listener_with_callback_and_add_event_listener_options(
            INITIALIZED_EVENT,
            on_initialized.as_ref().unchecked_ref(),
            &options,
        )
        .is_ok();

    let timeout = TimeoutFuture::new(timeout_ms);
    if !listening {
        timeout.await;
        return;
    }

    futures::pin_mut!(rx, timeout);
    match future::select(rx, timeout).await {
        Either::Left(_) => log::debug!("[PROVIDER] Received {}", INITIALIZED_EVENT),
        Either::Right(_) => log::debug!("[PROVIDER] Gave up waiting after {}ms", timeout_ms),
    }

    let _ = window.remove_event_listener_with_callback(
        INITIALIZED_EVENT,
        on_initialized.as_ref().unchecked_ref(),
    );
}
