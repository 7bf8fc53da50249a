use crate::core::ConfigProvider;
use crate::domain::model::{ActionOutcome, ApiResponse};
use crate::domain::ports::Transport;
use crate::utils::error::{ClientError, Result};
use serde::Serialize;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::str::FromStr;
use std::sync::Arc;
use std::task::{Context, Poll};
use tokio::task::JoinHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    BuyerSignUp,
    BuyerLogin,
}

impl Action {
    pub const ALL: [Action; 2] = [Action::BuyerSignUp, Action::BuyerLogin];

    pub fn name(&self) -> &'static str {
        match self {
            Action::BuyerSignUp => "buyerSignUp",
            Action::BuyerLogin => "buyerLogin",
        }
    }

    pub fn endpoint(&self) -> &'static str {
        match self {
            Action::BuyerSignUp => "/api/buyer/sign-up",
            Action::BuyerLogin => "/api/buyer/login",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Action {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "buyerSignUp" | "buyer-sign-up" => Ok(Action::BuyerSignUp),
            "buyerLogin" | "buyer-login" => Ok(Action::BuyerLogin),
            other => Err(ClientError::UnknownActionError {
                name: other.to_string(),
            }),
        }
    }
}

/// 背景中的 action 呼叫。可以 await 取得結果，也可以直接丟掉。
pub struct ActionHandle {
    action: Action,
    state: HandleState,
}

enum HandleState {
    Ready(Option<ActionOutcome>),
    Running(JoinHandle<ActionOutcome>),
}

impl ActionHandle {
    fn ready(action: Action, outcome: ActionOutcome) -> Self {
        Self {
            action,
            state: HandleState::Ready(Some(outcome)),
        }
    }

    pub fn action(&self) -> Action {
        self.action
    }

    /// 不等結果；請求會在背景跑完
    pub fn detach(self) {
        tracing::debug!("{} detached", self.action);
    }
}

impl Future for ActionHandle {
    type Output = ActionOutcome;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        match &mut this.state {
            HandleState::Ready(outcome) => Poll::Ready(outcome.take().unwrap_or_else(|| {
                ActionOutcome::Failed {
                    reason: "outcome already taken".to_string(),
                }
            })),
            HandleState::Running(join) => match Pin::new(join).poll(cx) {
                Poll::Ready(Ok(outcome)) => Poll::Ready(outcome),
                Poll::Ready(Err(e)) => Poll::Ready(ActionOutcome::Failed {
                    reason: format!("{} task did not finish: {}", this.action, e),
                }),
                Poll::Pending => Poll::Pending,
            },
        }
    }
}

/// 買家 action 的發送端，取代全域 store
pub struct BuyerClient<T: Transport> {
    transport: Arc<T>,
    base_url: String,
}

impl<T: Transport + 'static> BuyerClient<T> {
    pub fn new<C: ConfigProvider>(transport: T, config: &C) -> Self {
        Self {
            transport: Arc::new(transport),
            base_url: config.api_base_url().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint_url(&self, action: Action) -> String {
        format!("{}{}", self.base_url, action.endpoint())
    }

    pub fn buyer_sign_up<P: Serialize>(&self, payload: &P) -> ActionHandle {
        self.fire(Action::BuyerSignUp, payload)
    }

    pub fn buyer_login<P: Serialize>(&self, payload: &P) -> ActionHandle {
        self.fire(Action::BuyerLogin, payload)
    }

    /// 依名稱發送，例如 `buyerSignUp`。未知名稱在送出前就回錯。
    pub fn dispatch<P: Serialize>(&self, name: &str, payload: &P) -> Result<ActionHandle> {
        let action: Action = name.parse()?;
        Ok(self.fire(action, payload))
    }

    fn fire<P: Serialize>(&self, action: Action, payload: &P) -> ActionHandle {
        tracing::info!("➡️ entered {} request", action);

        let body = match serde_json::to_value(payload) {
            Ok(body) => body,
            Err(e) => {
                tracing::error!("❌ {} payload could not be serialized: {}", action, e);
                return ActionHandle::ready(
                    action,
                    ActionOutcome::Failed {
                        reason: e.to_string(),
                    },
                );
            }
        };
        tracing::debug!("{} payload: {}", action, body);

        let runtime = match tokio::runtime::Handle::try_current() {
            Ok(handle) => handle,
            Err(e) => {
                tracing::error!("❌ {} not sent, no async runtime: {}", action, e);
                return ActionHandle::ready(
                    action,
                    ActionOutcome::Failed {
                        reason: e.to_string(),
                    },
                );
            }
        };

        let transport = Arc::clone(&self.transport);
        let url = self.endpoint_url(action);
        let join = runtime.spawn(async move {
            let outcome = classify(transport.post_json(&url, &body).await);
            log_outcome(action, &outcome);
            outcome
        });

        ActionHandle {
            action,
            state: HandleState::Running(join),
        }
    }
}

impl<T: Transport> fmt::Debug for BuyerClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuyerClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

fn classify(result: Result<ApiResponse>) -> ActionOutcome {
    match result {
        Ok(resp) if resp.is_success() => ActionOutcome::Succeeded(resp),
        Ok(resp) => ActionOutcome::Rejected(resp),
        Err(e) => ActionOutcome::Failed {
            reason: e.to_string(),
        },
    }
}

fn log_outcome(action: Action, outcome: &ActionOutcome) {
    match outcome {
        ActionOutcome::Succeeded(resp) => {
            tracing::info!("✅ {} succeeded ({}): {}", action, resp.status, resp.body)
        }
        ActionOutcome::Rejected(resp) => {
            tracing::warn!("⚠️ {} rejected ({}): {}", action, resp.status, resp.body)
        }
        ActionOutcome::Failed { reason } => tracing::error!("❌ {} failed: {}", action, reason),
    }
}
