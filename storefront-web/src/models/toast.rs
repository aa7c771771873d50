use uuid::Uuid;
use yewdux::Store;

use crate::config::TOAST_CAPACITY;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Danger,
}

impl ToastKind {
    /// DaisyUI alert modifier.
    pub fn alert_class(self) -> &'static str {
        match self {
            Self::Success => "alert-success",
            Self::Danger => "alert-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: Uuid,
    pub kind: ToastKind,
    pub message: String,
}

/// Notifications currently on screen, oldest first.
#[derive(Default, Clone, PartialEq, Eq, Debug, Store)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
}

impl ToastState {
    /// Shows a toast, dropping the oldest ones beyond capacity.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> Uuid {
        let id = Uuid::new_v4();
        self.toasts.push(Toast {
            id,
            kind,
            message: message.into(),
        });
        if self.toasts.len() > TOAST_CAPACITY {
            let overflow = self.toasts.len() - TOAST_CAPACITY;
            self.toasts.drain(..overflow);
        }
        id
    }

    pub fn success(&mut self, message: impl Into<String>) -> Uuid {
        self.push(ToastKind::Success, message)
    }

    pub fn dismiss(&mut self, id: Uuid) {
        self.toasts.retain(|toast| toast.id != id);
    }
}
