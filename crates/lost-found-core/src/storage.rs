//! Remembered reporter name.
//!
//! The browser keeps the last used `userName` in local storage; the report
//! forms and the dashboard read it back.

use std::cell::RefCell;

/// Storage key shared by every page
pub const USER_NAME_KEY: &str = "userName";

pub trait UserNameCache {
    fn load(&self) -> Option<String>;
    fn save(&self, user_name: &str);
}

/// Process-local cache, for tests and non-browser hosts
#[derive(Debug, Default)]
pub struct MemoryUserNameCache {
    value: RefCell<Option<String>>,
}

impl UserNameCache for MemoryUserNameCache {
    fn load(&self) -> Option<String> {
        self.value.borrow().clone()
    }

    fn save(&self, user_name: &str) {
        *self.value.borrow_mut() = Some(user_name.to_string());
    }
}

/// Trimmed dashboard login, `None` when blank
pub fn normalize_user_name(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
