//! `localStorage` implementation of the user name cache.

use lost_found_core::storage::{UserNameCache, USER_NAME_KEY};

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserUserNameCache;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl UserNameCache for BrowserUserNameCache {
    fn load(&self) -> Option<String> {
        local_storage()?.get_item(USER_NAME_KEY).ok().flatten()
    }

    fn save(&self, user_name: &str) {
        let Some(storage) = local_storage() else {
            log::warn!("localStorage unavailable, user name not cached");
            return;
        };
        if let Err(e) = storage.set_item(USER_NAME_KEY, user_name) {
            log::warn!("Failed to cache user name: {:?}", e);
        }
    }
}
