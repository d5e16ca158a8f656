use gloo_console::error as console_error;
use web_sys::Storage;

use folio::theme::PreferenceStore;

// window.localStorage, read and written as raw strings
//
// every access goes back through window() since the storage object can disappear
// (quota errors, privacy modes) between calls
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

fn local_storage() -> anyhow::Result<Storage> {
    web_sys::window()
        .ok_or_else(|| anyhow::Error::msg("no global window exists"))?
        .local_storage()
        .map_err(|err| anyhow::Error::msg(format!("local storage denied: {err:?}")))?
        .ok_or_else(|| anyhow::Error::msg("local storage unavailable"))
}

impl PreferenceStore for BrowserStore {
    fn load(&self, key: &str) -> anyhow::Result<Option<String>> {
        local_storage()?.get_item(key).map_err(|err| {
            console_error!(format!("Failed to fetch local storage {key}: {err:?}"));
            anyhow::Error::msg("Local storage failure, see console log")
        })
    }

    fn save(&self, key: &str, value: &str) -> anyhow::Result<()> {
        local_storage()?.set_item(key, value).map_err(|err| {
            console_error!(format!("Failed to set local storage {key}: {err:?}"));
            anyhow::Error::msg("Local storage failure, see console log")
        })
    }
}
