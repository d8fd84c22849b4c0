use std::sync::{Arc, Mutex};

use collectible_ledger::{AccountId, Collectible, ContractMetadata, Host, LogSink, TokenMetadata};

pub const NAME: &str = "collectible";
pub const SYMBOL: &str = "cltbl";
pub const TOKEN_TITLE: &str = "how to make friends";
pub const TOKEN_DESCRIPTION: &str = "curiosity";
pub const TOKEN_MEDIA: &str = "https://usb.ngrok.app/metadata/tools/noun-bike.png";

/// Host with a switchable caller identity and a recorded log transcript
#[derive(Default)]
pub struct TestHost {
    caller: Mutex<AccountId>,
    lines: Mutex<Vec<String>>,
}

impl TestHost {
    pub fn with_caller(caller: &str) -> Arc<Self> {
        Arc::new(Self {
            caller: Mutex::new(caller.to_string()),
            lines: Mutex::new(Vec::new()),
        })
    }

    pub fn set_caller(&self, caller: &str) {
        *self.caller.lock().unwrap() = caller.to_string();
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl LogSink for TestHost {
    fn log(&self, message: &str) {
        self.lines.lock().unwrap().push(message.to_string());
    }
}

impl Host for TestHost {
    fn current_caller(&self) -> AccountId {
        self.caller.lock().unwrap().clone()
    }
}

pub fn new_collectible(host: &Arc<TestHost>) -> Collectible<TestHost> {
    let metadata = ContractMetadata::new(NAME.to_string(), SYMBOL.to_string());
    let token_metadata = TokenMetadata {
        title: Some(TOKEN_TITLE.to_string()),
        description: Some(TOKEN_DESCRIPTION.to_string()),
        media: Some(TOKEN_MEDIA.to_string()),
        ..TokenMetadata::default()
    };
    Collectible::new(host.clone(), metadata, token_metadata)
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}
