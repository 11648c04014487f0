use rand::RngCore;

use app_api::AppContext;

/// Shared state behind the console's HTTP surface: the application
/// context plus the run token that gates the `/api` routes. The token is
/// minted once per process, printed at startup, and never persisted.
#[derive(Clone)]
pub struct HttpState {
    pub context: AppContext,
    token: String,
}

impl HttpState {
    pub fn new(context: AppContext) -> Self {
        Self {
            context,
            token: mint_run_token(),
        }
    }

    /// State with a caller-chosen token, for tests that need to send it.
    pub fn with_token(context: AppContext, token: String) -> Self {
        Self { context, token }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn token_matches(&self, candidate: Option<&str>) -> bool {
        candidate == Some(self.token.as_str())
    }
}

fn mint_run_token() -> String {
    let mut bytes = [0u8; 16];
    rand::rngs::OsRng.fill_bytes(&mut bytes);
    bytes.iter().map(|byte| format!("{byte:02x}")).collect()
}
