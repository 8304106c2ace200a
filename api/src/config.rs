use std::env;

#[derive(Clone)]
pub struct Config {
    pub upcitemdb_url: String,
    pub openfoodfacts_url: String,
    pub openproductsfacts_url: String,
    pub google_search_url: String,
    /// Google Custom Search key; search is disabled without it
    pub google_api_key: Option<String>,
    /// Google Custom Search engine id
    pub google_cx: Option<String>,
    pub barcode_lookup_url: String,
    /// Paid barcode database key; the provider is skipped without it
    pub barcode_lookup_api_key: Option<String>,
    pub openai_url: String,
    pub openai_api_key: Option<String>,
    pub openai_model: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            upcitemdb_url: env::var("UPCITEMDB_URL")
                .unwrap_or_else(|_| "https://api.upcitemdb.com".to_string()),
            openfoodfacts_url: env::var("OPENFOODFACTS_URL")
                .unwrap_or_else(|_| "https://world.openfoodfacts.org".to_string()),
            openproductsfacts_url: env::var("OPENPRODUCTSFACTS_URL")
                .unwrap_or_else(|_| "https://world.openproductsfacts.org".to_string()),
            google_search_url: env::var("GOOGLE_SEARCH_URL")
                .unwrap_or_else(|_| "https://www.googleapis.com".to_string()),
            google_api_key: non_empty_var("GOOGLE_API_KEY"),
            google_cx: non_empty_var("GOOGLE_CX"),
            barcode_lookup_url: env::var("BARCODE_LOOKUP_URL")
                .unwrap_or_else(|_| "https://api.barcodelookup.com".to_string()),
            barcode_lookup_api_key: non_empty_var("BARCODE_LOOKUP_API_KEY"),
            openai_url: env::var("OPENAI_URL")
                .unwrap_or_else(|_| "https://api.openai.com".to_string()),
            openai_api_key: non_empty_var("OPENAI_API_KEY"),
            openai_model: env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o".to_string()),
        }
    }

    /// Google search needs both the key and the engine id
    pub fn google_credentials(&self) -> Option<(String, String)> {
        match (&self.google_api_key, &self.google_cx) {
            (Some(key), Some(cx)) => Some((key.clone(), cx.clone())),
            _ => None,
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}
