use lexi_core::types::Definition;

use crate::{DictionaryProvider, LookupError};

/// Client for the SheCodes dictionary API
#[derive(Clone)]
pub struct ShecodesClient {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl ShecodesClient {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            base_url,
            api_key,
            client: reqwest::Client::new(),
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/dictionary/v1/define",
            self.base_url.trim_end_matches('/')
        )
    }

    fn build_request(&self, word: &str) -> Result<reqwest::Request, reqwest::Error> {
        self.client
            .get(self.endpoint())
            .query(&[("word", word), ("key", self.api_key.as_str())])
            .build()
    }
}

#[async_trait::async_trait]
impl DictionaryProvider for ShecodesClient {
    async fn define(&self, word: &str) -> Result<Definition, LookupError> {
        let request = self.build_request(word)?;
        let response = self.client.execute(request).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status));
        }

        response
            .json::<Definition>()
            .await
            .map_err(|e| LookupError::Malformed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_url_carries_word_and_key() {
        let client = ShecodesClient::new(
            "https://api.shecodes.io".to_string(),
            "k-123".to_string(),
        );

        let request = client.build_request("dictionary").expect("build failed");
        let url = request.url();

        assert_eq!(url.path(), "/dictionary/v1/define");
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert!(pairs.contains(&("word".to_string(), "dictionary".to_string())));
        assert!(pairs.contains(&("key".to_string(), "k-123".to_string())));
    }

    #[test]
    fn trailing_slash_in_base_url_is_tolerated() {
        let client =
            ShecodesClient::new("https://api.shecodes.io/".to_string(), "k".to_string());

        let request = client.build_request("word").expect("build failed");
        assert_eq!(request.url().path(), "/dictionary/v1/define");
    }

    #[test]
    fn word_needing_escaping_round_trips() {
        let client =
            ShecodesClient::new("https://api.shecodes.io".to_string(), "k".to_string());

        let request = client.build_request("naïve word").expect("build failed");
        let word = request
            .url()
            .query_pairs()
            .find(|(k, _)| k == "word")
            .map(|(_, v)| v.into_owned());
        assert_eq!(word.as_deref(), Some("naïve word"));
    }
}
