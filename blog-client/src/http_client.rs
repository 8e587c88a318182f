use crate::error::BlogClientError;
use crate::models::{Category, Comment, PopulatedPost, Post};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value, json};
use uuid::Uuid;

#[derive(Clone)]
pub struct BlogClient {
    client: Client,
    base_url: String,
}

impl BlogClient {
    pub fn connect(endpoint: &str) -> Result<Self, BlogClientError> {
        let base_url = endpoint.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(BlogClientError::InvalidRequest(format!(
                "endpoint must be an http(s) URL: {endpoint}"
            )));
        }

        Ok(Self {
            client: Client::builder().build()?,
            base_url,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    async fn send<T: DeserializeOwned>(req: RequestBuilder) -> Result<T, BlogClientError> {
        let resp = req.send().await?;

        if resp.status().is_success() {
            Ok(resp.json().await?)
        } else {
            Err(BlogClientError::from_http_response(resp).await)
        }
    }

    pub async fn list_posts(&self) -> Result<Vec<PopulatedPost>, BlogClientError> {
        Self::send(self.client.get(self.url("/posts"))).await
    }

    pub async fn get_post(&self, id: Uuid) -> Result<PopulatedPost, BlogClientError> {
        Self::send(self.client.get(self.url(&format!("/posts/{id}")))).await
    }

    pub async fn list_posts_by_category(
        &self,
        category: Uuid,
    ) -> Result<Vec<PopulatedPost>, BlogClientError> {
        Self::send(
            self.client
                .get(self.url(&format!("/posts/category/{category}"))),
        )
        .await
    }

    /// `fields` holds the post's content (title, body, ...) next to the category reference.
    pub async fn create_post(
        &self,
        category: Uuid,
        fields: Map<String, Value>,
    ) -> Result<Post, BlogClientError> {
        let mut payload = fields;
        payload.insert("category".into(), json!(category));

        Self::send(self.client.post(self.url("/posts")).json(&payload)).await
    }

    pub async fn update_post(
        &self,
        id: Uuid,
        category: Option<Uuid>,
        fields: Map<String, Value>,
    ) -> Result<Post, BlogClientError> {
        let mut payload = fields;
        if let Some(category) = category {
            payload.insert("category".into(), json!(category));
        }

        Self::send(
            self.client
                .put(self.url(&format!("/posts/{id}")))
                .json(&payload),
        )
        .await
    }

    /// Returns the post as it was just before deletion.
    pub async fn delete_post(&self, id: Uuid) -> Result<Post, BlogClientError> {
        Self::send(self.client.delete(self.url(&format!("/posts/{id}")))).await
    }

    pub async fn create_comment(
        &self,
        post_id: Uuid,
        body: Map<String, Value>,
    ) -> Result<Comment, BlogClientError> {
        Self::send(
            self.client
                .post(self.url(&format!("/posts/{post_id}/comments")))
                .json(&body),
        )
        .await
    }

    pub async fn get_comment(&self, id: Uuid) -> Result<Comment, BlogClientError> {
        Self::send(self.client.get(self.url(&format!("/comments/{id}")))).await
    }

    pub async fn create_category(&self, name: &str) -> Result<Category, BlogClientError> {
        Self::send(
            self.client
                .post(self.url("/categories"))
                .json(&json!({ "name": name })),
        )
        .await
    }

    pub async fn list_categories(&self) -> Result<Vec<Category>, BlogClientError> {
        Self::send(self.client.get(self.url("/categories"))).await
    }

    pub async fn get_category(&self, id: Uuid) -> Result<Category, BlogClientError> {
        Self::send(self.client.get(self.url(&format!("/categories/{id}")))).await
    }
}
