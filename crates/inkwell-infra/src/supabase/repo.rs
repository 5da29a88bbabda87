//! PostgREST-backed post store.

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Client, Response};
use serde::Deserialize;

use inkwell_core::ports::PostRepository;
use inkwell_core::{NewPost, Post, RepoError};

use super::config::SupabaseConfig;

/// Error body PostgREST returns on failure.
#[derive(Debug, Deserialize)]
struct PostgrestError {
    message: String,
    #[serde(default)]
    code: Option<String>,
}

/// Posts stored in a hosted table, reached through its REST endpoint.
pub struct SupabasePostRepository {
    client: Client,
    endpoint: String,
}

impl SupabasePostRepository {
    pub fn new(config: &SupabaseConfig) -> Result<Self, RepoError> {
        let mut headers = HeaderMap::new();
        let key = HeaderValue::from_str(&config.key)
            .map_err(|e| RepoError::Connection(format!("invalid API key: {e}")))?;
        let bearer = HeaderValue::from_str(&format!("Bearer {}", config.key))
            .map_err(|e| RepoError::Connection(format!("invalid API key: {e}")))?;
        headers.insert("apikey", key);
        headers.insert(AUTHORIZATION, bearer);

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| RepoError::Connection(e.to_string()))?;

        let endpoint = config.endpoint();
        tracing::info!(endpoint = %endpoint, "Hosted post store configured");

        Ok(Self { client, endpoint })
    }
}

fn map_transport_err(e: reqwest::Error) -> RepoError {
    if e.is_connect() || e.is_timeout() {
        RepoError::Connection(e.to_string())
    } else if e.is_decode() {
        RepoError::Decode(e.to_string())
    } else {
        RepoError::Query(e.to_string())
    }
}

/// Pass successful responses through; turn failures into a `RepoError`
/// carrying the store's own message.
async fn check_status(response: Response) -> Result<Response, RepoError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.map_err(map_transport_err)?;
    let err = match serde_json::from_str::<PostgrestError>(&body) {
        // Class 23 is SQLSTATE "integrity constraint violation".
        Ok(PostgrestError {
            message,
            code: Some(code),
        }) if code.starts_with("23") => RepoError::Constraint(message),
        Ok(PostgrestError { message, .. }) => RepoError::Query(message),
        Err(_) if body.trim().is_empty() => RepoError::Query(format!("store responded {status}")),
        Err(_) => RepoError::Query(format!("store responded {status}: {}", body.trim())),
    };
    Err(err)
}

#[async_trait]
impl PostRepository for SupabasePostRepository {
    async fn list(&self) -> Result<Vec<Post>, RepoError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("select", "*"), ("order", "created_at.asc,id.asc")])
            .send()
            .await
            .map_err(map_transport_err)?;

        let posts: Vec<Post> = check_status(response)
            .await?
            .json()
            .await
            .map_err(map_transport_err)?;

        tracing::debug!(count = posts.len(), "Listed posts");
        Ok(posts)
    }

    async fn create(&self, new_post: NewPost) -> Result<Post, RepoError> {
        if let Some(field) = new_post.missing_field() {
            return Err(RepoError::Constraint(format!("{field} must not be empty")));
        }

        let response = self
            .client
            .post(&self.endpoint)
            .header("Prefer", "return=representation")
            .json(&[&new_post])
            .send()
            .await
            .map_err(map_transport_err)?;

        let rows: Vec<Post> = check_status(response)
            .await?
            .json()
            .await
            .map_err(map_transport_err)?;

        let post = rows
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::Decode("insert returned no rows".to_string()))?;

        tracing::debug!(post_id = %post.id, "Inserted post");
        Ok(post)
    }
}

#[cfg(test)]
mod tests {
    use std::net::TcpListener;
    use std::sync::Mutex;

    use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
    use serde_json::{Value, json};

    use super::*;

    type Rows = web::Data<Mutex<Vec<Value>>>;

    fn authorized(req: &HttpRequest) -> bool {
        req.headers().get("apikey").is_some_and(|v| v == "test-key")
            && req
                .headers()
                .get("authorization")
                .is_some_and(|v| v == "Bearer test-key")
    }

    async fn select(req: HttpRequest, rows: Rows) -> HttpResponse {
        if !authorized(&req) {
            return HttpResponse::Unauthorized()
                .json(json!({ "message": "Invalid API key", "code": null }));
        }
        HttpResponse::Ok().json(&*rows.lock().unwrap())
    }

    async fn insert(req: HttpRequest, rows: Rows, body: web::Json<Vec<Value>>) -> HttpResponse {
        if !authorized(&req) {
            return HttpResponse::Unauthorized().finish();
        }
        let returning = req
            .headers()
            .get("prefer")
            .is_some_and(|v| v == "return=representation");

        let mut created = Vec::new();
        for item in body.into_inner() {
            if item["title"] == "boom" {
                return HttpResponse::InternalServerError().json(json!({
                    "code": "XX000",
                    "message": "could not write block",
                }));
            }
            let row = json!({
                "id": uuid::Uuid::new_v4(),
                "title": item["title"],
                "content": item["content"],
                "created_at": "2024-05-01T12:00:00.123456+00:00",
            });
            created.push(row);
        }
        rows.lock().unwrap().extend(created.iter().cloned());

        if returning {
            HttpResponse::Created().json(created)
        } else {
            HttpResponse::Created().finish()
        }
    }

    /// Start a stand-in for the PostgREST endpoint and return its base URL.
    fn spawn_fake_store() -> String {
        let rows: Rows = web::Data::new(Mutex::new(Vec::new()));
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        let server = HttpServer::new(move || {
            App::new().app_data(rows.clone()).service(
                web::resource("/rest/v1/posts")
                    .route(web::get().to(select))
                    .route(web::post().to(insert)),
            )
        })
        .workers(1)
        .listen(listener)
        .unwrap()
        .run();
        actix_web::rt::spawn(server);

        format!("http://{addr}")
    }

    fn repo(url: &str, key: &str) -> SupabasePostRepository {
        SupabasePostRepository::new(&SupabaseConfig::new(url, key)).unwrap()
    }

    #[actix_web::test]
    async fn test_list_empty_table() {
        let url = spawn_fake_store();
        let posts = repo(&url, "test-key").list().await.unwrap();
        assert!(posts.is_empty());
    }

    #[actix_web::test]
    async fn test_create_then_list() {
        let url = spawn_fake_store();
        let repo = repo(&url, "test-key");

        let created = repo.create(NewPost::new("A", "B")).await.unwrap();
        assert_eq!(created.title, "A");
        assert_eq!(created.content, "B");

        let posts = repo.list().await.unwrap();
        assert_eq!(posts, vec![created]);
    }

    #[actix_web::test]
    async fn test_store_error_message_is_kept() {
        let url = spawn_fake_store();
        let err = repo(&url, "test-key")
            .create(NewPost::new("boom", "B"))
            .await
            .unwrap_err();

        assert!(matches!(err, RepoError::Query(ref msg) if msg == "could not write block"));
    }

    #[actix_web::test]
    async fn test_rejected_key() {
        let url = spawn_fake_store();
        let err = repo(&url, "wrong-key").list().await.unwrap_err();

        assert_eq!(err.to_string(), "Query execution failed: Invalid API key");
    }

    #[actix_web::test]
    async fn test_unreachable_store_is_connection_error() {
        // Bind then drop to get a port nothing listens on.
        let addr = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap();
        let err = repo(&format!("http://{addr}"), "test-key")
            .list()
            .await
            .unwrap_err();

        assert!(matches!(err, RepoError::Connection(_)));
    }
}
