// ============================================================================
// HTTP TRANSPORT - Envío de requests (sin lógica de sesión)
// ============================================================================
// El ApiClient arma el request completo (URL, headers, body) y el transporte
// solo lo envía. En el navegador es gloo-net; en tests un fake con guion.
// ============================================================================

use async_trait::async_trait;

use crate::services::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub params: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transporte HTTP. Futures `!Send`: todo corre en el event loop del navegador.
#[async_trait(?Send)]
pub trait HttpTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Transporte real con gloo-net (fetch del navegador)
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct GlooTransport;

#[cfg(target_arch = "wasm32")]
#[async_trait(?Send)]
impl HttpTransport for GlooTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        use gloo_net::http::Request;

        let mut builder = match request.method {
            HttpMethod::Get => Request::get(&request.url),
            HttpMethod::Post => Request::post(&request.url),
            HttpMethod::Put => Request::put(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if !request.params.is_empty() {
            builder = builder.query(
                request
                    .params
                    .iter()
                    .map(|(key, value)| (key.as_str(), value.as_str())),
            );
        }

        let response = match request.body {
            Some(body) => builder
                .body(body)
                .map_err(|e| ApiError::Serialization(e.to_string()))?
                .send()
                .await,
            None => builder.send().await,
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use super::*;

    /// Transporte con respuestas programadas por (método, sufijo de path).
    /// Registra cada request enviado.
    #[derive(Default)]
    pub struct ScriptedTransport {
        routes: RefCell<Vec<(HttpMethod, String, VecDeque<Result<HttpResponse, ApiError>>)>>,
        sent: RefCell<Vec<HttpRequest>>,
    }

    impl ScriptedTransport {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn respond(&self, method: HttpMethod, path: &str, status: u16, body: &str) -> &Self {
            self.push(method, path, Ok(HttpResponse { status, body: body.to_string() }))
        }

        pub fn fail(&self, method: HttpMethod, path: &str, error: ApiError) -> &Self {
            self.push(method, path, Err(error))
        }

        fn push(&self, method: HttpMethod, path: &str, outcome: Result<HttpResponse, ApiError>) -> &Self {
            let mut routes = self.routes.borrow_mut();
            match routes.iter_mut().find(|(m, p, _)| *m == method && p == path) {
                Some((_, _, queue)) => queue.push_back(outcome),
                None => routes.push((method, path.to_string(), VecDeque::from([outcome]))),
            }
            drop(routes);
            self
        }

        pub fn sent(&self) -> Vec<HttpRequest> {
            self.sent.borrow().clone()
        }

        pub fn sent_count(&self) -> usize {
            self.sent.borrow().len()
        }
    }

    #[async_trait(?Send)]
    impl HttpTransport for ScriptedTransport {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
            self.sent.borrow_mut().push(request.clone());
            let mut routes = self.routes.borrow_mut();
            // La ruta más específica (sufijo más largo) gana
            let outcome = routes
                .iter_mut()
                .filter(|(m, p, _)| *m == request.method && request.url.ends_with(p.as_str()))
                .max_by_key(|(_, p, _)| p.len())
                .and_then(|(_, _, queue)| {
                    if queue.len() > 1 {
                        queue.pop_front()
                    } else {
                        queue.front().cloned()
                    }
                });
            outcome.unwrap_or_else(|| {
                Ok(HttpResponse {
                    status: 404,
                    body: r#"{"detail": "Not found."}"#.to_string(),
                })
            })
        }
    }
}
