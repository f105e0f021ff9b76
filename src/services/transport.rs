// ============================================================================
// TRANSPORT HTTP - gloo-net en el navegador, guionizado en tests
// ============================================================================

use async_trait::async_trait;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Respuesta HTTP ya leída (status + body en texto)
#[derive(Clone, Debug, PartialEq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    #[cfg(test)]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, String> {
        serde_json::from_str(&self.body).map_err(|e| format!("Parse error: {}", e))
    }
}

/// Errores de red se devuelven con el texto del error tal cual
#[async_trait(?Send)]
pub trait HttpTransport {
    async fn get(&self, url: &str) -> Result<HttpReply, String>;

    async fn post(&self, url: &str, body: Option<&Value>) -> Result<HttpReply, String>;
}

/// Transport real sobre fetch (gloo-net)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl HttpTransport for GlooTransport {
    async fn get(&self, url: &str) -> Result<HttpReply, String> {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        read_reply(response).await
    }

    async fn post(&self, url: &str, body: Option<&Value>) -> Result<HttpReply, String> {
        let builder = Request::post(url);
        let response = match body {
            Some(json) => builder
                .json(json)
                .map_err(|e| e.to_string())?
                .send()
                .await,
            None => builder.send().await,
        }
        .map_err(|e| e.to_string())?;
        read_reply(response).await
    }
}

async fn read_reply(response: gloo_net::http::Response) -> Result<HttpReply, String> {
    let status = response.status();
    let body = response.text().await.map_err(|e| e.to_string())?;
    Ok(HttpReply { status, body })
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Request registrada por el transport de pruebas
    #[derive(Clone, Debug, PartialEq)]
    pub struct RecordedCall {
        pub method: &'static str,
        pub url: String,
        pub body: Option<Value>,
    }

    /// Devuelve las respuestas en orden y registra cada llamada
    #[derive(Default)]
    pub struct ScriptedTransport {
        replies: RefCell<VecDeque<Result<HttpReply, String>>>,
        calls: RefCell<Vec<RecordedCall>>,
    }

    impl ScriptedTransport {
        pub fn new(replies: Vec<Result<HttpReply, String>>) -> Self {
            Self {
                replies: RefCell::new(replies.into()),
                calls: RefCell::new(Vec::new()),
            }
        }

        pub fn calls(&self) -> Vec<RecordedCall> {
            self.calls.borrow().clone()
        }

        pub fn count(&self, method: &str, url: &str) -> usize {
            self.calls
                .borrow()
                .iter()
                .filter(|call| call.method == method && call.url == url)
                .count()
        }

        fn next(&self, method: &'static str, url: &str, body: Option<&Value>) -> Result<HttpReply, String> {
            self.calls.borrow_mut().push(RecordedCall {
                method,
                url: url.to_string(),
                body: body.cloned(),
            });
            self.replies
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(format!("no scripted reply for {} {}", method, url)))
        }
    }

    #[async_trait(?Send)]
    impl HttpTransport for ScriptedTransport {
        async fn get(&self, url: &str) -> Result<HttpReply, String> {
            self.next("GET", url, None)
        }

        async fn post(&self, url: &str, body: Option<&Value>) -> Result<HttpReply, String> {
            self.next("POST", url, body)
        }
    }
}
