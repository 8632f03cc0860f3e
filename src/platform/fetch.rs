//! Network access through `gloo::net`.

use futures::future::{FutureExt, LocalBoxFuture};
use gloo::net::http::Request;
use orbitlink_core::{FetchError, TemplateFetcher};
use web_sys::{FormData, HtmlFormElement, RequestCache, RequestMode};

/// Fetches fragments with `cache: no-store`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooFetcher;

impl TemplateFetcher for GlooFetcher {
    fn fetch(&self, url: &str) -> LocalBoxFuture<'static, Result<String, FetchError>> {
        let url = url.to_string();
        async move {
            let response = Request::get(&url)
                .cache(RequestCache::NoStore)
                .send()
                .await
                .map_err(|e| FetchError::Transport(e.to_string()))?;

            if !response.ok() {
                return Err(FetchError::Status(response.status()));
            }

            response
                .text()
                .await
                .map_err(|e| FetchError::Transport(e.to_string()))
        }
        .boxed_local()
    }
}

/// POST a form's data to its action without reading the response.
///
/// `no-cors` yields an opaque response, so only transport failures are
/// reported.
pub async fn post_form_opaque(form: &HtmlFormElement) -> Result<(), FetchError> {
    let data = FormData::new_with_form(form)
        .map_err(|e| FetchError::Transport(format!("{:?}", e)))?;

    Request::post(&form.action())
        .mode(RequestMode::NoCors)
        .body(data)
        .map_err(|e| FetchError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))?;

    Ok(())
}
