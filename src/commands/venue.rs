//! Venue Commands
//!
//! `DELETE /venues/{id}` over `window.fetch`.

use async_trait::async_trait;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::error::DeleteError;
use crate::models::{VenueId, VenueReply};

const ID_PLACEHOLDER: &str = "{id}";

/// Build the request path; the id is inserted verbatim.
pub fn venue_path(template: &str, id: &VenueId) -> String {
    template.replace(ID_PLACEHOLDER, id.as_str())
}

/// Network seam for venue deletion
#[async_trait(?Send)]
pub trait VenueApi {
    async fn delete_venue(&self, path: &str) -> Result<VenueReply, DeleteError>;
}

/// Browser implementation backed by `window.fetch`
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchVenueApi;

#[async_trait(?Send)]
impl VenueApi for FetchVenueApi {
    async fn delete_venue(&self, path: &str) -> Result<VenueReply, DeleteError> {
        let window = web_sys::window().ok_or(DeleteError::NoWindow)?;

        let opts = RequestInit::new();
        opts.set_method("DELETE");
        opts.set_mode(RequestMode::SameOrigin);
        let request = Request::new_with_str_and_init(path, &opts).map_err(DeleteError::transport)?;

        let response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(DeleteError::transport)?;
        let response: Response = response.dyn_into().map_err(DeleteError::transport)?;
        let status = response.status();

        let text = response.text().map_err(DeleteError::body)?;
        let body = JsFuture::from(text).await.map_err(DeleteError::body)?;
        let body = body
            .as_string()
            .ok_or_else(|| DeleteError::Body("response text is not a string".to_string()))?;

        Ok(VenueReply { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_venue_path_interpolates_id() {
        assert_eq!(venue_path("/venues/{id}", &VenueId::new("42")), "/venues/42");
    }

    #[test]
    fn test_venue_path_uses_id_verbatim() {
        assert_eq!(venue_path("/venues/{id}", &VenueId::new("")), "/venues/");
        assert_eq!(venue_path("/venues/{id}", &VenueId::new("a b/c")), "/venues/a b/c");
    }

    #[test]
    fn test_venue_path_custom_template() {
        assert_eq!(
            venue_path("/api/{id}/delete?id={id}", &VenueId::new("7")),
            "/api/7/delete?id=7"
        );
    }
}
