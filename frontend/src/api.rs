use std::rc::Rc;

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder};
use js_sys::{Array, Uint8Array};
use pressdesk_shared::{
    article_form::ImageData,
    http::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, MultipartFile, RequestBody},
    ApiClient, ApiError, SessionStore,
};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, File, FormData};

use crate::{config, storage::LocalTokenStore};

/// Browser `fetch` via gloo-net.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GlooTransport;

pub type Client = ApiClient<GlooTransport>;
pub type Session = SessionStore<GlooTransport, LocalTokenStore>;

pub fn new_session() -> Session {
    let client = Rc::new(ApiClient::new(config::client_config(), GlooTransport));
    SessionStore::new(client, LocalTokenStore)
}

fn js_error(value: JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

fn multipart_form(file: MultipartFile) -> Result<FormData, ApiError> {
    let form = FormData::new().map_err(|e| ApiError::Encode(js_error(e)))?;
    let bytes = Uint8Array::from(file.bytes.as_slice());
    let parts = Array::of1(&bytes);
    let options = BlobPropertyBag::new();
    options.set_type(&file.mime);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|e| ApiError::Encode(js_error(e)))?;
    form.append_with_blob_and_filename(&file.field, &blob, &file.file_name)
        .map_err(|e| ApiError::Encode(js_error(e)))?;
    Ok(form)
}

#[async_trait(?Send)]
impl HttpTransport for GlooTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut builder: RequestBuilder = match request.method {
            HttpMethod::Get => Request::get(&request.url),
            HttpMethod::Post => Request::post(&request.url),
            HttpMethod::Put => Request::put(&request.url),
            HttpMethod::Delete => Request::delete(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let prepared = match request.body {
            RequestBody::Empty => builder.build(),
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Multipart(file) => builder.body(multipart_form(file)?),
        }
        .map_err(|e| ApiError::Encode(format!("{:?}", e)))?;

        let response = prepared
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Network error: {:?}", e)))?;
        let status = response.status();
        let body = response
            .binary()
            .await
            .map_err(|e| ApiError::Network(format!("Network error: {:?}", e)))?;

        Ok(HttpResponse {
            status,
            body,
        })
    }
}

/// A file picked in an `<input type="file">`, read lazily at upload time.
#[derive(Debug, Clone, PartialEq)]
pub struct BrowserFile(pub File);

impl BrowserFile {
    /// Object URL for an `<img>` preview. The caller revokes it.
    pub fn object_url(&self) -> Option<String> {
        web_sys::Url::create_object_url_with_blob(&self.0).ok()
    }
}

#[async_trait(?Send)]
impl ImageData for BrowserFile {
    async fn read_bytes(&self) -> Result<Vec<u8>, ApiError> {
        let buffer = JsFuture::from(self.0.array_buffer())
            .await
            .map_err(|e| ApiError::Encode(js_error(e)))?;
        Ok(Uint8Array::new(&buffer).to_vec())
    }
}
