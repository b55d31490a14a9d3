use super::form::{FileUpload, FormPayload, FormValue};
use async_trait::async_trait;

/// Raw answer of the server: status code and body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

/// Posts a create form. One call = one request, no retries.
#[async_trait(?Send)]
pub trait SubmitTransport: Send + Sync {
    /// `Err` means the request never produced an HTTP answer (network, CORS, ...).
    async fn post_form(&self, url: &str, payload: &FormPayload)
        -> Result<TransportResponse, String>;
}

/// `fetch()` with a multipart `FormData` body.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

#[async_trait(?Send)]
impl SubmitTransport for FetchTransport {
    async fn post_form(
        &self,
        url: &str,
        payload: &FormPayload,
    ) -> Result<TransportResponse, String> {
        use wasm_bindgen::JsCast;
        use web_sys::{Request, RequestInit, RequestMode, Response};

        let form_data = to_form_data(payload)?;

        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_mode(RequestMode::Cors);
        opts.set_body(&form_data);

        let request = Request::new_with_str_and_init(url, &opts).map_err(|e| format!("{e:?}"))?;
        // Content-Type (with boundary) is set by the browser from the FormData body
        request
            .headers()
            .set("X-Requested-With", "XMLHttpRequest")
            .map_err(|e| format!("{e:?}"))?;
        request
            .headers()
            .set("Accept", "application/json")
            .map_err(|e| format!("{e:?}"))?;

        let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
        let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| format!("{e:?}"))?;
        let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;

        let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
            .await
            .map_err(|e| format!("{e:?}"))?;
        let body = text.as_string().unwrap_or_default();

        Ok(TransportResponse {
            status: resp.status(),
            body,
        })
    }
}

fn to_form_data(payload: &FormPayload) -> Result<web_sys::FormData, String> {
    let form_data = web_sys::FormData::new().map_err(|e| format!("{e:?}"))?;
    for (name, value) in &payload.parts {
        match value {
            FormValue::Text(text) => form_data
                .append_with_str(name, text)
                .map_err(|e| format!("{e:?}"))?,
            FormValue::File(Some(file)) => {
                let blob = to_blob(file)?;
                form_data
                    .append_with_blob_and_filename(name, &blob, &file.name)
                    .map_err(|e| format!("{e:?}"))?
            }
            // An untouched file input: nothing to send
            FormValue::File(None) => {}
        }
    }
    Ok(form_data)
}

fn to_blob(file: &FileUpload) -> Result<web_sys::Blob, String> {
    let bytes = js_sys::Uint8Array::from(file.bytes.as_slice());
    let parts = js_sys::Array::of1(&bytes);
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(&file.content_type);
    web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|e| format!("{e:?}"))
}
