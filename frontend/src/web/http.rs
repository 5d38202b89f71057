//! HTTP 请求封装模块
//!
//! 使用 `web_sys::fetch` 实现核心库的 `HttpClient`，不引入额外的 HTTP crate。

use backcontrol::request::{HttpClient, HttpRequest, HttpResponse};
use backcontrol::TransportError;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use backcontrol_shared::protocol::FilePart;
use web_sys::js_sys::{Array, Uint8Array};
use web_sys::{Blob, BlobPropertyBag, FormData, Headers, Request, RequestInit, Response};

/// 基于 `window.fetch` 的客户端
///
/// fetch 只在网络层失败时 reject，非 2xx 状态码照常返回，正好符合 `HttpClient` 的约定。
#[derive(Clone, Copy, Default)]
pub struct FetchHttpClient;

impl FetchHttpClient {
    fn build(req: &HttpRequest) -> Result<Request, TransportError> {
        let headers = Headers::new().map_err(|e| {
            TransportError::RequestBuild(format!("创建 Headers 失败: {:?}", e))
        })?;

        for (key, value) in &req.headers {
            headers.set(key, value).map_err(|e| {
                TransportError::RequestBuild(format!("设置 Header 失败: {:?}", e))
            })?;
        }

        let opts = RequestInit::new();
        opts.set_method(req.method.as_str());
        opts.set_headers(&headers.into());

        if let Some(body) = &req.body {
            opts.set_body(&JsValue::from_str(body));
        }

        // 不手动设置 Content-Type，浏览器会带上 boundary
        if let Some(file) = &req.file {
            opts.set_body(&Self::form_data(file)?.into());
        }

        Request::new_with_str_and_init(&req.url, &opts)
            .map_err(|e| TransportError::RequestBuild(format!("{:?}", e)))
    }

    fn form_data(file: &FilePart) -> Result<FormData, TransportError> {
        let build_err = |e: JsValue| TransportError::RequestBuild(format!("构建上传表单失败: {:?}", e));

        let parts = Array::of1(&Uint8Array::from(file.bytes.as_slice()));
        let bag = BlobPropertyBag::new();
        bag.set_type(&file.content_type);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &bag).map_err(build_err)?;

        let form = FormData::new().map_err(build_err)?;
        form.append_with_blob_and_filename(&file.field, &blob, &file.file_name)
            .map_err(build_err)?;
        Ok(form)
    }

    async fn read_text(response: &Response) -> Result<String, TransportError> {
        let promise = response
            .text()
            .map_err(|e| TransportError::ResponseRead(format!("{:?}", e)))?;

        let text = JsFuture::from(promise)
            .await
            .map_err(|e| TransportError::ResponseRead(format!("{:?}", e)))?;

        text.as_string()
            .ok_or_else(|| TransportError::ResponseRead("无法转换为字符串".to_string()))
    }
}

#[async_trait::async_trait(?Send)]
impl HttpClient for FetchHttpClient {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, TransportError> {
        let request = Self::build(&req)?;

        let window = web_sys::window()
            .ok_or_else(|| TransportError::Network("无法获取 window 对象".to_string()))?;

        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| TransportError::Network(format!("{:?}", e)))?;

        let response: Response = resp_value.dyn_into().map_err(|e| {
            TransportError::ResponseRead(format!("Response 类型转换失败: {:?}", e))
        })?;

        let status = response.status();
        let body = Self::read_text(&response).await?;

        Ok(HttpResponse { status, body })
    }
}
