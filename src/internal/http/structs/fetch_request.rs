//! 请求描述：交给 [`Transport`](crate::http::traits::Transport) 执行的一次请求。

use reqwest::Method;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, RANGE};
use url::Url;

use crate::internal::http::enums::RequestMode;
use crate::internal::ranges::byte_range::ByteRange;

#[derive(Debug, Clone)]
pub struct FetchRequest {
    pub url: Url,
    pub method: Method,
    /// 调用方自定义的请求头；非空时整个请求绕过分段流水线
    pub headers: HeaderMap,
    /// 未设置时视为 `cors`
    pub mode: Option<RequestMode>,
    /// SRI 完整性描述，如 `sha384-...`
    pub integrity: Option<String>,
}

impl FetchRequest {
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            url,
            method,
            headers: HeaderMap::new(),
            mode: None,
            integrity: None,
        }
    }

    /// 创建 GET 请求；URL 无法解析时返回错误信息。
    pub fn get(url: &str) -> Result<Self, String> {
        let url = Url::parse(url).map_err(|e| e.to_string())?;
        Ok(Self::new(Method::GET, url))
    }

    /// 追加一个请求头。
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn mode(mut self, mode: RequestMode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn integrity(mut self, integrity: impl Into<String>) -> Self {
        self.integrity = Some(integrity.into());
        self
    }

    /// 同一资源的 Range 请求，请求头只保留 `Range`。
    pub(crate) fn with_range(&self, range: &ByteRange) -> Self {
        let mut headers = HeaderMap::new();
        // header_value 只含 ASCII 数字、`=` 与 `-`
        if let Ok(value) = HeaderValue::from_str(&range.header_value()) {
            headers.insert(RANGE, value);
        }
        Self {
            headers,
            ..self.without_headers()
        }
    }

    /// 同一资源的无请求头请求，降级时整资源重新获取用。
    pub(crate) fn without_headers(&self) -> Self {
        Self {
            url: self.url.clone(),
            method: Method::GET,
            headers: HeaderMap::new(),
            mode: self.mode,
            integrity: None,
        }
    }
}
