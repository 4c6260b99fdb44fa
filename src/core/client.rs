use crate::config::HostOptions;
use crate::domain::model::{AuthResult, Credentials, GeocodeResult};
use crate::domain::ports::SwsApi;
use crate::utils::error::{Result, SwsError};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde_json::Value;

pub const AUTHENTICATE_PATH: &str = "/api/authenticate";
pub const GEOCODE_PATH: &str = "/api/geocode";

/// 單次請求的快照：建立當下的 host/port 加上 path、method 與固定的 JSON headers
#[derive(Debug, Clone, PartialEq)]
pub struct RequestOptions {
    pub host: String,
    pub port: String,
    pub path: String,
    pub method: Method,
    pub headers: HeaderMap,
}

impl RequestOptions {
    pub fn url(&self) -> String {
        let base = HostOptions::new(self.host.clone(), self.port.clone()).base_url();
        format!("{}{}", base, self.path)
    }

    /// 給 log 用：`authKey` 的值以 `***` 取代
    pub fn redacted_url(&self) -> String {
        const KEY: &str = "authKey=";

        let url = self.url();
        match url.find(KEY) {
            Some(idx) => {
                let start = idx + KEY.len();
                let end = url[start..]
                    .find('&')
                    .map(|i| start + i)
                    .unwrap_or(url.len());
                format!("{}***{}", &url[..start], &url[end..])
            }
            None => url,
        }
    }
}

fn json_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers
}

/// address 與 city 會做 percent-encoding，authKey 原樣附加。
///
/// authKey 不編碼，所以含有 `&`、`#` 等 URL 保留字元的 key 會被伺服器拆成別的參數或 fragment。
pub fn geocode_path(auth_key: &str, address_line: &str, city_line: &str) -> String {
    format!(
        "{}?address={}&city={}&authKey={}",
        GEOCODE_PATH,
        urlencoding::encode(address_line),
        urlencoding::encode(city_line),
        auth_key
    )
}

#[derive(Debug, Clone)]
pub struct SwsClient {
    client: Client,
    host_options: HostOptions,
}

impl SwsClient {
    pub fn new(host_options: HostOptions) -> Self {
        Self::with_http_client(Client::new(), host_options)
    }

    /// 共用既有的 reqwest Client（連線池由 reqwest 管理）
    pub fn with_http_client(client: Client, host_options: HostOptions) -> Self {
        Self {
            client,
            host_options,
        }
    }

    pub fn host_options(&self) -> &HostOptions {
        &self.host_options
    }

    /// 只影響之後建立的請求
    pub fn set_host_options(&mut self, host_options: HostOptions) {
        tracing::debug!(
            "SWS host changed: {} -> {}",
            self.host_options.base_url(),
            host_options.base_url()
        );
        self.host_options = host_options;
    }

    pub fn host_options_mut(&mut self) -> &mut HostOptions {
        &mut self.host_options
    }

    pub fn request_options(&self, path: &str, method: Method) -> RequestOptions {
        RequestOptions {
            host: self.host_options.host.clone(),
            port: self.host_options.port.clone(),
            path: path.to_string(),
            method,
            headers: json_headers(),
        }
    }

    fn build_request(&self, options: &RequestOptions) -> RequestBuilder {
        self.client
            .request(options.method.clone(), options.url())
            .headers(options.headers.clone())
    }

    /// 讀完整個 body 再解析；HTTP 狀態碼只記錄，不影響判斷
    async fn read_json(response: Response) -> Result<Value> {
        let status = response.status();
        if status.is_success() {
            tracing::debug!("SWS response status: {}", status);
        } else {
            tracing::warn!("SWS responded with HTTP {}", status);
        }

        let body = response.bytes().await?;
        tracing::debug!("Received {} bytes from SWS", body.len());

        serde_json::from_slice(&body).map_err(|source| SwsError::InvalidResponse {
            status: status.as_u16(),
            source,
        })
    }

    pub async fn authenticate(&self, username: &str, password: &str) -> Result<AuthResult> {
        tracing::info!("Attempting authentication ...");

        let credentials = Credentials::new(username, password);
        let options = self.request_options(AUTHENTICATE_PATH, Method::POST);
        tracing::debug!("SWS Authentication URL  : [POST] {}", options.url());

        let response = self
            .build_request(&options)
            .json(&credentials)
            .send()
            .await?;
        tracing::debug!("Received response from SWS.");

        let body = Self::read_json(response).await?;
        match AuthResult::from_body(body) {
            Ok(result) => {
                tracing::info!("✅ Successful authentication!");
                Ok(result)
            }
            Err(response) => {
                tracing::warn!("❌ Authentication failed: no authKey in response");
                Err(SwsError::AuthenticationFailed { response })
            }
        }
    }

    pub async fn geocode(
        &self,
        auth_key: &str,
        address_line: &str,
        city_line: &str,
    ) -> Result<GeocodeResult> {
        let path = geocode_path(auth_key, address_line, city_line);
        let options = self.request_options(&path, Method::GET);

        tracing::debug!(
            "SWS Geocode unencoded query: address={:?} city={:?}",
            address_line,
            city_line
        );
        tracing::debug!("SWS Geocode encoded URL  : [GET] {}", options.redacted_url());

        let response = self.build_request(&options).send().await?;
        let body = Self::read_json(response).await?;

        GeocodeResult::from_body(body).map_err(|response| {
            tracing::warn!("❌ Geocode failed: empty response");
            SwsError::GeocodeFailed { response }
        })
    }
}

#[async_trait::async_trait]
impl SwsApi for SwsClient {
    async fn authenticate(&self, username: &str, password: &str) -> Result<AuthResult> {
        SwsClient::authenticate(self, username, password).await
    }

    async fn geocode(
        &self,
        auth_key: &str,
        address_line: &str,
        city_line: &str,
    ) -> Result<GeocodeResult> {
        SwsClient::geocode(self, auth_key, address_line, city_line).await
    }
}
