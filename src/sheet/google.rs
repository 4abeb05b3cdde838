//! Google Sheets v4 REST クライアント
//!
//! サービスアカウントの JWT をアクセストークンへ交換し、values API で
//! clear / update / append / get を発行する。呼び出しはすべて逐次。

use async_trait::async_trait;
use jsonwebtoken::{
    Algorithm,
    EncodingKey,
    Header,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::config::ServiceAccountCredentials;

use super::client::{
    SheetError,
    SheetsClient,
};

const TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const SHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";
const API_BASE: &str = "https://sheets.googleapis.com/v4/spreadsheets";
/// クリアと読み出しに使う列範囲（キー列 + ロケール列に対して十分に広い）
const SHEET_RANGE: &str = "A1:ZZ";

/// サービスアカウントの JWT クレーム
#[derive(Debug, Serialize)]
struct Claims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: u64,
    exp: u64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct SpreadsheetMeta {
    #[serde(default)]
    sheets: Vec<SheetMeta>,
}

#[derive(Debug, Deserialize)]
struct SheetMeta {
    properties: SheetProperties,
}

#[derive(Debug, Deserialize)]
struct SheetProperties {
    title: String,
}

#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

/// Google Sheets を `SheetsClient` として扱う実装
///
/// 接続は 1 同期操作の間だけ生きる。トークンも接続時に 1 度だけ取得する。
#[derive(Debug)]
pub struct GoogleSheetsClient {
    http: reqwest::Client,
    token: String,
    spreadsheet_id: String,
    sheet_name: String,
}

impl GoogleSheetsClient {
    /// トークンを取得し、対象シートの存在を確認して接続する
    ///
    /// # Errors
    /// - トークン交換の失敗（認証エラー）
    /// - スプレッドシートのメタデータ取得失敗
    /// - 指定名のシートが存在しない
    pub async fn connect(
        credentials: &ServiceAccountCredentials,
        sheet_name: &str,
    ) -> Result<Self, SheetError> {
        let http = reqwest::Client::new();
        let token = exchange_token(&http, credentials).await?;
        let client = Self {
            http,
            token,
            spreadsheet_id: credentials.table_key.clone(),
            sheet_name: sheet_name.to_string(),
        };
        client.ensure_sheet_exists().await?;
        Ok(client)
    }

    /// メタデータを読み、対象シートがあるか確かめる
    async fn ensure_sheet_exists(&self) -> Result<(), SheetError> {
        let url = format!(
            "{API_BASE}/{}?fields=sheets.properties.title",
            self.spreadsheet_id
        );
        let meta: SpreadsheetMeta = self.request(self.http.get(url)).await?;

        if meta.sheets.iter().any(|sheet| sheet.properties.title == self.sheet_name) {
            Ok(())
        } else {
            Err(SheetError::SheetNotFound(self.sheet_name.clone()))
        }
    }

    /// 認可ヘッダーを付けて送信し、JSON レスポンスを取り出す
    async fn request<T: serde::de::DeserializeOwned>(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> Result<T, SheetError> {
        let response = builder.bearer_auth(&self.token).send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SheetError::Api { status: status.as_u16(), message });
        }
        Ok(response.json().await?)
    }

    /// `localization!A1:ZZ` 形式の範囲指定を組み立てる
    fn range(&self, a1: &str) -> String {
        format!("{}!{a1}", self.sheet_name)
    }
}

#[async_trait]
impl SheetsClient for GoogleSheetsClient {
    async fn clear(&self) -> Result<(), SheetError> {
        let url = format!(
            "{API_BASE}/{}/values/{}:clear",
            self.spreadsheet_id,
            self.range(SHEET_RANGE)
        );
        let _: serde_json::Value = self.request(self.http.post(url)).await?;
        tracing::debug!(sheet = %self.sheet_name, "Cleared sheet");
        Ok(())
    }

    async fn write_header(&self, header: &[String], hint: &[String]) -> Result<(), SheetError> {
        let url = format!(
            "{API_BASE}/{}/values/{}?valueInputOption=USER_ENTERED",
            self.spreadsheet_id,
            self.range("A1")
        );
        let body = serde_json::json!({ "values": [header, hint] });
        let _: serde_json::Value = self.request(self.http.put(url).json(&body)).await?;
        Ok(())
    }

    async fn append_rows(&self, rows: &[Vec<String>]) -> Result<(), SheetError> {
        if rows.is_empty() {
            return Ok(());
        }
        let url = format!(
            "{API_BASE}/{}/values/{}:append?valueInputOption=USER_ENTERED",
            self.spreadsheet_id,
            self.range("A1")
        );
        let body = serde_json::json!({ "values": rows });
        let _: serde_json::Value = self.request(self.http.post(url).json(&body)).await?;
        tracing::debug!(count = rows.len(), "Appended rows");
        Ok(())
    }

    async fn read_all(&self) -> Result<Vec<Vec<String>>, SheetError> {
        let url = format!(
            "{API_BASE}/{}/values/{}",
            self.spreadsheet_id,
            self.range(SHEET_RANGE)
        );
        let range: ValueRange = self.request(self.http.get(url)).await?;
        Ok(range.values)
    }
}

/// サービスアカウントの JWT を署名し、アクセストークンへ交換する
async fn exchange_token(
    http: &reqwest::Client,
    credentials: &ServiceAccountCredentials,
) -> Result<String, SheetError> {
    let now = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map_err(|e| SheetError::Auth(format!("System clock before Unix epoch: {e}")))?
        .as_secs();

    let claims = Claims {
        iss: &credentials.client_email,
        scope: SHEETS_SCOPE,
        aud: TOKEN_URL,
        iat: now,
        exp: now + 3600,
    };
    let key = EncodingKey::from_rsa_pem(credentials.private_key.as_bytes())?;
    let assertion = jsonwebtoken::encode(&Header::new(Algorithm::RS256), &claims, &key)?;

    let params = [
        ("grant_type", "urn:ietf:params:oauth:grant-type:jwt-bearer"),
        ("assertion", assertion.as_str()),
    ];
    let response = http.post(TOKEN_URL).form(&params).send().await?;
    let status = response.status();
    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        return Err(SheetError::Auth(format!("Token exchange failed ({status}): {message}")));
    }

    let token: TokenResponse = response.json().await?;
    Ok(token.access_token)
}
