use serde::{Deserialize, Deserializer, Serialize};

/// A company the business works with or employs workers under
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: u64,
    pub name: String,
}

/// A worker as listed by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Worker {
    pub id: u64,
    pub full_name: String,
    /// Digits only, `998XXXXXXXXX`
    #[serde(default)]
    pub phone: String,
    /// Monthly salary; the API sends decimals as strings
    #[serde(deserialize_with = "deserialize_amount")]
    pub salary: f64,
    /// Canonical `yyyy-mm-dd`
    #[serde(default)]
    pub hire_date: Option<String>,
    #[serde(default)]
    pub company: Option<u64>,
}

/// Payload for creating a worker
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NewWorker {
    pub full_name: String,
    pub phone: String,
    /// Separator-free decimal string
    pub salary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hire_date: Option<String>,
    pub company: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(alias = "token", alias = "access_token")]
    pub access: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Number(f64),
    Text(String),
}

/// Accept an amount sent either as a JSON number or as a decimal string
fn deserialize_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match RawAmount::deserialize(deserializer)? {
        RawAmount::Number(n) => Ok(n),
        RawAmount::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|e| serde::de::Error::custom(format!("invalid amount {:?}: {}", s, e))),
    }
}
