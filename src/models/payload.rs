//! Untrusted extraction payload, as returned by the AI collaborator.
//!
//! Every field is optional and deserialized leniently: a field of the wrong
//! shape becomes `None` instead of failing the whole document. Validation
//! into canonical records happens in `core::reconcile`.

use serde::de::{DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtractionPayload {
    #[serde(deserialize_with = "lenient")]
    pub employee: Option<PayloadEmployee>,
    #[serde(deserialize_with = "lenient")]
    pub period: Option<PayloadPeriod>,
    #[serde(deserialize_with = "lenient_days")]
    pub days: Option<Vec<PayloadDay>>,
    #[serde(deserialize_with = "lenient")]
    pub validation: Option<PayloadValidation>,
    #[serde(deserialize_with = "lenient_strings")]
    pub warnings: Vec<String>,
    #[serde(deserialize_with = "lenient")]
    pub source: Option<PayloadSource>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PayloadEmployee {
    #[serde(deserialize_with = "lenient_text")]
    pub full_name: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub employee_id: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PayloadPeriod {
    #[serde(deserialize_with = "lenient_text")]
    pub week_start_date: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub week_end_date: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PayloadDay {
    #[serde(deserialize_with = "lenient_text")]
    pub date: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub day_of_week: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub work: Option<PayloadWork>,
    #[serde(deserialize_with = "lenient_text")]
    pub notes: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub confidence: Option<PayloadConfidence>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PayloadWork {
    #[serde(deserialize_with = "lenient_text")]
    pub start_time: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub end_time: Option<String>,
    #[serde(deserialize_with = "lenient_number")]
    pub total_hours: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub break_minutes: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub kilometers: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PayloadConfidence {
    #[serde(deserialize_with = "lenient_score")]
    pub overall: Option<f64>,
    #[serde(deserialize_with = "lenient_scores")]
    pub fields: BTreeMap<String, Option<f64>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PayloadValidation {
    #[serde(deserialize_with = "lenient_text")]
    pub supervisor: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub approver: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub client: Option<String>,
    pub custom: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PayloadSource {
    #[serde(deserialize_with = "lenient_text")]
    pub file_type: Option<String>,
    #[serde(deserialize_with = "lenient_number")]
    pub page_or_image_count: Option<f64>,
}

impl ExtractionPayload {
    /// Parse a JSON document. Anything that is not a JSON object yields
    /// `None`.
    pub fn from_json(raw: &str) -> Option<Self> {
        let value: Value = serde_json::from_str(raw).ok()?;
        if !value.is_object() {
            return None;
        }
        serde_json::from_value(value).ok()
    }

    /// Parse the raw text answered by a model. Markdown code fences and any
    /// prose before or after the first JSON object are ignored.
    pub fn parse_response(raw: &str) -> Option<Self> {
        let start = raw.find('{')?;
        let value = serde_json::Deserializer::from_str(&raw[start..])
            .into_iter::<Value>()
            .next()?
            .ok()?;
        if !value.is_object() {
            return None;
        }
        serde_json::from_value(value).ok()
    }

    /// The days list when it is present and non-empty.
    pub fn usable_days(&self) -> Option<&[PayloadDay]> {
        self.days.as_deref().filter(|d| !d.is_empty())
    }
}

/// Parse a free-text number such as `"7.5"`, `"7,5"`, `"8h"` or `"15 km"`.
/// Returns `None` for text without a leading non-negative number.
pub fn parse_number_text(text: &str) -> Option<f64> {
    let t = text.trim().replace(',', ".");
    let numeric: String = t
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    numeric.parse::<f64>().ok().filter(|n| n.is_finite())
}

fn number_from_value(v: &Value) -> Option<f64> {
    let n = match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_number_text(s),
        _ => None,
    }?;
    (n.is_finite() && n >= 0.0).then_some(n)
}

fn score_from_value(v: &Value) -> Option<f64> {
    number_from_value(v).filter(|s| *s <= 1.0)
}

fn lenient<'de, D, T>(d: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let v = Value::deserialize(d)?;
    if v.is_null() {
        return Ok(None);
    }
    Ok(serde_json::from_value(v).ok())
}

fn lenient_text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    let text = match Value::deserialize(d)? {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    };
    Ok(text.filter(|s| !s.is_empty()))
}

fn lenient_number<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
    Ok(number_from_value(&Value::deserialize(d)?))
}

fn lenient_score<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
    Ok(score_from_value(&Value::deserialize(d)?))
}

fn lenient_scores<'de, D: Deserializer<'de>>(
    d: D,
) -> Result<BTreeMap<String, Option<f64>>, D::Error> {
    let scores = match Value::deserialize(d)? {
        Value::Object(map) => map
            .iter()
            .map(|(k, v)| (k.clone(), score_from_value(v)))
            .collect(),
        _ => BTreeMap::new(),
    };
    Ok(scores)
}

fn lenient_strings<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<String>, D::Error> {
    let list = match Value::deserialize(d)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|v| match v {
                Value::String(s) if !s.trim().is_empty() => Some(s),
                _ => None,
            })
            .collect(),
        Value::String(s) if !s.trim().is_empty() => vec![s],
        _ => Vec::new(),
    };
    Ok(list)
}

/// Non-array `days` becomes `None`; array items that are not objects are
/// skipped.
fn lenient_days<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Vec<PayloadDay>>, D::Error> {
    let days = match Value::deserialize(d)? {
        Value::Array(items) => Some(
            items
                .into_iter()
                .filter(Value::is_object)
                .filter_map(|v| serde_json::from_value(v).ok())
                .collect(),
        ),
        _ => None,
    };
    Ok(days)
}
