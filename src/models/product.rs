use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Product identifier; the API sends strings, older fixtures send numbers
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Debug)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl<'de> Deserialize<'de> for ProductId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Integer(i64),
            Float(f64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(text) => ProductId(text),
            RawId::Integer(n) => ProductId(n.to_string()),
            RawId::Float(n) => ProductId(n.to_string()),
        })
    }
}

/// Product snapshot as returned by the admin product list
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Product {
    pub id: ProductId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub origin_price: f64,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, deserialize_with = "deserialize_truthy")]
    pub is_enabled: bool,
    #[serde(rename = "imageUrl", default)]
    pub image_url: String,
    #[serde(rename = "imagesUrl", default, deserialize_with = "deserialize_image_list")]
    pub images_url: Vec<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ProductsResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub products: Vec<Product>,
}

/// `is_enabled` arrives as `0/1`, a boolean, or occasionally a string
fn deserialize_truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Bool(b) => b,
        serde_json::Value::Number(n) => n.as_f64().is_some_and(|n| n > 0.0),
        serde_json::Value::String(s) => !s.is_empty() && s != "0" && s != "false",
        _ => false,
    })
}

/// `imagesUrl` may contain `null` holes; they become empty strings so indices stay stable
fn deserialize_image_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Vec<Option<String>>> = Option::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_admin_product_payload() {
        let json = r#"{
            "id": "-L9tH8jxVb2Ka_DYPwng",
            "title": "草莓莓果夾心圈",
            "category": "甜甜圈",
            "origin_price": 150,
            "price": 99,
            "unit": "個",
            "description": "Sit down please",
            "content": "This is content",
            "is_enabled": 1,
            "imageUrl": "https://example.com/main.png",
            "imagesUrl": ["https://example.com/1.png", ""]
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId::from("-L9tH8jxVb2Ka_DYPwng"));
        assert_eq!(product.origin_price, 150.0);
        assert_eq!(product.price, 99.0);
        assert!(product.is_enabled);
        assert_eq!(product.images_url.len(), 2);
    }

    #[test]
    fn numeric_id_is_normalised_to_text() {
        let product: Product = serde_json::from_str(r#"{"id": 1, "title": "T"}"#).unwrap();
        assert_eq!(product.id.to_string(), "1");
        assert!(!product.is_enabled);
        assert!(product.images_url.is_empty());
    }

    #[test]
    fn is_enabled_follows_truthiness() {
        let cases = [("0", false), ("1", true), ("true", true), ("false", false), ("null", false), ("\"1\"", true)];
        for (raw, expected) in cases {
            let json = format!(r#"{{"id": "p", "is_enabled": {}}}"#, raw);
            let product: Product = serde_json::from_str(&json).unwrap();
            assert_eq!(product.is_enabled, expected, "is_enabled = {}", raw);
        }
    }

    #[test]
    fn null_image_entries_keep_their_slot() {
        let product: Product =
            serde_json::from_str(r#"{"id": "p", "imagesUrl": ["a.png", null, "b.png"]}"#).unwrap();
        assert_eq!(product.images_url, vec!["a.png", "", "b.png"]);
    }

    #[test]
    fn products_response_preserves_order() {
        let response: ProductsResponse = serde_json::from_str(
            r#"{"success": true, "products": [{"id": "b"}, {"id": "a"}, {"id": "c"}], "pagination": {}}"#,
        )
        .unwrap();
        let ids: Vec<String> = response.products.iter().map(|p| p.id.to_string()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }
}
