// Helper functions for safe logging and serialization

use serde::{Serialize, Serializer};

/// Masks email addresses for safe logging
/// Prevents sensitive data exposure while preserving debugging utility
///
/// # Example
/// ```
/// let masked = safe_email_log("user@example.com");
/// // Returns: "u***@example.com"
/// ```
pub fn safe_email_log(email: &str) -> String {
    if email.len() > 3 {
        let parts: Vec<&str> = email.split('@').collect();
        if parts.len() == 2 {
            format!("{}***@{}", &parts[0][..1.min(parts[0].len())], parts[1])
        } else {
            "***@***.***".to_string()
        }
    } else {
        "***@***.***".to_string()
    }
}

/// Serializes product sizes from JSON string to array for API responses
pub fn serialize_sizes<S>(sizes: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match sizes {
        Some(sizes_json) => {
            let sizes_vec: Vec<String> =
                serde_json::from_str(sizes_json).unwrap_or_else(|_| Vec::new());
            sizes_vec.serialize(serializer)
        }
        None => Vec::<String>::new().serialize(serializer),
    }
}

/// Serializes an INTEGER flag column as a JSON boolean
pub fn serialize_int_to_bool<S>(value: &i64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_bool(*value != 0)
}
