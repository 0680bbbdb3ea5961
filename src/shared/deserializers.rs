use serde::{Deserialize, Deserializer};

// Form-driven clients send numbers as strings, so "3" is accepted alongside 3.
#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrString {
    Int(i32),
    Str(String),
}

pub fn deserialize_lenient_i32<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    match IntOrString::deserialize(deserializer)? {
        IntOrString::Int(value) => Ok(value),
        IntOrString::Str(value) => value.trim().parse::<i32>().map_err(|_| {
            serde::de::Error::custom(format!("Wrong value {value}, can not parse to integer"))
        }),
    }
}
