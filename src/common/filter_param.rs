// src/common/filter_param.rs

//! Parâmetros de filtro vindos da query string.
//!
//! A interface manda `"all"` quando um filtro não está ativo. Aqui esse
//! sentinela (e o valor vazio) vira `None`, e qualquer outro valor precisa ser
//! uma variante válida do enum.

use serde::{
    de::{value::StrDeserializer, DeserializeOwned, Error, IntoDeserializer},
    Deserialize, Deserializer,
};

pub const ALL: &str = "all";

pub fn enum_filter<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") | Some(ALL) => Ok(None),
        Some(value) => {
            let de: StrDeserializer<'_, D::Error> = value.into_deserializer();
            T::deserialize(de).map(Some)
        }
    }
}

pub fn availability_filter<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") | Some(ALL) => Ok(None),
        Some("true") | Some("available") => Ok(Some(true)),
        Some("false") | Some("unavailable") => Ok(Some(false)),
        Some(other) => Err(D::Error::custom(format!(
            "valor de disponibilidade inválido: '{}'",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::booking::BookingStatus;
    use crate::models::room::RoomType;

    #[derive(Debug, Deserialize)]
    struct Params {
        #[serde(default, deserialize_with = "enum_filter")]
        status: Option<BookingStatus>,
        #[serde(default, rename = "type", deserialize_with = "enum_filter")]
        room_type: Option<RoomType>,
        #[serde(default, deserialize_with = "availability_filter")]
        available: Option<bool>,
    }

    fn parse(json: serde_json::Value) -> Result<Params, serde_json::Error> {
        serde_json::from_value(json)
    }

    #[test]
    fn all_sentinel_and_blank_mean_no_constraint() {
        let p = parse(serde_json::json!({ "status": "all", "type": "", "available": "all" })).unwrap();
        assert_eq!(p.status, None);
        assert_eq!(p.room_type, None);
        assert_eq!(p.available, None);

        let p = parse(serde_json::json!({})).unwrap();
        assert_eq!(p.status, None);
    }

    #[test]
    fn wire_values_parse_into_enums() {
        let p = parse(serde_json::json!({ "status": "checked-in", "type": "suite", "available": "false" })).unwrap();
        assert_eq!(p.status, Some(BookingStatus::CheckedIn));
        assert_eq!(p.room_type, Some(RoomType::Suite));
        assert_eq!(p.available, Some(false));
    }

    #[test]
    fn unknown_values_are_rejected() {
        assert!(parse(serde_json::json!({ "status": "archived" })).is_err());
        assert!(parse(serde_json::json!({ "available": "maybe" })).is_err());
    }
}
