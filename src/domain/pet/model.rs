use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::pet::validation::parse_birth_date;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Specie {
    Dog,
    Cat,
    Bird,
    Rabbit,
    Rodent,
    Reptile,
    Other,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    Female,
}

/// Candidate record for `POST /v1/pets`, exactly as it came off the wire.
///
/// Required fields are still `Option`s here: a missing or `null` value must
/// reach the validator so it can be reported as a violation. `birth_date` is
/// kept as raw text for the same reason.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct CreatePetRequest {
    pub name: Option<String>,
    pub profile_photo: Option<String>,
    #[serde(default, deserialize_with = "nullable_list")]
    pub photos: Vec<String>,
    #[serde(default, deserialize_with = "nullable_list")]
    pub special_cares: Vec<String>,
    pub specie: Option<Specie>,
    pub gender: Option<Gender>,
    pub castrated: Option<bool>,
    pub birth_date: Option<String>,
    pub approximate_age: Option<f64>,
}

fn nullable_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// A pet profile that passed admission.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Pet {
    pub id: Uuid,
    pub name: String,
    pub profile_photo: String,
    pub photos: Vec<String>,
    pub special_cares: Vec<String>,
    pub specie: Specie,
    pub gender: Gender,
    pub castrated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approximate_age: Option<f64>,
}

impl Pet {
    /// Builds the admitted record from an accepted request.
    ///
    /// Returns `None` when a required field is missing, which only happens if
    /// the request never went through validation.
    pub fn from_request(request: CreatePetRequest) -> Option<Self> {
        let birth_date = match request.birth_date.as_deref() {
            Some(raw) => Some(parse_birth_date(raw)?),
            None => None,
        };

        Some(Pet {
            id: Uuid::new_v4(),
            name: request.name?.trim().to_string(),
            profile_photo: request.profile_photo?,
            photos: dedup(request.photos),
            special_cares: dedup(request.special_cares),
            specie: request.specie?,
            gender: request.gender?,
            castrated: request.castrated?,
            birth_date,
            approximate_age: request.approximate_age,
        })
    }
}

// photos and special cares are sets on the wire
fn dedup(items: Vec<String>) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(items.len());
    for item in items {
        if !unique.contains(&item) {
            unique.push(item);
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_full_request() {
        let request: CreatePetRequest = serde_json::from_value(json!({
            "name": "Rex",
            "profile_photo": "eA==",
            "photos": ["eA==", "eQ=="],
            "special_cares": ["insulin twice a day"],
            "specie": "DOG",
            "gender": "MALE",
            "castrated": true,
            "birth_date": "2015-01-01",
            "approximate_age": 9.5
        }))
        .unwrap();

        assert_eq!(request.name.as_deref(), Some("Rex"));
        assert_eq!(request.photos.len(), 2);
        assert_eq!(request.specie, Some(Specie::Dog));
        assert_eq!(request.gender, Some(Gender::Male));
        assert_eq!(request.castrated, Some(true));
        assert_eq!(request.birth_date.as_deref(), Some("2015-01-01"));
        assert_eq!(request.approximate_age, Some(9.5));
    }

    #[test]
    fn test_deserialize_nulls_and_missing_fields() {
        let request: CreatePetRequest = serde_json::from_value(json!({
            "name": null,
            "photos": null,
            "specie": null
        }))
        .unwrap();

        assert_eq!(request, CreatePetRequest::default());
    }

    #[test]
    fn test_deserialize_rejects_unknown_specie() {
        let result = serde_json::from_value::<CreatePetRequest>(json!({ "specie": "DRAGON" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_pet_from_request() {
        let request = CreatePetRequest {
            name: Some("  Mia ".to_string()),
            profile_photo: Some("eA==".to_string()),
            photos: vec!["eA==".to_string(), "eA==".to_string(), "eQ==".to_string()],
            special_cares: vec![],
            specie: Some(Specie::Cat),
            gender: Some(Gender::Female),
            castrated: Some(false),
            birth_date: Some("2020-02-29".to_string()),
            approximate_age: None,
        };

        let pet = Pet::from_request(request).unwrap();

        assert_eq!(pet.name, "Mia");
        assert_eq!(pet.photos, vec!["eA==".to_string(), "eQ==".to_string()]);
        assert_eq!(pet.birth_date, NaiveDate::from_ymd_opt(2020, 2, 29));
        assert_eq!(pet.approximate_age, None);
    }

    #[test]
    fn test_pet_from_incomplete_request() {
        assert!(Pet::from_request(CreatePetRequest::default()).is_none());
    }

    #[test]
    fn test_pet_serializes_without_absent_age_fields() {
        let pet = Pet {
            id: Uuid::nil(),
            name: "Rex".to_string(),
            profile_photo: "eA==".to_string(),
            photos: vec![],
            special_cares: vec![],
            specie: Specie::Dog,
            gender: Gender::Male,
            castrated: true,
            birth_date: None,
            approximate_age: Some(2.0),
        };

        let json = serde_json::to_value(&pet).unwrap();
        let obj = json.as_object().unwrap();

        assert!(!obj.contains_key("birth_date"));
        assert_eq!(json["specie"], "DOG");
        assert_eq!(json["approximate_age"], 2.0);
    }
}
