use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;
use validator::Validate;

/// Company with its embedded collections decoded
#[derive(Debug, Clone, PartialEq)]
pub struct Company {
    pub id: i64,
    pub reference_id: Option<String>,
    pub name: String,
    pub contact_person: Option<String>,
    pub work: Vec<String>,
    pub status: Option<String>,
    pub socials: BTreeMap<String, String>,
    pub drive_link: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub last_updated_by: Option<String>,
}

impl Company {
    /// Overwrite every field the update supplies and keep the rest.
    ///
    /// Timestamps are left alone; the repository stamps `updated_at`.
    pub fn apply_update(&mut self, update: UpdateCompany) {
        if let Some(reference_id) = update.reference_id {
            self.reference_id = reference_id;
        }
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(contact_person) = update.contact_person {
            self.contact_person = contact_person;
        }
        if let Some(work) = update.work {
            self.work = work;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(socials) = update.socials {
            self.socials = socials;
        }
        if let Some(drive_link) = update.drive_link {
            self.drive_link = drive_link;
        }
        if let Some(last_updated_by) = update.last_updated_by {
            self.last_updated_by = last_updated_by;
        }
    }
}

/// Company as exchanged over HTTP
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompanyDto {
    pub id: i64,
    pub reference_id: Option<String>,
    pub name: String,
    pub contact_person: Option<String>,
    pub work: Vec<String>,
    pub status: Option<String>,
    #[serde(with = "wire_format::timestamp")]
    #[schema(value_type = String, example = "2024-03-01T09:30:00Z")]
    pub created_at: NaiveDateTime,
    #[serde(with = "wire_format::timestamp")]
    #[schema(value_type = String, example = "2024-03-01T09:30:00Z")]
    pub updated_at: NaiveDateTime,
    pub last_updated_by: Option<String>,
    pub socials: BTreeMap<String, String>,
    pub drive_link: Option<String>,
}

impl From<Company> for CompanyDto {
    fn from(company: Company) -> Self {
        Self {
            id: company.id,
            reference_id: company.reference_id,
            name: company.name,
            contact_person: company.contact_person,
            work: company.work,
            status: company.status,
            created_at: company.created_at,
            updated_at: company.updated_at,
            last_updated_by: company.last_updated_by,
            socials: company.socials,
            drive_link: company.drive_link,
        }
    }
}

/// DTO for creating a company. Server-owned fields are not accepted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCompany {
    #[validate(length(min = 1, max = 50))]
    pub reference_id: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(length(max = 255))]
    pub contact_person: Option<String>,
    #[serde(default)]
    pub work: Vec<String>,
    #[validate(length(max = 50))]
    pub status: Option<String>,
    #[serde(default)]
    pub socials: BTreeMap<String, String>,
    pub drive_link: Option<String>,
    #[validate(length(max = 255))]
    pub last_updated_by: Option<String>,
}

/// DTO for a partial update.
///
/// Optional columns distinguish an omitted field (keep) from `null` (clear).
/// For `name`, `work` and `socials` a `null` counts as omitted.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCompany {
    #[serde(default, deserialize_with = "wire_format::nullable::deserialize")]
    #[schema(value_type = Option<String>)]
    #[validate(length(min = 1, max = 50))]
    pub reference_id: Option<Option<String>>,
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "wire_format::nullable::deserialize")]
    #[schema(value_type = Option<String>)]
    #[validate(length(max = 255))]
    pub contact_person: Option<Option<String>>,
    pub work: Option<Vec<String>>,
    #[serde(default, deserialize_with = "wire_format::nullable::deserialize")]
    #[schema(value_type = Option<String>)]
    #[validate(length(max = 50))]
    pub status: Option<Option<String>>,
    pub socials: Option<BTreeMap<String, String>>,
    #[serde(default, deserialize_with = "wire_format::nullable::deserialize")]
    #[schema(value_type = Option<String>)]
    pub drive_link: Option<Option<String>>,
    #[serde(default, deserialize_with = "wire_format::nullable::deserialize")]
    #[schema(value_type = Option<String>)]
    #[validate(length(max = 255))]
    pub last_updated_by: Option<Option<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn acme() -> Company {
        let t0 = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        Company {
            id: 1,
            reference_id: Some("ACME-1".to_string()),
            name: "Acme".to_string(),
            contact_person: Some("Wile E.".to_string()),
            work: vec!["web".to_string(), "design".to_string()],
            status: None,
            socials: BTreeMap::from([("x".to_string(), "acme".to_string())]),
            drive_link: None,
            created_at: t0,
            updated_at: t0,
            last_updated_by: None,
        }
    }

    #[test]
    fn test_apply_update_touches_only_supplied_fields() {
        let mut company = acme();
        let before = company.clone();

        company.apply_update(UpdateCompany {
            status: Some(Some("active".to_string())),
            ..Default::default()
        });

        assert_eq!(company.status.as_deref(), Some("active"));
        assert_eq!(
            Company {
                status: before.status.clone(),
                ..company.clone()
            },
            before
        );
    }

    #[test]
    fn test_apply_update_null_clears_optional_field() {
        let mut company = acme();
        let update: UpdateCompany =
            serde_json::from_str(r#"{"contactPerson": null, "referenceId": "ACME-2"}"#).unwrap();

        company.apply_update(update);

        assert_eq!(company.contact_person, None);
        assert_eq!(company.reference_id.as_deref(), Some("ACME-2"));
        assert_eq!(company.name, "Acme");
    }

    #[test]
    fn test_null_name_and_work_are_ignored() {
        let mut company = acme();
        let update: UpdateCompany =
            serde_json::from_str(r#"{"name": null, "work": null, "socials": null}"#).unwrap();

        company.apply_update(update);

        assert_eq!(company, acme());
    }

    #[test]
    fn test_dto_uses_camel_case_and_wire_timestamps() {
        let json = serde_json::to_value(CompanyDto::from(acme())).unwrap();

        assert_eq!(json["referenceId"], "ACME-1");
        assert_eq!(json["createdAt"], "2024-03-01T09:30:00Z");
        assert_eq!(json["work"], serde_json::json!(["web", "design"]));
        assert_eq!(json["socials"]["x"], "acme");
        assert!(json["driveLink"].is_null());
    }

    #[test]
    fn test_create_ignores_server_owned_fields() {
        let input: CreateCompany = serde_json::from_str(
            r#"{"name": "Acme", "id": 99, "createdAt": "2020-01-01T00:00:00Z"}"#,
        )
        .unwrap();

        assert_eq!(input.name, "Acme");
        assert!(input.work.is_empty());
        assert!(input.socials.is_empty());
    }

    #[test]
    fn test_create_validation() {
        let empty_name = CreateCompany {
            name: String::new(),
            ..Default::default()
        };
        assert!(empty_name.validate().is_err());

        let long_reference = CreateCompany {
            name: "Acme".to_string(),
            reference_id: Some("R".repeat(51)),
            ..Default::default()
        };
        assert!(long_reference.validate().is_err());
    }

    #[test]
    fn test_update_validation_checks_present_values() {
        let blank_name = UpdateCompany {
            name: Some(String::new()),
            ..Default::default()
        };
        assert!(blank_name.validate().is_err());

        let long_status = UpdateCompany {
            status: Some(Some("s".repeat(51))),
            ..Default::default()
        };
        assert!(long_status.validate().is_err());

        let cleared = UpdateCompany {
            status: Some(None),
            ..Default::default()
        };
        assert!(cleared.validate().is_ok());
    }
}
