use column_codec::{CodecError, decode_list, decode_map, encode_list, encode_map};
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;
use std::collections::BTreeMap;

use crate::error::{CompanyError, CompanyResult};
use crate::models::{Company, CreateCompany};

/// Width of the `work` column
pub const WORK_CAPACITY: usize = 1000;
/// Width of the `socials` column
pub const SOCIALS_CAPACITY: usize = 1000;

/// Row of the `companies` table. `work` and `socials` hold encoded collections.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "companies")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub reference_id: Option<String>,
    pub name: String,
    pub contact_person: Option<String>,
    pub work: String,
    pub status: Option<String>,
    pub socials: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub drive_link: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
    pub last_updated_by: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// OpenAPI tag shared by every company route
    pub const TAG: &'static str = "companies";
}

fn encode_work(work: &[String]) -> CompanyResult<String> {
    encode_list(work, WORK_CAPACITY).map_err(|e| codec_error("work", e))
}

fn encode_socials(socials: &BTreeMap<String, String>) -> CompanyResult<String> {
    encode_map(socials, SOCIALS_CAPACITY).map_err(|e| codec_error("socials", e))
}

fn codec_error(field: &'static str, err: CodecError) -> CompanyError {
    match err {
        CodecError::CapacityExceeded { length, capacity } => CompanyError::CapacityExceeded {
            field,
            length,
            capacity,
        },
        CodecError::ReservedDelimiter => CompanyError::Validation(format!(
            "Field '{}' contains a reserved control character",
            field
        )),
        CodecError::MalformedPair(pair) => {
            CompanyError::Internal(format!("Stored '{}' is corrupt: {}", field, pair))
        }
    }
}

impl TryFrom<Model> for Company {
    type Error = CompanyError;

    fn try_from(model: Model) -> CompanyResult<Self> {
        let socials = decode_map(&model.socials).map_err(|e| codec_error("socials", e))?;

        Ok(Self {
            id: model.id,
            reference_id: model.reference_id,
            name: model.name,
            contact_person: model.contact_person,
            work: decode_list(&model.work),
            status: model.status,
            socials,
            drive_link: model.drive_link,
            created_at: model.created_at,
            updated_at: model.updated_at,
            last_updated_by: model.last_updated_by,
        })
    }
}

impl Company {
    /// Encode back into a row, failing if a collection does not fit its column
    pub fn into_model(self) -> CompanyResult<Model> {
        Ok(Model {
            work: encode_work(&self.work)?,
            socials: encode_socials(&self.socials)?,
            id: self.id,
            reference_id: self.reference_id,
            name: self.name,
            contact_person: self.contact_person,
            status: self.status,
            drive_link: self.drive_link,
            created_at: self.created_at,
            updated_at: self.updated_at,
            last_updated_by: self.last_updated_by,
        })
    }
}

impl CreateCompany {
    /// Insertable row stamped with `now`; the id is left to the store.
    pub fn into_active_model(self, now: DateTime) -> CompanyResult<ActiveModel> {
        Ok(ActiveModel {
            id: NotSet,
            work: Set(encode_work(&self.work)?),
            socials: Set(encode_socials(&self.socials)?),
            reference_id: Set(self.reference_id),
            name: Set(self.name),
            contact_person: Set(self.contact_person),
            status: Set(self.status),
            drive_link: Set(self.drive_link),
            created_at: Set(now),
            updated_at: Set(now),
            last_updated_by: Set(self.last_updated_by),
        })
    }
}
