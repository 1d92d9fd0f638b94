//! Member model and request payloads

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Member record, owned by a single user
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: i32,
    /// Identity of the owning user; immutable after creation
    pub user_id: i32,
    pub name: String,
    pub gender: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
}

/// Create member payload; name is store-required
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMember {
    pub name: Option<String>,
    pub gender: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
}

/// Partial update payload for a member
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMember {
    pub name: Option<String>,
    pub gender: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
}

impl Member {
    /// Merge a partial update; empty strings and absent fields keep the
    /// stored value.
    pub fn apply_update(&mut self, update: UpdateMember) {
        if let Some(name) = update.name.filter(|v| !v.is_empty()) {
            self.name = name;
        }
        if let Some(gender) = update.gender.filter(|v| !v.is_empty()) {
            self.gender = Some(gender);
        }
        if let Some(date_of_birth) = update.date_of_birth {
            self.date_of_birth = Some(date_of_birth);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_merges_truthy_fields_only() {
        let mut member = Member {
            id: 1,
            user_id: 3,
            name: "Ada".to_string(),
            gender: Some("F".to_string()),
            date_of_birth: None,
        };
        member.apply_update(UpdateMember {
            name: Some(String::new()),
            date_of_birth: NaiveDate::from_ymd_opt(1815, 12, 10),
            ..Default::default()
        });
        assert_eq!(member.name, "Ada");
        assert_eq!(member.gender.as_deref(), Some("F"));
        assert_eq!(
            member.date_of_birth,
            NaiveDate::from_ymd_opt(1815, 12, 10)
        );
    }
}
