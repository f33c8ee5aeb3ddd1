//! Small domain-wide type tags.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Entity kinds that can own attachments.
///
/// Attachments are linked to their owner through a typed (entity-type,
/// numeric id) reference rather than a free-form table-name string, so the
/// set of supported owners is closed and checked at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    SalesOrder,
}

impl EntityType {
    /// Stable string tag used in storage and URLs.
    pub const fn as_str(&self) -> &'static str {
        match self {
            EntityType::SalesOrder => "sales_order",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityType {
    type Err = UnknownEntityType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sales_order" => Ok(EntityType::SalesOrder),
            other => Err(UnknownEntityType(other.to_string())),
        }
    }
}

/// Error for unrecognized entity-type tags.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown entity type: {0}")]
pub struct UnknownEntityType(pub String);

/// Typed reference to the record an attachment belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityRef {
    pub entity_type: EntityType,
    pub id: i64,
}

impl EntityRef {
    pub fn sales_order(id: i64) -> Self {
        Self {
            entity_type: EntityType::SalesOrder,
            id,
        }
    }
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.entity_type, self.id)
    }
}

/// How an attachment entry came to exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttachmentKind {
    /// Uploaded by a client through the API.
    Uploaded,
    /// Produced by the system itself (reports, exports).
    Generated,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_type_round_trips_through_str() {
        let et: EntityType = "sales_order".parse().unwrap();
        assert_eq!(et, EntityType::SalesOrder);
        assert_eq!(et.as_str(), "sales_order");
    }

    #[test]
    fn unknown_entity_type_is_rejected() {
        assert!("invoice".parse::<EntityType>().is_err());
    }

    #[test]
    fn attachment_kind_serializes_lowercase() {
        let json = serde_json::to_string(&AttachmentKind::Uploaded).unwrap();
        assert_eq!(json, "\"uploaded\"");
    }
}
