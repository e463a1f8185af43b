use serde::{Deserialize, Serialize};

/// Action understood by the downstream identity-deletion API.
pub const DELETE_IDENTITY_ACTION: &str = "delete_identity";

/// One batch-delete request as the downstream API consumes it. Field names
/// in the emitted JSON are camelCase and fixed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkOrder {
    pub action: String,
    pub dataset_id: String,
    pub display_name: String,
    pub description: String,
    pub identities: Vec<IdentityRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityRef {
    pub namespace: String,
    pub identity: String,
}
