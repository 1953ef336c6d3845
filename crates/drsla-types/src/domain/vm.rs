use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// VM membership row of a protection group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProtectedVm {
    pub id: Uuid,
    pub vm_name: String,

    /// DR shadow VM has been provisioned on the partner site.
    #[serde(default)]
    pub dr_shell_vm_created: bool,

    #[serde(default)]
    pub failover_ready: bool,

    #[serde(default)]
    pub replication_status: Option<String>,
}

impl ProtectedVm {
    pub fn new(id: Uuid, vm_name: impl Into<String>) -> Self {
        Self {
            id,
            vm_name: vm_name.into(),
            dr_shell_vm_created: false,
            failover_ready: false,
            replication_status: None,
        }
    }
}
