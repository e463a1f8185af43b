pub mod batch;
pub mod work_order;
pub mod writer;

pub use batch::Batches;
pub use work_order::{IdentityRef, WorkOrder, DELETE_IDENTITY_ACTION};
pub use writer::{WorkOrderWriter, MAX_IDENTITIES_PER_FILE};
