use thiserror::Error;

use crate::assignment::BrokerId;

/// Precondition failures raised by the assignment engine. These propagate to
/// the CLI boundary unmodified, no silent correction.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AssignmentError {
    #[error("broker list is empty")]
    EmptyBrokerSet,

    #[error("broker id {0} appears more than once in the broker list")]
    DuplicateBroker(BrokerId),

    #[error("partition count must be at least 1, got {0}")]
    InvalidPartitionCount(u32),

    #[error("replication factor {replicas} is not satisfiable with {brokers} broker(s)")]
    InvalidReplicationFactor { replicas: u32, brokers: usize },
}
