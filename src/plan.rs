//! Kafka-compatible reassignment document.
//!
//! The field names and layout are a compatibility contract with downstream
//! reassignment tooling (`kafka-reassign-partitions.sh` style) and must not
//! change:
//!
//! ```json
//! {"version": 1, "partitions": [
//!   {"topic": "events", "partition": 0, "replicas": [1, 2]}
//! ]}
//! ```

use serde::{Deserialize, Serialize};

use crate::assignment::{AssignmentTable, BrokerId};

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReassignmentPlan {
    pub version: u32,
    pub partitions: Vec<PartitionReplicas>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PartitionReplicas {
    pub topic: String,
    pub partition: u32,
    pub replicas: Vec<BrokerId>,
}

impl ReassignmentPlan {
    /// Builds the document for `topic`, one entry per partition in
    /// partition-index order.
    pub fn from_table(topic: &str, table: &AssignmentTable) -> Self {
        let partitions = table
            .iter()
            .map(|(&partition, replicas)| PartitionReplicas {
                topic: topic.to_string(),
                partition,
                replicas: replicas.clone(),
            })
            .collect();
        Self {
            version: 1,
            partitions,
        }
    }

    /// Renders the document as JSON, 2-space indented when `pretty` is set.
    pub fn render(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}
