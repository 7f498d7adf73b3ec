//! Replica assignment engine.
//!
//! Maps an ordered broker list, a partition count and a replication factor to
//! a table of ordered replica lists, one per partition. The first broker in
//! each list is the preferred leader. Leadership rotates by one broker per
//! partition, and follower placement shifts by an extra step on every full
//! pass over the broker ring so the same broker pairs don't always co-locate
//! replicas.
//!
//! Only the starting leader offset is randomized; everything after that is
//! deterministic. [`assign`] draws the offset from an injected [`Rng`],
//! [`assign_from`] takes it directly so callers and tests can pin it.

use std::collections::{BTreeMap, HashSet};

use rand::Rng;
use tracing::debug;

use crate::error::AssignmentError;

/// Identifier of a broker node in the target cluster.
pub type BrokerId = u32;

/// Partition index to ordered replica list, iterable in partition order.
pub type AssignmentTable = BTreeMap<u32, Vec<BrokerId>>;

/// Computes an assignment table, drawing the starting leader offset uniformly
/// from `rng`. Fails fast if the inputs violate the engine preconditions.
pub fn assign<R: Rng>(
    brokers: &[BrokerId],
    partitions: u32,
    replicas: u32,
    rng: &mut R,
) -> Result<AssignmentTable, AssignmentError> {
    validate(brokers, partitions, replicas)?;
    let start = rng.gen_range(0..brokers.len());
    debug!(start, "chose starting leader offset");
    Ok(build_table(brokers, partitions, replicas, start))
}

/// Deterministic form of [`assign`]: identical inputs and `start` produce an
/// identical table. `start` is taken modulo the broker count.
pub fn assign_from(
    brokers: &[BrokerId],
    partitions: u32,
    replicas: u32,
    start: usize,
) -> Result<AssignmentTable, AssignmentError> {
    validate(brokers, partitions, replicas)?;
    Ok(build_table(brokers, partitions, replicas, start % brokers.len()))
}

/// Offset of follower `replica` (1-based) from its partition's leader slot.
///
/// The modulus runs over `broker_count - 1` so the leader's own slot is never
/// selected, and `round` rotates the follower choices on each full pass over
/// the broker ring. Requires `broker_count >= 2`.
pub fn replica_shift(broker_count: usize, round: usize, replica: usize) -> usize {
    1 + (round + replica - 1) % (broker_count - 1)
}

fn validate(
    brokers: &[BrokerId],
    partitions: u32,
    replicas: u32,
) -> Result<(), AssignmentError> {
    if brokers.is_empty() {
        return Err(AssignmentError::EmptyBrokerSet);
    }
    let mut seen = HashSet::with_capacity(brokers.len());
    for &id in brokers {
        if !seen.insert(id) {
            return Err(AssignmentError::DuplicateBroker(id));
        }
    }
    if partitions < 1 {
        return Err(AssignmentError::InvalidPartitionCount(partitions));
    }
    if replicas < 1 || replicas as usize > brokers.len() {
        return Err(AssignmentError::InvalidReplicationFactor {
            replicas,
            brokers: brokers.len(),
        });
    }
    Ok(())
}

fn build_table(
    brokers: &[BrokerId],
    partitions: u32,
    replicas: u32,
    start: usize,
) -> AssignmentTable {
    let broker_count = brokers.len();
    let mut table = AssignmentTable::new();
    let mut round = 0;
    for partition in 0..partitions {
        if partition > 0 && partition as usize % broker_count == 0 {
            round += 1;
        }
        let leader = (start + partition as usize) % broker_count;
        let mut replica_set = Vec::with_capacity(replicas as usize);
        replica_set.push(brokers[leader]);
        for replica in 1..replicas as usize {
            let shift = replica_shift(broker_count, round, replica);
            replica_set.push(brokers[(leader + shift) % broker_count]);
        }
        table.insert(partition, replica_set);
    }
    table
}
