//! # Lab 25: Transaction Pool
//!
//! Student-facing API for a mempool with prioritization and stats.

use std::cmp::Ordering;

#[derive(Debug, Clone)]
pub struct Transaction {
    pub id: String,
    pub from: String,
    pub to: String,
    pub amount: u64,
    pub fee: u64,
    pub timestamp: u64,
    pub nonce: u64,
}

impl Transaction {
    pub fn new(id: &str, from: &str, to: &str, amount: u64, fee: u64, nonce: u64, timestamp: u64) -> Self {
        let _ = (id, from, to, amount, fee, nonce, timestamp);
        todo!("Create Transaction")
    }

    pub fn is_valid(&self) -> bool {
        todo!("Validate transaction")
    }
}

#[derive(Clone, Debug)]
pub struct PriorityTransaction(pub Transaction);

impl Eq for PriorityTransaction {}

impl PartialEq for PriorityTransaction {
    fn eq(&self, _other: &Self) -> bool {
        todo!("Compare PriorityTransaction equality")
    }
}

impl Ord for PriorityTransaction {
    fn cmp(&self, _other: &Self) -> Ordering {
        todo!("Order PriorityTransaction by fee/timestamp")
    }
}

impl PartialOrd for PriorityTransaction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolStats {
    pub total_transactions: usize,
    pub total_fees: u64,
    pub avg_fee: u64,
    pub min_fee: u64,
    pub max_fee: u64,
    pub capacity_used: usize,
    pub capacity_max: usize,
    pub rejected_count: u64,
}

pub struct TransactionPool;

impl TransactionPool {
    pub fn new(max_size: usize) -> Self {
        let _ = max_size;
        todo!("Create TransactionPool")
    }

    pub fn add_transaction(&mut self, tx: Transaction) -> Result<(), String> {
        let _ = tx;
        todo!("Add transaction to pool")
    }

    pub fn remove_transaction(&mut self, tx_id: &str) -> Option<Transaction> {
        let _ = tx_id;
        todo!("Remove transaction from pool")
    }

    pub fn get_top_transactions(&self, n: usize) -> Vec<Transaction> {
        let _ = n;
        todo!("Get top fee transactions")
    }

    pub fn stats(&self) -> PoolStats {
        todo!("Return pool statistics")
    }

    pub fn clear(&mut self) {
        todo!("Clear transaction pool")
    }

    pub fn len(&self) -> usize {
        todo!("Get pool size")
    }

    pub fn is_empty(&self) -> bool {
        todo!("Check if pool is empty")
    }

    pub fn contains(&self, tx_id: &str) -> bool {
        let _ = tx_id;
        todo!("Check transaction existence")
    }

    pub fn get(&self, tx_id: &str) -> Option<&Transaction> {
        let _ = tx_id;
        todo!("Get transaction by id")
    }
}

#[doc(hidden)]
pub mod solution;
