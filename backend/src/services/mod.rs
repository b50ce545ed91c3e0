//! Module for core business logic services.
//!
//! This module encapsulates the operations behind the class and point
//! endpoints: the ownership chain every scoped request goes through, class
//! and student management, the point ledger, and the aggregation of ledger
//! rows into totals and rankings.

pub mod classroom;
pub mod data_aggregator;
pub mod ledger;
pub mod ownership;
