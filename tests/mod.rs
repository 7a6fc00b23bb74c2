//! Test suite for Routine Hub
//!
//! This module organizes all tests

pub mod common;
