//! Test doubles for the transport and notifier capabilities

pub mod mocks;
