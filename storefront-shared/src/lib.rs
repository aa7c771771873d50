//! Request and response bodies exchanged with the Storefront auth API.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod models;
