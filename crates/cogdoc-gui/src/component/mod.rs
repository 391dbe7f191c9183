//! Reusable widget helpers.

pub mod icon;
