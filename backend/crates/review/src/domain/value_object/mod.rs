//! Value Object Module

pub mod rating;

pub use rating::Rating;
