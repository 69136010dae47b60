//! Weather comparison server.
//!
//! A small web service over the Visual Crossing Timeline API that answers
//! two questions about a pair of cities: which has the longer day, and
//! where is it raining right now.

pub mod compare;
pub mod config;
pub mod domain;
pub mod visualcrossing;
pub mod web;
