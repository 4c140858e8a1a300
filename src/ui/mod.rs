//! UI module - contains UI rendering components
//!
//! Components here are stateless painters; the converter screen in
//! `app::views` decides what they show.

pub mod components;
