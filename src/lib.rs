// SPDX-License-Identifier: MPL-2.0
//! `loclens` localizes the user-visible text of live GUI widget trees
//! at runtime.
//!
//! A [`localizer::Localizer`] maps source strings to translated
//! strings, optionally falling back to case- and accent-insensitive
//! matching; a missing translation always degrades to the source text.
//! The [`widget`] module walks a widget tree through small capability
//! traits, so any host toolkit can be localized without this crate
//! knowing its object model. [`catalog`] loads one table per locale
//! from TOML files and picks the active locale from an explicit
//! request, the user [`config`], or the OS locale.

#![doc(html_root_url = "https://docs.rs/loclens/1.1.0")]

pub mod catalog;
pub mod config;
pub mod error;
pub mod localizer;
pub mod widget;
