// SPDX-License-Identifier: MPL-2.0
//! `iced_toast` shows transient toast notifications in Iced applications.
//!
//! Toasts stack per screen corner, pause while hovered, and slide out when
//! their display time runs out or their close control is pressed. Every
//! notifier targeting the same corner shares that corner's stack.

#![doc(html_root_url = "https://docs.rs/iced_toast/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod notifications;
pub mod ui;
