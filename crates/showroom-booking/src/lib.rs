// SPDX-FileCopyrightText: 2026 Showroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test-drive scheduling for the Showroom assistant.
//!
//! [`AppointmentBook`] implements the booking service over business-hours
//! slot generation, closed-interval occupancy filtering, and an in-memory
//! appointment map, optionally mirrored to an external [`CalendarBackend`].
//!
//! [`CalendarBackend`]: showroom_core::CalendarBackend

pub mod dates;
pub mod service;
pub mod slots;

pub use service::AppointmentBook;
