// SPDX-FileCopyrightText: 2026 Showroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Booking service trait and the calendar backend it may consult.

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};

use crate::error::ShowroomError;
use crate::types::{Appointment, CarModel, CustomerInfo};

/// Creation, cancellation, and rescheduling of test-drive appointments.
///
/// Booking failures must surface as errors: a failed booking is never
/// reported as success. Cancel and reschedule fail with
/// [`ShowroomError::NotFound`] for unknown appointment ids.
#[async_trait]
pub trait BookingService: Send + Sync {
    /// Open slots for the given date, dealership-local, as slot start times.
    async fn check_availability(
        &self,
        date: NaiveDate,
        car: &CarModel,
    ) -> Result<Vec<NaiveDateTime>, ShowroomError>;

    /// Books a confirmed appointment and returns the created record.
    async fn book(
        &self,
        customer: CustomerInfo,
        car: &CarModel,
        date_time: NaiveDateTime,
    ) -> Result<Appointment, ShowroomError>;

    /// Cancels an appointment, returning its updated record.
    async fn cancel(&self, appointment_id: &str) -> Result<Appointment, ShowroomError>;

    /// Moves an appointment to a new slot, returning its updated record.
    async fn reschedule(
        &self,
        appointment_id: &str,
        new_date_time: NaiveDateTime,
    ) -> Result<Appointment, ShowroomError>;

    /// Confirmed appointments for a customer phone number.
    async fn appointments_for_phone(
        &self,
        phone: &str,
    ) -> Result<Vec<Appointment>, ShowroomError>;
}

/// A half-open span of time occupied by an existing calendar event.
#[derive(Debug, Clone, PartialEq)]
pub struct EventSpan {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// External calendar consulted for slot occupancy and event lifecycle.
///
/// When no backend is configured the booking service falls back to the fixed
/// business-hours window with no occupancy filtering.
#[async_trait]
pub trait CalendarBackend: Send + Sync {
    /// Events overlapping the given dealership-local day.
    async fn events_for_day(&self, date: NaiveDate) -> Result<Vec<EventSpan>, ShowroomError>;

    /// Creates an event for the appointment; returns the backend's event id.
    async fn create_event(&self, appointment: &Appointment) -> Result<String, ShowroomError>;

    /// Removes the event with the given backend id.
    async fn delete_event(&self, event_id: &str) -> Result<(), ShowroomError>;

    /// Moves the event with the given backend id to a new start time.
    async fn move_event(
        &self,
        event_id: &str,
        new_start: NaiveDateTime,
    ) -> Result<(), ShowroomError>;
}
