// SPDX-FileCopyrightText: 2026 Showroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The appointment book: slot availability plus appointment lifecycle.
//!
//! Appointments live in an in-memory map, optionally mirrored to an external
//! calendar. The in-memory variant is explicitly single-instance-only;
//! multi-instance deployments must swap in a shared external store behind
//! the same trait.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, NaiveDate, NaiveDateTime, Utc};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use showroom_config::model::DealershipConfig;
use showroom_core::types::{Appointment, AppointmentStatus, CarModel, CustomerInfo};
use showroom_core::{BookingService, CalendarBackend, EventSpan, ShowroomError};

use crate::{dates, slots};

struct BookedRecord {
    appointment: Appointment,
    calendar_event_id: Option<String>,
}

/// In-memory booking service with optional calendar mirroring.
pub struct AppointmentBook {
    settings: DealershipConfig,
    calendar: Option<Arc<dyn CalendarBackend>>,
    records: Mutex<HashMap<String, BookedRecord>>,
}

impl AppointmentBook {
    /// Creates a book with no calendar backend (fixed business-hours slots).
    pub fn new(settings: DealershipConfig) -> Self {
        Self {
            settings,
            calendar: None,
            records: Mutex::new(HashMap::new()),
        }
    }

    /// Creates a book that mirrors appointments into an external calendar
    /// and filters slots against its events.
    pub fn with_calendar(settings: DealershipConfig, calendar: Arc<dyn CalendarBackend>) -> Self {
        Self {
            settings,
            calendar: Some(calendar),
            records: Mutex::new(HashMap::new()),
        }
    }

    /// Marks an appointment completed after the visit.
    pub async fn complete(&self, appointment_id: &str) -> Result<Appointment, ShowroomError> {
        self.set_status(appointment_id, AppointmentStatus::Completed)
            .await
    }

    /// Marks an appointment as a no-show.
    pub async fn mark_no_show(&self, appointment_id: &str) -> Result<Appointment, ShowroomError> {
        self.set_status(appointment_id, AppointmentStatus::NoShow)
            .await
    }

    async fn set_status(
        &self,
        appointment_id: &str,
        status: AppointmentStatus,
    ) -> Result<Appointment, ShowroomError> {
        let mut records = self.records.lock().await;
        let record = records
            .get_mut(appointment_id)
            .ok_or_else(|| ShowroomError::not_found("appointment", appointment_id))?;
        record.appointment.status = status;
        Ok(record.appointment.clone())
    }

    /// Confirmed in-memory appointments on the given day, as occupancy spans.
    async fn local_occupancy(&self, date: NaiveDate) -> Vec<EventSpan> {
        let span = Duration::minutes(i64::from(self.settings.slot_minutes));
        self.records
            .lock()
            .await
            .values()
            .filter(|r| {
                r.appointment.status == AppointmentStatus::Confirmed
                    && r.appointment.date_time.date() == date
            })
            .map(|r| EventSpan {
                start: r.appointment.date_time,
                end: r.appointment.date_time + span,
            })
            .collect()
    }
}

#[async_trait]
impl BookingService for AppointmentBook {
    async fn check_availability(
        &self,
        date: NaiveDate,
        car: &CarModel,
    ) -> Result<Vec<NaiveDateTime>, ShowroomError> {
        let candidates = slots::generate_slots(
            date,
            self.settings.open_hour,
            self.settings.close_hour,
            self.settings.slot_minutes,
        );

        let mut events = self.local_occupancy(date).await;
        if let Some(calendar) = &self.calendar {
            match calendar.events_for_day(date).await {
                Ok(spans) => events.extend(spans),
                Err(e) => {
                    warn!(date = %date, error = %e, "calendar read failed, reporting no availability");
                    return Ok(Vec::new());
                }
            }
        }

        let free = slots::available_slots(&candidates, self.settings.slot_minutes, &events);
        debug!(
            date = %date,
            car_id = car.id.as_str(),
            candidates = candidates.len(),
            free = free.len(),
            "availability computed"
        );
        Ok(free)
    }

    async fn book(
        &self,
        customer: CustomerInfo,
        car: &CarModel,
        date_time: NaiveDateTime,
    ) -> Result<Appointment, ShowroomError> {
        let appointment = Appointment {
            id: dates::generate_appointment_id(&self.settings.appointment_prefix, date_time),
            car: car.clone(),
            date_time,
            customer,
            status: AppointmentStatus::Confirmed,
            notes: None,
            created_at: Utc::now(),
        };

        let calendar_event_id = match &self.calendar {
            Some(calendar) => Some(calendar.create_event(&appointment).await.map_err(|e| {
                ShowroomError::Booking(format!("failed to create calendar event: {e}"))
            })?),
            None => None,
        };

        info!(
            appointment_id = appointment.id.as_str(),
            car = car.name.as_str(),
            date_time = %date_time,
            "appointment booked"
        );

        self.records.lock().await.insert(
            appointment.id.clone(),
            BookedRecord {
                appointment: appointment.clone(),
                calendar_event_id,
            },
        );
        Ok(appointment)
    }

    async fn cancel(&self, appointment_id: &str) -> Result<Appointment, ShowroomError> {
        let mut records = self.records.lock().await;
        let record = records
            .get_mut(appointment_id)
            .ok_or_else(|| ShowroomError::not_found("appointment", appointment_id))?;

        if let (Some(calendar), Some(event_id)) = (&self.calendar, &record.calendar_event_id) {
            calendar.delete_event(event_id).await.map_err(|e| {
                ShowroomError::Booking(format!("failed to delete calendar event: {e}"))
            })?;
        }

        record.appointment.status = AppointmentStatus::Cancelled;
        info!(appointment_id, "appointment cancelled");
        Ok(record.appointment.clone())
    }

    async fn reschedule(
        &self,
        appointment_id: &str,
        new_date_time: NaiveDateTime,
    ) -> Result<Appointment, ShowroomError> {
        let mut records = self.records.lock().await;
        let record = records
            .get_mut(appointment_id)
            .ok_or_else(|| ShowroomError::not_found("appointment", appointment_id))?;

        if let (Some(calendar), Some(event_id)) = (&self.calendar, &record.calendar_event_id) {
            calendar.move_event(event_id, new_date_time).await.map_err(|e| {
                ShowroomError::Booking(format!("failed to move calendar event: {e}"))
            })?;
        }

        record.appointment.date_time = new_date_time;
        info!(appointment_id, new_date_time = %new_date_time, "appointment rescheduled");
        Ok(record.appointment.clone())
    }

    async fn appointments_for_phone(
        &self,
        phone: &str,
    ) -> Result<Vec<Appointment>, ShowroomError> {
        Ok(self
            .records
            .lock()
            .await
            .values()
            .filter(|r| {
                r.appointment.customer.phone == phone
                    && r.appointment.status == AppointmentStatus::Confirmed
            })
            .map(|r| r.appointment.clone())
            .collect())
    }
}
