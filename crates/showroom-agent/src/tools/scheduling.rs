// SPDX-FileCopyrightText: 2026 Showroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scheduling tools: availability, booking, cancellation, reschedule.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Local;
use tracing::warn;

use showroom_booking::dates;
use showroom_core::types::{CarModel, CustomerInfo};
use showroom_core::{BookingService, CatalogStore, OutboundChannel, ShowroomError};

use crate::render;
use crate::tools::{Tool, ToolOutcome, INVALID_CAR_ID};

const INVALID_DATE: &str = "Error: Invalid date. Use YYYY-MM-DD.";
const INVALID_DATETIME: &str = "Error: Invalid date_time. Use an ISO timestamp.";
const APPOINTMENT_NOT_FOUND: &str = "Error: Appointment not found.";
const NO_SLOTS: &str = "No available slots for this date.";

/// Resolves `model_id`, falling back to the first catalog model when the
/// argument is absent (availability is duration-uniform across the lineup).
async fn resolve_car(
    catalog: &Arc<dyn CatalogStore>,
    args: &serde_json::Value,
) -> Result<Option<CarModel>, ShowroomError> {
    match args["model_id"].as_str() {
        Some(id) if !id.is_empty() => catalog.get_by_id(id).await,
        _ => Ok(catalog.get_all().await?.into_iter().next()),
    }
}

/// Lists open test-drive slots for a date.
pub struct CheckTestDriveAvailability {
    pub catalog: Arc<dyn CatalogStore>,
    pub booking: Arc<dyn BookingService>,
}

#[async_trait]
impl Tool for CheckTestDriveAvailability {
    fn name(&self) -> &str {
        "check_test_drive_availability"
    }

    fn description(&self) -> &str {
        "Check available test drive slots for a specific date."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "date": {
                    "type": "string",
                    "description": "The date to check in YYYY-MM-DD format."
                },
                "model_id": {
                    "type": "string",
                    "description": "The ID of the car model (optional)."
                }
            },
            "required": ["date"]
        })
    }

    async fn invoke(
        &self,
        _sender_id: &str,
        args: serde_json::Value,
    ) -> Result<ToolOutcome, ShowroomError> {
        let Some(car) = resolve_car(&self.catalog, &args).await? else {
            return Ok(ToolOutcome::error(INVALID_CAR_ID));
        };

        let raw_date = args["date"].as_str().unwrap_or_default();
        let today = Local::now().date_naive();
        let Some(date) = dates::parse_user_date(raw_date, today) else {
            return Ok(ToolOutcome::error(INVALID_DATE));
        };

        let slots = self.booking.check_availability(date, &car).await?;
        if slots.is_empty() {
            return Ok(ToolOutcome::ok(NO_SLOTS));
        }

        let iso: Vec<String> = slots
            .iter()
            .map(|s| s.format("%Y-%m-%dT%H:%M:%S").to_string())
            .collect();
        Ok(ToolOutcome::ok(
            serde_json::to_string(&iso).unwrap_or_else(|_| iso.join(", ")),
        ))
    }
}

/// Books a test drive and sends the rich confirmation.
pub struct BookTestDrive {
    pub channel: Arc<dyn OutboundChannel>,
    pub catalog: Arc<dyn CatalogStore>,
    pub booking: Arc<dyn BookingService>,
}

#[async_trait]
impl Tool for BookTestDrive {
    fn name(&self) -> &str {
        "book_test_drive"
    }

    fn description(&self) -> &str {
        "Book a test drive appointment for a customer."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "model_id": {
                    "type": "string",
                    "description": "The ID of the car model."
                },
                "date_time": {
                    "type": "string",
                    "description": "The ISO string of the chosen date and time."
                },
                "customer_name": {
                    "type": "string",
                    "description": "The full name of the customer."
                },
                "customer_phone": {
                    "type": "string",
                    "description": "The phone number of the customer."
                }
            },
            "required": ["model_id", "date_time", "customer_name", "customer_phone"]
        })
    }

    async fn invoke(
        &self,
        sender_id: &str,
        args: serde_json::Value,
    ) -> Result<ToolOutcome, ShowroomError> {
        let model_id = args["model_id"].as_str().unwrap_or_default();
        let Some(car) = self.catalog.get_by_id(model_id).await? else {
            return Ok(ToolOutcome::error(INVALID_CAR_ID));
        };

        let raw = args["date_time"].as_str().unwrap_or_default();
        let Some(date_time) = dates::parse_iso_datetime(raw) else {
            return Ok(ToolOutcome::error(INVALID_DATETIME));
        };

        let customer = CustomerInfo {
            name: args["customer_name"].as_str().unwrap_or_default().to_string(),
            phone: args["customer_phone"].as_str().unwrap_or_default().to_string(),
            channel_user_id: sender_id.to_string(),
        };

        // A booking failure propagates: it must never read as success.
        let appointment = self.booking.book(customer, &car, date_time).await?;

        let confirmation = render::confirmation_text(&appointment);
        if let Err(e) = self.channel.send_text(sender_id, &confirmation).await {
            warn!(sender_id, error = %e, "failed to deliver booking confirmation");
        }

        Ok(ToolOutcome::ok(format!(
            "Successfully booked. Reference ID: {}",
            appointment.id
        )))
    }
}

/// Cancels an existing appointment.
pub struct CancelAppointment {
    pub booking: Arc<dyn BookingService>,
}

#[async_trait]
impl Tool for CancelAppointment {
    fn name(&self) -> &str {
        "cancel_appointment"
    }

    fn description(&self) -> &str {
        "Cancel an existing test drive appointment."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "appointment_id": {
                    "type": "string",
                    "description": "The reference ID of the appointment to cancel."
                }
            },
            "required": ["appointment_id"]
        })
    }

    async fn invoke(
        &self,
        _sender_id: &str,
        args: serde_json::Value,
    ) -> Result<ToolOutcome, ShowroomError> {
        let id = args["appointment_id"].as_str().unwrap_or_default();
        match self.booking.cancel(id).await {
            Ok(appointment) => Ok(ToolOutcome::ok(format!(
                "Appointment {} has been cancelled.",
                appointment.id
            ))),
            Err(ShowroomError::NotFound { .. }) => {
                Ok(ToolOutcome::error(APPOINTMENT_NOT_FOUND))
            }
            Err(e) => Err(e),
        }
    }
}

/// Moves an existing appointment to a new slot.
pub struct RescheduleAppointment {
    pub booking: Arc<dyn BookingService>,
}

#[async_trait]
impl Tool for RescheduleAppointment {
    fn name(&self) -> &str {
        "reschedule_appointment"
    }

    fn description(&self) -> &str {
        "Reschedule an existing test drive appointment to a new date and time."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "appointment_id": {
                    "type": "string",
                    "description": "The reference ID of the appointment to reschedule."
                },
                "date_time": {
                    "type": "string",
                    "description": "The new ISO string of the chosen date and time."
                }
            },
            "required": ["appointment_id", "date_time"]
        })
    }

    async fn invoke(
        &self,
        _sender_id: &str,
        args: serde_json::Value,
    ) -> Result<ToolOutcome, ShowroomError> {
        let id = args["appointment_id"].as_str().unwrap_or_default();
        let raw = args["date_time"].as_str().unwrap_or_default();
        let Some(date_time) = dates::parse_iso_datetime(raw) else {
            return Ok(ToolOutcome::error(INVALID_DATETIME));
        };

        match self.booking.reschedule(id, date_time).await {
            Ok(appointment) => Ok(ToolOutcome::ok(format!(
                "Appointment {} moved to {}.",
                appointment.id,
                dates::format_appointment_date_time(appointment.date_time)
            ))),
            Err(ShowroomError::NotFound { .. }) => {
                Ok(ToolOutcome::error(APPOINTMENT_NOT_FOUND))
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use showroom_booking::AppointmentBook;
    use showroom_catalog::StaticCatalog;
    use showroom_config::model::DealershipConfig;
    use showroom_test_utils::{Delivery, RecordingChannel};

    struct Fixture {
        channel: Arc<RecordingChannel>,
        catalog: Arc<StaticCatalog>,
        booking: Arc<AppointmentBook>,
    }

    fn fixture() -> Fixture {
        Fixture {
            channel: Arc::new(RecordingChannel::new()),
            catalog: Arc::new(StaticCatalog::seeded()),
            booking: Arc::new(AppointmentBook::new(DealershipConfig::default())),
        }
    }

    #[tokio::test]
    async fn availability_returns_iso_slot_list() {
        let f = fixture();
        let tool = CheckTestDriveAvailability {
            catalog: f.catalog.clone(),
            booking: f.booking.clone(),
        };
        let out = tool
            .invoke("U1", serde_json::json!({"date": "2026-08-15"}))
            .await
            .unwrap();

        assert!(!out.is_error);
        let slots: Vec<String> = serde_json::from_str(&out.content).unwrap();
        assert_eq!(slots.len(), 8);
        assert_eq!(slots[0], "2026-08-15T09:00:00");
    }

    #[tokio::test]
    async fn availability_rejects_unparseable_date() {
        let f = fixture();
        let tool = CheckTestDriveAvailability {
            catalog: f.catalog.clone(),
            booking: f.booking.clone(),
        };
        let out = tool
            .invoke("U1", serde_json::json!({"date": "someday"}))
            .await
            .unwrap();
        assert!(out.is_error);
    }

    #[tokio::test]
    async fn availability_without_model_uses_first_car() {
        let f = fixture();
        let tool = CheckTestDriveAvailability {
            catalog: f.catalog.clone(),
            booking: f.booking.clone(),
        };
        let out = tool
            .invoke("U1", serde_json::json!({"date": "2026-08-15"}))
            .await
            .unwrap();
        assert!(!out.is_error);
    }

    #[tokio::test]
    async fn booking_confirms_and_reports_reference() {
        let f = fixture();
        let tool = BookTestDrive {
            channel: f.channel.clone(),
            catalog: f.catalog.clone(),
            booking: f.booking.clone(),
        };
        let out = tool
            .invoke(
                "U1",
                serde_json::json!({
                    "model_id": "car_xpander_gls",
                    "date_time": "2026-08-15T10:00:00",
                    "customer_name": "Juan dela Cruz",
                    "customer_phone": "+639171234567"
                }),
            )
            .await
            .unwrap();

        assert!(out.content.starts_with("Successfully booked. Reference ID: APT-20260815-"));
        match &f.channel.deliveries()[..] {
            [Delivery::Text { text, .. }] => assert!(text.contains("Test Drive Confirmed")),
            other => panic!("expected confirmation text, got {other:?}"),
        }

        // The booked slot is now occupied.
        let avail = CheckTestDriveAvailability {
            catalog: f.catalog.clone(),
            booking: f.booking.clone(),
        };
        let out = avail
            .invoke("U1", serde_json::json!({"date": "2026-08-15"}))
            .await
            .unwrap();
        let slots: Vec<String> = serde_json::from_str(&out.content).unwrap();
        assert!(!slots.contains(&"2026-08-15T10:00:00".to_string()));
    }

    #[tokio::test]
    async fn booking_unknown_model_is_tool_error_not_failure() {
        let f = fixture();
        let tool = BookTestDrive {
            channel: f.channel.clone(),
            catalog: f.catalog.clone(),
            booking: f.booking.clone(),
        };
        let out = tool
            .invoke(
                "U1",
                serde_json::json!({
                    "model_id": "car_bogus",
                    "date_time": "2026-08-15T10:00:00",
                    "customer_name": "Juan",
                    "customer_phone": "123"
                }),
            )
            .await
            .unwrap();
        assert!(out.is_error);
        assert!(f.channel.deliveries().is_empty());
    }

    #[tokio::test]
    async fn cancel_round_trip_and_not_found() {
        let f = fixture();
        let book = BookTestDrive {
            channel: f.channel.clone(),
            catalog: f.catalog.clone(),
            booking: f.booking.clone(),
        };
        let out = book
            .invoke(
                "U1",
                serde_json::json!({
                    "model_id": "car_mirage_g4",
                    "date_time": "2026-08-15T11:00:00",
                    "customer_name": "Maria",
                    "customer_phone": "+639170000000"
                }),
            )
            .await
            .unwrap();
        let reference = out.content.rsplit(' ').next().unwrap().to_string();

        let cancel = CancelAppointment {
            booking: f.booking.clone(),
        };
        let out = cancel
            .invoke("U1", serde_json::json!({"appointment_id": reference}))
            .await
            .unwrap();
        assert!(out.content.contains("has been cancelled"));

        let out = cancel
            .invoke("U1", serde_json::json!({"appointment_id": "APT-00000000-000"}))
            .await
            .unwrap();
        assert!(out.is_error);
        assert_eq!(out.content, "Error: Appointment not found.");
    }

    #[tokio::test]
    async fn reschedule_moves_appointment() {
        let f = fixture();
        let book = BookTestDrive {
            channel: f.channel.clone(),
            catalog: f.catalog.clone(),
            booking: f.booking.clone(),
        };
        let out = book
            .invoke(
                "U1",
                serde_json::json!({
                    "model_id": "car_triton_athlete",
                    "date_time": "2026-08-15T09:00:00",
                    "customer_name": "Jose",
                    "customer_phone": "+639179999999"
                }),
            )
            .await
            .unwrap();
        let reference = out.content.rsplit(' ').next().unwrap().to_string();

        let tool = RescheduleAppointment {
            booking: f.booking.clone(),
        };
        let out = tool
            .invoke(
                "U1",
                serde_json::json!({
                    "appointment_id": reference,
                    "date_time": "2026-08-16T14:00:00"
                }),
            )
            .await
            .unwrap();
        assert!(out.content.contains("moved to August 16, 2026 at 2:00 PM"));
    }
}
